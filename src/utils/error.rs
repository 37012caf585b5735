use thiserror::Error;

#[derive(Error, Debug)]
pub enum MixerError {
    #[error("Invalid color format: {token}")]
    FormatError { token: String },

    #[error("Invalid value in {token}: {channel} = {value} (must be between 0 and 255)")]
    RangeError {
        token: String,
        channel: &'static str,
        value: u16,
    },

    #[error("No valid colors were found - can not create a new color from nothing")]
    EmptyInputError,

    #[error("Mode {mode} needs at least {required} valid colors, found {found}")]
    InsufficientInputError {
        mode: String,
        required: usize,
        found: usize,
    },

    #[error("Invalid mode: {mode}. Valid modes: mix, lowest, highest, mix-saturate")]
    InvalidModeError { mode: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Aggregation,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit code; `Low` means the run still succeeded.
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl MixerError {
    pub fn exit_code(&self) -> i32 {
        self.severity().exit_code()
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            MixerError::FormatError { .. }
            | MixerError::RangeError { .. }
            | MixerError::InvalidModeError { .. } => ErrorCategory::Input,
            MixerError::EmptyInputError | MixerError::InsufficientInputError { .. } => {
                ErrorCategory::Aggregation
            }
            MixerError::ConfigError { .. }
            | MixerError::ConfigValidationError { .. }
            | MixerError::InvalidConfigValueError { .. }
            | MixerError::MissingConfigError { .. } => ErrorCategory::Configuration,
            MixerError::IoError(_) | MixerError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 單一顏色被丟棄，不影響整體執行
            MixerError::FormatError { .. }
            | MixerError::RangeError { .. }
            | MixerError::InvalidModeError { .. } => ErrorSeverity::Low,
            MixerError::ConfigError { .. }
            | MixerError::ConfigValidationError { .. }
            | MixerError::InvalidConfigValueError { .. }
            | MixerError::MissingConfigError { .. } => ErrorSeverity::Medium,
            MixerError::EmptyInputError | MixerError::InsufficientInputError { .. } => {
                ErrorSeverity::High
            }
            MixerError::IoError(_) | MixerError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    /// Errors that only drop a single token or fall back to a default.
    pub fn is_recoverable(&self) -> bool {
        self.severity() == ErrorSeverity::Low
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            MixerError::FormatError { token } => {
                format!("'{}' is neither a hex color nor an r,g,b,a tuple", token)
            }
            MixerError::RangeError {
                token,
                channel,
                value,
            } => format!(
                "'{}' has {} = {}, channels must be between 0 and 255",
                token, channel, value
            ),
            MixerError::EmptyInputError => {
                "No valid colors were found, there is nothing to mix".to_string()
            }
            MixerError::InsufficientInputError {
                mode,
                required,
                found,
            } => format!(
                "Mode '{}' needs at least {} valid colors but only {} were given",
                mode, required, found
            ),
            MixerError::InvalidModeError { mode } => format!("Unknown mode '{}'", mode),
            MixerError::IoError(e) => format!("Could not read or write a file: {}", e),
            MixerError::SerializationError(e) => format!("Could not render the report: {}", e),
            _ => format!("Invalid configuration: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self.category() {
            ErrorCategory::Input => {
                "Use #rgb, #rrggbb, #rrggbbaa or r,g,b,a with channels in 0-255".to_string()
            }
            ErrorCategory::Aggregation => match self {
                MixerError::InsufficientInputError { .. } => {
                    "Pass at least two valid colors or pick another mode".to_string()
                }
                _ => "Add colors to the colors file or pass them as arguments".to_string(),
            },
            ErrorCategory::Configuration => {
                "Check the command line flags or the TOML configuration file".to_string()
            }
            ErrorCategory::System => {
                "Check that the files exist and are readable/writable".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, MixerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_errors_are_recoverable() {
        let format = MixerError::FormatError {
            token: "zz0000".to_string(),
        };
        let range = MixerError::RangeError {
            token: "256,0,0,255".to_string(),
            channel: "red",
            value: 256,
        };

        assert!(format.is_recoverable());
        assert!(range.is_recoverable());
        assert_eq!(format.category(), ErrorCategory::Input);
    }

    #[test]
    fn test_aggregation_errors_are_fatal() {
        let empty = MixerError::EmptyInputError;
        let insufficient = MixerError::InsufficientInputError {
            mode: "mix-saturate".to_string(),
            required: 2,
            found: 1,
        };

        assert!(!empty.is_recoverable());
        assert_eq!(empty.severity(), ErrorSeverity::High);
        assert_eq!(insufficient.category(), ErrorCategory::Aggregation);
        assert!(insufficient.recovery_suggestion().contains("two"));
    }

    #[test]
    fn test_exit_codes_follow_severity() {
        let validation = MixerError::InvalidConfigValueError {
            field: "precision".to_string(),
            value: "42".to_string(),
            reason: "Value must be between 0 and 10".to_string(),
        };
        let missing_file = MixerError::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "mixer.toml",
        ));

        assert_eq!(validation.exit_code(), 2);
        assert_eq!(missing_file.exit_code(), 3);
        assert_eq!(MixerError::EmptyInputError.exit_code(), 1);
        assert_eq!(
            MixerError::InvalidModeError {
                mode: "blend".to_string()
            }
            .exit_code(),
            0
        );
    }

    #[test]
    fn test_range_error_message_names_channel() {
        let err = MixerError::RangeError {
            token: "0,0,300,255".to_string(),
            channel: "blue",
            value: 300,
        };
        assert!(err.to_string().contains("blue = 300"));
    }
}
