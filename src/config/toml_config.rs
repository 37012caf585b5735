use crate::config::{DEFAULT_PRECISION, MAX_PRECISION};
use crate::core::ConfigProvider;
use crate::domain::model::{Mode, OutputFormat};
use crate::utils::error::{MixerError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub mixer: MixerSection,
    pub output: Option<OutputSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MixerSection {
    pub mode: Option<String>,
    pub colors_file: Option<String>, // 未設定時不讀取檔案
    #[serde(default)]
    pub colors: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputSection {
    pub format: Option<OutputFormat>,
    pub precision: Option<u32>,
    pub path: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(MixerError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| MixerError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${COLORS_FILE})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| MixerError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_optional_path("mixer.colors_file", self.mixer.colors_file.as_deref())?;

        if self.mixer.colors_file.is_none() && self.mixer.colors.is_empty() {
            return Err(MixerError::MissingConfigError {
                field: "mixer.colors_file or mixer.colors".to_string(),
            });
        }

        validation::validate_range("output.precision", self.precision(), 0, MAX_PRECISION)?;
        validation::validate_optional_path("output.path", self.output_path())?;

        Ok(())
    }

    pub fn mode_name(&self) -> &str {
        self.mixer.mode.as_deref().unwrap_or("mix")
    }

    pub fn set_mode(&mut self, mode: impl Into<String>) {
        self.mixer.mode = Some(mode.into());
    }

    pub fn set_output_format(&mut self, format: OutputFormat) {
        self.output.get_or_insert_with(OutputSection::default).format = Some(format);
    }

    fn output_section(&self) -> Option<&OutputSection> {
        self.output.as_ref()
    }
}

impl ConfigProvider for TomlConfig {
    fn mode(&self) -> Mode {
        Mode::resolve(self.mode_name())
    }

    fn colors_file(&self) -> Option<&str> {
        self.mixer.colors_file.as_deref()
    }

    fn cli_colors(&self) -> &[String] {
        &self.mixer.colors
    }

    fn output_format(&self) -> OutputFormat {
        self.output_section()
            .and_then(|o| o.format)
            .unwrap_or_default()
    }

    fn precision(&self) -> u32 {
        self.output_section()
            .and_then(|o| o.precision)
            .unwrap_or(DEFAULT_PRECISION)
    }

    fn output_path(&self) -> Option<&str> {
        self.output_section().and_then(|o| o.path.as_deref())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
