pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::domain::model::{Mode, OutputFormat};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_COLORS_FILE: &str = "colors.txt";
pub const DEFAULT_PRECISION: u32 = 2;
pub const MAX_PRECISION: u32 = 10;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "color-mixer")]
#[command(about = "Mix hex and RGBA colors from a file and the command line into one color")]
pub struct CliConfig {
    /// Colors to mix after the ones from the colors file (hex or r,g,b,a)
    pub colors: Vec<String>,

    #[arg(
        short,
        long,
        default_value = "mix",
        help = "select script mode: mix, lowest, highest, mix-saturate"
    )]
    pub mode: String,

    #[arg(short, long, default_value = DEFAULT_COLORS_FILE, help = "File with one color per line")]
    pub file: String,

    #[arg(long, help = "Ignore the colors file")]
    pub no_file: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(long, default_value_t = DEFAULT_PRECISION, help = "Decimal places for HSL values")]
    pub precision: u32,

    #[arg(short, long, help = "Also write the report to this file")]
    pub output: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn mode(&self) -> Mode {
        Mode::resolve(&self.mode)
    }

    fn colors_file(&self) -> Option<&str> {
        if self.no_file {
            None
        } else {
            Some(&self.file)
        }
    }

    fn cli_colors(&self) -> &[String] {
        &self.colors
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }

    fn precision(&self) -> u32 {
        self.precision
    }

    fn output_path(&self) -> Option<&str> {
        self.output.as_deref()
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if !self.no_file {
            validation::validate_path("file", &self.file)?;
        }
        validation::validate_range("precision", self.precision, 0, MAX_PRECISION)?;
        validation::validate_optional_path("output", self.output.as_deref())?;
        Ok(())
    }
}
