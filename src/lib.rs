pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{cli::LocalStorage, toml_config::TomlConfig};
pub use crate::core::{etl::MixEngine, mixer::run, pipeline::MixerPipeline};
pub use crate::domain::model::{
    AggregationResult, Color, Hsl, MixOutcome, MixRequest, Mode, OutputFormat, RawToken,
    Rejection, RejectionKind, TokenOrigin,
};
pub use crate::utils::error::{MixerError, Result};
