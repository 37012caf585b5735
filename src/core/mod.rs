pub mod aggregator;
pub mod collection;
pub mod conversion;
pub mod etl;
pub mod mixer;
pub mod parser;
pub mod pipeline;
pub mod report;

pub use crate::domain::model::{AggregationResult, Color, Hsl, MixOutcome, MixRequest, Mode};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
