use crate::domain::model::{Mode, MixOutcome, OutputFormat, RawToken};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn mode(&self) -> Mode;
    /// `None` means the colors file is skipped.
    fn colors_file(&self) -> Option<&str>;
    fn cli_colors(&self) -> &[String];
    fn output_format(&self) -> OutputFormat;
    fn precision(&self) -> u32;
    fn output_path(&self) -> Option<&str>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<RawToken>>;
    async fn transform(&self, tokens: Vec<RawToken>) -> Result<MixOutcome>;
    async fn load(&self, outcome: MixOutcome) -> Result<String>;
}
