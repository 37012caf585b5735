use crate::core::{mixer, report, ConfigProvider, Pipeline, Storage};
use crate::domain::model::{MixOutcome, MixRequest, RawToken};
use crate::utils::error::{MixerError, Result};

pub struct MixerPipeline<S: Storage, C: ConfigProvider> {
    pub(crate) storage: S,
    pub(crate) config: C,
}

impl<S: Storage, C: ConfigProvider> MixerPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    /// Lines of the colors file, or nothing when the file is absent.
    async fn read_colors_file(&self, path: &str) -> Result<Vec<RawToken>> {
        match self.storage.read_file(path).await {
            Ok(data) => {
                let content = String::from_utf8_lossy(&data);
                let tokens = RawToken::from_lines(&content);
                tracing::debug!("Read {} color lines from {}", tokens.len(), path);
                Ok(tokens)
            }
            Err(MixerError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!("⚠️ Colors file {} not found, using CLI colors only", path);
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for MixerPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<RawToken>> {
        // 先讀檔案，再讀命令列參數
        let mut tokens = match self.config.colors_file() {
            Some(path) => self.read_colors_file(path).await?,
            None => Vec::new(),
        };

        tokens.extend(RawToken::from_args(self.config.cli_colors()));
        Ok(tokens)
    }

    async fn transform(&self, tokens: Vec<RawToken>) -> Result<MixOutcome> {
        let request = MixRequest {
            mode: self.config.mode(),
            tokens,
        };

        let outcome = mixer::run(&request)?;

        for rejection in &outcome.rejected {
            tracing::warn!(
                "⚠️ {} at {}. The color was ignored",
                rejection.reason,
                rejection.origin
            );
        }

        Ok(outcome)
    }

    async fn load(&self, outcome: MixOutcome) -> Result<String> {
        let rendered = report::render(
            &outcome,
            self.config.output_format(),
            self.config.precision(),
        )?;

        if let Some(path) = self.config.output_path() {
            tracing::debug!("Writing report ({} bytes) to {}", rendered.len(), path);
            self.storage.write_file(path, rendered.as_bytes()).await?;
            tracing::info!("📁 Report saved to: {}", path);
        }

        Ok(rendered)
    }
}
