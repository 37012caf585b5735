use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct MixEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> MixEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Returns the rendered report.
    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting color mixing...");

        // Extract
        tracing::debug!("Collecting color tokens...");
        let tokens = self.pipeline.extract().await?;
        tracing::info!("Collected {} color tokens", tokens.len());

        // Transform
        tracing::debug!("Mixing colors...");
        let outcome = self.pipeline.transform(tokens).await?;
        tracing::info!(
            "Mixed {} colors with mode {} ({} ignored)",
            outcome.accepted,
            outcome.mode,
            outcome.rejected.len()
        );

        // Load
        tracing::debug!("Rendering report...");
        let report = self.pipeline.load(outcome).await?;

        Ok(report)
    }
}
