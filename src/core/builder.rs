use crate::core::{Pipeline, RenderedSite};
use crate::utils::error::Result;
use std::time::Instant;

pub struct SiteBuilder<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> SiteBuilder<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Extract and render only; nothing is written.
    pub async fn preview(&self) -> Result<RenderedSite> {
        let started = Instant::now();

        tracing::info!("📥 Loading content...");
        let content = self.pipeline.extract().await?;

        tracing::info!("🎨 Rendering page...");
        let site = self.pipeline.transform(content).await?;
        tracing::info!(
            "Rendered {} files in {:?}",
            site.files.len(),
            started.elapsed()
        );

        Ok(site)
    }

    /// Returns where the page was written.
    pub async fn run(&self) -> Result<String> {
        tracing::info!("🚀 Starting site build...");
        let started = Instant::now();

        let site = self.preview().await?;

        tracing::info!("💾 Writing output...");
        let output_path = self.pipeline.load(site).await?;
        tracing::info!("Site written in {:?}", started.elapsed());

        Ok(output_path)
    }
}
