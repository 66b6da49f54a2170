use crate::config::cli::LocalStorage;
use crate::core::{ConfigProvider, ContentSource, Pipeline, RenderedSite, SiteContent, Storage};
use crate::domain::model::SiteFile;
use crate::render::{AnimationSettings, PageShell};
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use std::io::Write;
use zip::write::{SimpleFileOptions, ZipWriter};

pub const INDEX_FILE: &str = "index.html";
pub const ARCHIVE_FILE: &str = "site.zip";

/// Same-origin files the page links to that should be copied.
fn linked_assets(content: &SiteContent) -> Vec<String> {
    let mut assets = Vec::new();
    if let Some(image) = &content.content.profile.image {
        assets.push(image.clone());
    }
    assets.push(content.content.links.resume.clone());

    assets
        .into_iter()
        .map(|link| link.trim_start_matches('/').to_string())
        .filter(|link| !link.is_empty() && !link.contains("://") && !link.contains(".."))
        .collect()
}

/// Load content, render the page, write it out.
///
/// Linked assets are read from `A`, a storage rooted at the assets directory.
pub struct SitePipeline<S: Storage, C: ConfigProvider, Src: ContentSource, A: Storage = LocalStorage>
{
    storage: S,
    config: C,
    source: Src,
    assets: Option<A>,
    generated_at: Option<DateTime<Utc>>,
}

impl<S: Storage, C: ConfigProvider, Src: ContentSource> SitePipeline<S, C, Src, LocalStorage> {
    pub fn new(storage: S, config: C, source: Src) -> Self {
        let assets = config
            .assets_dir()
            .map(|dir| LocalStorage::new(dir.to_string()));
        Self {
            storage,
            config,
            source,
            assets,
            generated_at: None,
        }
    }
}

impl<S: Storage, C: ConfigProvider, Src: ContentSource, A: Storage> SitePipeline<S, C, Src, A> {
    /// Read linked assets from `assets` instead of the configured directory.
    pub fn with_asset_storage<B: Storage>(self, assets: B) -> SitePipeline<S, C, Src, B> {
        SitePipeline {
            storage: self.storage,
            config: self.config,
            source: self.source,
            assets: Some(assets),
            generated_at: self.generated_at,
        }
    }

    /// Fix the page timestamp instead of using the current time.
    pub fn with_timestamp(mut self, at: DateTime<Utc>) -> Self {
        self.generated_at = Some(at);
        self
    }

    async fn collect_assets(&self, content: &SiteContent) -> Vec<SiteFile> {
        let Some(assets) = &self.assets else {
            return Vec::new();
        };

        let mut files = Vec::new();
        for asset in linked_assets(content) {
            match assets.read_file(&asset).await {
                Ok(bytes) => {
                    tracing::debug!("Copying asset {} ({} bytes)", asset, bytes.len());
                    files.push(SiteFile { path: asset, bytes });
                }
                // 缺少的資源只會在頁面上顯示為失效連結
                Err(e) => tracing::debug!("Skipping asset {}: {}", assets.location(&asset), e),
            }
        }
        files
    }

    fn build_archive(site: &RenderedSite) -> Result<Vec<u8>> {
        let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        for file in &site.files {
            zip.start_file(file.path.as_str(), options)?;
            zip.write_all(&file.bytes)?;
        }

        let cursor = zip.finish()?;
        Ok(cursor.into_inner())
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider, Src: ContentSource, A: Storage> Pipeline
    for SitePipeline<S, C, Src, A>
{
    async fn extract(&self) -> Result<SiteContent> {
        let site = self.source.load()?;
        tracing::debug!(
            "Content: {} skills, {} experiences, {} projects",
            site.content.skills.len(),
            site.content.experiences.len(),
            site.content.projects.len()
        );
        Ok(site)
    }

    async fn transform(&self, content: SiteContent) -> Result<RenderedSite> {
        let settings = AnimationSettings::with_overrides(&content.animation);
        let generated_at = self.generated_at.unwrap_or_else(Utc::now);

        let page = PageShell::new(&content.content, &settings)
            .generated_at(generated_at)
            .render();
        tracing::debug!(
            "Rendered page: {} skills, {} experience, {} projects, {} bytes",
            page.counts.skills,
            page.counts.experience,
            page.counts.projects,
            page.html.len()
        );

        let mut files = vec![SiteFile {
            path: INDEX_FILE.to_string(),
            bytes: page.html.into_bytes(),
        }];
        files.extend(self.collect_assets(&content).await);

        Ok(RenderedSite { files })
    }

    async fn load(&self, site: RenderedSite) -> Result<String> {
        for file in &site.files {
            tracing::debug!("Writing {} ({} bytes)", file.path, file.bytes.len());
            self.storage.write_file(&file.path, &file.bytes).await?;
        }

        if self.config.archive() {
            let archive = Self::build_archive(&site)?;
            tracing::debug!("Writing ZIP file ({} bytes) to storage", archive.len());
            self.storage.write_file(ARCHIVE_FILE, &archive).await?;
        }

        Ok(self.storage.location(INDEX_FILE))
    }
}
