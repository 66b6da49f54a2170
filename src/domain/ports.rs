use crate::domain::model::{RenderedSite, SiteContent};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    /// Where `path` lands, for reporting.
    fn location(&self, path: &str) -> String;
}

pub trait ConfigProvider: Send + Sync {
    fn output_path(&self) -> &str;
    /// Directory holding the profile image and resume document, if any.
    fn assets_dir(&self) -> Option<&str>;
    fn archive(&self) -> bool;
}

pub trait ContentSource: Send + Sync {
    fn load(&self) -> Result<SiteContent>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<SiteContent>;
    async fn transform(&self, content: SiteContent) -> Result<RenderedSite>;
    async fn load(&self, site: RenderedSite) -> Result<String>;
}

impl<T: ContentSource + ?Sized> ContentSource for Box<T> {
    fn load(&self) -> Result<SiteContent> {
        (**self).load()
    }
}
