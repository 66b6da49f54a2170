pub mod builder;
pub mod pipeline;

pub use crate::domain::model::{RenderedSite, SiteContent};
pub use crate::domain::ports::{ConfigProvider, ContentSource, Pipeline, Storage};
pub use crate::utils::error::Result;
