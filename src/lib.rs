pub mod config;
pub mod core;
pub mod domain;
pub mod render;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::cli::LocalStorage;
pub use config::content_file::{BuiltinContent, ContentFile, FileContent};
pub use config::BuildConfig;
pub use core::{builder::SiteBuilder, pipeline::SitePipeline};
pub use domain::model::ContentData;
pub use utils::error::{Result, SiteError};
