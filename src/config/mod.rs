pub mod cli;
pub mod content_file;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum DumpFormat {
    #[default]
    Toml,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "portfolio-site")]
#[command(about = "Generate a static, animated personal portfolio page")]
pub struct CliConfig {
    /// TOML content file; the built-in content is used when omitted
    #[arg(short, long)]
    pub content: Option<String>,

    #[arg(short, long, default_value = "./dist")]
    pub output_path: String,

    /// Directory to copy the profile image and resume document from
    #[arg(long)]
    pub assets: Option<String>,

    /// Also write site.zip with every generated file
    #[arg(long)]
    pub archive: bool,

    /// Print the active content and exit
    #[arg(long)]
    pub dump_content: bool,

    #[arg(long, value_enum, default_value_t = DumpFormat::Toml)]
    pub dump_format: DumpFormat,

    /// Render and report without writing anything
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("output_path", &self.output_path)?;
        if let Some(content) = &self.content {
            validate_path("content", content)?;
        }
        if let Some(assets) = &self.assets {
            validate_path("assets", assets)?;
        }
        Ok(())
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn assets_dir(&self) -> Option<&str> {
        self.assets.as_deref()
    }

    fn archive(&self) -> bool {
        self.archive
    }
}

/// Output settings without the CLI layer, for embedding the generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    pub output_path: String,
    #[serde(default)]
    pub assets_dir: Option<String>,
    #[serde(default)]
    pub archive: bool,
}

impl BuildConfig {
    pub fn new(output_path: impl Into<String>) -> Self {
        Self {
            output_path: output_path.into(),
            assets_dir: None,
            archive: false,
        }
    }
}

impl Validate for BuildConfig {
    fn validate(&self) -> Result<()> {
        validate_path("output_path", &self.output_path)?;
        if let Some(assets) = &self.assets_dir {
            validate_path("assets_dir", assets)?;
        }
        Ok(())
    }
}

impl ConfigProvider for BuildConfig {
    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn assets_dir(&self) -> Option<&str> {
        self.assets_dir.as_deref()
    }

    fn archive(&self) -> bool {
        self.archive
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let config = CliConfig::parse_from(["portfolio-site"]);
        assert_eq!(config.output_path, "./dist");
        assert!(config.content.is_none());
        assert!(!config.archive);
        assert_eq!(config.dump_format, DumpFormat::Toml);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cli_flags() {
        let config = CliConfig::parse_from([
            "portfolio-site",
            "--content",
            "site.toml",
            "-o",
            "public",
            "--archive",
            "--dump-content",
            "--dump-format",
            "json",
        ]);
        assert_eq!(config.content.as_deref(), Some("site.toml"));
        assert_eq!(config.output_path(), "public");
        assert!(config.archive());
        assert!(config.dump_content);
        assert_eq!(config.dump_format, DumpFormat::Json);
    }

    #[test]
    fn test_empty_output_path_rejected() {
        let config = CliConfig::parse_from(["portfolio-site", "-o", ""]);
        assert!(config.validate().is_err());
    }
}
