use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),

    #[error("Content parsing error in {field}: {message}")]
    ContentParseError { field: String, message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Rendering error: {message}")]
    RenderError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Content,
    Configuration,
    Rendering,
    Packaging,
}

/// Every error aborts the build; the level only picks the exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl SiteError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SiteError::IoError(_) => ErrorCategory::Io,
            SiteError::ZipError(_) => ErrorCategory::Packaging,
            SiteError::SerializationError(_)
            | SiteError::TomlSerializeError(_)
            | SiteError::ContentParseError { .. } => ErrorCategory::Content,
            SiteError::MissingConfigError { .. } | SiteError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            SiteError::RenderError { .. } => ErrorCategory::Rendering,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 打包失敗時 index.html 已經寫出
            SiteError::ZipError(_) => ErrorSeverity::Medium,
            SiteError::IoError(_) => ErrorSeverity::Critical,
            SiteError::RenderError { .. } => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Io => "Check that the output directory is writable and the disk is not full",
            ErrorCategory::Content => {
                "Check the content file syntax; run with --dump-content to see a valid example"
            }
            ErrorCategory::Configuration => "Fix the reported field and run the command again",
            ErrorCategory::Rendering => "Re-run with --verbose and report the logged item",
            ErrorCategory::Packaging => {
                "The page was written; retry without --archive or free disk space"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SiteError::IoError(e) => format!("Could not read or write a file: {}", e),
            SiteError::ContentParseError { message, .. } => {
                format!("The content file could not be parsed: {}", message)
            }
            SiteError::MissingConfigError { field } => {
                format!("Required setting '{}' is missing", field)
            }
            SiteError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            SiteError::ZipError(e) => format!("Could not build the site archive: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
