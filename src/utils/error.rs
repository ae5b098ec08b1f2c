use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Source file cannot be opened: {}: {source}", path.display())]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Destination file cannot be created: {}: {source}", path.display())]
    DestinationNotWritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Source,
    Destination,
    Io,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl FilterError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FilterError::SourceNotFound { .. } => ErrorCategory::Source,
            FilterError::DestinationNotWritable { .. } => ErrorCategory::Destination,
            FilterError::Io(_) => ErrorCategory::Io,
            FilterError::TomlParse(_)
            | FilterError::Config { .. }
            | FilterError::InvalidConfigValue { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::Source | ErrorCategory::Destination => ErrorSeverity::High,
            // 寫到一半失敗，目的檔可能已被截斷
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    /// 行程結束代碼，永遠不為 0
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FilterError::SourceNotFound { path, .. } => {
                format!("Cannot read stylesheet '{}'", path.display())
            }
            FilterError::DestinationNotWritable { path, .. } => {
                format!("Cannot write filtered stylesheet '{}'", path.display())
            }
            FilterError::Io(e) => format!("Filtering stopped midway: {}", e),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Source => "Check that the source path exists and is readable",
            ErrorCategory::Destination => {
                "Check that the destination directory exists and is writable"
            }
            ErrorCategory::Io => {
                "The destination may be truncated; make sure the source is UTF-8 text and rerun"
            }
            ErrorCategory::Configuration => "Fix the command-line flags or the TOML config file",
        }
    }
}

pub type Result<T> = std::result::Result<T, FilterError>;
