pub mod cli;
pub mod toml_config;

use crate::config::toml_config::TomlConfig;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_distinct_paths, validate_path, Validate};
use std::path::Path;

pub const DEFAULT_SOURCE: &str = "assets/katex.css";
pub const DEFAULT_DESTINATION: &str = "katex.css";

/// Resolved source and destination for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    pub source: String,
    pub destination: String,
}

impl FilterConfig {
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }

    /// 優先順序：命令列 > TOML 檔 > 內建預設值
    pub fn resolve(
        source: Option<String>,
        destination: Option<String>,
        file: Option<&TomlConfig>,
    ) -> Self {
        let paths = file.map(|c| &c.paths);

        Self {
            source: source
                .or_else(|| paths.and_then(|p| p.source.clone()))
                .unwrap_or_else(|| DEFAULT_SOURCE.to_string()),
            destination: destination
                .or_else(|| paths.and_then(|p| p.destination.clone()))
                .unwrap_or_else(|| DEFAULT_DESTINATION.to_string()),
        }
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE, DEFAULT_DESTINATION)
    }
}

impl ConfigProvider for FilterConfig {
    fn source_path(&self) -> &Path {
        Path::new(&self.source)
    }

    fn destination_path(&self) -> &Path {
        Path::new(&self.destination)
    }
}

impl Validate for FilterConfig {
    fn validate(&self) -> Result<()> {
        validate_path("source", &self.source)?;
        validate_path("destination", &self.destination)?;
        validate_distinct_paths(&self.source, &self.destination)
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "css-woff2-filter")]
#[command(about = "Keep only the woff2 entry of font src lists in a CSS file")]
pub struct CliConfig {
    /// Stylesheet to read [default: assets/katex.css]
    #[arg(long)]
    pub source: Option<String>,

    /// File to write, created or overwritten [default: katex.css]
    #[arg(long)]
    pub destination: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_fixed_paths() {
        let config = FilterConfig::resolve(None, None, None);
        assert_eq!(config, FilterConfig::default());
        assert_eq!(config.source_path(), Path::new("assets/katex.css"));
        assert_eq!(config.destination_path(), Path::new("katex.css"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_flags_override_file() {
        let file = TomlConfig::from_toml_str(
            "[paths]\nsource = \"file.css\"\ndestination = \"file-out.css\"",
        )
        .unwrap();

        let config = FilterConfig::resolve(Some("flag.css".to_string()), None, Some(&file));
        assert_eq!(config.source, "flag.css");
        assert_eq!(config.destination, "file-out.css");
    }

    #[test]
    fn test_same_source_and_destination_is_invalid() {
        let config = FilterConfig::new("katex.css", "katex.css");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_destination_is_invalid() {
        let config = FilterConfig::new("assets/katex.css", "");
        assert!(config.validate().is_err());
    }
}
