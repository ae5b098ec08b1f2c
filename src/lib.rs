pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, toml_config::TomlConfig, FilterConfig};
pub use core::{engine::FilterEngine, filter::LineFilter};
pub use domain::model::{FilterReport, FilterStats};
pub use utils::error::{FilterError, Result};
