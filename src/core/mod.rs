pub mod engine;
pub mod filter;
pub mod rule;

pub use crate::domain::model::{FilterReport, FilterStats};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
