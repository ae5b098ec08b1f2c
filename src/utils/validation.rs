use crate::utils::error::{FilterError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(FilterError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(FilterError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// 來源與目的不可為同一檔案：建立目的檔會先清空來源
pub fn validate_distinct_paths(source: &str, destination: &str) -> Result<()> {
    let same = match (
        Path::new(source).canonicalize(),
        Path::new(destination).canonicalize(),
    ) {
        (Ok(a), Ok(b)) => a == b,
        _ => Path::new(source) == Path::new(destination),
    };

    if same {
        return Err(FilterError::InvalidConfigValue {
            field: "destination".to_string(),
            value: destination.to_string(),
            reason: format!("Destination must differ from source '{}'", source),
        });
    }
    Ok(())
}
