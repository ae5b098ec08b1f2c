use crate::core::Storage;
use crate::utils::error::{FilterError, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// File system storage. The destination is created or truncated; missing
/// parent directories are not created.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    type Reader = BufReader<File>;
    type Writer = BufWriter<File>;

    fn open_source(&self, path: &Path) -> Result<Self::Reader> {
        let file = File::open(path).map_err(|source| FilterError::SourceNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(BufReader::new(file))
    }

    fn create_destination(&self, path: &Path) -> Result<Self::Writer> {
        let file = File::create(path).map_err(|source| FilterError::DestinationNotWritable {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(BufWriter::new(file))
    }
}
