use crate::utils::error::Result;
use std::io::{BufRead, Write};
use std::path::Path;

/// Where the source lines come from and where the filtered lines go.
///
/// Handles are owned by the caller and closed when dropped, so both files
/// are released on every exit path.
pub trait Storage {
    type Reader: BufRead;
    type Writer: Write;

    fn open_source(&self, path: &Path) -> Result<Self::Reader>;
    fn create_destination(&self, path: &Path) -> Result<Self::Writer>;
}

pub trait ConfigProvider {
    fn source_path(&self) -> &Path;
    fn destination_path(&self) -> &Path;
}
