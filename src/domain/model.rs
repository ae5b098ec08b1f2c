use std::path::PathBuf;

/// Per-run line counters. `lines_read == lines_written` after every successful run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterStats {
    pub lines_read: usize,
    pub lines_written: usize,
    pub lines_rewritten: usize,
    pub lines_copied: usize,
}

#[derive(Debug, Clone)]
pub struct FilterReport {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub stats: FilterStats,
}
