use crate::core::filter::LineFilter;
use crate::core::{ConfigProvider, FilterReport, Storage};
use crate::utils::error::Result;

pub struct FilterEngine<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    filter: LineFilter,
}

impl<S: Storage, C: ConfigProvider> FilterEngine<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            filter: LineFilter::new(),
        }
    }

    /// Open → Iterating → Closed. Both handles are dropped before returning,
    /// whether the run succeeds or not.
    pub fn run(&self) -> Result<FilterReport> {
        let source = self.config.source_path();
        let destination = self.config.destination_path();

        tracing::info!("Starting stylesheet filter: {}", source.display());

        // 先開來源再建立目的，來源不存在時不會留下空檔案
        let reader = self.storage.open_source(source)?;
        let writer = self.storage.create_destination(destination)?;

        let stats = self.filter.filter(reader, writer)?;

        tracing::info!(
            "Filtered {} lines ({} truncated, {} copied) into {}",
            stats.lines_read,
            stats.lines_rewritten,
            stats.lines_copied,
            destination.display()
        );

        Ok(FilterReport {
            source: source.to_path_buf(),
            destination: destination.to_path_buf(),
            stats,
        })
    }
}
