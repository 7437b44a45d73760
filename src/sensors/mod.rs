//! Sensor module - reading providers

mod dataset;
mod simulator;
mod traits;

pub use dataset::{parse_dataset, DatasetSource, REQUIRED_COLUMNS};
pub use simulator::SyntheticSource;
pub use traits::{Reading, ReadingSource, SourceKind, Weather};

use tracing::info;

use crate::config::SourceConfig;
use crate::error::{MonitorError, Result};

/// Build the provider for `kind` from configuration.
///
/// Dataset kinds load their resource here, so a missing or malformed file
/// surfaces as `SourceUnavailable` before any tick runs.
pub fn open_source(kind: SourceKind, config: &SourceConfig) -> Result<Box<dyn ReadingSource>> {
    let source: Box<dyn ReadingSource> = match kind {
        SourceKind::Synthetic => match config.seed {
            Some(seed) => Box::new(SyntheticSource::with_seed(seed)),
            None => Box::new(SyntheticSource::new()),
        },
        SourceKind::Static => Box::new(DatasetSource::open(kind, &config.static_dataset)?),
        SourceKind::External => {
            let path = config
                .external_dataset
                .as_deref()
                .ok_or_else(|| {
                    MonitorError::unavailable("external dataset", "no dataset supplied")
                })?;
            Box::new(DatasetSource::open(kind, path)?)
        }
    };

    info!("Opened {} source: {}", kind, source.name());
    Ok(source)
}
