//! One export run: fetch, filter, write.

use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;

use crate::data::{ExportStats, SeatExport, SeatFilter};
use crate::export::{write_export, OutputPaths};
use crate::source::MonitorSource;

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub paths: OutputPaths,
    pub stats: ExportStats,
}

/// The exporter, wired to a source, a filter and output paths.
pub struct App {
    source: Box<dyn MonitorSource>,
    filter: SeatFilter,
    paths: OutputPaths,
}

impl App {
    pub fn new(source: Box<dyn MonitorSource>, filter: SeatFilter, paths: OutputPaths) -> Self {
        Self {
            source,
            filter,
            paths,
        }
    }

    /// Run the export once. Any failure aborts the run.
    pub async fn run(&self) -> Result<ExportReport> {
        let started = Instant::now();
        info!("Reading monitors from {}", self.source.description());

        let inventory = self
            .source
            .fetch()
            .await
            .with_context(|| format!("Failed to read monitors from {}", self.source.description()))?;

        let export = SeatExport::build(&inventory, &self.filter);
        info!(
            "{} monitors, {} match prefix '{}', {} seats",
            export.stats.total,
            export.stats.matched,
            self.filter.prefix,
            export.seats.len()
        );

        write_export(&export, &self.paths).await?;

        info!(
            "Export finished in {}",
            crate::data::duration::format_duration(started.elapsed())
        );

        Ok(ExportReport {
            paths: self.paths.clone(),
            stats: export.stats,
        })
    }
}
