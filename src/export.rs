//! Writing the export artifacts to disk.
//!
//! `ips.json` is written first, then `seats.json`. Each file is truncated and
//! rewritten in place; if the second write fails the two files come from
//! different runs.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::data::SeatExport;

/// Default file name for the IP list.
pub const IPS_FILE: &str = "ips.json";
/// Default file name for the seat map.
pub const SEATS_FILE: &str = "seats.json";

/// Destination paths for the two artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub ips: PathBuf,
    pub seats: PathBuf,
}

impl OutputPaths {
    /// Place both files in `dir` under their default names.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir, IPS_FILE, SEATS_FILE)
    }

    /// Place both files in `dir` under the given names.
    pub fn new(dir: impl AsRef<Path>, ips_file: impl AsRef<Path>, seats_file: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            ips: dir.join(ips_file),
            seats: dir.join(seats_file),
        }
    }
}

impl Default for OutputPaths {
    fn default() -> Self {
        Self::in_dir(".")
    }
}

/// Write `ips` and `seats` as pretty-printed JSON (2-space indent).
pub async fn write_export(export: &SeatExport, paths: &OutputPaths) -> Result<()> {
    let ips = serde_json::to_string_pretty(&export.ips)?;
    tokio::fs::write(&paths.ips, ips)
        .await
        .with_context(|| format!("Failed to write {}", paths.ips.display()))?;
    info!("Wrote {} IPs to {}", export.ips.len(), paths.ips.display());

    let seats = serde_json::to_string_pretty(&export.seats)?;
    tokio::fs::write(&paths.seats, seats)
        .await
        .with_context(|| format!("Failed to write {}", paths.seats.display()))?;
    info!("Wrote {} seats to {}", export.seats.len(), paths.seats.display());

    Ok(())
}
