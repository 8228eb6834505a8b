//! # seatwatch
//!
//! Exports the seat inventory of a contest floor from its monitoring service.
//!
//! The monitor server knows every contestant machine (IP, hostname, group).
//! `seatwatch` queries `GET /monitor` with Basic authentication, keeps the
//! machines whose IP starts with a prefix (`192.` by default) and writes:
//!
//! - `ips.json`: every matching IP, in response order
//! - `seats.json`: hostname to IP, the last entry winning for repeated hostnames
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────┐    ┌──────────────┐    ┌────────────┐    ┌────────────┐
//! │  source  │───▶│ MonitorInv.  │───▶│    data    │───▶│   export   │
//! │ Http|File│    │ (resp order) │    │ SeatFilter │    │ ips/seats  │
//! └──────────┘    └──────────────┘    └────────────┘    └────────────┘
//! ```
//!
//! - **[`source`]**: [`MonitorSource`] trait with [`HttpSource`] (monitor API)
//!   and [`FileSource`] (saved response)
//! - **[`data`]**: [`SeatFilter`] and [`SeatExport`] construction
//! - **[`export`]**: writing the two JSON files
//! - **[`config`]**: layered [`Settings`] (defaults, file, environment, flags)
//! - **[`app`]**: one fetch-filter-write run
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # Query the monitor server and write ./ips.json and ./seats.json
//! seatwatch --endpoint http://10.0.0.1:5283 -u admin -p admin
//!
//! # Re-run against a saved response
//! seatwatch --input monitor.json --output-dir out/
//! ```
//!
//! ### As a library
//!
//! ```no_run
//! use seatwatch::{App, FileSource, OutputPaths, SeatFilter};
//!
//! # tokio_test::block_on(async {
//! let app = App::new(
//!     Box::new(FileSource::new("monitor.json")),
//!     SeatFilter::default(),
//!     OutputPaths::in_dir("."),
//! );
//! let report = app.run().await.unwrap();
//! println!("{} seats exported", report.stats.matched);
//! # });
//! ```

pub mod app;
pub mod config;
pub mod data;
pub mod export;
pub mod source;

// Re-export main types for convenience
pub use app::{App, ExportReport};
pub use crate::config::{Overrides, Settings};
pub use data::{ExportStats, SeatExport, SeatFilter};
pub use export::{write_export, OutputPaths};
pub use source::{FileSource, HttpSource, MonitorSource};
