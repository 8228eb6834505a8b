//! Source abstraction for reading monitor inventories.
//!
//! The exporter normally queries the monitor service over HTTP, but a saved
//! `/monitor` response can be replayed from disk just as well.

mod file;
mod http;

pub use file::FileSource;
pub use http::HttpSource;

use std::fmt::Debug;

use async_trait::async_trait;
use seatwatch_adapters::AdapterError;
use seatwatch_types::MonitorInventory;

/// Trait for obtaining a monitor inventory.
///
/// # Example
///
/// ```no_run
/// use seatwatch::{FileSource, MonitorSource};
///
/// # tokio_test::block_on(async {
/// let source = FileSource::new("monitor.json");
/// let inventory = source.fetch().await.unwrap();
/// println!("Got {} monitors from {}", inventory.len(), source.description());
/// # });
/// ```
#[async_trait]
pub trait MonitorSource: Send + Sync + Debug {
    /// Read the inventory once.
    async fn fetch(&self) -> Result<MonitorInventory, AdapterError>;

    /// Returns a human-readable description of the source.
    fn description(&self) -> &str;
}
