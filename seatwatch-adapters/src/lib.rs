//! # seatwatch-adapters
//!
//! Adapters for reading a seat inventory out of a monitoring service.
//!
//! - [`parse_monitor_body`] turns a `/monitor` response body into a
//!   [`MonitorInventory`], whatever transport delivered it
//! - **Monitor API** (`http` feature, on by default) - fetches the body over
//!   HTTP with Basic authentication and an explicit timeout
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use seatwatch_adapters::monitor_api::MonitorApiAdapter;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let adapter = MonitorApiAdapter::builder()
//!         .endpoint("http://localhost:5283")
//!         .credentials("admin", "admin")
//!         .timeout(Duration::from_secs(5))
//!         .build()?;
//!
//!     let inventory = adapter.fetch().await?;
//!
//!     println!("Collected {} monitors", inventory.len());
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod parse;

#[cfg(feature = "http")]
pub mod monitor_api;

pub use error::{AdapterError, ErrorKind};
pub use parse::parse_monitor_body;

// Re-export types for convenience
pub use seatwatch_types::{IpList, MonitorEntry, MonitorInventory, MonitorRecord, SeatMap};
