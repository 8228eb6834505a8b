//! Seat data processing.
//!
//! Turns a parsed [`MonitorInventory`](seatwatch_types::MonitorInventory) into
//! the two export artifacts.
//!
//! ## Submodules
//!
//! - [`duration`]: Parsing and formatting of duration strings (e.g., "10s", "500ms")
//! - [`filter`]: The seat filter ([`SeatFilter`]) and export construction ([`SeatExport`])
//!
//! ## Data Flow
//!
//! ```text
//! MonitorInventory (response order)
//!        │
//!        ▼
//! SeatExport::build(&inventory, &SeatFilter)
//!        │
//!        ├──▶ IpList  (every matching ip, duplicates kept)
//!        │
//!        └──▶ SeatMap (hostname -> ip, last write wins)
//! ```

pub mod duration;
pub mod filter;

pub use filter::{ExportStats, SeatExport, SeatFilter, DEFAULT_PREFIX};
