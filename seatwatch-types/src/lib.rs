//! # seatwatch-types
//!
//! Core types for seat inventory exports. This crate defines the records
//! read from a monitoring service and the two artifacts derived from them.
//!
//! ## Types
//!
//! - [`MonitorRecord`]: one monitored machine (IP, hostname, optional group)
//! - [`MonitorEntry`]: a record plus the opaque key it had upstream
//! - [`MonitorInventory`]: every entry of one `/monitor` response, in response order
//! - [`IpList`]: ordered list of IP addresses, serialized as a JSON array
//! - [`SeatMap`]: hostname to IP mapping, serialized as a JSON object
//!
//! ## Example
//!
//! ```rust
//! use seatwatch_types::{IpList, SeatMap};
//!
//! let mut ips = IpList::new();
//! let mut seats = SeatMap::new();
//!
//! ips.push("192.168.1.5");
//! seats.insert("H1", "192.168.1.5");
//!
//! assert_eq!(ips.len(), 1);
//! assert_eq!(seats.get("H1"), Some("192.168.1.5"));
//! ```

mod record;
mod seats;

pub use record::*;
pub use seats::*;
