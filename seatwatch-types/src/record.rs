//! Monitor records as reported by the monitoring service.

use serde::{Deserialize, Serialize};

/// A single monitored machine.
///
/// Only `ip` and `hostname` are required upstream; `group` is carried along
/// when the service reports one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitorRecord {
    /// IP address the machine reported from.
    pub ip: String,

    /// Hostname of the machine (the seat name).
    pub hostname: String,

    /// Room or group the machine belongs to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

impl MonitorRecord {
    /// Create a record without a group.
    pub fn new(ip: impl Into<String>, hostname: impl Into<String>) -> Self {
        Self {
            ip: ip.into(),
            hostname: hostname.into(),
            group: None,
        }
    }

    /// Set the group.
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }
}

/// A record together with the key it was stored under in the response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorEntry {
    /// Opaque identifier (monitor name or database id).
    pub id: String,
    pub record: MonitorRecord,
}

impl MonitorEntry {
    pub fn new(id: impl Into<String>, record: MonitorRecord) -> Self {
        Self {
            id: id.into(),
            record,
        }
    }
}

/// All monitor entries from one response, in the order the response listed them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonitorInventory {
    pub monitors: Vec<MonitorEntry>,
}

impl MonitorInventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    pub fn push(&mut self, entry: MonitorEntry) {
        self.monitors.push(entry);
    }

    /// Check if the inventory has no entries.
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    /// Iterate over entries in response order.
    pub fn iter(&self) -> impl Iterator<Item = &MonitorEntry> {
        self.monitors.iter()
    }
}

impl FromIterator<MonitorEntry> for MonitorInventory {
    fn from_iter<I: IntoIterator<Item = MonitorEntry>>(iter: I) -> Self {
        Self {
            monitors: iter.into_iter().collect(),
        }
    }
}
