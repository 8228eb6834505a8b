//! Seat filtering and export construction.

use tracing::debug;

use seatwatch_types::{IpList, MonitorInventory, MonitorRecord, SeatMap};

/// Default IP prefix for contestant machines.
pub const DEFAULT_PREFIX: &str = "192.";

/// Criteria an entry must meet to be exported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatFilter {
    /// Literal, case-sensitive prefix the IP must start with.
    pub prefix: String,
    /// When set, only entries reporting this group are kept.
    pub group: Option<String>,
}

impl Default for SeatFilter {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            group: None,
        }
    }
}

impl SeatFilter {
    /// Filter on an IP prefix only.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            group: None,
        }
    }

    /// Additionally require a group.
    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn matches(&self, record: &MonitorRecord) -> bool {
        if !record.ip.starts_with(&self.prefix) {
            return false;
        }
        match &self.group {
            Some(group) => record.group.as_deref() == Some(group.as_str()),
            None => true,
        }
    }
}

/// Counters collected while building an export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportStats {
    /// Entries in the inventory.
    pub total: usize,
    /// Entries that passed the filter.
    pub matched: usize,
    /// Entries that did not.
    pub skipped: usize,
    /// Seat map entries replaced by a later entry with the same hostname.
    pub overwritten: usize,
}

/// The two artifacts derived from one inventory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeatExport {
    pub ips: IpList,
    pub seats: SeatMap,
    pub stats: ExportStats,
}

impl SeatExport {
    /// Walk the inventory in response order and collect matching entries.
    ///
    /// Every matching IP is appended to `ips`; `seats` keeps the last IP seen
    /// for each hostname.
    pub fn build(inventory: &MonitorInventory, filter: &SeatFilter) -> Self {
        let mut export = SeatExport::default();
        export.stats.total = inventory.len();

        for entry in inventory.iter() {
            let record = &entry.record;
            if !filter.matches(record) {
                export.stats.skipped += 1;
                continue;
            }

            export.stats.matched += 1;
            export.ips.push(record.ip.as_str());

            if let Some(previous) = export.seats.insert(record.hostname.as_str(), record.ip.as_str()) {
                export.stats.overwritten += 1;
                debug!(
                    "Hostname {} seen again (monitor {}): {} replaced by {}",
                    record.hostname, entry.id, previous, record.ip
                );
            }
        }

        export
    }
}
