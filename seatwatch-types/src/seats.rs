//! Export artifacts: the IP list and the seat map.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered list of IP addresses.
///
/// Duplicates are kept; the list mirrors the filtered entries one to one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IpList(Vec<String>);

impl IpList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, ip: impl Into<String>) {
        self.0.push(ip.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

/// Mapping from hostname to IP address.
///
/// Entries keep the position of their first insertion. Inserting a hostname
/// that is already present replaces its IP in place, so the last write wins.
/// Serializes as a JSON object in that order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeatMap(IndexMap<String, String>);

impl SeatMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `hostname -> ip`, returning the IP previously stored for the
    /// hostname if there was one.
    pub fn insert(&mut self, hostname: impl Into<String>, ip: impl Into<String>) -> Option<String> {
        self.0.insert(hostname.into(), ip.into())
    }

    /// Look up the IP for a hostname.
    pub fn get(&self, hostname: &str) -> Option<&str> {
        self.0.get(hostname).map(String::as_str)
    }

    /// Check whether any hostname maps to `ip`.
    pub fn contains_ip(&self, ip: &str) -> bool {
        self.0.values().any(|v| v == ip)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over `(hostname, ip)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(h, ip)| (h.as_str(), ip.as_str()))
    }
}
