//! Parsing of `/monitor` response bodies.
//!
//! The service answers with
//!
//! ```json
//! { "monitors": { "<id>": { "ip": "...", "hostname": "...", ... } }, "groups": { ... } }
//! ```
//!
//! Entries are returned in the order the document lists them, which relies on
//! `serde_json`'s `preserve_order` feature.

use serde_json::{Map, Value};

use seatwatch_types::{MonitorEntry, MonitorInventory, MonitorRecord};

use crate::AdapterError;

/// Parse a response body into an inventory.
///
/// # Errors
///
/// - [`AdapterError::Parse`] if the body is not JSON, or has no `monitors` object
/// - [`AdapterError::Schema`] if an entry is not an object or lacks a string
///   `ip` or `hostname`
pub fn parse_monitor_body(body: &[u8]) -> Result<MonitorInventory, AdapterError> {
    let document: Value =
        serde_json::from_slice(body).map_err(|e| AdapterError::Parse(e.to_string()))?;

    let monitors = document
        .get("monitors")
        .ok_or_else(|| AdapterError::Parse("missing 'monitors' mapping".to_string()))?
        .as_object()
        .ok_or_else(|| AdapterError::Parse("'monitors' is not an object".to_string()))?;

    monitors
        .iter()
        .map(|(id, value)| parse_entry(id, value))
        .collect()
}

fn parse_entry(id: &str, value: &Value) -> Result<MonitorEntry, AdapterError> {
    let fields = value
        .as_object()
        .ok_or_else(|| AdapterError::Schema(format!("monitor '{}' is not an object", id)))?;

    let record = MonitorRecord {
        ip: required_str(id, fields, "ip")?,
        hostname: required_str(id, fields, "hostname")?,
        group: fields
            .get("group")
            .and_then(Value::as_str)
            .map(str::to_string),
    };

    Ok(MonitorEntry::new(id, record))
}

fn required_str(id: &str, fields: &Map<String, Value>, name: &str) -> Result<String, AdapterError> {
    match fields.get(name) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(AdapterError::Schema(format!(
            "field '{}' of monitor '{}' is not a string",
            name, id
        ))),
        None => Err(AdapterError::Schema(format!(
            "monitor '{}' is missing field '{}'",
            id, name
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_parse_example() {
        let body = br#"{"monitors": {
            "a": {"ip": "192.168.1.5", "hostname": "H1"},
            "b": {"ip": "10.0.0.2", "hostname": "H2", "group": "lab"}
        }}"#;

        let inventory = parse_monitor_body(body).unwrap();
        assert_eq!(inventory.len(), 2);

        let first = &inventory.monitors[0];
        assert_eq!(first.id, "a");
        assert_eq!(first.record, MonitorRecord::new("192.168.1.5", "H1"));

        let second = &inventory.monitors[1];
        assert_eq!(second.record.group.as_deref(), Some("lab"));
    }

    #[test]
    fn test_parse_preserves_document_order() {
        let body = br#"{"monitors": {
            "zz": {"ip": "192.0.0.1", "hostname": "z"},
            "aa": {"ip": "192.0.0.2", "hostname": "a"},
            "mm": {"ip": "192.0.0.3", "hostname": "m"}
        }}"#;

        let inventory = parse_monitor_body(body).unwrap();
        let ids: Vec<&str> = inventory.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["zz", "aa", "mm"]);
    }

    #[test]
    fn test_parse_empty_monitors() {
        let inventory = parse_monitor_body(br#"{"monitors": {}, "groups": {}}"#).unwrap();
        assert!(inventory.is_empty());
    }

    #[test]
    fn test_parse_ignores_extra_fields() {
        let body = br#"{"monitors": {"a": {
            "_id": "a", "mac": "aa:bb", "ip": "192.168.0.9", "hostname": "H9",
            "uptime": 42, "group": null, "cpuUsed": 0.5
        }}}"#;

        let inventory = parse_monitor_body(body).unwrap();
        assert_eq!(inventory.monitors[0].record, MonitorRecord::new("192.168.0.9", "H9"));
    }

    #[test]
    fn test_parse_invalid_json() {
        let err = parse_monitor_body(b"<html>401 Unauthorized</html>").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn test_parse_missing_monitors() {
        let err = parse_monitor_body(br#"{"groups": {}}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert!(err.to_string().contains("monitors"));

        let err = parse_monitor_body(br#"[1, 2, 3]"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);

        let err = parse_monitor_body(br#"{"monitors": []}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn test_parse_missing_fields() {
        let err = parse_monitor_body(br#"{"monitors": {"a": {"hostname": "H1"}}}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Schema);
        assert!(err.to_string().contains("'ip'"));

        let err = parse_monitor_body(br#"{"monitors": {"b": {"ip": "192.0.0.1"}}}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Schema);
        assert!(err.to_string().contains("'hostname'"));
        assert!(err.to_string().contains("'b'"));
    }

    #[test]
    fn test_parse_missing_hostname_outside_prefix() {
        // Validation does not know about the seat filter
        let body = br#"{"monitors": {
            "a": {"ip": "192.168.1.5", "hostname": "H1"},
            "b": {"ip": "10.0.0.2"}
        }}"#;
        let err = parse_monitor_body(body).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Schema);
        assert!(err.to_string().contains("'b'"));
    }

    #[test]
    fn test_parse_wrong_field_types() {
        let err = parse_monitor_body(br#"{"monitors": {"a": {"ip": 192, "hostname": "H1"}}}"#)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Schema);

        let err = parse_monitor_body(br#"{"monitors": {"a": "192.168.1.5"}}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Schema);
    }
}
