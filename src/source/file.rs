//! File-based source.
//!
//! Reads a saved `/monitor` response body.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use seatwatch_adapters::{parse_monitor_body, AdapterError};
use seatwatch_types::MonitorInventory;

use super::MonitorSource;

/// A source that reads a monitor response from a JSON file.
///
/// Useful for re-running an export against a response captured earlier
/// (e.g. `curl -u admin:admin http://server:5283/monitor > monitor.json`).
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
    description: String,
}

impl FileSource {
    /// Create a new file source for the given path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let description = format!("file: {}", path.display());
        Self { path, description }
    }

    /// Returns the path being read.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl MonitorSource for FileSource {
    async fn fetch(&self) -> Result<MonitorInventory, AdapterError> {
        let content = tokio::fs::read(&self.path).await?;
        parse_monitor_body(&content)
    }

    fn description(&self) -> &str {
        &self.description
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seatwatch_adapters::ErrorKind;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn sample_json() -> &'static str {
        r#"{
            "monitors": {
                "a": { "ip": "192.168.1.5", "hostname": "H1", "mac": "00:00:00:00:00:01" },
                "b": { "ip": "10.0.0.2", "hostname": "H2" }
            },
            "groups": { "default": ["a", "b"] }
        }"#
    }

    #[test]
    fn test_file_source_new() {
        let source = FileSource::new("/tmp/monitor.json");
        assert_eq!(source.path(), Path::new("/tmp/monitor.json"));
        assert_eq!(source.description(), "file: /tmp/monitor.json");
    }

    #[tokio::test]
    async fn test_file_source_reads_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", sample_json()).unwrap();

        let source = FileSource::new(file.path());
        let inventory = source.fetch().await.unwrap();

        assert_eq!(inventory.len(), 2);
        assert_eq!(inventory.monitors[0].id, "a");
        assert_eq!(inventory.monitors[1].record.ip, "10.0.0.2");
    }

    #[tokio::test]
    async fn test_file_source_missing_file() {
        let source = FileSource::new("/nonexistent/path/monitor.json");

        let err = source.fetch().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }

    #[tokio::test]
    async fn test_file_source_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not valid json").unwrap();

        let source = FileSource::new(file.path());

        let err = source.fetch().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }
}
