//! HTTP source backed by the monitor API adapter.

use async_trait::async_trait;
use seatwatch_adapters::monitor_api::MonitorApiAdapter;
use seatwatch_adapters::AdapterError;
use seatwatch_types::MonitorInventory;

use super::MonitorSource;

/// A source that queries `GET <endpoint>/monitor` once per fetch.
#[derive(Debug)]
pub struct HttpSource {
    adapter: MonitorApiAdapter,
    description: String,
}

impl HttpSource {
    pub fn new(adapter: MonitorApiAdapter) -> Self {
        let description = format!("http: {}", adapter.url());
        Self {
            adapter,
            description,
        }
    }

    pub fn adapter(&self) -> &MonitorApiAdapter {
        &self.adapter
    }
}

#[async_trait]
impl MonitorSource for HttpSource {
    async fn fetch(&self) -> Result<MonitorInventory, AdapterError> {
        self.adapter.fetch().await
    }

    fn description(&self) -> &str {
        &self.description
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_names_url() {
        let adapter = MonitorApiAdapter::builder()
            .endpoint("http://10.1.1.1:5283")
            .build()
            .unwrap();
        let source = HttpSource::new(adapter);

        assert_eq!(source.description(), "http: http://10.1.1.1:5283/monitor");
        assert_eq!(source.adapter().url(), "http://10.1.1.1:5283/monitor");
    }
}
