//! Runtime settings.
//!
//! Settings are layered, later sources winning:
//!
//! 1. built-in defaults (the monitor server on `localhost:5283`, `admin:admin`,
//!    prefix `192.`, output in the working directory)
//! 2. an optional config file (TOML, YAML or JSON, picked by extension)
//! 3. `SEATWATCH_*` environment variables (e.g. `SEATWATCH_PASSWORD`)
//! 4. command-line flags
//!
//! ```toml
//! endpoint = "http://10.0.0.1:5283"
//! username = "admin"
//! password = "s3cret"
//! timeout = "5s"
//! prefix = "192."
//! output_dir = "/srv/seats"
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use seatwatch_adapters::monitor_api::MonitorApiAdapter;
use serde::Deserialize;

use crate::data::duration::parse_duration;
use crate::data::{SeatFilter, DEFAULT_PREFIX};
use crate::export::{OutputPaths, IPS_FILE, SEATS_FILE};
use crate::source::{FileSource, HttpSource, MonitorSource};

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "SEATWATCH";

/// Resolved settings for one export run.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the monitor service.
    pub endpoint: String,
    pub username: String,
    pub password: String,
    /// Request timeout, e.g. "10s" or "500ms".
    pub timeout: String,
    /// IP prefix an entry must start with.
    pub prefix: String,
    /// Optional group an entry must belong to.
    pub group: Option<String>,
    pub output_dir: PathBuf,
    pub ips_file: String,
    pub seats_file: String,
    /// Saved response to read instead of calling the service.
    pub input: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:5283".to_string(),
            username: "admin".to_string(),
            password: "admin".to_string(),
            timeout: "10s".to_string(),
            prefix: DEFAULT_PREFIX.to_string(),
            group: None,
            output_dir: PathBuf::from("."),
            ips_file: IPS_FILE.to_string(),
            seats_file: SEATS_FILE.to_string(),
            input: None,
        }
    }
}

// Keep the password out of logs
impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("endpoint", &self.endpoint)
            .field("username", &self.username)
            .field("password", &"***")
            .field("timeout", &self.timeout)
            .field("prefix", &self.prefix)
            .field("group", &self.group)
            .field("output_dir", &self.output_dir)
            .field("ips_file", &self.ips_file)
            .field("seats_file", &self.seats_file)
            .field("input", &self.input)
            .finish()
    }
}

/// Values given on the command line; `None` leaves the lower layers alone.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub endpoint: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub timeout: Option<String>,
    pub prefix: Option<String>,
    pub group: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub ips_file: Option<String>,
    pub seats_file: Option<String>,
    pub input: Option<PathBuf>,
}

impl Overrides {
    fn entries(&self) -> Vec<(&'static str, String)> {
        let path = |p: &Option<PathBuf>| p.as_ref().map(|p| p.to_string_lossy().into_owned());

        [
            ("endpoint", self.endpoint.clone()),
            ("username", self.username.clone()),
            ("password", self.password.clone()),
            ("timeout", self.timeout.clone()),
            ("prefix", self.prefix.clone()),
            ("group", self.group.clone()),
            ("output_dir", path(&self.output_dir)),
            ("ips_file", self.ips_file.clone()),
            ("seats_file", self.seats_file.clone()),
            ("input", path(&self.input)),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v)))
        .collect()
    }
}

impl Settings {
    /// Load settings from defaults, an optional file, the environment and CLI overrides.
    pub fn load(config_path: Option<&Path>, overrides: &Overrides) -> Result<Self> {
        Self::load_with_env(config_path, Environment::with_prefix(ENV_PREFIX), overrides)
    }

    /// Same as [`Settings::load`] with the environment layer supplied by the
    /// caller, so a run can be isolated from the process environment.
    pub fn load_with_env(
        config_path: Option<&Path>,
        environment: Environment,
        overrides: &Overrides,
    ) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(path) = config_path {
            builder = builder.add_source(File::from(path));
        }
        builder = builder.add_source(environment);

        for (key, value) in overrides.entries() {
            builder = builder.set_override(key, value)?;
        }

        let config = builder.build().context("Failed to load configuration")?;
        let settings: Settings = config
            .try_deserialize()
            .context("Invalid configuration")?;

        // Fail on a bad timeout before any request is made
        settings.timeout()?;

        Ok(settings)
    }

    /// Parsed request timeout.
    pub fn timeout(&self) -> Result<Duration> {
        parse_duration(&self.timeout).with_context(|| format!("Invalid timeout '{}'", self.timeout))
    }

    pub fn filter(&self) -> SeatFilter {
        SeatFilter {
            prefix: self.prefix.clone(),
            group: self.group.clone(),
        }
    }

    pub fn output_paths(&self) -> OutputPaths {
        OutputPaths::new(&self.output_dir, &self.ips_file, &self.seats_file)
    }

    /// Build the inventory source: the saved file when `input` is set, the
    /// monitor API otherwise.
    pub fn source(&self) -> Result<Box<dyn MonitorSource>> {
        if let Some(input) = &self.input {
            return Ok(Box::new(FileSource::new(input)));
        }

        let adapter = MonitorApiAdapter::builder()
            .endpoint(self.endpoint.as_str())
            .credentials(self.username.as_str(), self.password.as_str())
            .timeout(self.timeout()?)
            .build()?;

        Ok(Box::new(HttpSource::new(adapter)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let map = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix(ENV_PREFIX).source(Some(map))
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::load_with_env(None, env(&[]), &Overrides::default()).unwrap();

        assert_eq!(settings, Settings::default());
        assert_eq!(settings.timeout().unwrap(), Duration::from_secs(10));
        assert_eq!(settings.filter(), SeatFilter::default());
        assert_eq!(settings.output_paths(), OutputPaths::default());
    }

    #[test]
    fn test_file_layer() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
endpoint = "http://10.0.0.1:5283"
password = "s3cret"
timeout = "2s"
prefix = "10."
group = "finals"
"#
        )
        .unwrap();

        let settings =
            Settings::load_with_env(Some(file.path()), env(&[]), &Overrides::default()).unwrap();

        assert_eq!(settings.endpoint, "http://10.0.0.1:5283");
        assert_eq!(settings.username, "admin");
        assert_eq!(settings.password, "s3cret");
        assert_eq!(settings.timeout().unwrap(), Duration::from_secs(2));
        assert_eq!(settings.filter(), SeatFilter::with_prefix("10.").group("finals"));
    }

    #[test]
    fn test_layer_precedence() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "username = \"from-file\"\nprefix = \"172.\"").unwrap();

        let overrides = Overrides {
            prefix: Some("192.168.".to_string()),
            output_dir: Some(PathBuf::from("/srv/out")),
            ..Default::default()
        };
        let settings = Settings::load_with_env(
            Some(file.path()),
            env(&[("SEATWATCH_USERNAME", "from-env"), ("SEATWATCH_PREFIX", "10.")]),
            &overrides,
        )
        .unwrap();

        assert_eq!(settings.username, "from-env");
        assert_eq!(settings.prefix, "192.168.");
        assert_eq!(settings.output_paths().ips, Path::new("/srv/out/ips.json"));
    }

    #[test]
    fn test_invalid_timeout() {
        let overrides = Overrides {
            timeout: Some("soon".to_string()),
            ..Default::default()
        };
        let err = Settings::load_with_env(None, env(&[]), &overrides).unwrap_err();
        assert!(format!("{:#}", err).contains("soon"));
    }

    #[test]
    fn test_debug_hides_password() {
        let settings = Settings {
            password: "hunter2".to_string(),
            ..Default::default()
        };
        let debug = format!("{:?}", settings);
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_source_selection() {
        let settings = Settings::default();
        let source = settings.source().unwrap();
        assert_eq!(source.description(), "http: http://localhost:5283/monitor");

        let settings = Settings {
            input: Some(PathBuf::from("saved.json")),
            ..Default::default()
        };
        let source = settings.source().unwrap();
        assert_eq!(source.description(), "file: saved.json");
    }
}
