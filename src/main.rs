use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use seatwatch::{App, Overrides, Settings};

#[derive(Parser, Debug)]
#[command(name = "seatwatch")]
#[command(about = "Export contest seat IPs and hostnames from the monitor service")]
#[command(version)]
struct Args {
    /// Config file (TOML, YAML or JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Monitor service base URL (e.g., "http://10.0.0.1:5283")
    #[arg(long)]
    endpoint: Option<String>,

    /// Basic-auth username
    #[arg(short, long)]
    username: Option<String>,

    /// Basic-auth password
    #[arg(short, long)]
    password: Option<String>,

    /// Request timeout (e.g., "10s", "500ms")
    #[arg(long)]
    timeout: Option<String>,

    /// Only export machines whose IP starts with this prefix
    #[arg(long)]
    prefix: Option<String>,

    /// Only export machines in this group
    #[arg(long)]
    group: Option<String>,

    /// Directory to write ips.json and seats.json into
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// File name for the IP list
    #[arg(long)]
    ips_file: Option<String>,

    /// File name for the seat map
    #[arg(long)]
    seats_file: Option<String>,

    /// Read a saved /monitor response instead of querying the service
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn overrides(&self) -> Overrides {
        Overrides {
            endpoint: self.endpoint.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            timeout: self.timeout.clone(),
            prefix: self.prefix.clone(),
            group: self.group.clone(),
            output_dir: self.output_dir.clone(),
            ips_file: self.ips_file.clone(),
            seats_file: self.seats_file.clone(),
            input: self.input.clone(),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let settings = Settings::load(args.config.as_deref(), &args.overrides())?;
    debug!("Settings: {:?}", settings);

    let app = App::new(settings.source()?, settings.filter(), settings.output_paths());

    // Build a tokio runtime for the single request
    let rt = tokio::runtime::Runtime::new()?;
    let report = rt.block_on(app.run())?;

    info!(
        "Exported {} of {} monitors ({} skipped, {} hostnames repeated)",
        report.stats.matched, report.stats.total, report.stats.skipped, report.stats.overwritten
    );
    Ok(())
}

/// Log to stderr; `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
