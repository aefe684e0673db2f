use anyhow::Result;
use clap::Parser;
use shortlink_demo::config::Config;
use shortlink_demo::server;
use tracing_subscriber::EnvFilter;

/// Client-side URL shortener demo server.
#[derive(Parser)]
#[command(name = "shortlink-demo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Address to listen on (overrides LISTEN)
    #[arg(long)]
    listen: Option<String>,

    /// Origin used to build short URLs (overrides BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Maximum number of links held at once (overrides MAX_LINKS)
    #[arg(long)]
    max_links: Option<usize>,

    /// Seconds between simulated clicks, 0 disables (overrides CLICK_SIMULATION_INTERVAL_SECS)
    #[arg(long)]
    simulate_clicks: Option<u64>,

    /// Log output format: text or json (overrides LOG_FORMAT)
    #[arg(long)]
    log_format: Option<String>,
}

impl Cli {
    fn apply(self, config: &mut Config) {
        if let Some(listen) = self.listen {
            config.listen_addr = listen;
        }
        if let Some(base_url) = self.base_url {
            config.base_url = base_url;
        }
        if let Some(max_links) = self.max_links {
            config.max_links = max_links;
        }
        if let Some(secs) = self.simulate_clicks {
            config.click_simulation_interval_secs = secs;
        }
        if let Some(format) = self.log_format {
            config.log_format = format;
        }
    }
}

fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    cli.apply(&mut config);
    config.validate()?;

    init_tracing(&config);
    config.print_summary();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting URL shortener demo");

    server::run(config).await
}
