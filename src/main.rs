use anyhow::Result;
use tracing_subscriber::EnvFilter;

use shorturl::config::Config;
use shorturl::server;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    init_tracing(&config);

    server::run(config).await
}

/// Initializes the global tracing subscriber.
///
/// Honors `RUST_LOG` when set; otherwise falls back to the configured level.
/// `LOG_FORMAT=json` switches to structured JSON output.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
