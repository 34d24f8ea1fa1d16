use clap::Parser;

mod config;
mod domain;
mod event_sourcing;
mod metrics;
mod navigation;
mod terminal;

use config::{AppConfig, Args};
use domain::order::OrderStore;
use metrics::Metrics;
use terminal::App;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from(Args::parse());

    // Structured logging on stderr; RUST_LOG overrides --log-level
    config::init_tracing(&config);

    tracing::info!(start = %config.start, "Starting QuickWash order tracker");
    tracing::warn!("Login and sign-up are placeholders: credentials are never checked");

    let metrics = Metrics::new()?;

    // The only store for this process; lent to the front end
    let mut store = OrderStore::new();

    let mut app = App::new(&mut store, &metrics, config.start);
    terminal::run(&mut app).await?;
    drop(app);

    tracing::info!(
        orders = store.len(),
        events = store.event_count(),
        "Session ended; orders are kept in memory only and are now discarded"
    );

    Ok(())
}
