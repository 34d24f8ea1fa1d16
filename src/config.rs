use std::io::{self, IsTerminal};

use clap::{Parser, ValueEnum};
use tracing::Subscriber;
use tracing_subscriber::{fmt, fmt::MakeWriter, prelude::*, EnvFilter};

use crate::navigation::Screen;

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(author, version, about = "QuickWash laundry pickup order tracker", long_about = None)]
pub struct Args {
    /// Log filter (trace, debug, info, warn, error or a directive list). RUST_LOG wins.
    #[arg(short, long, default_value = "info")]
    pub log_level: String,

    /// Log line layout
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,

    /// Screen shown first
    #[arg(long, value_enum, default_value_t = StartScreen::Login)]
    pub start: StartScreen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Pretty,
    Compact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StartScreen {
    Login,
    Home,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub log_format: LogFormat,
    pub start: Screen,
}

impl From<Args> for AppConfig {
    fn from(args: Args) -> Self {
        let start = match args.start {
            StartScreen::Login => Screen::Login,
            StartScreen::Home => Screen::Home,
        };

        Self {
            log_level: args.log_level,
            log_format: args.log_format,
            start,
        }
    }
}

/// Install the global subscriber. Logs go to stderr so they never mix with
/// the rendered screens on stdout.
pub fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    build_subscriber(config.log_format, filter, io::stderr, io::stderr().is_terminal()).init();
}

fn build_subscriber<W>(format: LogFormat, filter: EnvFilter, writer: W, ansi: bool) -> Box<dyn Subscriber + Send + Sync>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(true);

    match format {
        LogFormat::Pretty => Box::new(tracing_subscriber::registry().with(layer.pretty()).with(filter)),
        LogFormat::Compact => Box::new(tracing_subscriber::registry().with(layer.compact()).with(filter)),
    }
}
