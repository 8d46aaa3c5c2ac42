//! Binary entrypoint for the carousel demo.
//!
//! Delegates all logic to the library crate; no local modules here.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn, Level};
use tracing_subscriber::{fmt, EnvFilter};

use carousel::config::Configuration;
use carousel::gesture::GestureDispatcher;
use carousel::tasks;

/// Simple CLI
#[derive(Debug, Parser)]
#[command(name = "carousel", about = "Interactive slide carousel")]
struct Cli {
    /// Path to YAML config file
    #[arg(short, long, value_name = "FILE", default_value = "config.yaml")]
    config: PathBuf,

    /// Override autoplay interval (ms)
    #[arg(long, value_name = "MILLIS")]
    interval_ms: Option<u64>,

    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbosity: u8) -> Result<()> {
    // map -v to log level
    let level = match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter = EnvFilter::from_default_env()
        .add_directive(format!("carousel={}", level).parse()?);
    fmt().with_env_filter(filter).with_target(true).init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let mut cfg = Configuration::from_yaml_file(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(ms) = cli.interval_ms {
        cfg.auto_scroll_interval = Duration::from_millis(ms);
    }
    let cfg = cfg.validated().context("validating configuration")?;
    info!(
        slides = cfg.slide_count,
        autoplay = cfg.auto_scroll,
        keyboard = cfg.keyboard_control,
        "starting carousel"
    );

    let (cmd_tx, cmd_rx) = mpsc::channel(16);
    let (frame_tx, frame_rx) = mpsc::channel(16);
    let cancel = CancellationToken::new();

    let dispatcher = GestureDispatcher::new(cfg.keyboard_control);
    let controller = tokio::spawn(tasks::controller::run(
        cfg.clone(),
        cmd_rx,
        frame_tx,
        cancel.clone(),
    ));
    let viewer = tokio::spawn(tasks::viewer::run(frame_rx, cancel.clone()));
    let input = tokio::spawn(tasks::input::run(dispatcher, cmd_tx, cancel.clone()));

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("ctrl-c received; shutting down");
            cancel.cancel();
        }
        _ = cancel.cancelled() => {}
    }
    cancel.cancel();

    for (name, handle) in [
        ("controller", controller),
        ("viewer", viewer),
        ("input", input),
    ] {
        match handle.await {
            Ok(Ok(())) => {}
            Ok(Err(err)) => warn!(task = name, "task exited with error: {err:#}"),
            Err(err) => warn!(task = name, "task panicked: {err}"),
        }
    }
    Ok(())
}
