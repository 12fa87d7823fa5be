//! Multi-screen terminal application shell.

mod app;
mod cli;
mod pages;
mod widgets;

use clap::Parser;
use crossview::Application;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::app::Root;
use crate::cli::CliArgs;

fn init_logging(args: &CliArgs) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_filter));

    if let Some(log_path) = &args.log_path {
        if let Some(parent) = log_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "logging initialized");
    } else {
        // The TUI owns stdout, so without a file there is nowhere to write.
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logging(&args)?;

    info!(path = %args.path, "shell starting");

    let app = Application::new();
    app.run(move |cx| {
        cx.set_root(Root::new(&args.path)?)?;
        Ok(())
    })
}
