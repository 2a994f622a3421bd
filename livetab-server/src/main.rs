use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use livetab_core::{Node, Ui};
use livetab_server::{demos, init_tracing, App, ServerArgs, ServerConfig};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Demo {
    /// Increment and decrement a number
    Counter,
    /// Add items to a table
    Todo,
}

/// Serve a livetab demo to a local browser tab.
#[derive(Debug, Parser)]
#[command(name = "livetab", version, about = "Live server-rendered UI for a local browser tab")]
struct Cli {
    /// Which demo to serve
    #[arg(value_enum, default_value_t = Demo::Counter)]
    demo: Demo,

    #[command(flatten)]
    server: ServerArgs,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.server.verbose)?;

    let config = ServerConfig::from_cli(&cli.server)?;
    let ui = Ui::new();
    let root: Arc<dyn Node> = match cli.demo {
        Demo::Counter => demos::counter(&ui),
        Demo::Todo => demos::todo(&ui),
    };

    App::new(ui, root, config)
        .run()
        .await
        .context("livetab server failed")
}
