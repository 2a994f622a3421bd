use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::ValueEnum;

use crate::cli::ServerArgs;

/// What happens when the session ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DeployMode {
    /// Shut the process down when the tab disconnects
    #[default]
    Exit,
    /// Keep serving and wait for the tab to reconnect
    Persist,
}

/// Runtime configuration derived from CLI/env.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub listen_addr: SocketAddr,
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub grace: Duration,
    pub mode: DeployMode,
    pub open_browser: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            title: "livetab".to_string(),
            width: 800,
            height: 600,
            grace: Duration::from_secs(10),
            mode: DeployMode::Exit,
            open_browser: false,
        }
    }
}

impl ServerConfig {
    pub fn from_cli(args: &ServerArgs) -> Result<Self> {
        let listen_addr = args
            .listen_addr
            .parse()
            .with_context(|| format!("invalid listen address: {}", args.listen_addr))?;

        Ok(Self {
            listen_addr,
            title: args.title.clone(),
            width: args.width,
            height: args.height,
            grace: Duration::from_secs(args.grace_secs),
            mode: args.mode,
            open_browser: args.open,
        })
    }
}
