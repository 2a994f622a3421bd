use clap::Args;

use crate::config::DeployMode;

/// Server options shared by every livetab binary.
#[derive(Debug, Clone, Args)]
pub struct ServerArgs {
    /// Listen address for the page and WebSocket endpoints (port 0 picks a free one)
    #[arg(long, env = "LIVETAB_ADDR", default_value = "127.0.0.1:0")]
    pub listen_addr: String,

    /// Page title
    #[arg(long, env = "LIVETAB_TITLE", default_value = "livetab")]
    pub title: String,

    /// Preferred window width in pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Preferred window height in pixels
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Seconds to wait for sessions and connections to close on shutdown
    #[arg(long, env = "LIVETAB_GRACE_SECS", default_value_t = 10)]
    pub grace_secs: u64,

    /// What to do when the browser tab disconnects
    #[arg(long, env = "LIVETAB_MODE", value_enum, default_value_t = DeployMode::Exit)]
    pub mode: DeployMode,

    /// Open the page in the system browser once listening
    #[arg(long)]
    pub open: bool,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,
}
