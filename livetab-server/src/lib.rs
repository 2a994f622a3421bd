//! livetab server - serves a livetab UI tree to one local browser tab
//!
//! [`App`] owns the root node and wires the HTTP front door:
//!
//! - `GET /` renders the bootstrap page with the root's current markup
//! - `GET /ws` upgrades to the WebSocket that carries events and patches
//! - `GET /assets/*` serves the bundled client script and stylesheet
//!
//! Every route refuses non-loopback peers and foreign origins.

pub mod assets;
pub mod cli;
pub mod config;
pub mod demos;
pub mod error;
pub mod origin;
pub mod page;
pub mod server;
pub mod transport;

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

pub use cli::ServerArgs;
pub use config::{DeployMode, ServerConfig};
pub use error::ServeError;
pub use server::App;

/// Install the global `tracing` subscriber. `RUST_LOG` wins over `verbose`.
pub fn init_tracing(verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| anyhow!(err))
}
