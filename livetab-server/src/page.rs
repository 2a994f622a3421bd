use askama::Template;
use livetab_core::{target_events, Node};

use crate::config::ServerConfig;

/// Path of the WebSocket endpoint.
pub const WS_PATH: &str = "/ws";

/// The bootstrap document: the root node's markup plus what the client
/// script needs to connect and forward events.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage {
    pub title: String,
    pub head: &'static str,
    /// JSON array of `{name, prop}` events the client forwards.
    pub events: String,
    pub root: String,
    pub ws_path: &'static str,
    pub width: u32,
    pub height: u32,
}

impl IndexPage {
    pub fn new(config: &ServerConfig, root: &dyn Node) -> Self {
        Self {
            title: config.title.clone(),
            head: livetab_widgets::HEAD_ELEMENTS,
            events: events_json(),
            root: root.render(),
            ws_path: WS_PATH,
            width: config.width,
            height: config.height,
        }
    }
}

fn events_json() -> String {
    serde_json::to_string(&target_events()).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_json() {
        assert_eq!(
            events_json(),
            r#"[{"name":"click","prop":null},{"name":"sl-change","prop":"value"}]"#
        );
    }
}
