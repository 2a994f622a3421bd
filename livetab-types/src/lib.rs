//! Shared types for livetab
//!
//! This crate holds the vocabulary spoken between the server and the browser
//! tab: node identifiers, routing keys, inbound events and outbound patches.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

/// Prefix used when a node identifier appears in markup (`id="lt-7"`).
pub const TAG_PREFIX: &str = "lt-";

/// Node identifier
///
/// Issued by the identity allocator, strictly increasing for the lifetime of
/// the process. Externally a node is addressed by its tag, see [`NodeId::tag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(pub u64);

impl NodeId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// The DOM id of this node.
    pub fn tag(&self) -> String {
        format!("{}{}", TAG_PREFIX, self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for NodeId {
    fn from(id: u64) -> Self {
        NodeId(id)
    }
}

impl From<NodeId> for u64 {
    fn from(id: NodeId) -> Self {
        id.0
    }
}

/// Error returned when a target string does not name a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNodeIdError(String);

impl fmt::Display for ParseNodeIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid node id: {:?}", self.0)
    }
}

impl std::error::Error for ParseNodeIdError {}

impl FromStr for NodeId {
    type Err = ParseNodeIdError;

    /// Accepts both the bare number (`"7"`) and the tag form (`"lt-7"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix(TAG_PREFIX).unwrap_or(trimmed);
        digits
            .parse::<u64>()
            .map(NodeId)
            .map_err(|_| ParseNodeIdError(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for NodeId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Ok(NodeId(n)),
            Raw::Text(s) => s.parse().map_err(serde::de::Error::custom),
        }
    }
}

/// Key under which event handlers register and inbound events are routed.
///
/// Always `"<node>.<interaction>"`, e.g. `"7.click"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoutingKey(String);

impl RoutingKey {
    pub fn new(node: NodeId, interaction: &str) -> Self {
        Self(format!("{}.{}", node.0, interaction))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoutingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Interactions the client script forwards to the server.
///
/// Each logical interaction has a fixed wire name, the DOM event the markup
/// emits, and optionally the name of the element property carried along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interaction {
    Click,
    Change,
}

impl Interaction {
    pub const ALL: [Interaction; 2] = [Interaction::Click, Interaction::Change];

    pub fn wire_name(self) -> &'static str {
        match self {
            Interaction::Click => "click",
            Interaction::Change => "sl-change",
        }
    }

    pub fn prop_name(self) -> Option<&'static str> {
        match self {
            Interaction::Click => None,
            Interaction::Change => Some("value"),
        }
    }

    pub fn target_event(self) -> TargetEvent {
        TargetEvent {
            name: self.wire_name(),
            prop: self.prop_name(),
        }
    }
}

/// One row of the interaction table handed to the client script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TargetEvent {
    pub name: &'static str,
    pub prop: Option<&'static str>,
}

/// The full interaction table, in a stable order.
pub fn target_events() -> Vec<TargetEvent> {
    Interaction::ALL.iter().map(|i| i.target_event()).collect()
}

/// Arbitrary properties attached to an inbound event.
pub type Props = serde_json::Map<String, serde_json::Value>;

/// A client-originated interaction.
///
/// Wire form: `{"target": "7", "event": "click", "props": {}}`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct InboundEvent {
    pub target: NodeId,
    #[serde(rename = "event")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_props")]
    pub props: Props,
}

/// A `props` value that is not an object reads as no props at all; the
/// event itself is still delivered.
fn lenient_props<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Props, D::Error> {
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Object(props) => Ok(props),
        serde_json::Value::Null => Ok(Props::new()),
        other => {
            debug!(props = %other, "ignoring non-object props");
            Ok(Props::new())
        }
    }
}

impl InboundEvent {
    pub fn new(target: NodeId, name: impl Into<String>) -> Self {
        Self {
            target,
            name: name.into(),
            props: Props::new(),
        }
    }

    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    /// Decode one wire message.
    pub fn decode(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    pub fn routing_key(&self) -> RoutingKey {
        RoutingKey::new(self.target, &self.name)
    }

    /// String view of a property; numbers and booleans are stringified.
    pub fn prop_str(&self, key: &str) -> Option<String> {
        match self.props.get(key)? {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Null => None,
            other => Some(other.to_string()),
        }
    }

    pub fn prop_bool(&self, key: &str) -> Option<bool> {
        match self.props.get(key)? {
            serde_json::Value::Bool(b) => Some(*b),
            serde_json::Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }
}

/// What the client does with a patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PatchAction {
    Replace,
}

impl PatchAction {
    pub fn as_str(self) -> &'static str {
        match self {
            PatchAction::Replace => "replace",
        }
    }
}

/// A server-to-client instruction to swap a node's markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Patch {
    pub action: PatchAction,
    pub target: NodeId,
    pub markup: String,
}

impl Patch {
    pub fn replace(target: NodeId, markup: impl Into<String>) -> Self {
        Self {
            action: PatchAction::Replace,
            target,
            markup: markup.into(),
        }
    }

    /// Encode as a turbo-stream element, the text frame the client applies.
    pub fn to_wire(&self) -> String {
        format!(
            r#"<turbo-stream action="{}" target="{}"><template>{}</template></turbo-stream>"#,
            self.action.as_str(),
            self.target.tag(),
            self.markup
        )
    }
}
