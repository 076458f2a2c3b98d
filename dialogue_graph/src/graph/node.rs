//! Node and edge definitions for dialogue graphs.

use serde::{Deserialize, Serialize};

/// Identifier of a node within one graph.
///
/// Ids are plain integers allocated by the authoring surface, stable across
/// save/load, and the only addressing mechanism between nodes. `-1` is
/// reserved as the "points nowhere" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub i32);

impl NodeId {
    /// Sentinel for an edge that does not lead anywhere.
    pub const UNSET: NodeId = NodeId(-1);

    /// Check whether this id is the sentinel.
    pub fn is_unset(&self) -> bool {
        *self == Self::UNSET
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 2D point for editor-only node placement. Traversal ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Default editor footprint of a freshly created node.
fn default_size() -> Vec2 {
    Vec2::new(250.0, 180.0)
}

fn default_chance() -> u32 {
    50
}

/// What an inventory event does to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InventoryAction {
    Add,
    Remove,
}

/// How an audio event drives its target source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioAction {
    Play,
    Stop,
    PlayOneShot,
}

/// Opaque reference to a sprite asset owned by the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpriteHandle(pub String);

impl SpriteHandle {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

/// Opaque reference to an audio clip owned by the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AudioHandle(pub String);

impl AudioHandle {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

/// The closed set of node behaviors.
///
/// Each variant carries only the payload its traversal behavior reads, and
/// the engine matches exhaustively, so adding a kind will not compile until
/// every dispatch site handles it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NodeKind {
    /// Entry point of the graph; advances straight through.
    Start,

    /// A spoken line with player-facing choices; suspends the session.
    Dialogue { speaker: String, text: String },

    /// Picks one out-edge by weighted draw over option chances.
    Random,

    /// Terminal node; closes the conversation.
    End,

    /// Mutates the inventory, then advances.
    InventoryEvent {
        action: InventoryAction,
        item: String,
        amount: i64,
    },

    /// Branches on an inventory threshold: option 0 on pass, option 1 on fail.
    Condition { variable: String, required: i64 },

    /// Tells the presenter to swap a sprite slot, then advances.
    SpriteEvent {
        slot: u32,
        sprite: Option<SpriteHandle>,
    },

    /// Tells the presenter to drive an audio source, then advances.
    AudioEvent {
        slot: u32,
        clip: Option<AudioHandle>,
        action: AudioAction,
        looped: bool,
    },
}

impl NodeKind {
    /// Whether a node of this kind resolves without external input.
    pub fn is_automatic(&self) -> bool {
        !matches!(self, NodeKind::Dialogue { .. } | NodeKind::End)
    }
}

/// One out-edge of a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogueOption {
    /// Choice label; shown to the player only under `Dialogue` nodes.
    #[serde(default)]
    pub text: String,

    /// Destination node, or [`NodeId::UNSET`] for an edge that ends its branch.
    pub target: NodeId,

    /// Relative weight under `Random` nodes; non-negative by construction.
    #[serde(default = "default_chance")]
    pub chance: u32,
}

impl DialogueOption {
    /// Create an edge with the default weight.
    pub fn new(text: impl Into<String>, target: NodeId) -> Self {
        Self {
            text: text.into(),
            target,
            chance: default_chance(),
        }
    }

    /// Create an edge that explicitly points nowhere.
    pub fn dangling(text: impl Into<String>) -> Self {
        Self::new(text, NodeId::UNSET)
    }

    /// Set the random-draw weight.
    pub fn with_chance(mut self, chance: u32) -> Self {
        self.chance = chance;
        self
    }
}

/// One vertex of a dialogue graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub kind: NodeKind,

    // Editor-only placement metadata, round-tripped but never read here.
    #[serde(default)]
    pub position: Vec2,
    #[serde(default = "default_size")]
    pub size: Vec2,

    /// Out-edges, in authored order.
    #[serde(default)]
    pub options: Vec<DialogueOption>,
}

impl Node {
    /// Create a node with no out-edges at the default editor placement.
    pub fn new(id: NodeId, kind: NodeKind) -> Self {
        Self {
            id,
            kind,
            position: Vec2::default(),
            size: default_size(),
            options: Vec::new(),
        }
    }

    /// Append an out-edge.
    pub fn with_option(mut self, option: DialogueOption) -> Self {
        self.options.push(option);
        self
    }

    /// Append an unlabeled out-edge pointing at `target`.
    pub fn with_target(mut self, target: NodeId) -> Self {
        self.with_option(DialogueOption::new("", target))
    }

    /// The first out-edge's destination, the advance rule for automatic kinds.
    pub fn first_target(&self) -> Option<NodeId> {
        self.options.first().map(|o| o.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_sentinel() {
        assert!(NodeId::UNSET.is_unset());
        assert!(NodeId(-1).is_unset());
        assert!(!NodeId(0).is_unset());
    }

    #[test]
    fn test_node_builder() {
        let node = Node::new(NodeId(3), NodeKind::Start)
            .with_target(NodeId(7))
            .with_option(DialogueOption::dangling("nowhere"));

        assert_eq!(node.id, NodeId(3));
        assert_eq!(node.options.len(), 2);
        assert_eq!(node.first_target(), Some(NodeId(7)));
        assert!(node.options[1].target.is_unset());
    }

    #[test]
    fn test_first_target_empty() {
        let node = Node::new(NodeId(1), NodeKind::Start);
        assert_eq!(node.first_target(), None);
    }

    #[test]
    fn test_automatic_kinds() {
        assert!(NodeKind::Start.is_automatic());
        assert!(NodeKind::Random.is_automatic());
        assert!(NodeKind::Condition {
            variable: "gold".into(),
            required: 1
        }
        .is_automatic());

        assert!(!NodeKind::End.is_automatic());
        assert!(!NodeKind::Dialogue {
            speaker: "Guard".into(),
            text: "Halt!".into()
        }
        .is_automatic());
    }

    #[test]
    fn test_default_option_chance() {
        let option = DialogueOption::new("a", NodeId(1));
        assert_eq!(option.chance, 50);
        assert_eq!(option.with_chance(30).chance, 30);
    }
}
