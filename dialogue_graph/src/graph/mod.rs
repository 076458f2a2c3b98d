//! The dialogue graph - an ordered node collection with structural checks.

mod node;

pub use node::*;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Structural problems a graph can carry.
///
/// `NoStartNode` is fatal to session start. The rest are diagnostics:
/// authored content is often legitimately incomplete mid-design, so
/// traversal degrades to a stall instead of refusing to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("graph has no Start node")]
    NoStartNode,

    #[error("condition node {id} has fewer than two options")]
    MalformedCondition { id: NodeId },

    #[error("node id {id} is used more than once")]
    DuplicateNodeId { id: NodeId },

    #[error("node {id} targets missing node {target}")]
    DanglingTarget { id: NodeId, target: NodeId },
}

/// A full authored dialogue tree.
///
/// Graphs are constructed fully formed (loaded or authored) and never
/// mutated by traversal; sessions only hold a cursor into them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DialogueGraph {
    pub nodes: Vec<Node>,
}

impl DialogueGraph {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    /// Look a node up by id.
    ///
    /// Linear scan: graphs run tens to low hundreds of nodes, so an index
    /// map would not pay for itself.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// The entry node. If authoring left more than one `Start` in the
    /// graph, the first in insertion order wins.
    pub fn start_node(&self) -> Option<&Node> {
        self.nodes.iter().find(|n| matches!(n.kind, NodeKind::Start))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Report every structural problem in the graph.
    ///
    /// Meant to run eagerly at load time so a host can surface authoring
    /// defects before a session starts.
    pub fn validate(&self) -> Vec<GraphError> {
        let mut errors = Vec::new();

        if self.start_node().is_none() {
            errors.push(GraphError::NoStartNode);
        }

        let mut seen = HashSet::new();
        for node in &self.nodes {
            if !seen.insert(node.id) {
                errors.push(GraphError::DuplicateNodeId { id: node.id });
            }

            if matches!(node.kind, NodeKind::Condition { .. }) && node.options.len() < 2 {
                errors.push(GraphError::MalformedCondition { id: node.id });
            }

            for option in &node.options {
                if !option.target.is_unset() && self.get(option.target).is_none() {
                    errors.push(GraphError::DanglingTarget {
                        id: node.id,
                        target: option.target,
                    });
                }
            }
        }

        errors
    }
}

impl From<Vec<Node>> for DialogueGraph {
    fn from(nodes: Vec<Node>) -> Self {
        Self::new(nodes)
    }
}
