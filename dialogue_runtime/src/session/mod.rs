//! The traversal state machine.
//!
//! A session walks one graph with one cursor. Automatic nodes (start,
//! events, conditions, random branches) resolve synchronously in a single
//! burst; control only returns to the host at a dialogue suspension, the
//! end node, or a stall.

mod rng;

pub use rng::*;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use dialogue_graph::{
    DialogueGraph, GraphError, Inventory, InventoryAction, Node, NodeId, NodeKind,
};

use crate::interpolate::interpolate;
use crate::presenter::Presenter;

/// Closing line emitted when an `End` node is reached.
pub const END_OF_CONVERSATION: &str = "End of conversation.";

/// Where a session currently stands, returned by every advancing call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// Suspended at a dialogue node; `options` holds the choice labels in
    /// option order. Resume with [`DialogueSession::select_option`].
    Awaiting { options: Vec<String> },

    /// An `End` node was reached; the conversation is over.
    Ended,

    /// Traversal stopped without reaching an end: an unset or dangling
    /// target, a zero-weight random node, or a malformed condition.
    Stalled,
}

impl SessionState {
    /// Whether the session can still accept a choice.
    pub fn is_awaiting(&self) -> bool {
        matches!(self, SessionState::Awaiting { .. })
    }
}

/// Outcome of visiting one node.
enum Step {
    /// Automatic node resolved; move the cursor here.
    Advance(NodeId),
    /// No usable out-edge; stop at the current node.
    Halt,
    /// Interactive or terminal node; hand control back to the host.
    Finish(SessionState),
}

/// One playthrough of a dialogue graph.
///
/// The graph is borrowed immutably for the session's lifetime; the session
/// owns its cursor, inventory, presenter, and draw source, so dropping it
/// abandons the playthrough cleanly between suspensions.
pub struct DialogueSession<'g, P, R> {
    graph: &'g DialogueGraph,
    presenter: P,
    rng: R,
    inventory: Inventory,
    current: Option<NodeId>,
    state: SessionState,
}

impl<'g, P: Presenter> DialogueSession<'g, P, SplitMix> {
    /// Create a session with an empty inventory and the default draw source.
    pub fn new(graph: &'g DialogueGraph, presenter: P) -> Self {
        Self::with_parts(graph, presenter, SplitMix::default(), Inventory::new())
    }
}

impl<'g, P: Presenter, R: Roll> DialogueSession<'g, P, R> {
    /// Create a session with an explicit draw source and inventory.
    pub fn with_parts(
        graph: &'g DialogueGraph,
        presenter: P,
        rng: R,
        inventory: Inventory,
    ) -> Self {
        Self {
            graph,
            presenter,
            rng,
            inventory,
            current: None,
            state: SessionState::Stalled,
        }
    }

    /// Seed the session with an existing inventory.
    pub fn with_inventory(mut self, inventory: Inventory) -> Self {
        self.inventory = inventory;
        self
    }

    /// The state reported by the last advancing call. Before [`start`]
    /// this is `Stalled`.
    ///
    /// [`start`]: DialogueSession::start
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The node the cursor rests on, if it still resolves.
    ///
    /// `None` means the session is over or was never started; hosts can use
    /// this to detect "nothing left to render".
    pub fn current_node(&self) -> Option<&'g Node> {
        self.current.and_then(|id| self.graph.get(id))
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Begin traversal at the graph's `Start` node and resolve through any
    /// automatic chain in one call.
    ///
    /// Fails if the graph has no start node. When authoring left several,
    /// the first in insertion order wins.
    pub fn start(&mut self) -> Result<SessionState, GraphError> {
        let entry = self.graph.start_node().ok_or(GraphError::NoStartNode)?;
        self.current = Some(entry.id);
        self.state = self.drive();
        Ok(self.state.clone())
    }

    /// Feed a choice back into a session suspended at a dialogue node.
    ///
    /// Ignored with no state change unless the session is awaiting and the
    /// index falls inside the current option set, so stray UI events (a
    /// double-click, a late signal) cannot corrupt the cursor. A choice
    /// whose target is the `-1` sentinel parks the session without
    /// rendering anything further.
    pub fn select_option(&mut self, index: usize) -> SessionState {
        if !self.state.is_awaiting() {
            return self.state.clone();
        }

        let graph = self.graph;
        let node = match self.current.and_then(|id| graph.get(id)) {
            Some(node) => node,
            None => return self.state.clone(),
        };

        let target = match node.options.get(index) {
            Some(option) => option.target,
            None => {
                debug!("choice {index} on node {} out of range, ignoring", node.id);
                return self.state.clone();
            }
        };

        if target.is_unset() {
            self.current = None;
            self.state = SessionState::Stalled;
        } else {
            self.current = Some(target);
            self.state = self.drive();
        }

        self.state.clone()
    }

    /// Resolve automatic nodes until the session suspends, ends, or stalls.
    ///
    /// This is the atomic burst: no control is yielded between automatic
    /// nodes, so their side effects land before the host sees the result.
    fn drive(&mut self) -> SessionState {
        let graph = self.graph;

        loop {
            let id = match self.current {
                Some(id) => id,
                None => return SessionState::Stalled,
            };

            let node = match graph.get(id) {
                Some(node) => node,
                None => {
                    debug!("node {id} not found, session stalls");
                    self.current = None;
                    return SessionState::Stalled;
                }
            };

            match self.visit(node) {
                Step::Advance(target) => {
                    if target.is_unset() {
                        self.current = None;
                        return SessionState::Stalled;
                    }
                    self.current = Some(target);
                }
                Step::Halt => return SessionState::Stalled,
                Step::Finish(state) => return state,
            }
        }
    }

    /// Dispatch one node purely on its kind.
    fn visit(&mut self, node: &Node) -> Step {
        match &node.kind {
            NodeKind::Start => self.advance_first(node),

            NodeKind::InventoryEvent {
                action,
                item,
                amount,
            } => {
                match action {
                    InventoryAction::Add => self.inventory.add(item.clone(), *amount),
                    InventoryAction::Remove => self.inventory.remove(item, *amount),
                }
                self.advance_first(node)
            }

            NodeKind::Condition { variable, required } => {
                if node.options.len() < 2 {
                    warn!("condition node {} has fewer than two options", node.id);
                    return Step::Halt;
                }

                let branch = if self.inventory.has_at_least(variable, *required) {
                    0
                } else {
                    1
                };
                Step::Advance(node.options[branch].target)
            }

            NodeKind::Random => self.pick_random(node),

            NodeKind::SpriteEvent { slot, sprite } => {
                self.presenter.set_sprite(*slot, sprite.as_ref());
                self.advance_first(node)
            }

            NodeKind::AudioEvent {
                slot,
                clip,
                action,
                looped,
            } => {
                self.presenter
                    .handle_audio(*slot, clip.as_ref(), *action, *looped);
                self.advance_first(node)
            }

            NodeKind::Dialogue { speaker, text } => {
                self.presenter.hide_all_options();

                let line = interpolate(text, &self.inventory);
                self.presenter.show_dialogue(speaker, &line);

                let labels: Vec<String> = node.options.iter().map(|o| o.text.clone()).collect();
                self.presenter.show_options(&labels);

                Step::Finish(SessionState::Awaiting { options: labels })
            }

            NodeKind::End => {
                self.presenter.show_dialogue("", END_OF_CONVERSATION);
                self.presenter.hide_all_options();
                Step::Finish(SessionState::Ended)
            }
        }
    }

    /// Follow the first out-edge, the advance rule shared by every
    /// non-branching automatic kind.
    fn advance_first(&self, node: &Node) -> Step {
        match node.first_target() {
            Some(target) => Step::Advance(target),
            None => {
                debug!("node {} has no out-edge, session stalls", node.id);
                Step::Halt
            }
        }
    }

    /// Cumulative-weight draw over the node's options.
    ///
    /// `r` is drawn from `[0, total)`; walking options in order, the first
    /// one whose running sum exceeds `r` wins, so each option's selection
    /// probability is exactly `chance / total`.
    fn pick_random(&mut self, node: &Node) -> Step {
        let total: u32 = node.options.iter().map(|o| o.chance).sum();
        if total == 0 {
            warn!("random node {} has zero total weight, session stalls", node.id);
            return Step::Halt;
        }

        let r = self.rng.roll(total);
        let mut acc = 0;
        for option in &node.options {
            acc += option.chance;
            if r < acc {
                return Step::Advance(option.target);
            }
        }

        // Unreachable while `roll` honors its bound; stop rather than panic.
        Step::Halt
    }
}
