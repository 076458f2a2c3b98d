//! # Dialogue Runtime
//!
//! The traversal engine for Weave dialogue graphs. A [`DialogueSession`]
//! walks an immutable [`dialogue_graph::DialogueGraph`], resolving chains of
//! automatic nodes in one atomic burst and suspending at dialogue nodes
//! until the host feeds a choice back in.
//!
//! ## Core Components
//!
//! - **session**: the node-type state machine and its two-phase API
//! - **interpolate**: `{key}` tag substitution against the inventory
//! - **presenter**: the port the engine emits display and cue commands to
//!
//! ## Design Philosophy
//!
//! - **Suspension is a value**: every advancing call returns a
//!   [`SessionState`], so hosts poll state instead of wiring callbacks
//! - **Single-threaded by design**: a session runs synchronously between
//!   suspensions and is plain state, safe to abandon at any time
//! - **Degrade, don't crash**: dangling targets, malformed conditions, and
//!   zero-weight branches stall the session with a diagnostic

pub mod interpolate;
pub mod presenter;
pub mod session;

pub use interpolate::*;
pub use presenter::*;
pub use session::*;
