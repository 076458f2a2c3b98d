//! # Dialogue Graph
//!
//! The data-model crate for the Weave dialogue engine: typed node graphs,
//! their structural invariants, and the inventory store that conditions and
//! text tags read. This crate holds state and validation only; traversal
//! lives in `dialogue_runtime`.
//!
//! ## Core Components
//!
//! - **graph**: nodes, typed out-edges, and load-time structural checks
//! - **inventory**: item-name to count store for one playthrough
//!
//! ## Design Philosophy
//!
//! - **Immutable at runtime**: a graph is built fully formed before any
//!   session walks it; traversal never mutates it
//! - **Closed node set**: node behavior is a tagged sum type, so every
//!   dispatch site matches exhaustively
//! - **Degrade, don't crash**: incomplete authored content is diagnosed,
//!   never a panic

pub mod graph;
pub mod inventory;

pub use graph::*;
pub use inventory::*;
