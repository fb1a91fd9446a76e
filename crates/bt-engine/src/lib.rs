//! Synchronous behavior tree evaluation engine.
//!
//! A behavior tree is evaluated by repeated "ticks": each call to
//! [`BehaviorTree::update`] walks the tree once, depth-first and to
//! completion. Work that spans several updates reports [`Status::Running`]
//! and is re-entered from the root on the next update.
//!
//! - **Three statuses**: `Success`, `Running`, `Failure`
//! - **Arena-backed**: nodes are flattened once at build time; parents are
//!   indices, children are owned
//! - **Context by parameter**: the shared context is handed to every node
//!   on every tick and a tree cannot be built without one
//! - **Subtree tracing**: debug flags cascade at build time and produce
//!   `tracing` records of the form `<name>: <STATUS>`
//!
//! # Architecture
//!
//! - [`Node`]: owned, bottom-up description of a subtree
//! - [`BehaviorTree`] / [`TreeBuilder`]: driver owning nodes and context
//! - [`Status`]: Success, Running or Failure
//! - Composite nodes: selector, sequence, parallel sequence
//! - Leaf extension points: [`Condition`], [`Action`]
//! - Decorator nodes: [`Decorator`], [`Inverter`]

pub mod behavior;
pub mod builder;
pub mod config;
pub mod decorator;
pub mod error;
pub mod node;
pub mod status;
pub mod tree;

mod arena;
mod composite;

// Re-export core types for ergonomic API
pub use arena::NodeId;
pub use behavior::{Action, Condition, Decorator};
pub use config::TreeConfig;
pub use decorator::Inverter;
pub use error::{InitializationError, Result};
pub use node::{Node, NodeKind};
pub use status::Status;
pub use tree::{BehaviorTree, TRACE_TARGET, TreeBuilder};
