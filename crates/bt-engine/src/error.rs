//! Errors raised while building a tree.
//!
//! Evaluation itself never fails: statuses report "not done yet" and "did
//! not work". The only checked failures happen before the first tick.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, InitializationError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InitializationError {
    #[error("behavior tree requires a context before building")]
    MissingContext,

    #[error("behavior tree requires a root node before building")]
    MissingRoot,
}
