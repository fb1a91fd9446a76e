//! Composite evaluation policies.
//!
//! Composite nodes control the execution flow of multiple children. Each
//! policy receives the ordered child ids and a `tick` callback that
//! evaluates one child (caching its status and tracing it), and decides how
//! far to scan and what to report.

use crate::{NodeId, Status};

/// Tries children in order until one succeeds or is still running.
///
/// # Semantics
///
/// - If a child returns `Success`, the selector **stops** and returns `Success`
/// - If a child returns `Running`, the selector **stops** and returns `Running`
/// - If a child returns `Failure`, the selector **continues** to the next child
/// - If all children fail (or there are none), the selector returns `Failure`
///
/// This is analogous to a short-circuited logical OR (||) operation.
pub(crate) fn select(children: &[NodeId], mut tick: impl FnMut(NodeId) -> Status) -> Status {
    for &child in children {
        match tick(child) {
            Status::Failure => continue, // Try next child
            status => return status,     // Short-circuit on Success or Running
        }
    }
    // All children failed
    Status::Failure
}

/// Runs children in order until one does not succeed.
///
/// # Semantics
///
/// - If a child returns `Success`, the sequence **continues** to the next child
/// - Otherwise the sequence **stops** and reports that child's status
/// - If all children succeed (or there are none), the sequence returns `Success`
///
/// This is analogous to a short-circuited logical AND (&&) operation.
pub(crate) fn sequence(children: &[NodeId], mut tick: impl FnMut(NodeId) -> Status) -> Status {
    for &child in children {
        match tick(child) {
            Status::Success => continue, // Move to next child
            status => return status,     // Abort on Failure, suspend on Running
        }
    }
    // All children succeeded
    Status::Success
}

/// Ticks every child each update; fails fast, otherwise waits for all.
///
/// # Semantics
///
/// - A `Running` child does **not** stop the scan
/// - A `Failure` stops the scan immediately and returns `Failure`
/// - After a full scan, returns `Running` if any child was running
/// - If all children succeed (or there are none), returns `Success`
pub(crate) fn parallel(children: &[NodeId], mut tick: impl FnMut(NodeId) -> Status) -> Status {
    let mut running = false;
    for &child in children {
        match tick(child) {
            Status::Success => {}
            Status::Running => running = true,
            Status::Failure => return Status::Failure,
        }
    }
    if running {
        Status::Running
    } else {
        Status::Success
    }
}
