//! Decorator nodes.
//!
//! Decorators wrap a single child and remap its result. This module provides
//! [`Inverter`] (NOT logic); anything implementing [`Decorator`] can be
//! attached with [`Node::decorator`](crate::Node::decorator).

use crate::{Decorator, Status};

/// Inverts the result of its child.
///
/// # Semantics
///
/// - If the child returns `Success`, the inverter returns `Failure`
/// - If the child returns `Failure`, the inverter returns `Success`
/// - If the child returns `Running`, the inverter returns `Running`
///
/// This is analogous to a logical NOT (!) operation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Inverter;

impl Decorator for Inverter {
    #[inline]
    fn decorate(&self, status: Status) -> Status {
        status.invert()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BehaviorTree, Node};

    struct TestContext {
        value: i32,
    }

    fn is_positive(ctx: &TestContext) -> bool {
        ctx.value > 0
    }

    #[test]
    fn inverter_maps_every_status() {
        assert_eq!(Inverter.decorate(Status::Success), Status::Failure);
        assert_eq!(Inverter.decorate(Status::Failure), Status::Success);
        assert_eq!(Inverter.decorate(Status::Running), Status::Running);
    }

    #[test]
    fn inverter_inverts_success() {
        let mut tree =
            BehaviorTree::new(TestContext { value: 10 }, Node::inverter(Node::condition(is_positive)))
                .unwrap();
        assert_eq!(tree.update(), Status::Failure);
    }

    #[test]
    fn inverter_inverts_failure() {
        let mut tree =
            BehaviorTree::new(TestContext { value: -10 }, Node::inverter(Node::condition(is_positive)))
                .unwrap();
        assert_eq!(tree.update(), Status::Success);
    }

    #[test]
    fn custom_decorator_sees_child_status() {
        let always_succeed = |_: Status| Status::Success;
        let child = Node::action(|ctx: &mut TestContext| {
            ctx.value += 1;
            Status::Failure
        });
        let mut tree =
            BehaviorTree::new(TestContext { value: 0 }, Node::decorator(always_succeed, child)).unwrap();

        assert_eq!(tree.update(), Status::Success);
        // Child still executed
        assert_eq!(tree.context().value, 1);
    }
}
