//! Builder utilities for ergonomic behavior tree construction.
//!
//! Free-function shorthands for the [`Node`] constructors, so nested trees
//! read top-down: `selector(vec![sequence(vec![...]), action(...)])`.

use crate::{Action, Condition, Node};

/// Creates a sequence node.
///
/// Shorthand for `Node::sequence(children)`.
#[inline]
pub fn sequence<C>(children: Vec<Node<C>>) -> Node<C> {
    Node::sequence(children)
}

/// Creates a selector node.
///
/// Shorthand for `Node::selector(children)`.
#[inline]
pub fn selector<C>(children: Vec<Node<C>>) -> Node<C> {
    Node::selector(children)
}

/// Creates a parallel sequence node.
///
/// Shorthand for `Node::parallel(children)`.
#[inline]
pub fn parallel<C>(children: Vec<Node<C>>) -> Node<C> {
    Node::parallel(children)
}

/// Creates an inverter node.
///
/// Shorthand for `Node::inverter(child)`.
#[inline]
pub fn inverter<C>(child: Node<C>) -> Node<C> {
    Node::inverter(child)
}

/// Creates a named condition leaf.
#[inline]
pub fn condition<C>(name: &str, condition: impl Condition<C> + 'static) -> Node<C> {
    Node::condition(condition).named(name)
}

/// Creates a named action leaf.
#[inline]
pub fn action<C>(name: &str, action: impl Action<C> + 'static) -> Node<C> {
    Node::action(action).named(name)
}
