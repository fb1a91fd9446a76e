//! Flattened node storage.
//!
//! Building a tree walks the owned [`Node`] description once, top-down,
//! assigning every node a stable [`NodeId`]. Children are owned downward
//! through the arena; parents are plain indices upward. Debug flags are
//! resolved during the same walk: a node traces if it, or any ancestor,
//! asked for tracing.

use std::fmt;

use crate::node::{Node, NodeKind};
use crate::{Action, Condition, Decorator};

/// Stable index of a node inside a built tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in depth-first, pre-order.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Evaluation data for one arena slot. Children live in [`Slot::children`].
pub(crate) enum Behavior<C> {
    Selector,
    Sequence,
    Parallel,
    Condition(Box<dyn Condition<C>>),
    Action(Box<dyn Action<C>>),
    Decorator(Box<dyn Decorator>),
}

pub(crate) struct Slot<C> {
    pub(crate) name: Option<String>,
    pub(crate) label: &'static str,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) debug: bool,
    pub(crate) behavior: Behavior<C>,
}

impl<C> Slot<C> {
    /// Name used in trace records: the node's own name, else `<kind>#<index>`.
    pub(crate) fn display_name(&self, id: NodeId) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("{}{}", self.label, id),
        }
    }
}

pub(crate) struct Arena<C> {
    slots: Vec<Slot<C>>,
}

impl<C> Arena<C> {
    /// Flattens `root` and returns the arena; the root is always `NodeId(0)`.
    ///
    /// `debug` forces tracing for the whole tree.
    pub(crate) fn build(root: Node<C>, debug: bool) -> Self {
        let mut arena = Self {
            slots: Vec::with_capacity(root.node_count()),
        };
        arena.attach(root, None, debug);
        arena
    }

    pub(crate) fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn get(&self, id: NodeId) -> Option<&Slot<C>> {
        self.slots.get(id.0)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (NodeId, &Slot<C>)> + '_ {
        self.slots.iter().enumerate().map(|(i, slot)| (NodeId(i), slot))
    }

    fn attach(&mut self, node: Node<C>, parent: Option<NodeId>, inherited_debug: bool) -> NodeId {
        let id = NodeId(self.slots.len());
        let debug = inherited_debug || node.debug;
        let label = node.kind.label();

        let (behavior, children) = match node.kind {
            NodeKind::Selector(children) => (Behavior::Selector, children),
            NodeKind::Sequence(children) => (Behavior::Sequence, children),
            NodeKind::Parallel(children) => (Behavior::Parallel, children),
            NodeKind::Condition(condition) => (Behavior::Condition(condition), Vec::new()),
            NodeKind::Action(action) => (Behavior::Action(action), Vec::new()),
            NodeKind::Decorator(decorator, child) => (Behavior::Decorator(decorator), vec![*child]),
        };

        self.slots.push(Slot {
            name: node.name,
            label,
            parent,
            children: Vec::with_capacity(children.len()),
            debug,
            behavior,
        });

        for child in children {
            let child_id = self.attach(child, Some(id), debug);
            self.slots[id.0].children.push(child_id);
        }

        id
    }
}

impl<C> std::ops::Index<NodeId> for Arena<C> {
    type Output = Slot<C>;

    #[inline]
    fn index(&self, id: NodeId) -> &Slot<C> {
        &self.slots[id.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Status;

    fn leaf() -> Node<()> {
        Node::action(|_: &mut ()| Status::Success)
    }

    #[test]
    fn ids_follow_pre_order() {
        let arena = Arena::build(
            Node::sequence(vec![
                Node::selector(vec![leaf().named("a"), leaf().named("b")]).named("sel"),
                leaf().named("c"),
            ])
            .named("root"),
            false,
        );

        let names: Vec<_> = arena.iter().map(|(_, slot)| slot.name.clone().unwrap()).collect();
        assert_eq!(names, ["root", "sel", "a", "b", "c"]);
        assert_eq!(arena.root(), NodeId(0));
        assert_eq!(arena[NodeId(0)].children, [NodeId(1), NodeId(4)]);
        assert_eq!(arena[NodeId(1)].children, [NodeId(2), NodeId(3)]);
    }

    #[test]
    fn parents_point_back_to_owners() {
        let arena = Arena::build(
            Node::parallel(vec![Node::inverter(leaf()), leaf(), Node::sequence(vec![leaf()])]),
            false,
        );

        assert_eq!(arena[arena.root()].parent, None);
        for (id, slot) in arena.iter().skip(1) {
            let parent = slot.parent.expect("non-root node has a parent");
            assert!(arena[parent].children.contains(&id));
        }
    }

    #[test]
    fn debug_cascades_into_subtree_only() {
        let arena = Arena::build(
            Node::sequence(vec![
                Node::selector(vec![leaf(), Node::inverter(leaf())]).with_debug(true),
                leaf(),
            ]),
            false,
        );

        let flags: Vec<_> = arena.iter().map(|(_, slot)| slot.debug).collect();
        assert_eq!(flags, [false, true, true, true, true, false]);
    }

    #[test]
    fn tree_wide_debug_reaches_every_node() {
        let arena = Arena::build(Node::sequence(vec![leaf(), leaf()]), true);
        assert!(arena.iter().all(|(_, slot)| slot.debug));
    }

    #[test]
    fn unnamed_nodes_use_kind_and_index() {
        let arena = Arena::build(Node::sequence(vec![leaf()]), false);
        assert_eq!(arena[NodeId(1)].display_name(NodeId(1)), "action#1");
    }
}
