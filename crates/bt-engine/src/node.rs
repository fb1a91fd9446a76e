//! Bottom-up node descriptions.
//!
//! A [`Node`] is an owned description of a subtree. Consumers build leaves
//! first and hand them to composite and decorator constructors, which take
//! ownership of their children. The finished description is given to
//! [`BehaviorTree`](crate::BehaviorTree), which flattens it into an arena and
//! resolves parent links and debug flags in a single pass.

use crate::{Action, Condition, Decorator, Inverter};

/// The closed set of node kinds, with kind-specific data.
pub enum NodeKind<C> {
    /// Tries children in order until one succeeds or is still running.
    Selector(Vec<Node<C>>),
    /// Runs children in order until one does not succeed.
    Sequence(Vec<Node<C>>),
    /// Ticks every child each update, failing fast on the first failure.
    Parallel(Vec<Node<C>>),
    /// Consumer check mapped to `Success`/`Failure`.
    Condition(Box<dyn Condition<C>>),
    /// Consumer work whose status is reported unmodified.
    Action(Box<dyn Action<C>>),
    /// Remaps the status of exactly one child.
    Decorator(Box<dyn Decorator>, Box<Node<C>>),
}

impl<C> NodeKind<C> {
    /// Short lowercase label used when a node has no name.
    pub fn label(&self) -> &'static str {
        match self {
            NodeKind::Selector(_) => "selector",
            NodeKind::Sequence(_) => "sequence",
            NodeKind::Parallel(_) => "parallel",
            NodeKind::Condition(_) => "condition",
            NodeKind::Action(_) => "action",
            NodeKind::Decorator(..) => "decorator",
        }
    }
}

/// A node description, owning its children.
pub struct Node<C> {
    pub(crate) name: Option<String>,
    pub(crate) debug: bool,
    pub(crate) kind: NodeKind<C>,
}

impl<C> Node<C> {
    fn from_kind(kind: NodeKind<C>) -> Self {
        Self {
            name: None,
            debug: false,
            kind,
        }
    }

    /// Creates a selector over the given children.
    ///
    /// An empty selector is allowed and always fails.
    pub fn selector(children: Vec<Node<C>>) -> Self {
        Self::from_kind(NodeKind::Selector(children))
    }

    /// Creates a sequence over the given children.
    ///
    /// An empty sequence is allowed and always succeeds.
    pub fn sequence(children: Vec<Node<C>>) -> Self {
        Self::from_kind(NodeKind::Sequence(children))
    }

    /// Creates a parallel sequence over the given children.
    ///
    /// An empty parallel sequence is allowed and always succeeds.
    pub fn parallel(children: Vec<Node<C>>) -> Self {
        Self::from_kind(NodeKind::Parallel(children))
    }

    /// Creates a condition leaf.
    pub fn condition(condition: impl Condition<C> + 'static) -> Self {
        Self::from_kind(NodeKind::Condition(Box::new(condition)))
    }

    /// Creates an action leaf.
    pub fn action(action: impl Action<C> + 'static) -> Self {
        Self::from_kind(NodeKind::Action(Box::new(action)))
    }

    /// Wraps `child` in an arbitrary decorator.
    pub fn decorator(decorator: impl Decorator + 'static, child: Node<C>) -> Self {
        Self::from_kind(NodeKind::Decorator(Box::new(decorator), Box::new(child)))
    }

    /// Wraps `child` in an [`Inverter`].
    pub fn inverter(child: Node<C>) -> Self {
        Self::decorator(Inverter, child)
    }

    /// Sets the display name used in traces and lookups.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Enables tracing for this node and every descendant.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn kind(&self) -> &NodeKind<C> {
        &self.kind
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + match &self.kind {
            NodeKind::Selector(children)
            | NodeKind::Sequence(children)
            | NodeKind::Parallel(children) => children.iter().map(Node::node_count).sum(),
            NodeKind::Decorator(_, child) => child.node_count(),
            NodeKind::Condition(_) | NodeKind::Action(_) => 0,
        }
    }
}

impl<C> std::fmt::Debug for Node<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Node")
            .field("kind", &self.kind.label())
            .field("name", &self.name)
            .field("debug", &self.debug)
            .finish_non_exhaustive()
    }
}
