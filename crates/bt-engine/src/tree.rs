//! Tree driver.
//!
//! [`BehaviorTree`] owns the flattened nodes and the shared context, and is
//! the only thing a consumer calls per simulation step. [`TreeBuilder`]
//! checks that both a context and a root were supplied before anything can
//! be ticked.

use crate::arena::{Arena, Behavior};
use crate::{InitializationError, Node, NodeId, Result, Status, TreeConfig, composite};

/// `tracing` target for per-node trace records.
pub const TRACE_TARGET: &str = "bt_engine::trace";

/// A built behavior tree bound to its context.
///
/// # Example
///
/// ```rust
/// use bt_engine::{BehaviorTree, Node, Status};
///
/// struct Guard {
///     alarm: bool,
///     shouts: u32,
/// }
///
/// let root = Node::selector(vec![
///     Node::sequence(vec![
///         Node::condition(|g: &Guard| g.alarm),
///         Node::action(|g: &mut Guard| {
///             g.shouts += 1;
///             Status::Success
///         }),
///     ]),
///     Node::action(|_: &mut Guard| Status::Running),
/// ]);
///
/// let mut tree = BehaviorTree::new(Guard { alarm: false, shouts: 0 }, root).unwrap();
/// assert_eq!(tree.update(), Status::Running);
///
/// tree.context_mut().alarm = true;
/// assert_eq!(tree.update(), Status::Success);
/// assert_eq!(tree.context().shouts, 1);
/// ```
pub struct BehaviorTree<C> {
    context: C,
    arena: Arena<C>,
    statuses: Vec<Option<Status>>,
    ticks: u64,
}

impl<C> BehaviorTree<C> {
    /// Start building a tree.
    pub fn builder() -> TreeBuilder<C> {
        TreeBuilder::new()
    }

    /// Builds a tree with the default [`TreeConfig`].
    pub fn new(context: C, root: Node<C>) -> Result<Self> {
        Self::builder().context(context).root(root).build()
    }

    /// Performs one evaluation pass from the root and returns its status.
    pub fn update(&mut self) -> Status {
        self.ticks += 1;
        let _span = tracing::debug_span!("update", tick = self.ticks).entered();

        let root = self.arena.root();
        let mut evaluator = Evaluator {
            arena: &self.arena,
            statuses: &mut self.statuses,
        };
        evaluator.tick(root, &mut self.context)
    }

    /// Status of the root after the last update, `None` before the first.
    pub fn status(&self) -> Option<Status> {
        self.node_status(self.arena.root())
    }

    /// Number of completed updates.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn root(&self) -> NodeId {
        self.arena.root()
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// A built tree always has a root, so it is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Last status of `id`, `None` if it has never been reached.
    pub fn node_status(&self, id: NodeId) -> Option<Status> {
        self.statuses.get(id.index()).copied().flatten()
    }

    pub fn name(&self, id: NodeId) -> Option<&str> {
        self.arena.get(id)?.name.as_deref()
    }

    /// Parent of `id`; `None` for the root or an unknown id.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.arena.get(id)?.parent
    }

    /// Children of `id` in evaluation order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.arena
            .get(id)
            .map(|slot| slot.children.as_slice())
            .unwrap_or_default()
    }

    /// Whether ticks of `id` emit trace records.
    pub fn is_debug(&self, id: NodeId) -> bool {
        self.arena.get(id).is_some_and(|slot| slot.debug)
    }

    /// First node named `name` in depth-first order.
    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.arena
            .iter()
            .find(|(_, slot)| slot.name.as_deref() == Some(name))
            .map(|(id, _)| id)
    }

    pub fn context(&self) -> &C {
        &self.context
    }

    /// Mutable access to the context between updates.
    pub fn context_mut(&mut self) -> &mut C {
        &mut self.context
    }

    /// Drops the tree and hands the context back.
    pub fn into_context(self) -> C {
        self.context
    }
}

impl<C> std::fmt::Debug for BehaviorTree<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BehaviorTree")
            .field("nodes", &self.arena.len())
            .field("status", &self.status())
            .field("ticks", &self.ticks)
            .finish_non_exhaustive()
    }
}

/// Builder for [`BehaviorTree`].
pub struct TreeBuilder<C> {
    config: TreeConfig,
    context: Option<C>,
    root: Option<Node<C>>,
}

impl<C> TreeBuilder<C> {
    fn new() -> Self {
        Self {
            config: TreeConfig::default(),
            context: None,
            root: None,
        }
    }

    /// Override tree configuration
    pub fn config(mut self, config: TreeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set required context shared by every node
    pub fn context(mut self, context: C) -> Self {
        self.context = Some(context);
        self
    }

    /// Set required top-level node
    pub fn root(mut self, root: Node<C>) -> Self {
        self.root = Some(root);
        self
    }

    /// Build the tree
    ///
    /// Flattens the root description, links parents and resolves debug
    /// flags. Fails if the context or the root is missing.
    pub fn build(self) -> Result<BehaviorTree<C>> {
        let context = self.context.ok_or(InitializationError::MissingContext)?;
        let root = self.root.ok_or(InitializationError::MissingRoot)?;

        let arena = Arena::build(root, self.config.debug);
        tracing::trace!(nodes = arena.len(), debug = self.config.debug, "behavior tree built");

        Ok(BehaviorTree {
            context,
            statuses: vec![None; arena.len()],
            arena,
            ticks: 0,
        })
    }
}

/// Walks the arena for one update.
///
/// Node data is borrowed for the whole update while statuses are written
/// through a separate borrow, so composites can iterate their child lists
/// and tick children at the same time.
struct Evaluator<'a, C> {
    arena: &'a Arena<C>,
    statuses: &'a mut [Option<Status>],
}

impl<C> Evaluator<'_, C> {
    /// Evaluates `id`, caches its status and traces it when enabled.
    fn tick(&mut self, id: NodeId, ctx: &mut C) -> Status {
        let status = self.evaluate(id, ctx);
        self.statuses[id.index()] = Some(status);

        let slot = &self.arena[id];
        if slot.debug {
            tracing::debug!(target: TRACE_TARGET, node = id.index(), "{}: {}", slot.display_name(id), status);
        }
        status
    }

    fn evaluate(&mut self, id: NodeId, ctx: &mut C) -> Status {
        let arena = self.arena;
        let slot = &arena[id];

        match &slot.behavior {
            Behavior::Selector => composite::select(&slot.children, |child| self.tick(child, ctx)),
            Behavior::Sequence => composite::sequence(&slot.children, |child| self.tick(child, ctx)),
            Behavior::Parallel => composite::parallel(&slot.children, |child| self.tick(child, ctx)),
            Behavior::Condition(condition) => {
                if condition.condition(ctx) {
                    Status::Success
                } else {
                    Status::Failure
                }
            }
            Behavior::Action(action) => action.action(ctx),
            Behavior::Decorator(decorator) => {
                let child = slot.children[0];
                decorator.decorate(self.tick(child, ctx))
            }
        }
    }
}
