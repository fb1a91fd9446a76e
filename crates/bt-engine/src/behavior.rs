//! Consumer extension points.
//!
//! Leaf logic is supplied from outside the engine through the [`Condition`]
//! and [`Action`] traits, and status remapping through [`Decorator`]. All
//! three are generic over (or independent of) the context type `C`, and each
//! has a blanket implementation for plain closures so small trees can be
//! written inline.

use crate::Status;

/// A side-effect free check against the context.
///
/// The context is borrowed immutably, so a condition cannot change shared
/// state, and it reports a `bool`, so it can never be `Running`.
pub trait Condition<C>: Send + Sync {
    /// Returns `true` when the condition holds.
    fn condition(&self, ctx: &C) -> bool;
}

/// A unit of work performed against the context.
pub trait Action<C>: Send + Sync {
    /// Performs (or continues) the action.
    ///
    /// # Returns
    ///
    /// - `Status::Success` if the action finished
    /// - `Status::Running` if it needs further ticks
    /// - `Status::Failure` if it could not be carried out
    ///
    /// Progress that spans ticks must be kept in `ctx`; the node itself holds
    /// no state between updates.
    fn action(&self, ctx: &mut C) -> Status;
}

/// Remaps the status of a decorator's single child.
pub trait Decorator: Send + Sync {
    /// Transforms the child's freshly computed status.
    fn decorate(&self, status: Status) -> Status;
}

impl<C, F> Condition<C> for F
where
    F: Fn(&C) -> bool + Send + Sync,
{
    #[inline]
    fn condition(&self, ctx: &C) -> bool {
        self(ctx)
    }
}

impl<C, F> Action<C> for F
where
    F: Fn(&mut C) -> Status + Send + Sync,
{
    #[inline]
    fn action(&self, ctx: &mut C) -> Status {
        self(ctx)
    }
}

impl<F> Decorator for F
where
    F: Fn(Status) -> Status + Send + Sync,
{
    #[inline]
    fn decorate(&self, status: Status) -> Status {
        self(status)
    }
}
