use std::any::TypeId;

use crate::{Dep, State, Updater};

/// Type ids of the states (or computes) a compute reads.
pub type ComputeDeps = Vec<TypeId>;

/// A value derived from other states.
///
/// A compute is re-run by [`StateCtx::run_computed`](crate::StateCtx::run_computed)
/// whenever one of its [`deps`](Compute::deps) changed. It must stay side-effect free:
/// network IO belongs in a [`Command`](crate::Command).
pub trait Compute: State {
    fn deps(&self) -> ComputeDeps;

    /// Publish the new value with `updater.set(..)`.
    fn compute(&self, deps: Dep<'_>, updater: Updater);
}
