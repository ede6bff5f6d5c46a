//! Typed state container for the GrowthYari client.
//!
//! - [`State`]: plain values owned by the [`StateCtx`].
//! - [`Compute`]: values derived from other states, re-run when a dependency changes.
//! - [`Command`]: manual actions that may perform IO and report back through an [`Updater`].

mod command;
mod compute;
mod ctx;
mod dep;
mod error;
mod runtime;
mod slot;
mod snapshot;
mod state;
mod state_sync_status;

pub use command::{Command, CommandFuture, ready};
pub use compute::{Compute, ComputeDeps};
pub use ctx::StateCtx;
pub use dep::Dep;
pub use error::Error;
pub use runtime::Updater;
pub use snapshot::CommandSnapshot;
pub use state::State;
pub use state_sync_status::StateSyncStatus;
