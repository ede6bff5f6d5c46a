use std::future::Future;
use std::pin::Pin;

use crate::{CommandSnapshot, Updater};

/// Future returned by [`Command::run`]. Spawned by the context once `run` returns.
pub type CommandFuture = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/// A manual-only action, the only place allowed to perform IO.
///
/// `run` executes synchronously on the UI thread when the command is flushed; anything it
/// publishes through `updater` before returning is applied before the next command runs.
/// The returned future is then spawned and reports back through the same `updater`.
pub trait Command: Send + Sync + 'static {
    fn run(&self, snap: CommandSnapshot, updater: Updater) -> CommandFuture;
}

/// A future that does nothing, for commands that bail out during `run`.
pub fn ready() -> CommandFuture {
    Box::pin(std::future::ready(()))
}
