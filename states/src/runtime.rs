use std::any::{Any, TypeId, type_name};

use flume::{Receiver, Sender};
use log::warn;

use crate::State;
use crate::slot::AnyBox;

pub(crate) type Reducer = Box<dyn FnOnce(&mut (dyn Any + Send + 'static)) + Send>;

pub(crate) enum Update {
    /// Replace the stored value.
    Set(TypeId, AnyBox),
    /// Mutate the stored value in place.
    Apply(TypeId, Reducer),
}

impl Update {
    pub(crate) fn id(&self) -> TypeId {
        match self {
            Self::Set(id, _) | Self::Apply(id, _) => *id,
        }
    }
}

/// Channel pair connecting updaters (possibly on other tasks) to the owning `StateCtx`.
pub(crate) struct StateRuntime {
    send: Sender<Update>,
    recv: Receiver<Update>,
}

impl Default for StateRuntime {
    fn default() -> Self {
        let (send, recv) = flume::unbounded();
        Self { send, recv }
    }
}

impl StateRuntime {
    pub(crate) fn updater(&self) -> Updater {
        Updater {
            send: self.send.clone(),
        }
    }

    pub(crate) fn drain(&self) -> Vec<Update> {
        self.recv.try_iter().collect()
    }
}

/// Sends new values back to the `StateCtx`.
///
/// Updates are queued and only become visible after
/// [`StateCtx::sync_computes`](crate::StateCtx::sync_computes).
#[derive(Clone)]
pub struct Updater {
    send: Sender<Update>,
}

impl Updater {
    /// Replace the whole value of `T`.
    pub fn set<T: State>(&self, value: T) {
        self.send(Update::Set(TypeId::of::<T>(), Box::new(value)), type_name::<T>());
    }

    /// Apply `reducer` to the current value of `T`.
    ///
    /// Use this instead of [`set`](Self::set) when the sender only owns part of the
    /// value, so concurrent edits to other fields are kept.
    pub fn update<T: State>(&self, reducer: impl FnOnce(&mut T) + Send + 'static) {
        let apply = move |value: &mut (dyn Any + Send + 'static)| {
            if let Some(value) = value.downcast_mut::<T>() {
                reducer(value);
            }
        };
        self.send(
            Update::Apply(TypeId::of::<T>(), Box::new(apply)),
            type_name::<T>(),
        );
    }

    fn send(&self, update: Update, name: &'static str) {
        if self.send.send(update).is_err() {
            warn!("Dropped update for {name}: state context is gone");
        }
    }
}

impl std::fmt::Debug for Updater {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Updater")
            .field("queued", &self.send.len())
            .finish()
    }
}
