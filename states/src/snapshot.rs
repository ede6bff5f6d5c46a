use std::any::{TypeId, type_name};
use std::collections::BTreeMap;

use crate::State;
use crate::slot::{AnyBox, Slots};

/// Owned copy of every state and compute, taken right before a command runs.
///
/// Commands read their inputs from the snapshot so the returned future can be
/// `'static` and never borrow the live context.
#[derive(Default)]
pub struct CommandSnapshot {
    inner: BTreeMap<TypeId, AnyBox>,
}

impl CommandSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn capture(slots: &Slots) -> Self {
        let inner = slots
            .iter()
            .filter_map(|(id, slot)| slot.cloned().map(|value| (*id, value)))
            .collect();
        Self { inner }
    }

    /// Put a value into the snapshot. Mostly useful for running a command in isolation.
    pub fn insert<T: State>(&mut self, value: T) {
        self.inner.insert(TypeId::of::<T>(), Box::new(value));
    }

    pub fn try_state<T: State>(&self) -> Option<&T> {
        self.inner
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref::<T>())
    }

    /// # Panics
    /// Panics if `T` was not registered in the context the snapshot was taken from.
    pub fn state<T: State>(&self) -> &T {
        self.try_state::<T>()
            .unwrap_or_else(|| panic!("State snapshot for {} is missing", type_name::<T>()))
    }

    pub fn get_state<T: State>(&self) -> T {
        self.state::<T>().clone()
    }
}

impl std::fmt::Debug for CommandSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandSnapshot")
            .field("len", &self.inner.len())
            .finish()
    }
}
