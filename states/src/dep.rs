use std::any::type_name;

use crate::slot::Slots;
use crate::State;

/// Read-only view over the context handed to [`Compute::compute`](crate::Compute::compute).
#[derive(Clone, Copy)]
pub struct Dep<'a> {
    slots: &'a Slots,
}

impl<'a> Dep<'a> {
    pub(crate) fn new(slots: &'a Slots) -> Self {
        Self { slots }
    }

    pub fn try_state<T: State>(&self) -> Option<&'a T> {
        self.slots
            .get(&std::any::TypeId::of::<T>())
            .and_then(|slot| slot.downcast::<T>())
    }

    /// # Panics
    /// Panics if `T` was never registered; declaring it in `deps()` without
    /// registering it is a wiring bug.
    pub fn get_state_ref<T: State>(&self) -> &'a T {
        self.try_state::<T>()
            .unwrap_or_else(|| panic!("Dependency {} is not registered", type_name::<T>()))
    }
}

impl std::fmt::Debug for Dep<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.slots.values().map(|slot| slot.name))
            .finish()
    }
}
