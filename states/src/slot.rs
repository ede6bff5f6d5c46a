//! Type-erased storage entry shared by `StateCtx`, `Dep` and `CommandSnapshot`.

use std::any::{Any, TypeId, type_name};
use std::collections::BTreeMap;

use crate::{Compute, Dep, State, StateSyncStatus, Updater};

pub(crate) type AnyBox = Box<dyn Any + Send>;

pub(crate) type Slots = BTreeMap<TypeId, Slot>;

pub(crate) struct Slot {
    pub(crate) value: AnyBox,
    pub(crate) name: &'static str,
    clone: fn(&(dyn Any + Send + 'static)) -> Option<AnyBox>,
    pub(crate) compute: Option<ComputeSlot>,
}

pub(crate) struct ComputeSlot {
    pub(crate) deps: Vec<TypeId>,
    pub(crate) status: StateSyncStatus,
    run: fn(&(dyn Any + Send + 'static), Dep<'_>, Updater),
}

impl Slot {
    pub(crate) fn state<T: State>(value: T) -> Self {
        Self {
            value: Box::new(value),
            name: type_name::<T>(),
            clone: clone_value::<T>,
            compute: None,
        }
    }

    pub(crate) fn compute<T: Compute>(value: T) -> Self {
        let deps = value.deps();
        Self {
            value: Box::new(value),
            name: type_name::<T>(),
            clone: clone_value::<T>,
            compute: Some(ComputeSlot {
                deps,
                status: StateSyncStatus::Init,
                run: run_compute::<T>,
            }),
        }
    }

    pub(crate) fn cloned(&self) -> Option<AnyBox> {
        (self.clone)(&*self.value)
    }

    pub(crate) fn downcast<T: State>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }

    pub(crate) fn downcast_mut<T: State>(&mut self) -> Option<&mut T> {
        self.value.downcast_mut::<T>()
    }

    pub(crate) fn depends_on(&self, id: TypeId) -> bool {
        self.compute.as_ref().is_some_and(|c| c.deps.contains(&id))
    }

    pub(crate) fn run(&self, deps: Dep<'_>, updater: Updater) {
        if let Some(compute) = &self.compute {
            (compute.run)(&*self.value, deps, updater);
        }
    }
}

fn clone_value<T: State>(value: &(dyn Any + Send + 'static)) -> Option<AnyBox> {
    value
        .downcast_ref::<T>()
        .map(|v| Box::new(v.clone()) as AnyBox)
}

fn run_compute<T: Compute>(value: &(dyn Any + Send + 'static), deps: Dep<'_>, updater: Updater) {
    if let Some(compute) = value.downcast_ref::<T>() {
        compute.compute(deps, updater);
    }
}
