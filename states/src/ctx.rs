use std::any::{TypeId, type_name};
use std::collections::BTreeMap;
use std::sync::Arc;

use log::{debug, warn};

use crate::runtime::{StateRuntime, Update};
use crate::slot::{Slot, Slots};
use crate::{
    Command, CommandFuture, CommandSnapshot, Compute, Dep, Error, State, StateSyncStatus, Updater,
};

/// Owner of every state, compute and command of the app.
///
/// The frame loop is:
/// 1. `sync_computes()` applies updates sent by finished commands.
/// 2. The UI reads via `state` / `cached` and writes via `state_mut` / `update`,
///    queueing commands with `enqueue_command`.
/// 3. `flush_commands()` runs queued commands; `run_computed()` refreshes derived values.
pub struct StateCtx {
    slots: Slots,
    commands: BTreeMap<TypeId, Arc<dyn Command>>,
    queue: Vec<(TypeId, &'static str)>,
    runtime: StateRuntime,
    #[cfg(not(target_arch = "wasm32"))]
    tasks: tokio::task::JoinSet<()>,
}

impl Default for StateCtx {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StateCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateCtx")
            .field(
                "slots",
                &self.slots.values().map(|s| s.name).collect::<Vec<_>>(),
            )
            .field("commands", &self.commands.len())
            .field("queued", &self.queue.len())
            .field("tasks", &self.task_count())
            .finish()
    }
}

impl StateCtx {
    pub fn new() -> Self {
        Self {
            slots: BTreeMap::new(),
            commands: BTreeMap::new(),
            queue: Vec::new(),
            runtime: StateRuntime::default(),
            #[cfg(not(target_arch = "wasm32"))]
            tasks: tokio::task::JoinSet::new(),
        }
    }

    pub fn add_state<T: State>(&mut self, state: T) {
        self.slots.insert(TypeId::of::<T>(), Slot::state(state));
    }

    pub fn record_compute<T: Compute>(&mut self, compute: T) {
        self.slots.insert(TypeId::of::<T>(), Slot::compute(compute));
    }

    pub fn record_command<T: Command>(&mut self, command: T) {
        self.commands.insert(TypeId::of::<T>(), Arc::new(command));
    }

    pub fn try_state<T: State>(&self) -> Result<&T, Error> {
        self.slots
            .get(&TypeId::of::<T>())
            .and_then(|slot| slot.downcast::<T>())
            .ok_or_else(|| Error::state_not_found(type_name::<T>(), "StateCtx::try_state"))
    }

    /// # Panics
    /// Panics if `T` was never registered.
    pub fn state<T: State>(&self) -> &T {
        self.try_state::<T>().unwrap_or_else(|e| panic!("{e}"))
    }

    /// Mutable access to a state. Computes depending on `T` are marked dirty.
    ///
    /// # Panics
    /// Panics if `T` was never registered.
    pub fn state_mut<T: State>(&mut self) -> &mut T {
        let id = TypeId::of::<T>();
        self.mark_dependents_dirty(id);
        self.slots
            .get_mut(&id)
            .and_then(|slot| slot.downcast_mut::<T>())
            .unwrap_or_else(|| panic!("State {} is not registered", type_name::<T>()))
    }

    pub fn update<T: State>(&mut self, f: impl FnOnce(&mut T)) {
        f(self.state_mut::<T>());
    }

    /// The last value published by a compute.
    pub fn cached<T: Compute>(&self) -> Option<&T> {
        self.try_state::<T>().ok()
    }

    /// # Panics
    /// Panics if `T` was never recorded.
    pub fn compute<T: Compute>(&self) -> &T {
        self.state::<T>()
    }

    pub fn updater(&self) -> Updater {
        self.runtime.updater()
    }

    pub fn enqueue_command<T: Command>(&mut self) {
        self.queue.push((TypeId::of::<T>(), type_name::<T>()));
    }

    /// Enqueue and immediately flush.
    pub fn dispatch<T: Command>(&mut self) {
        self.enqueue_command::<T>();
        self.flush_commands();
    }

    /// Run every queued command in order and spawn the futures they return.
    ///
    /// Whatever a command publishes synchronously (typically a `Pending` status) is applied
    /// before the next command's snapshot is taken.
    pub fn flush_commands(&mut self) {
        let queued = std::mem::take(&mut self.queue);
        for (id, name) in queued {
            let Some(command) = self.commands.get(&id).cloned() else {
                warn!("{}", Error::command_not_found(name));
                continue;
            };
            debug!("Running command {name}");
            let snapshot = CommandSnapshot::capture(&self.slots);
            let future = command.run(snapshot, self.updater());
            self.sync_computes();
            self.spawn(future);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn spawn(&mut self, future: CommandFuture) {
        self.tasks.spawn(future);
    }

    #[cfg(target_arch = "wasm32")]
    fn spawn(&mut self, future: CommandFuture) {
        wasm_bindgen_futures::spawn_local(future);
    }

    /// Drops finished commands from the task set without waiting on running ones.
    #[cfg(not(target_arch = "wasm32"))]
    fn reap_finished_tasks(&mut self) {
        while let Some(result) = self.tasks.try_join_next() {
            if let Err(err) = result
                && err.is_panic()
            {
                warn!("A command panicked: {err}");
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn reap_finished_tasks(&mut self) {}

    /// Apply every update received from updaters since the last call.
    pub fn sync_computes(&mut self) {
        self.reap_finished_tasks();
        for update in self.runtime.drain() {
            let id = update.id();
            let Some(slot) = self.slots.get_mut(&id) else {
                warn!("Dropped update for an unregistered state");
                continue;
            };
            match update {
                Update::Set(_, value) => slot.value = value,
                Update::Apply(_, reducer) => reducer(&mut *slot.value),
            }
            self.mark_dependents_dirty(id);
        }
    }

    /// Re-run dirty computes until nothing changes.
    ///
    /// Passes are bounded by the number of computes, so a dependency cycle stops
    /// instead of spinning.
    pub fn run_computed(&mut self) {
        let max_passes = self.slots.values().filter(|s| s.compute.is_some()).count() + 1;
        for _ in 0..max_passes {
            let dirty: Vec<TypeId> = self
                .slots
                .iter()
                .filter(|(_, slot)| {
                    slot.compute
                        .as_ref()
                        .is_some_and(|c| c.status.needs_run())
                })
                .map(|(id, _)| *id)
                .collect();
            if dirty.is_empty() {
                return;
            }

            let updater = self.updater();
            for id in &dirty {
                if let Some(slot) = self.slots.get(id) {
                    slot.run(Dep::new(&self.slots), updater.clone());
                }
            }
            for id in &dirty {
                if let Some(compute) = self.slots.get_mut(id).and_then(|s| s.compute.as_mut()) {
                    compute.status = StateSyncStatus::Clean;
                }
            }
            self.sync_computes();
        }
        warn!("run_computed stopped after {max_passes} passes; check compute dependencies");
    }

    fn mark_dependents_dirty(&mut self, id: TypeId) {
        for slot in self.slots.values_mut() {
            if slot.depends_on(id)
                && let Some(compute) = slot.compute.as_mut()
            {
                compute.status = StateSyncStatus::Dirty;
            }
        }
    }

    pub fn task_count(&self) -> usize {
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.tasks.len()
        }
        #[cfg(target_arch = "wasm32")]
        {
            0
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn task_set_mut(&mut self) -> &mut tokio::task::JoinSet<()> {
        &mut self.tasks
    }

    /// Wait for every spawned command, applying updates as each finishes.
    #[cfg(not(target_arch = "wasm32"))]
    pub async fn join_tasks(&mut self) {
        while self.tasks.join_next().await.is_some() {
            self.sync_computes();
            self.run_computed();
        }
        self.sync_computes();
        self.run_computed();
    }

    /// Abort outstanding commands. Only meant for app exit.
    pub async fn shutdown(&mut self) {
        #[cfg(not(target_arch = "wasm32"))]
        self.tasks.shutdown().await;
    }
}
