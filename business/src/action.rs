//! Status of remote calls.
//!
//! Each remote call owns one action state implementing [`Action`]. A command calls
//! [`begin`] before issuing the request and [`settle`] with the outcome; the UI only reads
//! the state and never tracks flags of its own.

use growthyari_states::{CommandSnapshot, State, Updater};
use log::{error, info, warn};

/// Outcome of the most recent call of one action.
#[derive(Debug, Clone, PartialEq)]
pub enum AsyncResult<T> {
    /// Never called, or the last failure was dismissed.
    Idle,
    Pending,
    Success(T),
    Failure(String),
}

impl<T> Default for AsyncResult<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> AsyncResult<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            Self::Failure(message) => Some(message),
            _ => None,
        }
    }

    /// Clears a failure back to `Idle`. Other states are kept.
    pub fn dismiss(&mut self) {
        if matches!(self, Self::Failure(_)) {
            *self = Self::Idle;
        }
    }
}

impl<T> From<Result<T, String>> for AsyncResult<T> {
    fn from(result: Result<T, String>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(message) => Self::Failure(message),
        }
    }
}

/// A state that tracks one kind of remote call.
pub trait Action: State + Default {
    type Output: Clone + Send + 'static;

    /// Used in logs.
    const NAME: &'static str;

    /// Shown when the server did not provide a message.
    const FALLBACK_ERROR: &'static str;

    fn result(&self) -> &AsyncResult<Self::Output>;

    fn result_mut(&mut self) -> &mut AsyncResult<Self::Output>;

    fn is_pending(&self) -> bool {
        self.result().is_pending()
    }

    fn dismiss(&mut self) {
        self.result_mut().dismiss();
    }
}

/// Marks `A` as pending.
///
/// Returns `false` without touching anything when `A` is already pending, which is the
/// only de-duplication of in-flight calls.
pub fn begin<A: Action>(snap: &CommandSnapshot, updater: &Updater) -> bool {
    if snap.try_state::<A>().is_some_and(A::is_pending) {
        warn!("{} is already in flight, ignoring", A::NAME);
        return false;
    }
    info!("{} started", A::NAME);
    updater.update::<A>(|action| *action.result_mut() = AsyncResult::Pending);
    true
}

pub fn settle<A: Action>(updater: &Updater, result: Result<A::Output, String>) {
    match &result {
        Ok(_) => info!("{} succeeded", A::NAME),
        Err(message) => error!("{} failed: {message}", A::NAME),
    }
    let result = AsyncResult::from(result);
    updater.update::<A>(move |action| *action.result_mut() = result);
}

/// Declares an action state wrapping one `AsyncResult`.
macro_rules! action {
    ($(#[$meta:meta])* $name:ident, $output:ty, $fallback:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $name {
            pub result: $crate::action::AsyncResult<$output>,
        }

        impl ::growthyari_states::State for $name {}

        impl $crate::action::Action for $name {
            type Output = $output;
            const NAME: &'static str = stringify!($name);
            const FALLBACK_ERROR: &'static str = $fallback;

            fn result(&self) -> &$crate::action::AsyncResult<$output> {
                &self.result
            }

            fn result_mut(&mut self) -> &mut $crate::action::AsyncResult<$output> {
                &mut self.result
            }
        }
    };
}

pub(crate) use action;
