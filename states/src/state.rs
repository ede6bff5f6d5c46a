use std::any::Any;

/// A value owned by [`StateCtx`](crate::StateCtx).
///
/// States are cloned into a [`CommandSnapshot`](crate::CommandSnapshot) every time a
/// command runs, so they should stay cheap to clone.
pub trait State: Any + Clone + Send + 'static {}
