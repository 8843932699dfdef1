//! Fine-grained reactivity.
//!
//! Reading a [`Signal`] inside an [`Effect`] records a dependency. Writing the
//! signal schedules the effect; scheduled effects run on the next flush, either
//! explicitly through [`flush_updates`] or, on `wasm32`, from a microtask queued
//! by the runtime.

pub mod context;
mod effect;
pub mod runtime;
mod signal;

pub use context::{Context, ContextGuard, get_context, provide_context};
pub use effect::Effect;
pub use runtime::{NodeId, Runtime, flush_updates, try_with_runtime, with_runtime};
pub use signal::Signal;
