//! Fine-grained reactivity
//!
//! Re-exports `waymark-core`: [`Signal`] holds a value, [`Effect`] reruns when
//! the signals it read change, and [`flush_updates`] drains pending effects.
//! On `wasm32` flushes are scheduled automatically after a write.

pub use waymark_core::reactive::*;
