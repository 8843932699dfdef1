//! # waymark-core
//!
//! Reactive primitives shared by the waymark crates.
//!
//! - [`reactive::Signal`]: a value cell that records readers and notifies them on change
//! - [`reactive::Effect`]: a side effect re-run whenever a signal it read changes
//! - [`reactive::Context`]: thread-scoped provider/consumer values
//!
//! Everything here is single-threaded: values live behind `Rc<RefCell<_>>` and the
//! dependency graph lives in a thread-local [`reactive::Runtime`].

#![warn(missing_docs)]

pub mod reactive;

pub use reactive::{Context, Effect, Signal, flush_updates};
