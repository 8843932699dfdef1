//! Effect - Reactive Side Effects
//!
//! An `Effect` runs its closure once on creation and again after any signal it
//! read has changed. Dependencies are re-collected on every run, so branches that
//! stop reading a signal stop being notified by it.
//!
//! ## Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use waymark_core::reactive::{Effect, Signal, flush_updates};
//!
//! let count = Signal::new(1);
//! let seen = Rc::new(RefCell::new(Vec::new()));
//!
//! let _effect = Effect::new({
//!     let count = count.clone();
//!     let seen = seen.clone();
//!     move || seen.borrow_mut().push(count.get())
//! });
//!
//! count.set(2);
//! flush_updates();
//! assert_eq!(*seen.borrow(), vec![1, 2]);
//! ```

use core::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

use super::runtime::{NodeId, NodeType, Observer, try_with_runtime, with_runtime};

type EffectFn = Box<dyn FnMut() + 'static>;

struct EffectSlot {
	disposed: Rc<Cell<bool>>,
	run: EffectFn,
}

thread_local! {
	static EFFECT_FUNCTIONS: RefCell<BTreeMap<NodeId, EffectSlot>> = const { RefCell::new(BTreeMap::new()) };
}

/// A side effect bound to the signals it reads.
///
/// Dropping the effect (or calling [`Effect::dispose`]) detaches it from the graph.
pub struct Effect {
	id: NodeId,
	disposed: Rc<Cell<bool>>,
}

impl Effect {
	/// Creates an effect and runs it immediately.
	///
	/// Every signal read during a run becomes a dependency; writing one of them
	/// schedules the effect for the next [`flush_updates`](super::flush_updates).
	/// The closure may write signals, including ones it reads.
	///
	/// # Arguments
	///
	/// * `f` - Closure to run now and after each dependency change
	///
	/// # Example
	///
	/// ```
	/// use std::cell::Cell;
	/// use std::rc::Rc;
	/// use waymark_core::reactive::{Effect, Signal, flush_updates};
	///
	/// let path = Signal::new("/");
	/// let runs = Rc::new(Cell::new(0));
	/// let effect = Effect::new({
	///     let path = path.clone();
	///     let runs = runs.clone();
	///     move || {
	///         let _ = path.get();
	///         runs.set(runs.get() + 1);
	///     }
	/// });
	///
	/// path.set("/risk");
	/// flush_updates();
	/// assert_eq!(runs.get(), 2);
	///
	/// drop(effect);
	/// path.set("/qoe");
	/// flush_updates();
	/// assert_eq!(runs.get(), 2);
	/// ```
	pub fn new<F>(f: F) -> Self
	where
		F: FnMut() + 'static,
	{
		let id = NodeId::new();
		let disposed = Rc::new(Cell::new(false));

		EFFECT_FUNCTIONS.with(|storage| {
			storage.borrow_mut().insert(
				id,
				EffectSlot {
					disposed: Rc::clone(&disposed),
					run: Box::new(f),
				},
			);
		});

		run_effect(id);

		Self { id, disposed }
	}

	/// Returns the node id of this effect.
	pub fn id(&self) -> NodeId {
		self.id
	}

	/// Returns `true` once the effect has been disposed.
	pub fn is_disposed(&self) -> bool {
		self.disposed.get()
	}

	/// Stops the effect and frees its closure.
	pub fn dispose(&self) {
		if self.disposed.replace(true) {
			return;
		}

		let _ = try_with_runtime(|rt| rt.remove_node(self.id));
		let _ = EFFECT_FUNCTIONS.try_with(|storage| {
			storage.borrow_mut().remove(&self.id);
		});
	}
}

impl Drop for Effect {
	fn drop(&mut self) {
		self.dispose();
	}
}

impl core::fmt::Debug for Effect {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("Effect")
			.field("id", &self.id)
			.field("disposed", &self.disposed.get())
			.finish()
	}
}

/// Runs the effect registered under `id`, re-collecting its dependencies.
///
/// The closure is taken out of storage while it runs so that it may itself create
/// or dispose effects.
pub(crate) fn run_effect(id: NodeId) {
	let Some(mut slot) = EFFECT_FUNCTIONS.with(|storage| storage.borrow_mut().remove(&id)) else {
		return;
	};
	if slot.disposed.get() {
		return;
	}

	with_runtime(|rt| {
		rt.clear_dependencies(id);
		rt.push_observer(Observer {
			id,
			node_type: NodeType::Effect,
		});
	});

	(slot.run)();

	with_runtime(|rt| {
		rt.pop_observer();
	});

	if slot.disposed.get() {
		let _ = try_with_runtime(|rt| rt.remove_node(id));
		return;
	}
	EFFECT_FUNCTIONS.with(|storage| {
		storage.borrow_mut().insert(id, slot);
	});
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::reactive::Signal;
	use crate::reactive::runtime::flush_updates;
	use rstest::rstest;

	#[rstest]
	fn test_effect_runs_immediately() {
		let run_count = Rc::new(Cell::new(0));
		let counter = run_count.clone();

		let _effect = Effect::new(move || counter.set(counter.get() + 1));

		assert_eq!(run_count.get(), 1);
	}

	#[rstest]
	fn test_effect_reruns_after_flush() {
		let signal = Signal::new(0);
		let values = Rc::new(RefCell::new(Vec::new()));

		let _effect = Effect::new({
			let signal = signal.clone();
			let values = values.clone();
			move || values.borrow_mut().push(signal.get())
		});

		signal.set(10);
		assert_eq!(*values.borrow(), vec![0]);

		flush_updates();
		assert_eq!(*values.borrow(), vec![0, 10]);
	}

	#[rstest]
	fn test_effect_dispose_stops_updates() {
		let signal = Signal::new(0);
		let run_count = Rc::new(Cell::new(0));

		let effect = Effect::new({
			let signal = signal.clone();
			let run_count = run_count.clone();
			move || {
				let _ = signal.get();
				run_count.set(run_count.get() + 1);
			}
		});

		effect.dispose();
		assert!(effect.is_disposed());

		signal.set(5);
		flush_updates();
		assert_eq!(run_count.get(), 1);
	}

	#[rstest]
	fn test_effect_drop_cleans_up() {
		let signal = Signal::new(0);
		let run_count = Rc::new(Cell::new(0));

		{
			let signal = signal.clone();
			let run_count = run_count.clone();
			let _effect = Effect::new(move || {
				let _ = signal.get();
				run_count.set(run_count.get() + 1);
			});
		}

		signal.set(1);
		flush_updates();
		assert_eq!(run_count.get(), 1);
		with_runtime(|rt| assert_eq!(rt.subscriber_count(signal.id()), 0));
	}

	#[rstest]
	fn test_effect_may_create_effects() {
		let signal = Signal::new(0);
		let inner_runs = Rc::new(Cell::new(0));
		let holder: Rc<RefCell<Option<Effect>>> = Rc::new(RefCell::new(None));

		let _outer = Effect::new({
			let signal = signal.clone();
			let inner_runs = inner_runs.clone();
			let holder = holder.clone();
			move || {
				let _ = signal.get();
				let inner_runs = inner_runs.clone();
				*holder.borrow_mut() = Some(Effect::new(move || {
					inner_runs.set(inner_runs.get() + 1);
				}));
			}
		});

		signal.set(1);
		flush_updates();
		assert_eq!(inner_runs.get(), 2);
	}

	#[rstest]
	fn test_effect_writes_are_drained_in_same_flush() {
		let source = Signal::new(1);
		let doubled = Signal::new(0);
		let observed = Rc::new(RefCell::new(Vec::new()));

		let _double = Effect::new({
			let source = source.clone();
			let doubled = doubled.clone();
			move || doubled.set(source.get() * 2)
		});
		let _observe = Effect::new({
			let doubled = doubled.clone();
			let observed = observed.clone();
			move || observed.borrow_mut().push(doubled.get())
		});

		source.set(5);
		flush_updates();
		assert_eq!(observed.borrow().last(), Some(&10));
	}
}
