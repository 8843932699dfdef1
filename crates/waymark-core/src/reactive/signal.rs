//! Signal - Fine-grained Reactive Primitive
//!
//! `Signal<T>` holds a value and records which effects read it.
//!
//! - **Dependency tracking**: `get()` and `with()` inside an [`Effect`](super::Effect)
//!   subscribe that effect to the signal.
//! - **Change notification**: `set()` and `update()` schedule every subscriber.
//! - **Shared**: clones share the same value and the same node in the graph.
//!
//! ## Example
//!
//! ```
//! use waymark_core::reactive::Signal;
//!
//! let count = Signal::new(0);
//! assert_eq!(count.get(), 0);
//!
//! count.set(42);
//! count.update(|n| *n += 1);
//! assert_eq!(count.get(), 43);
//! ```

use core::cell::RefCell;
use core::fmt;
use std::rc::Rc;

use super::runtime::{NodeId, try_with_runtime, with_runtime};

/// A reactive value cell.
///
/// `T` must be `'static`. Clones share the value through `Rc<RefCell<T>>`, so a
/// write through one clone is visible through all of them.
pub struct Signal<T: 'static> {
	id: NodeId,
	value: Rc<RefCell<T>>,
}

impl<T: 'static> Clone for Signal<T> {
	fn clone(&self) -> Self {
		Self {
			id: self.id,
			value: Rc::clone(&self.value),
		}
	}
}

impl<T: 'static> Signal<T> {
	/// Creates a signal holding `value`.
	///
	/// # Arguments
	///
	/// * `value` - Initial value for the signal
	///
	/// # Example
	///
	/// ```
	/// use waymark_core::reactive::Signal;
	///
	/// let name = Signal::new(String::from("import"));
	/// assert_eq!(name.get_untracked(), "import");
	/// ```
	pub fn new(value: T) -> Self {
		Self {
			id: NodeId::new(),
			value: Rc::new(RefCell::new(value)),
		}
	}

	/// Returns a clone of the current value and subscribes the running effect, if any.
	pub fn get(&self) -> T
	where
		T: Clone,
	{
		with_runtime(|rt| rt.track_dependency(self.id));
		self.get_untracked()
	}

	/// Returns a clone of the current value without subscribing anything.
	pub fn get_untracked(&self) -> T
	where
		T: Clone,
	{
		self.value.borrow().clone()
	}

	/// Borrows the current value for the duration of `f`, subscribing the running effect.
	///
	/// The borrow is held while `f` runs, so `f` must not write to this signal.
	/// Use [`get`](Self::get) when the caller may write back.
	///
	/// # Example
	///
	/// ```
	/// use waymark_core::reactive::Signal;
	///
	/// let items = Signal::new(vec![1, 2, 3]);
	/// assert_eq!(items.with(Vec::len), 3);
	/// ```
	pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
		with_runtime(|rt| rt.track_dependency(self.id));
		f(&*self.value.borrow())
	}

	/// Replaces the value and schedules subscribers.
	pub fn set(&self, value: T) {
		*self.value.borrow_mut() = value;
		with_runtime(|rt| rt.notify_signal_change(self.id));
	}

	/// Mutates the value in place and schedules subscribers once.
	pub fn update<F>(&self, f: F)
	where
		F: FnOnce(&mut T),
	{
		f(&mut *self.value.borrow_mut());
		with_runtime(|rt| rt.notify_signal_change(self.id));
	}

	/// Returns the node id of this signal.
	pub fn id(&self) -> NodeId {
		self.id
	}
}

impl<T: 'static> Drop for Signal<T> {
	fn drop(&mut self) {
		// Last clone: drop the node from the graph.
		if Rc::strong_count(&self.value) == 1 {
			let _ = try_with_runtime(|rt| rt.remove_node(self.id));
		}
	}
}

impl<T: fmt::Debug + 'static> fmt::Debug for Signal<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Signal")
			.field("id", &self.id)
			.field("value", &*self.value.borrow())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::reactive::runtime::{NodeType, Observer};
	use rstest::rstest;

	#[rstest]
	fn test_signal_creation() {
		let signal = Signal::new(42);
		assert_eq!(signal.get_untracked(), 42);
	}

	#[rstest]
	fn test_signal_set_and_update() {
		let signal = Signal::new(0);

		signal.set(100);
		assert_eq!(signal.get_untracked(), 100);

		signal.update(|n| *n *= 2);
		assert_eq!(signal.get_untracked(), 200);
	}

	#[rstest]
	fn test_signal_clone_shares_value() {
		let signal1 = Signal::new(String::from("a"));
		let signal2 = signal1.clone();

		signal1.set(String::from("b"));
		assert_eq!(signal2.get_untracked(), "b");
		assert_eq!(signal1.id(), signal2.id());
	}

	#[rstest]
	fn test_signal_with_tracks_dependency() {
		let signal = Signal::new(vec![1, 2, 3]);
		let observer_id = NodeId::new();

		with_runtime(|rt| {
			rt.push_observer(Observer {
				id: observer_id,
				node_type: NodeType::Effect,
			});
		});
		let len = signal.with(Vec::len);
		with_runtime(|rt| {
			rt.pop_observer();
		});

		assert_eq!(len, 3);
		with_runtime(|rt| assert_eq!(rt.subscriber_count(signal.id()), 1));
	}

	#[rstest]
	fn test_signal_drop_removes_node() {
		let observer_id = NodeId::new();
		let signal = Signal::new(1);
		let id = signal.id();

		with_runtime(|rt| {
			rt.push_observer(Observer {
				id: observer_id,
				node_type: NodeType::Effect,
			});
		});
		let _ = signal.get();
		with_runtime(|rt| {
			rt.pop_observer();
		});

		drop(signal);
		with_runtime(|rt| assert_eq!(rt.subscriber_count(id), 0));
	}
}
