//! Reactive Runtime
//!
//! The runtime owns the dependency graph between signals and the effects that read
//! them, the stack of currently executing observers, and the queue of effects
//! waiting to re-run.
//!
//! There is one runtime per thread. All access goes through [`with_runtime`] (or
//! [`try_with_runtime`] from `Drop` impls, where thread-local storage may already
//! be gone).

use core::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// Upper bound on flush rounds before pending updates are left for the next flush.
///
/// A round is one pass over the queue; effects that write signals read by other
/// effects cause further rounds. Hitting the bound means effects keep invalidating
/// each other.
pub const MAX_FLUSH_ROUNDS: usize = 100;

/// Unique identifier of a node (signal or effect) in the dependency graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u64);

impl NodeId {
	/// Allocates a fresh identifier.
	pub fn new() -> Self {
		static NEXT_ID: AtomicU64 = AtomicU64::new(1);
		Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
	}
}

impl Default for NodeId {
	fn default() -> Self {
		Self::new()
	}
}

/// Kind of node pushed on the observer stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
	/// A signal.
	Signal,
	/// An effect.
	Effect,
}

/// A computation currently executing and collecting dependencies.
#[derive(Debug, Clone, Copy)]
pub struct Observer {
	/// Node being executed.
	pub id: NodeId,
	/// Kind of node.
	pub node_type: NodeType,
}

/// Edges of one node in the dependency graph.
#[derive(Debug, Default)]
pub struct DependencyNode {
	/// Observers that read this node (meaningful for signals).
	pub subscribers: Vec<NodeId>,
	/// Nodes this observer read during its last run (meaningful for effects).
	pub dependencies: Vec<NodeId>,
}

/// Per-thread reactive runtime.
#[derive(Debug, Default)]
pub struct Runtime {
	/// Observers currently executing, innermost last.
	pub(crate) observer_stack: RefCell<Vec<Observer>>,
	/// Signal → subscribers and effect → dependencies.
	pub(crate) dependency_graph: RefCell<BTreeMap<NodeId, DependencyNode>>,
	/// Effects scheduled to re-run, in scheduling order, without duplicates.
	pub(crate) pending_updates: RefCell<Vec<NodeId>>,
	/// Whether a flush has been requested since the last one ran.
	pub(crate) update_scheduled: Cell<bool>,
	/// Whether [`flush_updates`] is currently running on this thread.
	flushing: Cell<bool>,
}

thread_local! {
	static RUNTIME: Runtime = Runtime::default();
}

/// Runs `f` with this thread's runtime.
pub fn with_runtime<R>(f: impl FnOnce(&Runtime) -> R) -> R {
	RUNTIME.with(f)
}

/// Runs `f` with this thread's runtime, failing if thread-local storage was destroyed.
pub fn try_with_runtime<R>(f: impl FnOnce(&Runtime) -> R) -> Result<R, std::thread::AccessError> {
	RUNTIME.try_with(f)
}

impl Runtime {
	/// Records that the innermost observer read `source`.
	///
	/// Without an active observer this is a no-op.
	pub fn track_dependency(&self, source: NodeId) {
		let Some(observer) = self.observer_stack.borrow().last().copied() else {
			return;
		};

		let mut graph = self.dependency_graph.borrow_mut();
		let node = graph.entry(source).or_default();
		if !node.subscribers.contains(&observer.id) {
			node.subscribers.push(observer.id);
		}
		let observer_node = graph.entry(observer.id).or_default();
		if !observer_node.dependencies.contains(&source) {
			observer_node.dependencies.push(source);
		}
	}

	/// Schedules every subscriber of `source` for re-execution.
	pub fn notify_signal_change(&self, source: NodeId) {
		let subscribers = self
			.dependency_graph
			.borrow()
			.get(&source)
			.map(|node| node.subscribers.clone())
			.unwrap_or_default();

		if subscribers.is_empty() {
			return;
		}

		{
			let mut pending = self.pending_updates.borrow_mut();
			for id in subscribers {
				if !pending.contains(&id) {
					pending.push(id);
				}
			}
		}

		self.schedule_flush();
	}

	/// Pushes an observer; subsequent reads are attributed to it.
	pub fn push_observer(&self, observer: Observer) {
		self.observer_stack.borrow_mut().push(observer);
	}

	/// Pops the innermost observer.
	pub fn pop_observer(&self) -> Option<Observer> {
		self.observer_stack.borrow_mut().pop()
	}

	/// Removes every edge from `observer` to the nodes it read.
	pub fn clear_dependencies(&self, observer: NodeId) {
		let mut graph = self.dependency_graph.borrow_mut();
		let dependencies = graph
			.get_mut(&observer)
			.map(|node| core::mem::take(&mut node.dependencies))
			.unwrap_or_default();

		for source in dependencies {
			if let Some(node) = graph.get_mut(&source) {
				node.subscribers.retain(|id| *id != observer);
			}
		}
	}

	/// Removes a node and all of its edges.
	pub fn remove_node(&self, id: NodeId) {
		self.clear_dependencies(id);

		let mut graph = self.dependency_graph.borrow_mut();
		if let Some(node) = graph.remove(&id) {
			for subscriber in node.subscribers {
				if let Some(observer) = graph.get_mut(&subscriber) {
					observer.dependencies.retain(|source| *source != id);
				}
			}
		}
		drop(graph);

		self.pending_updates.borrow_mut().retain(|pending| *pending != id);
	}

	/// Returns `true` if effects are waiting for a flush.
	pub fn has_pending_updates(&self) -> bool {
		!self.pending_updates.borrow().is_empty()
	}

	/// Returns the number of subscribers currently recorded for `source`.
	pub fn subscriber_count(&self, source: NodeId) -> usize {
		self.dependency_graph
			.borrow()
			.get(&source)
			.map(|node| node.subscribers.len())
			.unwrap_or(0)
	}

	fn schedule_flush(&self) {
		if self.update_scheduled.replace(true) {
			return;
		}

		#[cfg(all(target_family = "wasm", target_os = "unknown"))]
		wasm_bindgen_futures::spawn_local(async {
			flush_updates();
		});
	}
}

/// Runs every scheduled effect until the queue is empty.
///
/// Effects that write signals during the flush are picked up in a later round of
/// the same call. A call made from inside a running effect returns immediately;
/// the outer flush drains whatever it scheduled.
///
/// On native targets nothing flushes automatically: callers (tests, server-side
/// renderers) decide when effects run.
pub fn flush_updates() {
	if with_runtime(|rt| rt.flushing.replace(true)) {
		return;
	}

	for _ in 0..MAX_FLUSH_ROUNDS {
		let pending = with_runtime(|rt| {
			rt.update_scheduled.set(false);
			core::mem::take(&mut *rt.pending_updates.borrow_mut())
		});
		if pending.is_empty() {
			break;
		}
		for id in pending {
			super::effect::run_effect(id);
		}
	}

	with_runtime(|rt| rt.flushing.set(false));
}
