//! Host navigation environment.
//!
//! The router never touches `window` directly. It talks to a [`HistoryBackend`]:
//! the browser's History API on `wasm32` ([`BrowserHistory`]), or an in-memory
//! stack ([`MemoryHistory`]) for tests and non-browser rendering.

#[cfg(all(target_family = "wasm", target_os = "unknown"))]
mod browser;

use core::cell::{Cell, RefCell};
use core::fmt;
use std::rc::Rc;

use serde_json::Value;

use super::error::RouterError;
use super::url::split_href;

#[cfg(all(target_family = "wasm", target_os = "unknown"))]
pub use browser::BrowserHistory;

/// Callback invoked with the host's new location after back/forward navigation.
pub type ExternalChangeCallback = Rc<dyn Fn(HostLocation)>;

/// The host's current URL parts and history state, before basename stripping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HostLocation {
	/// Raw pathname as reported by the host.
	pub pathname: String,
	/// Query string including `?`, or empty.
	pub search: String,
	/// Fragment including `#`, or empty.
	pub hash: String,
	/// State stored with the current history entry.
	pub state: Option<Value>,
}

impl HostLocation {
	/// Builds a host location from an origin-relative href such as `/base/risk?tab=1`.
	pub fn from_href(href: &str, state: Option<Value>) -> Self {
		let (pathname, search, hash) = split_href(href);
		Self {
			pathname,
			search,
			hash,
			state,
		}
	}
}

/// The host navigation environment consumed by the router.
///
/// Implementations own the real history stack; the router assumes it is the only
/// writer of entries that belong to the app.
pub trait HistoryBackend {
	/// Origin (`scheme://host[:port]`) used to resolve link targets.
	fn origin(&self) -> Option<String>;

	/// Reads the current URL and entry state.
	fn current_location(&self) -> HostLocation;

	/// Pushes a new entry for `href` (origin-relative, basename included).
	fn push_entry(&self, href: &str, state: Option<&Value>) -> Result<(), RouterError>;

	/// Replaces the current entry with `href`.
	fn replace_entry(&self, href: &str, state: Option<&Value>) -> Result<(), RouterError>;

	/// Leaves the app: full document navigation to an external `href`.
	fn assign(&self, href: &str) -> Result<(), RouterError>;

	/// Explicit document base (`<base href>`), used as the default basename.
	fn base_uri(&self) -> Option<String> {
		None
	}

	/// Registers `callback` for back/forward navigation. Dropping the handle unregisters it.
	fn on_external_change(&self, callback: ExternalChangeCallback) -> ListenerHandle;
}

/// Registration returned by [`HistoryBackend::on_external_change`].
#[must_use = "the listener is removed when the handle is dropped"]
pub struct ListenerHandle {
	detach: Option<Box<dyn FnOnce()>>,
}

impl ListenerHandle {
	/// Creates a handle that runs `detach` when dropped.
	pub fn new(detach: impl FnOnce() + 'static) -> Self {
		Self {
			detach: Some(Box::new(detach)),
		}
	}

	/// Creates a handle with nothing to detach.
	pub fn noop() -> Self {
		Self { detach: None }
	}
}

impl Drop for ListenerHandle {
	fn drop(&mut self) {
		if let Some(detach) = self.detach.take() {
			detach();
		}
	}
}

impl fmt::Debug for ListenerHandle {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ListenerHandle")
			.field("attached", &self.detach.is_some())
			.finish()
	}
}

/// Returns the browser history when running in a window, `None` otherwise.
pub fn default_backend() -> Option<Rc<dyn HistoryBackend>> {
	#[cfg(all(target_family = "wasm", target_os = "unknown"))]
	{
		BrowserHistory::new().map(|history| Rc::new(history) as Rc<dyn HistoryBackend>)
	}

	#[cfg(not(all(target_family = "wasm", target_os = "unknown")))]
	{
		None
	}
}

#[derive(Debug, Clone, PartialEq)]
struct Entry {
	href: String,
	state: Option<Value>,
}

type ListenerList = RefCell<Vec<(u64, ExternalChangeCallback)>>;

/// In-memory history stack.
///
/// Behaves like a browser tab that never unloads: `push_entry` truncates forward
/// entries, [`back`](Self::back)/[`forward`](Self::forward)/[`go`](Self::go) move
/// through the stack and notify listeners the way `popstate` does, and
/// [`assign`](HistoryBackend::assign) records where the document would have gone.
pub struct MemoryHistory {
	origin: String,
	base_uri: Option<String>,
	entries: RefCell<Vec<Entry>>,
	index: Cell<usize>,
	assigned: RefCell<Vec<String>>,
	listeners: Rc<ListenerList>,
	next_listener_id: Cell<u64>,
}

impl MemoryHistory {
	/// Creates a history with a single entry at `initial_href`.
	pub fn new(origin: impl Into<String>, initial_href: impl Into<String>) -> Self {
		let origin = origin.into();
		let href = origin_relative(&origin, &initial_href.into());
		Self {
			origin,
			base_uri: None,
			entries: RefCell::new(vec![Entry { href, state: None }]),
			index: Cell::new(0),
			assigned: RefCell::new(Vec::new()),
			listeners: Rc::new(RefCell::new(Vec::new())),
			next_listener_id: Cell::new(0),
		}
	}

	/// Sets the document base reported by [`HistoryBackend::base_uri`].
	pub fn with_base_uri(mut self, base_uri: impl Into<String>) -> Self {
		self.base_uri = Some(base_uri.into());
		self
	}

	/// Returns the href of the current entry.
	pub fn current_href(&self) -> String {
		self.entries.borrow()[self.index.get()].href.clone()
	}

	/// Returns every entry's href, oldest first.
	pub fn entries(&self) -> Vec<String> {
		self.entries
			.borrow()
			.iter()
			.map(|entry| entry.href.clone())
			.collect()
	}

	/// Returns the position of the current entry.
	pub fn index(&self) -> usize {
		self.index.get()
	}

	/// Returns every href passed to [`HistoryBackend::assign`].
	pub fn assigned(&self) -> Vec<String> {
		self.assigned.borrow().clone()
	}

	/// Returns the number of registered external-change listeners.
	pub fn listener_count(&self) -> usize {
		self.listeners.borrow().len()
	}

	/// Moves one entry back. Returns `false` at the start of the stack.
	pub fn back(&self) -> bool {
		self.go(-1)
	}

	/// Moves one entry forward. Returns `false` at the end of the stack.
	pub fn forward(&self) -> bool {
		self.go(1)
	}

	/// Moves `delta` entries and notifies listeners. Out-of-range moves do nothing.
	pub fn go(&self, delta: isize) -> bool {
		let len = self.entries.borrow().len();
		let Some(target) = self.index.get().checked_add_signed(delta) else {
			return false;
		};
		if delta == 0 || target >= len {
			return false;
		}

		self.index.set(target);
		self.notify_listeners();
		true
	}

	fn notify_listeners(&self) {
		let location = self.current_location();
		// Clone out so listeners may navigate or unregister while being notified.
		let callbacks: Vec<ExternalChangeCallback> = self
			.listeners
			.borrow()
			.iter()
			.map(|(_, callback)| Rc::clone(callback))
			.collect();
		for callback in callbacks {
			callback(location.clone());
		}
	}
}

impl HistoryBackend for MemoryHistory {
	fn origin(&self) -> Option<String> {
		Some(self.origin.clone())
	}

	fn current_location(&self) -> HostLocation {
		let entries = self.entries.borrow();
		let entry = &entries[self.index.get()];
		HostLocation::from_href(&entry.href, entry.state.clone())
	}

	fn push_entry(&self, href: &str, state: Option<&Value>) -> Result<(), RouterError> {
		let mut entries = self.entries.borrow_mut();
		entries.truncate(self.index.get() + 1);
		entries.push(Entry {
			href: origin_relative(&self.origin, href),
			state: state.cloned(),
		});
		self.index.set(entries.len() - 1);
		Ok(())
	}

	fn replace_entry(&self, href: &str, state: Option<&Value>) -> Result<(), RouterError> {
		let mut entries = self.entries.borrow_mut();
		entries[self.index.get()] = Entry {
			href: origin_relative(&self.origin, href),
			state: state.cloned(),
		};
		Ok(())
	}

	fn assign(&self, href: &str) -> Result<(), RouterError> {
		self.assigned.borrow_mut().push(href.to_string());
		Ok(())
	}

	fn base_uri(&self) -> Option<String> {
		self.base_uri.clone()
	}

	fn on_external_change(&self, callback: ExternalChangeCallback) -> ListenerHandle {
		let id = self.next_listener_id.get();
		self.next_listener_id.set(id + 1);
		self.listeners.borrow_mut().push((id, callback));

		let listeners = Rc::downgrade(&self.listeners);
		ListenerHandle::new(move || {
			if let Some(listeners) = listeners.upgrade() {
				listeners.borrow_mut().retain(|(listener, _)| *listener != id);
			}
		})
	}
}

impl fmt::Debug for MemoryHistory {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("MemoryHistory")
			.field("origin", &self.origin)
			.field("entries", &self.entries())
			.field("index", &self.index.get())
			.field("listeners", &self.listener_count())
			.finish()
	}
}

fn origin_relative(origin: &str, href: &str) -> String {
	match href.strip_prefix(origin) {
		Some("") => "/".to_string(),
		Some(rest) if rest.starts_with(['/', '?', '#']) => rest.to_string(),
		_ => href.to_string(),
	}
}
