//! Reactive location store.
//!
//! The store owns the current [`Location`] in a [`Signal`]. It changes in two
//! ways only: the host reports back/forward navigation, or the router publishes
//! the href it has just written. Either way the value is replaced wholesale.

use core::cell::RefCell;
use core::fmt;
use std::rc::Rc;

use serde_json::Value;
use waymark_core::{Effect, Signal};

use super::history::{HistoryBackend, HostLocation, ListenerHandle};
use super::path::{normalize_path, strip_basename};
use crate::debug_log;

/// The app's current location, relative to the basename.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
	/// Normalized pathname without the basename.
	pub pathname: String,
	/// Query string including `?`, or empty.
	pub search: String,
	/// Fragment including `#`, or empty.
	pub hash: String,
	/// State stored with the history entry.
	pub state: Option<Value>,
}

impl Default for Location {
	fn default() -> Self {
		Self {
			pathname: "/".to_string(),
			search: String::new(),
			hash: String::new(),
			state: None,
		}
	}
}

impl Location {
	/// Derives the app location from what the host reports.
	pub fn from_host(host: &HostLocation, basename: &str) -> Self {
		Self {
			pathname: normalize_path(&strip_basename(&host.pathname, basename)),
			search: host.search.clone(),
			hash: host.hash.clone(),
			state: host.state.clone(),
		}
	}

	/// Returns `pathname + search + hash`.
	pub fn path_and_query(&self) -> String {
		format!("{}{}{}", self.pathname, self.search, self.hash)
	}
}

/// Holder of the current [`Location`].
pub struct LocationStore {
	location: Signal<Location>,
	basename: String,
	listener: RefCell<Option<ListenerHandle>>,
}

impl LocationStore {
	/// Reads the initial location from `backend`, or starts at the root without one,
	/// and follows the backend's back/forward notifications.
	pub fn new(backend: Option<&Rc<dyn HistoryBackend>>, basename: impl Into<String>) -> Self {
		let basename = basename.into();
		let initial = backend
			.map(|backend| Location::from_host(&backend.current_location(), &basename))
			.unwrap_or_default();

		let store = Self {
			location: Signal::new(initial),
			basename,
			listener: RefCell::new(None),
		};

		if let Some(backend) = backend {
			let location = store.location.clone();
			let basename = store.basename.clone();
			let handle = backend.on_external_change(Rc::new(move |host: HostLocation| {
				let next = Location::from_host(&host, &basename);
				debug_log!("external location change: {}", next.path_and_query());
				location.set(next);
			}));
			*store.listener.borrow_mut() = Some(handle);
		}

		store
	}

	/// Returns the current location and tracks the read.
	pub fn get(&self) -> Location {
		self.location.get()
	}

	/// Returns the current location without tracking.
	pub fn get_untracked(&self) -> Location {
		self.location.get_untracked()
	}

	/// Calls `f` with a snapshot of the current location and tracks the read.
	///
	/// `f` receives an owned copy, so it may navigate.
	pub fn with<R>(&self, f: impl FnOnce(&Location) -> R) -> R {
		f(&self.location.get())
	}

	/// Returns the basename stripped from host paths.
	pub fn basename(&self) -> &str {
		&self.basename
	}

	/// Calls `subscriber` with the current location now and after every change.
	///
	/// Changes are delivered when the reactive runtime flushes. Dropping the
	/// returned [`Subscription`] stops delivery. The subscriber may navigate; the
	/// resulting location is delivered in a later round of the same flush.
	pub fn subscribe(&self, mut subscriber: impl FnMut(&Location) + 'static) -> Subscription {
		let location = self.location.clone();
		Subscription {
			effect: Effect::new(move || {
				let current = location.get();
				subscriber(&current);
			}),
		}
	}

	pub(crate) fn publish(&self, location: Location) {
		self.location.set(location);
	}
}

impl fmt::Debug for LocationStore {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("LocationStore")
			.field("location", &self.location.get_untracked())
			.field("basename", &self.basename)
			.field("listening", &self.listener.borrow().is_some())
			.finish()
	}
}

/// Active [`LocationStore::subscribe`] registration.
#[must_use = "the subscription ends when dropped"]
#[derive(Debug)]
pub struct Subscription {
	effect: Effect,
}

impl Subscription {
	/// Stops delivery.
	pub fn unsubscribe(self) {
		self.effect.dispose();
	}

	/// Returns `true` while the subscriber is still registered.
	pub fn is_active(&self) -> bool {
		!self.effect.is_disposed()
	}
}
