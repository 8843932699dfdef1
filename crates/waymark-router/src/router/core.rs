//! Navigation controller.
//!
//! [`Router`] is the single point through which the app navigates. It turns a
//! target into an href under the basename, writes it to the host history and
//! publishes the resulting [`Location`].

use core::fmt;
use std::rc::Rc;

use serde_json::Value;

use super::error::RouterError;
use super::history::{HistoryBackend, HostLocation, default_backend};
use super::location::{Location, LocationStore};
use super::path::apply_basename;
use super::url::{Target, resolve_target};
use crate::config::RouterConfig;
use crate::{debug_log, error_log, info_log, warn_log};

/// Options for [`Router::navigate`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavigateOptions {
	/// Replace the current history entry instead of pushing a new one.
	pub replace: bool,
	/// State stored with the new entry.
	pub state: Option<Value>,
}

impl NavigateOptions {
	/// Push navigation without state.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets whether the current entry is replaced.
	pub fn replace(mut self, replace: bool) -> Self {
		self.replace = replace;
		self
	}

	/// Sets the entry state.
	pub fn state(mut self, state: Value) -> Self {
		self.state = Some(state);
		self
	}
}

struct RouterInner {
	basename: String,
	backend: Option<Rc<dyn HistoryBackend>>,
	store: LocationStore,
}

/// Handle to a router instance.
///
/// Cloning is cheap; every clone drives the same history and location store.
#[derive(Clone)]
pub struct Router {
	inner: Rc<RouterInner>,
}

impl Router {
	/// Creates a router over the default host (the browser history on `wasm32`).
	///
	/// Without a host the router starts at `/` and navigation is a no-op.
	pub fn new(config: RouterConfig) -> Self {
		Self::build(config, default_backend())
	}

	/// Creates a router over `backend`.
	pub fn with_backend<B>(config: RouterConfig, backend: Rc<B>) -> Self
	where
		B: HistoryBackend + 'static,
	{
		Self::build(config, Some(backend as Rc<dyn HistoryBackend>))
	}

	/// Creates a router with no host at all.
	pub fn detached(config: RouterConfig) -> Self {
		Self::build(config, None)
	}

	fn build(config: RouterConfig, backend: Option<Rc<dyn HistoryBackend>>) -> Self {
		let host_base = backend.as_ref().and_then(|backend| backend.base_uri());
		let basename = config.resolve_basename(host_base.as_deref());
		let store = LocationStore::new(backend.as_ref(), basename.clone());

		debug_log!(
			"router created: basename={}, location={}",
			basename,
			store.get_untracked().path_and_query()
		);

		Self {
			inner: Rc::new(RouterInner {
				basename,
				backend,
				store,
			}),
		}
	}

	/// Returns the normalized basename.
	pub fn basename(&self) -> &str {
		&self.inner.basename
	}

	/// Returns the current location and tracks the read.
	pub fn location(&self) -> Location {
		self.inner.store.get()
	}

	/// Returns the current location without tracking.
	pub fn location_untracked(&self) -> Location {
		self.inner.store.get_untracked()
	}

	/// Returns the location store.
	pub fn store(&self) -> &LocationStore {
		&self.inner.store
	}

	/// Returns `true` if the router has a host to navigate.
	pub fn has_backend(&self) -> bool {
		self.inner.backend.is_some()
	}

	/// Returns `true` if both handles drive the same router.
	pub fn ptr_eq(&self, other: &Router) -> bool {
		Rc::ptr_eq(&self.inner, &other.inner)
	}

	fn origin(&self) -> Option<String> {
		self.inner.backend.as_ref().and_then(|backend| backend.origin())
	}

	/// Classifies `to` against the host origin.
	pub fn resolve(&self, to: &str) -> Target {
		resolve_target(to, self.origin().as_deref())
	}

	/// Returns `true` if `to` leaves the app.
	pub fn is_external(&self, to: &str) -> bool {
		self.resolve(to).is_external()
	}

	/// Returns the href an anchor pointing at `to` should carry.
	///
	/// Internal targets get the basename; external targets are returned unchanged.
	pub fn create_href(&self, to: &str) -> String {
		match self.resolve(to) {
			Target::Internal {
				pathname,
				search,
				hash,
			} => self.internal_href(&pathname, &search, &hash),
			Target::External(href) => href,
		}
	}

	/// Navigates to `to`.
	///
	/// Internal targets are written to the host history and published to the
	/// location store before this returns. External targets are handed to the
	/// host as a document navigation and leave the location unchanged.
	pub fn navigate(&self, to: &str, options: NavigateOptions) -> Result<(), RouterError> {
		let Some(backend) = self.inner.backend.as_ref() else {
			debug_log!("navigate({}) ignored: no history backend", to);
			return Ok(());
		};

		match self.resolve(to) {
			Target::External(href) => {
				info_log!("leaving app: {}", href);
				backend.assign(&href).inspect_err(|err| {
					error_log!("external navigation to {} failed: {}", href, err);
				})
			}
			Target::Internal {
				pathname,
				search,
				hash,
			} => {
				let href = self.internal_href(&pathname, &search, &hash);
				let result = if options.replace {
					backend.replace_entry(&href, options.state.as_ref())
				} else {
					backend.push_entry(&href, options.state.as_ref())
				};
				if let Err(err) = result {
					warn_log!("history write for {} rejected: {}", href, err);
					return Err(err);
				}

				debug_log!(
					"navigate: {} ({})",
					href,
					if options.replace { "replace" } else { "push" }
				);
				let host = HostLocation::from_href(&href, options.state);
				self.inner
					.store
					.publish(Location::from_host(&host, &self.inner.basename));
				Ok(())
			}
		}
	}

	/// Pushes a new entry for `to`.
	pub fn push(&self, to: &str) -> Result<(), RouterError> {
		self.navigate(to, NavigateOptions::new())
	}

	/// Replaces the current entry with `to`.
	pub fn replace(&self, to: &str) -> Result<(), RouterError> {
		self.navigate(to, NavigateOptions::new().replace(true))
	}

	/// Returns a detached navigation function bound to this router.
	pub fn navigate_fn(&self) -> NavigateFn {
		NavigateFn {
			router: self.clone(),
		}
	}

	fn internal_href(&self, pathname: &str, search: &str, hash: &str) -> String {
		format!(
			"{}{}{}",
			apply_basename(pathname, &self.inner.basename),
			search,
			hash
		)
	}
}

impl fmt::Debug for Router {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Router")
			.field("basename", &self.inner.basename)
			.field("has_backend", &self.inner.backend.is_some())
			.field("location", &self.inner.store.get_untracked())
			.finish()
	}
}

/// Navigation callable returned by [`use_navigate`](super::use_navigate).
#[derive(Debug, Clone)]
pub struct NavigateFn {
	router: Router,
}

impl NavigateFn {
	/// Navigates to `to` with `options`.
	pub fn call(&self, to: &str, options: NavigateOptions) -> Result<(), RouterError> {
		self.router.navigate(to, options)
	}

	/// Pushes a new entry for `to`.
	pub fn push(&self, to: &str) -> Result<(), RouterError> {
		self.router.push(to)
	}

	/// Replaces the current entry with `to`.
	pub fn replace(&self, to: &str) -> Result<(), RouterError> {
		self.router.replace(to)
	}
}
