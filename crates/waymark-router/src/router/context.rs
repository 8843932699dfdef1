//! Ambient router access.
//!
//! [`Router::provide`] makes a router visible to everything that runs while the
//! returned [`RouterScope`] is alive. Scopes nest; the innermost wins.

use waymark_core::Context;
use waymark_core::reactive::{ContextGuard, get_context, provide_context};

use super::core::{NavigateFn, Router};
use super::error::RouterError;
use super::location::Location;

thread_local! {
	static ROUTER_CONTEXT: Context<Router> = Context::new();
}

/// Keeps a router provided; restores the enclosing one when dropped.
#[must_use = "the router is only provided while the scope is alive"]
#[derive(Debug)]
pub struct RouterScope {
	_guard: ContextGuard,
}

impl Router {
	/// Provides this router to hooks and links on the current thread.
	///
	/// ```
	/// use waymark_router::RouterConfig;
	/// use waymark_router::router::{Router, use_router};
	///
	/// assert!(use_router().is_err());
	///
	/// let router = Router::detached(RouterConfig::new());
	/// let scope = router.provide();
	/// assert!(use_router().unwrap().ptr_eq(&router));
	///
	/// drop(scope);
	/// assert!(use_router().is_err());
	/// ```
	pub fn provide(&self) -> RouterScope {
		let guard = ROUTER_CONTEXT.with(|ctx| provide_context(ctx, self.clone()));
		RouterScope { _guard: guard }
	}
}

/// Returns the innermost provided router.
pub fn use_router() -> Result<Router, RouterError> {
	ROUTER_CONTEXT
		.with(get_context)
		.ok_or(RouterError::ContextUnavailable)
}

/// Returns the current location of the provided router, tracking the read.
pub fn use_location() -> Result<Location, RouterError> {
	use_router().map(|router| router.location())
}

/// Returns a navigation function for the provided router.
pub fn use_navigate() -> Result<NavigateFn, RouterError> {
	use_router().map(|router| router.navigate_fn())
}

/// Returns the provided router.
///
/// # Panics
///
/// Panics with "router context unavailable" when called outside
/// [`Router::provide`]. This is a configuration error in the app.
pub fn expect_router() -> Router {
	match use_router() {
		Ok(router) => router,
		Err(err) => panic!("{}", err),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::RouterConfig;
	use rstest::rstest;

	#[rstest]
	fn test_hooks_outside_scope() {
		assert_eq!(use_router().unwrap_err(), RouterError::ContextUnavailable);
		assert!(matches!(use_location(), Err(RouterError::ContextUnavailable)));
		assert!(use_navigate().is_err());
	}

	#[rstest]
	#[should_panic(expected = "router context unavailable")]
	fn test_expect_router_panics_outside_scope() {
		let _ = expect_router();
	}

	#[rstest]
	fn test_nested_scopes_shadow() {
		let outer = Router::detached(RouterConfig::new().basename("/outer"));
		let inner = Router::detached(RouterConfig::new().basename("/inner"));

		let _outer_scope = outer.provide();
		assert_eq!(expect_router().basename(), "/outer");
		{
			let _inner_scope = inner.provide();
			assert_eq!(expect_router().basename(), "/inner");
		}
		assert_eq!(expect_router().basename(), "/outer");
	}

	#[rstest]
	fn test_use_location_reads_provided_router() {
		let router = Router::detached(RouterConfig::new());
		let _scope = router.provide();
		assert_eq!(use_location().unwrap().pathname, "/");
	}
}
