//! Route outlet.

use core::fmt;
use std::rc::Rc;

use waymark_core::Effect;

use super::core::Router;
use super::matcher::match_route_path;
use super::path::normalize_path;
use crate::component::View;

type ElementFn = Rc<dyn Fn() -> View>;

/// A declared route.
#[derive(Clone)]
pub struct Route {
	path: String,
	index: bool,
	element: ElementFn,
}

impl Route {
	/// Returns the declared pattern (`/` for index routes).
	pub fn path(&self) -> &str {
		&self.path
	}

	/// Returns `true` for index routes.
	pub fn is_index(&self) -> bool {
		self.index
	}

	/// Returns `true` if this route matches `pathname`.
	pub fn matches(&self, pathname: &str) -> bool {
		if self.index {
			return normalize_path(pathname) == "/";
		}
		match_route_path(&self.path, pathname)
	}

	/// Renders the route's element.
	pub fn render(&self) -> View {
		(self.element)()
	}
}

impl fmt::Debug for Route {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Route")
			.field("path", &self.path)
			.field("index", &self.index)
			.finish()
	}
}

/// Ordered route declarations rendered against a router's location.
///
/// The first matching declaration renders; when none matches the outlet is empty.
#[derive(Clone)]
pub struct Routes {
	router: Router,
	routes: Vec<Route>,
}

impl Routes {
	/// Creates an empty outlet bound to `router`.
	pub fn new(router: &Router) -> Self {
		Self {
			router: router.clone(),
			routes: Vec::new(),
		}
	}

	/// Declares a route for `path`.
	pub fn route<F>(mut self, path: impl Into<String>, element: F) -> Self
	where
		F: Fn() -> View + 'static,
	{
		self.routes.push(Route {
			path: path.into(),
			index: false,
			element: Rc::new(element),
		});
		self
	}

	/// Declares an index route, matching the root path only.
	pub fn index<F>(mut self, element: F) -> Self
	where
		F: Fn() -> View + 'static,
	{
		self.routes.push(Route {
			path: "/".to_string(),
			index: true,
			element: Rc::new(element),
		});
		self
	}

	/// Returns the declarations in order.
	pub fn routes(&self) -> &[Route] {
		&self.routes
	}

	/// Returns the first declaration matching `pathname`.
	pub fn resolve(&self, pathname: &str) -> Option<&Route> {
		self.routes.iter().find(|route| route.matches(pathname))
	}

	/// Renders the route matching the current location, tracking the read.
	pub fn render(&self) -> View {
		let pathname = self.router.store().with(|location| location.pathname.clone());
		self.resolve(&pathname)
			.map(Route::render)
			.unwrap_or(View::Empty)
	}

	/// Renders into `sink` now and again after every location change.
	///
	/// Rendering stops when the returned effect is dropped.
	pub fn mount<S>(self, mut sink: S) -> Effect
	where
		S: FnMut(View) + 'static,
	{
		Effect::new(move || sink(self.render()))
	}
}

impl fmt::Debug for Routes {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Routes")
			.field("routes", &self.routes)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::RouterConfig;
	use crate::router::history::MemoryHistory;
	use core::cell::RefCell;
	use rstest::rstest;
	use waymark_core::flush_updates;

	fn app_routes(router: &Router) -> Routes {
		Routes::new(router)
			.index(|| View::text("Dashboard"))
			.route("/import", || View::text("Import"))
			.route("/financials", || View::text("Financials"))
			.route("/reports/*", || View::text("Reports"))
			.route("*", || View::text("Not found"))
	}

	#[rstest]
	#[case("/", Some("/"))]
	#[case("/import/", Some("/import"))]
	#[case("/reports/2024/q1", Some("/reports/*"))]
	#[case("/unknown", Some("*"))]
	fn test_resolve_first_match(#[case] pathname: &str, #[case] expected: Option<&str>) {
		let routes = app_routes(&Router::detached(RouterConfig::new()));
		assert_eq!(routes.resolve(pathname).map(Route::path), expected);
	}

	#[rstest]
	fn test_first_declaration_wins() {
		let routes = Routes::new(&Router::detached(RouterConfig::new()))
			.route("/risk", || View::text("first"))
			.route("/risk", || View::text("second"));
		assert_eq!(
			routes.resolve("/risk").map(Route::render).map(|v| v.render_to_string()),
			Some("first".to_string())
		);
	}

	#[rstest]
	fn test_no_match_renders_empty() {
		let routes = Routes::new(&Router::detached(RouterConfig::new()))
			.route("/import", || View::text("Import"));
		assert!(matches!(routes.render(), View::Empty));
	}

	#[rstest]
	fn test_index_matches_root_only() {
		let routes = Routes::new(&Router::detached(RouterConfig::new())).index(|| View::text("Home"));
		assert!(routes.resolve("/").is_some());
		assert!(routes.resolve("/import").is_none());
	}

	#[rstest]
	fn test_mount_rerenders_on_navigation() {
		let history = Rc::new(MemoryHistory::new("https://app.local", "/"));
		let router = Router::with_backend(RouterConfig::new().basename("/"), history.clone());
		let rendered = Rc::new(RefCell::new(Vec::new()));

		let _outlet = app_routes(&router).mount({
			let rendered = rendered.clone();
			move |view: View| rendered.borrow_mut().push(view.render_to_string())
		});
		assert_eq!(*rendered.borrow(), vec!["Dashboard"]);

		router.push("/financials").unwrap();
		flush_updates();
		history.back();
		flush_updates();

		assert_eq!(*rendered.borrow(), vec!["Dashboard", "Financials", "Dashboard"]);
	}
}
