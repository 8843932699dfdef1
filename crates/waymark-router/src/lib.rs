//! waymark-router - History API client-side routing
//!
//! A single-page-application navigation core: it keeps the current location in a
//! reactive store, matches it against declared routes, writes navigations to the
//! host history, and turns plain left-clicks on links into client-side navigation.
//!
//! ## Architecture
//!
//! - [`router::path`]: path normalization and basename handling
//! - [`router::matcher`]: route and active-link matching
//! - [`router::history`]: the host navigation environment ([`HistoryBackend`])
//! - [`router::location`]: the reactive location store
//! - [`router::Router`]: navigation controller and href construction
//! - [`router::Routes`]: the route outlet
//! - [`router::Link`] / [`router::NavLink`]: anchors with click interception
//!
//! ## Example
//!
//! ```
//! use std::rc::Rc;
//! use waymark_router::component::View;
//! use waymark_router::router::{MemoryHistory, Router, Routes};
//! use waymark_router::RouterConfig;
//!
//! let history = Rc::new(MemoryHistory::new("https://app.local", "/base/import"));
//! let router = Router::with_backend(RouterConfig::new().basename("/base"), history.clone());
//!
//! let routes = Routes::new(&router)
//! 	.route("/", || View::text("Dashboard"))
//! 	.route("/import", || View::text("Import"))
//! 	.route("*", || View::text("Not found"));
//! assert_eq!(routes.render().render_to_string(), "Import");
//!
//! router.push("/risk").unwrap();
//! assert_eq!(history.current_href(), "/base/risk");
//! assert_eq!(routes.render().render_to_string(), "Not found");
//! ```

#![warn(missing_docs)]

pub mod component;
pub mod config;
pub mod logging;
pub mod router;

pub use config::RouterConfig;
pub use router::{
	HistoryBackend, Link, Location, NavLink, NavigateOptions, Router, RouterError, Routes,
};

/// Commonly used items.
pub mod prelude {
	pub use crate::component::{Component, IntoView, View};
	pub use crate::config::RouterConfig;
	pub use crate::router::{
		ClickEvent, HistoryBackend, Link, Location, MemoryHistory, NavLink, NavigateOptions,
		Resolvable, Router, RouterError, Routes, use_location, use_navigate, use_router,
	};
}
