//! # waymark
//!
//! Client-side navigation for Rust single-page applications.
//!
//! waymark keeps the current location in a reactive store, matches it against
//! an ordered list of routes, writes navigations to the host history, and turns
//! plain left-clicks on links into client-side navigation. In the browser the
//! host is the History API; everywhere else an in-memory history stands in.
//!
//! ## Crates
//!
//! - [`reactive`]: signals, effects and scoped context (`waymark-core`)
//! - [`router`]: routing, history backends and links (`waymark-router`)
//!
//! ## Quick Example
//!
//! ```
//! use std::rc::Rc;
//! use waymark::prelude::*;
//!
//! let history = Rc::new(MemoryHistory::new("https://app.local", "/"));
//! let router = Router::with_backend(RouterConfig::new(), history.clone());
//! let _scope = router.provide();
//!
//! let routes = Routes::new(&router)
//! 	.index(|| View::text("Dashboard"))
//! 	.route("/financials", || View::text("Financials"))
//! 	.route("*", || View::text("Not found"));
//!
//! use_navigate().unwrap().push("/financials").unwrap();
//! assert_eq!(routes.render().render_to_string(), "Financials");
//! ```

#![warn(missing_docs)]

pub mod reactive;
pub mod router;

/// Commonly used items from both crates.
pub mod prelude {
	pub use waymark_core::{Effect, Signal, flush_updates};
	pub use waymark_router::prelude::*;
}
