//! Client-side router.
//!
//! Navigation flows one way:
//!
//! 1. a [`Link`] click passes [`should_intercept_click`] and calls [`Router::navigate`],
//! 2. the router writes the href to the [`HistoryBackend`] and publishes the new
//!    [`Location`] through its [`LocationStore`],
//! 3. [`Routes`] outlets and [`NavLink`]s that read the location re-render on the
//!    next reactive flush.
//!
//! Back/forward navigation enters at step 2 through the backend's external-change
//! notification.

mod components;
mod context;
mod core;
#[cfg(all(target_family = "wasm", target_os = "unknown"))]
pub mod dom;
mod error;
mod event;
pub mod history;
pub mod location;
pub mod matcher;
pub mod path;
mod routes;
pub mod url;

pub use components::{Link, NavLink, Resolvable};
pub use context::{RouterScope, expect_router, use_location, use_navigate, use_router};
pub use self::core::{NavigateFn, NavigateOptions, Router};
pub use error::RouterError;
pub use event::{ClickEvent, Modifiers, MouseButton, should_intercept_click};
pub use history::{HistoryBackend, HostLocation, ListenerHandle, MemoryHistory, default_backend};
pub use location::{Location, LocationStore, Subscription};
pub use matcher::{match_nav_path, match_route_path};
pub use path::{apply_basename, normalize_basename, normalize_path, strip_basename};
pub use routes::{Route, Routes};
pub use self::url::{Target, resolve_target};
