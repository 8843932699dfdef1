//! View tree used by the router's outlets and links.
//!
//! A [`View`] is a plain value: it renders to an HTML string on any target and
//! is written into the DOM by [`router::dom`](crate::router) on `wasm32`.
//! Elements may carry a click handler so link behaviour can be exercised
//! without a browser.

mod r#trait;
mod view;

pub use r#trait::Component;
pub use view::{ClickHandler, ElementView, IntoView, View};
