//! Navigation anchors.
//!
//! [`Link`] renders a plain `<a>` whose href already carries the basename, and
//! turns plain left-clicks on internal targets into router navigation. Anything
//! else (modified clicks, other buttons, `target="_blank"`, external URLs) is
//! left to the host.

use core::fmt;
use std::rc::Rc;

use serde_json::Value;

use super::core::{NavigateOptions, Router};
use super::event::{ClickEvent, should_intercept_click};
use super::matcher::match_nav_path;
use super::url::Target;
use crate::component::{ClickHandler, Component, ElementView, IntoView, View};
use crate::warn_log;

/// A value given directly or computed from whether a link is active.
pub enum Resolvable<T> {
	/// Same value in both states.
	Static(T),
	/// Computed from `is_active`.
	Computed(Rc<dyn Fn(bool) -> T>),
}

impl<T> Resolvable<T> {
	/// Wraps a function of `is_active`.
	pub fn computed(f: impl Fn(bool) -> T + 'static) -> Self {
		Self::Computed(Rc::new(f))
	}
}

impl<T: Clone> Resolvable<T> {
	/// Returns the value for the given state.
	pub fn resolve(&self, is_active: bool) -> T {
		match self {
			Self::Static(value) => value.clone(),
			Self::Computed(f) => f(is_active),
		}
	}
}

impl<T: Clone> Clone for Resolvable<T> {
	fn clone(&self) -> Self {
		match self {
			Self::Static(value) => Self::Static(value.clone()),
			Self::Computed(f) => Self::Computed(Rc::clone(f)),
		}
	}
}

impl<T: fmt::Debug> fmt::Debug for Resolvable<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Static(value) => f.debug_tuple("Static").field(value).finish(),
			Self::Computed(_) => f.write_str("Computed(..)"),
		}
	}
}

impl<T> From<T> for Resolvable<T> {
	fn from(value: T) -> Self {
		Self::Static(value)
	}
}

impl From<&str> for Resolvable<String> {
	fn from(value: &str) -> Self {
		Self::Static(value.to_string())
	}
}

/// An anchor that navigates through the router.
///
/// ```
/// use waymark_router::component::Component;
/// use waymark_router::router::{Link, Router};
/// use waymark_router::RouterConfig;
///
/// let router = Router::detached(RouterConfig::new().basename("/base"));
/// let link = Link::new(&router, "/import", "Import").attr("class", "nav");
/// assert_eq!(
///     link.render().render_to_string(),
///     r#"<a href="/base/import" class="nav" data-link="true">Import</a>"#
/// );
/// ```
#[derive(Clone)]
pub struct Link {
	router: Router,
	to: String,
	children: View,
	target: Option<String>,
	replace: bool,
	state: Option<Value>,
	attrs: Vec<(String, String)>,
	on_click: Option<ClickHandler>,
}

impl Link {
	/// Creates a link to `to`.
	pub fn new(router: &Router, to: impl Into<String>, children: impl IntoView) -> Self {
		Self {
			router: router.clone(),
			to: to.into(),
			children: children.into_view(),
			target: None,
			replace: false,
			state: None,
			attrs: Vec::new(),
			on_click: None,
		}
	}

	/// Sets the anchor's `target`. Anything but `_self` leaves clicks to the host.
	pub fn target(mut self, target: impl Into<String>) -> Self {
		self.target = Some(target.into());
		self
	}

	/// Replaces the current entry instead of pushing.
	pub fn replace(mut self, replace: bool) -> Self {
		self.replace = replace;
		self
	}

	/// Stores `state` with the entry.
	pub fn state(mut self, state: Value) -> Self {
		self.state = Some(state);
		self
	}

	/// Adds a pass-through attribute. `href` is always computed by the router.
	pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.attrs.push((name.into(), value.into()));
		self
	}

	/// Runs `handler` before the router looks at a click. Calling
	/// [`ClickEvent::prevent_default`] there cancels the navigation.
	pub fn on_click(mut self, handler: impl Fn(&mut ClickEvent) + 'static) -> Self {
		self.on_click = Some(Rc::new(handler));
		self
	}

	/// Returns the destination as given.
	pub fn to(&self) -> &str {
		&self.to
	}

	/// Returns the rendered href.
	pub fn href(&self) -> String {
		self.router.create_href(&self.to)
	}

	/// Returns `true` if the destination leaves the app.
	pub fn is_external(&self) -> bool {
		self.router.is_external(&self.to)
	}

	/// Handles a click on the anchor.
	pub fn handle_click(&self, event: &mut ClickEvent) {
		if let Some(handler) = &self.on_click {
			handler(event);
		}

		if !should_intercept_click(event, self.target.as_deref()) || self.is_external() {
			return;
		}

		event.prevent_default();
		let options = NavigateOptions {
			replace: self.replace,
			state: self.state.clone(),
		};
		if let Err(err) = self.router.navigate(&self.to, options) {
			warn_log!("link navigation to {} failed: {}", self.to, err);
		}
	}

	fn anchor(&self, children: View) -> ElementView {
		let mut el = ElementView::new("a").attr("href", self.href());

		if let Some(target) = &self.target {
			el = el.attr("target", target.clone());
		}
		for (name, value) in self.attrs.iter().filter(|(name, _)| name != "href") {
			el = el.attr(name.clone(), value.clone());
		}
		if !self.is_external() {
			el = el.attr("data-link", "true");
			if self.replace {
				el = el.attr("data-replace", "true");
			}
		}

		let link = self.clone();
		el.on_click(Rc::new(move |event: &mut ClickEvent| link.handle_click(event)))
			.child(children)
	}
}

impl Component for Link {
	fn render(&self) -> View {
		self.anchor(self.children.clone()).into_view()
	}

	fn name() -> &'static str {
		"Link"
	}
}

impl fmt::Debug for Link {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Link")
			.field("to", &self.to)
			.field("target", &self.target)
			.field("replace", &self.replace)
			.field("state", &self.state)
			.field("attrs", &self.attrs)
			.finish()
	}
}

/// A [`Link`] that knows whether it points at the current location.
///
/// ```
/// use waymark_router::component::Component;
/// use waymark_router::router::{NavLink, Resolvable, Router};
/// use waymark_router::RouterConfig;
///
/// let router = Router::detached(RouterConfig::new());
/// let home = NavLink::new(&router, "/", "Home")
///     .class_name(Resolvable::computed(|active| if active { "active".into() } else { String::new() }));
/// assert!(home.is_active());
/// assert_eq!(
///     home.render().render_to_string(),
///     r#"<a href="/" data-link="true" class="active" aria-current="page">Home</a>"#
/// );
/// ```
#[derive(Clone, Debug)]
pub struct NavLink {
	link: Link,
	end: bool,
	class_name: Option<Resolvable<String>>,
	style: Option<Resolvable<String>>,
	children: Resolvable<View>,
}

impl NavLink {
	/// Creates a nav link to `to`.
	pub fn new(router: &Router, to: impl Into<String>, children: impl IntoView) -> Self {
		Self {
			link: Link::new(router, to, View::Empty),
			end: false,
			class_name: None,
			style: None,
			children: Resolvable::Static(children.into_view()),
		}
	}

	/// Requires an exact match instead of matching descendants too.
	pub fn end(mut self, end: bool) -> Self {
		self.end = end;
		self
	}

	/// Sets the `class` attribute.
	pub fn class_name(mut self, class_name: impl Into<Resolvable<String>>) -> Self {
		self.class_name = Some(class_name.into());
		self
	}

	/// Sets the `style` attribute.
	pub fn style(mut self, style: impl Into<Resolvable<String>>) -> Self {
		self.style = Some(style.into());
		self
	}

	/// Computes the children from whether the link is active.
	pub fn children_fn(mut self, children: impl Fn(bool) -> View + 'static) -> Self {
		self.children = Resolvable::computed(children);
		self
	}

	/// Configures the underlying [`Link`].
	pub fn link(mut self, configure: impl FnOnce(Link) -> Link) -> Self {
		self.link = configure(self.link);
		self
	}

	/// Returns `true` if the current location matches, tracking the read.
	pub fn is_active(&self) -> bool {
		let Target::Internal { pathname, .. } = self.link.router.resolve(&self.link.to) else {
			return false;
		};
		self.link
			.router
			.store()
			.with(|location| match_nav_path(&pathname, &location.pathname, self.end))
	}

	/// Handles a click on the anchor.
	pub fn handle_click(&self, event: &mut ClickEvent) {
		self.link.handle_click(event);
	}
}

impl Component for NavLink {
	fn render(&self) -> View {
		let is_active = self.is_active();
		let mut el = self.link.anchor(self.children.resolve(is_active));

		if let Some(class_name) = &self.class_name {
			let class_name = class_name.resolve(is_active);
			if !class_name.is_empty() {
				el = el.attr("class", class_name);
			}
		}
		if let Some(style) = &self.style {
			let style = style.resolve(is_active);
			if !style.is_empty() {
				el = el.attr("style", style);
			}
		}
		if is_active {
			el = el.attr("aria-current", "page");
		}

		el.into_view()
	}

	fn name() -> &'static str {
		"NavLink"
	}
}
