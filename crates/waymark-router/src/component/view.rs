//! View enum and element builder.

use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;

use crate::router::ClickEvent;

/// Click handler attached to an element.
pub type ClickHandler = Rc<dyn Fn(&mut ClickEvent)>;

/// Renderable content: an element, text, a fragment, or nothing.
#[derive(Debug, Clone)]
pub enum View {
	/// An element.
	Element(ElementView),
	/// A text node.
	Text(Cow<'static, str>),
	/// Several views without a wrapper element.
	Fragment(Vec<View>),
	/// Renders nothing.
	Empty,
}

/// An element in the view tree.
#[derive(Clone)]
pub struct ElementView {
	tag: Cow<'static, str>,
	attrs: Vec<(Cow<'static, str>, Cow<'static, str>)>,
	children: Vec<View>,
	on_click: Option<ClickHandler>,
}

impl fmt::Debug for ElementView {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ElementView")
			.field("tag", &self.tag)
			.field("attrs", &self.attrs)
			.field("children", &self.children)
			.field("has_click_handler", &self.on_click.is_some())
			.finish()
	}
}

impl ElementView {
	/// Creates an element with the given tag and no attributes or children.
	///
	/// # Arguments
	///
	/// * `tag` - Element name, such as `"a"` or `"nav"`
	///
	/// # Example
	///
	/// ```
	/// use waymark_router::component::{ElementView, IntoView};
	///
	/// let nav = ElementView::new("nav")
	///     .attr("class", "sidebar")
	///     .child(ElementView::new("a").attr("href", "/risk").child("Risk"));
	///
	/// assert_eq!(
	///     nav.into_view().render_to_string(),
	///     r#"<nav class="sidebar"><a href="/risk">Risk</a></nav>"#
	/// );
	/// ```
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
		Self {
			tag: tag.into(),
			attrs: Vec::new(),
			children: Vec::new(),
			on_click: None,
		}
	}

	/// Adds an attribute. A later value for the same name replaces the earlier one.
	pub fn attr(
		mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) -> Self {
		let name = name.into();
		let value = value.into();
		match self.attrs.iter_mut().find(|(existing, _)| *existing == name) {
			Some(slot) => slot.1 = value,
			None => self.attrs.push((name, value)),
		}
		self
	}

	/// Adds a child view.
	pub fn child(mut self, child: impl IntoView) -> Self {
		self.children.push(child.into_view());
		self
	}

	/// Sets the click handler, replacing any previous one.
	///
	/// In the browser the handler receives every native `click` on the element;
	/// off the browser it runs through [`dispatch_click`](Self::dispatch_click).
	pub fn on_click(mut self, handler: ClickHandler) -> Self {
		self.on_click = Some(handler);
		self
	}

	/// Returns the tag name.
	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	/// Returns the attributes in insertion order.
	pub fn attrs(&self) -> &[(Cow<'static, str>, Cow<'static, str>)] {
		&self.attrs
	}

	/// Returns the value of attribute `name`, if set.
	pub fn get_attr(&self, name: &str) -> Option<&str> {
		self.attrs
			.iter()
			.find(|(existing, _)| existing == name)
			.map(|(_, value)| value.as_ref())
	}

	/// Returns the child views.
	pub fn child_views(&self) -> &[View] {
		&self.children
	}

	/// Returns `true` if a click handler is attached.
	pub fn has_click_handler(&self) -> bool {
		self.on_click.is_some()
	}

	/// Runs the click handler, if any. Returns `false` when there is none.
	pub fn dispatch_click(&self, event: &mut ClickEvent) -> bool {
		match &self.on_click {
			Some(handler) => {
				handler(event);
				true
			}
			None => false,
		}
	}
}

impl View {
	/// Creates a text view.
	pub fn text(content: impl Into<Cow<'static, str>>) -> Self {
		Self::Text(content.into())
	}

	/// Creates a fragment from anything convertible into views.
	///
	/// # Example
	///
	/// ```
	/// use waymark_router::component::View;
	///
	/// let crumbs = View::fragment(["Home", " / ", "Risk"]);
	/// assert_eq!(crumbs.render_to_string(), "Home / Risk");
	/// ```
	pub fn fragment(children: impl IntoIterator<Item = impl IntoView>) -> Self {
		Self::Fragment(children.into_iter().map(IntoView::into_view).collect())
	}

	/// Returns the element, if this view is one.
	pub fn as_element(&self) -> Option<&ElementView> {
		match self {
			View::Element(el) => Some(el),
			_ => None,
		}
	}

	/// Renders the view to HTML. Text and attribute values are escaped.
	pub fn render_to_string(&self) -> String {
		let mut output = String::new();
		self.write_html(&mut output);
		output
	}

	fn write_html(&self, output: &mut String) {
		match self {
			View::Element(el) => {
				output.push('<');
				output.push_str(el.tag_name());
				for (name, value) in el.attrs() {
					output.push(' ');
					output.push_str(name);
					output.push_str("=\"");
					output.push_str(&html_escape(value));
					output.push('"');
				}
				output.push('>');
				for child in el.child_views() {
					child.write_html(output);
				}
				output.push_str("</");
				output.push_str(el.tag_name());
				output.push('>');
			}
			View::Text(text) => output.push_str(&html_escape(text)),
			View::Fragment(children) => {
				for child in children {
					child.write_html(output);
				}
			}
			View::Empty => {}
		}
	}
}

/// Conversion into a [`View`].
pub trait IntoView {
	/// Converts `self` into a view.
	fn into_view(self) -> View;
}

impl IntoView for View {
	fn into_view(self) -> View {
		self
	}
}

impl IntoView for ElementView {
	fn into_view(self) -> View {
		View::Element(self)
	}
}

impl IntoView for String {
	fn into_view(self) -> View {
		View::Text(Cow::Owned(self))
	}
}

impl IntoView for &'static str {
	fn into_view(self) -> View {
		View::Text(Cow::Borrowed(self))
	}
}

impl<T: IntoView> IntoView for Option<T> {
	fn into_view(self) -> View {
		self.map_or(View::Empty, IntoView::into_view)
	}
}

impl<T: IntoView> IntoView for Vec<T> {
	fn into_view(self) -> View {
		View::fragment(self)
	}
}

fn html_escape(s: &str) -> Cow<'_, str> {
	if !s.contains(['&', '<', '>', '"', '\'']) {
		return Cow::Borrowed(s);
	}
	let mut escaped = String::with_capacity(s.len() + 8);
	for c in s.chars() {
		match c {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#x27;"),
			_ => escaped.push(c),
		}
	}
	Cow::Owned(escaped)
}
