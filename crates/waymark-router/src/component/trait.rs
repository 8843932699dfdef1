//! Component trait definition.

use super::view::View;

/// A reusable piece of UI.
///
/// # Example
///
/// ```
/// use waymark_router::component::{Component, ElementView, IntoView, View};
///
/// struct Heading {
///     title: String,
/// }
///
/// impl Component for Heading {
///     fn render(&self) -> View {
///         ElementView::new("h1").child(self.title.clone()).into_view()
///     }
///
///     fn name() -> &'static str {
///         "Heading"
///     }
/// }
///
/// let heading = Heading { title: "Risk".into() };
/// assert_eq!(heading.render().render_to_string(), "<h1>Risk</h1>");
/// ```
pub trait Component: 'static {
	/// Renders the component.
	fn render(&self) -> View;

	/// Returns the component's name for debugging.
	fn name() -> &'static str
	where
		Self: Sized;
}
