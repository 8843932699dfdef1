//! Click events seen by links.
//!
//! [`ClickEvent`] is the target-independent view of a mouse activation. On
//! `wasm32` it is built from a `web_sys::MouseEvent`; elsewhere tests build it
//! directly.

/// Mouse button that triggered a click.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MouseButton {
	/// Primary (usually left) button.
	#[default]
	Primary,
	/// Auxiliary (usually middle) button.
	Auxiliary,
	/// Secondary (usually right) button.
	Secondary,
	/// Any other button, by DOM button index.
	Other(i16),
}

impl MouseButton {
	/// Maps a DOM `MouseEvent.button` index.
	pub fn from_index(index: i16) -> Self {
		match index {
			0 => Self::Primary,
			1 => Self::Auxiliary,
			2 => Self::Secondary,
			other => Self::Other(other),
		}
	}
}

/// Modifier keys held during a click.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
	/// Meta (Command / Windows) key.
	pub meta: bool,
	/// Alt (Option) key.
	pub alt: bool,
	/// Control key.
	pub ctrl: bool,
	/// Shift key.
	pub shift: bool,
}

impl Modifiers {
	/// Returns `true` if any modifier is held.
	pub fn any(&self) -> bool {
		self.meta || self.alt || self.ctrl || self.shift
	}
}

/// A click on a link.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickEvent {
	button: MouseButton,
	modifiers: Modifiers,
	default_prevented: bool,
}

impl ClickEvent {
	/// Creates a click with `button` and no modifiers.
	pub fn new(button: MouseButton) -> Self {
		Self {
			button,
			..Self::default()
		}
	}

	/// A plain primary-button click.
	pub fn primary() -> Self {
		Self::new(MouseButton::Primary)
	}

	/// Sets the held modifier keys.
	pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
		self.modifiers = modifiers;
		self
	}

	/// Marks the default action as already prevented.
	pub fn with_default_prevented(mut self, prevented: bool) -> Self {
		self.default_prevented = prevented;
		self
	}

	/// Returns the button.
	pub fn button(&self) -> MouseButton {
		self.button
	}

	/// Returns the held modifier keys.
	pub fn modifiers(&self) -> Modifiers {
		self.modifiers
	}

	/// Cancels the host's default action (following the link).
	pub fn prevent_default(&mut self) {
		self.default_prevented = true;
	}

	/// Returns `true` once [`prevent_default`](Self::prevent_default) was called.
	pub fn is_default_prevented(&self) -> bool {
		self.default_prevented
	}
}

/// Returns `true` if the router should take over this click.
///
/// Clicks that open a new tab or window, use a non-primary button, or were
/// already handled are left to the host.
///
/// ```
/// use waymark_router::router::{ClickEvent, Modifiers, should_intercept_click};
///
/// assert!(should_intercept_click(&ClickEvent::primary(), None));
/// assert!(!should_intercept_click(&ClickEvent::primary(), Some("_blank")));
///
/// let ctrl = ClickEvent::primary().with_modifiers(Modifiers { ctrl: true, ..Modifiers::default() });
/// assert!(!should_intercept_click(&ctrl, None));
/// ```
pub fn should_intercept_click(event: &ClickEvent, target: Option<&str>) -> bool {
	!event.is_default_prevented()
		&& event.button() == MouseButton::Primary
		&& target.is_none_or(|target| target.is_empty() || target == "_self")
		&& !event.modifiers().any()
}
