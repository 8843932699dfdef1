//! Browser mounting for route outlets.
//!
//! [`mount`] writes an outlet into a DOM element and rewrites it whenever the
//! location changes. Elements carrying a click handler (links) get a native
//! `click` listener that converts the `MouseEvent` into a [`ClickEvent`].

use core::cell::RefCell;
use std::rc::Rc;

use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use waymark_core::Effect;
use web_sys::{Document, Element, MouseEvent, Node};

use super::event::{ClickEvent, Modifiers, MouseButton};
use super::routes::Routes;
use crate::component::{ElementView, View};
use crate::{debug_log, error_log};

type ClickListener = Closure<dyn FnMut(MouseEvent)>;

/// Errors raised while writing views into the document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
	/// No `window` object.
	#[error("Window object not available")]
	NoWindow,
	/// No `document` on the window.
	#[error("Document object not available")]
	NoDocument,
	/// No element with the requested id.
	#[error("Element not found: #{0}")]
	ElementNotFound(String),
	/// A DOM call threw.
	#[error("DOM operation failed: {0}")]
	Js(String),
}

impl From<JsValue> for DomError {
	fn from(err: JsValue) -> Self {
		Self::Js(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
	}
}

/// Renders `routes` into the element with id `element_id` and keeps it current.
///
/// The outlet stays mounted as long as the returned effect is alive.
pub fn mount(routes: Routes, element_id: &str) -> Result<Effect, DomError> {
	#[cfg(feature = "console_error_panic_hook")]
	console_error_panic_hook::set_once();

	let document = web_sys::window()
		.ok_or(DomError::NoWindow)?
		.document()
		.ok_or(DomError::NoDocument)?;
	let container = document
		.get_element_by_id(element_id)
		.ok_or_else(|| DomError::ElementNotFound(element_id.to_string()))?;

	debug_log!("mounting routes into #{}", element_id);

	let listeners: Rc<RefCell<Vec<ClickListener>>> = Rc::default();
	Ok(routes.mount(move |view: View| {
		container.set_text_content(None);
		let mut listeners = listeners.borrow_mut();
		listeners.clear();
		if let Err(err) = append_view(&document, &container, &view, &mut listeners) {
			error_log!("failed to render route: {}", err);
		}
	}))
}

fn append_view(
	document: &Document,
	parent: &Node,
	view: &View,
	listeners: &mut Vec<ClickListener>,
) -> Result<(), DomError> {
	match view {
		View::Element(el) => {
			let element = create_element(document, el, listeners)?;
			for child in el.child_views() {
				append_view(document, &element, child, listeners)?;
			}
			parent.append_child(&element)?;
		}
		View::Text(text) => {
			parent.append_child(&document.create_text_node(text))?;
		}
		View::Fragment(children) => {
			for child in children {
				append_view(document, parent, child, listeners)?;
			}
		}
		View::Empty => {}
	}
	Ok(())
}

fn create_element(
	document: &Document,
	el: &ElementView,
	listeners: &mut Vec<ClickListener>,
) -> Result<Element, DomError> {
	let element = document.create_element(el.tag_name())?;
	for (name, value) in el.attrs() {
		element.set_attribute(name, value)?;
	}

	if el.has_click_handler() {
		let view = el.clone();
		let listener = Closure::wrap(Box::new(move |event: MouseEvent| {
			let mut click = click_event(&event);
			view.dispatch_click(&mut click);
			if click.is_default_prevented() && !event.default_prevented() {
				event.prevent_default();
			}
		}) as Box<dyn FnMut(_)>);
		element.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())?;
		listeners.push(listener);
	}

	Ok(element)
}

/// Converts a DOM click into a [`ClickEvent`].
pub fn click_event(event: &MouseEvent) -> ClickEvent {
	ClickEvent::new(MouseButton::from_index(event.button()))
		.with_modifiers(Modifiers {
			meta: event.meta_key(),
			alt: event.alt_key(),
			ctrl: event.ctrl_key(),
			shift: event.shift_key(),
		})
		.with_default_prevented(event.default_prevented())
}
