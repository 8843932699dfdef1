//! History API backend.

use serde_json::Value;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, Window};

use super::{ExternalChangeCallback, HistoryBackend, HostLocation, ListenerHandle};
use crate::router::error::RouterError;
use crate::{debug_log, error_log};

/// [`HistoryBackend`] over `window.location` and `window.history`.
#[derive(Debug, Clone)]
pub struct BrowserHistory {
	window: Window,
}

impl BrowserHistory {
	/// Binds to the current window, if there is one.
	pub fn new() -> Option<Self> {
		web_sys::window().map(|window| Self { window })
	}

	fn history(&self) -> Result<web_sys::History, RouterError> {
		self.window.history().map_err(js_error)
	}
}

impl HistoryBackend for BrowserHistory {
	fn origin(&self) -> Option<String> {
		self.window.location().origin().ok()
	}

	fn current_location(&self) -> HostLocation {
		read_location(&self.window)
	}

	fn push_entry(&self, href: &str, state: Option<&Value>) -> Result<(), RouterError> {
		let js_state = state_to_js(state)?;
		self.history()?
			.push_state_with_url(&js_state, "", Some(href))
			.map_err(js_error)
	}

	fn replace_entry(&self, href: &str, state: Option<&Value>) -> Result<(), RouterError> {
		let js_state = state_to_js(state)?;
		self.history()?
			.replace_state_with_url(&js_state, "", Some(href))
			.map_err(js_error)
	}

	fn assign(&self, href: &str) -> Result<(), RouterError> {
		self.window.location().assign(href).map_err(js_error)
	}

	fn base_uri(&self) -> Option<String> {
		self.window
			.document()?
			.query_selector("base[href]")
			.ok()
			.flatten()
			.and_then(|base| base.get_attribute("href"))
	}

	fn on_external_change(&self, callback: ExternalChangeCallback) -> ListenerHandle {
		let window = self.window.clone();
		let handler = Closure::wrap(Box::new(move |_event: Event| {
			let location = read_location(&window);
			debug_log!("popstate: {}", location.pathname);
			callback(location);
		}) as Box<dyn FnMut(_)>);

		if let Err(err) = self
			.window
			.add_event_listener_with_callback("popstate", handler.as_ref().unchecked_ref())
		{
			error_log!("failed to register popstate listener: {:?}", err);
			return ListenerHandle::noop();
		}

		let window = self.window.clone();
		ListenerHandle::new(move || {
			let _ = window
				.remove_event_listener_with_callback("popstate", handler.as_ref().unchecked_ref());
		})
	}
}

fn read_location(window: &Window) -> HostLocation {
	let location = window.location();
	let state = window
		.history()
		.ok()
		.and_then(|history| history.state().ok())
		.and_then(|state| state_from_js(&state));

	HostLocation {
		pathname: location.pathname().unwrap_or_else(|_| "/".to_string()),
		search: location.search().unwrap_or_default(),
		hash: location.hash().unwrap_or_default(),
		state,
	}
}

fn state_to_js(state: Option<&Value>) -> Result<JsValue, RouterError> {
	let Some(state) = state else {
		return Ok(JsValue::NULL);
	};
	let json = serde_json::to_string(state)?;
	js_sys::JSON::parse(&json).map_err(|err| RouterError::StateSerialization(describe(&err)))
}

fn state_from_js(state: &JsValue) -> Option<Value> {
	if state.is_null() || state.is_undefined() {
		return None;
	}
	let json = js_sys::JSON::stringify(state).ok()?.as_string()?;
	serde_json::from_str(&json).ok()
}

fn js_error(err: JsValue) -> RouterError {
	RouterError::NavigationFailed(describe(&err))
}

fn describe(err: &JsValue) -> String {
	err.as_string().unwrap_or_else(|| format!("{:?}", err))
}
