//! Browser tests for the History API backend and DOM mounting
//!
//! These run under `wasm-bindgen-test` in a real browser:
//! 1. `pushState`/`replaceState` writes and entry state round-trips
//! 2. `popstate` listener attach and detach
//! 3. `<base href>` lookup
//! 4. `MouseEvent` to `ClickEvent` conversion
//! 5. A mounted outlet following a link click

#[cfg(all(target_family = "wasm", target_os = "unknown"))]
mod wasm_tests {
	use std::cell::Cell;
	use std::rc::Rc;

	use serde_json::json;
	use wasm_bindgen_test::*;
	use waymark_core::flush_updates;
	use waymark_router::RouterConfig;
	use waymark_router::component::{Component, View};
	use waymark_router::router::dom::{click_event, mount};
	use waymark_router::router::history::BrowserHistory;
	use waymark_router::router::{HistoryBackend, HostLocation, Link, MouseButton, Router, Routes};
	use web_sys::{Event, MouseEvent, MouseEventInit};

	wasm_bindgen_test_configure!(run_in_browser);

	fn window() -> web_sys::Window {
		web_sys::window().unwrap()
	}

	fn mouse_event(button: i16, ctrl: bool) -> MouseEvent {
		let init = MouseEventInit::new();
		init.set_button(button);
		init.set_ctrl_key(ctrl);
		init.set_bubbles(true);
		init.set_cancelable(true);
		MouseEvent::new_with_mouse_event_init_dict("click", &init).unwrap()
	}

	#[wasm_bindgen_test]
	fn test_origin_matches_window() {
		let history = BrowserHistory::new().unwrap();
		assert_eq!(history.origin(), window().location().origin().ok());
	}

	#[wasm_bindgen_test]
	fn test_push_entry_writes_location_and_state() {
		let history = BrowserHistory::new().unwrap();
		let before = window().history().unwrap().length().unwrap();

		history
			.push_entry("/waymark/push?tab=2#notes", Some(&json!({ "scroll": 120 })))
			.unwrap();

		let location = history.current_location();
		assert_eq!(location.pathname, "/waymark/push");
		assert_eq!(location.search, "?tab=2");
		assert_eq!(location.hash, "#notes");
		assert_eq!(location.state, Some(json!({ "scroll": 120 })));
		assert_eq!(window().history().unwrap().length().unwrap(), before + 1);
	}

	#[wasm_bindgen_test]
	fn test_replace_entry_keeps_history_length() {
		let history = BrowserHistory::new().unwrap();
		history.push_entry("/waymark/replace", None).unwrap();
		let before = window().history().unwrap().length().unwrap();

		history.replace_entry("/waymark/replaced", None).unwrap();

		let location = history.current_location();
		assert_eq!(location.pathname, "/waymark/replaced");
		assert_eq!(location.state, None);
		assert_eq!(window().history().unwrap().length().unwrap(), before);
	}

	#[wasm_bindgen_test]
	fn test_popstate_listener_detaches_on_drop() {
		let history = BrowserHistory::new().unwrap();
		history.replace_entry("/waymark/popstate", None).unwrap();
		let calls = Rc::new(Cell::new(0));
		let handle = history.on_external_change({
			let calls = calls.clone();
			Rc::new(move |location: HostLocation| {
				assert_eq!(location.pathname, "/waymark/popstate");
				calls.set(calls.get() + 1);
			})
		});

		let popstate = Event::new("popstate").unwrap();
		window().dispatch_event(&popstate).unwrap();
		assert_eq!(calls.get(), 1);

		drop(handle);
		window().dispatch_event(&popstate).unwrap();
		assert_eq!(calls.get(), 1);
	}

	#[wasm_bindgen_test]
	fn test_base_uri_reads_base_element() {
		let history = BrowserHistory::new().unwrap();
		let document = window().document().unwrap();
		let head = document.query_selector("head").unwrap().unwrap();
		let base = document.create_element("base").unwrap();
		base.set_attribute("href", "/portal/").unwrap();
		head.append_child(&base).unwrap();

		assert_eq!(history.base_uri(), Some("/portal/".to_string()));

		base.remove();
		assert_eq!(history.base_uri(), None);
	}

	#[wasm_bindgen_test]
	fn test_click_event_maps_button_and_modifiers() {
		let event = mouse_event(1, true);
		let click = click_event(&event);

		assert_eq!(click.button(), MouseButton::Auxiliary);
		assert!(click.modifiers().ctrl);
		assert!(!click.modifiers().meta);
		assert!(!click.is_default_prevented());

		event.prevent_default();
		assert!(click_event(&event).is_default_prevented());
	}

	#[wasm_bindgen_test]
	fn test_mounted_link_click_navigates() {
		let history = Rc::new(BrowserHistory::new().unwrap());
		history.replace_entry("/waymark-app/", None).unwrap();
		let router = Router::with_backend(RouterConfig::new().basename("/waymark-app"), history);

		let document = window().document().unwrap();
		let container = document.create_element("div").unwrap();
		container.set_id("waymark-outlet");
		document.query_selector("body").unwrap().unwrap().append_child(&container).unwrap();

		let routes = Routes::new(&router)
			.index({
				let router = router.clone();
				move || Link::new(&router, "/reports", "Reports").render()
			})
			.route("/reports", || View::text("Quarterly reports"));
		let _outlet = mount(routes, "waymark-outlet").unwrap();

		let anchor = container.query_selector("a").unwrap().unwrap();
		assert_eq!(anchor.get_attribute("href"), Some("/waymark-app/reports".to_string()));

		let not_cancelled = anchor.dispatch_event(&mouse_event(0, false)).unwrap();
		flush_updates();

		assert!(!not_cancelled);
		assert_eq!(window().location().pathname().unwrap(), "/waymark-app/reports");
		assert_eq!(container.text_content(), Some("Quarterly reports".to_string()));

		container.remove();
	}
}
