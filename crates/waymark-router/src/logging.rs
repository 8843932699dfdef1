//! Logging abstraction layer for waymark-router
//!
//! The same macros work on both targets:
//!
//! | Macro | WASM (debug builds only) | Native |
//! |-------|--------------------------|--------|
//! | `debug_log!` | `console.debug` | `tracing::debug!` |
//! | `info_log!` | `console.info` | `tracing::info!` |
//! | `warn_log!` | `console.warn` | `tracing::warn!` |
//! | `error_log!` | `console.error` | `tracing::error!` |
//!
//! On WASM the macros compile to nothing in release builds. On native targets the
//! events go through `tracing`, so filtering is up to the installed subscriber.
//!
//! ## Example
//!
//! ```ignore
//! use waymark_router::{debug_log, warn_log};
//!
//! debug_log!("navigate: {} -> {}", from, to);
//! warn_log!("history push rejected: {}", err);
//! ```

#[doc(hidden)]
#[cfg(not(all(target_family = "wasm", target_os = "unknown")))]
pub use tracing as __tracing;

#[doc(hidden)]
#[cfg(all(target_family = "wasm", target_os = "unknown"))]
pub use web_sys as __web_sys;

/// Logs a debug message.
#[macro_export]
#[cfg(all(debug_assertions, target_family = "wasm", target_os = "unknown"))]
macro_rules! debug_log {
	($($arg:tt)*) => {{
		$crate::logging::__web_sys::console::debug_1(&format!($($arg)*).into());
	}};
}

/// Logs a debug message.
#[macro_export]
#[cfg(all(not(debug_assertions), target_family = "wasm", target_os = "unknown"))]
macro_rules! debug_log {
	($($arg:tt)*) => {{}};
}

/// Logs a debug message.
#[macro_export]
#[cfg(not(all(target_family = "wasm", target_os = "unknown")))]
macro_rules! debug_log {
	($($arg:tt)*) => {{
		$crate::logging::__tracing::debug!(target: "waymark_router", $($arg)*);
	}};
}

/// Logs an info message.
#[macro_export]
#[cfg(all(debug_assertions, target_family = "wasm", target_os = "unknown"))]
macro_rules! info_log {
	($($arg:tt)*) => {{
		$crate::logging::__web_sys::console::info_1(&format!($($arg)*).into());
	}};
}

/// Logs an info message.
#[macro_export]
#[cfg(all(not(debug_assertions), target_family = "wasm", target_os = "unknown"))]
macro_rules! info_log {
	($($arg:tt)*) => {{}};
}

/// Logs an info message.
#[macro_export]
#[cfg(not(all(target_family = "wasm", target_os = "unknown")))]
macro_rules! info_log {
	($($arg:tt)*) => {{
		$crate::logging::__tracing::info!(target: "waymark_router", $($arg)*);
	}};
}

/// Logs a warning.
#[macro_export]
#[cfg(all(debug_assertions, target_family = "wasm", target_os = "unknown"))]
macro_rules! warn_log {
	($($arg:tt)*) => {{
		$crate::logging::__web_sys::console::warn_1(&format!($($arg)*).into());
	}};
}

/// Logs a warning.
#[macro_export]
#[cfg(all(not(debug_assertions), target_family = "wasm", target_os = "unknown"))]
macro_rules! warn_log {
	($($arg:tt)*) => {{}};
}

/// Logs a warning.
#[macro_export]
#[cfg(not(all(target_family = "wasm", target_os = "unknown")))]
macro_rules! warn_log {
	($($arg:tt)*) => {{
		$crate::logging::__tracing::warn!(target: "waymark_router", $($arg)*);
	}};
}

/// Logs an error.
#[macro_export]
#[cfg(all(debug_assertions, target_family = "wasm", target_os = "unknown"))]
macro_rules! error_log {
	($($arg:tt)*) => {{
		$crate::logging::__web_sys::console::error_1(&format!($($arg)*).into());
	}};
}

/// Logs an error.
#[macro_export]
#[cfg(all(not(debug_assertions), target_family = "wasm", target_os = "unknown"))]
macro_rules! error_log {
	($($arg:tt)*) => {{}};
}

/// Logs an error.
#[macro_export]
#[cfg(not(all(target_family = "wasm", target_os = "unknown")))]
macro_rules! error_log {
	($($arg:tt)*) => {{
		$crate::logging::__tracing::error!(target: "waymark_router", $($arg)*);
	}};
}
