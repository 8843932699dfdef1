//! Router configuration.
//!
//! The only construction-time setting is the basename, the path prefix the whole
//! application is served under. It can be given explicitly, baked in at compile
//! time through the `WAYMARK_BASE_URL` environment variable, or taken from the
//! document's `<base href>`.
//!
//! ```
//! use waymark_router::RouterConfig;
//!
//! let config: RouterConfig = serde_json::from_str(r#"{ "basename": "/app/" }"#).unwrap();
//! assert_eq!(config.resolve_basename(None), "/app");
//! ```

use serde::{Deserialize, Serialize};

use crate::router::path::normalize_basename;

/// Compile-time default basename, analogous to a bundler's public base path.
pub const BASE_URL_ENV: Option<&str> = option_env!("WAYMARK_BASE_URL");

/// Construction-time settings for a [`Router`](crate::Router).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
	/// Basename as an absolute URL or a path. `None` falls back to the defaults.
	pub basename: Option<String>,
}

impl RouterConfig {
	/// Creates a configuration with no explicit basename.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the basename.
	pub fn basename(mut self, basename: impl Into<String>) -> Self {
		self.basename = Some(basename.into());
		self
	}

	/// Resolves the normalized basename.
	///
	/// Precedence: explicit value, then [`BASE_URL_ENV`], then `host_base_uri`
	/// (the document's `<base href>`), then `/`. Unparsable input degrades to `/`
	/// rather than failing.
	pub fn resolve_basename(&self, host_base_uri: Option<&str>) -> String {
		let raw = self
			.basename
			.as_deref()
			.or(BASE_URL_ENV)
			.or(host_base_uri)
			.filter(|raw| !raw.is_empty());
		normalize_basename(raw)
	}
}
