//! Route and active-link matching.
//!
//! Declared routes match exactly, with two wildcard forms: `*` matches every
//! path, and a pattern ending in `/*` matches its base and everything below it.
//! Link activity is looser: a link stays active on descendants of its target
//! unless `end` is requested.

use super::path::normalize_path;

/// Catch-all route pattern.
pub const WILDCARD: &str = "*";

/// Returns `true` if the declared route `pattern` matches `pathname`.
///
/// ```
/// use waymark_router::router::match_route_path;
///
/// assert!(match_route_path("*", "/anything"));
/// assert!(match_route_path("/financials", "/financials/"));
/// assert!(!match_route_path("/financials", "/financials/x"));
/// assert!(match_route_path("/reports/*", "/reports/2024"));
/// ```
pub fn match_route_path(pattern: &str, pathname: &str) -> bool {
	if pattern == WILDCARD {
		return true;
	}

	let pathname = normalize_path(pathname);

	if let Some(base) = pattern.strip_suffix("/*") {
		let base = normalize_path(base);
		return is_same_or_descendant(&base, &pathname);
	}

	normalize_path(pattern) == pathname
}

/// Returns `true` if a link to `target` should be shown as active at `pathname`.
///
/// The root target is only active at the root. With `end`, the match must be
/// exact; otherwise descendants of `target` match as well.
pub fn match_nav_path(target: &str, pathname: &str, end: bool) -> bool {
	let target = normalize_path(target);
	let pathname = normalize_path(pathname);

	if target == "/" {
		return pathname == "/";
	}

	if end {
		return pathname == target;
	}

	is_same_or_descendant(&target, &pathname)
}

fn is_same_or_descendant(base: &str, pathname: &str) -> bool {
	if base == "/" {
		return true;
	}
	pathname == base
		|| pathname
			.strip_prefix(base)
			.is_some_and(|rest| rest.starts_with('/'))
}
