//! Path normalization and basename handling.
//!
//! Every function here is total: any string input yields a path, never an error.
//! Normalized paths start with exactly one `/` and have no trailing `/`, except
//! the root path `/` itself.

use ::url::Url;

/// Base used to resolve relative basenames.
const RELATIVE_BASE: &str = "http://localhost";

/// Canonicalizes a path.
///
/// ```
/// use waymark_router::router::normalize_path;
///
/// assert_eq!(normalize_path(""), "/");
/// assert_eq!(normalize_path("risk/"), "/risk");
/// assert_eq!(normalize_path("//reports///"), "/reports");
/// ```
pub fn normalize_path(path: &str) -> String {
	let trimmed = path.trim_start_matches('/').trim_end_matches('/');
	if trimmed.is_empty() {
		return "/".to_string();
	}
	format!("/{}", trimmed)
}

/// Extracts and normalizes the path portion of a basename.
///
/// Accepts an absolute URL (`https://host/app/`), a path (`/app`, `app`), or
/// nothing. Anything that cannot be read as either degrades to `/`.
pub fn normalize_basename(raw: Option<&str>) -> String {
	let Some(raw) = raw.filter(|raw| !raw.trim().is_empty()) else {
		return "/".to_string();
	};

	if let Ok(absolute) = Url::parse(raw)
		&& !absolute.cannot_be_a_base()
	{
		return normalize_path(absolute.path());
	}

	match Url::parse(RELATIVE_BASE).and_then(|base| base.join(raw)) {
		Ok(resolved) => normalize_path(resolved.path()),
		Err(_) => normalize_path(raw),
	}
}

/// Removes `basename` from the front of `pathname`.
///
/// The basename only matches on a segment boundary: `/basex/foo` is returned
/// unchanged for basename `/base`. A stripped remainder is normalized, so the
/// result is at least `/`.
pub fn strip_basename(pathname: &str, basename: &str) -> String {
	let pathname = if pathname.is_empty() { "/" } else { pathname };

	if basename.is_empty() || basename == "/" {
		return pathname.to_string();
	}

	let Some(rest) = pathname.strip_prefix(basename) else {
		return pathname.to_string();
	};

	if !rest.is_empty() && !rest.starts_with('/') {
		return pathname.to_string();
	}

	normalize_path(rest)
}

/// Prefixes a normalized `pathname` with `basename`.
///
/// The root path maps to `basename + "/"` so that the app root keeps a trailing
/// slash under a subdirectory.
pub fn apply_basename(pathname: &str, basename: &str) -> String {
	let pathname = normalize_path(pathname);

	if basename.is_empty() || basename == "/" {
		return pathname;
	}

	if pathname == "/" {
		return format!("{}/", basename);
	}

	format!("{}{}", basename, pathname)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("", "/")]
	#[case("/", "/")]
	#[case("///", "/")]
	#[case("dashboard", "/dashboard")]
	#[case("/dashboard/", "/dashboard")]
	#[case("/reports/2024//", "/reports/2024")]
	#[case("//double", "/double")]
	fn test_normalize_path(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(normalize_path(input), expected);
	}

	#[rstest]
	#[case(None, "/")]
	#[case(Some(""), "/")]
	#[case(Some("/"), "/")]
	#[case(Some("/base/"), "/base")]
	#[case(Some("base"), "/base")]
	#[case(Some("https://app.local/base/"), "/base")]
	#[case(Some("./nested/app/"), "/nested/app")]
	fn test_normalize_basename(#[case] raw: Option<&str>, #[case] expected: &str) {
		assert_eq!(normalize_basename(raw), expected);
	}

	#[rstest]
	#[case("/base/dashboard", "/base", "/dashboard")]
	#[case("/base", "/base", "/")]
	#[case("/base/", "/base", "/")]
	#[case("/basex/foo", "/base", "/basex/foo")]
	#[case("/other", "/base", "/other")]
	#[case("/dashboard", "/", "/dashboard")]
	#[case("/dashboard", "", "/dashboard")]
	#[case("", "/base", "/")]
	#[case("/base//reports/", "/base", "/reports")]
	fn test_strip_basename(#[case] pathname: &str, #[case] basename: &str, #[case] expected: &str) {
		assert_eq!(strip_basename(pathname, basename), expected);
	}

	#[rstest]
	#[case("/dashboard", "/base", "/base/dashboard")]
	#[case("/", "/base", "/base/")]
	#[case("", "/base", "/base/")]
	#[case("dashboard/", "/base", "/base/dashboard")]
	#[case("/dashboard", "/", "/dashboard")]
	#[case("/dashboard", "", "/dashboard")]
	fn test_apply_basename(#[case] pathname: &str, #[case] basename: &str, #[case] expected: &str) {
		assert_eq!(apply_basename(pathname, basename), expected);
	}

	#[rstest]
	fn test_basename_round_trip() {
		let href = apply_basename("/dashboard", "/base");
		assert_eq!(strip_basename(&href, "/base"), "/dashboard");
	}
}
