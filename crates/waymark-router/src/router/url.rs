//! Resolution of link targets against the host origin.
//!
//! A target is resolved the way a browser resolves an anchor's `href`: relative
//! paths against the origin root, absolute URLs as themselves. Whatever ends up
//! on a different origin (another host or port, another scheme, `mailto:`,
//! protocol-relative `//host/...`) is [`Target::External`] and belongs to the
//! browser. Everything else, including absolute URLs on the host's own origin,
//! is [`Target::Internal`] and belongs to the router.

use ::url::Url;

use super::path::normalize_path;

/// Origin used when no host environment is available.
pub const FALLBACK_ORIGIN: &str = "http://localhost";

/// A classified navigation target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
	/// Same-origin target, split into its parts. `pathname` is normalized and
	/// does not include the basename.
	Internal {
		/// Normalized path.
		pathname: String,
		/// Query string including the leading `?`, or empty.
		search: String,
		/// Fragment including the leading `#`, or empty.
		hash: String,
	},
	/// Cross-origin or non-HTTP target, kept verbatim.
	External(String),
}

impl Target {
	/// Returns `true` for [`Target::External`].
	pub fn is_external(&self) -> bool {
		matches!(self, Self::External(_))
	}
}

/// Classifies `to` relative to `origin` (the host origin, if any).
///
/// ```
/// use waymark_router::router::{Target, resolve_target};
///
/// let internal = resolve_target("/risk?tab=2#top", Some("https://app.local"));
/// assert_eq!(
///     internal,
///     Target::Internal {
///         pathname: "/risk".into(),
///         search: "?tab=2".into(),
///         hash: "#top".into(),
///     }
/// );
///
/// let external = resolve_target("mailto:team@example.com", Some("https://app.local"));
/// assert!(external.is_external());
/// ```
pub fn resolve_target(to: &str, origin: Option<&str>) -> Target {
	let base = origin
		.and_then(|origin| Url::parse(origin).ok())
		.filter(|base| !base.cannot_be_a_base())
		.or_else(|| Url::parse(FALLBACK_ORIGIN).ok());

	let Some(base) = base else {
		return raw_internal(to);
	};

	match base.join(to) {
		Ok(resolved) if resolved.origin() == base.origin() => Target::Internal {
			pathname: normalize_path(resolved.path()),
			search: prefixed('?', resolved.query()),
			hash: prefixed('#', resolved.fragment()),
		},
		Ok(_) => Target::External(to.to_string()),
		Err(_) => raw_internal(to),
	}
}

/// Splits a location string the host reported (`/path?query#hash`) into parts.
pub(crate) fn split_href(href: &str) -> (String, String, String) {
	let (rest, hash) = match href.find('#') {
		Some(index) => (&href[..index], &href[index..]),
		None => (href, ""),
	};
	let (pathname, search) = match rest.find('?') {
		Some(index) => (&rest[..index], &rest[index..]),
		None => (rest, ""),
	};
	(
		pathname.to_string(),
		non_trivial(search, '?'),
		non_trivial(hash, '#'),
	)
}

fn raw_internal(to: &str) -> Target {
	let (pathname, search, hash) = split_href(to);
	Target::Internal {
		pathname: normalize_path(&pathname),
		search,
		hash,
	}
}

fn prefixed(prefix: char, part: Option<&str>) -> String {
	match part {
		Some(part) if !part.is_empty() => format!("{}{}", prefix, part),
		_ => String::new(),
	}
}

fn non_trivial(part: &str, marker: char) -> String {
	if part.len() == marker.len_utf8() {
		String::new()
	} else {
		part.to_string()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	const ORIGIN: Option<&str> = Some("https://app.local");

	fn internal(pathname: &str, search: &str, hash: &str) -> Target {
		Target::Internal {
			pathname: pathname.to_string(),
			search: search.to_string(),
			hash: hash.to_string(),
		}
	}

	#[rstest]
	#[case("/dashboard", internal("/dashboard", "", ""))]
	#[case("reports", internal("/reports", "", ""))]
	#[case("/risk/", internal("/risk", "", ""))]
	#[case("/qoe?year=2024", internal("/qoe", "?year=2024", ""))]
	#[case("/import#upload", internal("/import", "", "#upload"))]
	#[case("/empty?#", internal("/empty", "", ""))]
	#[case("https://app.local/financials", internal("/financials", "", ""))]
	fn test_internal_targets(#[case] to: &str, #[case] expected: Target) {
		assert_eq!(resolve_target(to, ORIGIN), expected);
	}

	#[rstest]
	#[case("https://external.example/app")]
	#[case("http://app.local/insecure")]
	#[case("https://app.local:8443/other-port")]
	#[case("mailto:team@example.com")]
	#[case("tel:+33100000000")]
	#[case("//cdn.example.com/file.pdf")]
	fn test_external_targets(#[case] to: &str) {
		assert_eq!(resolve_target(to, ORIGIN), Target::External(to.to_string()));
	}

	#[rstest]
	fn test_without_origin_uses_fallback() {
		assert_eq!(resolve_target("/settings", None), internal("/settings", "", ""));
		assert_eq!(
			resolve_target("http://localhost/settings", None),
			internal("/settings", "", "")
		);
		assert!(resolve_target("https://external.example/", None).is_external());
	}

	#[rstest]
	fn test_unparsable_origin_uses_fallback() {
		assert_eq!(
			resolve_target("/settings", Some("not a url")),
			internal("/settings", "", "")
		);
	}

	#[rstest]
	#[case("/a?b=1#c", ("/a", "?b=1", "#c"))]
	#[case("/a#c?d", ("/a", "", "#c?d"))]
	#[case("/a?", ("/a", "", ""))]
	#[case("/a", ("/a", "", ""))]
	fn test_split_href(#[case] href: &str, #[case] expected: (&str, &str, &str)) {
		let (pathname, search, hash) = split_href(href);
		assert_eq!((pathname.as_str(), search.as_str(), hash.as_str()), expected);
	}
}
