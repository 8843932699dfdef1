//! Property-based tests for path normalization, basenames and matching
//!
//! Uses proptest to verify laws that should hold for any input.

#[cfg(not(target_arch = "wasm32"))]
mod property_tests {
	use proptest::prelude::*;
	use proptest::proptest;
	use waymark_router::router::{
		apply_basename, match_nav_path, match_route_path, normalize_basename, normalize_path,
		strip_basename,
	};

	const SEGMENTS: &str = r"(/[a-z0-9_\-]{1,8}){0,4}";
	const BASENAME: &str = r"(/[a-z]{1,8}){1,3}";

	proptest! {
		/// Property: normalized paths start with exactly one slash and have no trailing slash
		#[test]
		fn prop_normalize_shape(path in r"\PC{0,40}") {
			let normalized = normalize_path(&path);

			prop_assert!(normalized.starts_with('/'));
			prop_assert!(normalized == "/" || !normalized.ends_with('/'));
			prop_assert!(!normalized.starts_with("//"));
		}

		/// Property: normalize_path is idempotent
		#[test]
		fn prop_normalize_idempotent(path in r"\PC{0,40}") {
			let once = normalize_path(&path);
			prop_assert_eq!(normalize_path(&once), once);
		}

		/// Property: a normalized basename is a normalized path
		#[test]
		fn prop_basename_is_normalized(raw in r"[a-zA-Z0-9/:._\-]{0,40}") {
			let basename = normalize_basename(Some(&raw));
			prop_assert_eq!(normalize_path(&basename), basename);
		}

		/// Property: stripping an applied basename gives back the normalized path
		#[test]
		fn prop_apply_then_strip(path in SEGMENTS, basename in BASENAME) {
			let href = apply_basename(&path, &basename);

			prop_assert!(href.starts_with(&basename));
			prop_assert_eq!(strip_basename(&href, &basename), normalize_path(&path));
		}

		/// Property: the root basename leaves paths untouched
		#[test]
		fn prop_root_basename_is_identity(path in SEGMENTS) {
			let normalized = normalize_path(&path);
			prop_assert_eq!(strip_basename(&normalized, "/"), normalized.clone());
			prop_assert_eq!(apply_basename(&normalized, "/"), normalized);
		}

		/// Property: a basename never strips a sibling that merely shares its prefix
		#[test]
		fn prop_strip_respects_segment_boundary(basename in BASENAME, suffix in "[a-z]{1,4}") {
			let sibling = format!("{}{}", basename, suffix);
			prop_assert_eq!(strip_basename(&sibling, &basename), sibling.clone());
		}

		/// Property: the wildcard matches everything, and a path matches itself
		#[test]
		fn prop_route_matches_itself(path in SEGMENTS) {
			prop_assert!(match_route_path("*", &path));
			prop_assert!(match_route_path(&path, &path));
			let trailing = format!("{}/", path);
			prop_assert!(match_route_path(&trailing, &path));
		}

		/// Property: a splat pattern matches its base and all descendants
		#[test]
		fn prop_splat_matches_descendants(base in BASENAME, rest in SEGMENTS) {
			let pattern = format!("{}/*", base);
			let descendant = format!("{}{}", base, rest);
			prop_assert!(match_route_path(&pattern, &descendant));
		}

		/// Property: nav links match descendants unless `end` is set
		#[test]
		fn prop_nav_descendants(target in BASENAME, child in "[a-z]{1,8}") {
			let descendant = format!("{}/{}", target, child);

			prop_assert!(match_nav_path(&target, &target, true));
			prop_assert!(match_nav_path(&target, &target, false));
			prop_assert!(match_nav_path(&target, &descendant, false));
			prop_assert!(!match_nav_path(&target, &descendant, true));
		}

		/// Property: the root nav target is active only at the root
		#[test]
		fn prop_root_nav_only_at_root(path in BASENAME, end in any::<bool>()) {
			prop_assert!(!match_nav_path("/", &path, end));
			prop_assert!(match_nav_path("/", "/", end));
		}
	}
}
