//! Error types for client-side routing.

use thiserror::Error;

/// Error type for router operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
	/// A router hook or component was used outside any router scope.
	#[error("router context unavailable: wrap the caller in Router::provide()")]
	ContextUnavailable,
	/// The host rejected a history or document navigation.
	#[error("Navigation failed: {0}")]
	NavigationFailed(String),
	/// The history state payload could not be converted for the host.
	#[error("History state serialization failed: {0}")]
	StateSerialization(String),
}

impl From<serde_json::Error> for RouterError {
	fn from(err: serde_json::Error) -> Self {
		Self::StateSerialization(err.to_string())
	}
}
