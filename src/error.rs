//! Bridge-level error types shared across orchestration, sessions, and stores.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical bridge error exposed by public APIs.
///
/// Repository failures are caught inside the orchestrator and never reach the presentation
/// layer; the [`Error::Request`] variant is the only user-visible failure path during a
/// sign-in attempt.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Storage-layer failure.
	#[error("{0}")]
	Storage(
		#[from]
		#[source]
		crate::store::StoreError,
	),
	/// Identity session source could not deliver authentication events.
	#[error(transparent)]
	Session(#[from] crate::session::SessionError),
	/// Inbound request context is missing or malformed.
	#[error(transparent)]
	Request(#[from] crate::request::RequestError),
}
