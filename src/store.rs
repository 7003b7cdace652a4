//! Storage contracts and built-in backends for code and profile records.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

// self
use crate::{
	_prelude::*,
	code::CodeRecord,
	identity::{ProfileRecord, Uid},
};

/// Boxed future returned by store trait methods.
pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, StoreError>> + 'a + Send>>;

/// Persistence contract for live authorization codes, keyed by uid.
pub trait CodeStore
where
	Self: Send + Sync,
{
	/// Persists or replaces the live code record for the record's uid.
	///
	/// The replacement is atomic at the backend; a failed put leaves any prior record intact.
	fn put(&self, record: CodeRecord) -> StoreFuture<'_, ()>;

	/// Fetches the live code record for a uid, if present.
	///
	/// The bridge never reads codes back; this is the hook for the relying application's
	/// out-of-band verification step (and for tests).
	fn fetch<'a>(&'a self, uid: &'a Uid) -> StoreFuture<'a, Option<CodeRecord>>;
}

/// Create-if-absent persistence contract for profile documents, keyed by uid.
pub trait ProfileStore
where
	Self: Send + Sync,
{
	/// Fetches the profile for a uid, if present.
	fn fetch<'a>(&'a self, uid: &'a Uid) -> StoreFuture<'a, Option<ProfileRecord>>;

	/// Creates the profile if no record exists for its uid; an existing record is left
	/// untouched.
	fn create(&self, record: ProfileRecord) -> StoreFuture<'_, ()>;
}

/// Error type produced by store implementations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum StoreError {
	/// Serialization failures surfaced by the backend.
	#[error("Serialization error: {message}.")]
	Serialization {
		/// Human-readable error payload.
		message: String,
	},
	/// Backend-level failure for the storage engine.
	#[error("Backend failure: {message}.")]
	Backend {
		/// Human-readable error payload.
		message: String,
	},
}
