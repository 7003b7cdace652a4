//! Thread-safe in-memory backend for local development and tests.

// self
use crate::{
	_prelude::*,
	code::CodeRecord,
	identity::{ProfileRecord, Uid},
	store::{CodeStore, ProfileStore, StoreError, StoreFuture},
};

type CodeMap = Arc<RwLock<HashMap<Uid, CodeRecord>>>;
type ProfileMap = Arc<RwLock<HashMap<Uid, ProfileRecord>>>;

/// Keyed in-process backend implementing both store contracts.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
	codes: CodeMap,
	profiles: ProfileMap,
}
impl MemoryStore {
	fn put_now(codes: CodeMap, record: CodeRecord) -> Result<(), StoreError> {
		codes.write().insert(record.uid.clone(), record);

		Ok(())
	}

	fn create_now(profiles: ProfileMap, record: ProfileRecord) -> Result<(), StoreError> {
		profiles.write().entry(record.uid.clone()).or_insert(record);

		Ok(())
	}
}
impl CodeStore for MemoryStore {
	fn put(&self, record: CodeRecord) -> StoreFuture<'_, ()> {
		let codes = self.codes.clone();

		Box::pin(async move { Self::put_now(codes, record) })
	}

	fn fetch<'a>(&'a self, uid: &'a Uid) -> StoreFuture<'a, Option<CodeRecord>> {
		let codes = self.codes.clone();
		let uid = uid.to_owned();

		Box::pin(async move { Ok(codes.read().get(&uid).cloned()) })
	}
}
impl ProfileStore for MemoryStore {
	fn fetch<'a>(&'a self, uid: &'a Uid) -> StoreFuture<'a, Option<ProfileRecord>> {
		let profiles = self.profiles.clone();
		let uid = uid.to_owned();

		Box::pin(async move { Ok(profiles.read().get(&uid).cloned()) })
	}

	fn create(&self, record: ProfileRecord) -> StoreFuture<'_, ()> {
		let profiles = self.profiles.clone();

		Box::pin(async move { Self::create_now(profiles, record) })
	}
}
