//! Simple file-backed store for lightweight deployments without a document database.

// std
use std::{
	collections::hash_map::Entry,
	fs::{self, File},
	io::Write,
	path::{Path, PathBuf},
};
// self
use crate::{
	_prelude::*,
	code::CodeRecord,
	identity::{ProfileRecord, Uid},
	store::{CodeStore, ProfileStore, StoreError, StoreFuture},
};

#[derive(Clone, Debug, Default)]
struct Collections {
	codes: HashMap<Uid, CodeRecord>,
	profiles: HashMap<Uid, ProfileRecord>,
}

#[derive(Default, Serialize, Deserialize)]
struct Snapshot {
	codes: Vec<(Uid, CodeRecord)>,
	profiles: Vec<(Uid, ProfileRecord)>,
}
impl From<&Collections> for Snapshot {
	fn from(contents: &Collections) -> Self {
		Self {
			codes: contents.codes.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
			profiles: contents.profiles.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
		}
	}
}
impl From<Snapshot> for Collections {
	fn from(snapshot: Snapshot) -> Self {
		Self {
			codes: snapshot.codes.into_iter().collect(),
			profiles: snapshot.profiles.into_iter().collect(),
		}
	}
}

/// Persists both collections to a JSON file after each mutation.
#[derive(Clone, Debug)]
pub struct FileStore {
	path: PathBuf,
	inner: Arc<RwLock<Collections>>,
}
impl FileStore {
	/// Opens (or creates) a store at the provided path, eagerly loading existing data.
	pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
		let path = path.into();

		Self::ensure_parent_exists(&path)?;

		let contents =
			if path.exists() { Self::load_snapshot(&path)? } else { Collections::default() };

		Ok(Self { path, inner: Arc::new(RwLock::new(contents)) })
	}

	fn load_snapshot(path: &Path) -> Result<Collections, StoreError> {
		let metadata = path.metadata().map_err(|e| StoreError::Backend {
			message: format!("Failed to inspect {}: {e}", path.display()),
		})?;

		if metadata.len() == 0 {
			return Ok(Collections::default());
		}

		let bytes = fs::read(path).map_err(|e| StoreError::Backend {
			message: format!("Failed to read {}: {e}", path.display()),
		})?;
		let snapshot: Snapshot =
			serde_json::from_slice(&bytes).map_err(|e| StoreError::Serialization {
				message: format!("Failed to parse {}: {e}", path.display()),
			})?;

		Ok(snapshot.into())
	}

	fn ensure_parent_exists(path: &Path) -> Result<(), StoreError> {
		if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
			fs::create_dir_all(parent).map_err(|e| StoreError::Backend {
				message: format!("Failed to create store directory {}: {e}", parent.display()),
			})?;
		}

		Ok(())
	}

	fn persist_locked(&self, contents: &Collections) -> Result<(), StoreError> {
		Self::ensure_parent_exists(&self.path)?;

		let serialized = serde_json::to_vec_pretty(&Snapshot::from(contents)).map_err(|e| {
			StoreError::Serialization { message: format!("Failed to serialize snapshot: {e}") }
		})?;
		let mut tmp_path = self.path.clone();

		tmp_path.set_extension("tmp");

		{
			let mut file = File::create(&tmp_path).map_err(|e| StoreError::Backend {
				message: format!("Failed to create {}: {e}", tmp_path.display()),
			})?;

			file.write_all(&serialized).map_err(|e| StoreError::Backend {
				message: format!("Failed to write {}: {e}", tmp_path.display()),
			})?;
			file.sync_all().map_err(|e| StoreError::Backend {
				message: format!("Failed to sync {}: {e}", tmp_path.display()),
			})?;
		}

		fs::rename(&tmp_path, &self.path).map_err(|e| StoreError::Backend {
			message: format!("Failed to replace {}: {e}", self.path.display()),
		})
	}
}
impl CodeStore for FileStore {
	fn put(&self, record: CodeRecord) -> StoreFuture<'_, ()> {
		Box::pin(async move {
			let mut guard = self.inner.write();

			guard.codes.insert(record.uid.clone(), record);
			self.persist_locked(&guard)?;

			Ok(())
		})
	}

	fn fetch<'a>(&'a self, uid: &'a Uid) -> StoreFuture<'a, Option<CodeRecord>> {
		Box::pin(async move { Ok(self.inner.read().codes.get(uid).cloned()) })
	}
}
impl ProfileStore for FileStore {
	fn fetch<'a>(&'a self, uid: &'a Uid) -> StoreFuture<'a, Option<ProfileRecord>> {
		Box::pin(async move { Ok(self.inner.read().profiles.get(uid).cloned()) })
	}

	fn create(&self, record: ProfileRecord) -> StoreFuture<'_, ()> {
		Box::pin(async move {
			let mut guard = self.inner.write();

			if let Entry::Vacant(slot) = guard.profiles.entry(record.uid.clone()) {
				slot.insert(record);
				self.persist_locked(&guard)?;
			}

			Ok(())
		})
	}
}
