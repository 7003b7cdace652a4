//! Authorization-code sign-in bridge: mint one-time codes, materialize user profiles, and hand
//! completed sign-ins back to relying applications in one crate.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod bridge;
pub mod code;
pub mod error;
pub mod identity;
pub mod obs;
pub mod request;
pub mod session;
pub mod store;
#[cfg(any(test, feature = "test"))]
pub mod _preludet {
	//! Convenience re-exports and fixtures for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::{
		bridge::{Bridge, NavigationFuture, RedirectSink},
		identity::{Identity, Uid},
		session::{IdentityEvents, IdentitySource, SessionError},
		store::MemoryStore,
	};

	/// Redirect sink that records navigation targets instead of driving a browser.
	#[derive(Clone, Debug, Default)]
	pub struct RecordingSink(Arc<Mutex<Vec<String>>>);
	impl RecordingSink {
		/// Returns every target handed to the sink so far, oldest first.
		pub fn targets(&self) -> Vec<String> {
			self.0.lock().clone()
		}
	}
	impl RedirectSink for RecordingSink {
		fn navigate(&self, target: &str) -> NavigationFuture<'_> {
			let targets = self.0.clone();
			let target = target.to_owned();

			Box::pin(async move { targets.lock().push(target) })
		}
	}

	/// Identity source whose subscriptions always fail; exercises unavailability paths.
	#[derive(Clone, Copy, Debug, Default)]
	pub struct UnavailableIdentitySource;
	impl IdentitySource for UnavailableIdentitySource {
		fn subscribe(&self) -> Result<Box<dyn IdentityEvents>, SessionError> {
			Err(SessionError::Unavailable { reason: "identity source offline".into() })
		}
	}

	/// Builds a bridge wired to a shared in-memory store and a recording sink.
	pub fn build_memory_bridge() -> (Bridge, Arc<MemoryStore>, RecordingSink) {
		let store = Arc::new(MemoryStore::default());
		let sink = RecordingSink::default();
		let bridge = Bridge::new(store.clone(), store.clone(), Arc::new(sink.clone()));

		(bridge, store, sink)
	}

	/// Identity fixture with every optional attribute populated.
	pub fn test_identity(uid: &str) -> Identity {
		Identity::new(Uid::new(uid).expect("Uid fixture should be valid."))
			.with_email(format!("{uid}@example.com"))
			.with_display_name("Test User")
			.with_photo_url("https://cdn.example.com/avatar.png")
	}
}

mod _prelude {
	pub use std::{
		collections::{HashMap, VecDeque},
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
	};

	pub use parking_lot::{Mutex, RwLock};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::OffsetDateTime;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use url;
