//! Read-only identity snapshot emitted on each completed authentication.

// self
use crate::{_prelude::*, identity::Uid};

/// Authenticated-identity snapshot delivered by the session source.
///
/// Mirrors the attributes the external provider exposes after sign-in; every field other than
/// the uid may be absent. The bridge consumes these snapshots and never writes back through
/// this type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
	/// Opaque unique identifier assigned by the provider.
	pub uid: Uid,
	/// Email address, when the provider shares one.
	pub email: Option<String>,
	/// Human-readable display name, when set on the provider account.
	pub display_name: Option<String>,
	/// Avatar URL, when set on the provider account.
	pub photo_url: Option<String>,
}
impl Identity {
	/// Creates an identity carrying only the uid.
	pub fn new(uid: Uid) -> Self {
		Self { uid, email: None, display_name: None, photo_url: None }
	}

	/// Attaches the provider-supplied email address.
	pub fn with_email(mut self, value: impl Into<String>) -> Self {
		self.email = Some(value.into());

		self
	}

	/// Attaches the provider-supplied display name.
	pub fn with_display_name(mut self, value: impl Into<String>) -> Self {
		self.display_name = Some(value.into());

		self
	}

	/// Attaches the provider-supplied avatar URL.
	pub fn with_photo_url(mut self, value: impl Into<String>) -> Self {
		self.photo_url = Some(value.into());

		self
	}
}
