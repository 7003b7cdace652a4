//! Lazily materialized account profiles and the caller-declared role.

// self
use crate::{
	_prelude::*,
	identity::{Identity, Uid},
};

/// Caller-declared account role selected before sign-in.
///
/// The selection is mutually exclusive by construction; [`Role::None`] covers flows where the
/// presentation layer skipped the gate entirely.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
	/// No role declared.
	#[default]
	None,
	/// Account belongs to a parent.
	Parent,
	/// Account belongs to a student.
	Student,
}
impl Role {
	/// Returns a stable label suitable for persistence or span fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Role::None => "none",
			Role::Parent => "parent",
			Role::Student => "student",
		}
	}
}
impl Display for Role {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Profile document created at most once per uid.
///
/// Existing records are never overwritten by the bridge; whatever the store already holds wins
/// over later sign-ins.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
	/// Account identifier the profile belongs to.
	pub uid: Uid,
	/// Email captured from the identity at creation time.
	pub email: Option<String>,
	/// Display name captured from the identity at creation time.
	pub display_name: Option<String>,
	/// Avatar URL captured from the identity at creation time.
	pub photo_url: Option<String>,
	/// Role declared by the caller during the sign-in that created the record.
	pub role: Role,
}
impl ProfileRecord {
	/// Builds the initial profile from an identity snapshot plus the declared role.
	pub fn from_identity(identity: &Identity, role: Role) -> Self {
		Self {
			uid: identity.uid.clone(),
			email: identity.email.clone(),
			display_name: identity.display_name.clone(),
			photo_url: identity.photo_url.clone(),
			role,
		}
	}
}
