//! Strongly typed account identifier enforced across the bridge domain.

// std
use std::{borrow::Borrow, ops::Deref, str::FromStr};
// self
use crate::_prelude::*;

const UID_MAX_LEN: usize = 128;

/// Error returned when uid validation fails.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ThisError)]
pub enum UidError {
	/// The identifier was empty.
	#[error("Uid cannot be empty.")]
	Empty,
	/// The identifier contains whitespace characters.
	#[error("Uid contains whitespace.")]
	ContainsWhitespace,
	/// The identifier exceeded the allowed character count.
	#[error("Uid exceeds {max} characters.")]
	TooLong {
		/// Maximum permitted character count.
		max: usize,
	},
}

/// Opaque unique identifier the identity provider assigned to an account.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Uid(String);
impl Uid {
	/// Creates a new identifier after validation.
	pub fn new(value: impl AsRef<str>) -> Result<Self, UidError> {
		let view = value.as_ref();

		validate_view(view)?;

		Ok(Self(view.to_owned()))
	}
}
impl Deref for Uid {
	type Target = str;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
impl AsRef<str> for Uid {
	fn as_ref(&self) -> &str {
		&self.0
	}
}
impl From<Uid> for String {
	fn from(value: Uid) -> Self {
		value.0
	}
}
impl TryFrom<String> for Uid {
	type Error = UidError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		validate_view(&value)?;

		Ok(Self(value))
	}
}
impl Borrow<str> for Uid {
	fn borrow(&self) -> &str {
		&self.0
	}
}
impl Debug for Uid {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "Uid({})", self.0)
	}
}
impl Display for Uid {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0)
	}
}
impl FromStr for Uid {
	type Err = UidError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::new(s)
	}
}

fn validate_view(view: &str) -> Result<(), UidError> {
	if view.is_empty() {
		return Err(UidError::Empty);
	}
	if view.chars().any(char::is_whitespace) {
		return Err(UidError::ContainsWhitespace);
	}
	if view.len() > UID_MAX_LEN {
		return Err(UidError::TooLong { max: UID_MAX_LEN });
	}

	Ok(())
}
