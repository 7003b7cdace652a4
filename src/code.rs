//! One-time authorization codes minted per completed sign-in.

// crates.io
use rand::Rng;
// self
use crate::{_prelude::*, identity::Uid};

/// Opaque high-entropy code handed to the relying application; formatters redact the value.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OneTimeCode(String);
impl OneTimeCode {
	/// Mints a fresh code from the thread-local CSPRNG.
	///
	/// The output carries 122 random bits formatted as a canonical hyphenated UUID-like token.
	/// The shape is a transport convenience only; callers must treat the value as opaque and
	/// never parse it. Entropy-source failure aborts the process.
	pub fn generate() -> Self {
		let mut bytes = rand::rng().random::<[u8; 16]>();

		// RFC 4122 version/variant bits.
		bytes[6] = (bytes[6] & 0x0f) | 0x40;
		bytes[8] = (bytes[8] & 0x3f) | 0x80;

		Self(hyphenated_hex(&bytes))
	}

	/// Wraps an externally supplied code value (fixtures, replay tooling).
	pub fn from_value(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Exposes the raw code value for URL construction and persistence.
	pub fn expose(&self) -> &str {
		&self.0
	}
}
impl AsRef<str> for OneTimeCode {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl Debug for OneTimeCode {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("OneTimeCode").field(&"<redacted>").finish()
	}
}
impl Display for OneTimeCode {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

/// Durable association between a uid and its live authorization code.
///
/// Keyed by uid in the code store; reissuing for the same uid replaces the whole record. The
/// bridge never deletes these records, consumption is the relying application's concern.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CodeRecord {
	/// Account the code was minted for.
	pub uid: Uid,
	/// Code value included in the redirect back to the relying application.
	pub code: OneTimeCode,
	/// Mint instant, replaced wholesale on every reissue.
	pub issued_at: OffsetDateTime,
}
impl CodeRecord {
	/// Assembles a record from caller-provided parts.
	pub fn new(uid: Uid, code: OneTimeCode, issued_at: OffsetDateTime) -> Self {
		Self { uid, code, issued_at }
	}

	/// Mints a fresh code for the uid, stamped with the current UTC instant.
	pub fn issue(uid: Uid) -> Self {
		Self::new(uid, OneTimeCode::generate(), OffsetDateTime::now_utc())
	}
}

fn hyphenated_hex(bytes: &[u8; 16]) -> String {
	// Group starts at bytes 4, 6, 8, and 10 (8-4-4-4-12 hex layout).
	const GROUP_STARTS: [usize; 4] = [4, 6, 8, 10];
	const HEX: &[u8; 16] = b"0123456789abcdef";

	let mut out = String::with_capacity(36);

	for (idx, byte) in bytes.iter().enumerate() {
		if GROUP_STARTS.contains(&idx) {
			out.push('-');
		}

		out.push(HEX[usize::from(byte >> 4)] as char);
		out.push(HEX[usize::from(byte & 0x0f)] as char);
	}

	out
}

#[cfg(test)]
mod tests {
	// std
	use std::collections::HashSet;
	// self
	use super::*;

	#[test]
	fn generated_codes_are_pairwise_distinct() {
		let codes: HashSet<_> =
			(0..256).map(|_| OneTimeCode::generate().expose().to_owned()).collect();

		assert_eq!(codes.len(), 256);
	}

	#[test]
	fn generated_codes_use_the_hyphenated_shape() {
		let code = OneTimeCode::generate();
		let value = code.expose();

		assert_eq!(value.len(), 36);
		assert!(value.chars().all(|c| c == '-' || c.is_ascii_hexdigit()));

		for idx in [8, 13, 18, 23] {
			assert_eq!(value.as_bytes()[idx], b'-');
		}

		assert_eq!(value.as_bytes()[14], b'4');
		assert!(matches!(value.as_bytes()[19], b'8' | b'9' | b'a' | b'b'));
	}

	#[test]
	fn code_formatters_redact() {
		let code = OneTimeCode::from_value("c0de");

		assert_eq!(format!("{code:?}"), "OneTimeCode(\"<redacted>\")");
		assert_eq!(format!("{code}"), "<redacted>");
	}

	#[test]
	fn issue_stamps_the_uid() {
		let uid = Uid::new("uid-1").expect("Uid fixture should be valid.");
		let record = CodeRecord::issue(uid.clone());

		assert_eq!(record.uid, uid);
		assert_eq!(record.code.expose().len(), 36);
	}
}
