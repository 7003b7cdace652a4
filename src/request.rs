//! Ephemeral request context extracted from the sign-in page URL.

// self
use crate::{_prelude::*, code::OneTimeCode};

/// Validation failures for the inbound request context; the only user-visible error path.
///
/// Raised before any write, so a malformed request produces no code record, no profile, and no
/// redirect.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum RequestError {
	/// The `state` parameter was absent or empty.
	#[error("Request is missing the state parameter.")]
	MissingState,
	/// The `redirect_uri` parameter was absent or empty.
	#[error("Request is missing the redirect_uri parameter.")]
	MissingRedirectUri,
	/// The `redirect_uri` parameter is not an absolute URL.
	#[error("Request redirect_uri is not an absolute URL.")]
	InvalidRedirectUri {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
}

/// Pass-through parameters the relying application attached to the sign-in request.
///
/// Lives only for the duration of one sign-in attempt; nothing here is persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestContext {
	/// Opaque CSRF-correlation token owned by the relying application.
	pub state: String,
	/// Absolute callback URL the code is handed back to.
	pub redirect_uri: Url,
}
impl RequestContext {
	/// Validates raw `state` + `redirect_uri` values into a usable context.
	///
	/// Empty values are treated as missing rather than passed through.
	pub fn new(
		state: impl Into<String>,
		redirect_uri: impl AsRef<str>,
	) -> Result<Self, RequestError> {
		let state = state.into();

		if state.is_empty() {
			return Err(RequestError::MissingState);
		}

		let raw = redirect_uri.as_ref();

		if raw.is_empty() {
			return Err(RequestError::MissingRedirectUri);
		}

		let redirect_uri =
			Url::parse(raw).map_err(|e| RequestError::InvalidRedirectUri { source: e })?;

		Ok(Self { state, redirect_uri })
	}

	/// Extracts the context from the query string of the page URL the user arrived with.
	pub fn from_page_url(page_url: &Url) -> Result<Self, RequestError> {
		let mut state = None;
		let mut redirect_uri = None;

		for (key, value) in page_url.query_pairs() {
			match &*key {
				"state" => state = Some(value.into_owned()),
				"redirect_uri" => redirect_uri = Some(value.into_owned()),
				_ => {},
			}
		}

		Self::new(
			state.ok_or(RequestError::MissingState)?,
			redirect_uri.ok_or(RequestError::MissingRedirectUri)?,
		)
	}

	/// Computes the redirect target carrying both parameters back to the relying application.
	///
	/// Plain concatenation keeps `state` and the code byte-for-byte intact; no re-encoding is
	/// applied to either value.
	pub fn redirect_target(&self, code: &OneTimeCode) -> String {
		format!("{}?state={}&code={}", self.redirect_uri, self.state, code.expose())
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn page_url(query: &str) -> Url {
		Url::parse(&format!("https://signin.example/{query}"))
			.expect("Page URL fixture should parse successfully.")
	}

	#[test]
	fn extracts_state_and_redirect_uri() {
		let url = page_url("?state=abc123&redirect_uri=https%3A%2F%2Frelying.example%2Fcb");
		let ctx = RequestContext::from_page_url(&url)
			.expect("Context should be extracted from a well-formed page URL.");

		assert_eq!(ctx.state, "abc123");
		assert_eq!(ctx.redirect_uri.as_str(), "https://relying.example/cb");
	}

	#[test]
	fn redirect_target_round_trips_both_parameters_verbatim() {
		let ctx = RequestContext::new("abc123", "https://relying.example/cb")
			.expect("Context fixture should be valid.");
		let target = ctx.redirect_target(&OneTimeCode::from_value("c0de"));

		assert_eq!(target, "https://relying.example/cb?state=abc123&code=c0de");
	}

	#[test]
	fn missing_parameters_are_rejected() {
		assert_eq!(
			RequestContext::from_page_url(&page_url("?redirect_uri=https://relying.example/cb")),
			Err(RequestError::MissingState)
		);
		assert_eq!(
			RequestContext::from_page_url(&page_url("?state=abc123")),
			Err(RequestError::MissingRedirectUri)
		);
	}

	#[test]
	fn empty_parameters_are_treated_as_missing() {
		assert_eq!(
			RequestContext::from_page_url(&page_url("?state=&redirect_uri=https://r.example/cb")),
			Err(RequestError::MissingState)
		);
		assert_eq!(
			RequestContext::from_page_url(&page_url("?state=abc123&redirect_uri=")),
			Err(RequestError::MissingRedirectUri)
		);
	}

	#[test]
	fn relative_redirect_uri_is_rejected() {
		let err = RequestContext::from_page_url(&page_url("?state=abc123&redirect_uri=%2Fcb"))
			.expect_err("Relative redirect_uri should be rejected.");

		assert!(matches!(err, RequestError::InvalidRedirectUri { .. }));
	}
}
