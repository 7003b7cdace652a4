//! Sign-in orchestration: code issuance, profile materialization, and the final redirect.

// self
use crate::{
	_prelude::*,
	code::{CodeRecord, OneTimeCode},
	identity::{Identity, ProfileRecord, Role, Uid},
	obs::{BridgeSpan, BridgeStage, StageOutcome, record_stage_outcome, warn_stage_failure},
	request::RequestContext,
	session::IdentitySource,
	store::{CodeStore, ProfileStore, StoreError},
};

/// Boxed future returned by [`RedirectSink::navigate`].
pub type NavigationFuture<'a> = Pin<Box<dyn Future<Output = ()> + 'a + Send>>;

/// Browser-navigation collaborator that carries the user to the relying application.
pub trait RedirectSink
where
	Self: Send + Sync,
{
	/// Navigates to the computed target; a one-way trip with no failure channel.
	fn navigate(&self, target: &str) -> NavigationFuture<'_>;
}

/// Outcome of one authorization: the issued code plus the redirect that delivered it.
#[derive(Clone, Debug)]
pub struct AuthorizedRedirect {
	/// Account the code was minted for.
	pub uid: Uid,
	/// Freshly minted one-time code.
	pub code: OneTimeCode,
	/// Exact target handed to the redirect sink.
	pub target: String,
	/// Profile returned by the materialization read; absent when both the create and the
	/// follow-up read failed.
	pub profile: Option<ProfileRecord>,
}

/// Orchestrates sign-ins: reacts to identity events, drives the stores, and redirects.
///
/// Collaborators are injected so the bridge is constructible without any live external
/// service. Store failures are logged and counted but never block the redirect; the relying
/// application always receives a code value. The only user-visible failure is a malformed
/// request context, raised before any write.
#[derive(Clone)]
pub struct Bridge {
	codes: Arc<dyn CodeStore>,
	profiles: Arc<dyn ProfileStore>,
	sink: Arc<dyn RedirectSink>,
}
impl Bridge {
	/// Creates a bridge over the provided collaborators.
	pub fn new(
		codes: Arc<dyn CodeStore>,
		profiles: Arc<dyn ProfileStore>,
		sink: Arc<dyn RedirectSink>,
	) -> Self {
		Self { codes, profiles, sink }
	}

	/// Serves a full page lifetime: validate the request context, subscribe once, authorize
	/// every delivered identity, and release the subscription when the session ends.
	///
	/// The same uid may be delivered repeatedly; each event independently mints a superseding
	/// code while the profile stays create-once. Validation happens before the subscription is
	/// opened, so a malformed context causes no writes and no redirect.
	pub async fn serve(
		&self,
		source: &dyn IdentitySource,
		role: Role,
		page_url: &Url,
	) -> Result<Vec<AuthorizedRedirect>> {
		let ctx = RequestContext::from_page_url(page_url)?;
		let mut events = source.subscribe()?;
		let mut completed = Vec::new();

		while let Some(identity) = events.next().await {
			completed.push(self.authorize(&identity, role, &ctx).await);
		}

		Ok(completed)
	}

	/// Validates the page URL and authorizes a single identity event.
	pub async fn handle_sign_in(
		&self,
		identity: &Identity,
		role: Role,
		page_url: &Url,
	) -> Result<AuthorizedRedirect> {
		let ctx = RequestContext::from_page_url(page_url)?;

		Ok(self.authorize(identity, role, &ctx).await)
	}

	/// Runs the authorization sequence for one authenticated identity.
	///
	/// Both writes are attempted before the redirect; the redirect itself is unconditional and
	/// always last.
	pub async fn authorize(
		&self,
		identity: &Identity,
		role: Role,
		ctx: &RequestContext,
	) -> AuthorizedRedirect {
		let code = self.issue_code(&identity.uid).await;
		let profile = self.materialize_profile(identity, role).await;
		let target = ctx.redirect_target(&code);

		self.redirect(&target).await;

		AuthorizedRedirect { uid: identity.uid.clone(), code, target, profile }
	}

	async fn issue_code(&self, uid: &Uid) -> OneTimeCode {
		let span = BridgeSpan::new(BridgeStage::IssueCode);
		let record = CodeRecord::issue(uid.clone());
		let code = record.code.clone();

		record_stage_outcome(BridgeStage::IssueCode, StageOutcome::Attempt);

		match span.instrument(self.codes.put(record)).await {
			Ok(()) => record_stage_outcome(BridgeStage::IssueCode, StageOutcome::Success),
			Err(e) => {
				warn_stage_failure(BridgeStage::IssueCode, &e);
				record_stage_outcome(BridgeStage::IssueCode, StageOutcome::Failure);
			},
		}

		code
	}

	async fn materialize_profile(&self, identity: &Identity, role: Role) -> Option<ProfileRecord> {
		let span = BridgeSpan::new(BridgeStage::MaterializeProfile);

		record_stage_outcome(BridgeStage::MaterializeProfile, StageOutcome::Attempt);

		match span.instrument(self.get_or_create(identity, role)).await {
			Ok(profile) => {
				record_stage_outcome(BridgeStage::MaterializeProfile, StageOutcome::Success);

				profile
			},
			Err(e) => {
				warn_stage_failure(BridgeStage::MaterializeProfile, &e);
				record_stage_outcome(BridgeStage::MaterializeProfile, StageOutcome::Failure);

				None
			},
		}
	}

	// Read, create-if-absent, then re-read. The re-read makes the result reflect whichever
	// write won at the store, including concurrent creators and backend-side normalization.
	async fn get_or_create(
		&self,
		identity: &Identity,
		role: Role,
	) -> Result<Option<ProfileRecord>, StoreError> {
		if let Some(existing) = self.profiles.fetch(&identity.uid).await? {
			return Ok(Some(existing));
		}

		if let Err(e) = self.profiles.create(ProfileRecord::from_identity(identity, role)).await {
			// A failed create legitimately leaves the follow-up read empty.
			warn_stage_failure(BridgeStage::MaterializeProfile, &e);
			record_stage_outcome(BridgeStage::MaterializeProfile, StageOutcome::Failure);
		}

		self.profiles.fetch(&identity.uid).await
	}

	async fn redirect(&self, target: &str) {
		let span = BridgeSpan::new(BridgeStage::Redirect);

		record_stage_outcome(BridgeStage::Redirect, StageOutcome::Attempt);
		span.instrument(self.sink.navigate(target)).await;
		record_stage_outcome(BridgeStage::Redirect, StageOutcome::Success);
	}
}
impl Debug for Bridge {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Bridge").finish_non_exhaustive()
	}
}
