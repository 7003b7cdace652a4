//! Optional observability helpers for bridge stages.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `signin_bridge.stage` with the `stage`
//!   field, plus warnings for swallowed store failures.
//! - Enable `metrics` to increment the `signin_bridge_stage_total` counter for every
//!   attempt/success/failure, labeled by `stage` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Orchestration stages observed by the bridge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BridgeStage {
	/// Minting and persisting the one-time code.
	IssueCode,
	/// Lazily materializing the profile document.
	MaterializeProfile,
	/// Handing the computed target to the redirect sink.
	Redirect,
}
impl BridgeStage {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			BridgeStage::IssueCode => "issue_code",
			BridgeStage::MaterializeProfile => "materialize_profile",
			BridgeStage::Redirect => "redirect",
		}
	}
}
impl Display for BridgeStage {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StageOutcome {
	/// Entry to a bridge stage.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure that was swallowed or propagated.
	Failure,
}
impl StageOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			StageOutcome::Attempt => "attempt",
			StageOutcome::Success => "success",
			StageOutcome::Failure => "failure",
		}
	}
}
impl Display for StageOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
