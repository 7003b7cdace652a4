// self
use crate::obs::{BridgeStage, StageOutcome};

/// Records a stage outcome via the global metrics recorder (when enabled).
///
/// Swallowed store failures surface here as `failure`-labeled increments, so silent
/// degradation stays visible to operators.
pub fn record_stage_outcome(stage: BridgeStage, outcome: StageOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"signin_bridge_stage_total",
			"stage" => stage.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (stage, outcome);
	}
}
