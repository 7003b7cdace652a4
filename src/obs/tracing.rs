// self
use crate::{_prelude::*, obs::BridgeStage};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedStage<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedStage<F> = F;

/// A span builder used by bridge stages.
#[derive(Clone, Debug)]
pub struct BridgeSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl BridgeSpan {
	/// Creates a new span tagged with the provided stage.
	pub fn new(stage: BridgeStage) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("signin_bridge.stage", stage = stage.as_str());

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = stage;

			Self {}
		}
	}

	/// Enters the span for synchronous sections.
	pub fn entered(self) -> BridgeSpanGuard {
		#[cfg(feature = "tracing")]
		{
			BridgeSpanGuard { guard: self.span.entered() }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = self;

			BridgeSpanGuard {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedStage<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// RAII guard returned by [`BridgeSpan::entered`].
pub struct BridgeSpanGuard {
	#[cfg(feature = "tracing")]
	#[allow(dead_code)]
	guard: tracing::span::EnteredSpan,
}
impl Debug for BridgeSpanGuard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("BridgeSpanGuard(..)")
	}
}

/// Logs a swallowed failure for the provided stage (when tracing is enabled).
pub fn warn_stage_failure(stage: BridgeStage, error: &dyn Display) {
	#[cfg(feature = "tracing")]
	tracing::warn!(stage = stage.as_str(), error = %error, "Bridge stage failed; continuing.");
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (stage, error);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn bridge_span_noop_without_tracing() {
		let _guard = BridgeSpan::new(BridgeStage::Redirect).entered();
		// Compile-time smoke test ensures the guard exists even when tracing is disabled.
	}

	#[test]
	fn warn_stage_failure_accepts_any_display() {
		warn_stage_failure(BridgeStage::IssueCode, &"backend offline");
	}

	#[cfg(feature = "tracing")]
	#[tokio::test]
	async fn instrument_wraps_future() {
		let span = BridgeSpan::new(BridgeStage::MaterializeProfile);
		let value = span.instrument(async { 42 }).await;

		assert_eq!(value, 42);
	}
}
