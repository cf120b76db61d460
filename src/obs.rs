//! Optional observability helpers for API calls.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `linkedin_oauth1.call` with the `call`
//!   (operation) and `stage` (call site) fields, plus a warning event whenever a connection
//!   probe fails.
//! - Enable `metrics` to increment the `linkedin_oauth1_call_total` counter for every
//!   attempt/success/failure, labeled by `call` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// API operations observed by the binding and adapter layers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ApiCall {
	/// Authenticated member profile.
	UserProfile,
	/// Member network updates feed.
	NetworkUpdates,
	/// First-degree connections listing.
	Connections,
	/// Raw JSON text fetched from an arbitrary URL.
	RawJson,
	/// Adapter connection probe.
	ConnectionProbe,
}
impl ApiCall {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			ApiCall::UserProfile => "user_profile",
			ApiCall::NetworkUpdates => "network_updates",
			ApiCall::Connections => "connections",
			ApiCall::RawJson => "raw_json",
			ApiCall::ConnectionProbe => "connection_probe",
		}
	}
}
impl Display for ApiCall {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallOutcome {
	/// Entry to a binding call.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl CallOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallOutcome::Attempt => "attempt",
			CallOutcome::Success => "success",
			CallOutcome::Failure => "failure",
		}
	}
}
impl Display for CallOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Runs `fut` inside a `call` span, recording attempt and success/failure outcomes.
pub(crate) async fn observe<T, Fut>(call: ApiCall, stage: &'static str, fut: Fut) -> Result<T>
where
	Fut: Future<Output = Result<T>>,
{
	let span = CallSpan::new(call, stage);

	record_call_outcome(call, CallOutcome::Attempt);

	let result = span.instrument(fut).await;

	record_call_outcome(
		call,
		if result.is_ok() { CallOutcome::Success } else { CallOutcome::Failure },
	);

	result
}
