//! Optional observability helpers for the quote fetch.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit a span named `quote_provider.fetch` carrying the `stage` and
//!   `endpoint` fields, plus info notices before and after each fetch.
//! - Enable `metrics` to increment the `quote_provider_fetch_total` counter for every
//!   attempt/success/failure, labeled by `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Outcome labels recorded for each fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FetchOutcome {
	/// A fetch is about to be issued because the cache is empty.
	Attempt,
	/// The fetch completed and the cache was populated.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl FetchOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			FetchOutcome::Attempt => "attempt",
			FetchOutcome::Success => "success",
			FetchOutcome::Failure => "failure",
		}
	}
}
impl Display for FetchOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
