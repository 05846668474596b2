// self
use crate::{_prelude::*, quote::Quote};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedFetch<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedFetch<F> = F;

/// A span builder used around outbound fetches.
#[derive(Clone, Debug)]
pub struct FetchSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl FetchSpan {
	/// Creates a new span tagged with the provided stage + endpoint.
	pub fn new(stage: &'static str, endpoint: &Url) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span =
				tracing::info_span!("quote_provider.fetch", stage, endpoint = endpoint.as_str());

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (stage, endpoint);

			Self {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedFetch<Fut>
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

/// Notice emitted before a fresh quote is requested.
pub fn log_fetch_started(endpoint: &Url) {
	#[cfg(feature = "tracing")]
	tracing::info!(endpoint = endpoint.as_str(), "Fetching fresh quote.");
	#[cfg(not(feature = "tracing"))]
	let _ = endpoint;
}

/// Notice emitted once a quote has been fetched and cached.
pub fn log_quote_fetched(quote: &Quote) {
	#[cfg(feature = "tracing")]
	tracing::info!(quote = quote.quote.as_str(), author = quote.author.as_str(), "Quote fetched.");
	#[cfg(not(feature = "tracing"))]
	let _ = quote;
}

/// Warning emitted when a fetch fails and the cache stays empty.
pub fn log_fetch_failed(error: &Error) {
	#[cfg(feature = "tracing")]
	tracing::warn!(error = %error, "Quote fetch failed.");
	#[cfg(not(feature = "tracing"))]
	let _ = error;
}

/// Diagnostic emitted when a marker is absent from the fetched body.
pub fn log_marker_missing(tag: &str) {
	#[cfg(feature = "tracing")]
	tracing::debug!(marker = tag, "Marker not found; using an empty field.");
	#[cfg(not(feature = "tracing"))]
	let _ = tag;
}
