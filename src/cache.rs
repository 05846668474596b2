//! Single-slot memo holding at most one fetched [`Quote`].
//!
//! The slot moves one way, from empty to populated, and is never cleared. Writers replace
//! whatever is there, so concurrent first fetches resolve as last-write-wins.

// self
use crate::{_prelude::*, quote::Quote};

/// Quote committed to a [`QuoteCache`] together with its commit instant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CachedQuote {
	/// Shared quote instance handed to every caller.
	pub quote: Arc<Quote>,
	/// UTC instant at which the quote was committed.
	pub fetched_at: OffsetDateTime,
}

/// Thread-safe single-slot memo owned by one provider.
#[derive(Debug, Default)]
pub struct QuoteCache(RwLock<Option<CachedQuote>>);
impl QuoteCache {
	/// Returns the cached entry, if populated.
	pub fn get(&self) -> Option<CachedQuote> {
		self.0.read().clone()
	}

	/// Returns `true` once a quote has been committed.
	pub fn is_populated(&self) -> bool {
		self.0.read().is_some()
	}

	/// Stores `quote` and returns the shared instance now held by the cache.
	pub fn commit(&self, quote: Quote) -> Arc<Quote> {
		self.commit_at(quote, OffsetDateTime::now_utc())
	}

	/// Same as [`commit`](Self::commit) with an explicit commit instant.
	pub fn commit_at(&self, quote: Quote, fetched_at: OffsetDateTime) -> Arc<Quote> {
		let quote = Arc::new(quote);

		*self.0.write() = Some(CachedQuote { quote: quote.clone(), fetched_at });

		quote
	}
}
