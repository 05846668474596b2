//! Quote provider: fetch once, then serve the memoized value.
//!
//! [`QuoteProvider::get_quote`] checks the provider's [`QuoteCache`] first and only contacts
//! the endpoint while the cache is empty. A fetched document always populates the cache, even
//! when neither marker matched; transport failures and non-success statuses leave it empty so
//! the next call fetches again.
//!
//! There is no singleflight guard. Callers racing on an empty cache each issue a request and
//! the last one to finish wins the commit. Construct one provider at startup and share it
//! behind a reference or [`Arc`].

// self
use crate::{
	_prelude::*,
	cache::QuoteCache,
	config::ProviderConfig,
	error::FetchError,
	extract::QuoteExtractor,
	http::QuoteHttpClient,
	obs::{self, FetchOutcome, FetchSpan},
	quote::Quote,
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

#[cfg(feature = "reqwest")]
/// Provider specialized for the crate's default reqwest transport.
pub type ReqwestQuoteProvider = QuoteProvider<ReqwestHttpClient>;

/// Supplies a quote-and-author pair, fetching remotely at most once per successful population.
pub struct QuoteProvider<C>
where
	C: ?Sized + QuoteHttpClient,
{
	/// HTTP client wrapper used for the outbound request.
	pub http_client: Arc<C>,
	config: ProviderConfig,
	extractor: QuoteExtractor,
	cache: QuoteCache,
}
impl<C> QuoteProvider<C>
where
	C: ?Sized + QuoteHttpClient,
{
	/// Creates a provider that reuses the caller-provided transport.
	pub fn with_http_client(
		config: ProviderConfig,
		http_client: impl Into<Arc<C>>,
	) -> Result<Self> {
		config.validate()?;

		let extractor = QuoteExtractor::new(&config.quote_marker, &config.author_marker)?;

		Ok(Self { http_client: http_client.into(), config, extractor, cache: Default::default() })
	}

	/// Returns the cached quote, fetching it first if the cache is empty.
	pub async fn get_quote(&self) -> Result<Arc<Quote>> {
		if let Some(cached) = self.cache.get() {
			return Ok(cached.quote);
		}

		let span = FetchSpan::new("get_quote", &self.config.endpoint);

		obs::record_fetch_outcome(FetchOutcome::Attempt);

		let result = span.instrument(self.fetch_and_commit()).await;

		match &result {
			Ok(_) => obs::record_fetch_outcome(FetchOutcome::Success),
			Err(e) => {
				obs::log_fetch_failed(e);
				obs::record_fetch_outcome(FetchOutcome::Failure);
			},
		}

		result
	}

	/// Peeks at the cache without touching the network.
	pub fn cached(&self) -> Option<Arc<Quote>> {
		self.cache.get().map(|cached| cached.quote)
	}

	/// Instant at which the cached quote was committed, if any.
	pub fn fetched_at(&self) -> Option<OffsetDateTime> {
		self.cache.get().map(|cached| cached.fetched_at)
	}

	/// Configuration the provider was built with.
	pub fn config(&self) -> &ProviderConfig {
		&self.config
	}

	async fn fetch_and_commit(&self) -> Result<Arc<Quote>> {
		obs::log_fetch_started(&self.config.endpoint);

		let response =
			self.http_client.get_text(&self.config.endpoint).await.map_err(FetchError::network)?;

		if !response.is_success() {
			return Err(FetchError::Status { status: response.status }.into());
		}

		let quote = self.cache.commit(self.extractor.extract(&response.body));

		obs::log_quote_fetched(&quote);

		Ok(quote)
	}
}
#[cfg(feature = "reqwest")]
impl QuoteProvider<ReqwestHttpClient> {
	/// Creates a provider backed by a default reqwest client.
	///
	/// Fails with [`ConfigError::HttpClientBuild`](crate::error::ConfigError::HttpClientBuild)
	/// when the client cannot be set up.
	pub fn new(config: ProviderConfig) -> Result<Self> {
		Self::with_http_client(config, ReqwestHttpClient::new()?)
	}
}
impl<C> Debug for QuoteProvider<C>
where
	C: ?Sized + QuoteHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("QuoteProvider")
			.field("config", &self.config)
			.field("cached", &self.cache.is_populated())
			.finish()
	}
}
