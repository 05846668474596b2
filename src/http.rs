//! Transport primitives for the quote fetch.
//!
//! [`QuoteHttpClient`] is the provider's only dependency on an HTTP stack. It performs a GET
//! and hands back the status plus the body as text. Deciding whether a status counts as success
//! is the provider's job.

// std
#[cfg(feature = "reqwest")] use std::ops::Deref;
// self
#[cfg(feature = "reqwest")] use crate::error::ConfigError;
use crate::_prelude::*;

/// Boxed future returned by [`QuoteHttpClient::get_text`].
pub type TextFuture<'a, E> = Pin<Box<dyn Future<Output = Result<TextResponse, E>> + 'a + Send>>;

/// Abstraction over HTTP transports able to GET a document as text.
///
/// Implementations must be `Send + Sync + 'static` so a provider can be shared behind an
/// [`Arc`] across tasks, and the returned future must be `Send` so callers can spawn it.
pub trait QuoteHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Concrete error emitted by the underlying transport.
	type TransportError: 'static + Send + Sync + StdError;

	/// Issues one GET request to `url` and reads the full body as text.
	///
	/// Non-success statuses must be returned as a [`TextResponse`], not as an error.
	fn get_text<'a>(&'a self, url: &'a Url) -> TextFuture<'a, Self::TransportError>;
}

/// Status and text body of a completed HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextResponse {
	/// HTTP status code.
	pub status: u16,
	/// Response body decoded as text.
	pub body: String,
}
impl TextResponse {
	/// Creates a response with the provided status and body.
	pub fn new(status: u16, body: impl Into<String>) -> Self {
		Self { status, body: body.into() }
	}

	/// Returns `true` for 2xx statuses.
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
///
/// Timeouts, proxies, and TLS settings come from the wrapped client; configure them on a
/// custom [`ReqwestClient`] and pass it through [`ReqwestHttpClient::with_client`].
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Builds a client with reqwest's default settings, reporting TLS or resolver setup
	/// failures instead of panicking.
	pub fn new() -> Result<Self, ConfigError> {
		Ok(Self(ReqwestClient::builder().build()?))
	}

	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl QuoteHttpClient for ReqwestHttpClient {
	type TransportError = ReqwestError;

	fn get_text<'a>(&'a self, url: &'a Url) -> TextFuture<'a, Self::TransportError> {
		Box::pin(async move {
			let response = self.0.get(url.clone()).send().await?;
			let status = response.status().as_u16();
			let body = response.text().await?;

			Ok(TextResponse { status, body })
		})
	}
}
