//! Provider-level error types shared across configuration, transport, and fetch paths.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem, raised while building a provider.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// The outbound fetch did not complete successfully.
	#[error(transparent)]
	Fetch(#[from] FetchError),
}

/// Configuration and validation failures raised before any request is made.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// Endpoint uses a scheme other than `http` or `https`.
	#[error("Endpoint must use http or https, got `{scheme}`.")]
	UnsupportedScheme {
		/// Offending scheme.
		scheme: String,
	},
	/// Marker tag name is empty or contains characters a tag name cannot hold.
	#[error("Marker `{marker}` is not a valid tag name.")]
	InvalidMarker {
		/// Offending marker.
		marker: String,
	},
	/// Marker pattern failed to compile.
	#[error(transparent)]
	MarkerPattern(#[from] regex::Error),
	/// Configuration document is not valid JSON for [`ProviderConfig`](crate::config::ProviderConfig).
	#[error("Configuration document is malformed.")]
	Parse {
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
	/// Configuration file could not be read.
	#[error("Configuration file could not be read.")]
	Io(#[from] std::io::Error),
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Failures of the outbound quote request. The cache is never written on these paths.
#[derive(Debug, ThisError)]
pub enum FetchError {
	/// Underlying HTTP client reported a network failure (connect, TLS, timeout, body read).
	#[error("Network error occurred while fetching the quote.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Endpoint answered with a non-success status.
	#[error("Quote endpoint returned HTTP status {status}.")]
	Status {
		/// HTTP status code.
		status: u16,
	},
}
impl FetchError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
