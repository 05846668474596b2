//! Provider configuration: endpoint and marker tag names.

// std
use std::{fs, path::Path};
// self
use crate::{_prelude::*, error::ConfigError, extract};

/// Endpoint queried when no override is configured.
pub const DEFAULT_ENDPOINT: &str = "https://quotes-github-readme.vercel.app/api";
/// Tag wrapping the quote text in the upstream document.
pub const DEFAULT_QUOTE_MARKER: &str = "h3";
/// Tag wrapping the author text in the upstream document.
pub const DEFAULT_AUTHOR_MARKER: &str = "p";

/// Settings consumed by [`QuoteProvider`](crate::provider::QuoteProvider).
///
/// Every field falls back to its default when absent from a JSON document, so an empty
/// object (`{}`) describes the stock upstream API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
	/// URL fetched with a single GET request.
	pub endpoint: Url,
	/// Tag name wrapping the quote text.
	pub quote_marker: String,
	/// Tag name wrapping the author text.
	pub author_marker: String,
}
impl ProviderConfig {
	/// Parses a JSON document, reporting the failing path on malformed input.
	pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
		let mut de = serde_json::Deserializer::from_str(json);
		let config: Self = serde_path_to_error::deserialize(&mut de)
			.map_err(|source| ConfigError::Parse { source })?;

		config.validate()?;

		Ok(config)
	}

	/// Reads and parses a JSON configuration file.
	pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let json = fs::read_to_string(path)?;

		Self::from_json_str(&json)
	}

	/// Overrides the endpoint.
	pub fn with_endpoint(mut self, endpoint: Url) -> Self {
		self.endpoint = endpoint;

		self
	}

	/// Overrides the quote marker tag.
	pub fn with_quote_marker(mut self, marker: impl Into<String>) -> Self {
		self.quote_marker = marker.into();

		self
	}

	/// Overrides the author marker tag.
	pub fn with_author_marker(mut self, marker: impl Into<String>) -> Self {
		self.author_marker = marker.into();

		self
	}

	/// Checks the endpoint scheme and both marker names.
	pub fn validate(&self) -> Result<(), ConfigError> {
		match self.endpoint.scheme() {
			"http" | "https" => {},
			scheme => return Err(ConfigError::UnsupportedScheme { scheme: scheme.to_owned() }),
		}

		extract::validate_marker(&self.quote_marker)?;
		extract::validate_marker(&self.author_marker)?;

		Ok(())
	}
}
impl Default for ProviderConfig {
	fn default() -> Self {
		Self {
			endpoint: Url::parse(DEFAULT_ENDPOINT).expect("Default endpoint is a valid URL."),
			quote_marker: DEFAULT_QUOTE_MARKER.into(),
			author_marker: DEFAULT_AUTHOR_MARKER.into(),
		}
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn empty_document_yields_defaults() {
		let config = ProviderConfig::from_json_str("{}").expect("Empty config should parse.");

		assert_eq!(config, ProviderConfig::default());
		assert_eq!(config.endpoint.as_str(), DEFAULT_ENDPOINT);
		assert_eq!(config.quote_marker, "h3");
		assert_eq!(config.author_marker, "p");
	}

	#[test]
	fn overrides_apply_field_by_field() {
		let config = ProviderConfig::from_json_str(
			r#"{"endpoint":"http://127.0.0.1:8080/card","author_marker":"em"}"#,
		)
		.expect("Partial config should parse.");

		assert_eq!(config.endpoint.as_str(), "http://127.0.0.1:8080/card");
		assert_eq!(config.quote_marker, "h3");
		assert_eq!(config.author_marker, "em");
	}

	#[test]
	fn malformed_document_reports_path() {
		let err = ProviderConfig::from_json_str(r#"{"quote_marker":42}"#)
			.expect_err("Numeric marker should be rejected.");

		match err {
			ConfigError::Parse { source } => assert_eq!(source.path().to_string(), "quote_marker"),
			other => panic!("Unexpected error: {other:?}."),
		}
	}

	#[test]
	fn validate_rejects_unsupported_scheme_and_markers() {
		let config = ProviderConfig::default()
			.with_endpoint(Url::parse("ftp://example.com/quote").expect("URL should parse."));

		assert!(matches!(
			config.validate(),
			Err(ConfigError::UnsupportedScheme { scheme }) if scheme == "ftp"
		));

		let config = ProviderConfig::default().with_quote_marker("h3 class");

		assert!(matches!(config.validate(), Err(ConfigError::InvalidMarker { .. })));
		assert!(ProviderConfig::default().with_author_marker("cite").validate().is_ok());
	}

	#[test]
	fn missing_file_surfaces_io_error() {
		let err = ProviderConfig::from_path("/nonexistent/quote-provider.json")
			.expect_err("Missing file should fail.");

		assert!(matches!(err, ConfigError::Io(_)));
	}
}
