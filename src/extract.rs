//! Marker-based extraction of quote and author text from a fetched document body.
//!
//! The upstream API renders an SVG card whose quote sits inside the first `<h3>` element and
//! whose author sits inside the first `<p>` element. Extraction never fails: a missing marker
//! degrades to an empty field.
//!
//! Captured text is trimmed with the ECMAScript whitespace set: Unicode `White_Space` plus
//! U+FEFF (zero-width no-break space), minus U+0085 (next line).

// crates.io
use regex::Regex;
// self
use crate::{_prelude::*, error::ConfigError, quote::Quote};

/// Pattern matching the first `<tag>…</tag>` region of a document.
#[derive(Clone, Debug)]
pub struct MarkerPattern {
	tag: String,
	regex: Regex,
}
impl MarkerPattern {
	/// Compiles a pattern for the provided tag name.
	pub fn new(tag: impl Into<String>) -> Result<Self, ConfigError> {
		let tag = tag.into();

		validate_marker(&tag)?;

		let escaped = regex::escape(&tag);
		let regex = Regex::new(&format!("(?s)<{escaped}>(.*?)</{escaped}>"))?;

		Ok(Self { tag, regex })
	}

	/// Tag name this pattern was built for.
	pub fn tag(&self) -> &str {
		&self.tag
	}

	/// Returns the trimmed content of the first matching region, if any.
	pub fn first_match<'a>(&self, body: &'a str) -> Option<&'a str> {
		self.regex
			.captures(body)
			.and_then(|caps| caps.get(1))
			.map(|m| m.as_str().trim_matches(is_trimmable))
	}
}

/// Pulls a [`Quote`] out of a document body using one marker per field.
#[derive(Clone, Debug)]
pub struct QuoteExtractor {
	quote: MarkerPattern,
	author: MarkerPattern,
}
impl QuoteExtractor {
	/// Builds an extractor for the provided quote and author tag names.
	pub fn new(quote_marker: &str, author_marker: &str) -> Result<Self, ConfigError> {
		Ok(Self {
			quote: MarkerPattern::new(quote_marker)?,
			author: MarkerPattern::new(author_marker)?,
		})
	}

	/// Extracts both fields, substituting `""` for any marker that does not match.
	pub fn extract(&self, body: &str) -> Quote {
		Quote { quote: field(&self.quote, body), author: field(&self.author, body) }
	}
}

/// Accepts tag names made of ASCII alphanumerics, `-`, `_`, or `:`.
pub(crate) fn validate_marker(tag: &str) -> Result<(), ConfigError> {
	let valid = !tag.is_empty()
		&& tag.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':'));

	if valid { Ok(()) } else { Err(ConfigError::InvalidMarker { marker: tag.to_owned() }) }
}

fn is_trimmable(c: char) -> bool {
	match c {
		'\u{feff}' => true,
		'\u{85}' => false,
		c => c.is_whitespace(),
	}
}

fn field(pattern: &MarkerPattern, body: &str) -> String {
	match pattern.first_match(body) {
		Some(text) => text.to_owned(),
		None => {
			crate::obs::log_marker_missing(pattern.tag());

			String::new()
		},
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn default_extractor() -> QuoteExtractor {
		QuoteExtractor::new("h3", "p").expect("Default markers should be valid tag names.")
	}

	const SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg"><foreignObject><div>
<h3>
  Simplicity is prerequisite for reliability.
</h3>
<p>  Edsger W. Dijkstra  </p>
<p>second paragraph</p>
</div></foreignObject></svg>"#;

	#[test]
	fn extracts_first_markers_and_trims() {
		let quote = default_extractor().extract(SVG);

		assert_eq!(quote.quote, "Simplicity is prerequisite for reliability.");
		assert_eq!(quote.author, "Edsger W. Dijkstra");
	}

	#[test]
	fn trims_surrounding_whitespace() {
		let quote =
			default_extractor().extract("<h3>  Hello world  </h3><p>  Jane Doe  </p>");

		assert_eq!(quote, Quote::new("Hello world", "Jane Doe"));
	}

	#[test]
	fn trim_follows_ecmascript_whitespace() {
		let quote = default_extractor()
			.extract("<h3>\u{feff}\u{a0}\u{3000}Bom\u{2028}\t</h3><p>\u{85}Nel\u{85}</p>");

		assert_eq!(quote.quote, "Bom");
		assert_eq!(quote.author, "\u{85}Nel\u{85}");
	}

	#[test]
	fn missing_markers_degrade_to_empty() {
		let extractor = default_extractor();

		assert_eq!(extractor.extract("<p>Only an author</p>"), Quote::new("", "Only an author"));
		assert_eq!(extractor.extract("<h3>Unclosed"), Quote::default());
		assert_eq!(extractor.extract(""), Quote::default());
	}

	#[test]
	fn match_is_non_greedy_and_case_sensitive() {
		let extractor = default_extractor();
		let quote = extractor.extract("<H3>upper</H3><h3>first</h3><h3>second</h3>");

		assert_eq!(quote.quote, "first");
		assert_eq!(quote.author, "");
	}

	#[test]
	fn custom_markers_are_escaped() {
		let extractor =
			QuoteExtractor::new("svg:text", "em").expect("Namespaced markers should be accepted.");
		let quote = extractor.extract("<svg:text>Quoted</svg:text><em>Someone</em>");

		assert_eq!(quote, Quote::new("Quoted", "Someone"));
	}

	#[test]
	fn rejects_invalid_marker_names() {
		for marker in ["", "h 3", "<p>", "p.class", "a|b"] {
			let err = MarkerPattern::new(marker).expect_err("Invalid markers should be rejected.");

			assert!(matches!(err, ConfigError::InvalidMarker { .. }), "{marker:?} gave {err:?}");
		}
	}
}
