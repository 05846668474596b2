//! Quote record returned to callers.

// self
use crate::_prelude::*;

/// Quote text paired with its author.
///
/// Both fields are always present. Either may be empty when the fetched document did not
/// contain the corresponding marker, so an empty field means "nothing extracted" rather than
/// a failure.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quote {
	/// Quote text.
	pub quote: String,
	/// Author attribution.
	pub author: String,
}
impl Quote {
	/// Creates a quote from its two text fields.
	pub fn new(quote: impl Into<String>, author: impl Into<String>) -> Self {
		Self { quote: quote.into(), author: author.into() }
	}

	/// Returns `true` when neither field carries any text.
	pub fn is_empty(&self) -> bool {
		self.quote.is_empty() && self.author.is_empty()
	}
}
impl Display for Quote {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		match (self.quote.is_empty(), self.author.is_empty()) {
			(false, false) => write!(f, "\"{}\" - {}", self.quote, self.author),
			(false, true) => write!(f, "\"{}\"", self.quote),
			(true, false) => write!(f, "- {}", self.author),
			(true, true) => Ok(()),
		}
	}
}
