use serde::{Deserialize, Serialize};

/// Default number of sentences per paragraph.
pub const DEFAULT_SENTENCES: usize = 1;

/// Default wrap width in characters.
pub const DEFAULT_WIDTH: usize = 72;

/// Input parameters for paragraph generation.
///
/// Both fields are accepted as-is, without bound validation:
/// - `sentences` is silently capped at the smallest category table size,
///   since no fragment is ever repeated within one paragraph. A value of
///   0 produces an empty paragraph.
/// - `width` of 0 puts every word on its own line.
///
/// # Notes
/// - Fields missing from a serialized form (ex. an HTTP query string)
///   fall back to the defaults of 1 sentence at 72 characters.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct GenerationRequest {
	/// Number of sentences to produce.
	pub sentences: usize,

	/// Wrap width in characters.
	pub width: usize,
}

impl GenerationRequest {
	/// Creates a request for `sentences` sentences wrapped at `width`.
	pub fn new(sentences: usize, width: usize) -> Self {
		Self { sentences, width }
	}
}

impl Default for GenerationRequest {
	fn default() -> Self {
		Self {
			sentences: DEFAULT_SENTENCES,
			width: DEFAULT_WIDTH,
		}
	}
}
