use crate::wrap;

use super::lexicon::PhraseCategory;
use super::pool::WorkingPool;
use super::request::GenerationRequest;

/// Generates one wrapped pastiche paragraph.
///
/// # Behavior
/// - Shuffles a local copy of each of the four category tables.
/// - Caps the sentence count at the smallest table size, so no fragment
///   is ever used twice within one paragraph. The cap is silent: asking
///   for more sentences than the lexicon can cover yields fewer.
/// - Draws one fragment per category per sentence, in lead-in, subject,
///   verb, object order, into a flat fragment sequence.
/// - Joins the fragments with single spaces and word-wraps the result to
///   `request.width` characters.
///
/// # Notes
/// - Infallible: every input produces a (possibly empty) string. A
///   request for 0 sentences returns an empty string.
/// - Stateless: each call works on its own pools and the static tables
///   are never mutated, so repeated or concurrent calls are independent.
/// - Entropy comes from the thread-local generator; repeated calls
///   produce different paragraphs with overwhelming probability.
pub fn generate(request: &GenerationRequest) -> String {
	let mut pools = PhraseCategory::ALL.map(WorkingPool::new);

	let mut effective = request.sentences;
	for pool in &pools {
		effective = effective.min(pool.remaining());
	}

	let mut parts: Vec<&str> = Vec::with_capacity(effective * pools.len());
	for _ in 0..effective {
		for pool in &mut pools {
			// Cannot be exhausted: `effective` is bounded by every pool
			parts.extend(pool.draw());
		}
	}

	wrap::fill(&parts.join(" "), request.width)
}
