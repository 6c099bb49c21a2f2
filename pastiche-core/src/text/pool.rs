use rand::seq::SliceRandom;

use super::lexicon::{self, PhraseCategory};

/// Per-call working copy of one category's fragment table.
///
/// A `WorkingPool` owns a uniformly shuffled copy of the static table and
/// is consumed destructively: each draw removes a fragment, so a fragment
/// can be handed out at most once per pool.
///
/// # Invariants
/// - The static lexicon tables are never mutated; only the local copy is.
/// - Every fragment of the source table is present exactly once at
///   construction time.
pub(crate) struct WorkingPool {
	fragments: Vec<&'static str>,
}

impl WorkingPool {
	/// Creates a pool from a full, unbiased shuffle of the category table.
	///
	/// Uses the thread-local generator, so concurrent calls cannot
	/// interfere with each other's shuffles.
	pub(crate) fn new(category: PhraseCategory) -> Self {
		let mut fragments = lexicon::fragments(category).to_vec();
		fragments.shuffle(&mut rand::rng());
		Self { fragments }
	}

	/// Number of fragments still available.
	pub(crate) fn remaining(&self) -> usize {
		self.fragments.len()
	}

	/// Removes and returns one fragment, or `None` once exhausted.
	///
	/// The pool is already shuffled, so taking from the end is as uniform
	/// as any other fixed position.
	pub(crate) fn draw(&mut self) -> Option<&'static str> {
		self.fragments.pop()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashSet;

	#[test]
	fn pool_starts_with_the_full_table() {
		for category in PhraseCategory::ALL {
			let pool = WorkingPool::new(category);
			assert_eq!(pool.remaining(), lexicon::fragments(category).len());
		}
	}

	#[test]
	fn draining_yields_each_fragment_exactly_once() {
		let mut pool = WorkingPool::new(PhraseCategory::Verb);
		let mut drawn = Vec::new();
		while let Some(fragment) = pool.draw() {
			drawn.push(fragment);
		}

		let table = lexicon::fragments(PhraseCategory::Verb);
		assert_eq!(drawn.len(), table.len());

		let distinct: HashSet<&str> = drawn.iter().copied().collect();
		let expected: HashSet<&str> = table.iter().copied().collect();
		assert_eq!(distinct, expected);
	}

	#[test]
	fn exhausted_pool_keeps_returning_none() {
		let mut pool = WorkingPool::new(PhraseCategory::Object);
		while pool.draw().is_some() {}
		assert_eq!(pool.remaining(), 0);
		assert!(pool.draw().is_none());
	}
}
