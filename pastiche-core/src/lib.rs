//! Pastiche paragraph generation library.
//!
//! This crate assembles paragraphs of scholarly-sounding nonsense from
//! canned phrase fragments, including:
//! - A fixed four-category phrase lexicon (lead-ins, subjects, verbs, objects)
//! - Sampling without replacement, so no fragment repeats within a paragraph
//! - Greedy word-wrapping of the assembled text to a configurable width
//!
//! Only the high-level API is exposed publicly. Low-level components
//! are kept internal to ensure consistency and prevent misuse.

/// Core lexicon and paragraph assembly logic.
///
/// This module exposes the high-level generation interface while keeping
/// the internal sampling pool private.
pub mod text;

/// Greedy word-wrapping of whitespace-separated text.
///
/// Exposed so front-ends can reuse the same wrapping on their own text.
pub mod wrap;
