//! Top-level module for the pastiche generation system.
//!
//! This module provides the paragraph generator, including:
//! - The four fixed phrase-category tables (`lexicon`)
//! - Per-call shuffled sampling pools (`pool`, internal)
//! - Generation parameters (`GenerationRequest`)
//! - The high-level generation entry point (`generator`)

/// High-level interface for producing wrapped pastiche paragraphs.
///
/// Exposes paragraph generation with configurable sentence count and
/// wrap width.
pub mod generator;

/// The four fixed phrase categories and their fragment tables.
///
/// Immutable static data; never mutated at runtime.
pub mod lexicon;

/// Internal per-call sampling pool (shuffled copy of one category table).
///
/// Consumed destructively during a single generation call.
/// This module is not exposed publicly.
mod pool;

/// Generation parameter structure.
///
/// Stores the requested sentence count and wrap width, with the
/// conventional defaults of one sentence at 72 characters.
pub mod request;
