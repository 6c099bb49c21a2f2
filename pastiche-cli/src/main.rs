use std::env;

use pastiche_core::text::generator;
use pastiche_core::text::request::{GenerationRequest, DEFAULT_SENTENCES, DEFAULT_WIDTH};

/// Prints one pastiche paragraph to stdout.
///
/// Usage: `pastiche [SENTENCES] [WIDTH]`
///
/// Both positional arguments are optional. Missing or non-numeric values
/// fall back to the defaults (1 sentence, 72 characters) instead of
/// failing; there is no erroneous input.
fn main() {
    let mut args = env::args().skip(1);

    let sentences = args
        .next()
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(DEFAULT_SENTENCES);

    let width = args
        .next()
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(DEFAULT_WIDTH);

    println!("{}", generator::generate(&GenerationRequest::new(sentences, width)));
}
