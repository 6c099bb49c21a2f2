use pastiche_core::text::generator::generate;
use pastiche_core::text::request::GenerationRequest;

/// Checks the wrap contract: no line exceeds `width` unless it holds a
/// single unbreakable word.
fn assert_wrapped(paragraph: &str, width: usize) {
	for line in paragraph.lines() {
		if line.chars().count() > width {
			assert!(
				!line.contains(' '),
				"over-long line is breakable: {line:?}"
			);
		}
	}
}

#[test]
fn default_request_yields_a_sentence() {
	let paragraph = generate(&GenerationRequest::default());
	assert!(!paragraph.is_empty());
	assert!(paragraph.ends_with('.'));
	assert_wrapped(&paragraph, 72);
}

#[test]
fn narrow_width_forces_a_wrap() {
	let paragraph = generate(&GenerationRequest::new(1, 45));
	assert!(paragraph.contains('\n'));
	assert!(paragraph.ends_with('.'));
	assert_wrapped(&paragraph, 45);
}

#[test]
fn four_sentences_at_width_50() {
	let paragraph = generate(&GenerationRequest::new(4, 50));
	assert!(paragraph.matches('.').count() >= 4);
	assert!(paragraph.contains('\n'));
	assert!(paragraph.ends_with('.'));
	assert_wrapped(&paragraph, 50);
}

#[test]
fn wrap_contract_holds_across_widths() {
	for width in [20, 45, 72, 100] {
		let paragraph = generate(&GenerationRequest::new(3, width));
		assert!(!paragraph.is_empty());
		assert_wrapped(&paragraph, width);
	}
}

#[test]
fn repeated_calls_differ() {
	// One sentence draws 1 fragment out of each of four shuffled tables;
	// a collision between two independent calls is vanishingly unlikely.
	let request = GenerationRequest::new(4, 72);
	let first = generate(&request);
	let second = generate(&request);
	assert_ne!(first, second);

	assert_wrapped(&first, 72);
	assert_wrapped(&second, 72);
	assert!(first.ends_with('.'));
	assert!(second.ends_with('.'));
}

#[test]
fn oversized_request_still_terminates_cleanly() {
	let paragraph = generate(&GenerationRequest::new(9999, 72));
	assert!(!paragraph.is_empty());
	assert!(paragraph.ends_with('.'));
	assert_wrapped(&paragraph, 72);
}
