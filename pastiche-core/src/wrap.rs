/// Wraps `text` to lines of at most `width` characters using a greedy
/// strategy.
///
/// # Behavior
/// - Splits on whitespace; runs of whitespace collapse to single spaces.
/// - Packs words onto the current line while the line, a separating space
///   and the pending word stay within `width`; otherwise starts a new line.
/// - Never breaks inside a word: a single word longer than `width` gets a
///   line of its own and that line exceeds `width`.
/// - Lines are joined with `\n`; no trailing newline is appended.
///
/// # Notes
/// - Width is measured in characters, not bytes (UTF-8 safe).
/// - A `width` of 0 puts every word on its own line.
/// - Empty or all-whitespace input yields an empty string.
pub fn fill(text: &str, width: usize) -> String {
	let mut lines: Vec<String> = Vec::new();
	let mut current = String::new();
	let mut current_len = 0;

	for word in text.split_whitespace() {
		let word_len = word.chars().count();

		if current.is_empty() {
			// The first word of a line is placed unconditionally
			current.push_str(word);
			current_len = word_len;
		} else if current_len + 1 + word_len <= width {
			current.push(' ');
			current.push_str(word);
			current_len += 1 + word_len;
		} else {
			lines.push(std::mem::take(&mut current));
			current.push_str(word);
			current_len = word_len;
		}
	}

	if !current.is_empty() {
		lines.push(current);
	}

	lines.join("\n")
}

#[cfg(test)]
mod tests {
	use super::fill;

	#[test]
	fn packs_greedily() {
		assert_eq!(fill("aa bb cc dd", 5), "aa bb\ncc dd");
	}

	#[test]
	fn exact_fit_stays_on_one_line() {
		assert_eq!(fill("aa bb", 5), "aa bb");
	}

	#[test]
	fn collapses_whitespace_runs() {
		assert_eq!(fill("  aa \t bb\n\ncc  ", 80), "aa bb cc");
	}

	#[test]
	fn never_splits_a_word() {
		let wrapped = fill("tiny incomprehensibilities tiny", 8);
		assert_eq!(wrapped, "tiny\nincomprehensibilities\ntiny");
	}

	#[test]
	fn zero_width_puts_each_word_on_its_own_line() {
		assert_eq!(fill("a b c", 0), "a\nb\nc");
	}

	#[test]
	fn empty_input_yields_empty_output() {
		assert_eq!(fill("", 72), "");
		assert_eq!(fill("   ", 72), "");
	}

	#[test]
	fn counts_characters_not_bytes() {
		// Two 2-byte characters per word; three words fit in width 8
		assert_eq!(fill("éé éé éé", 8), "éé éé éé");
	}
}
