//! Fieldset legends and list helpers

use regex::{Captures, Regex};
use std::sync::LazyLock;

static LEGEND_SLOT: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"%(-?)(0?)(\d*)[di]").expect("LEGEND_SLOT: invalid regex pattern")
});

/// Replace the first printf-style integer slot in `legend` with `index`.
///
/// Supports `%i` and `%d` with optional `-` (left align), `0` (zero pad) and
/// width, e.g. `%03d`. A legend without a slot is returned unchanged.
///
/// # Examples
///
/// ```
/// use reinhardt_form_builder::fieldset::format_legend;
///
/// assert_eq!(format_legend("Comment #%i", 2), "Comment #2");
/// assert_eq!(format_legend("Item %03d", 7), "Item 007");
/// assert_eq!(format_legend("Details", 1), "Details");
/// ```
pub fn format_legend(legend: &str, index: usize) -> String {
	LEGEND_SLOT
		.replacen(legend, 1, |caps: &Captures<'_>| {
			let left = !caps[1].is_empty();
			let zero = !caps[2].is_empty();
			let width: usize = caps[3].parse().unwrap_or(0);
			match (left, zero) {
				(true, _) => format!("{:<width$}", index, width = width),
				(false, true) => format!("{:0>width$}", index, width = width),
				(false, false) => format!("{:>width$}", index, width = width),
			}
		})
		.into_owned()
}

/// Join messages into one sentence: `a`, `a and b`, `a, b, and c`.
///
/// # Examples
///
/// ```
/// use reinhardt_form_builder::fieldset::to_sentence;
///
/// let errors = vec!["is too short".to_string(), "is reserved".to_string()];
/// assert_eq!(to_sentence(&errors), "is too short and is reserved");
/// ```
pub fn to_sentence(parts: &[String]) -> String {
	match parts {
		[] => String::new(),
		[only] => only.clone(),
		[first, second] => format!("{} and {}", first, second),
		[init @ .., last] => format!("{}, and {}", init.join(", "), last),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("Comment %i", 1, "Comment 1")]
	#[case("Comment %d", 12, "Comment 12")]
	#[case("[%3d]", 4, "[  4]")]
	#[case("[%-3i]", 4, "[4  ]")]
	#[case("%i of %i", 3, "3 of %i")]
	#[case("100% done", 9, "100% done")]
	fn test_format_legend(#[case] legend: &str, #[case] index: usize, #[case] expected: &str) {
		assert_eq!(format_legend(legend, index), expected);
	}

	#[rstest]
	fn test_to_sentence() {
		let parts: Vec<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
		assert_eq!(to_sentence(&parts), "a, b, and c");
		assert_eq!(to_sentence(&parts[..1]), "a");
		assert_eq!(to_sentence(&[]), "");
	}
}
