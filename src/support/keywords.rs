//! Prompt to keyword derivation used to build provider queries.

/// Words that carry no search value for an image query.
const STOP_WORDS: &[&str] = &[
	"the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "create", "generate", "make",
	"image", "picture", "photo",
];

/// Keywords used when a prompt yields nothing searchable.
pub const DEFAULT_KEYWORDS: &[&str] = &["nature", "beautiful", "landscape"];

/// Maximum number of prompt tokens kept.
pub const MAX_KEYWORDS: usize = 3;

/// Returns every searchable token of the prompt, in prompt order.
///
/// The prompt is lower-cased, any char that is not alphanumeric, `_` or whitespace is removed,
/// then the text is split on whitespace. Stop words and tokens of 2 chars or fewer are dropped.
pub fn prompt_tokens(prompt: &str) -> Vec<String> {
	let cleaned: String = prompt
		.to_lowercase()
		.chars()
		.filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
		.collect();

	cleaned
		.split_whitespace()
		.filter(|word| word.chars().count() > 2 && !STOP_WORDS.contains(word))
		.map(String::from)
		.collect()
}

/// Derive at most 3 keywords from a prompt, falling back to [`DEFAULT_KEYWORDS`].
///
/// ```
/// use imgresolve::support::extract_keywords;
///
/// assert_eq!(extract_keywords("Create a Beautiful Sunset Photo"), vec!["beautiful", "sunset"]);
/// ```
pub fn extract_keywords(prompt: &str) -> Vec<String> {
	let mut tokens = prompt_tokens(prompt);
	tokens.truncate(MAX_KEYWORDS);
	if tokens.is_empty() {
		default_keywords()
	} else {
		tokens
	}
}

pub fn default_keywords() -> Vec<String> {
	DEFAULT_KEYWORDS.iter().map(|s| s.to_string()).collect()
}

// region:    --- Tests

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_extract_keywords_strips_stop_words() {
		let keywords = extract_keywords("Create a Beautiful Sunset Photo");
		assert_eq!(keywords, vec!["beautiful", "sunset"]);
	}

	#[test]
	fn test_extract_keywords_caps_at_three() {
		let keywords = extract_keywords("mountain lake forest river glacier");
		assert_eq!(keywords, vec!["mountain", "lake", "forest"]);
	}

	#[test]
	fn test_extract_keywords_strips_punctuation() {
		let keywords = extract_keywords("Sunset, over the ocean!");
		assert_eq!(keywords, vec!["sunset", "over", "ocean"]);
	}

	#[test]
	fn test_extract_keywords_default_on_empty() {
		assert_eq!(extract_keywords(""), vec!["nature", "beautiful", "landscape"]);
		assert_eq!(extract_keywords("make a photo of it"), vec!["nature", "beautiful", "landscape"]);
	}

	#[test]
	fn test_extract_keywords_idempotent() {
		let prompt = "A red Car in the CITY at night";
		let first = extract_keywords(prompt);
		let second = extract_keywords(&first.join(" "));
		assert_eq!(first, vec!["red", "car", "city"]);
		assert_eq!(first, second);
	}
}

// endregion: --- Tests
