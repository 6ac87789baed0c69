/// Derive a stable numeric seed from a prompt.
///
/// 32-bit rolling hash over the UTF-16 code units (`hash * 31 + unit`, wrapping),
/// returned as the decimal absolute value. Equal prompts always give equal seeds,
/// so the seeded provider serves the same picture for the same prompt.
pub fn generate_seed(prompt: &str) -> String {
	let hash = prompt
		.encode_utf16()
		.fold(0i32, |hash, unit| hash.wrapping_shl(5).wrapping_sub(hash).wrapping_add(unit as i32));
	hash.unsigned_abs().to_string()
}

// region:    --- Tests

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_generate_seed_deterministic() {
		assert_eq!(generate_seed("hello"), generate_seed("hello"));
		assert_ne!(generate_seed("hello"), generate_seed("world"));
	}

	#[test]
	fn test_generate_seed_known_values() {
		// "hello".hashCode() == 99162322
		assert_eq!(generate_seed("hello"), "99162322");
		assert_eq!(generate_seed("a"), "97");
		assert_eq!(generate_seed(""), "0");
	}

	#[test]
	fn test_generate_seed_negative_hash_is_absolute() {
		// "polygenelubricants".hashCode() == i32::MIN
		assert_eq!(generate_seed("polygenelubricants"), "2147483648");
	}
}

// endregion: --- Tests
