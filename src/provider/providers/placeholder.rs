use crate::image::{ImageRequest, ImageResult};
use crate::support::RandomSource;

/// Background colors of the synthesized placeholder.
pub const PLACEHOLDER_PALETTE: &[&str] = &["FF6B6B", "4ECDC4", "45B7D1", "96CEB4", "FECA57", "FF9FF3", "54A0FF"];

/// Max prompt chars rendered in the placeholder.
const PLACEHOLDER_TEXT_MAX: usize = 30;

pub(crate) struct Placeholder;

impl Placeholder {
	/// Build the fallback result. Performs no I/O, so it cannot fail.
	pub fn build(base: &str, random: &dyn RandomSource, req: &ImageRequest) -> ImageResult {
		let base = base.trim_end_matches('/');
		let idx = random.pick(PLACEHOLDER_PALETTE.len()).min(PLACEHOLDER_PALETTE.len() - 1);
		let color = PLACEHOLDER_PALETTE[idx];
		let prompt = req.effective_prompt();
		let short_prompt: String = prompt.chars().take(PLACEHOLDER_TEXT_MAX).collect();
		let text = urlencoding::encode(&short_prompt);

		let url = format!("{base}/{}x{}/{color}/ffffff?text={text}", req.width, req.height);
		ImageResult::placeholder(url, format!("Generated placeholder for: {prompt}"))
	}
}

// region:    --- Tests


// endregion: --- Tests
