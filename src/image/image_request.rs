//! This module contains all the types related to an Image Resolution Request.

use crate::image::ImageStyle;
use crate::support::{default_keywords, prompt_tokens, MAX_KEYWORDS};
use serde::{Deserialize, Serialize};

/// Default width and height, in pixels.
pub const DEFAULT_DIMENSION: u32 = 512;

// region:    --- ImageRequest

/// The Image Resolution request, built once per `Resolver` call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageRequest {
	/// A text description of the desired image. Trimmed, may be empty.
	pub prompt: String,

	/// The requested width in pixels. Always greater than zero.
	pub width: u32,

	/// The requested height in pixels. Always greater than zero.
	pub height: u32,

	/// The visual style of the image.
	pub style: ImageStyle,

	/// Keywords appended after the prompt tokens (set by the styled entry point).
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub style_keywords: Vec<String>,
}

impl Default for ImageRequest {
	fn default() -> Self {
		Self::new("")
	}
}

/// Constructors
impl ImageRequest {
	/// Create a new ImageRequest with the given prompt and default dimensions.
	pub fn new(prompt: impl Into<String>) -> Self {
		Self {
			prompt: prompt.into().trim().to_string(),
			width: DEFAULT_DIMENSION,
			height: DEFAULT_DIMENSION,
			style: ImageStyle::default(),
			style_keywords: Vec::new(),
		}
	}

	/// Create an ImageRequest from a prompt.
	pub fn from_prompt(prompt: impl Into<String>) -> Self {
		Self::new(prompt)
	}
}

/// Chainable Setters
impl ImageRequest {
	/// Set the width. Zero falls back to the default.
	pub fn with_width(mut self, width: u32) -> Self {
		self.width = non_zero_or_default(width);
		self
	}

	/// Set the height. Zero falls back to the default.
	pub fn with_height(mut self, height: u32) -> Self {
		self.height = non_zero_or_default(height);
		self
	}

	/// Set both dimensions.
	pub fn with_size(self, width: u32, height: u32) -> Self {
		self.with_width(width).with_height(height)
	}

	/// Set the style. Accepts an `ImageStyle` or any style name.
	pub fn with_style(mut self, style: impl Into<ImageStyle>) -> Self {
		self.style = style.into();
		self
	}

	/// Attach the current style's keyword suffix to the keyword derivation.
	pub fn with_style_keywords(mut self) -> Self {
		self.style_keywords = self.style.keywords().iter().map(|s| s.to_string()).collect();
		self
	}
}

impl ImageRequest {
	/// Re-apply the construction invariants to a request built field by field
	/// (trimmed prompt, non zero dimensions).
	pub fn normalized(mut self) -> Self {
		self.prompt = self.prompt.trim().to_string();
		self.width = non_zero_or_default(self.width);
		self.height = non_zero_or_default(self.height);
		self
	}
}

/// Getters
impl ImageRequest {
	/// The effective keyword set: up to 3 prompt tokens followed by the style keywords.
	/// Falls back to the default keywords when both are empty.
	pub fn keywords(&self) -> Vec<String> {
		let mut keywords = prompt_tokens(&self.prompt);
		keywords.truncate(MAX_KEYWORDS);
		keywords.extend(self.style_keywords.iter().cloned());
		if keywords.is_empty() {
			default_keywords()
		} else {
			keywords
		}
	}

	/// The prompt as resolved, with the style suffix when one is attached.
	pub fn effective_prompt(&self) -> String {
		if self.style_keywords.is_empty() {
			self.prompt.clone()
		} else {
			format!("{} {}", self.prompt, self.style_keywords.join(","))
		}
	}
}

// endregion: --- ImageRequest

// region:    --- Support

fn non_zero_or_default(value: u32) -> u32 {
	if value == 0 {
		DEFAULT_DIMENSION
	} else {
		value
	}
}

// endregion: --- Support

// region:    --- Tests


// endregion: --- Tests
