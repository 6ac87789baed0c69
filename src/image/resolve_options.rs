use crate::image::{ImageRequest, ImageStyle};
use serde::{Deserialize, Serialize};

/// Per call options for `Resolver::resolve`.
///
/// Unset values fall back to the resolver configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResolveOptions {
	pub width: Option<u32>,
	pub height: Option<u32>,
	pub style: Option<ImageStyle>,
}

/// Chainable Setters
impl ResolveOptions {
	pub fn with_width(mut self, width: u32) -> Self {
		self.width = Some(width);
		self
	}

	pub fn with_height(mut self, height: u32) -> Self {
		self.height = Some(height);
		self
	}

	pub fn with_size(self, width: u32, height: u32) -> Self {
		self.with_width(width).with_height(height)
	}

	pub fn with_style(mut self, style: impl Into<ImageStyle>) -> Self {
		self.style = Some(style.into());
		self
	}
}

impl ResolveOptions {
	/// Build the request for `prompt`, taking unset dimensions from the given defaults.
	pub(crate) fn into_request(
		options: Option<&ResolveOptions>,
		prompt: &str,
		default_width: u32,
		default_height: u32,
	) -> ImageRequest {
		let width = options.and_then(|o| o.width).unwrap_or(default_width);
		let height = options.and_then(|o| o.height).unwrap_or(default_height);
		let style = options.and_then(|o| o.style).unwrap_or_default();

		ImageRequest::new(prompt).with_size(width, height).with_style(style)
	}
}
