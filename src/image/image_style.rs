use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Visual style of a requested image.
///
/// Parsing is lenient: any unknown style name resolves to `Realistic`.
#[derive(Debug, Clone, Copy, Default, Display, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ImageStyle {
	#[default]
	#[display("realistic")]
	Realistic,
	#[display("artistic")]
	Artistic,
	#[display("minimal")]
	Minimal,
	#[display("abstract")]
	Abstract,
	#[display("vintage")]
	Vintage,
}

impl ImageStyle {
	/// The keyword suffix attached to a prompt by `Resolver::resolve_styled`.
	pub fn keywords(&self) -> &'static [&'static str] {
		match self {
			ImageStyle::Realistic => &["realistic", "professional", "high-quality"],
			ImageStyle::Artistic => &["artistic", "creative", "painting"],
			ImageStyle::Minimal => &["minimal", "clean", "simple"],
			ImageStyle::Abstract => &["abstract", "modern", "geometric"],
			ImageStyle::Vintage => &["vintage", "retro", "classic"],
		}
	}

	pub fn from_name(name: &str) -> Self {
		match name.trim().to_lowercase().as_str() {
			"artistic" => ImageStyle::Artistic,
			"minimal" => ImageStyle::Minimal,
			"abstract" => ImageStyle::Abstract,
			"vintage" => ImageStyle::Vintage,
			_ => ImageStyle::Realistic,
		}
	}
}

// region:    --- Froms

impl From<&str> for ImageStyle {
	fn from(name: &str) -> Self {
		ImageStyle::from_name(name)
	}
}

impl From<&String> for ImageStyle {
	fn from(name: &String) -> Self {
		ImageStyle::from_name(name)
	}
}

impl From<String> for ImageStyle {
	fn from(name: String) -> Self {
		ImageStyle::from_name(&name)
	}
}

// endregion: --- Froms

// region:    --- Tests


// endregion: --- Tests
