use derive_more::Display;
use serde::{Deserialize, Serialize};

/// The external providers that can take part in a resolution chain.
#[derive(Debug, Clone, Copy, Display, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ProviderKind {
	/// Stock photo redirect endpoint, validated by probing.
	#[display("unsplash")]
	Unsplash,
	/// Keyed search API, validated by a non-empty result set.
	#[display("pixabay")]
	Pixabay,
	/// Seeded deterministic images, validated by probing.
	#[display("picsum")]
	Picsum,
}

/// Default chain order.
pub(crate) const DEFAULT_CHAIN: &[ProviderKind] = &[ProviderKind::Unsplash, ProviderKind::Pixabay, ProviderKind::Picsum];

impl ProviderKind {
	/// Parse a provider name, case-insensitive. Returns `None` for unknown names.
	pub fn from_name(name: &str) -> Option<Self> {
		match name.trim().to_lowercase().as_str() {
			"unsplash" => Some(ProviderKind::Unsplash),
			"pixabay" => Some(ProviderKind::Pixabay),
			"picsum" => Some(ProviderKind::Picsum),
			_ => None,
		}
	}
}

impl TryFrom<String> for ProviderKind {
	type Error = String;

	fn try_from(name: String) -> Result<Self, Self::Error> {
		ProviderKind::from_name(&name).ok_or_else(|| format!("unknown provider '{name}'"))
	}
}

// region:    --- ResolveMethod

/// How an `ImageResult` was obtained. `Placeholder` is the synthetic fallback
/// and never appears in a provider chain.
#[derive(Debug, Clone, Copy, Display, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolveMethod {
	#[display("unsplash")]
	Unsplash,
	#[display("pixabay")]
	Pixabay,
	#[display("picsum")]
	Picsum,
	#[display("placeholder")]
	Placeholder,
}

impl From<ProviderKind> for ResolveMethod {
	fn from(kind: ProviderKind) -> Self {
		match kind {
			ProviderKind::Unsplash => ResolveMethod::Unsplash,
			ProviderKind::Pixabay => ResolveMethod::Pixabay,
			ProviderKind::Picsum => ResolveMethod::Picsum,
		}
	}
}

// endregion: --- ResolveMethod

// region:    --- Tests


// endregion: --- Tests
