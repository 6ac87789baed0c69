//! This module contains all the types related to an Image Resolution Result.

use crate::provider::ResolveMethod;
use serde::{Deserialize, Serialize};

// region:    --- ImageResult

/// The Image Resolution result, exactly one per `Resolver` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageResult {
	/// Always `true` for results produced by the resolver.
	pub success: bool,

	/// Absolute URL of the image.
	pub url: String,

	/// Human readable description, embedding the prompt.
	pub description: String,

	/// The provider (or the placeholder) that produced the url.
	pub method: ResolveMethod,

	/// `true` when every provider failed and the placeholder was synthesized.
	pub fallback_used: bool,

	/// The keyword set used by keyword based providers.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub keywords: Option<Vec<String>>,

	/// The seed used by the seeded provider.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub seed: Option<String>,

	/// The tag line of the selected search hit, when a search API was used.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub tags: Option<String>,
}

/// Constructors
impl ImageResult {
	/// A successful result from a provider of the chain.
	pub fn resolved(method: impl Into<ResolveMethod>, url: impl Into<String>, description: impl Into<String>) -> Self {
		Self {
			success: true,
			url: url.into(),
			description: description.into(),
			method: method.into(),
			fallback_used: false,
			keywords: None,
			seed: None,
			tags: None,
		}
	}

	/// The synthesized fallback result.
	pub fn placeholder(url: impl Into<String>, description: impl Into<String>) -> Self {
		Self {
			fallback_used: true,
			..Self::resolved(ResolveMethod::Placeholder, url, description)
		}
	}
}

/// Chainable Setters
impl ImageResult {
	pub fn with_keywords(mut self, keywords: Vec<String>) -> Self {
		self.keywords = Some(keywords);
		self
	}

	pub fn with_seed(mut self, seed: impl Into<String>) -> Self {
		self.seed = Some(seed.into());
		self
	}

	pub fn with_tags(mut self, tags: impl Into<String>) -> Self {
		self.tags = Some(tags.into());
		self
	}
}

/// Getters
impl ImageResult {
	/// Returns `true` if the url came from the synthetic placeholder.
	pub fn is_placeholder(&self) -> bool {
		self.method == ResolveMethod::Placeholder
	}
}

// endregion: --- ImageResult

// region:    --- Tests


// endregion: --- Tests
