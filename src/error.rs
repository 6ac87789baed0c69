use crate::provider::ProviderKind;
use derive_more::{Display, From};

pub type Result<T> = core::result::Result<T, Error>;

/// Errors raised while attempting a provider or building a resolver.
///
/// Provider-level errors never escape `Resolver::resolve*`. They are logged and the
/// resolver moves on to the next provider in the chain.
#[derive(Debug, From, Display)]
#[allow(missing_docs)]
pub enum Error {
	// -- Provider attempts
	#[display("Provider '{provider}' unavailable. Cause: {cause}")]
	ProviderUnavailable { provider: ProviderKind, cause: String },

	#[display("Provider '{provider}' did not settle within {timeout_ms}ms")]
	ProviderTimeout { provider: ProviderKind, timeout_ms: u64 },

	#[display("Provider '{provider}' returned no candidates")]
	ProviderEmptyResult { provider: ProviderKind },

	// -- Config
	#[display("No API key found in environment variable '{env_name}'")]
	MissingApiKey { env_name: String },

	#[display("Invalid endpoint url '{url}'")]
	InvalidUrl { url: String },

	// -- Externals
	#[from]
	#[display("Http error: {_0}")]
	Reqwest(reqwest::Error),

	#[from]
	#[display("Json error: {_0}")]
	SerdeJson(serde_json::Error),
}

impl Error {
	/// Wrap any lower level error as a `ProviderUnavailable` for the given provider.
	pub(crate) fn unavailable(provider: ProviderKind, cause: impl std::fmt::Display) -> Self {
		Error::ProviderUnavailable {
			provider,
			cause: cause.to_string(),
		}
	}
}

// region:    --- Error Boilerplate

impl std::error::Error for Error {}

// endregion: --- Error Boilerplate
