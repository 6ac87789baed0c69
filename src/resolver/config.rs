use crate::image::DEFAULT_DIMENSION;
use crate::provider::{ProviderKind, DEFAULT_CHAIN};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DurationMilliSeconds};
use std::time::Duration;

/// Default check timeout, applied to every check and search call.
pub const DEFAULT_CHECK_TIMEOUT: Duration = Duration::from_millis(5000);

/// Default environment variable holding the Pixabay API key.
pub const PIXABAY_API_KEY_ENV: &str = "PIXABAY_API_KEY";

// region:    --- ResolverConfig

/// The resolver configuration, fixed at construction.
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
	/// Provider check order. Duplicates are dropped at build time.
	pub chain: Vec<ProviderKind>,

	/// Upper bound for each check or search call.
	#[serde_as(as = "DurationMilliSeconds<u64>")]
	#[serde(rename = "check_timeout_ms")]
	pub check_timeout: Duration,

	pub default_width: u32,
	pub default_height: u32,

	pub endpoints: Endpoints,

	/// Where to find the Pixabay key. `None` makes every Pixabay attempt fail.
	pub pixabay_key: Option<ApiKey>,
}

impl Default for ResolverConfig {
	fn default() -> Self {
		Self {
			chain: DEFAULT_CHAIN.to_vec(),
			check_timeout: DEFAULT_CHECK_TIMEOUT,
			default_width: DEFAULT_DIMENSION,
			default_height: DEFAULT_DIMENSION,
			endpoints: Endpoints::default(),
			pixabay_key: Some(ApiKey::FromEnv(PIXABAY_API_KEY_ENV.to_string())),
		}
	}
}

/// Chainable Setters
impl ResolverConfig {
	pub fn with_chain(mut self, chain: impl IntoIterator<Item = ProviderKind>) -> Self {
		self.chain = chain.into_iter().collect();
		self
	}

	pub fn with_check_timeout(mut self, check_timeout: Duration) -> Self {
		self.check_timeout = check_timeout;
		self
	}

	pub fn with_default_size(mut self, width: u32, height: u32) -> Self {
		self.default_width = width;
		self.default_height = height;
		self
	}

	pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
		self.endpoints = endpoints;
		self
	}

	pub fn with_pixabay_key(mut self, pixabay_key: Option<ApiKey>) -> Self {
		self.pixabay_key = pixabay_key;
		self
	}
}

impl ResolverConfig {
	/// Dedup the chain, clamp sizes, and check the endpoint urls.
	pub(crate) fn normalized(mut self) -> Result<Self> {
		let mut chain: Vec<ProviderKind> = Vec::with_capacity(self.chain.len());
		for kind in self.chain {
			if !chain.contains(&kind) {
				chain.push(kind);
			}
		}
		self.chain = chain;

		if self.default_width == 0 {
			self.default_width = DEFAULT_DIMENSION;
		}
		if self.default_height == 0 {
			self.default_height = DEFAULT_DIMENSION;
		}
		if self.check_timeout.is_zero() {
			self.check_timeout = DEFAULT_CHECK_TIMEOUT;
		}

		self.endpoints.validate()?;

		Ok(self)
	}
}

// endregion: --- ResolverConfig

// region:    --- Endpoints

/// Base urls of the external services. Overridable for mirrors and tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
	pub unsplash: String,
	/// A fixed curated photo tried after the keyword endpoints.
	pub unsplash_curated: String,
	pub pixabay: String,
	pub picsum: String,
	pub placeholder: String,
}

impl Default for Endpoints {
	fn default() -> Self {
		Self {
			unsplash: "https://source.unsplash.com".to_string(),
			unsplash_curated: "https://images.unsplash.com/photo-1557683316-973673baf926".to_string(),
			pixabay: "https://pixabay.com/api/".to_string(),
			picsum: "https://picsum.photos".to_string(),
			placeholder: "https://via.placeholder.com".to_string(),
		}
	}
}

impl Endpoints {
	/// Point every endpoint at the same base url, keeping the default paths.
	pub fn from_base_url(base_url: &str) -> Self {
		let base = base_url.trim_end_matches('/');
		Self {
			unsplash: format!("{base}/unsplash"),
			unsplash_curated: format!("{base}/unsplash/curated"),
			pixabay: format!("{base}/api/"),
			picsum: format!("{base}/picsum"),
			placeholder: format!("{base}/placeholder"),
		}
	}

	fn validate(&self) -> Result<()> {
		for url in [
			&self.unsplash,
			&self.unsplash_curated,
			&self.pixabay,
			&self.picsum,
			&self.placeholder,
		] {
			let parsed = reqwest::Url::parse(url).map_err(|_| Error::InvalidUrl { url: url.clone() })?;
			if !matches!(parsed.scheme(), "http" | "https") {
				return Err(Error::InvalidUrl { url: url.clone() });
			}
		}
		Ok(())
	}
}

// endregion: --- Endpoints

// region:    --- ApiKey

/// Where an API key comes from.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiKey {
	/// Read from the named environment variable on each attempt.
	FromEnv(String),
	/// A fixed key.
	Key(String),
}

impl ApiKey {
	pub fn from_env(env_name: impl Into<String>) -> Self {
		ApiKey::FromEnv(env_name.into())
	}

	pub fn from_key(key: impl Into<String>) -> Self {
		ApiKey::Key(key.into())
	}

	pub fn resolve(&self) -> Result<String> {
		match self {
			ApiKey::FromEnv(env_name) => match std::env::var(env_name) {
				Ok(key) if !key.trim().is_empty() => Ok(key),
				_ => Err(Error::MissingApiKey {
					env_name: env_name.clone(),
				}),
			},
			ApiKey::Key(key) => Ok(key.clone()),
		}
	}
}

// Keys never show up in logs.
impl std::fmt::Debug for ApiKey {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ApiKey::FromEnv(env_name) => write!(f, "ApiKey::FromEnv({env_name})"),
			ApiKey::Key(_) => write!(f, "ApiKey::Key(REDACTED)"),
		}
	}
}

// endregion: --- ApiKey

// region:    --- Tests


// endregion: --- Tests
