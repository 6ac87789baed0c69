use crate::provider::ProviderKind;
use crate::resolver::ResolverConfig;
use crate::support::RandomSource;
use crate::webc::{ImageCheck, SearchApi};
use crate::{Error, Result};
use serde_json::Value;

/// Everything a provider attempt needs, borrowed from the `Resolver` for one call.
pub(crate) struct ProviderContext<'a> {
	pub config: &'a ResolverConfig,
	pub check: &'a dyn ImageCheck,
	pub search_api: &'a dyn SearchApi,
	pub random: &'a dyn RandomSource,
}

impl ProviderContext<'_> {
	/// Check `url`, racing the load signal against the check timeout.
	///
	/// When the timeout wins, the check future is dropped and its eventual signal is lost.
	pub async fn check_url(&self, provider: ProviderKind, url: &str) -> Result<()> {
		tracing::debug!(%provider, url, "probing candidate");

		match tokio::time::timeout(self.config.check_timeout, self.check.check(url)).await {
			Ok(true) => Ok(()),
			Ok(false) => Err(Error::unavailable(provider, format!("image failed to load '{url}'"))),
			Err(_) => Err(self.timeout_error(provider)),
		}
	}

	/// GET a json document, bounded by the check timeout.
	pub async fn get_json(&self, provider: ProviderKind, url: &str) -> Result<Value> {
		match tokio::time::timeout(self.config.check_timeout, self.search_api.get_json(url)).await {
			Ok(Ok(value)) => Ok(value),
			Ok(Err(err)) => Err(Error::unavailable(provider, err)),
			Err(_) => Err(self.timeout_error(provider)),
		}
	}

	fn timeout_error(&self, provider: ProviderKind) -> Error {
		Error::ProviderTimeout {
			provider,
			timeout_ms: self.config.check_timeout.as_millis() as u64,
		}
	}
}
