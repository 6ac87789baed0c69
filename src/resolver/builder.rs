use crate::provider::ProviderKind;
use crate::resolver::resolver_impl::ResolverInner;
use crate::resolver::{ApiKey, Endpoints, Resolver, ResolverConfig};
use crate::support::{RandomSource, ThreadRandom};
use crate::webc::{ImageCheck, SearchApi, WebClient};
use crate::Result;
use std::sync::Arc;
use std::time::Duration;

/// The builder for the `Resolver` structure.
///
/// ```
/// use imgresolve::{ProviderKind, Resolver};
/// use std::time::Duration;
///
/// let resolver = Resolver::builder()
/// 	.with_chain([ProviderKind::Picsum])
/// 	.with_check_timeout(Duration::from_secs(2))
/// 	.build()
/// 	.unwrap();
/// assert_eq!(resolver.chain(), &[ProviderKind::Picsum]);
/// ```
#[derive(Default)]
pub struct ResolverBuilder {
	web_client: Option<WebClient>,
	config: Option<ResolverConfig>,
	check: Option<Arc<dyn ImageCheck>>,
	search_api: Option<Arc<dyn SearchApi>>,
	random: Option<Arc<dyn RandomSource>>,
}

impl ResolverBuilder {
	/// Create a new ResolverBuilder with a custom reqwest client.
	pub fn with_reqwest(mut self, reqwest_client: reqwest::Client) -> Self {
		self.web_client = Some(WebClient::from_reqwest_client(reqwest_client));
		self
	}

	/// Replace the whole configuration.
	pub fn with_config(mut self, config: ResolverConfig) -> Self {
		self.config = Some(config);
		self
	}

	pub fn with_chain(mut self, chain: impl IntoIterator<Item = ProviderKind>) -> Self {
		let config = self.config.take().unwrap_or_default();
		self.config = Some(config.with_chain(chain));
		self
	}

	pub fn with_check_timeout(mut self, check_timeout: Duration) -> Self {
		let config = self.config.take().unwrap_or_default();
		self.config = Some(config.with_check_timeout(check_timeout));
		self
	}

	pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
		let config = self.config.take().unwrap_or_default();
		self.config = Some(config.with_endpoints(endpoints));
		self
	}

	pub fn with_pixabay_key(mut self, pixabay_key: Option<ApiKey>) -> Self {
		let config = self.config.take().unwrap_or_default();
		self.config = Some(config.with_pixabay_key(pixabay_key));
		self
	}

	/// Replace the image check (default: the reqwest `WebClient`).
	pub fn with_check(mut self, check: impl ImageCheck + 'static) -> Self {
		self.check = Some(Arc::new(check));
		self
	}

	/// Replace the search api transport (default: the reqwest `WebClient`).
	pub fn with_search_api(mut self, search_api: impl SearchApi + 'static) -> Self {
		self.search_api = Some(Arc::new(search_api));
		self
	}

	/// Replace the random source (default: `ThreadRandom`).
	pub fn with_random(mut self, random: impl RandomSource + 'static) -> Self {
		self.random = Some(Arc::new(random));
		self
	}

	/// Build the resolver. Fails only on an invalid configuration.
	pub fn build(self) -> Result<Resolver> {
		let config = self.config.unwrap_or_default().normalized()?;

		let web_client = Arc::new(self.web_client.unwrap_or_default());
		let check: Arc<dyn ImageCheck> = match self.check {
			Some(check) => check,
			None => web_client.clone(),
		};
		let search_api: Arc<dyn SearchApi> = match self.search_api {
			Some(search_api) => search_api,
			None => web_client,
		};
		let random = self.random.unwrap_or_else(|| Arc::new(ThreadRandom));

		Ok(Resolver {
			inner: Arc::new(ResolverInner {
				config,
				check,
				search_api,
				random,
			}),
		})
	}
}
