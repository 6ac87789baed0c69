use crate::image::{ImageRequest, ImageResult, ImageStyle, ResolveOptions};
use crate::provider::{Placeholder, ProviderContext, ProviderDispatcher, ProviderKind};
use crate::resolver::{ResolverBuilder, ResolverConfig};
use crate::support::{RandomSource, ThreadRandom};
use crate::webc::{ImageCheck, SearchApi, WebClient};
use std::sync::Arc;

/// Resolves prompts into image urls by walking the provider chain.
///
/// Holds only immutable configuration and capabilities, so it is cheap to clone
/// and safe to share across tasks. Concurrent calls do not interact.
#[derive(Clone)]
pub struct Resolver {
	pub(super) inner: Arc<ResolverInner>,
}

pub(super) struct ResolverInner {
	pub(super) config: ResolverConfig,
	pub(super) check: Arc<dyn ImageCheck>,
	pub(super) search_api: Arc<dyn SearchApi>,
	pub(super) random: Arc<dyn RandomSource>,
}

impl Default for Resolver {
	fn default() -> Self {
		let web_client = Arc::new(WebClient::default());
		Resolver {
			inner: Arc::new(ResolverInner {
				config: ResolverConfig::default(),
				check: web_client.clone(),
				search_api: web_client,
				random: Arc::new(ThreadRandom),
			}),
		}
	}
}

impl std::fmt::Debug for Resolver {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Resolver").field("config", &self.inner.config).finish()
	}
}

/// Constructors & Getters
impl Resolver {
	pub fn builder() -> ResolverBuilder {
		ResolverBuilder::default()
	}

	pub fn config(&self) -> &ResolverConfig {
		&self.inner.config
	}

	/// The provider chain, in check order.
	pub fn chain(&self) -> &[ProviderKind] {
		&self.inner.config.chain
	}
}

/// Public resolve functions
impl Resolver {
	/// Resolve `prompt` into an image. Never fails: the worst outcome is the placeholder.
	pub async fn resolve(&self, prompt: &str, options: Option<&ResolveOptions>) -> ImageResult {
		let config = &self.inner.config;
		let req = ResolveOptions::into_request(options, prompt, config.default_width, config.default_height);
		self.resolve_request(req).await
	}

	/// Resolve `prompt` with the style keyword suffix attached. Unknown style names mean realistic.
	pub async fn resolve_styled(&self, prompt: &str, style: impl Into<ImageStyle>) -> ImageResult {
		let config = &self.inner.config;
		let req = ImageRequest::new(prompt)
			.with_size(config.default_width, config.default_height)
			.with_style(style)
			.with_style_keywords();
		self.resolve_request(req).await
	}

	/// Resolve a fully built request. The prompt is trimmed and zero dimensions fall back to 512.
	pub async fn resolve_request(&self, req: ImageRequest) -> ImageResult {
		let req = req.normalized();
		let inner = &self.inner;
		let ctx = ProviderContext {
			config: &inner.config,
			check: inner.check.as_ref(),
			search_api: inner.search_api.as_ref(),
			random: inner.random.as_ref(),
		};

		tracing::debug!(prompt = %req.prompt, width = req.width, height = req.height, style = %req.style, "resolving image");

		for &kind in &inner.config.chain {
			tracing::debug!(provider = %kind, "trying provider");
			match ProviderDispatcher::attempt(kind, &ctx, &req).await {
				Ok(res) => {
					tracing::info!(provider = %kind, url = %res.url, "image resolved");
					return res;
				}
				Err(err) => {
					tracing::warn!(provider = %kind, %err, "provider failed, trying next");
				}
			}
		}

		let res = Placeholder::build(&inner.config.endpoints.placeholder, inner.random.as_ref(), &req);
		tracing::info!(url = %res.url, "all providers failed, using placeholder");
		res
	}
}
