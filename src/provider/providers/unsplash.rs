use crate::image::{ImageRequest, ImageResult};
use crate::provider::{ProviderContext, ProviderKind};
use crate::{Error, Result};

pub(crate) struct UnsplashProvider;

impl UnsplashProvider {
	/// Candidate urls, checked in order.
	pub fn candidate_urls(base: &str, curated: &str, req: &ImageRequest, keywords: &[String]) -> Vec<String> {
		let base = base.trim_end_matches('/');
		let query = keywords.iter().map(|k| urlencoding::encode(k)).collect::<Vec<_>>().join(",");
		let (width, height) = (req.width, req.height);

		vec![
			format!("{base}/{width}x{height}/?{query}"),
			format!("{base}/featured/{width}x{height}/?{query}"),
			format!("{curated}?w={width}&h={height}&fit=crop"),
		]
	}

	pub async fn attempt(ctx: &ProviderContext<'_>, req: &ImageRequest) -> Result<ImageResult> {
		let endpoints = &ctx.config.endpoints;
		let keywords = req.keywords();

		let mut last_err: Option<Error> = None;
		for url in Self::candidate_urls(&endpoints.unsplash, &endpoints.unsplash_curated, req, &keywords) {
			match ctx.check_url(ProviderKind::Unsplash, &url).await {
				Ok(()) => {
					let description = format!("High-quality image for: {}", req.effective_prompt());
					return Ok(ImageResult::resolved(ProviderKind::Unsplash, url, description).with_keywords(keywords));
				}
				Err(err) => {
					tracing::debug!(%err, "unsplash candidate rejected");
					last_err = Some(err);
				}
			}
		}

		Err(last_err.unwrap_or_else(|| Error::ProviderEmptyResult {
			provider: ProviderKind::Unsplash,
		}))
	}
}

// region:    --- Tests


// endregion: --- Tests
