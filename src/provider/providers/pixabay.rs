use crate::image::{ImageRequest, ImageResult};
use crate::provider::{ProviderContext, ProviderKind};
use crate::{Error, Result};
use serde::Deserialize;
use serde_json::Value;
use value_ext::JsonValueExt;

const PER_PAGE: u32 = 20;

pub(crate) struct PixabayProvider;

/// The subset of a Pixabay hit we use.
#[derive(Debug, Deserialize)]
struct PixabayHit {
	#[serde(rename = "webformatURL")]
	webformat_url: String,
	#[serde(default)]
	tags: String,
}

impl PixabayProvider {
	pub fn search_url(base: &str, key: &str, req: &ImageRequest, keywords: &[String]) -> String {
		let query = urlencoding::encode(&keywords.join(",")).into_owned();
		let key = urlencoding::encode(key);
		format!(
			"{base}?key={key}&q={query}&image_type=photo&orientation=all&category=all&min_width={}&min_height={}&per_page={PER_PAGE}",
			req.width, req.height
		)
	}

	pub async fn attempt(ctx: &ProviderContext<'_>, req: &ImageRequest) -> Result<ImageResult> {
		let kind = ProviderKind::Pixabay;

		let key = match &ctx.config.pixabay_key {
			Some(api_key) => api_key.resolve().map_err(|err| Error::unavailable(kind, err))?,
			None => return Err(Error::unavailable(kind, "no api key configured")),
		};

		let keywords = req.keywords();
		let url = Self::search_url(&ctx.config.endpoints.pixabay, &key, req, &keywords);

		tracing::debug!(provider = %kind, keywords = %keywords.join(","), "searching");
		let value = ctx.get_json(kind, &url).await?;
		let mut hits = Self::parse_hits(value)?;

		if hits.is_empty() {
			return Err(Error::ProviderEmptyResult { provider: kind });
		}

		let idx = ctx.random.pick(hits.len()).min(hits.len() - 1);
		let hit = hits.swap_remove(idx);
		let description = format!("{} - {}", req.effective_prompt(), hit.tags);

		Ok(ImageResult::resolved(kind, hit.webformat_url, description)
			.with_keywords(keywords)
			.with_tags(hit.tags))
	}

	fn parse_hits(mut value: Value) -> Result<Vec<PixabayHit>> {
		value
			.x_take::<Vec<PixabayHit>>("hits")
			.map_err(|err| Error::unavailable(ProviderKind::Pixabay, format!("malformed search response: {err}")))
	}
}

// region:    --- Tests


// endregion: --- Tests
