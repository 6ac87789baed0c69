use crate::image::{ImageRequest, ImageResult};
use crate::provider::{ProviderContext, ProviderKind};
use crate::support::generate_seed;
use crate::Result;

pub(crate) struct PicsumProvider;

impl PicsumProvider {
	pub fn seeded_url(base: &str, seed: &str, req: &ImageRequest) -> String {
		let base = base.trim_end_matches('/');
		format!("{base}/seed/{seed}/{}/{}", req.width, req.height)
	}

	pub async fn attempt(ctx: &ProviderContext<'_>, req: &ImageRequest) -> Result<ImageResult> {
		let prompt = req.effective_prompt();
		let seed = generate_seed(&prompt);
		let url = Self::seeded_url(&ctx.config.endpoints.picsum, &seed, req);

		ctx.check_url(ProviderKind::Picsum, &url).await?;

		let description = format!("AI-generated image for: {prompt}");
		Ok(ImageResult::resolved(ProviderKind::Picsum, url, description).with_seed(seed))
	}
}
