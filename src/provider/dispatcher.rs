use crate::image::{ImageRequest, ImageResult};
use crate::provider::providers::{PicsumProvider, PixabayProvider, UnsplashProvider};
use crate::provider::{ProviderContext, ProviderKind};
use crate::Result;

/// Static dispatch from a `ProviderKind` to its implementation.
///
/// Adding a `ProviderKind` variant fails to compile until it is handled here.
pub(crate) struct ProviderDispatcher;

impl ProviderDispatcher {
	pub async fn attempt(kind: ProviderKind, ctx: &ProviderContext<'_>, req: &ImageRequest) -> Result<ImageResult> {
		match kind {
			ProviderKind::Unsplash => UnsplashProvider::attempt(ctx, req).await,
			ProviderKind::Pixabay => PixabayProvider::attempt(ctx, req).await,
			ProviderKind::Picsum => PicsumProvider::attempt(ctx, req).await,
		}
	}
}
