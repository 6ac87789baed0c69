use crate::webc::{ImageCheck, SearchApi};
use crate::Result;
use futures::future::BoxFuture;
use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::{Client, Response};
use serde_json::Value;

/// Simple reqwest client wrapper, the default transport of a `Resolver`.
///
/// Dropping an in-flight future drops the underlying reqwest request, which aborts it.
#[derive(Debug, Clone)]
pub struct WebClient {
	reqwest_client: Client,
}

impl Default for WebClient {
	fn default() -> Self {
		WebClient {
			reqwest_client: Client::new(),
		}
	}
}

impl WebClient {
	pub fn from_reqwest_client(reqwest_client: Client) -> Self {
		WebClient { reqwest_client }
	}

	pub async fn do_get(&self, url: &str) -> Result<Response> {
		let res = self.reqwest_client.get(url).send().await?;
		Ok(res)
	}
}

// region:    --- Capabilities

impl ImageCheck for WebClient {
	fn check<'a>(&'a self, url: &'a str) -> BoxFuture<'a, bool> {
		Box::pin(async move {
			match self.do_get(url).await {
				Ok(res) => {
					let status = res.status();
					let loaded = status.is_success() && is_image_content(res.headers());
					tracing::debug!(url, %status, loaded, "image check settled");
					loaded
				}
				Err(err) => {
					tracing::debug!(url, %err, "image check failed");
					false
				}
			}
		})
	}
}

impl SearchApi for WebClient {
	fn get_json<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<Value>> {
		Box::pin(async move {
			let res = self.do_get(url).await?.error_for_status()?;
			let value = res.json::<Value>().await?;
			Ok(value)
		})
	}
}

// endregion: --- Capabilities

// region:    --- Support

/// A missing content type is accepted, anything else must be an image.
fn is_image_content(headers: &HeaderMap) -> bool {
	match headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) {
		Some(content_type) => content_type.trim().to_ascii_lowercase().starts_with("image/"),
		None => true,
	}
}

// endregion: --- Support
