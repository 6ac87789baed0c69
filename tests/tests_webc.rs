//! Tests for the reqwest transport and full resolutions against a mock http server.

mod support;

use crate::support::{should_skip_httpmock, Result};
use httpmock::{Method::GET, MockServer};
use imgresolve::support::FixedRandom;
use imgresolve::webc::{ImageCheck, SearchApi, WebClient};
use imgresolve::{generate_seed, ApiKey, Endpoints, ResolveMethod, Resolver};
use serde_json::json;
use serial_test::serial;

const KEY_ENV: &str = "IMGRESOLVE_TEST_PIXABAY_KEY";

// region:    --- WebClient

#[tokio::test]
async fn test_webc_check_accepts_image_content() -> Result<()> {
	if should_skip_httpmock() {
		return Ok(());
	}
	let server = MockServer::start_async().await;
	let image = server
		.mock_async(|when, then| {
			when.method(GET).path("/ok.png");
			then.status(200).header("content-type", "image/png").body("png");
		})
		.await;
	let html = server
		.mock_async(|when, then| {
			when.method(GET).path("/page");
			then.status(200).header("content-type", "text/html").body("<html>");
		})
		.await;

	let client = WebClient::default();

	assert!(client.check(&server.url("/ok.png")).await);
	assert!(!client.check(&server.url("/page")).await);
	assert!(!client.check(&server.url("/missing.png")).await);
	image.assert_async().await;
	html.assert_async().await;

	Ok(())
}

#[tokio::test]
async fn test_webc_check_unreachable_host() -> Result<()> {
	let client = WebClient::default();
	assert!(!client.check("http://127.0.0.1:1/nothing.png").await);
	Ok(())
}

#[tokio::test]
async fn test_webc_get_json() -> Result<()> {
	if should_skip_httpmock() {
		return Ok(());
	}
	let server = MockServer::start_async().await;
	server
		.mock_async(|when, then| {
			when.method(GET).path("/api/");
			then.status(200)
				.header("content-type", "application/json")
				.body(json!({ "hits": [] }).to_string());
		})
		.await;
	server
		.mock_async(|when, then| {
			when.method(GET).path("/broken");
			then.status(500).body("boom");
		})
		.await;

	let client = WebClient::default();

	let value = client.get_json(&server.url("/api/")).await?;
	assert_eq!(value, json!({ "hits": [] }));
	assert!(client.get_json(&server.url("/broken")).await.is_err());

	Ok(())
}

// endregion: --- WebClient

// region:    --- Resolver over http

#[tokio::test]
#[serial]
async fn test_webc_resolver_falls_back_to_pixabay() -> Result<()> {
	if should_skip_httpmock() {
		return Ok(());
	}
	let server = MockServer::start_async().await;
	let unsplash = server
		.mock_async(|when, then| {
			when.method(GET).path("/unsplash/512x512/");
			then.status(404);
		})
		.await;
	let pixabay = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/api/")
				.query_param("key", "test-key")
				.query_param("q", "red,car")
				.query_param("min_width", "512");
			then.status(200).header("content-type", "application/json").body(
				json!({
					"total": 1,
					"hits": [{ "webformatURL": "https://cdn.pixabay.com/red-car.jpg", "tags": "car, red" }]
				})
				.to_string(),
			);
		})
		.await;
	let seed = generate_seed("a red car");
	let picsum_path = format!("/picsum/seed/{seed}/512/512");
	let picsum = server
		.mock_async(|when, then| {
			when.method(GET).path(picsum_path.as_str());
			then.status(200).header("content-type", "image/jpeg").body("jpg");
		})
		.await;

	let resolver = Resolver::builder()
		.with_endpoints(Endpoints::from_base_url(&server.base_url()))
		.with_pixabay_key(Some(ApiKey::from_key("test-key")))
		.with_random(FixedRandom(0))
		.build()?;

	let res = resolver.resolve("a red car", None).await;

	assert_eq!(res.method, ResolveMethod::Pixabay);
	assert_eq!(res.url, "https://cdn.pixabay.com/red-car.jpg");
	unsplash.assert_async().await;
	pixabay.assert_async().await;
	picsum.assert_calls(0);

	Ok(())
}

#[tokio::test]
#[serial]
async fn test_webc_resolver_pixabay_key_from_env() -> Result<()> {
	if should_skip_httpmock() {
		return Ok(());
	}
	let server = MockServer::start_async().await;
	let pixabay = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/").query_param("key", "env-key");
			then.status(200)
				.header("content-type", "application/json")
				.body(json!({ "hits": [{ "webformatURL": "https://cdn.pixabay.com/x.jpg" }] }).to_string());
		})
		.await;

	let resolver = Resolver::builder()
		.with_chain([imgresolve::ProviderKind::Pixabay])
		.with_endpoints(Endpoints::from_base_url(&server.base_url()))
		.with_pixabay_key(Some(ApiKey::from_env(KEY_ENV)))
		.build()?;

	std::env::remove_var(KEY_ENV);
	let missing = resolver.resolve("x-ray", None).await;
	assert!(missing.is_placeholder());
	pixabay.assert_calls(0);

	std::env::set_var(KEY_ENV, "env-key");
	let found = resolver.resolve("x-ray", None).await;
	std::env::remove_var(KEY_ENV);

	assert_eq!(found.method, ResolveMethod::Pixabay);
	assert_eq!(found.url, "https://cdn.pixabay.com/x.jpg");
	pixabay.assert_async().await;

	Ok(())
}

#[tokio::test]
#[serial]
async fn test_webc_resolver_everything_down() -> Result<()> {
	if should_skip_httpmock() {
		return Ok(());
	}
	let server = MockServer::start_async().await;

	let resolver = Resolver::builder()
		.with_endpoints(Endpoints::from_base_url(&server.base_url()))
		.with_pixabay_key(Some(ApiKey::from_key("test-key")))
		.with_random(FixedRandom(3))
		.build()?;

	let res = resolver.resolve("Quiet harbor", None).await;

	assert!(res.success);
	assert!(res.fallback_used);
	assert_eq!(
		res.url,
		format!("{}/placeholder/512x512/96CEB4/ffffff?text=Quiet%20harbor", server.base_url())
	);

	Ok(())
}

// endregion: --- Resolver over http
