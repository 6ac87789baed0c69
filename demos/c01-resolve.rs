//! This example demonstrates how to resolve prompts into image urls across the provider chain.

use imgresolve::{ImageStyle, ResolveOptions, Resolver};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();

	let resolver = Resolver::builder().build()?;

	let prompt = "A serene landscape with mountains and a lake at sunset";

	println!("\n--- Resolving image for prompt:\n{prompt}");

	let options = ResolveOptions::default().with_size(1024, 768);
	let res = resolver.resolve(prompt, Some(&options)).await;

	println!("\n--- Resolved with {} (fallback: {})", res.method, res.fallback_used);
	println!("URL: {}", res.url);
	println!("Description: {}", res.description);
	if let Some(keywords) = &res.keywords {
		println!("Keywords: {}", keywords.join(", "));
	}

	for style in [ImageStyle::Vintage, ImageStyle::Minimal] {
		let res = resolver.resolve_styled("a car", style).await;
		println!("\n--- Styled '{style}': {} ({})", res.url, res.method);
	}

	Ok(())
}
