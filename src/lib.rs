//! Resolve a text prompt into a usable image url.
//!
//! A [`Resolver`] walks a fixed, ordered chain of stock photo providers (Unsplash, Pixabay, Picsum),
//! validates each candidate with a timeout-bounded check, and falls back to a synthesized placeholder
//! url when every provider fails. Resolution never returns an error.
//!
//! ```no_run
//! use imgresolve::{ResolveOptions, Resolver};
//!
//! # async fn run() {
//! let resolver = Resolver::default();
//! let options = ResolveOptions::default().with_size(800, 600);
//! let res = resolver.resolve("A serene mountain lake at sunset", Some(&options)).await;
//! println!("{} ({})", res.url, res.method);
//! # }
//! ```

// region:    --- Modules

mod error;

pub mod image;
pub mod provider;
pub mod resolver;
pub mod support;
pub mod webc;

pub use error::{Error, Result};
pub use image::{ImageRequest, ImageResult, ImageStyle, ResolveOptions};
pub use provider::{ProviderKind, ResolveMethod};
pub use resolver::{ApiKey, Endpoints, Resolver, ResolverBuilder, ResolverConfig};
pub use support::{extract_keywords, generate_seed};

// endregion: --- Modules
