//! Concrete providers. Each one builds its candidate(s) and validates them.

// region:    --- Modules

mod picsum;
mod pixabay;
mod placeholder;
mod unsplash;

pub(crate) use picsum::PicsumProvider;
pub(crate) use pixabay::PixabayProvider;
pub(crate) use placeholder::Placeholder;
pub(crate) use unsplash::UnsplashProvider;

pub use placeholder::PLACEHOLDER_PALETTE;

// endregion: --- Modules
