//! The image module contains the request, options and result types of a resolution.

// region:    --- Modules

mod image_request;
mod image_result;
mod image_style;
mod resolve_options;

pub use image_request::*;
pub use image_result::*;
pub use image_style::*;
pub use resolve_options::*;

// endregion: --- Modules
