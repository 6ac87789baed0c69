//! The resolver module contains the `Resolver`, its builder and its configuration.

// region:    --- Modules

mod builder;
mod config;
mod resolver_impl;

pub use builder::*;
pub use config::*;
pub use resolver_impl::*;

// endregion: --- Modules
