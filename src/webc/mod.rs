//! Transport capabilities used by the providers, and their reqwest implementation.

// region:    --- Modules

mod capabilities;
mod web_client;

pub use capabilities::*;
pub use web_client::*;

// endregion: --- Modules
