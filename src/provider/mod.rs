//! The provider module holds the provider identities, the per call context,
//! and the static dispatch from a `ProviderKind` to its implementation.

// region:    --- Modules

mod dispatcher;
mod provider_context;
mod provider_kind;
mod providers;

pub use provider_kind::*;

pub(crate) use dispatcher::*;
pub(crate) use provider_context::*;
pub(crate) use providers::Placeholder;

pub use providers::PLACEHOLDER_PALETTE;

// endregion: --- Modules
