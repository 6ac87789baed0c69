//! Pure helpers shared by the providers: keyword derivation, seeding, and randomness.

// region:    --- Modules

mod keywords;
mod random;
mod seed;

pub use keywords::*;
pub use random::*;
pub use seed::*;

// endregion: --- Modules
