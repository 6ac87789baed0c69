use rand::Rng;

/// Source of randomness for picking one candidate among many.
///
/// The resolver uses it to choose a search hit and a placeholder color.
/// Inject a fixed implementation to make those choices reproducible.
pub trait RandomSource: Send + Sync {
	/// Returns an index in `0..len`. `len` is always greater than zero.
	fn pick(&self, len: usize) -> usize;
}

/// Thread-local RNG backed source. This is the default.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
	fn pick(&self, len: usize) -> usize {
		if len <= 1 {
			return 0;
		}
		rand::rng().random_range(0..len)
	}
}

/// Always returns the same index, clamped to the candidate count.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixedRandom(pub usize);

impl RandomSource for FixedRandom {
	fn pick(&self, len: usize) -> usize {
		self.0.min(len.saturating_sub(1))
	}
}

// region:    --- Tests


// endregion: --- Tests
