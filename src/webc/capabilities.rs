use crate::Result;
use futures::future::BoxFuture;
use serde_json::Value;

/// Checks whether a url serves a loadable image.
///
/// The future may never settle. The resolver bounds it with its check timeout and drops it
/// when the timeout wins, so implementations must be cancel safe.
pub trait ImageCheck: Send + Sync {
	/// Returns `true` when the image loaded, `false` on a load error.
	fn check<'a>(&'a self, url: &'a str) -> BoxFuture<'a, bool>;
}

/// Issues a read-only GET against a JSON search API.
pub trait SearchApi: Send + Sync {
	/// Returns the decoded body of a non-error response.
	fn get_json<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<Value>>;
}
