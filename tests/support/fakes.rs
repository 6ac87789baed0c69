use futures::future::BoxFuture;
use imgresolve::webc::{ImageCheck, SearchApi};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

// region:    --- ScriptedCheck

/// How a scripted check settles for a given url.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
	Load,
	Error,
	/// Never settles.
	Hang,
}

type CheckRule = Arc<dyn Fn(&str) -> CheckOutcome + Send + Sync>;

/// Image check answering from a rule, recording every url it was asked about.
#[derive(Clone)]
pub struct ScriptedCheck {
	rule: CheckRule,
	calls: Arc<Mutex<Vec<String>>>,
}

impl ScriptedCheck {
	pub fn new(rule: impl Fn(&str) -> CheckOutcome + Send + Sync + 'static) -> Self {
		Self {
			rule: Arc::new(rule),
			calls: Arc::new(Mutex::new(Vec::new())),
		}
	}

	pub fn always(outcome: CheckOutcome) -> Self {
		Self::new(move |_| outcome)
	}

	pub fn calls(&self) -> Vec<String> {
		self.calls.lock().unwrap().clone()
	}

	pub fn calls_containing(&self, needle: &str) -> usize {
		self.calls().iter().filter(|url| url.contains(needle)).count()
	}
}

impl ImageCheck for ScriptedCheck {
	fn check<'a>(&'a self, url: &'a str) -> BoxFuture<'a, bool> {
		self.calls.lock().unwrap().push(url.to_string());
		let outcome = (self.rule)(url);
		Box::pin(async move {
			match outcome {
				CheckOutcome::Load => true,
				CheckOutcome::Error => false,
				CheckOutcome::Hang => futures::future::pending::<bool>().await,
			}
		})
	}
}

// endregion: --- ScriptedCheck

// region:    --- ScriptedSearch

/// How a scripted search api answers.
#[derive(Debug, Clone)]
pub enum SearchOutcome {
	Json(Value),
	/// Malformed body.
	Fail,
	Hang,
}

/// Search api returning a fixed outcome, recording every url it was asked about.
#[derive(Clone)]
pub struct ScriptedSearch {
	outcome: SearchOutcome,
	calls: Arc<Mutex<Vec<String>>>,
}

impl ScriptedSearch {
	pub fn new(outcome: SearchOutcome) -> Self {
		Self {
			outcome,
			calls: Arc::new(Mutex::new(Vec::new())),
		}
	}

	/// A search returning the given `(webformatURL, tags)` hits.
	pub fn with_hits(hits: &[(&str, &str)]) -> Self {
		let hits: Vec<Value> = hits
			.iter()
			.map(|(url, tags)| json!({ "webformatURL": url, "tags": tags }))
			.collect();
		Self::new(SearchOutcome::Json(json!({ "total": hits.len(), "hits": hits })))
	}

	pub fn calls(&self) -> Vec<String> {
		self.calls.lock().unwrap().clone()
	}
}

impl SearchApi for ScriptedSearch {
	fn get_json<'a>(&'a self, url: &'a str) -> BoxFuture<'a, imgresolve::Result<Value>> {
		self.calls.lock().unwrap().push(url.to_string());
		let outcome = self.outcome.clone();
		Box::pin(async move {
			match outcome {
				SearchOutcome::Json(value) => Ok(value),
				SearchOutcome::Fail => Ok(serde_json::from_str::<Value>("<html>")?),
				SearchOutcome::Hang => futures::future::pending().await,
			}
		})
	}
}

// endregion: --- ScriptedSearch
