//! Support utilities for the integration tests.
#![allow(unused)] // Each test file uses a different subset.

mod fakes;

pub use fakes::*;

pub type Result<T> = core::result::Result<T, Box<dyn std::error::Error>>;

/// Skip httpmock tests when the sandbox forbids binding to localhost.
pub fn should_skip_httpmock() -> bool {
	match std::net::TcpListener::bind(("127.0.0.1", 0)) {
		Ok(listener) => {
			drop(listener);
			false
		}
		Err(err) if err.kind() == std::io::ErrorKind::PermissionDenied => {
			eprintln!("skipping httpmock test: sandbox forbids binding to localhost");
			true
		}
		Err(err) => panic!("failed to bind localhost for httpmock tests: {err}"),
	}
}
