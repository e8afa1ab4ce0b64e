//! Mock implementations for testing.
//!
//! Test doubles for the trait abstractions, letting unit tests drive the
//! data layer without network access.

pub mod http;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
