//! Concrete implementations of trait abstractions.
//!
//! This module provides the production adapters implementing the traits
//! defined in `crate::traits`, plus test doubles.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`GeneratorSource`] - ephemeral data source backed by seeded generation
//! - [`RemoteSource`] - durable data source backed by the HTTP API
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - Configurable HTTP responses

pub mod generator;
pub mod mock;
pub mod remote;
pub mod reqwest_http;

pub use generator::GeneratorSource;
pub use mock::MockHttpClient;
pub use remote::RemoteSource;
pub use reqwest_http::ReqwestHttpClient;
