//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP client operations (GET, POST, PUT, DELETE)
//! - [`DataSource`] - record collection providers (demo generator, live API)

pub mod http;
pub mod source;

pub use http::{Headers, HttpClient, HttpError, Response};
pub use source::{DataSource, Listing, MutationResult, SourceError};
