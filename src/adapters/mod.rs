//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles for every seam in
//! `crate::traits`.

pub mod mock;
pub mod reqwest_http;

pub use mock::{MockHttpClient, MockQuizGenerator, MockViewLoader};
pub use reqwest_http::ReqwestHttpClient;
