//! Mock implementations for testing.
//!
//! # Available Mocks
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`MockQuizGenerator`] - Scripted generation outcomes
//! - [`MockViewLoader`] - Immediate view resolution with injectable failures

pub mod generator;
pub mod http;
pub mod loader;

pub use generator::{MockOutcome, MockQuizGenerator};
pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use loader::MockViewLoader;
