//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP client operations (GET, POST)
//! - [`QuizGenerator`] - External quiz generation service
//! - [`ViewLoader`] - Lazy resolution of feature views

pub mod generation;
pub mod http;
pub mod loader;

pub use generation::{QuizGenerator, APTITUDE_CATEGORY};
pub use http::{Headers, HttpClient, HttpError, Response};
pub use loader::ViewLoader;
