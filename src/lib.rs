//! Campus Connect - a terminal shell for placement prep
//!
//! This library exposes modules for use by the binary and integration tests.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config;
pub mod devserver;
pub mod document;
pub mod error;
pub mod generation;
pub mod logging;
pub mod models;
pub mod registry;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod view_state;
