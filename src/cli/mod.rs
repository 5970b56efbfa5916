//! Command-line interface.
//!
//! ```ignore
//! match parse_args(std::env::args()) {
//!     CliCommand::Version => println!("{}", version_line()),
//!     CliCommand::RunTui(options) => run(options.apply(AppConfig::from_env())),
//! }
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, CliOptions};
pub use version::{version_line, VERSION};
