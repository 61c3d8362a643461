#![forbid(unsafe_code)]

pub mod cli;
pub mod error;
pub mod report;

pub use cli::run_from_env;
pub use error::{ProbeError, Result};
