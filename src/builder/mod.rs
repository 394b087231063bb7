//! Builder API for ergonomic configuration construction.
//!
//! This module provides fluent builders and a declarative macro for
//! assembling configurations with minimal boilerplate. Unlike hand-written
//! configuration literals, the builders catch missing and duplicate
//! declarations at build time.

pub mod config;
pub mod error;
pub mod macros;
pub mod state;

pub use config::ConfigurationBuilder;
pub use error::BuildError;
pub use state::StateBuilder;
