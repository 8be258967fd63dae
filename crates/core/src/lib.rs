//! Domain models, errors, and repository contracts for the launchfeed data layer.
//!
//! This crate is storage- and transport-agnostic: the remote provider crate and
//! the SQLite storage crate both depend on it and meet at the traits defined
//! here.

pub mod errors;
pub mod launches;

pub use errors::{Error, Result};
