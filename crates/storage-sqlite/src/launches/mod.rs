//! SQLite persistence for launch records.

mod model;
mod repository;

pub use model::LaunchDB;
pub use repository::LaunchRepository;
