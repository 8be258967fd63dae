//! Launch domain models and the local repository contract.

mod launch_model;
mod launch_repository;

pub use launch_model::*;
pub use launch_repository::*;
