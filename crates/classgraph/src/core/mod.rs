//! Core abstractions shared by the model and its front ends
//!
//! Errors, the storage trait, and logging setup.

mod database;
mod error;
pub mod logging;

pub use database::*;
pub use error::*;
pub use logging::*;
