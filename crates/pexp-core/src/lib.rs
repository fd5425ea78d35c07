//! # pexp-core
//!
//! Shared error taxonomy for the pexp workspace.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;

pub use error::{Error, Result};
