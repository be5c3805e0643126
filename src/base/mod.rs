//! Base types and error handling.
//!
//! - [`error`]: the error taxonomy shared by every layer
//! - [`context`]: helpers attaching lookup context to resolver failures
//! - [`config`]: session tunables

pub mod config;
pub mod context;
pub mod error;
