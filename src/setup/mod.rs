//! Errors that can occur while initializing everything.

mod error;
pub use error::Error;
