//! Runtime concerns of the API.
//!
//! This module contains the configuration read at startup, the single error
//! type that HTTP handlers are allowed to return, and the panic hook.

pub mod config;
pub use config::Config;

mod error;
pub use error::{Error, Result};

pub mod panic_hook;
