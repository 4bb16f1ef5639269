//! Public API surface exposed to runtime clients.
mod errors;

pub use errors::{Result, RuntimeError};
