/// Shared kernel - error types, result alias and file validation
pub mod error;
pub mod result;
pub mod security;

pub use result::Result;
