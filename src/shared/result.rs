/// Result alias used across the crate; errors are `anyhow::Error` so
/// adapters can attach context on top of `SbomError`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
