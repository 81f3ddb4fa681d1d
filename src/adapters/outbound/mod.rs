/// Outbound adapters - Infrastructure implementations of outbound ports
pub mod bundled;
pub mod console;
pub mod filesystem;
pub mod formatters;
