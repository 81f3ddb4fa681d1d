/// Formatter adapters for the license report
mod table_formatter;

pub use table_formatter::{TableFormatter, ALL_CLEAR_MESSAGE};
