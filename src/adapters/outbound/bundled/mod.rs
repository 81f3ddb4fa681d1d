/// Adapters for data compiled into the binary
mod allow_list;

pub use allow_list::BundledAllowList;
