/// Filesystem adapters for file I/O operations
mod allow_list_file;
mod file_reader;

pub use allow_list_file::FileAllowList;
pub use file_reader::FileSystemReader;
