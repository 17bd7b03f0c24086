/// Filesystem adapters for file I/O and artifact storage
mod file_reader;
mod file_writer;
mod report_store;

pub use file_reader::FileSystemReader;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use report_store::FileSystemReportStore;
