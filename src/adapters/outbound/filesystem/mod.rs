/// Filesystem adapters for file I/O operations
mod file_reader;
mod file_writer;
mod workspace_manifest_file;

pub use file_reader::FileSystemReader;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use workspace_manifest_file::WorkspaceManifestFile;
