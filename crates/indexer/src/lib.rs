//! Static directory indexes for a whole tree
//!
//! Walks a directory tree and writes an `index.html` listing into every
//! directory, linking to its subfolders, its files and its parent.

mod options;
mod report;
mod walk;

pub use options::{IndexOptions, DEFAULT_INDEX_FILE_NAME};
pub use report::IndexReport;
pub use walk::{index_directory, Indexer};
