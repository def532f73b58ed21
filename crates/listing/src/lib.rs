//! Directory listings and the index documents rendered from them
//!
//! A [`DirectoryListing`] is a snapshot of one directory's immediate children,
//! split into folders and files and sorted by name. An [`IndexDocument`] is the
//! static HTML page describing that snapshot.
//!
//! # Example
//!
//! ```no_run
//! use listing::{DirectoryListing, IndexDocument};
//!
//! let listing = DirectoryListing::read("/srv/data").expect("Failed to read directory");
//! let document = IndexDocument::render(&listing);
//! println!("{}", document);
//! ```

mod directory;
mod entry;
mod label;
mod render;

pub use directory::{absolute_path, DirectoryListing};
pub use entry::{classify_entry, Entry, EntryKind};
pub use label::file_label;
pub use render::IndexDocument;
