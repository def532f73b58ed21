//! Configuration options for an indexing run.

/// Name of the generated document written into every directory.
pub const DEFAULT_INDEX_FILE_NAME: &str = "index.html";

/// Configuration options for an indexing run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexOptions {
    /// File name of the generated document.
    pub index_file_name: String,

    /// Whether the generated document is left out of its own directory's
    /// file list. When false, a document written by an earlier run shows up
    /// as an ordinary file on the next run.
    pub exclude_index_file: bool,

    /// Whether folders reached through symbolic links are descended into.
    /// They are always listed.
    pub follow_symlinks: bool,
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self {
            index_file_name: DEFAULT_INDEX_FILE_NAME.to_string(),
            exclude_index_file: false,
            follow_symlinks: false,
        }
    }
}

impl IndexOptions {
    /// Create new options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the file name of the generated document.
    pub fn index_file_name(mut self, name: impl Into<String>) -> Self {
        self.index_file_name = name.into();
        self
    }

    /// Leave the generated document out of the listing it describes.
    pub fn exclude_index_file(mut self, exclude: bool) -> Self {
        self.exclude_index_file = exclude;
        self
    }

    /// Descend into folders reached through symbolic links.
    pub fn follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }
}
