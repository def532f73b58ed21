use listing::DirectoryListing;
use std::fmt;
use std::path::{Path, PathBuf};

/// Summary of a completed indexing run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexReport {
    /// Absolute root of the run
    pub root: PathBuf,
    /// Number of directories visited
    pub directories: usize,
    /// Number of folder links written across all documents
    pub folder_links: usize,
    /// Number of file links written across all documents
    pub file_links: usize,
    /// Every document written, in the order it was written
    pub written: Vec<PathBuf>,
}

impl IndexReport {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Record one indexed directory and the document written for it
    pub fn record(&mut self, listing: &DirectoryListing, document: PathBuf) {
        self.directories += 1;
        self.folder_links += listing.folders().len();
        self.file_links += listing.files().len();
        self.written.push(document);
    }

    /// Written documents relative to the root
    pub fn written_relative(&self) -> Vec<PathBuf> {
        self.written
            .iter()
            .map(|path| relative_to(path, &self.root))
            .collect()
    }
}

/// `path` relative to `base`, or `path` unchanged if no relative form exists
pub(crate) fn relative_to(path: &Path, base: &Path) -> PathBuf {
    pathdiff::diff_paths(path, base).unwrap_or_else(|| path.to_path_buf())
}

impl fmt::Display for IndexReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} directories indexed ({} folder links, {} file links) under {}",
            self.directories,
            self.folder_links,
            self.file_links,
            self.root.display()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use listing::{Entry, EntryKind};

    #[test]
    fn test_record() {
        let mut report = IndexReport::new("/data");
        let listing = DirectoryListing::new(
            "/data",
            vec![
                Entry::new("photos", EntryKind::Folder),
                Entry::new("notes.txt", EntryKind::File),
                Entry::new("todo.txt", EntryKind::File),
            ],
        )
        .unwrap();

        report.record(&listing, PathBuf::from("/data/index.html"));
        report.record(
            &DirectoryListing::new("/data/photos", Vec::new()).unwrap(),
            PathBuf::from("/data/photos/index.html"),
        );

        assert_eq!(report.directories, 2);
        assert_eq!(report.folder_links, 1);
        assert_eq!(report.file_links, 2);
        assert_eq!(
            report.written_relative(),
            vec![
                PathBuf::from("index.html"),
                PathBuf::from("photos/index.html")
            ]
        );
        assert_eq!(
            report.to_string(),
            "2 directories indexed (1 folder links, 2 file links) under /data"
        );
    }
}
