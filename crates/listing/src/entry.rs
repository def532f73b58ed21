//! Classification of a directory's immediate children

use derive_more::Display;
use std::fs;
use std::io;
use std::path::Path;

/// The kind of a listed child
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum EntryKind {
    /// A directory, linked to with a trailing slash
    #[display(fmt = "Folder")]
    Folder,
    /// A regular file, linked to by its name
    #[display(fmt = "File")]
    File,
}

impl EntryKind {
    /// Map a file type onto a listed kind
    ///
    /// Anything that is neither a directory nor a regular file (sockets,
    /// devices, fifos) has no kind and is not listed.
    pub fn from_file_type(file_type: fs::FileType) -> Option<Self> {
        if file_type.is_dir() {
            Some(EntryKind::Folder)
        } else if file_type.is_file() {
            Some(EntryKind::File)
        } else {
            None
        }
    }

    /// Returns true if this is a folder
    pub const fn is_folder(self) -> bool {
        matches!(self, EntryKind::Folder)
    }

    /// Returns true if this is a file
    pub const fn is_file(self) -> bool {
        matches!(self, EntryKind::File)
    }
}

/// A single listed child of a directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// The child's name (not full path)
    pub name: String,
    /// Folder or file, after following symbolic links
    pub kind: EntryKind,
    /// Whether the child itself is a symbolic link
    pub is_symlink: bool,
}

impl Entry {
    /// Create a new entry that is not a symbolic link
    pub fn new(name: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            kind,
            is_symlink: false,
        }
    }

    /// Create a new entry reached through a symbolic link
    pub fn linked(name: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            is_symlink: true,
            ..Self::new(name, kind)
        }
    }
}

/// Classify the filesystem object at `path`, following symbolic links
///
/// Returns `Ok(None)` for objects that are neither folders nor files,
/// including symbolic links whose target cannot be resolved.
///
/// # Errors
///
/// Returns the underlying I/O error if `path` itself cannot be inspected.
pub fn classify_entry(path: &Path) -> io::Result<Option<EntryKind>> {
    match fs::metadata(path) {
        Ok(metadata) => Ok(EntryKind::from_file_type(metadata.file_type())),
        Err(err) => {
            let dangling = fs::symlink_metadata(path)
                .map(|m| m.file_type().is_symlink())
                .unwrap_or(false);
            if dangling {
                Ok(None)
            } else {
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_entry_kind() {
        assert!(EntryKind::Folder.is_folder());
        assert!(!EntryKind::Folder.is_file());
        assert!(EntryKind::File.is_file());
        assert!(!EntryKind::File.is_folder());
        assert_eq!(EntryKind::Folder.to_string(), "Folder");
        assert_eq!(EntryKind::File.to_string(), "File");
    }

    #[test]
    fn test_entry_constructors() {
        let entry = Entry::new("photos", EntryKind::Folder);
        assert_eq!(entry.name, "photos");
        assert!(!entry.is_symlink);

        let linked = Entry::linked("latest", EntryKind::Folder);
        assert_eq!(linked.kind, EntryKind::Folder);
        assert!(linked.is_symlink);
    }

    #[test]
    fn test_classify_folder_and_file() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("dir")).unwrap();
        fs::write(temp.path().join("notes.txt"), "notes").unwrap();

        assert_eq!(
            classify_entry(&temp.path().join("dir")).unwrap(),
            Some(EntryKind::Folder)
        );
        assert_eq!(
            classify_entry(&temp.path().join("notes.txt")).unwrap(),
            Some(EntryKind::File)
        );
    }

    #[test]
    fn test_classify_missing_path_is_an_error() {
        let temp = TempDir::new().unwrap();
        let err = classify_entry(&temp.path().join("missing")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[cfg(unix)]
    #[test]
    fn test_classify_follows_symlinks() {
        use std::os::unix::fs::symlink;

        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("target")).unwrap();
        fs::write(temp.path().join("file.txt"), "x").unwrap();
        symlink(temp.path().join("target"), temp.path().join("dir-link")).unwrap();
        symlink(temp.path().join("file.txt"), temp.path().join("file-link")).unwrap();
        symlink(temp.path().join("nowhere"), temp.path().join("dangling")).unwrap();

        assert_eq!(
            classify_entry(&temp.path().join("dir-link")).unwrap(),
            Some(EntryKind::Folder)
        );
        assert_eq!(
            classify_entry(&temp.path().join("file-link")).unwrap(),
            Some(EntryKind::File)
        );
        assert_eq!(classify_entry(&temp.path().join("dangling")).unwrap(), None);
    }
}
