//! Reading one directory into a sorted listing

use anyhow::{anyhow, Context, Result};
use log::{trace, warn};
use path_clean::PathClean;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::entry::{classify_entry, Entry};

/// The immediate children of one directory, split into folders and files
///
/// Both lists are sorted by name so that rendering the same directory
/// contents always yields the same document. Children that are neither
/// folders nor files are not part of the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryListing {
    /// Absolute path of the directory
    path: PathBuf,
    /// The directory's own name (empty for a filesystem root)
    name: String,
    /// Whether the directory has a parent distinct from itself
    has_parent: bool,
    /// Child folders, sorted by name
    folders: Vec<Entry>,
    /// Child files, sorted by name
    files: Vec<Entry>,
}

impl DirectoryListing {
    /// Build a listing for `path` from already classified entries
    ///
    /// `path` is expected to be absolute; it decides the directory name and
    /// whether a parent link is rendered.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory name is not valid UTF-8.
    pub fn new(
        path: impl Into<PathBuf>,
        entries: impl IntoIterator<Item = Entry>,
    ) -> Result<Self> {
        let path = path.into();

        let name = match path.file_name() {
            Some(name) => name
                .to_str()
                .ok_or_else(|| anyhow!("Directory name {:?} is not valid UTF-8", name))?
                .to_string(),
            None => String::new(),
        };

        let (mut folders, mut files): (Vec<_>, Vec<_>) =
            entries.into_iter().partition(|e| e.kind.is_folder());
        folders.sort_by(|a, b| a.name.cmp(&b.name));
        files.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(Self {
            has_parent: path.parent().is_some(),
            path,
            name,
            folders,
            files,
        })
    }

    /// Read the immediate children of the directory at `path`
    ///
    /// Relative paths are resolved against the current working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be read, a child cannot be
    /// inspected, or a listed name is not valid UTF-8.
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = absolute_path(path.as_ref())
            .with_context(|| format!("Failed to resolve {}", path.as_ref().display()))?;

        let mut entries = Vec::new();

        let dir = fs::read_dir(&path)
            .with_context(|| format!("Failed to read directory {}", path.display()))?;

        for dir_entry in dir {
            let dir_entry =
                dir_entry.with_context(|| format!("Failed to read directory {}", path.display()))?;
            let entry_path = dir_entry.path();

            let is_symlink = dir_entry
                .file_type()
                .with_context(|| format!("Failed to inspect {}", entry_path.display()))?
                .is_symlink();

            let kind = classify_entry(&entry_path)
                .with_context(|| format!("Failed to inspect {}", entry_path.display()))?;

            let Some(kind) = kind else {
                warn!(
                    "Skipping {}: neither a folder nor a file",
                    entry_path.display()
                );
                continue;
            };

            let name = dir_entry.file_name().into_string().map_err(|raw| {
                anyhow!(
                    "File name {:?} in {} is not valid UTF-8",
                    raw,
                    path.display()
                )
            })?;

            trace!("Classified {} as {}", entry_path.display(), kind);

            entries.push(Entry {
                name,
                kind,
                is_symlink,
            });
        }

        Self::new(path, entries)
    }

    /// Absolute path of the directory
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The directory's own name, empty for a filesystem root
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the directory has a parent distinct from itself
    pub fn has_parent(&self) -> bool {
        self.has_parent
    }

    /// Child folders, sorted by name
    pub fn folders(&self) -> &[Entry] {
        &self.folders
    }

    /// Child files, sorted by name
    pub fn files(&self) -> &[Entry] {
        &self.files
    }

    /// Iterate over the child folder names in order
    pub fn folder_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.folders.iter().map(|e| e.name.as_str())
    }

    /// Iterate over the child file names in order
    pub fn file_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.files.iter().map(|e| e.name.as_str())
    }

    /// Returns true if the listing has neither folders nor files
    pub fn is_empty(&self) -> bool {
        self.folders.is_empty() && self.files.is_empty()
    }

    /// Remove the file called `name` from the listing
    ///
    /// Returns true if such a file was listed.
    pub fn exclude_file(&mut self, name: &str) -> bool {
        let before = self.files.len();
        self.files.retain(|e| e.name != name);
        self.files.len() != before
    }
}

/// Make `path` absolute against the current working directory
///
/// `.` and `..` components are removed lexically; symbolic links are not
/// resolved.
pub fn absolute_path(path: &Path) -> io::Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf().clean())
    } else {
        Ok(env::current_dir()?.join(path).clean())
    }
}
