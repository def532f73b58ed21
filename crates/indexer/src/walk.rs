//! Pre-order traversal that writes an index document into every directory

use anyhow::{Context, Result};
use listing::{absolute_path, DirectoryListing, IndexDocument};
use log::{debug, info};
use std::fs;
use std::path::Path;

use crate::options::IndexOptions;
use crate::report::{relative_to, IndexReport};

/// Writes index documents for a directory tree
///
/// Each directory is listed, rendered and written before any of its
/// subdirectories are visited. The listing is always taken before the
/// directory's own document is written, so a freshly written document is
/// never part of the listing it belongs to.
///
/// # Example
///
/// ```no_run
/// use indexer::{IndexOptions, Indexer};
///
/// let indexer = Indexer::new(IndexOptions::default());
/// let report = indexer.index_directory("/srv/data").expect("Failed to index");
/// println!("{}", report);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Indexer {
    options: IndexOptions,
}

impl Indexer {
    pub fn new(options: IndexOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &IndexOptions {
        &self.options
    }

    /// Index `root` and every directory below it
    ///
    /// # Errors
    ///
    /// Stops at the first directory that cannot be read or written. Documents
    /// written before the failure are left in place.
    pub fn index_directory(&self, root: impl AsRef<Path>) -> Result<IndexReport> {
        let root = root.as_ref();
        let root = absolute_path(root)
            .with_context(|| format!("Failed to resolve {}", root.display()))?;

        info!("Indexing directory tree at {}", root.display());

        let mut report = IndexReport::new(&root);
        let mut stack = vec![root.clone()];

        while let Some(dir) = stack.pop() {
            let listing = self.index_one(&dir)?;
            report.record(&listing, dir.join(&self.options.index_file_name));

            // Push in reverse so folders are visited in sorted order
            for folder in listing.folders().iter().rev() {
                let child = dir.join(&folder.name);
                if folder.is_symlink && !self.options.follow_symlinks {
                    debug!(
                        "Not descending into linked folder {}",
                        relative_to(&child, &root).display()
                    );
                    continue;
                }
                stack.push(child);
            }
        }

        info!("{}", report);
        Ok(report)
    }

    /// List, render and write the document for a single directory
    ///
    /// Returns the listing the document was rendered from.
    pub fn index_one(&self, dir: &Path) -> Result<DirectoryListing> {
        let mut listing = DirectoryListing::read(dir)?;

        if self.options.exclude_index_file
            && listing.exclude_file(&self.options.index_file_name)
        {
            debug!(
                "Left {} out of its own listing",
                self.options.index_file_name
            );
        }

        let document = IndexDocument::render(&listing);
        let index_path = listing.path().join(&self.options.index_file_name);

        fs::write(&index_path, document.as_bytes())
            .with_context(|| format!("Failed to write {}", index_path.display()))?;

        debug!(
            "Wrote {} ({} folders, {} files)",
            index_path.display(),
            listing.folders().len(),
            listing.files().len()
        );

        Ok(listing)
    }
}

/// Index `root` and every directory below it with default options
pub fn index_directory(root: impl AsRef<Path>) -> Result<IndexReport> {
    Indexer::default().index_directory(root)
}
