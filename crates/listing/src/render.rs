//! Rendering a listing into a static HTML index document

use html_escape::{encode_single_quoted_attribute, encode_text};
use std::fmt;

use crate::directory::DirectoryListing;
use crate::label::file_label;

const HEADER: &[&str] = &[
    "<!DOCTYPE html>",
    "<html lang='en'>",
    "<head>",
    "    <meta charset='UTF-8'>",
    "    <title>Directory Listing</title>",
    "    <style>",
    "        body { font-family: Arial, sans-serif; margin: 20px; }",
    "        .nav-link { display: block; margin: 10px 0; }",
    "        .file-link { display: block; margin: 5px 0; }",
    "        .folder { color: blue; }",
    "        .file { color: black; }",
    "    </style>",
    "</head>",
    "<body>",
];

const PARENT_LINK: &[&str] = &[
    "    <a href='../' class='nav-link'>Parent Directory</a>",
    "    <hr>",
];

const FOOTER: &[&str] = &[
    "    <hr>",
    "    <small>Generated automatically</small>",
    "</body>",
    "</html>",
];

/// A generated index document, held as its ordered lines
///
/// The document text is the lines joined with `\n`, without a trailing
/// newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexDocument {
    lines: Vec<String>,
    text: String,
}

impl IndexDocument {
    /// Render the document describing `listing`
    pub fn render(listing: &DirectoryListing) -> Self {
        let mut lines: Vec<String> = HEADER.iter().map(|l| l.to_string()).collect();

        if listing.has_parent() {
            lines.extend(PARENT_LINK.iter().map(|l| l.to_string()));
        }

        if !listing.folders().is_empty() {
            lines.push("    <h2>Folders:</h2>".to_string());
            for folder in listing.folder_names() {
                lines.push(format!(
                    "    <a href='{}/' class='nav-link folder'>{}</a>",
                    encode_single_quoted_attribute(folder),
                    encode_text(folder)
                ));
            }
        }

        if !listing.files().is_empty() {
            lines.push("    <h2>Files:</h2>".to_string());
            for file in listing.file_names() {
                let label = file_label(listing.name(), file);
                lines.push(format!(
                    "    <a href='{}' class='file-link file'>{}</a>",
                    encode_single_quoted_attribute(file),
                    encode_text(&label)
                ));
            }
        }

        lines.extend(FOOTER.iter().map(|l| l.to_string()));

        let text = lines.join("\n");
        Self { lines, text }
    }

    /// The document's lines in order
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The full document text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The document as UTF-8 bytes, ready to be written
    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }
}

impl fmt::Display for IndexDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{Entry, EntryKind};

    fn listing(path: &str, entries: Vec<Entry>) -> DirectoryListing {
        DirectoryListing::new(path, entries).unwrap()
    }

    #[test]
    fn test_empty_listing_has_no_headings() {
        let doc = IndexDocument::render(&listing("/data/photos", vec![]));

        assert!(!doc.as_str().contains("Folders:"));
        assert!(!doc.as_str().contains("Files:"));
        assert_eq!(doc.lines().len(), HEADER.len() + PARENT_LINK.len() + FOOTER.len());
    }

    #[test]
    fn test_no_trailing_newline() {
        let doc = IndexDocument::render(&listing("/data", vec![]));
        assert!(doc.as_str().starts_with("<!DOCTYPE html>\n"));
        assert!(doc.as_str().ends_with("</html>"));
        assert_eq!(doc.to_string(), doc.as_str());
    }

    #[cfg(unix)]
    #[test]
    fn test_parent_link_absent_at_filesystem_root() {
        let doc = IndexDocument::render(&listing("/", vec![]));
        assert!(!doc.as_str().contains("Parent Directory"));

        let doc = IndexDocument::render(&listing("/data", vec![]));
        assert!(doc.as_str().contains("Parent Directory"));
    }

    #[test]
    fn test_file_link_uses_name_as_href_and_label_as_text() {
        let doc = IndexDocument::render(&listing(
            "/archive/2024",
            vec![Entry::new("report.txt", EntryKind::File)],
        ));

        assert!(doc
            .lines()
            .iter()
            .any(|l| l == "    <a href='report.txt' class='file-link file'>2024_report.txt</a>"));
    }

    #[test]
    fn test_names_are_escaped() {
        let doc = IndexDocument::render(&listing(
            "/data",
            vec![
                Entry::new("it's <here>", EntryKind::Folder),
                Entry::new("a&b.txt", EntryKind::File),
            ],
        ));

        assert!(!doc.as_str().contains("href='it's"));
        assert!(doc.as_str().contains("s &lt;here&gt;/' class='nav-link folder'"));
        assert!(doc.as_str().contains(">it's &lt;here&gt;</a>"));
        assert!(doc.as_str().contains(">data_a&amp;b.txt</a>"));
    }
}
