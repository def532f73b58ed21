use log::debug;

/// Visible text for a file link: the containing folder's name, an
/// underscore, then the file name with its extension kept
///
/// ```
/// assert_eq!(listing::file_label("2024", "report.txt"), "2024_report.txt");
/// ```
pub fn file_label(directory_name: &str, file_name: &str) -> String {
    debug!(
        "Labelling file {:?} in folder {:?}",
        file_name, directory_name
    );
    format!("{}_{}", directory_name, file_name)
}
