//! Shared text normalisation helpers for comparing rendered documents.

/// Normalises line endings to `\n` and trims trailing whitespace from every
/// line and from the end of the document.
///
/// # Examples
///
/// ```
/// use test_helpers::text::normalize_document;
///
/// assert_eq!(normalize_document("a: 1  \r\nb: 2\r\n\r\n"), "a: 1\nb: 2");
/// ```
#[must_use]
pub fn normalize_document(value: &str) -> String {
    value
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
        .trim_end()
        .to_owned()
}
