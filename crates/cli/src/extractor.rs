// Reference extraction - finds macro role occurrences in document text

use lazy_static::lazy_static;
use macrolink_core::model::{parse_reference_text, Reference};
use regex::Regex;

lazy_static! {
    /// One `:macro:`...`` role occurrence.
    static ref ROLE_PATTERN: Regex = Regex::new(r":macro:`([^`]+)`").expect("invalid role regex");
}

/// Extract every macro-role reference from one document.
///
/// Line numbers are 1-based; several references on one line are all
/// reported with that line's number.
pub fn extract_references(doc: &str, source: &str) -> Vec<Reference> {
    let mut references = Vec::new();
    for (index, line) in source.lines().enumerate() {
        for capture in ROLE_PATTERN.captures_iter(line) {
            let (name, annotation) = parse_reference_text(&capture[1]);
            references.push(Reference {
                name,
                title: None,
                index: annotation,
                doc: doc.to_string(),
                line: index + 1,
            });
        }
    }
    references
}
