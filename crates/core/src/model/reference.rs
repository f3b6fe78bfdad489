// Reference types - one in-text macro reference and its renderable output

use serde::{Deserialize, Serialize};

/// One in-text macro reference. Ephemeral: consumed by a single
/// resolution call and discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    /// Reference target as written, annotation stripped.
    pub name: String,
    /// Display title overriding the target text, when the source gave one.
    pub title: Option<String>,
    /// Index annotation from a `NAME<annotation>` form.
    pub index: Option<String>,
    /// Name of the document containing the reference.
    pub doc: String,
    /// Line number of the reference within `doc`.
    pub line: usize,
}

/// Renderable output for one resolved reference.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReferenceNode {
    pub text: String,
    pub href: String,
    #[serde(default)]
    pub index_entry: Option<String>,
}

/// Split reference text into target name and optional index annotation.
///
/// `DAGMAN_MAX_JOBS_IDLE<dagman limits>` yields the name plus the
/// annotation. A `<` at position 0 is part of the name itself, so the
/// literal `<SUBSYS>` knob stays referencable.
pub fn parse_reference_text(text: &str) -> (String, Option<String>) {
    if let Some(open) = text.find('<') {
        if open > 0 {
            if let Some(close) = text[open..].find('>') {
                let name = text[..open].trim_end().to_string();
                let index = text[open + 1..open + close].to_string();
                return (name, Some(index));
            }
        }
    }
    (text.to_string(), None)
}
