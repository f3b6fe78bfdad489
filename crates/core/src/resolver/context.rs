// Resolution request - the per-reference input to the engine

use serde::{Deserialize, Serialize};

/// Input to one resolution call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResolutionRequest {
    /// Reference target as written, index annotation already stripped.
    pub text: String,
    /// Name of the document containing the reference.
    pub doc: String,
    /// Line number of the reference within `doc`.
    pub line: usize,
    /// Relative path from the referencing document up to the docs root,
    /// e.g. `"../.."`.
    pub root: String,
}

impl ResolutionRequest {
    pub fn new(
        text: impl Into<String>,
        doc: impl Into<String>,
        line: usize,
        root: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            doc: doc.into(),
            line,
            root: root.into(),
        }
    }
}
