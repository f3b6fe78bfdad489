// Link rendering - anchor targets and the renderable reference node

use crate::model::reference::{Reference, ReferenceNode};
use crate::registry::{DEFINITION_SUBDIR, KNOB_DEFINITION_FILE, TEMPLATE_DEFINITION_FILE};
use crate::resolver::diagnostics::Resolution;

/// Link target for a knob anchor.
pub fn knob_href(root: &str, id: &str) -> String {
    format!("{root}/{DEFINITION_SUBDIR}/{KNOB_DEFINITION_FILE}.html#{id}")
}

/// Link target for a template anchor.
pub fn template_href(root: &str, id: &str) -> String {
    format!("{root}/{DEFINITION_SUBDIR}/{TEMPLATE_DEFINITION_FILE}.html#{id}")
}

/// Relative prefix from a document `depth` directories below the docs
/// root. Depth zero means the document sits at the root itself.
pub fn root_prefix(depth: usize) -> String {
    if depth == 0 {
        ".".to_string()
    } else {
        vec![".."; depth].join("/")
    }
}

/// Build the renderable node for one resolved reference.
///
/// Display text prefers the explicit title. The index entry is emitted
/// only when requested and defaults to the reference name when the
/// source gave no annotation.
pub fn build_reference_node(
    reference: &Reference,
    resolution: &Resolution,
    with_index: bool,
) -> ReferenceNode {
    let text = reference
        .title
        .clone()
        .unwrap_or_else(|| reference.name.clone());
    let index_entry = with_index.then(|| {
        reference
            .index
            .clone()
            .unwrap_or_else(|| reference.name.clone())
    });
    ReferenceNode {
        text,
        href: resolution.href.clone(),
        index_entry,
    }
}
