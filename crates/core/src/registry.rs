// Registry build entry point - loads the two authoritative definition
// documents and scans them into immutable registries

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{CoreError, Result};
use crate::model::{KnobRegistry, TemplateRegistry};
use crate::scanner::{scan_knobs, scan_templates};

/// Subdirectory of the docs root holding both definition documents.
pub const DEFINITION_SUBDIR: &str = "admin-manual";
/// Base name of the knob definition document.
pub const KNOB_DEFINITION_FILE: &str = "configuration-macros";
/// Base name of the template definition document.
pub const TEMPLATE_DEFINITION_FILE: &str = "introduction-to-configuration";

/// The registries a build resolves references against.
///
/// Built once at build start, before any resolution call, and treated as
/// immutable shared data from then on. Safe to share read-only across
/// threads; resolution never mutates it.
#[derive(Debug, Clone, Default)]
pub struct Registries {
    pub knobs: KnobRegistry,
    pub templates: TemplateRegistry,
}

/// Build both registries from the well-known definition documents under
/// `root`.
///
/// A missing or unreadable document is fatal: without the authoritative
/// name lists every reference would be a false warning.
pub fn load_registries(root: &Path) -> Result<Registries> {
    let knob_source = read_definition_file(root, KNOB_DEFINITION_FILE)?;
    let template_source = read_definition_file(root, TEMPLATE_DEFINITION_FILE)?;

    let knobs = scan_knobs(&knob_source)?;
    let templates = scan_templates(&template_source);

    debug!(
        knob_names = knobs.names().len(),
        knob_patterns = knobs.patterns().len(),
        template_categories = templates.categories().len(),
        "registries loaded"
    );

    Ok(Registries { knobs, templates })
}

fn read_definition_file(root: &Path, name: &str) -> Result<String> {
    let path = root.join(DEFINITION_SUBDIR).join(format!("{name}.rst"));
    fs::read_to_string(&path).map_err(|source| CoreError::DefinitionFileRead { path, source })
}
