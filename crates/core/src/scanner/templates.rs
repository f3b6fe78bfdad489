// Template scanner - folds classified definition lines into a
// TemplateRegistry

use tracing::debug;

use crate::model::template::TemplateRegistry;
use crate::scanner::line::{classify, LineKind};

/// Scan the template definition source into a registry.
pub fn scan_templates(source: &str) -> TemplateRegistry {
    let mut registry = TemplateRegistry::new();
    for line in source.lines() {
        match classify(line) {
            LineKind::TemplateCategory(name) => registry.declare_category(&name),
            LineKind::TemplateEntry { category, template } => {
                registry.add_template(&category, &template);
            }
            LineKind::KnobDefinition(_) | LineKind::Skip => {}
        }
    }
    debug!(
        categories = registry.categories().len(),
        "scanned template definitions"
    );
    registry
}
