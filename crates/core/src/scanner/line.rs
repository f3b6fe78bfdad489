// Line classifier - tags one definition-source line before any registry
// mutation happens

/// Sentinel marking an inline knob definition.
const KNOB_SENTINEL: &str = "macro-def";
/// Sentinel marking a template declaration or entry.
const TEMPLATE_SENTINEL: &str = "config-template";
/// Inline-code-span delimiter of the documentation format.
const DELIMITER: char = '`';

/// Classification of one definition-source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// No sentinel, or no usable delimiter pair.
    Skip,
    /// Inline knob definition; carries the extracted knob name.
    KnobDefinition(String),
    /// Bare template category declaration.
    TemplateCategory(String),
    /// Template entry with its category annotation.
    TemplateEntry { category: String, template: String },
}

/// Classify one line of a definition source document.
pub fn classify(line: &str) -> LineKind {
    let line = line.trim();
    if line.contains(KNOB_SENTINEL) {
        return classify_knob(line);
    }
    if line.contains(TEMPLATE_SENTINEL) {
        return classify_template(line);
    }
    LineKind::Skip
}

fn classify_knob(line: &str) -> LineKind {
    let Some(span) = code_span(line) else {
        return LineKind::Skip;
    };
    // A bracketed suffix is documentation-only, not part of the name.
    let name = match span.find('[') {
        Some(info) => &span[..info],
        None => span,
    };
    if name.is_empty() {
        return LineKind::Skip;
    }
    LineKind::KnobDefinition(name.to_string())
}

fn classify_template(line: &str) -> LineKind {
    let Some(start) = line.find(DELIMITER) else {
        return LineKind::Skip;
    };
    let start = start + DELIMITER.len_utf8();

    let Some(open) = line.find('<') else {
        // No category annotation: the span itself declares a category.
        let Some(span) = code_span(line) else {
            return LineKind::Skip;
        };
        if span.is_empty() {
            return LineKind::Skip;
        }
        return LineKind::TemplateCategory(span.to_uppercase());
    };

    let Some(close) = line.rfind('>') else {
        return LineKind::Skip;
    };
    if close <= open {
        return LineKind::Skip;
    }

    // Template name runs from the delimiter to the parenthetical suffix if
    // present, else to the category annotation.
    let end = line.find('(').unwrap_or(open);
    if end < start {
        return LineKind::Skip;
    }
    let template = line[start..end].trim();
    if template.is_empty() {
        return LineKind::Skip;
    }
    let category = line[open + 1..close].trim();
    if category.is_empty() {
        return LineKind::Skip;
    }

    LineKind::TemplateEntry {
        category: category.to_uppercase(),
        template: template.to_uppercase(),
    }
}

/// Text between the first and last delimiter on the line, if a pair exists.
fn code_span(line: &str) -> Option<&str> {
    let begin = line.find(DELIMITER)? + DELIMITER.len_utf8();
    let end = line.rfind(DELIMITER)?;
    if end < begin {
        return None;
    }
    Some(&line[begin..end])
}
