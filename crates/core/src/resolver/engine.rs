// Resolver engine - resolves one in-text reference against the registries

use crate::registry::Registries;
use crate::resolver::context::ResolutionRequest;
use crate::resolver::diagnostics::{MatchOutcome, Resolution, Warning};
use crate::resolver::renderer::{knob_href, template_href};

/// Case-insensitive prefix marking a template reference.
const TEMPLATE_PREFIX: &str = "use ";

/// Resolve one in-text reference.
///
/// References starting with `use ` (case-insensitive) are template
/// references; everything else is a knob candidate. A link target is
/// produced even when the reference fails to resolve, so the build never
/// aborts on a bad reference.
pub fn resolve(request: &ResolutionRequest, registries: &Registries) -> Resolution {
    let text = request.text.trim();
    if has_template_prefix(text) {
        resolve_template(&text[TEMPLATE_PREFIX.len()..], request, registries)
    } else {
        resolve_knob(text, request, registries)
    }
}

fn has_template_prefix(text: &str) -> bool {
    text.get(..TEMPLATE_PREFIX.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(TEMPLATE_PREFIX))
}

fn resolve_template(
    target: &str,
    request: &ResolutionRequest,
    registries: &Registries,
) -> Resolution {
    let target = target.trim();

    let (canonical, outcome, message) = if target.contains(':') {
        // Only the first two colon-separated fields are significant.
        let mut fields = target.split(':');
        let category = fields.next().unwrap_or_default().trim().to_uppercase();
        let template = fields.next().unwrap_or_default().trim().to_uppercase();
        let canonical = format!("{category}:{template}");

        if !registries.templates.contains_category(&category) {
            let message = format!(
                "Config template category '{category}' is not defined or a typo exists."
            );
            (canonical, MatchOutcome::UnknownTemplateCategory, Some(message))
        } else if !registries.templates.contains_template(&category, &template) {
            let message = format!(
                "Config template '{category}:{template}' is not defined or a typo exists."
            );
            (canonical, MatchOutcome::UnknownTemplate, Some(message))
        } else {
            (canonical, MatchOutcome::Template, None)
        }
    } else {
        let category = target.to_uppercase();
        if registries.templates.contains_category(&category) {
            (category, MatchOutcome::TemplateCategory, None)
        } else {
            let message = format!(
                "Config template category '{category}' is not defined or a typo exists."
            );
            (category, MatchOutcome::UnknownTemplateCategory, Some(message))
        }
    };

    Resolution {
        href: template_href(&request.root, &canonical),
        warning: message.map(|message| Warning::new(request.doc.as_str(), request.line, message)),
        canonical,
        outcome,
    }
}

fn resolve_knob(candidate: &str, request: &ResolutionRequest, registries: &Registries) -> Resolution {
    if registries.knobs.contains(candidate) {
        return Resolution {
            canonical: candidate.to_string(),
            href: knob_href(&request.root, candidate),
            outcome: MatchOutcome::ExactKnob,
            warning: None,
        };
    }

    if let Some(knob) = registries.knobs.match_pattern(candidate) {
        return Resolution {
            canonical: knob.canonical.clone(),
            href: knob_href(&request.root, &knob.canonical),
            outcome: MatchOutcome::PatternKnob,
            warning: None,
        };
    }

    let message = format!(
        "Config knob '{candidate}' not found in defined list. Either a typo or knob needs definition."
    );
    Resolution {
        canonical: candidate.to_string(),
        href: knob_href(&request.root, candidate),
        outcome: MatchOutcome::UnknownKnob,
        warning: Some(Warning::new(request.doc.as_str(), request.line, message)),
    }
}
