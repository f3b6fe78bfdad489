// Knob scanner - folds classified definition lines into a KnobRegistry

use regex::Regex;
use tracing::debug;

use crate::error::{CoreError, Result};
use crate::model::knob::{KnobRegistry, PatternKnob, SPECIAL_CASE_KNOBS};
use crate::scanner::line::{classify, LineKind};

/// Capture group standing in for a wildcard or parameter placeholder.
const PLACEHOLDER_GROUP: &str = "(.+)";

/// Scan the knob definition source into a registry.
///
/// Classification priority per knob name: special-case allow-list, then
/// wildcard (`*`), then parameterized (`<...>`), then exact. Exact and
/// special names are deduplicated and sorted; patterns keep definition
/// order.
pub fn scan_knobs(source: &str) -> Result<KnobRegistry> {
    let mut names: Vec<String> = Vec::new();
    let mut patterns: Vec<(String, String)> = Vec::new();

    for line in source.lines() {
        let LineKind::KnobDefinition(name) = classify(line) else {
            continue;
        };
        if SPECIAL_CASE_KNOBS.contains(&name.as_str()) {
            if !names.contains(&name) {
                names.push(name);
            }
        } else if name.contains('*') {
            let pattern = name.replace('*', PLACEHOLDER_GROUP);
            record_pattern(&mut patterns, pattern, name);
        } else if name.contains('<') {
            if let Some(pattern) = parameter_pattern(&name) {
                record_pattern(&mut patterns, pattern, name);
            }
        } else if !names.contains(&name) {
            names.push(name);
        }
    }

    debug!(
        exact = names.len(),
        patterns = patterns.len(),
        "scanned knob definitions"
    );

    let patterns = patterns
        .into_iter()
        .map(|(pattern, canonical)| compile_pattern(pattern, canonical))
        .collect::<Result<Vec<_>>>()?;

    Ok(KnobRegistry::new(names, patterns))
}

/// Record a derived pattern. When the same pattern was already derived
/// from an earlier definition, the canonical name is silently overwritten
/// while the entry keeps its original position.
fn record_pattern(patterns: &mut Vec<(String, String)>, pattern: String, canonical: String) {
    match patterns.iter_mut().find(|(existing, _)| *existing == pattern) {
        Some((_, name)) => *name = canonical,
        None => patterns.push((pattern, canonical)),
    }
}

/// Derive a pattern from a parameterized knob name by repeatedly replacing
/// the first `<...>` segment (all occurrences of it) with a capture group.
///
/// Returns `None` for a name whose pattern degenerates to a bare capture
/// group: the whole name was one placeholder and would match anything, so
/// it is unusable as a match target and dropped. Also bails out on names
/// with stray, unpairable brackets.
fn parameter_pattern(name: &str) -> Option<String> {
    let mut pattern = name.to_string();
    while let Some(open) = pattern.find('<') {
        let close = pattern.find('>')?;
        if close < open {
            return None;
        }
        let segment = pattern[open..=close].to_string();
        pattern = pattern.replace(&segment, PLACEHOLDER_GROUP);
    }
    if pattern == PLACEHOLDER_GROUP {
        return None;
    }
    Some(pattern)
}

/// Compile a derived pattern with full-match anchoring.
fn compile_pattern(pattern: String, canonical: String) -> Result<PatternKnob> {
    let regex =
        Regex::new(&format!("^(?:{pattern})$")).map_err(|source| CoreError::InvalidKnobPattern {
            knob: canonical.clone(),
            pattern: pattern.clone(),
            source,
        })?;
    Ok(PatternKnob {
        pattern,
        regex,
        canonical,
    })
}
