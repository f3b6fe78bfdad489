// Diagnostic types - resolution outcomes and non-fatal warnings

use std::fmt;

use serde::{Deserialize, Serialize};

/// How a reference target was matched against the registries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MatchOutcome {
    /// Verbatim hit in the exact or special-case knob list.
    ExactKnob,
    /// First wildcard or parameterized pattern that fully matched.
    PatternKnob,
    /// No knob matched; the raw candidate was used for the link.
    UnknownKnob,
    /// Bare category reference found in the template registry.
    TemplateCategory,
    /// Category:template pair found in the template registry.
    Template,
    /// Category missing from the template registry.
    UnknownTemplateCategory,
    /// Category present but the template missing from its sequence.
    UnknownTemplate,
}

impl MatchOutcome {
    /// Whether the reference resolved without a warning.
    pub fn is_resolved(&self) -> bool {
        !matches!(
            self,
            MatchOutcome::UnknownKnob
                | MatchOutcome::UnknownTemplateCategory
                | MatchOutcome::UnknownTemplate
        )
    }
}

/// Non-fatal problem attached to a resolution. The build log collects
/// these; they never halt document generation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Warning {
    pub doc: String,
    pub line: usize,
    pub message: String,
}

impl Warning {
    pub fn new(doc: impl Into<String>, line: usize, message: impl Into<String>) -> Self {
        Self {
            doc: doc.into(),
            line,
            message: message.into(),
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {} | {}", self.doc, self.line, self.message)
    }
}

/// Result of resolving one reference.
///
/// Canonical id and link target are always produced, even for
/// unresolvable references: the build degrades to a dangling anchor
/// rather than aborting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Resolution {
    pub canonical: String,
    pub href: String,
    pub outcome: MatchOutcome,
    #[serde(default)]
    pub warning: Option<Warning>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_display_carries_location() {
        let warning = Warning::new("users-manual/priorities", 42, "Config knob 'X' not found");
        assert_eq!(
            warning.to_string(),
            "users-manual/priorities @ 42 | Config knob 'X' not found"
        );
    }

    #[test]
    fn test_outcome_resolved_partition() {
        assert!(MatchOutcome::ExactKnob.is_resolved());
        assert!(MatchOutcome::PatternKnob.is_resolved());
        assert!(MatchOutcome::Template.is_resolved());
        assert!(MatchOutcome::TemplateCategory.is_resolved());
        assert!(!MatchOutcome::UnknownKnob.is_resolved());
        assert!(!MatchOutcome::UnknownTemplateCategory.is_resolved());
        assert!(!MatchOutcome::UnknownTemplate.is_resolved());
    }

    #[test]
    fn test_resolution_serializes_with_snake_case_outcome() {
        let resolution = Resolution {
            canonical: "MAX_JOBS_RUNNING".to_string(),
            href: "./admin-manual/configuration-macros.html#MAX_JOBS_RUNNING".to_string(),
            outcome: MatchOutcome::ExactKnob,
            warning: None,
        };
        let json = serde_json::to_value(&resolution).unwrap();
        assert_eq!(json["outcome"], "exact_knob");
        assert!(json["warning"].is_null());
    }
}
