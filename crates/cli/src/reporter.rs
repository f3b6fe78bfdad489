// Check reporting - human-readable and JSON output

use anyhow::Result;
use macrolink_core::resolver::context::ResolutionRequest;
use macrolink_core::resolver::diagnostics::{MatchOutcome, Resolution, Warning};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

/// One resolved reference, retained for verbose and JSON reporting.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedReference {
    pub doc: String,
    pub line: usize,
    pub canonical: String,
    pub outcome: MatchOutcome,
}

/// Aggregated results of one check run.
#[derive(Debug, Default, Serialize)]
pub struct CheckReport {
    pub documents: usize,
    pub references: usize,
    pub resolved: Vec<ResolvedReference>,
    pub warnings: Vec<Warning>,
}

impl CheckReport {
    /// Record one resolution outcome.
    pub fn record(&mut self, request: &ResolutionRequest, resolution: Resolution) {
        self.references += 1;
        self.resolved.push(ResolvedReference {
            doc: request.doc.clone(),
            line: request.line,
            canonical: resolution.canonical,
            outcome: resolution.outcome,
        });
        if let Some(warning) = resolution.warning {
            self.warnings.push(warning);
        }
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Report in human-readable format.
pub fn report_human(report: &CheckReport, verbose: bool) {
    if verbose {
        for entry in &report.resolved {
            println!(
                "  ✓ {} @ {} -> {}",
                entry.doc, entry.line, entry.canonical
            );
        }
    }

    for warning in &report.warnings {
        println!("  ✗ {warning}");
    }

    println!(
        "Checked {} documents, {} references",
        report.documents, report.references
    );
    println!("Warnings: {}", report.warnings.len());
}

/// Report as a single JSON document on stdout.
pub fn report_json(report: &CheckReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use macrolink_core::resolver::diagnostics::Warning;

    fn sample_request(text: &str) -> ResolutionRequest {
        ResolutionRequest::new(text, "users-manual/scheduling", 4, "..")
    }

    #[test]
    fn test_record_counts_references_and_warnings() {
        let mut report = CheckReport::default();
        report.record(
            &sample_request("MAX_JOBS_RUNNING"),
            Resolution {
                canonical: "MAX_JOBS_RUNNING".to_string(),
                href: "../admin-manual/configuration-macros.html#MAX_JOBS_RUNNING".to_string(),
                outcome: MatchOutcome::ExactKnob,
                warning: None,
            },
        );
        report.record(
            &sample_request("NOT_A_KNOB"),
            Resolution {
                canonical: "NOT_A_KNOB".to_string(),
                href: "../admin-manual/configuration-macros.html#NOT_A_KNOB".to_string(),
                outcome: MatchOutcome::UnknownKnob,
                warning: Some(Warning::new("users-manual/scheduling", 4, "not found")),
            },
        );

        assert_eq!(report.references, 2);
        assert_eq!(report.warnings.len(), 1);
        assert!(report.has_warnings());
    }

    #[test]
    fn test_json_shape_is_stable() {
        let mut report = CheckReport::default();
        report.documents = 1;
        report.record(
            &sample_request("NOT_A_KNOB"),
            Resolution {
                canonical: "NOT_A_KNOB".to_string(),
                href: "../admin-manual/configuration-macros.html#NOT_A_KNOB".to_string(),
                outcome: MatchOutcome::UnknownKnob,
                warning: Some(Warning::new("users-manual/scheduling", 4, "not found")),
            },
        );

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["documents"], 1);
        assert_eq!(json["references"], 1);
        assert_eq!(json["resolved"][0]["outcome"], "unknown_knob");
        assert_eq!(json["warnings"][0]["line"], 4);
    }
}
