use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use macrolink_core::resolver::context::ResolutionRequest;
use macrolink_core::resolver::renderer::root_prefix;
use macrolink_core::{load_registries, resolve};
use walkdir::WalkDir;

use crate::config::CheckConfig;
use crate::extractor::extract_references;
use crate::reporter::{report_human, report_json, CheckReport, OutputFormat};

/// Resolve every macro reference under a docs root
#[derive(Debug, Parser)]
pub struct CheckCommand {
    /// Docs root directory containing the definition documents
    #[arg(value_name = "DOCS_ROOT")]
    pub docs_root: PathBuf,

    /// Output format (human, json)
    #[arg(long, value_name = "FORMAT", default_value = "human")]
    pub output: String,

    /// Show every resolved reference, not only warnings
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to a check configuration file (YAML)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl CheckCommand {
    pub fn execute(&self) -> Result<i32> {
        let output = self.output_format()?;
        let config = CheckConfig::load(&self.docs_root, self.config.as_deref())?;

        // Registries are built once, before any resolution, and read-only
        // afterwards. A load failure aborts the whole check.
        let registries = load_registries(&self.docs_root)
            .context("failed to build the knob and template registries")?;

        let mut report = CheckReport::default();
        for document in discover_documents(&self.docs_root)? {
            let relative = document
                .strip_prefix(&self.docs_root)
                .with_context(|| format!("document '{}' outside docs root", document.display()))?
                .to_string_lossy()
                .replace('\\', "/");
            if config.is_ignored(&relative) {
                continue;
            }

            let doc = doc_name(&relative);
            let depth = relative.matches('/').count();
            let root = root_prefix(depth);
            let source = fs::read_to_string(&document)
                .with_context(|| format!("failed to read document '{}'", document.display()))?;

            report.documents += 1;
            for reference in extract_references(doc, &source) {
                let request = ResolutionRequest::new(
                    reference.name.as_str(),
                    reference.doc.as_str(),
                    reference.line,
                    root.as_str(),
                );
                let resolution = resolve(&request, &registries);
                report.record(&request, resolution);
            }
        }

        match output {
            OutputFormat::Human => report_human(&report, self.verbose),
            OutputFormat::Json => report_json(&report)?,
        }

        Ok(if report.has_warnings() && config.fail_on_warnings {
            1
        } else {
            0
        })
    }

    fn output_format(&self) -> Result<OutputFormat> {
        match self.output.as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => bail!("unknown output format '{other}' (expected human or json)"),
        }
    }
}

/// Discover reStructuredText documents under the docs root, sorted for
/// deterministic report order.
fn discover_documents(root: &Path) -> Result<Vec<PathBuf>> {
    let mut documents = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.with_context(|| format!("failed to walk '{}'", root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.path().extension().and_then(|ext| ext.to_str()) == Some("rst") {
            documents.push(entry.into_path());
        }
    }
    Ok(documents)
}

/// Root-relative document name, extension stripped.
fn doc_name(relative: &str) -> &str {
    relative.strip_suffix(".rst").unwrap_or(relative)
}
