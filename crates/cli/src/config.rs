// Check configuration - optional per-docs-root YAML file

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Name of the optional configuration file looked up in the docs root.
pub const CONFIG_FILE_NAME: &str = ".macrolink.yml";

/// Check-run configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CheckConfig {
    /// Root-relative path substrings of documents to skip.
    pub ignore: Vec<String>,
    /// Exit nonzero when any reference failed to resolve.
    pub fail_on_warnings: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            ignore: Vec::new(),
            fail_on_warnings: true,
        }
    }
}

impl CheckConfig {
    /// Load from an explicit file, else from `<root>/.macrolink.yml`,
    /// else fall back to defaults.
    pub fn load(root: &Path, explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let default_path = root.join(CONFIG_FILE_NAME);
                if !default_path.exists() {
                    return Ok(Self::default());
                }
                default_path
            }
        };
        let source = fs::read_to_string(&path)
            .with_context(|| format!("failed to read check config '{}'", path.display()))?;
        serde_yaml::from_str(&source)
            .with_context(|| format!("failed to parse check config '{}'", path.display()))
    }

    /// Whether a root-relative document path is skipped.
    pub fn is_ignored(&self, relative: &str) -> bool {
        self.ignore.iter().any(|needle| relative.contains(needle))
    }
}
