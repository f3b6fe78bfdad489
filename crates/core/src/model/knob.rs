// Knob registry - exact, special-case, and pattern knob definitions

use regex::Regex;

/// Knob names recorded verbatim even though they contain pattern-like
/// characters. The literal name is the canonical form.
pub const SPECIAL_CASE_KNOBS: &[&str] = &["<SUBSYS>"];

/// A knob definition whose name contains placeholders, matched through a
/// regular expression derived from the name.
#[derive(Debug, Clone)]
pub struct PatternKnob {
    /// Derived pattern source, e.g. `FOO_(.+)_BAR`. Collision key during
    /// scanning: identical patterns collapse into one entry.
    pub pattern: String,
    /// Anchored compilation of `pattern`. Full-match only.
    pub regex: Regex,
    /// The knob name exactly as written in the definition source.
    pub canonical: String,
}

/// Registry of configuration knob names built from the definition document.
///
/// `names` holds exact and special-case knobs as one sorted, deduplicated
/// list; `patterns` holds wildcard and parameterized knobs in definition
/// order. Built once per run and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct KnobRegistry {
    names: Vec<String>,
    patterns: Vec<PatternKnob>,
}

impl KnobRegistry {
    pub fn new(mut names: Vec<String>, patterns: Vec<PatternKnob>) -> Self {
        names.sort();
        names.dedup();
        Self { names, patterns }
    }

    /// Exact membership test over exact and special-case knobs.
    pub fn contains(&self, name: &str) -> bool {
        self.names
            .binary_search_by(|probe| probe.as_str().cmp(name))
            .is_ok()
    }

    /// First pattern in definition order that fully matches `name`.
    pub fn match_pattern(&self, name: &str) -> Option<&PatternKnob> {
        self.patterns.iter().find(|knob| knob.regex.is_match(name))
    }

    /// Sorted exact and special-case knob names.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Pattern knobs in definition order.
    pub fn patterns(&self) -> &[PatternKnob] {
        &self.patterns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(source: &str, canonical: &str) -> PatternKnob {
        PatternKnob {
            pattern: source.to_string(),
            regex: Regex::new(&format!("^(?:{})$", source)).unwrap(),
            canonical: canonical.to_string(),
        }
    }

    #[test]
    fn test_names_sorted_and_deduplicated() {
        let registry = KnobRegistry::new(
            vec![
                "ZETA".to_string(),
                "ALPHA".to_string(),
                "ZETA".to_string(),
            ],
            vec![],
        );
        assert_eq!(registry.names(), &["ALPHA".to_string(), "ZETA".to_string()]);
    }

    #[test]
    fn test_contains_is_exact() {
        let registry = KnobRegistry::new(vec!["MAX_JOBS".to_string()], vec![]);
        assert!(registry.contains("MAX_JOBS"));
        assert!(!registry.contains("max_jobs"));
        assert!(!registry.contains("MAX_JOBS_EXTRA"));
    }

    #[test]
    fn test_match_pattern_first_wins() {
        let registry = KnobRegistry::new(
            vec![],
            vec![
                pattern("FOO_(.+)", "FOO_<A>"),
                pattern("(.+)_BAR", "<B>_BAR"),
            ],
        );
        // Both patterns match; definition order decides.
        let hit = registry.match_pattern("FOO_X_BAR").unwrap();
        assert_eq!(hit.canonical, "FOO_<A>");
    }

    #[test]
    fn test_match_pattern_requires_full_match() {
        let registry = KnobRegistry::new(vec![], vec![pattern("FOO_(.+)_BAR", "FOO_<N>_BAR")]);
        assert!(registry.match_pattern("FOO_X_BAR").is_some());
        assert!(registry.match_pattern("FOO_X_BAR_TAIL").is_none());
        assert!(registry.match_pattern("PREFIX_FOO_X_BAR").is_none());
    }
}
