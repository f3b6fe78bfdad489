// Knob reference resolution against a scanned registry

use macrolink_core::resolver::context::ResolutionRequest;
use macrolink_core::resolver::diagnostics::MatchOutcome;
use macrolink_core::scanner::{scan_knobs, scan_templates};
use macrolink_core::{resolve, Registries};

const KNOB_SOURCE: &str = "\
:macro-def:`DAGMAN_MAX_JOBS_IDLE`
:macro-def:`MAX_JOBS_RUNNING`
:macro-def:`<SUBSYS>`
:macro-def:`FOO_<NAME>_BAR`
:macro-def:`SCHEDD_*`
:macro-def:`<SUBSYS>_LOG`
";

fn registries() -> Registries {
    Registries {
        knobs: scan_knobs(KNOB_SOURCE).unwrap(),
        templates: scan_templates(""),
    }
}

fn request(text: &str) -> ResolutionRequest {
    ResolutionRequest::new(text, "users-manual/scheduling", 88, "../..")
}

#[test]
fn every_exact_knob_resolves_to_itself_without_warnings() {
    let registries = registries();
    for name in registries.knobs.names() {
        let resolution = resolve(&request(name), &registries);
        assert_eq!(&resolution.canonical, name);
        assert!(
            resolution.warning.is_none(),
            "unexpected warning for '{name}'"
        );
    }
}

#[test]
fn special_case_knob_resolves_literally() {
    let resolution = resolve(&request("<SUBSYS>"), &registries());
    assert_eq!(resolution.outcome, MatchOutcome::ExactKnob);
    assert_eq!(resolution.canonical, "<SUBSYS>");
    assert!(resolution.warning.is_none());
}

#[test]
fn parameterized_definition_matches_substituted_name() {
    let resolution = resolve(&request("FOO_X_BAR"), &registries());
    assert_eq!(resolution.outcome, MatchOutcome::PatternKnob);
    assert_eq!(resolution.canonical, "FOO_<NAME>_BAR");
}

#[test]
fn parameterized_definition_rejects_name_without_separators() {
    let resolution = resolve(&request("FOOBAR"), &registries());
    assert_eq!(resolution.outcome, MatchOutcome::UnknownKnob);
}

#[test]
fn wildcard_definition_matches_any_suffix() {
    let resolution = resolve(&request("SCHEDD_HOST_NAME"), &registries());
    assert_eq!(resolution.outcome, MatchOutcome::PatternKnob);
    assert_eq!(resolution.canonical, "SCHEDD_*");
}

#[test]
fn undefined_knob_yields_one_warning_with_location() {
    let resolution = resolve(&request("NOT_A_KNOB"), &registries());
    let warning = resolution.warning.expect("warning expected");
    assert!(warning.message.contains("NOT_A_KNOB"));
    assert_eq!(warning.line, 88);
    assert_eq!(warning.doc, "users-manual/scheduling");
    let rendered = warning.to_string();
    assert!(rendered.contains("NOT_A_KNOB"));
    assert!(rendered.contains("88"));
}

#[test]
fn prefix_match_alone_is_not_enough() {
    // FOO_<NAME>_BAR derives FOO_(.+)_BAR; trailing text must not match.
    let resolution = resolve(&request("FOO_X_BAR_AND_MORE"), &registries());
    assert_eq!(resolution.outcome, MatchOutcome::UnknownKnob);
}

#[test]
fn overlapping_patterns_resolve_by_definition_order() {
    let knobs = scan_knobs(
        "\
:macro-def:`SLOT_<N>_<PROP>`
:macro-def:`SLOT_<N>_USER`
",
    )
    .unwrap();
    let registries = Registries {
        knobs,
        templates: scan_templates(""),
    };
    // Both patterns match SLOT_1_USER; the first definition wins even
    // though the second is more specific.
    let resolution = resolve(&request("SLOT_1_USER"), &registries);
    assert_eq!(resolution.canonical, "SLOT_<N>_<PROP>");
}

#[test]
fn degenerate_placeholder_definition_never_matches() {
    // `<ANYTHING>` would derive the match-anything pattern and is dropped
    // at scan time, so an arbitrary candidate stays unresolved.
    let knobs = scan_knobs(":macro-def:`<ANYTHING>`\n").unwrap();
    let registries = Registries {
        knobs,
        templates: scan_templates(""),
    };
    let resolution = resolve(&request("ARBITRARY_TEXT"), &registries);
    assert_eq!(resolution.outcome, MatchOutcome::UnknownKnob);
}
