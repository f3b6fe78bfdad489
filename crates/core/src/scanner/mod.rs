//! Definition-source scanners.
//!
//! Both scanners read a source document line by line, classify each line
//! with [`line::classify`], and fold the classified lines into a registry.
//! Malformed lines are tolerated noise and skipped without errors.
pub mod knobs;
pub mod line;
pub mod templates;

pub use knobs::scan_knobs;
pub use line::LineKind;
pub use templates::scan_templates;
