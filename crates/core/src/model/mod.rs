//! Data model for knobs, templates, and references.
pub mod knob;
pub mod reference;
pub mod template;

pub use knob::{KnobRegistry, PatternKnob, SPECIAL_CASE_KNOBS};
pub use reference::{parse_reference_text, Reference, ReferenceNode};
pub use template::{TemplateCategory, TemplateRegistry};
