//! Reference resolution against the knob and template registries.
//!
//! [`engine::resolve`] is a pure function of the registries and one
//! request: it never mutates the registries, carries no per-call state,
//! and returns identical results (including warnings) for identical
//! inputs.
pub mod context;
pub mod diagnostics;
pub mod engine;
pub mod renderer;
