#![warn(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

mod recognizer;

pub use recognizer::{BuildError, CompiledPattern, PatternDef, PatternRecognizer, default_patterns};
pub use staffq_core::{EntityLabel, EntityRecognizer, EntitySpan};
