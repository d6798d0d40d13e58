//! Rule-based entity recognition.
//!
//! Production stand-in for a statistical NER model: an ordered table of
//! regex rules, each tagging its matches with an entity label. Deterministic
//! by construction, so the extraction pipeline behaves the same in tests
//! and in production.

use regex::Regex;
use serde::{Deserialize, Serialize};
use staffq_core::{EntityLabel, EntityRecognizer, EntitySpan};

/// Error type for pattern building.
#[derive(Debug)]
pub enum BuildError {
    /// The regex pattern is invalid.
    Regex(String),
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Regex(e) => write!(f, "invalid regex: {e}"),
        }
    }
}

impl std::error::Error for BuildError {}

impl From<regex::Error> for BuildError {
    fn from(err: regex::Error) -> Self {
        Self::Regex(err.to_string())
    }
}

/// Definition of a single recognition rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternDef {
    /// Unique identifier for this rule.
    pub id: String,

    /// Label attached to every match.
    pub label: EntityLabel,

    /// Regex applied to the raw query text.
    pub pattern: String,
}

impl PatternDef {
    #[must_use]
    pub fn new(id: impl Into<String>, label: EntityLabel, pattern: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label,
            pattern: pattern.into(),
        }
    }

    /// Compile this rule.
    ///
    /// # Errors
    /// Returns an error if the regex pattern is invalid.
    pub fn build(&self) -> Result<CompiledPattern, BuildError> {
        let regex = Regex::new(&self.pattern)?;
        Ok(CompiledPattern {
            label: self.label,
            regex,
        })
    }
}

/// A rule ready to run.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    label: EntityLabel,
    regex: Regex,
}

/// Default rule set: absolute and spoken dates, organization names by
/// capitalized words ending in a legal suffix.
///
/// There is no default product rule; product vocabularies are
/// domain-specific and registered at runtime via
/// [`PatternRecognizer::add_pattern`].
#[must_use]
pub fn default_patterns() -> Vec<PatternDef> {
    let mut patterns = Vec::new();
    patterns.extend(date_patterns());
    patterns.extend(organization_patterns());
    patterns
}

fn date_patterns() -> Vec<PatternDef> {
    vec![
        PatternDef::new("date_iso", EntityLabel::Date, r"\b\d{4}-\d{2}-\d{2}\b"),
        PatternDef::new(
            "date_month_name",
            EntityLabel::Date,
            r"(?i)\b(?:january|february|march|april|may|june|july|august|september|october|november|december)\s+\d{1,2}(?:,\s*|\s+)\d{4}\b",
        ),
        PatternDef::new(
            "date_relative",
            EntityLabel::Date,
            r"(?i)\b(?:last|next|this)\s+(?:week|month|quarter|year)\b",
        ),
        PatternDef::new(
            "date_deictic",
            EntityLabel::Date,
            r"(?i)\b(?:yesterday|today|tomorrow)\b",
        ),
    ]
}

fn organization_patterns() -> Vec<PatternDef> {
    vec![PatternDef::new(
        "org_legal_suffix",
        EntityLabel::Organization,
        r"\b[A-Z][\w&'-]*(?:\s+[A-Z][\w&'-]*)*\s+(?i:inc|corp|corporation|ltd|llc|gmbh)\b",
    )]
}

/// Rule-based recognizer over an ordered pattern table.
pub struct PatternRecognizer {
    patterns: Vec<CompiledPattern>,
}

impl PatternRecognizer {
    /// Compile a recognizer from rule definitions.
    ///
    /// # Errors
    /// Returns an error if any rule carries an invalid regex.
    pub fn new(defs: &[PatternDef]) -> Result<Self, BuildError> {
        let patterns = defs
            .iter()
            .map(PatternDef::build)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Recognizer with the default rule set.
    ///
    /// # Errors
    /// Returns an error if a default rule fails to compile.
    pub fn with_defaults() -> Result<Self, BuildError> {
        Self::new(&default_patterns())
    }

    /// Register an additional rule.
    ///
    /// # Errors
    /// Returns an error if the regex pattern is invalid.
    pub fn add_pattern(&mut self, def: &PatternDef) -> Result<(), BuildError> {
        self.patterns.push(def.build()?);
        Ok(())
    }

    /// Number of registered rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl EntityRecognizer for PatternRecognizer {
    fn recognize(&self, text: &str) -> Vec<EntitySpan> {
        let mut spans: Vec<EntitySpan> = Vec::new();
        for pattern in &self.patterns {
            for found in pattern.regex.find_iter(text) {
                spans.push(EntitySpan::new(found.as_str(), pattern.label, found.start()));
            }
        }

        // Report in document order; a match starting inside an
        // already-accepted span is dropped.
        spans.sort_by_key(|span| span.start);

        let mut accepted: Vec<EntitySpan> = Vec::new();
        for span in spans {
            let overlaps = accepted
                .last()
                .is_some_and(|prev| span.start < prev.start + prev.text.len());
            if !overlaps {
                accepted.push(span);
            }
        }
        accepted
    }
}
