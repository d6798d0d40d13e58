//! Department and date extraction from query text.

use crate::recognize::{EntityLabel, EntityRecognizer};

/// Department names the store is seeded with, scanned in this order when
/// entity recognition yields nothing usable.
pub const DEPARTMENT_VOCABULARY: [&str; 3] = ["Sales", "Engineering", "Marketing"];

/// Extracts query parameters through an injected entity recognizer.
pub struct IntentExtractor<R> {
    recognizer: R,
}

impl<R> IntentExtractor<R>
where
    R: EntityRecognizer,
{
    pub const fn new(recognizer: R) -> Self {
        Self { recognizer }
    }

    /// Extract a department name from a query.
    ///
    /// A recognized organization or product span wins over the fixed
    /// vocabulary, even when it names something the store has never seen;
    /// such a value simply matches no rows downstream. Without a usable
    /// span, the vocabulary is scanned case-insensitively and the first
    /// match in vocabulary order is returned.
    #[must_use]
    pub fn department(&self, query: &str) -> Option<String> {
        for span in self.recognizer.recognize(query) {
            if matches!(
                span.label,
                EntityLabel::Organization | EntityLabel::Product
            ) {
                return Some(capitalize_words(&span.text));
            }
        }

        let lower = query.to_lowercase();
        DEPARTMENT_VOCABULARY
            .iter()
            .find(|name| lower.contains(&name.to_lowercase()))
            .map(|name| (*name).to_string())
    }

    /// Extract a date expression, verbatim.
    ///
    /// No normalization happens here: "last week" comes back as-is and
    /// matches nothing under the store's lexicographic comparison.
    #[must_use]
    pub fn date(&self, query: &str) -> Option<String> {
        self.recognizer
            .recognize(query)
            .into_iter()
            .find(|span| span.label == EntityLabel::Date)
            .map(|span| span.text)
    }
}

/// Capitalize the first letter of each whitespace-separated word,
/// lowercasing the rest.
fn capitalize_words(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first
                    .to_uppercase()
                    .chain(chars.as_str().to_lowercase().chars())
                    .collect()
            })
        })
        .collect::<Vec<String>>()
        .join(" ")
}
