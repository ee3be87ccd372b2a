//! Defines the [`KeywordRecord`] and [`Intent`] types, the topics from which
//! articles are generated.

use std::fmt;

/// The editorial category of a [`KeywordRecord`]. The intent decides which
/// copy an article is rendered with (see [`crate::article`]).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Intent {
    /// The reader wants to understand something. This is also the fallback
    /// for missing or unrecognized intents.
    #[default]
    Informational,

    /// The reader wants to get something (a printable, a template).
    Transactional,

    /// The reader wants to find a specific place or resource.
    Navigational,
}

impl Intent {
    /// Parses an intent leniently: surrounding whitespace and case are
    /// ignored, and anything unrecognized (including the empty string) maps
    /// to [`Intent::Informational`].
    pub fn parse(s: &str) -> Intent {
        match s.trim().to_ascii_lowercase().as_str() {
            "transactional" => Intent::Transactional,
            "navigational" => Intent::Navigational,
            _ => Intent::Informational,
        }
    }

    /// The name of the intent as it appears in the keyword store.
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Informational => "informational",
            Intent::Transactional => "transactional",
            Intent::Navigational => "navigational",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single topic in the keyword pool. The `(keyword, subtopic, intent)`
/// triple is the record's identity; [`Hash`] and [`Eq`] cover all three
/// fields so a `HashSet<KeywordRecord>` is the pool's uniqueness set.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct KeywordRecord {
    /// The main topic. Never empty.
    pub keyword: String,

    /// An optional refinement of the keyword (e.g., `Weekly`); may be empty.
    pub subtopic: String,

    /// The editorial category.
    pub intent: Intent,
}

impl KeywordRecord {
    pub fn new(
        keyword: impl Into<String>,
        subtopic: impl Into<String>,
        intent: Intent,
    ) -> KeywordRecord {
        KeywordRecord {
            keyword: keyword.into(),
            subtopic: subtopic.into(),
            intent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_intent() {
        assert_eq!(Intent::Transactional, Intent::parse("transactional"));
        assert_eq!(Intent::Navigational, Intent::parse(" Navigational "));
        assert_eq!(Intent::Informational, Intent::parse("informational"));
        assert_eq!(Intent::Informational, Intent::parse(""));
        assert_eq!(Intent::Informational, Intent::parse("commercial"));
    }

    #[test]
    fn test_intent_round_trips_through_store_name() {
        for intent in [
            Intent::Informational,
            Intent::Transactional,
            Intent::Navigational,
        ] {
            assert_eq!(intent, Intent::parse(intent.as_str()));
        }
    }

    #[test]
    fn test_records_differing_in_intent_are_distinct() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        assert!(set.insert(KeywordRecord::new(
            "Reading log",
            "",
            Intent::Informational
        )));
        assert!(set.insert(KeywordRecord::new(
            "Reading log",
            "",
            Intent::Transactional
        )));
        assert!(!set.insert(KeywordRecord::new(
            "Reading log",
            "",
            Intent::Informational
        )));
    }
}
