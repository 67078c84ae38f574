use std::collections::HashSet;

use crate::cleaning::stopwords::SPANISH_STOPWORDS;

/// Wildcard sentinel offered at the top of every facet option list.
pub const ALL_SENTINEL: &str = "Todos";

pub const MIN_WORD_LENGTH_FLOOR: usize = 1;
pub const MIN_WORD_LENGTH_CEIL: usize = 10;
pub const DEFAULT_MIN_WORD_LENGTH: usize = 3;

/// One joke as loaded from the corpus file. Decade stays a label string
/// ("90", "2000", ...) so the source formatting is preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JokeRecord {
    pub decade: String,
    pub edition: String,
    pub performer: String,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacetLevel {
    Decade,
    Edition,
    Performer,
}

/// A single facet choice: either unrestricted or an explicit non-empty set
/// of labels. The `Chosen` variant is never empty; `from_choices` collapses
/// an empty pick (and any pick containing the sentinel) into `All`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FacetSelection {
    All,
    Chosen(Vec<String>),
}

impl Default for FacetSelection {
    fn default() -> Self {
        FacetSelection::All
    }
}

impl FacetSelection {
    pub fn from_choices<I>(choices: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut labels: Vec<String> = Vec::new();
        for choice in choices {
            let choice = choice.trim().to_string();
            if choice.is_empty() {
                continue;
            }
            if choice == ALL_SENTINEL {
                return FacetSelection::All;
            }
            if !labels.contains(&choice) {
                labels.push(choice);
            }
        }

        if labels.is_empty() {
            FacetSelection::All
        } else {
            FacetSelection::Chosen(labels)
        }
    }

    pub fn matches(&self, label: &str) -> bool {
        match self {
            FacetSelection::All => true,
            FacetSelection::Chosen(labels) => labels.iter().any(|l| l == label),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, FacetSelection::All)
    }
}

/// User-chosen facet subsets, rebuilt on every interaction. A record passes
/// iff it matches every non-wildcard facet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSelection {
    pub decades: FacetSelection,
    pub editions: FacetSelection,
    pub performers: FacetSelection,
}

impl FilterSelection {
    pub fn matches(&self, record: &JokeRecord) -> bool {
        self.decades.matches(&record.decade)
            && self.editions.matches(&record.edition)
            && self.performers.matches(&record.performer)
    }
}

/// Base Spanish stopwords plus user-supplied extras and the minimum token
/// length. The base set is fixed for the process lifetime; extras come from
/// a free-text field and are re-parsed whenever that field changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopwordConfig {
    base: HashSet<String>,
    extra: HashSet<String>,
    min_word_length: usize,
}

impl Default for StopwordConfig {
    fn default() -> Self {
        StopwordConfig {
            base: SPANISH_STOPWORDS.iter().map(|w| w.to_string()).collect(),
            extra: HashSet::new(),
            min_word_length: DEFAULT_MIN_WORD_LENGTH,
        }
    }
}

impl StopwordConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the comma-separated free-text field: entries trimmed, empties
    /// dropped, lowercased so they compare against normalized tokens.
    pub fn parse_extra(&mut self, text: &str) {
        self.extra = text
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(|entry| entry.to_lowercase())
            .collect();
    }

    pub fn set_min_word_length(&mut self, length: usize) {
        self.min_word_length = length.clamp(MIN_WORD_LENGTH_FLOOR, MIN_WORD_LENGTH_CEIL);
    }

    pub fn min_word_length(&self) -> usize {
        self.min_word_length
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.base.contains(word) || self.extra.contains(word)
    }

    pub fn extra(&self) -> &HashSet<String> {
        &self.extra
    }

    /// The effective set (base ∪ extra), materialized for inspection.
    pub fn effective(&self) -> HashSet<&str> {
        self.base.iter().chain(self.extra.iter()).map(String::as_str).collect()
    }
}
