pub mod parser;

use std::{
    collections::BTreeSet,
    path::Path,
    sync::OnceLock,
};

use crate::core::{
    models::ALL_SENTINEL,
    ChistometroError,
    FacetLevel,
    FilterSelection,
    JokeRecord,
};

/// The loaded joke corpus. Immutable after load; facet queries and filters
/// only ever read it.
#[derive(Debug)]
pub struct Corpus {
    records: Vec<JokeRecord>,
}

impl Corpus {
    pub fn load(path: &Path) -> Result<Self, ChistometroError> {
        let records = parser::read_corpus_csv(path)?;
        println!("Loaded {} jokes from {}", records.len(), path.display());
        Ok(Corpus { records })
    }

    pub fn from_records(records: Vec<JokeRecord>) -> Self {
        Corpus { records }
    }

    pub fn records(&self) -> &[JokeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Option labels for one facet level, restricted by the higher-priority
    /// facets already chosen: editions cascade from the decade selection,
    /// performers from decade ∧ edition. Sorted, with the wildcard sentinel
    /// prepended.
    pub fn facet_options(&self, level: FacetLevel, prior: &FilterSelection) -> Vec<String> {
        let mut labels: BTreeSet<&str> = BTreeSet::new();

        for record in &self.records {
            let (included, label) = match level {
                FacetLevel::Decade => (true, record.decade.as_str()),
                FacetLevel::Edition => {
                    (prior.decades.matches(&record.decade), record.edition.as_str())
                }
                FacetLevel::Performer => (
                    prior.decades.matches(&record.decade)
                        && prior.editions.matches(&record.edition),
                    record.performer.as_str(),
                ),
            };
            if included {
                labels.insert(label);
            }
        }

        let mut options = Vec::with_capacity(labels.len() + 1);
        options.push(ALL_SENTINEL.to_string());
        options.extend(labels.into_iter().map(|label| label.to_string()));
        options
    }

    /// Records matching every non-wildcard facet of the selection.
    pub fn filter<'a>(&'a self, selection: &FilterSelection) -> Vec<&'a JokeRecord> {
        self.records.iter().filter(|record| selection.matches(record)).collect()
    }
}

static CORPUS: OnceLock<Corpus> = OnceLock::new();

/// Process-wide load-once cache: the first successful load is shared
/// read-only for the process lifetime and never re-validated. A failed load
/// leaves the cache empty so a corrected path can retry.
pub fn load_global(path: &Path) -> Result<&'static Corpus, ChistometroError> {
    if let Some(corpus) = CORPUS.get() {
        return Ok(corpus);
    }
    let corpus = Corpus::load(path)?;
    Ok(CORPUS.get_or_init(|| corpus))
}
