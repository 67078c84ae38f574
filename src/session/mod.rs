#[cfg(test)]
mod session_tests;

use crate::{
    cleaning::clean_text,
    core::{
        FacetLevel,
        FilterSelection,
        JokeRecord,
        StopwordConfig,
    },
    corpus::Corpus,
    frequency::{
        FrequencyTable,
        DEFAULT_TOP_K,
    },
    render::{
        BarChartRenderer,
        WordCloudRenderer,
    },
};

/// Progressive-disclosure stage. Strictly ordered; a later stage implies
/// every earlier one, so illegal gate combinations cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DisclosureStage {
    Initial,
    RawShown,
    Cleaned,
    CloudShown,
    Top10Shown,
}

impl DisclosureStage {
    pub fn raw_shown(&self) -> bool {
        *self >= DisclosureStage::RawShown
    }

    pub fn cleaned(&self) -> bool {
        *self >= DisclosureStage::Cleaned
    }

    pub fn cloud_shown(&self) -> bool {
        *self >= DisclosureStage::CloudShown
    }

    pub fn top10_shown(&self) -> bool {
        *self >= DisclosureStage::Top10Shown
    }
}

/// Result of a reveal action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageOutcome {
    /// The gate opened and its artifact is ready.
    Advanced,
    /// The gate opened, but the current filter produced nothing to show.
    /// Callers render a "no data for this filter" message instead.
    NoData,
    /// Rejected: a prior gate is still closed, or this gate is already open.
    NoOp,
}

/// One user session: the chosen filter and stopword configuration, the
/// disclosure stage, and the derived artifacts cached by the clean stage.
/// The corpus itself is shared and read-only; everything here is per-session.
pub struct Session<'a> {
    corpus: &'a Corpus,
    filter: FilterSelection,
    stopwords: StopwordConfig,
    stage: DisclosureStage,
    top_k: usize,
    cleaned: Option<Vec<Vec<String>>>,
    cloud_words: Option<Vec<String>>,
    top_words: Option<Vec<(String, u32)>>,
}

impl<'a> Session<'a> {
    pub fn new(corpus: &'a Corpus) -> Self {
        Session {
            corpus,
            filter: FilterSelection::default(),
            stopwords: StopwordConfig::default(),
            stage: DisclosureStage::Initial,
            top_k: DEFAULT_TOP_K,
            cleaned: None,
            cloud_words: None,
            top_words: None,
        }
    }

    pub fn stage(&self) -> DisclosureStage {
        self.stage
    }

    pub fn filter(&self) -> &FilterSelection {
        &self.filter
    }

    pub fn stopword_config(&self) -> &StopwordConfig {
        &self.stopwords
    }

    pub fn set_top_k(&mut self, k: usize) {
        self.top_k = k;
    }

    /// Changing the filter invalidates every derived artifact, so the stage
    /// machine resets whenever the new selection differs from the current
    /// one. An identical selection leaves the session untouched.
    pub fn set_filter(&mut self, filter: FilterSelection) {
        if self.filter != filter {
            self.filter = filter;
            self.reset();
        }
    }

    pub fn set_stopword_config(&mut self, config: StopwordConfig) {
        if self.stopwords != config {
            self.stopwords = config;
            self.reset();
        }
    }

    pub fn facet_options(&self, level: FacetLevel) -> Vec<String> {
        self.corpus.facet_options(level, &self.filter)
    }

    pub fn filtered_records(&self) -> Vec<&'a JokeRecord> {
        self.corpus.filter(&self.filter)
    }

    pub fn reveal_raw(&mut self) -> StageOutcome {
        if self.stage != DisclosureStage::Initial {
            return StageOutcome::NoOp;
        }
        self.stage = DisclosureStage::RawShown;
        if self.filtered_records().is_empty() {
            StageOutcome::NoData
        } else {
            StageOutcome::Advanced
        }
    }

    /// Runs the cleaner over every record in the current filtered set and
    /// caches the token sequences. An empty filtered set caches an empty
    /// collection; later stages report `NoData` rather than failing.
    pub fn clean(&mut self) -> StageOutcome {
        if self.stage != DisclosureStage::RawShown {
            return StageOutcome::NoOp;
        }

        let sequences: Vec<Vec<String>> = self
            .filtered_records()
            .iter()
            .map(|record| clean_text(&record.text, &self.stopwords))
            .collect();

        let has_tokens = sequences.iter().any(|tokens| !tokens.is_empty());
        self.cleaned = Some(sequences);
        self.stage = DisclosureStage::Cleaned;

        if has_tokens {
            StageOutcome::Advanced
        } else {
            StageOutcome::NoData
        }
    }

    /// Flattens the cached sequences into the cloud word list. The
    /// flattening happens here, not at clean time.
    pub fn reveal_cloud(&mut self) -> StageOutcome {
        if self.stage != DisclosureStage::Cleaned {
            return StageOutcome::NoOp;
        }

        let words: Vec<String> = self
            .cleaned
            .as_deref()
            .unwrap_or(&[])
            .iter()
            .flatten()
            .cloned()
            .collect();

        self.stage = DisclosureStage::CloudShown;
        if words.is_empty() {
            self.cloud_words = None;
            StageOutcome::NoData
        } else {
            self.cloud_words = Some(words);
            StageOutcome::Advanced
        }
    }

    /// Aggregates the cached tokens and keeps the top-K ranking.
    pub fn reveal_top10(&mut self) -> StageOutcome {
        if self.stage != DisclosureStage::CloudShown {
            return StageOutcome::NoOp;
        }

        let table = FrequencyTable::aggregate(self.cleaned.as_deref().unwrap_or(&[]));
        let ranked = table.top_k(self.top_k);

        self.stage = DisclosureStage::Top10Shown;
        if ranked.is_empty() {
            self.top_words = None;
            StageOutcome::NoData
        } else {
            self.top_words = Some(ranked);
            StageOutcome::Advanced
        }
    }

    /// Closes all gates and discards every cached derived artifact. Callable
    /// at any time.
    pub fn reset(&mut self) {
        self.stage = DisclosureStage::Initial;
        self.cleaned = None;
        self.cloud_words = None;
        self.top_words = None;
    }

    pub fn cleaned_tokens(&self) -> Option<&[Vec<String>]> {
        self.cleaned.as_deref()
    }

    pub fn cloud_words(&self) -> Option<&[String]> {
        self.cloud_words.as_deref()
    }

    pub fn top_words(&self) -> Option<&[(String, u32)]> {
        self.top_words.as_deref()
    }

    /// Full frequency table over the cached tokens, for the export artifact.
    /// Only available once the clean stage has run.
    pub fn frequency_table(&self) -> Option<FrequencyTable> {
        self.cleaned.as_deref().map(FrequencyTable::aggregate)
    }

    /// Hands the cloud word list to the collaborator, but only when the
    /// cloud gate is open and there is something to draw. Returns whether
    /// the renderer was invoked.
    pub fn render_cloud(&self, renderer: &mut dyn WordCloudRenderer) -> bool {
        match &self.cloud_words {
            Some(words) if self.stage.cloud_shown() && !words.is_empty() => {
                renderer.render(words);
                true
            }
            _ => false,
        }
    }

    /// Same contract for the top-K bar chart.
    pub fn render_top_chart(&self, renderer: &mut dyn BarChartRenderer) -> bool {
        match &self.top_words {
            Some(rows) if self.stage.top10_shown() && !rows.is_empty() => {
                renderer.render(rows);
                true
            }
            _ => false,
        }
    }
}
