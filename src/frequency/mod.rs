use std::collections::HashMap;

pub const DEFAULT_TOP_K: usize = 10;

/// Word counts over a token collection, recomputed from scratch whenever the
/// underlying tokens change. Remembers the first-seen order of distinct words
/// in the flattened stream so equal counts rank stably.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: HashMap<String, u32>,
    order: Vec<String>,
}

impl FrequencyTable {
    /// Flattens all token sequences and counts occurrences per distinct word.
    pub fn aggregate(sequences: &[Vec<String>]) -> Self {
        let mut table = FrequencyTable::default();
        for sequence in sequences {
            for word in sequence {
                match table.counts.get_mut(word) {
                    Some(count) => *count += 1,
                    None => {
                        table.counts.insert(word.clone(), 1);
                        table.order.push(word.clone());
                    }
                }
            }
        }
        table
    }

    pub fn count(&self, word: &str) -> u32 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    pub fn distinct_words(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// All (word, count) pairs in first-seen order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.order.iter().map(move |word| (word.as_str(), self.count(word)))
    }

    /// The `k` highest-count words, count descending; ties keep first-seen
    /// order (the sort is stable over `entries()`). Empty table gives an
    /// empty result, which is a valid "no data" boundary, not an error.
    pub fn top_k(&self, k: usize) -> Vec<(String, u32)> {
        let mut ranked: Vec<(String, u32)> =
            self.entries().map(|(word, count)| (word.to_string(), count)).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(k);
        ranked
    }
}
