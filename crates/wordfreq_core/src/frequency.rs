use std::collections::HashMap;

use serde::Serialize;

/// A single `(word, count)` row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: u64,
}

impl WordCount {
    pub fn new(word: impl Into<String>, count: u64) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

/// Mapping from normalized word to occurrence count.
///
/// Entries are kept in first-seen order, which is the tie-break order used
/// by [`FrequencyMap::ranked`]. Every stored count is at least 1.
#[derive(Debug, Clone, Default)]
pub struct FrequencyMap {
    entries: Vec<WordCount>,
    index: HashMap<String, usize>,
}

impl FrequencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the count for `word`, inserting it with 1 on first sight.
    /// Returns the updated count.
    pub fn increment(&mut self, word: &str) -> u64 {
        match self.index.get(word) {
            Some(&slot) => {
                let entry = &mut self.entries[slot];
                entry.count += 1;
                entry.count
            }
            None => {
                self.index.insert(word.to_owned(), self.entries.len());
                self.entries.push(WordCount::new(word, 1));
                1
            }
        }
    }

    pub fn get(&self, word: &str) -> Option<u64> {
        self.index.get(word).map(|&slot| self.entries[slot].count)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, i.e. the number of tokens that were counted.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|entry| entry.count).sum()
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.entries
            .iter()
            .map(|entry| (entry.word.as_str(), entry.count))
    }

    /// Entries sorted by count descending; equal counts keep first-seen order.
    pub fn ranked(&self) -> Vec<WordCount> {
        let mut ranked = self.entries.clone();
        // `sort_by` is stable, which is what makes the tie-break deterministic.
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked
    }

    /// The `n` most common entries.
    pub fn top(&self, n: usize) -> Vec<WordCount> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }

    /// The last `n` entries of [`FrequencyMap::ranked`], still in ranked order.
    pub fn bottom(&self, n: usize) -> Vec<WordCount> {
        let mut ranked = self.ranked();
        let start = ranked.len().saturating_sub(n);
        ranked.split_off(start)
    }

    /// Plain `HashMap` view, dropping the first-seen order.
    pub fn to_hash_map(&self) -> HashMap<String, u64> {
        self.entries
            .iter()
            .map(|entry| (entry.word.clone(), entry.count))
            .collect()
    }
}

impl PartialEq for FrequencyMap {
    /// Two maps are equal when they hold the same words with the same counts,
    /// regardless of first-seen order.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(word, count)| other.get(word) == Some(count))
    }
}

impl Eq for FrequencyMap {}

impl<'a> Extend<&'a str> for FrequencyMap {
    fn extend<T: IntoIterator<Item = &'a str>>(&mut self, iter: T) {
        for word in iter {
            self.increment(word);
        }
    }
}

impl<'a> FromIterator<&'a str> for FrequencyMap {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        let mut map = FrequencyMap::new();
        map.extend(iter);
        map
    }
}

/// Serialized as a list of entries in ranked order.
impl Serialize for FrequencyMap {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.ranked().serialize(serializer)
    }
}
