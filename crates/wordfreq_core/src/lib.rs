//! Wordfreq core: pure tokenization and frequency aggregation.
mod count;
mod frequency;
mod normalize;

pub use count::count_words;
pub use frequency::{FrequencyMap, WordCount};
pub use normalize::{is_stripped_punctuation, strip_punctuation, tokens, STRIPPED_PUNCTUATION};
