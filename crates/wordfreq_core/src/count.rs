use wordfreq_logging::wf_trace;

use crate::normalize::tokens;
use crate::FrequencyMap;

/// Count how many times each normalized word occurs in `text`.
///
/// Punctuation is deleted (not replaced), the text is split on single spaces,
/// tokens are lowercased and empty tokens are skipped. Never fails; empty or
/// punctuation-only input yields an empty map.
pub fn count_words(text: &str) -> FrequencyMap {
    let mut counts = FrequencyMap::new();
    for token in tokens(text) {
        counts.increment(&token);
    }
    wf_trace!(
        "counted {} tokens, {} distinct, from {} bytes",
        counts.total(),
        counts.len(),
        text.len()
    );
    counts
}
