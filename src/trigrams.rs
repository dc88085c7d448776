use ahash::AHashMap;
use compact_str::CompactString;

pub(crate) const TRIGRAM_LEN: usize = 3;

pub type TrigramCounts = AHashMap<CompactString, usize>;

/// Lowering shared by texts and profile trigrams.
///
/// Context sensitive, so a word-final `Σ` becomes `ς`.
#[inline]
pub(crate) fn lowercase(text: &str) -> String {
    text.to_lowercase()
}

#[inline]
pub(crate) fn is_trigram(trigram: &str) -> bool {
    trigram.chars().count() == TRIGRAM_LEN
}

/// Lowercased, digits removed, whitespace runs collapsed to a single space, trimmed
pub fn normalize(text: &str) -> String {
    let mut res = String::with_capacity(text.len());
    let mut space_pending = false;

    for ch in lowercase(text).chars() {
        if ch.is_numeric() {
            continue;
        }
        if ch.is_whitespace() {
            space_pending = true;
            continue;
        }
        if space_pending && !res.is_empty() {
            res.push(' ');
        }
        space_pending = false;
        res.push(ch);
    }

    res
}

/// Counts every 3-char window of the normalized text.
///
/// Windows with two consecutive spaces are skipped.
pub fn extract_trigrams(text: &str) -> TrigramCounts {
    let chars: Vec<char> = normalize(text).chars().collect();
    let mut trigrams = TrigramCounts::new();
    if chars.len() < TRIGRAM_LEN {
        return trigrams;
    }

    for window in chars.windows(TRIGRAM_LEN) {
        if window.windows(2).any(|w| w[0] == ' ' && w[1] == ' ') {
            continue;
        }
        let trigram: CompactString = window.iter().collect();
        *trigrams.entry(trigram).or_default() += 1;
    }

    trigrams
}
