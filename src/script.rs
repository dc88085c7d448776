use ::core::{cmp::Ordering, fmt};
use serde::Serialize;
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount, EnumIter, EnumString, IntoStaticStr};

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumCount,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Serialize,
)]
#[repr(usize)]
pub enum Script {
    Latin,
    Greek,
    Cyrillic,
    Armenian,
    Hebrew,
    Arabic,
    Devanagari,
    Bengali,
    Gurmukhi,
    Gujarati,
    Tamil,
    Telugu,
    Kannada,
    Malayalam,
    Thai,
    Lao,
    Georgian,
    Hangul,
    Hiragana,
    Katakana,
    Han,
}

impl Script {
    /// Script of a single char, [`None`] for punctuation, digits, symbols
    /// and scripts outside the table
    #[inline]
    pub fn of(ch: char) -> Option<Self> {
        let cp = ch as u32;
        SCRIPT_RANGES
            .binary_search_by(|&(start, end, _)| {
                if end < cp {
                    Ordering::Less
                } else if start > cp {
                    Ordering::Greater
                } else {
                    Ordering::Equal
                }
            })
            .ok()
            .map(|i| SCRIPT_RANGES[i].2)
    }

    #[inline(always)]
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

impl fmt::Display for Script {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive codepoint ranges, sorted by start and non-overlapping
const SCRIPT_RANGES: &[(u32, u32, Script)] = &[
    (0x0041, 0x005A, Script::Latin),
    (0x0061, 0x007A, Script::Latin),
    (0x00AA, 0x00AA, Script::Latin),
    (0x00BA, 0x00BA, Script::Latin),
    (0x00C0, 0x00D6, Script::Latin),
    (0x00D8, 0x00F6, Script::Latin),
    (0x00F8, 0x024F, Script::Latin),
    (0x0370, 0x03FF, Script::Greek),
    (0x0400, 0x052F, Script::Cyrillic),
    (0x0530, 0x058F, Script::Armenian),
    (0x0590, 0x05FF, Script::Hebrew),
    (0x0600, 0x06FF, Script::Arabic),
    (0x0750, 0x077F, Script::Arabic),
    (0x08A0, 0x08FF, Script::Arabic),
    (0x0900, 0x097F, Script::Devanagari),
    (0x0980, 0x09FF, Script::Bengali),
    (0x0A00, 0x0A7F, Script::Gurmukhi),
    (0x0A80, 0x0AFF, Script::Gujarati),
    (0x0B80, 0x0BFF, Script::Tamil),
    (0x0C00, 0x0C7F, Script::Telugu),
    (0x0C80, 0x0CFF, Script::Kannada),
    (0x0D00, 0x0D7F, Script::Malayalam),
    (0x0E00, 0x0E7F, Script::Thai),
    (0x0E80, 0x0EFF, Script::Lao),
    (0x10A0, 0x10FF, Script::Georgian),
    (0x1100, 0x11FF, Script::Hangul),
    (0x1C80, 0x1C8F, Script::Cyrillic),
    (0x1E00, 0x1EFF, Script::Latin),
    (0x1F00, 0x1FFF, Script::Greek),
    (0x2C60, 0x2C7F, Script::Latin),
    (0x2DE0, 0x2DFF, Script::Cyrillic),
    (0x2E80, 0x2FDF, Script::Han),
    (0x3005, 0x3007, Script::Han),
    (0x3021, 0x3029, Script::Han),
    (0x3040, 0x309F, Script::Hiragana),
    (0x30A0, 0x30FF, Script::Katakana),
    (0x3130, 0x318F, Script::Hangul),
    (0x31F0, 0x31FF, Script::Katakana),
    (0x3400, 0x4DBF, Script::Han),
    (0x4E00, 0x9FFF, Script::Han),
    (0xA640, 0xA69F, Script::Cyrillic),
    (0xA720, 0xA7FF, Script::Latin),
    (0xA8E0, 0xA8FF, Script::Devanagari),
    (0xA960, 0xA97F, Script::Hangul),
    (0xAC00, 0xD7AF, Script::Hangul),
    (0xD7B0, 0xD7FF, Script::Hangul),
    (0xF900, 0xFAFF, Script::Han),
    (0xFB1D, 0xFB4F, Script::Hebrew),
    (0xFB50, 0xFDFF, Script::Arabic),
    (0xFE70, 0xFEFC, Script::Arabic),
    (0xFF21, 0xFF3A, Script::Latin),
    (0xFF41, 0xFF5A, Script::Latin),
    (0xFF66, 0xFF9F, Script::Katakana),
    (0x20000, 0x2A6DF, Script::Han),
    (0x2A700, 0x2EBEF, Script::Han),
    (0x2F800, 0x2FA1F, Script::Han),
    (0x30000, 0x3134F, Script::Han),
];

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ScriptInfo {
    pub script: Script,
    pub count: usize,
    /// `count` relative to all script-matched chars of the text
    pub ratio: f64,
}

/// Scripts found in `text`, sorted by count in a descending order.
///
/// Chars of no known script are not counted at all,
/// so ratios always sum to 1.0 across the returned list.
pub fn classify_scripts(text: &str) -> Vec<ScriptInfo> {
    let mut counts = [0usize; Script::COUNT];
    let mut total = 0;
    for script in text.chars().filter_map(Script::of) {
        counts[script as usize] += 1;
        total += 1;
    }

    if total == 0 {
        return Vec::new();
    }

    let mut res: Vec<_> = Script::iter()
        .filter(|s| counts[*s as usize] > 0)
        .map(|script| {
            let count = counts[script as usize];
            ScriptInfo {
                script,
                count,
                ratio: count as f64 / total as f64,
            }
        })
        .collect();
    // stable, keeps declaration order on ties
    res.sort_by(|a, b| b.count.cmp(&a.count));

    res
}
