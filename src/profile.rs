use crate::{
    catalog::normalize_code,
    trigrams::{is_trigram, lowercase, TRIGRAM_LEN},
    Script,
};
use arrayvec::ArrayVec;
use compact_str::CompactString;
use rustc_hash::FxHashMap;

pub(crate) const PROFILE_MAX_SCRIPTS: usize = 4;

pub type ProfileScripts = ArrayVec<Script, PROFILE_MAX_SCRIPTS>;

/// Ranked diagnostic trigrams of a single language, plus the scripts it is written in
#[derive(Clone, Debug)]
pub struct LanguageProfile {
    code: CompactString,
    trigrams: Vec<CompactString>,
    ranks: FxHashMap<CompactString, usize>,
    scripts: ProfileScripts,
}

impl LanguageProfile {
    /// `trigrams` must be ordered by corpus frequency in a descending order,
    /// they are lowercased the same way texts are.
    /// A repeated trigram keeps its first (higher) rank,
    /// a trigram that is not 3 chars long is dropped.
    pub fn new<T: AsRef<str>>(
        code: &str,
        trigrams: impl IntoIterator<Item = T>,
        scripts: ProfileScripts,
    ) -> Self {
        let code = normalize_code(code);
        let mut ranked = Vec::new();
        let mut ranks = FxHashMap::default();

        for trigram in trigrams {
            let trigram: CompactString = lowercase(trigram.as_ref()).into();
            if !is_trigram(&trigram) {
                tracing::warn!("{code}: trigram {trigram:?} is not {TRIGRAM_LEN} chars long, dropped");
                continue;
            }
            if ranks.contains_key(&trigram) {
                tracing::warn!("{code}: duplicate trigram {trigram:?} dropped");
                continue;
            }
            ranks.insert(trigram.clone(), ranked.len());
            ranked.push(trigram);
        }
        ranked.shrink_to_fit();

        Self {
            code,
            trigrams: ranked,
            ranks,
            scripts,
        }
    }

    #[inline(always)]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[inline(always)]
    pub fn trigrams(&self) -> &[CompactString] {
        &self.trigrams
    }

    #[inline(always)]
    pub fn scripts(&self) -> &[Script] {
        &self.scripts
    }

    #[inline]
    pub fn rank(&self, trigram: &str) -> Option<usize> {
        self.ranks.get(trigram).copied()
    }

    /// `len - rank`: the top trigram gets `len` points, the last one 1
    #[inline]
    pub(crate) fn rank_points(&self, trigram: &str) -> Option<usize> {
        self.rank(trigram).map(|rank| self.trigrams.len() - rank)
    }

    /// `1 - rank / len`, so the top trigram weighs 1.0
    #[inline]
    pub fn rank_weight(&self, trigram: &str) -> Option<f64> {
        self.rank_points(trigram)
            .map(|points| points as f64 / self.trigrams.len() as f64)
    }

    #[inline]
    pub fn is_compatible(&self, script: Script) -> bool {
        self.scripts.contains(&script)
    }
}
