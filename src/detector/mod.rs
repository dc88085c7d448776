use crate::{
    classify_scripts, extract_trigrams, DetectionResult, LanguageProfile, ProfileCatalog,
    ScriptInfo, TrigramCounts,
};
use compact_str::CompactString;
use itertools::Itertools;

mod builder;
mod config;
mod fast_path;
mod normalize;
#[cfg(test)]
mod tests;

pub use builder::DetectorBuilder;
pub use config::DetectorConfig;
pub use fast_path::fast_path_script;
use fast_path::fast_path_scripts;
use normalize::{order_by_confidence_and_code, transform_to_confidences};

/// Backend contract: anything that ranks languages of a text.
///
/// Result must be non-empty and sorted by confidence in a descending order,
/// with the undetermined result for texts that can't be detected.
pub trait LanguageDetector {
    fn detect(&self, text: &str, expected_languages: &[&str]) -> Vec<DetectionResult>;
}

/// Trigram similarity of a text to a profile, without the script boost.
///
/// Sum of `(count / total) * (1 - rank / len)` over trigrams found in both,
/// in range `0.0..1.0`.
pub fn score(text_trigrams: &TrigramCounts, profile: &LanguageProfile) -> f64 {
    let total: usize = text_trigrams.values().sum();
    score_with_total(text_trigrams, total, profile)
}

/// Exact integer accumulation, so repeated calls are bit-identical whatever the map order
fn score_with_total(text_trigrams: &TrigramCounts, total: usize, profile: &LanguageProfile) -> f64 {
    let len = profile.trigrams().len();
    if total == 0 || len == 0 {
        return 0.0;
    }

    let sum: u128 = text_trigrams
        .iter()
        .filter_map(|(trigram, &count)| {
            profile
                .rank_points(trigram)
                .map(|points| count as u128 * points as u128)
        })
        .sum();

    sum as f64 / (total as f64 * len as f64)
}

/// `1 + ratio * script_boost`, where `ratio` sums detected scripts the profile is written in
#[inline]
fn script_multiplier(scripts: &[ScriptInfo], profile: &LanguageProfile, script_boost: f64) -> f64 {
    let matching_ratio: f64 = scripts
        .iter()
        .filter(|s| profile.is_compatible(s.script))
        .map(|s| s.ratio)
        .sum();
    1.0 + matching_ratio * script_boost
}

#[derive(Clone, Debug)]
pub struct Detector<'c> {
    catalog: &'c ProfileCatalog,
    config: DetectorConfig,
}

impl<'c> Detector<'c> {
    /// Default config
    #[inline]
    pub fn new(catalog: &'c ProfileCatalog) -> Self {
        DetectorBuilder::new(catalog).build()
    }

    #[inline]
    fn from_builder(builder: DetectorBuilder<'c>) -> Self {
        Self {
            catalog: builder.catalog,
            config: builder.config,
        }
    }

    #[inline(always)]
    pub fn catalog(&self) -> &'c ProfileCatalog {
        self.catalog
    }

    #[inline(always)]
    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Profiles to be scored.
    ///
    /// `expected_languages` restrict the catalog, unless none of them is known.
    /// Then the candidates are restricted to the top script, if it dominates,
    /// unless no candidate is written in it.
    pub fn candidates(
        &self,
        scripts: &[ScriptInfo],
        expected_languages: &[&str],
    ) -> Vec<&'c LanguageProfile> {
        let catalog = self.catalog;
        let mut candidates: Vec<&'c LanguageProfile> = expected_languages
            .iter()
            .filter_map(|code| catalog.get(code))
            .unique_by(|p| p.code())
            .collect();

        if candidates.is_empty() {
            if !expected_languages.is_empty() {
                tracing::debug!(
                    "No expected languages {expected_languages:?} are known, using all profiles"
                );
            }
            candidates = catalog.iter().collect();
        }

        if let Some(top) = scripts
            .first()
            .filter(|s| s.ratio > self.config.script_filter_ratio)
        {
            let filtered: Vec<_> = candidates
                .iter()
                .copied()
                .filter(|p| p.is_compatible(top.script))
                .collect();
            if filtered.is_empty() {
                tracing::debug!("No candidates are written in {}, script filter skipped", top.script);
            } else {
                candidates = filtered;
            }
        }

        candidates
    }

    /// Raw scores of the candidates with the script boost applied, in candidates order
    pub fn scores(&self, text: &str, expected_languages: &[&str]) -> Vec<(&'c str, f64)> {
        let scripts = classify_scripts(text);
        let trigrams = extract_trigrams(text);
        self.scores_prepared(&scripts, &trigrams, expected_languages)
    }

    fn scores_prepared(
        &self,
        scripts: &[ScriptInfo],
        trigrams: &TrigramCounts,
        expected_languages: &[&str],
    ) -> Vec<(&'c str, f64)> {
        let total: usize = trigrams.values().sum();
        self.candidates(scripts, expected_languages)
            .into_iter()
            .map(|profile| {
                let score = score_with_total(trigrams, total, profile)
                    * script_multiplier(scripts, profile, self.config.script_boost);
                (profile.code(), score)
            })
            .collect()
    }

    /// Detects languages of the provided text.
    ///
    /// Result is never empty and is sorted by confidence in a descending order.
    /// Confidences sum up to ~1.0, minus the dropped low ones.
    ///
    /// If the text has no script-matched chars or fewer than 3 normalized chars,
    /// the undetermined result is returned.
    pub fn detect(&self, text: &str, expected_languages: &[&str]) -> Vec<DetectionResult> {
        let scripts = classify_scripts(text);
        if scripts.is_empty() {
            return vec![DetectionResult::undetermined()];
        }
        let trigrams = extract_trigrams(text);
        if trigrams.is_empty() {
            return vec![DetectionResult::undetermined()];
        }

        let scores = self.scores_prepared(&scripts, &trigrams, expected_languages);
        transform_to_confidences(scores, &self.config)
    }

    /// Top language code, [`None`] if undetermined
    pub fn detect_top_one(&self, text: &str, expected_languages: &[&str]) -> Option<CompactString> {
        self.detect(text, expected_languages)
            .into_iter()
            .next()
            .filter(|r| !r.is_undetermined())
            .map(|r| r.language_code)
    }

    /// Script fast path with the configured dominant script ratio
    #[inline]
    pub fn fast_path(&self, text: &str) -> Option<DetectionResult> {
        fast_path_scripts(&classify_scripts(text), self.config.fast_path_ratio)
    }

    /// [`Detector::detect`] merged with the script fast path.
    ///
    /// The fast path language gets the larger of both confidences,
    /// and replaces an undetermined result.
    pub fn detect_boosted(&self, text: &str, expected_languages: &[&str]) -> Vec<DetectionResult> {
        let mut res = self.detect(text, expected_languages);
        let Some(fast) = self.fast_path(text) else {
            return res;
        };

        if res.iter().all(DetectionResult::is_undetermined) {
            return vec![fast];
        }

        match res
            .iter_mut()
            .find(|r| r.language_code == fast.language_code)
        {
            Some(r) => r.confidence = r.confidence.max(fast.confidence),
            None => res.push(fast),
        }
        res.sort_unstable_by(order_by_confidence_and_code);
        res.truncate(self.config.max_results.max(1));

        res
    }

    /// [`Detector::detect`] for each text, parallel on native targets
    pub fn detect_batch<T: AsRef<str> + Sync>(
        &self,
        texts: &[T],
        expected_languages: &[&str],
    ) -> Vec<Vec<DetectionResult>> {
        #[cfg(not(target_family = "wasm"))]
        {
            use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

            texts
                .par_iter()
                .map(|text| self.detect(text.as_ref(), expected_languages))
                .collect()
        }
        #[cfg(target_family = "wasm")]
        {
            texts
                .iter()
                .map(|text| self.detect(text.as_ref(), expected_languages))
                .collect()
        }
    }
}

impl LanguageDetector for Detector<'_> {
    #[inline]
    fn detect(&self, text: &str, expected_languages: &[&str]) -> Vec<DetectionResult> {
        Detector::detect(self, text, expected_languages)
    }
}
