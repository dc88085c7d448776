use super::{Detector, DetectorConfig};
use crate::ProfileCatalog;

#[derive(Clone, Debug)]
pub struct DetectorBuilder<'c> {
    pub(super) catalog: &'c ProfileCatalog,
    pub(super) config: DetectorConfig,
}

impl<'c> DetectorBuilder<'c> {
    /// Default config
    #[inline]
    pub fn new(catalog: &'c ProfileCatalog) -> Self {
        Self {
            catalog,
            config: DetectorConfig::default(),
        }
    }

    #[inline]
    pub fn build(self) -> Detector<'c> {
        Detector::from_builder(self)
    }

    /// Replace the whole config
    #[inline]
    pub fn config(mut self, config: DetectorConfig) -> Self {
        self.config = config;
        self
    }

    #[inline]
    pub fn temperature(mut self, temperature: f64) -> Self {
        self.config = self.config.temperature(temperature);
        self
    }

    #[inline]
    pub fn script_boost(mut self, script_boost: f64) -> Self {
        self.config = self.config.script_boost(script_boost);
        self
    }

    #[inline]
    pub fn script_filter_ratio(mut self, ratio: f64) -> Self {
        self.config = self.config.script_filter_ratio(ratio);
        self
    }

    #[inline]
    pub fn min_confidence(mut self, min_confidence: f64) -> Self {
        self.config = self.config.min_confidence(min_confidence);
        self
    }

    #[inline]
    pub fn max_results(mut self, max_results: usize) -> Self {
        self.config = self.config.max_results(max_results);
        self
    }

    #[inline]
    pub fn fast_path_ratio(mut self, ratio: f64) -> Self {
        self.config = self.config.fast_path_ratio(ratio);
        self
    }
}
