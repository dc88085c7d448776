#[derive(Clone, Debug, PartialEq)]
pub struct DetectorConfig {
    pub(super) temperature: f64,
    pub(super) script_boost: f64,
    pub(super) script_filter_ratio: f64,
    pub(super) min_confidence: f64,
    pub(super) max_results: usize,
    pub(super) fast_path_ratio: f64,
}

impl Default for DetectorConfig {
    #[inline]
    fn default() -> Self {
        Self {
            temperature: 10.0,
            script_boost: 0.5,
            script_filter_ratio: 0.5,
            min_confidence: 0.001,
            max_results: 10,
            fast_path_ratio: 0.7,
        }
    }
}

impl DetectorConfig {
    #[inline(always)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Multiplier of scores before the softmax, higher separates candidates sharper
    #[inline]
    pub fn temperature(mut self, temperature: f64) -> Self {
        debug_assert!(
            temperature.is_finite() && temperature > 0.0,
            "Temperature must be finite and > 0.0"
        );
        self.temperature = temperature;
        self
    }

    /// Score is multiplied by `1 + matching_script_ratio * script_boost`
    #[inline]
    pub fn script_boost(mut self, script_boost: f64) -> Self {
        debug_assert!(script_boost >= 0.0, "Script boost must be >= 0.0");
        self.script_boost = script_boost;
        self
    }

    /// Candidates are restricted to the top script when its ratio is above this
    #[inline]
    pub fn script_filter_ratio(mut self, ratio: f64) -> Self {
        self.script_filter_ratio = ratio;
        self
    }

    /// Results with confidence <= this are dropped
    #[inline]
    pub fn min_confidence(mut self, min_confidence: f64) -> Self {
        self.min_confidence = min_confidence;
        self
    }

    #[inline]
    pub fn max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Min ratio of the dominant script for the script fast path
    #[inline]
    pub fn fast_path_ratio(mut self, ratio: f64) -> Self {
        self.fast_path_ratio = ratio;
        self
    }

    #[inline(always)]
    pub fn get_temperature(&self) -> f64 {
        self.temperature
    }

    #[inline(always)]
    pub fn get_max_results(&self) -> usize {
        self.max_results
    }
}

#[cfg(test)]
mod tests {
    use super::DetectorConfig;

    #[test]
    fn test_defaults() {
        let config = DetectorConfig::new();
        assert_eq!(config.temperature, 10.0);
        assert_eq!(config.script_boost, 0.5);
        assert_eq!(config.script_filter_ratio, 0.5);
        assert_eq!(config.min_confidence, 0.001);
        assert_eq!(config.max_results, 10);
        assert_eq!(config.fast_path_ratio, 0.7);
    }

    #[test]
    fn test_setters() {
        let config = DetectorConfig::new().temperature(4.0).max_results(3);
        assert_eq!(config.get_temperature(), 4.0);
        assert_eq!(config.get_max_results(), 3);
        assert_eq!(config.script_boost, DetectorConfig::default().script_boost);
    }
}
