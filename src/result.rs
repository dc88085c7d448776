use compact_str::CompactString;
use serde::Serialize;

/// Language code of an undetermined result
pub const UNDETERMINED: &str = "und";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DetectionResult {
    pub language_code: CompactString,
    /// Between 0.0 and 1.0
    pub confidence: f64,
}

impl DetectionResult {
    #[inline]
    pub fn new(language_code: impl Into<CompactString>, confidence: f64) -> Self {
        debug_assert!(
            (0.0..=1.0).contains(&confidence),
            "Confidence {confidence} is not in range 0.0..=1.0"
        );
        Self {
            language_code: language_code.into(),
            confidence,
        }
    }

    /// `{"und", 0.0}`
    #[inline]
    pub fn undetermined() -> Self {
        Self::new(UNDETERMINED, 0.0)
    }

    #[inline]
    pub fn is_undetermined(&self) -> bool {
        self.language_code == UNDETERMINED
    }
}
