use super::DetectorConfig;
use crate::DetectionResult;
use ::core::cmp::Ordering;
use compact_str::CompactString;

#[inline]
pub(super) fn order_by_confidence_and_code(
    first: &DetectionResult,
    second: &DetectionResult,
) -> Ordering {
    second
        .confidence
        .total_cmp(&first.confidence)
        .then_with(|| first.language_code.cmp(&second.language_code))
}

/// Softmax of `score * temperature` over all `scores`,
/// then low confidences dropped and the rest truncated to `max_results`.
///
/// Result is sorted by confidence in a descending order,
/// and is the single undetermined result if nothing is left.
pub(super) fn transform_to_confidences<L: Into<CompactString>>(
    scores: impl IntoIterator<Item = (L, f64)>,
    config: &DetectorConfig,
) -> Vec<DetectionResult> {
    let k = config.temperature;
    let scores: Vec<(L, f64)> = scores.into_iter().collect();
    debug_assert!(!scores.iter().any(|(_, s)| s.is_nan()));

    // shifting by the max exponent leaves the ratios unchanged
    let max_exponent = scores
        .iter()
        .map(|(_, s)| s * k)
        .fold(f64::NEG_INFINITY, f64::max);

    let mut denominator = 0.0;
    let weights: Vec<(L, f64)> = scores
        .into_iter()
        .map(|(l, s)| {
            let w = if max_exponent.is_finite() {
                (s * k - max_exponent).exp()
            } else {
                0.0
            };
            denominator += w;
            (l, w)
        })
        .collect();

    let mut res: Vec<DetectionResult> = if denominator > 0.0 {
        weights
            .into_iter()
            .map(|(l, w)| DetectionResult::new(l, w / denominator))
            .filter(|r| r.confidence > config.min_confidence)
            .collect()
    } else {
        Vec::new()
    };

    if res.is_empty() {
        return vec![DetectionResult::undetermined()];
    }

    res.sort_unstable_by(order_by_confidence_and_code);
    res.truncate(config.max_results.max(1));

    res
}
