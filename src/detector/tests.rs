use super::*;
use crate::{Script, UNDETERMINED};
use ::std::sync::LazyLock;
use float_cmp::approx_eq;
use rstest::*;

fn mock_profile(code: &str, scripts: &[Script], trigrams: &[&str]) -> LanguageProfile {
    LanguageProfile::new(code, trigrams.iter().copied(), scripts.iter().copied().collect())
}

static MOCK_CATALOG: LazyLock<ProfileCatalog> = LazyLock::new(|| {
    ProfileCatalog::from_profiles([
        mock_profile("en", &[Script::Latin], &["the", "he ", "and"]),
        mock_profile("de", &[Script::Latin], &["der", "die", "und", "he "]),
        mock_profile("ru", &[Script::Cyrillic], &["что", "это", "как"]),
        mock_profile("sr", &[Script::Cyrillic, Script::Latin], &["што", "је ", "ије"]),
    ])
});

fn codes(results: &[DetectionResult]) -> Vec<&str> {
    results.iter().map(|r| r.language_code.as_str()).collect()
}

#[test]
fn test_mock_score() {
    // the×2, "he "×1, "e t"×1, " th"×1
    let trigrams = extract_trigrams("the the");
    let en = MOCK_CATALOG.get("en").unwrap();
    let expected = 2.0 / 5.0 * 1.0 + 1.0 / 5.0 * (1.0 - 1.0 / 3.0);
    assert!(approx_eq!(f64, score(&trigrams, en), expected, epsilon = 1e-12));

    let de = MOCK_CATALOG.get("de").unwrap();
    let expected = 1.0 / 5.0 * (1.0 - 3.0 / 4.0);
    assert!(approx_eq!(f64, score(&trigrams, de), expected, epsilon = 1e-12));

    let ru = MOCK_CATALOG.get("ru").unwrap();
    assert_eq!(score(&trigrams, ru), 0.0);
}

#[test]
fn test_score_empty_text() {
    let en = MOCK_CATALOG.get("en").unwrap();
    assert_eq!(score(&TrigramCounts::new(), en), 0.0);
}

#[test]
fn test_score_bounds() {
    let en = MOCK_CATALOG.get("en").unwrap();
    for text in ["thethethe", "the and the", "xyz", "and"] {
        let s = score(&extract_trigrams(text), en);
        assert!((0.0..=1.0).contains(&s), "{text}: {s}");
    }
}

#[test]
fn test_script_multiplier() {
    let sr = MOCK_CATALOG.get("sr").unwrap();
    let ru = MOCK_CATALOG.get("ru").unwrap();
    let en = MOCK_CATALOG.get("en").unwrap();
    // 3 Latin, 1 Cyrillic
    let scripts = classify_scripts("abc д");

    assert!(approx_eq!(f64, script_multiplier(&scripts, sr, 0.5), 1.5));
    assert!(approx_eq!(f64, script_multiplier(&scripts, ru, 0.5), 1.125));
    assert!(approx_eq!(f64, script_multiplier(&scripts, en, 0.5), 1.375));
    assert!(approx_eq!(f64, script_multiplier(&[], en, 0.5), 1.0));
}

#[test]
fn test_scores_boosted() {
    let detector = Detector::new(&MOCK_CATALOG);
    let scores = detector.scores("the the", &[]);
    assert_eq!(
        scores.iter().map(|(l, _)| *l).collect::<Vec<_>>(),
        ["en", "de", "sr"]
    );
    let expected_en = (2.0 / 5.0 + 1.0 / 5.0 * (2.0 / 3.0)) * 1.5;
    assert!(approx_eq!(f64, scores[0].1, expected_en, epsilon = 1e-12));
    assert_eq!(scores[2].1, 0.0);
}

#[rstest(
    hints,
    expected,
    case(&[], &["en", "de", "ru", "sr"]),
    case(&["de"], &["de"]),
    case(&["DE-ch", "en_US", "de"], &["de", "en"]),
    case(&["xx", "ru"], &["ru"]),
    case(&["xx", "yy"], &["en", "de", "ru", "sr"]),
    case(&[""], &["en", "de", "ru", "sr"])
)]
fn test_candidates_hints(hints: &[&str], expected: &[&str]) {
    let detector = Detector::new(&MOCK_CATALOG);
    let candidates: Vec<_> = detector
        .candidates(&[], hints)
        .into_iter()
        .map(LanguageProfile::code)
        .collect();
    assert_eq!(candidates, expected);
}

#[rstest(
    text,
    hints,
    expected,
    case("что это", &[], &["ru", "sr"]),
    case("hello", &[], &["en", "de", "sr"]),
    case("hello", &["en", "ru"], &["en"]),
    // only hinted language is not Cyrillic, filter skipped
    case("что это", &["en"], &["en"]),
    // no profile is written in Greek
    case("καλημέρα", &[], &["en", "de", "ru", "sr"]),
    // no dominant script
    case("ab вг", &[], &["en", "de", "ru", "sr"])
)]
fn test_candidates_script_filter(text: &str, hints: &[&str], expected: &[&str]) {
    let detector = Detector::new(&MOCK_CATALOG);
    let candidates: Vec<_> = detector
        .candidates(&classify_scripts(text), hints)
        .into_iter()
        .map(LanguageProfile::code)
        .collect();
    assert_eq!(candidates, expected);
}

#[test]
fn test_mock_detect() {
    let detector = Detector::new(&MOCK_CATALOG);
    let results = detector.detect("the and the", &[]);
    assert_eq!(results[0].language_code, "en");
    let sum: f64 = results.iter().map(|r| r.confidence).sum();
    assert!(approx_eq!(f64, sum, 1.0, epsilon = 1e-9));
}

#[test]
fn test_mock_detect_single_candidate() {
    let detector = Detector::new(&MOCK_CATALOG);
    let results = detector.detect("anything goes", &["de"]);
    assert_eq!(results, [DetectionResult::new("de", 1.0)]);
}

#[rstest(text, case(""), case("   "), case("12345"), case("!?!?!?"), case("ab"), case("😀😀😀"))]
fn test_undetermined(text: &str) {
    let detector = Detector::new(ProfileCatalog::builtin());
    assert_eq!(detector.detect(text, &[]), [DetectionResult::undetermined()]);
    assert_eq!(detector.detect_top_one(text, &[]), None);
}

#[test]
fn test_empty_catalog_is_undetermined() {
    let catalog = ProfileCatalog::default();
    let detector = Detector::new(&catalog);
    let results = detector.detect("hello world", &[]);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].language_code, UNDETERMINED);
}

#[rstest(
    text,
    case(""),
    case("a"),
    case("Hello world"),
    case("Hello 世界"),
    case("Привет мир"),
    case("12 monkeys"),
    case("ສະບາຍດີ"),
    case("The quick brown fox jumps over the lazy dog"),
    case("Съешь же ещё этих мягких французских булок, да выпей чаю.")
)]
fn test_results_invariants(text: &str) {
    let detector = Detector::new(ProfileCatalog::builtin());
    let results = detector.detect(text, &[]);
    assert!(!results.is_empty());
    assert!(results.len() <= 10);
    for r in &results {
        assert!((0.0..=1.0).contains(&r.confidence), "{r:?}");
    }
    for pair in results.windows(2) {
        assert!(pair[0].confidence >= pair[1].confidence, "{results:?}");
    }
}

#[test]
fn test_unknown_hints_are_ignored() {
    let detector = Detector::new(ProfileCatalog::builtin());
    let text = "Bonjour le monde, c'est une belle journée aujourd'hui.";
    assert_eq!(
        detector.detect(text, &["xx", "yy"]),
        detector.detect(text, &[])
    );
}

#[test]
fn test_hints_restrict_results() {
    let detector = Detector::new(ProfileCatalog::builtin());
    let text = "Bonjour le monde, c'est une belle journée aujourd'hui.";
    let results = detector.detect(text, &["es-MX", "it"]);
    let mut codes = codes(&results);
    codes.sort_unstable();
    assert_eq!(codes, ["es", "it"]);
}

#[test]
fn test_idempotent() {
    let detector = Detector::new(ProfileCatalog::builtin());
    let text = "Het is een mooie dag en de kinderen spelen in het park van de stad.";
    let first = detector.detect(text, &[]);
    let second = detector.detect(text, &[]);
    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.language_code, b.language_code);
        assert_eq!(a.confidence.to_bits(), b.confidence.to_bits());
    }
}

#[test]
fn test_temperature_sharpens() {
    let catalog = ProfileCatalog::builtin();
    let text = "The quick brown fox jumps over the lazy dog and the cat is in the house.";
    let soft = DetectorBuilder::new(catalog).temperature(5.0).build().detect(text, &[]);
    let sharp = DetectorBuilder::new(catalog).temperature(20.0).build().detect(text, &[]);
    assert_eq!(soft[0].language_code, "en");
    assert_eq!(sharp[0].language_code, "en");
    assert!(sharp[0].confidence > soft[0].confidence);
}

#[test]
fn test_max_results() {
    let detector = DetectorBuilder::new(ProfileCatalog::builtin())
        .max_results(2)
        .build();
    let results = detector.detect("ສະບາຍດີ", &[]);
    assert_eq!(results.len(), 2);
}

#[test]
fn test_detect_top_one() {
    let detector = Detector::new(ProfileCatalog::builtin());
    assert_eq!(
        detector
            .detect_top_one("Bonjour le monde, c'est une belle journée aujourd'hui.", &[])
            .as_deref(),
        Some("fr")
    );
}

#[rstest(
    text,
    expected_language,
    case("안녕", "ko"),
    case("你好", "zh"),
    case("กข", "th")
)]
fn test_boosted_replaces_undetermined(text: &str, expected_language: &str) {
    let detector = Detector::new(ProfileCatalog::builtin());
    let results = detector.detect_boosted(text, &[]);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].language_code, expected_language);
    assert!(approx_eq!(f64, results[0].confidence, 1.0));
}

#[test]
fn test_boosted_inserts_missing() {
    let detector = Detector::new(ProfileCatalog::builtin());
    let results = detector.detect_boosted("안녕하세요", &["ja"]);
    assert_eq!(codes(&results), ["ja", "ko"]);
    assert!(approx_eq!(f64, results[1].confidence, 1.0));
}

#[test]
fn test_boosted_raises_existing() {
    let detector = Detector::new(ProfileCatalog::builtin());
    let text = "我们今天去公园散步了。";
    let plain = detector.detect(text, &[]);
    let boosted = detector.detect_boosted(text, &[]);
    assert_eq!(boosted[0].language_code, "zh");
    assert!(approx_eq!(f64, boosted[0].confidence, 1.0));
    assert_eq!(boosted.len(), plain.len());
}

#[test]
fn test_boosted_without_fast_path_is_plain() {
    let detector = Detector::new(ProfileCatalog::builtin());
    let text = "Das ist ein schöner Tag und ich gehe mit dem Hund in den Park.";
    assert_eq!(detector.detect_boosted(text, &[]), detector.detect(text, &[]));
}

#[test]
fn test_fast_path_configured_ratio() {
    let catalog = ProfileCatalog::builtin();
    // 6 Hangul, 4 Latin
    let text = "안녕하세요 반 abcd";
    assert_eq!(Detector::new(catalog).fast_path(text), None);
    let result = DetectorBuilder::new(catalog)
        .fast_path_ratio(0.5)
        .build()
        .fast_path(text)
        .unwrap();
    assert_eq!(result.language_code, "ko");
}

#[test]
fn test_detect_batch() {
    let detector = Detector::new(ProfileCatalog::builtin());
    let texts = [
        "Bonjour le monde, c'est une belle journée aujourd'hui.",
        "",
        "Привет, как у тебя дела? Это очень хорошо.",
        "안녕하세요",
    ];
    let batch = detector.detect_batch(&texts, &[]);
    let sequential: Vec<_> = texts.iter().map(|t| detector.detect(t, &[])).collect();
    assert_eq!(batch, sequential);
}

struct FixedDetector;

impl LanguageDetector for FixedDetector {
    fn detect(&self, _text: &str, _expected_languages: &[&str]) -> Vec<DetectionResult> {
        vec![DetectionResult::new("eo", 1.0)]
    }
}

fn top_language(detector: &dyn LanguageDetector, text: &str) -> CompactString {
    detector.detect(text, &[])[0].language_code.clone()
}

#[test]
fn test_backends_are_interchangeable() {
    let trigram = Detector::new(ProfileCatalog::builtin());
    let backends: [&dyn LanguageDetector; 2] = [&trigram, &FixedDetector];
    let text = "Bonjour le monde, c'est une belle journée aujourd'hui.";
    let tops: Vec<_> = backends.iter().map(|b| top_language(*b, text)).collect();
    assert_eq!(tops, ["fr", "eo"]);
}
