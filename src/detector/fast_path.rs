use crate::{classify_scripts, DetectionResult, Script, ScriptInfo};

/// Default min ratio of the dominant script
pub(super) const FAST_PATH_RATIO: f64 = 0.7;

#[inline]
fn single_language_script(script: Script) -> Option<&'static str> {
    Some(match script {
        Script::Hangul => "ko",
        Script::Thai => "th",
        Script::Hebrew => "he",
        Script::Bengali => "bn",
        Script::Tamil => "ta",
        Script::Devanagari => "hi",
        _ => return None,
    })
}

/// Language implied by the dominant script alone.
///
/// Returns [`None`] if the dominant script covers less than 0.7 of the
/// script-matched chars, or doesn't imply a single language.
///
/// Kana means Japanese only while Han, Hiragana or Katakana dominates:
/// a few kana inside a mostly Latin text give [`None`].
#[inline]
pub fn fast_path_script(text: &str) -> Option<DetectionResult> {
    fast_path_scripts(&classify_scripts(text), FAST_PATH_RATIO)
}

/// `scripts` must be ordered by count
pub(super) fn fast_path_scripts(scripts: &[ScriptInfo], min_ratio: f64) -> Option<DetectionResult> {
    let dominant = scripts.first().filter(|s| s.ratio >= min_ratio)?;

    let language = match dominant.script {
        Script::Han | Script::Hiragana | Script::Katakana => {
            let has_kana = scripts
                .iter()
                .any(|s| matches!(s.script, Script::Hiragana | Script::Katakana));
            if has_kana {
                "ja"
            } else {
                "zh"
            }
        }
        script => single_language_script(script)?,
    };

    Some(DetectionResult::new(language, dominant.ratio))
}
