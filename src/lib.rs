//! # Offline natural language detection
//!
//! Detects languages by Unicode scripts and character trigrams of the text alone,
//! against a catalog of language profiles (49 languages builtin).
//!
//! Language codes are BCP-47 primary subtags, [`UNDETERMINED`] (`"und"`) if a
//! text can't be detected.
//!
//! # Example
//! ```rust
//! use triglot::{DetectorBuilder, ProfileCatalog};
//!
//! let detector = DetectorBuilder::new(ProfileCatalog::builtin()).build();
//!
//! let results = detector.detect("Bonjour le monde, c'est une belle journée aujourd'hui.", &[]);
//! assert_eq!(results[0].language_code, "fr");
//!
//! // restrict to the expected languages
//! let results = detector.detect("Das ist gut", &["de-AT", "nl"]);
//! assert!(results.iter().all(|r| r.language_code == "de" || r.language_code == "nl"));
//!
//! // or multithreaded
//! let texts = &["text1", "text2"];
//! let results = detector.detect_batch(texts, &[]);
//! assert_eq!(results.len(), 2);
//! ```
//! `detector` also has [other methods](struct.Detector.html#implementations)

mod catalog;
mod detector;
mod profile;
mod result;
mod script;
mod trigrams;

pub use catalog::{normalize_code, CatalogError, ProfileCatalog, PROFILES_PATH_ENV};
pub use detector::{
    fast_path_script, score, Detector, DetectorBuilder, DetectorConfig, LanguageDetector,
};
pub use profile::{LanguageProfile, ProfileScripts};
pub use result::{DetectionResult, UNDETERMINED};
pub use script::{classify_scripts, Script, ScriptInfo};
pub use trigrams::{extract_trigrams, normalize, TrigramCounts};
