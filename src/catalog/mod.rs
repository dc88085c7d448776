use crate::{profile::LanguageProfile, trigrams::is_trigram, Script};
use ::std::{env, path::Path, sync::LazyLock};
use compact_str::CompactString;
use rustc_hash::FxHashMap;

mod builtin;
mod storage;

pub use storage::CatalogError;

/// Path of a profiles file used by [`ProfileCatalog::new`] instead of the builtin one
pub const PROFILES_PATH_ENV: &str = "TRIGLOT_PROFILES_PATH";

static BUILTIN: LazyLock<ProfileCatalog> = LazyLock::new(ProfileCatalog::from_builtin);

/// Primary language subtag, lowercased: `"pt-BR"` -> `"pt"`, `" ZH_Hant "` -> `"zh"`
pub fn normalize_code(code: &str) -> CompactString {
    let primary = code
        .trim()
        .split(['-', '_'])
        .next()
        .unwrap_or_default();
    let mut res = CompactString::from(primary);
    res.make_ascii_lowercase();
    res
}

/// Immutable set of language profiles, looked up by language code
#[derive(Clone, Debug, Default)]
pub struct ProfileCatalog {
    profiles: Vec<LanguageProfile>,
    index: FxHashMap<CompactString, usize>,
}

impl ProfileCatalog {
    /// Loads the profiles file named by [`PROFILES_PATH_ENV`] if set,
    /// otherwise copies the builtin catalog
    pub fn new() -> Result<Self, CatalogError> {
        match env::var(PROFILES_PATH_ENV) {
            Ok(path) => Self::load(Path::new(&path)),
            Err(_) => Ok(Self::builtin().clone()),
        }
    }

    /// Lightweight compiled-in catalog, built on the first access
    #[inline]
    pub fn builtin() -> &'static ProfileCatalog {
        &BUILTIN
    }

    /// A repeated language code keeps its first profile
    pub fn from_profiles(profiles: impl IntoIterator<Item = LanguageProfile>) -> Self {
        let mut res = Self::default();
        for profile in profiles {
            if res.index.contains_key(profile.code()) {
                tracing::warn!("Duplicate profile {:?} dropped", profile.code());
                continue;
            }
            res.index
                .insert(CompactString::from(profile.code()), res.profiles.len());
            res.profiles.push(profile);
        }
        res
    }

    fn from_builtin() -> Self {
        Self::from_profiles(builtin::BUILTIN_PROFILES.iter().map(|p| {
            let trigrams = p.trigrams.split('|').filter(|t| {
                let valid = is_trigram(t);
                if !valid {
                    if cfg!(debug_assertions) {
                        panic!("Invalid builtin trigram {t:?} of {}", p.code);
                    } else {
                        tracing::error!("Invalid builtin trigram {t:?} of {}", p.code);
                    }
                }
                valid
            });
            LanguageProfile::new(p.code, trigrams, p.scripts.iter().copied().collect())
        }))
    }

    /// `code` is normalized first, so region subtags are ignored
    #[inline]
    pub fn get(&self, code: &str) -> Option<&LanguageProfile> {
        self.index
            .get(&normalize_code(code))
            .map(|&i| &self.profiles[i])
    }

    #[inline]
    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    /// Profiles of languages normally written in `script`
    #[inline]
    pub fn compatible_with(&self, script: Script) -> impl Iterator<Item = &LanguageProfile> {
        self.profiles
            .iter()
            .filter(move |p| p.is_compatible(script))
    }

    #[inline]
    pub fn iter(&self) -> ::core::slice::Iter<'_, LanguageProfile> {
        self.profiles.iter()
    }

    #[inline]
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.profiles.iter().map(LanguageProfile::code)
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl<'c> IntoIterator for &'c ProfileCatalog {
    type Item = &'c LanguageProfile;
    type IntoIter = ::core::slice::Iter<'c, LanguageProfile>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
