use super::ProfileCatalog;
use crate::{
    profile::{LanguageProfile, ProfileScripts, PROFILE_MAX_SCRIPTS},
    trigrams::{is_trigram, TRIGRAM_LEN},
    Script,
};
use ::std::{
    fs::File,
    io::{self, Cursor, Read},
    path::Path,
    str::FromStr,
};
use brotli::Decompressor;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const BROTLI_BUFFER_SIZE: usize = 4096;

#[derive(Debug, Serialize, Deserialize)]
struct ProfileRecord {
    code: String,
    scripts: Vec<String>,
    trigrams: Vec<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct ProfilesFile {
    profiles: Vec<ProfileRecord>,
}

impl ProfileRecord {
    fn into_profile(self) -> Result<LanguageProfile, CatalogError> {
        let mut scripts = ProfileScripts::new();
        for name in &self.scripts {
            let script = Script::from_str(name).map_err(|_| CatalogError::UnknownScript {
                code: self.code.clone(),
                script: name.clone(),
            })?;
            if scripts.contains(&script) {
                continue;
            }
            scripts
                .try_push(script)
                .map_err(|_| CatalogError::TooManyScripts(self.code.clone()))?;
        }
        if scripts.is_empty() {
            return Err(CatalogError::NoScripts(self.code));
        }

        if let Some(trigram) = self.trigrams.iter().find(|t| !is_trigram(t)) {
            return Err(CatalogError::InvalidTrigram {
                code: self.code.clone(),
                trigram: trigram.clone(),
            });
        }

        Ok(LanguageProfile::new(&self.code, self.trigrams, scripts))
    }
}

impl From<&LanguageProfile> for ProfileRecord {
    fn from(profile: &LanguageProfile) -> Self {
        Self {
            code: profile.code().to_owned(),
            scripts: profile
                .scripts()
                .iter()
                .map(|s| s.as_str().to_owned())
                .collect(),
            trigrams: profile.trigrams().iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl ProfileCatalog {
    /// Reads a profiles file, Brotli compressed if the extension is `.br`
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let mut file = File::open(path).map_err(CatalogError::FileOpen)?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(CatalogError::FileRead)?;

        let catalog = if path.extension().is_some_and(|ext| ext == "br") {
            Self::from_compressed(&bytes)?
        } else {
            let content = String::from_utf8(bytes)
                .map_err(|e| CatalogError::FileRead(io::Error::new(io::ErrorKind::InvalidData, e)))?;
            Self::from_encom(&content)?
        };

        tracing::info!("Loaded {} language profiles from {path:?}", catalog.len());
        Ok(catalog)
    }

    /// Brotli compressed EnCom profiles
    pub fn from_compressed(bytes: &[u8]) -> Result<Self, CatalogError> {
        let mut decompressor = Decompressor::new(Cursor::new(bytes), BROTLI_BUFFER_SIZE);
        let mut content = String::new();
        decompressor
            .read_to_string(&mut content)
            .map_err(CatalogError::Decompress)?;
        Self::from_encom(&content)
    }

    pub fn from_encom(content: &str) -> Result<Self, CatalogError> {
        let file: ProfilesFile =
            serde_encom::from_str(content).map_err(|e| CatalogError::Parse(e.into()))?;
        if file.profiles.is_empty() {
            return Err(CatalogError::Empty);
        }

        let profiles = file
            .profiles
            .into_iter()
            .map(ProfileRecord::into_profile)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::from_profiles(profiles))
    }

    /// Inverse of [`ProfileCatalog::from_encom`].
    ///
    /// An empty catalog can't be loaded back, so it is [`CatalogError::Empty`].
    pub fn to_encom(&self) -> Result<String, CatalogError> {
        if self.is_empty() {
            return Err(CatalogError::Empty);
        }
        let file = ProfilesFile {
            profiles: self.iter().map(ProfileRecord::from).collect(),
        };
        serde_encom::to_string(&file).map_err(|e| CatalogError::Encode(e.into()))
    }
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Profiles file open error")]
    FileOpen(#[source] io::Error),
    #[error("Profiles file read error")]
    FileRead(#[source] io::Error),
    #[error("Profiles decompression error")]
    Decompress(#[source] io::Error),
    #[error("Profiles parse error")]
    Parse(#[source] io::Error),
    #[error("Profiles encode error")]
    Encode(#[source] io::Error),
    #[error("Profiles file has no profiles")]
    Empty,
    #[error("Profile {code:?} has unknown script {script:?}")]
    UnknownScript { code: String, script: String },
    #[error("Profile {0:?} has no scripts")]
    NoScripts(String),
    #[error("Profile {0:?} has more than {PROFILE_MAX_SCRIPTS} scripts")]
    TooManyScripts(String),
    #[error("Profile {code:?} has trigram {trigram:?} which is not {TRIGRAM_LEN} chars long")]
    InvalidTrigram { code: String, trigram: String },
}
