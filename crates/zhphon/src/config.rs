use {
    crate::{
        error::{PhonemeError, Result},
        model::G2PW_URL,
        symbols::PhonemeIdMap,
    },
    serde::{Deserialize, Serialize},
    std::{fs::File, io::BufReader, path::{Path, PathBuf}},
};

/// Phonemizer settings, usually read from a JSON file.
///
/// ```json
/// { "model_dir": "local/g2pW", "id_map": "voice/phoneme_ids.json" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PhonemizerConfig {
    /// Where the converter model lives. Fetched on first use when set.
    pub model_dir: Option<PathBuf>,
    pub model_url: String,
    /// Alternate `symbol -> [ids]` table.
    pub id_map: Option<PathBuf>,
    /// Drop straight and curly double quotes before segmentation.
    pub strip_quotes: bool,
}

impl Default for PhonemizerConfig {
    fn default() -> Self {
        Self {
            model_dir: None,
            model_url: G2PW_URL.to_string(),
            id_map: None,
            strip_quotes: true,
        }
    }
}

impl PhonemizerConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| PhonemeError::Config(format!("{}: {}", path.display(), e)))?;
        let config = serde_json::from_reader(BufReader::new(file))?;
        Ok(config)
    }

    /// The configured id map, or the built-in one.
    pub fn load_id_map(&self) -> Result<PhonemeIdMap> {
        match &self.id_map {
            Some(path) => PhonemeIdMap::load(path),
            None => Ok(PhonemeIdMap::default_map().clone()),
        }
    }
}
