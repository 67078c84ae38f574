use std::{
    fs,
    path::PathBuf,
};

use serde::{
    Deserialize,
    Serialize,
};

use crate::core::{
    models::DEFAULT_MIN_WORD_LENGTH,
    ChistometroError,
    StopwordConfig,
};

const APP_NAME: &str = "chistometro";
const PREFS_FILE: &str = "prefs.json";

pub fn get_app_data_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        let app_dir = data_dir.join(APP_NAME);
        let _ = fs::create_dir_all(&app_dir);
        app_dir
    } else {
        PathBuf::from(".")
    }
}

/// What survives between runs: the raw stopword text field and the slider
/// value. Derived artifacts are never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisPrefs {
    pub extra_stopwords_text: String,
    pub min_word_length: usize,
}

impl Default for AnalysisPrefs {
    fn default() -> Self {
        AnalysisPrefs {
            extra_stopwords_text: String::new(),
            min_word_length: DEFAULT_MIN_WORD_LENGTH,
        }
    }
}

impl AnalysisPrefs {
    pub fn to_stopword_config(&self) -> StopwordConfig {
        let mut config = StopwordConfig::new();
        config.parse_extra(&self.extra_stopwords_text);
        config.set_min_word_length(self.min_word_length);
        config
    }
}

fn prefs_path() -> PathBuf {
    get_app_data_dir().join(PREFS_FILE)
}

/// Loads saved preferences, falling back to defaults on a missing or
/// unparseable file (a bad prefs file is not worth failing a session over).
pub fn load_prefs() -> AnalysisPrefs {
    let path = prefs_path();
    if !path.exists() {
        return AnalysisPrefs::default();
    }

    match fs::read_to_string(&path) {
        Ok(content) => match serde_json::from_str(&content) {
            Ok(prefs) => prefs,
            Err(e) => {
                eprintln!("Failed to parse {}: {}. Using defaults.", path.display(), e);
                AnalysisPrefs::default()
            }
        },
        Err(e) => {
            eprintln!("Failed to read {}: {}. Using defaults.", path.display(), e);
            AnalysisPrefs::default()
        }
    }
}

pub fn save_prefs(prefs: &AnalysisPrefs) -> Result<(), ChistometroError> {
    let path = prefs_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(prefs)?;
    fs::write(&path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_prefs_match_default_config() {
        let prefs = AnalysisPrefs::default();
        assert_eq!(prefs.to_stopword_config(), StopwordConfig::default());
    }

    #[test]
    fn prefs_round_trip_through_json() {
        let prefs = AnalysisPrefs {
            extra_stopwords_text: "jaja, público".to_string(),
            min_word_length: 4,
        };
        let json = serde_json::to_string(&prefs).unwrap();
        let back: AnalysisPrefs = serde_json::from_str(&json).unwrap();
        assert_eq!(back, prefs);

        let config = back.to_stopword_config();
        assert!(config.is_stopword("jaja"));
        assert_eq!(config.min_word_length(), 4);
    }
}
