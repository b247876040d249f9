//! Language catalog
//!
//! Every `*.ini` file in the languages directory is one language; its
//! `[Text]` section maps upper case ids to display strings. English is the
//! mandatory fallback.

use crate::skin::ini_files;
use crate::theme::ini::{IniError, IniFile};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

pub const DEFAULT_LANGUAGE: &str = "English";

/// Errors that can occur while loading languages
#[derive(Debug)]
pub enum LanguageError {
    /// `English.ini` is missing from the directory
    DefaultMissing { dir: PathBuf },
    Ini(IniError),
}

impl fmt::Display for LanguageError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LanguageError::DefaultMissing { dir } => {
                write!(f, "Default language {} not found in {}", DEFAULT_LANGUAGE, dir.display())
            }
            LanguageError::Ini(e) => write!(f, "Language file error: {}", e),
        }
    }
}

impl std::error::Error for LanguageError {}

impl From<IniError> for LanguageError {
    fn from(error: IniError) -> Self {
        LanguageError::Ini(error)
    }
}

#[derive(Debug, Clone)]
struct LanguageEntry {
    name: String,
    path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct Language {
    entries: Vec<LanguageEntry>,
    english: HashMap<String, String>,
    current: HashMap<String, String>,
    current_name: String,
}

impl Language {
    /// Scans `dir` and activates `name`, falling back to English
    pub fn load(dir: &Path, name: &str) -> Result<Self, LanguageError> {
        let entries: Vec<LanguageEntry> = ini_files(dir)
            .into_iter()
            .filter_map(|path| {
                let name = path.file_stem()?.to_string_lossy().into_owned();
                Some(LanguageEntry { name, path })
            })
            .collect();

        let english_path = entries
            .iter()
            .find(|e| e.name.eq_ignore_ascii_case(DEFAULT_LANGUAGE))
            .map(|e| e.path.clone())
            .ok_or_else(|| LanguageError::DefaultMissing { dir: dir.to_path_buf() })?;
        let english = read_texts(&english_path)?;

        let mut language = Language {
            entries,
            current: english.clone(),
            english,
            current_name: DEFAULT_LANGUAGE.to_string(),
        };
        if let Err(e) = language.change_language(name) {
            log::warn!("{}, using {}", e, DEFAULT_LANGUAGE);
        }
        log::info!(
            "Loaded language {} ({} available)",
            language.current_name,
            language.entries.len()
        );
        Ok(language)
    }

    /// Switches the active language. Unknown names keep the current one.
    pub fn change_language(&mut self, name: &str) -> Result<(), String> {
        let entry = self
            .entries
            .iter()
            .find(|e| e.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| format!("Unknown language {}", name))?;

        self.current = read_texts(&entry.path).map_err(|e| e.to_string())?;
        self.current_name = entry.name.clone();
        Ok(())
    }

    /// Display string for `id`: active language, then English, then `id` itself
    pub fn translate(&self, id: &str) -> String {
        let key = id.to_uppercase();
        self.current
            .get(&key)
            .or_else(|| self.english.get(&key))
            .cloned()
            .unwrap_or_else(|| id.to_string())
    }

    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.name.clone()).collect()
    }

    pub fn current_name(&self) -> &str {
        &self.current_name
    }

    /// Catalog position of the active language
    pub fn current_index(&self) -> usize {
        self.entries
            .iter()
            .position(|e| e.name == self.current_name)
            .unwrap_or(0)
    }
}

fn read_texts(path: &Path) -> Result<HashMap<String, String>, IniError> {
    let ini = IniFile::load(path)?;
    Ok(ini
        .section_entries("Text")
        .into_iter()
        .map(|(k, v)| (k.to_uppercase(), v.to_string()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn fixture() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("English.ini"),
            "[Text]\nSING_SING=Sing\nSING_EXIT=Exit\n",
        )
        .unwrap();
        fs::write(dir.path().join("German.ini"), "[Text]\nsing_sing=Singen\n").unwrap();
        dir
    }

    #[test]
    fn test_translate_falls_back_to_english_then_id() {
        let dir = fixture();
        let language = Language::load(dir.path(), "German").unwrap();

        assert_eq!(language.current_name(), "German");
        assert_eq!(language.translate("SING_SING"), "Singen");
        assert_eq!(language.translate("sing_exit"), "Exit");
        assert_eq!(language.translate("NOT_THERE"), "NOT_THERE");
    }

    #[test]
    fn test_unknown_language_uses_english() {
        let dir = fixture();
        let language = Language::load(dir.path(), "Klingon").unwrap();
        assert_eq!(language.current_name(), "English");
        assert_eq!(language.translate("SING_SING"), "Sing");
        assert_eq!(language.names(), vec!["English", "German"]);
    }

    #[test]
    fn test_missing_english_is_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("German.ini"), "[Text]\nA=B\n").unwrap();
        let result = Language::load(dir.path(), "German");
        assert!(matches!(result, Err(LanguageError::DefaultMissing { .. })));
    }

    #[test]
    fn test_change_language_switches_catalog() {
        let dir = fixture();
        let mut language = Language::load(dir.path(), "English").unwrap();
        language.change_language("german").unwrap();
        assert_eq!(language.translate("SING_SING"), "Singen");
        assert_eq!(language.current_index(), 1);
        assert!(language.change_language("Elvish").is_err());
        assert_eq!(language.current_name(), "German");
    }
}
