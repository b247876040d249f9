//! Skin catalog
//!
//! A skin is a texture set plus an accent color for one theme. Skins live in
//! sub directories of the themes directory:
//!
//! ```text
//! themes/
//!   Modern.ini
//!   Modern/
//!     Blue.ini        [Skin] Name, Theme, Creator, Color
//!     button.png      [Textures] Button = button.png
//! ```

use crate::theme::color::SystemColor;
use crate::theme::ini::{IniError, IniFile};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Errors that can occur while selecting a skin
#[derive(Debug)]
pub enum SkinError {
    /// No skin with this catalog index
    InvalidIndex(usize),
    Ini(IniError),
}

impl fmt::Display for SkinError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SkinError::InvalidIndex(index) => write!(f, "Invalid skin index: {}", index),
            SkinError::Ini(e) => write!(f, "Skin file error: {}", e),
        }
    }
}

impl std::error::Error for SkinError {}

impl From<IniError> for SkinError {
    fn from(error: IniError) -> Self {
        SkinError::Ini(error)
    }
}

/// One registered skin
#[derive(Debug, Clone, PartialEq)]
pub struct SkinEntry {
    pub name: String,
    /// Name of the theme this skin belongs to
    pub theme: String,
    pub creator: String,
    pub default_color: SystemColor,
    /// Directory holding the skin's images
    pub path: PathBuf,
    pub file_name: PathBuf,
    /// Logical texture name (lower case) → file name relative to `path`
    textures: HashMap<String, String>,
}

#[derive(Debug, Default)]
pub struct Skins {
    entries: Vec<SkinEntry>,
    active: Option<usize>,
}

impl Skins {
    /// Registers every `<themes_dir>/<subdir>/*.ini` skin
    ///
    /// Unreadable directories and files are skipped with a warning.
    pub fn scan(themes_dir: &Path) -> Self {
        let mut skins = Skins::default();

        let Ok(dirs) = fs::read_dir(themes_dir) else {
            log::warn!("Could not read skin directory {}", themes_dir.display());
            return skins;
        };
        let mut sub_dirs: Vec<PathBuf> = dirs
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_dir())
            .collect();
        sub_dirs.sort();

        for dir in sub_dirs {
            for file in ini_files(&dir) {
                if let Err(e) = skins.register(&file) {
                    log::warn!("Skipping skin {}: {}", file.display(), e);
                }
            }
        }

        log::info!("Found {} skin(s)", skins.entries.len());
        skins
    }

    fn register(&mut self, file: &Path) -> Result<(), SkinError> {
        let ini = IniFile::load(file)?;
        let path = file.parent().map(Path::to_path_buf).unwrap_or_default();
        let stem = file
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        let color_name = ini.get_value("Skin", "Color", "Blue");
        let default_color = color_name.parse().unwrap_or_else(|e| {
            log::warn!("{} in {}, using Blue", e, file.display());
            SystemColor::Blue
        });

        let textures = ini
            .section_entries("Textures")
            .into_iter()
            .map(|(k, v)| (k.to_ascii_lowercase(), v.to_string()))
            .collect();

        let entry = SkinEntry {
            name: ini.get_value("Skin", "Name", &stem),
            theme: ini.get_value("Skin", "Theme", ""),
            creator: ini.get_value("Skin", "Creator", ""),
            default_color,
            path,
            file_name: file.to_path_buf(),
            textures,
        };
        log::debug!("Registered skin {} for theme {}", entry.name, entry.theme);
        self.entries.push(entry);
        Ok(())
    }

    #[cfg(test)]
    pub fn entries(&self) -> &[SkinEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&SkinEntry> {
        self.entries.get(index)
    }

    /// Catalog indices of every skin of `theme`, in scan order
    pub fn indices_for_theme(&self, theme: &str) -> Vec<usize> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, s)| s.theme.eq_ignore_ascii_case(theme))
            .map(|(i, _)| i)
            .collect()
    }

    pub fn names_for_theme(&self, theme: &str) -> Vec<String> {
        self.indices_for_theme(theme)
            .into_iter()
            .map(|i| self.entries[i].name.clone())
            .collect()
    }

    pub fn find(&self, theme: &str, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|s| s.theme.eq_ignore_ascii_case(theme) && s.name.eq_ignore_ascii_case(name))
    }

    /// Makes the skin at `index` the one textures are resolved against
    pub fn activate(&mut self, index: usize) -> Result<&SkinEntry, SkinError> {
        if index >= self.entries.len() {
            return Err(SkinError::InvalidIndex(index));
        }
        self.active = Some(index);
        log::info!("Loaded skin {}", self.entries[index].name);
        Ok(&self.entries[index])
    }

    pub fn active(&self) -> Option<&SkinEntry> {
        self.active.and_then(|i| self.entries.get(i))
    }

    /// Resolves a logical texture name to a file of the active skin
    ///
    /// Names without a `[Textures]` mapping are tried as plain file names
    /// inside the skin directory.
    pub fn texture_file_name(&self, name: &str) -> Option<PathBuf> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let skin = self.active()?;

        if let Some(file) = skin.textures.get(&name.to_ascii_lowercase()) {
            return Some(skin.path.join(file));
        }

        let direct = skin.path.join(name);
        if direct.is_file() {
            return Some(direct);
        }

        log::debug!("Skin {} has no texture {}", skin.name, name);
        None
    }
}

/// Sorted `*.ini` files directly inside `dir`
pub fn ini_files(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .and_then(|e| e.to_str())
                    .is_some_and(|e| e.eq_ignore_ascii_case("ini"))
        })
        .collect();
    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_skin(dir: &Path, theme: &str, file: &str, body: &str) {
        let skin_dir = dir.join(theme);
        fs::create_dir_all(&skin_dir).unwrap();
        fs::write(skin_dir.join(file), body).unwrap();
    }

    fn fixture() -> TempDir {
        let dir = TempDir::new().unwrap();
        write_skin(
            dir.path(),
            "Modern",
            "Blue.ini",
            "[Skin]\nName=Blue\nTheme=Modern\nCreator=me\nColor=Blue\n[Textures]\nButton=button.png\n",
        );
        write_skin(
            dir.path(),
            "Modern",
            "Red.ini",
            "[Skin]\nName=Red\nTheme=Modern\nColor=Red\n",
        );
        write_skin(dir.path(), "Classic", "Default.ini", "[Skin]\nName=Default\nTheme=Classic\nColor=Teal\n");
        fs::write(dir.path().join("Modern").join("bg.jpg"), b"jpg").unwrap();
        dir
    }

    #[test]
    fn test_scan_registers_skins_per_theme() {
        let dir = fixture();
        let skins = Skins::scan(dir.path());

        assert_eq!(skins.entries().len(), 3);
        assert_eq!(skins.names_for_theme("modern"), vec!["Blue", "Red"]);
        assert_eq!(skins.find("Classic", "default"), Some(0));
        // unknown color falls back to blue
        assert_eq!(skins.get(0).unwrap().default_color, SystemColor::Blue);
    }

    #[test]
    fn test_texture_file_name_lookup_order() {
        let dir = fixture();
        let mut skins = Skins::scan(dir.path());
        assert_eq!(skins.texture_file_name("Button"), None);

        let blue = skins.find("Modern", "Blue").unwrap();
        skins.activate(blue).unwrap();

        let skin_dir = dir.path().join("Modern");
        assert_eq!(skins.texture_file_name("button"), Some(skin_dir.join("button.png")));
        assert_eq!(skins.texture_file_name("bg.jpg"), Some(skin_dir.join("bg.jpg")));
        assert_eq!(skins.texture_file_name("Nothing"), None);
        assert_eq!(skins.texture_file_name(""), None);
    }

    #[test]
    fn test_activate_out_of_range() {
        let dir = fixture();
        let mut skins = Skins::scan(dir.path());
        assert!(matches!(skins.activate(17), Err(SkinError::InvalidIndex(17))));
        assert!(skins.active().is_none());
    }
}
