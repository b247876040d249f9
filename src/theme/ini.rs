//! INI Reader
//!
//! Theme, skin and language files share one small INI dialect:
//! - `[Section]` headers, `key=value` pairs
//! - `;` and `#` start comment lines
//! - section and key lookup is case-insensitive
//! - values may be wrapped in double quotes
//!
//! Repeated sections are merged, later keys win.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Errors that can occur while reading an INI file
#[derive(Debug)]
pub enum IniError {
    /// The file could not be read
    Io { path: PathBuf, source: std::io::Error },
}

impl fmt::Display for IniError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            IniError::Io { path, source } => {
                write!(f, "Failed to read {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for IniError {}

#[derive(Debug, Clone, Default)]
struct IniSection {
    name: String,
    entries: Vec<(String, String)>,
}

impl IniSection {
    fn find(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}

/// A parsed INI file
#[derive(Debug, Clone, Default)]
pub struct IniFile {
    sections: Vec<IniSection>,
}

impl IniFile {
    /// Reads and parses the file at `path`
    pub fn load(path: impl AsRef<Path>) -> Result<Self, IniError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| IniError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let content = String::from_utf8_lossy(&bytes);

        Ok(IniFile::parse(&content))
    }

    /// Parses INI text. Malformed lines are skipped.
    pub fn parse(content: &str) -> Self {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let mut sections: Vec<IniSection> = Vec::new();
        let mut current: Option<usize> = None;

        for (line_no, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
                continue;
            }

            if let Some(rest) = line.strip_prefix('[') {
                let Some(name) = rest.strip_suffix(']') else {
                    log::trace!("ini: ignoring malformed section header on line {}", line_no + 1);
                    continue;
                };
                let name = name.trim();
                current = match sections.iter().position(|s| s.name.eq_ignore_ascii_case(name)) {
                    Some(index) => Some(index),
                    None => {
                        sections.push(IniSection {
                            name: name.to_string(),
                            entries: Vec::new(),
                        });
                        Some(sections.len() - 1)
                    }
                };
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                log::trace!("ini: ignoring line {} without '='", line_no + 1);
                continue;
            };
            let Some(section) = current else {
                continue;
            };

            sections[section]
                .entries
                .push((key.trim().to_string(), unquote(value.trim()).to_string()));
        }

        IniFile { sections }
    }

    fn section(&self, name: &str) -> Option<&IniSection> {
        self.sections
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
    }

    pub fn section_exists(&self, name: &str) -> bool {
        self.section(name).is_some()
    }

    /// All `(key, value)` pairs of a section in file order
    pub fn section_entries(&self, name: &str) -> Vec<(&str, &str)> {
        self.section(name)
            .map(|s| {
                s.entries
                    .iter()
                    .map(|(k, v)| (k.as_str(), v.as_str()))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn raw(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section).and_then(|s| s.find(key))
    }

    pub fn get_value(&self, section: &str, key: &str, default: &str) -> String {
        self.raw(section, key).unwrap_or(default).to_string()
    }

    pub fn get_long_value(&self, section: &str, key: &str, default: i64) -> i64 {
        match self.raw(section, key) {
            Some(value) => value.trim().parse().unwrap_or(default),
            None => default,
        }
    }

    pub fn get_double_value(&self, section: &str, key: &str, default: f64) -> f64 {
        match self.raw(section, key) {
            Some(value) => value.trim().replace(',', ".").parse().unwrap_or(default),
            None => default,
        }
    }

    pub fn get_bool_value(&self, section: &str, key: &str, default: bool) -> bool {
        match self.raw(section, key).map(|v| v.trim().to_ascii_lowercase()) {
            Some(value) => match value.as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => default,
            },
            None => default,
        }
    }
}

fn unquote(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        value
    }
}
