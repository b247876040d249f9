//! Startup errors the program cannot continue from
//!
//! `main` logs these and shows them in a message box before exiting.

use crate::language::LanguageError;
use crate::theme::ThemeError;
use std::fmt;

#[derive(Debug)]
pub enum CriticalError {
    Language(LanguageError),
    Theme(ThemeError),
    /// Window, renderer or event pump could not be created
    Sdl(String),
}

impl fmt::Display for CriticalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CriticalError::Language(e) => write!(f, "Could not load languages: {}", e),
            CriticalError::Theme(e) => write!(f, "Could not load theme: {}", e),
            CriticalError::Sdl(e) => write!(f, "SDL error: {}", e),
        }
    }
}

impl std::error::Error for CriticalError {}

impl From<LanguageError> for CriticalError {
    fn from(error: LanguageError) -> Self {
        CriticalError::Language(error)
    }
}

impl From<ThemeError> for CriticalError {
    fn from(error: ThemeError) -> Self {
        CriticalError::Theme(error)
    }
}

impl From<String> for CriticalError {
    fn from(error: String) -> Self {
        CriticalError::Sdl(error)
    }
}
