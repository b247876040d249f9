//! Theme data
//!
//! - `ini`: the INI dialect shared by theme, skin and language files
//! - `color`: accent palette and the named color table
//! - `types`: declarative widget records
//! - `screens`: one record per screen
//! - `loader`: `Themes` catalog and section parser

pub mod color;
pub mod ini;
pub mod loader;
pub mod screens;
pub mod types;

pub use color::{Rgb, SystemColor};
pub use loader::{ThemeError, Themes};
pub use screens::*;
pub use types::*;
