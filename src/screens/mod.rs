//! Screens
//!
//! Every screen is built once per theme load and kept in a [`ScreenSet`]
//! owned by the display. Screens are addressed by [`ScreenId`], never by
//! reference, so a theme reload can replace the whole set at once.
//!
//! # Available Screens
//!
//! - [`MainScreen`] - entry menu
//! - [`OptionsScreen`] - options overview
//! - [`OptionsGameScreen`], [`OptionsGraphicsScreen`], [`OptionsThemesScreen`] - option pages
//! - [`PopupScreen`] - yes/no check and error message boxes

pub mod main_menu;
pub mod options;
pub mod options_game;
pub mod options_graphics;
pub mod options_themes;
pub mod popup;

pub use main_menu::MainScreen;
pub use options::OptionsScreen;
pub use options_game::OptionsGameScreen;
pub use options_graphics::OptionsGraphicsScreen;
pub use options_themes::OptionsThemesScreen;
pub use popup::{PopupKind, PopupScreen};

use crate::config::AppConfig;
use crate::language::Language;
use crate::menu::screen::Screen;
use crate::menu::UiContext;
use crate::skin::Skins;
use crate::theme::Themes;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenId {
    Main,
    Options,
    OptionsGame,
    OptionsGraphics,
    OptionsThemes,
    CheckPopup,
    ErrorPopup,
}

/// Read-only state screens are built from
pub struct ScreenSources<'a> {
    pub themes: &'a Themes,
    pub skins: &'a Skins,
    pub language: &'a Language,
    pub config: &'a AppConfig,
}

pub const OFF_ON: [&str; 2] = ["OPTION_VALUE_OFF", "OPTION_VALUE_ON"];

/// Translates a list of language ids into slide options
pub fn translate_all(language: &Language, ids: &[&str]) -> Vec<String> {
    ids.iter().map(|id| language.translate(id)).collect()
}

/// Registry of constructed screens
pub struct ScreenSet {
    screens: Vec<Box<dyn Screen>>,
}

impl ScreenSet {
    pub fn new(screens: Vec<Box<dyn Screen>>) -> Self {
        ScreenSet { screens }
    }

    /// Builds every screen of the active theme
    pub fn build(ctx: &mut UiContext, sources: &ScreenSources) -> Self {
        let theme = sources.themes.screens();
        let screens: Vec<Box<dyn Screen>> = vec![
            Box::new(MainScreen::new(ctx, &theme.main)),
            Box::new(OptionsScreen::new(ctx, &theme.options)),
            Box::new(OptionsGameScreen::new(ctx, &theme.options_game, sources)),
            Box::new(OptionsGraphicsScreen::new(ctx, &theme.options_graphics, sources.config)),
            Box::new(OptionsThemesScreen::new(ctx, &theme.options_themes, sources)),
            Box::new(PopupScreen::new(ctx, &theme.check_popup, PopupKind::Check)),
            Box::new(PopupScreen::new(ctx, &theme.error_popup, PopupKind::Error)),
        ];
        log::debug!("Built {} screens", screens.len());
        ScreenSet::new(screens)
    }

    fn index_of(&self, id: ScreenId) -> usize {
        match self.screens.iter().position(|s| s.id() == id) {
            Some(index) => index,
            None => panic!("screen {:?} is not registered", id),
        }
    }

    pub fn get(&self, id: ScreenId) -> &dyn Screen {
        let index = self.index_of(id);
        self.screens[index].as_ref()
    }

    pub fn get_mut(&mut self, id: ScreenId) -> &mut dyn Screen {
        let index = self.index_of(id);
        self.screens[index].as_mut()
    }
}
