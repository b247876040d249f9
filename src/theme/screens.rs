//! Per-screen theme records

use super::types::{ThemeBasic, ThemeButton, ThemeSelectSlide, ThemeText};

/// Language ids of the main menu descriptions, in button order
pub const MAIN_DESCRIPTIONS: [&str; 6] = [
    "SING_SING",
    "SING_MULTI",
    "SING_STATS",
    "SING_EDITOR",
    "SING_GAME_OPTIONS",
    "SING_EXIT",
];

/// Language ids of the options menu descriptions, in button order
pub const OPTIONS_DESCRIPTIONS: [&str; 4] = [
    "SING_OPTIONS_GAME",
    "SING_OPTIONS_GRAPHICS",
    "SING_OPTIONS_THEMES",
    "SING_OPTIONS_EXIT",
];

#[derive(Debug, Clone, Default)]
pub struct ThemeMain {
    pub basic: ThemeBasic,
    pub button_solo: ThemeButton,
    pub button_multi: ThemeButton,
    pub button_stat: ThemeButton,
    pub button_editor: ThemeButton,
    pub button_options: ThemeButton,
    pub button_exit: ThemeButton,
    pub text_description: ThemeText,
    pub text_description_long: ThemeText,
    /// Translated short descriptions, one per button
    pub description: Vec<String>,
    /// Translated long descriptions, one per button
    pub description_long: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ThemeOptions {
    pub basic: ThemeBasic,
    pub button_game: ThemeButton,
    pub button_graphics: ThemeButton,
    pub button_themes: ThemeButton,
    pub button_exit: ThemeButton,
    pub text_description: ThemeText,
    pub description: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ThemeOptionsGame {
    pub basic: ThemeBasic,
    pub select_language: ThemeSelectSlide,
    pub select_tabs: ThemeSelectSlide,
    pub select_sorting: ThemeSelectSlide,
    pub select_show_scores: ThemeSelectSlide,
    pub select_debug: ThemeSelectSlide,
    pub button_exit: ThemeButton,
}

#[derive(Debug, Clone, Default)]
pub struct ThemeOptionsGraphics {
    pub basic: ThemeBasic,
    pub select_fullscreen: ThemeSelectSlide,
    pub select_resolution: ThemeSelectSlide,
    pub select_screens: ThemeSelectSlide,
    pub select_mouse: ThemeSelectSlide,
    pub button_exit: ThemeButton,
}

#[derive(Debug, Clone, Default)]
pub struct ThemeOptionsThemes {
    pub basic: ThemeBasic,
    pub select_theme: ThemeSelectSlide,
    pub select_skin: ThemeSelectSlide,
    pub select_color: ThemeSelectSlide,
    pub button_exit: ThemeButton,
}

/// Modal box with a message and one or two buttons
#[derive(Debug, Clone, Default)]
pub struct ThemePopup {
    pub basic: ThemeBasic,
    pub text: ThemeText,
    pub button1: ThemeButton,
    pub button2: ThemeButton,
}

/// Every screen record of the loaded theme
#[derive(Debug, Clone, Default)]
pub struct ThemeScreens {
    pub main: ThemeMain,
    pub options: ThemeOptions,
    pub options_game: ThemeOptionsGame,
    pub options_graphics: ThemeOptionsGraphics,
    pub options_themes: ThemeOptionsThemes,
    pub check_popup: ThemePopup,
    pub error_popup: ThemePopup,
}
