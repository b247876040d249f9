//! Game options: language, tabs, song sorting, score display, debug output
//!
//! Every slide change is written to the config right away. Changing the
//! language rebuilds the UI so all texts pick up the new catalog.

use super::{translate_all, ScreenId, ScreenSources, OFF_ON};
use crate::input::Key;
use crate::menu::screen::{Screen, ScreenEnv, ScreenRequest};
use crate::menu::{Menu, UiContext};
use crate::theme::ThemeOptionsGame;

/// Song sorting modes, in config index order
pub const SORTING: [&str; 7] = [
    "OPTION_VALUE_EDITION",
    "OPTION_VALUE_GENRE",
    "OPTION_VALUE_LANGUAGE",
    "OPTION_VALUE_FOLDER",
    "OPTION_VALUE_TITLE",
    "OPTION_VALUE_ARTIST",
    "OPTION_VALUE_ARTIST2",
];

pub const SHOW_SCORES: [&str; 3] = ["OPTION_VALUE_OFF", "OPTION_VALUE_WHENEXIST", "OPTION_VALUE_ON"];

pub struct OptionsGameScreen {
    menu: Menu,
    languages: Vec<String>,
    slide_language: usize,
    slide_tabs: usize,
    slide_sorting: usize,
    slide_show_scores: usize,
    slide_debug: usize,
}

impl OptionsGameScreen {
    pub fn new(ctx: &mut UiContext, theme: &ThemeOptionsGame, sources: &ScreenSources) -> Self {
        let config = sources.config;
        let language = sources.language;
        let languages = language.names();

        let mut menu = Menu::new();
        menu.load_from_theme(ctx, &theme.basic);
        let slide_language = menu.add_select_slide(ctx, &theme.select_language, languages.clone(), language.current_index());
        let slide_tabs = menu.add_select_slide(
            ctx,
            &theme.select_tabs,
            translate_all(language, &OFF_ON),
            config.tabs as usize,
        );
        let slide_sorting = menu.add_select_slide(
            ctx,
            &theme.select_sorting,
            translate_all(language, &SORTING),
            config.sorting,
        );
        let slide_show_scores = menu.add_select_slide(
            ctx,
            &theme.select_show_scores,
            translate_all(language, &SHOW_SCORES),
            config.show_scores,
        );
        let slide_debug = menu.add_select_slide(
            ctx,
            &theme.select_debug,
            translate_all(language, &OFF_ON),
            config.debug as usize,
        );
        menu.add_button(ctx, &theme.button_exit);
        menu.set_interaction(0);

        OptionsGameScreen {
            menu,
            languages,
            slide_language,
            slide_tabs,
            slide_sorting,
            slide_show_scores,
            slide_debug,
        }
    }

    /// Writes the value of `slide` to the config
    fn apply(&self, env: &mut ScreenEnv, slide: usize) -> ScreenRequest {
        let value = self.menu.slide_value(slide);
        env.config_dirty = true;
        if slide == self.slide_language {
            if let Some(name) = self.languages.get(value) {
                log::info!("Language changed to {}", name);
                env.config.language = name.clone();
                return ScreenRequest::ReloadUi;
            }
        } else if slide == self.slide_tabs {
            env.config.tabs = value == 1;
        } else if slide == self.slide_sorting {
            env.config.sorting = value;
        } else if slide == self.slide_show_scores {
            env.config.show_scores = value;
        } else if slide == self.slide_debug {
            env.config.debug = value == 1;
        }
        ScreenRequest::None
    }
}

impl Screen for OptionsGameScreen {
    fn id(&self) -> ScreenId {
        ScreenId::OptionsGame
    }

    fn menu(&self) -> &Menu {
        &self.menu
    }

    fn menu_mut(&mut self) -> &mut Menu {
        &mut self.menu
    }

    fn parse_input(&mut self, env: &mut ScreenEnv, key: Key, pressed: bool) -> ScreenRequest {
        if !pressed {
            return ScreenRequest::None;
        }
        match key {
            Key::Escape | Key::Backspace => ScreenRequest::FadeTo(ScreenId::Options),
            Key::Return if self.menu.selected_button().is_some() => ScreenRequest::FadeTo(ScreenId::Options),
            Key::Down | Key::Tab => {
                self.interact_next();
                ScreenRequest::None
            }
            Key::Up => {
                self.interact_prev();
                ScreenRequest::None
            }
            Key::Right | Key::Left => {
                let changed = if key == Key::Right {
                    self.interact_inc()
                } else {
                    self.interact_dec()
                };
                match self.menu.selected_slide() {
                    Some(slide) if changed => self.apply(env, slide),
                    _ => ScreenRequest::None,
                }
            }
            _ => ScreenRequest::None,
        }
    }
}
