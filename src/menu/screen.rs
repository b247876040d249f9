//! Screen trait
//!
//! Each screen owns a [`Menu`] and reacts to input by returning a
//! [`ScreenRequest`]; the application carries out the request. Screens never
//! reach into the display or into each other.

use super::{Menu, MouseResult};
use crate::config::AppConfig;
use crate::input::{Key, MouseButton};
use crate::language::Language;
use crate::render::{Renderer, Viewport};
use crate::screens::ScreenId;
use crate::skin::Skins;
use crate::theme::Themes;

/// What a screen asks the application to do after an input event
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenRequest {
    None,
    FadeTo(ScreenId),
    /// Ask for confirmation first; `None` means quit once confirmed
    CheckFadeTo(Option<ScreenId>, String),
    ShowError(String),
    ClosePopup { confirmed: bool },
    /// Theme, skin or language changed
    ReloadUi,
    /// Resolution, fullscreen or screen count changed
    ApplyVideoMode,
    Quit,
}

/// Application state a screen may read or change while handling input
pub struct ScreenEnv<'a> {
    pub config: &'a mut AppConfig,
    pub themes: &'a Themes,
    pub skins: &'a Skins,
    pub language: &'a Language,
    pub now: u64,
    /// Set when `config` was changed and should be saved
    pub config_dirty: bool,
}

pub trait Screen {
    fn id(&self) -> ScreenId;

    fn menu(&self) -> &Menu;

    fn menu_mut(&mut self) -> &mut Menu;

    /// Called when a transition to this screen starts
    fn on_show(&mut self, env: &mut ScreenEnv) {
        self.menu_mut().on_show(env.now);
    }

    /// Called once the transition to this screen has completed
    fn on_show_finish(&mut self) {}

    fn on_hide(&mut self) {
        self.menu_mut().on_hide();
    }

    /// Called after the focused interaction changed
    fn on_interaction(&mut self) {}

    /// Screens drawing their own pointer hide the software cursor
    fn cursor_hidden(&self) -> bool {
        false
    }

    /// Text shown by popups
    fn set_message(&mut self, _message: &str) {}

    fn parse_input(&mut self, env: &mut ScreenEnv, key: Key, pressed: bool) -> ScreenRequest;

    fn parse_text_input(&mut self, text: &str) -> bool {
        self.menu_mut().parse_text_input(text)
    }

    fn parse_mouse(
        &mut self,
        button: Option<MouseButton>,
        down: bool,
        x: i32,
        y: i32,
        viewport: &Viewport,
    ) -> MouseResult {
        let result = self.menu_mut().parse_mouse(button, down, x, y, viewport);
        if result.focus_changed {
            self.on_interaction();
        }
        result
    }

    fn draw(&mut self, renderer: &mut dyn Renderer, now: u64) -> Result<(), String> {
        self.menu_mut().draw(renderer, now)
    }

    fn set_interaction(&mut self, num: usize) -> bool {
        let changed = self.menu_mut().set_interaction(num);
        if changed {
            self.on_interaction();
        }
        changed
    }

    fn interact_next(&mut self) -> bool {
        let changed = self.menu_mut().interact_next();
        if changed {
            self.on_interaction();
        }
        changed
    }

    fn interact_prev(&mut self) -> bool {
        let changed = self.menu_mut().interact_prev();
        if changed {
            self.on_interaction();
        }
        changed
    }

    fn interact_inc(&mut self) -> bool {
        let changed = self.menu_mut().interact_inc();
        if changed {
            self.on_interaction();
        }
        changed
    }

    fn interact_dec(&mut self) -> bool {
        let changed = self.menu_mut().interact_dec();
        if changed {
            self.on_interaction();
        }
        changed
    }
}
