//! Message boxes drawn over the current screen
//!
//! The check popup asks yes/no before a screen change or quitting; the
//! error popup only has an OK button. Both answer with
//! [`ScreenRequest::ClosePopup`].

use super::ScreenId;
use crate::input::Key;
use crate::menu::screen::{Screen, ScreenEnv, ScreenRequest};
use crate::menu::{Menu, UiContext};
use crate::theme::ThemePopup;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupKind {
    Check,
    Error,
}

pub struct PopupScreen {
    kind: PopupKind,
    menu: Menu,
    text: usize,
    /// The yes (check) or OK (error) button
    button_ok: usize,
}

impl PopupScreen {
    pub fn new(ctx: &mut UiContext, theme: &ThemePopup, kind: PopupKind) -> Self {
        let mut menu = Menu::new();
        menu.load_from_theme(ctx, &theme.basic);
        let text = menu.add_text(&theme.text);
        let button_ok = menu.add_button(ctx, &theme.button1);
        if kind == PopupKind::Check {
            menu.add_button(ctx, &theme.button2);
        }
        menu.set_interaction(0);
        PopupScreen {
            kind,
            menu,
            text,
            button_ok,
        }
    }
}

impl Screen for PopupScreen {
    fn id(&self) -> ScreenId {
        match self.kind {
            PopupKind::Check => ScreenId::CheckPopup,
            PopupKind::Error => ScreenId::ErrorPopup,
        }
    }

    fn menu(&self) -> &Menu {
        &self.menu
    }

    fn menu_mut(&mut self) -> &mut Menu {
        &mut self.menu
    }

    fn on_show(&mut self, env: &mut ScreenEnv) {
        self.menu.on_show(env.now);
        self.menu.select_button(self.button_ok);
    }

    fn set_message(&mut self, message: &str) {
        self.menu.texts[self.text].set_text(message);
    }

    fn parse_input(&mut self, _env: &mut ScreenEnv, key: Key, pressed: bool) -> ScreenRequest {
        if !pressed {
            return ScreenRequest::None;
        }
        let confirmed = match (self.kind, key) {
            (PopupKind::Check, Key::Char('y')) => Some(true),
            (PopupKind::Check, Key::Char('n')) => Some(false),
            (_, Key::Escape | Key::Backspace) => Some(false),
            (PopupKind::Check, Key::Return) => Some(self.menu.selected_button() == Some(self.button_ok)),
            (PopupKind::Error, Key::Return) => Some(false),
            (_, Key::Right | Key::Down | Key::Tab) => {
                self.interact_next();
                None
            }
            (_, Key::Left | Key::Up) => {
                self.interact_prev();
                None
            }
            _ => None,
        };
        match confirmed {
            Some(confirmed) => ScreenRequest::ClosePopup { confirmed },
            None => ScreenRequest::None,
        }
    }
}
