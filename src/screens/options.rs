//! Options overview: one button per option page plus Exit

use super::ScreenId;
use crate::input::Key;
use crate::menu::screen::{Screen, ScreenEnv, ScreenRequest};
use crate::menu::{Menu, UiContext};
use crate::theme::ThemeOptions;

/// Pages in button order; `None` is the exit button
const TARGETS: [Option<ScreenId>; 4] = [
    Some(ScreenId::OptionsGame),
    Some(ScreenId::OptionsGraphics),
    Some(ScreenId::OptionsThemes),
    None,
];

pub struct OptionsScreen {
    menu: Menu,
    buttons: Vec<usize>,
    text_description: usize,
    description: Vec<String>,
}

impl OptionsScreen {
    pub fn new(ctx: &mut UiContext, theme: &ThemeOptions) -> Self {
        let mut menu = Menu::new();
        menu.load_from_theme(ctx, &theme.basic);
        let text_description = menu.add_text(&theme.text_description);
        let buttons = [
            &theme.button_game,
            &theme.button_graphics,
            &theme.button_themes,
            &theme.button_exit,
        ]
        .into_iter()
        .map(|button| menu.add_button(ctx, button))
        .collect();

        let mut screen = OptionsScreen {
            menu,
            buttons,
            text_description,
            description: theme.description.clone(),
        };
        screen.set_interaction(0);
        screen
    }

    fn focused_slot(&self) -> Option<usize> {
        let button = self.menu.selected_button()?;
        self.buttons.iter().position(|&b| b == button)
    }
}

impl Screen for OptionsScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Options
    }

    fn menu(&self) -> &Menu {
        &self.menu
    }

    fn menu_mut(&mut self) -> &mut Menu {
        &mut self.menu
    }

    fn on_interaction(&mut self) {
        let text = self.focused_slot().and_then(|slot| self.description.get(slot));
        if let Some(text) = text.cloned() {
            self.menu.texts[self.text_description].set_text(&text);
        }
    }

    fn parse_input(&mut self, _env: &mut ScreenEnv, key: Key, pressed: bool) -> ScreenRequest {
        if !pressed {
            return ScreenRequest::None;
        }
        match key {
            Key::Escape | Key::Backspace => ScreenRequest::FadeTo(ScreenId::Main),
            Key::Return => match self.focused_slot().and_then(|slot| TARGETS.get(slot)) {
                Some(Some(page)) => ScreenRequest::FadeTo(*page),
                Some(None) => ScreenRequest::FadeTo(ScreenId::Main),
                None => ScreenRequest::None,
            },
            Key::Right | Key::Down | Key::Tab => {
                self.interact_next();
                ScreenRequest::None
            }
            Key::Left | Key::Up => {
                self.interact_prev();
                ScreenRequest::None
            }
            _ => ScreenRequest::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Fixture;
    use crate::theme::ThemeText;

    fn theme() -> ThemeOptions {
        ThemeOptions {
            text_description: ThemeText::default(),
            description: vec!["game".into(), "graphics".into(), "themes".into(), "back".into()],
            ..ThemeOptions::default()
        }
    }

    #[test]
    fn test_buttons_open_pages() {
        let mut fixture = Fixture::new();
        let mut screen = OptionsScreen::new(&mut fixture.ctx(), &theme());
        let mut env = fixture.env(0);

        assert_eq!(
            screen.parse_input(&mut env, Key::Return, true),
            ScreenRequest::FadeTo(ScreenId::OptionsGame)
        );
        screen.parse_input(&mut env, Key::Down, true);
        screen.parse_input(&mut env, Key::Down, true);
        assert_eq!(screen.menu.texts[0].text(), "themes");
        assert_eq!(
            screen.parse_input(&mut env, Key::Return, true),
            ScreenRequest::FadeTo(ScreenId::OptionsThemes)
        );

        screen.parse_input(&mut env, Key::Down, true);
        assert_eq!(
            screen.parse_input(&mut env, Key::Return, true),
            ScreenRequest::FadeTo(ScreenId::Main)
        );
    }

    #[test]
    fn test_escape_returns_to_main() {
        let mut fixture = Fixture::new();
        let mut screen = OptionsScreen::new(&mut fixture.ctx(), &theme());
        let mut env = fixture.env(0);
        assert_eq!(
            screen.parse_input(&mut env, Key::Escape, true),
            ScreenRequest::FadeTo(ScreenId::Main)
        );
    }
}
