//! Main menu
//!
//! Six buttons laid out left to right. The description texts follow the
//! focused button. Game modes are not part of this program and answer with
//! an error popup.

use super::ScreenId;
use crate::input::Key;
use crate::menu::screen::{Screen, ScreenEnv, ScreenRequest};
use crate::menu::{Menu, UiContext};
use crate::theme::ThemeMain;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MainButton {
    Solo,
    Multi,
    Stats,
    Editor,
    Options,
    Exit,
}

const BUTTONS: [MainButton; 6] = [
    MainButton::Solo,
    MainButton::Multi,
    MainButton::Stats,
    MainButton::Editor,
    MainButton::Options,
    MainButton::Exit,
];

pub struct MainScreen {
    menu: Menu,
    /// Button index per entry of `BUTTONS`
    buttons: Vec<usize>,
    text_description: usize,
    text_description_long: usize,
    description: Vec<String>,
    description_long: Vec<String>,
}

impl MainScreen {
    pub fn new(ctx: &mut UiContext, theme: &ThemeMain) -> Self {
        let mut menu = Menu::new();
        menu.load_from_theme(ctx, &theme.basic);
        let text_description = menu.add_text(&theme.text_description);
        let text_description_long = menu.add_text(&theme.text_description_long);

        let buttons = [
            &theme.button_solo,
            &theme.button_multi,
            &theme.button_stat,
            &theme.button_editor,
            &theme.button_options,
            &theme.button_exit,
        ]
        .into_iter()
        .map(|button| menu.add_button(ctx, button))
        .collect();

        let mut screen = MainScreen {
            menu,
            buttons,
            text_description,
            text_description_long,
            description: theme.description.clone(),
            description_long: theme.description_long.clone(),
        };
        screen.set_interaction(0);
        screen
    }

    fn focused(&self) -> Option<MainButton> {
        let button = self.menu.selected_button()?;
        let slot = self.buttons.iter().position(|&b| b == button)?;
        BUTTONS.get(slot).copied()
    }

    fn update_descriptions(&mut self) {
        let Some(slot) = self.focused().and_then(|f| BUTTONS.iter().position(|&b| b == f)) else {
            return;
        };
        if let Some(text) = self.description.get(slot) {
            self.menu.texts[self.text_description].set_text(text);
        }
        if let Some(text) = self.description_long.get(slot) {
            self.menu.texts[self.text_description_long].set_text(text);
        }
    }

    fn activate(&self, env: &ScreenEnv) -> ScreenRequest {
        match self.focused() {
            Some(MainButton::Solo | MainButton::Multi | MainButton::Stats | MainButton::Editor) => {
                ScreenRequest::ShowError(env.language.translate("ERROR_NOT_AVAILABLE"))
            }
            Some(MainButton::Options) => ScreenRequest::FadeTo(ScreenId::Options),
            Some(MainButton::Exit) => quit_request(env),
            None => ScreenRequest::None,
        }
    }
}

fn quit_request(env: &ScreenEnv) -> ScreenRequest {
    ScreenRequest::CheckFadeTo(None, env.language.translate("MSG_QUIT_USDX"))
}

impl Screen for MainScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Main
    }

    fn menu(&self) -> &Menu {
        &self.menu
    }

    fn menu_mut(&mut self) -> &mut Menu {
        &mut self.menu
    }

    fn on_interaction(&mut self) {
        self.update_descriptions();
    }

    fn parse_input(&mut self, env: &mut ScreenEnv, key: Key, pressed: bool) -> ScreenRequest {
        if !pressed {
            return ScreenRequest::None;
        }
        match key {
            Key::Char('q') => ScreenRequest::Quit,
            Key::Char('o') => ScreenRequest::FadeTo(ScreenId::Options),
            Key::Escape | Key::Backspace => quit_request(env),
            Key::Return => self.activate(env),
            Key::Right | Key::Tab => {
                self.interact_next();
                ScreenRequest::None
            }
            Key::Left => {
                self.interact_prev();
                ScreenRequest::None
            }
            Key::Down => {
                self.interact_inc();
                ScreenRequest::None
            }
            Key::Up => {
                self.interact_dec();
                ScreenRequest::None
            }
            _ => ScreenRequest::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{ThemeButton, ThemeText};
    use crate::testing::Fixture;

    fn theme() -> ThemeMain {
        let button = |x: f32| ThemeButton {
            x,
            y: 400.0,
            w: 100.0,
            h: 60.0,
            ..ThemeButton::default()
        };
        ThemeMain {
            button_solo: button(0.0),
            button_multi: button(100.0),
            button_stat: button(200.0),
            button_editor: button(300.0),
            button_options: button(400.0),
            button_exit: button(500.0),
            text_description: ThemeText::default(),
            text_description_long: ThemeText::default(),
            description: (0..6).map(|i| format!("short {}", i)).collect(),
            description_long: (0..6).map(|i| format!("long {}", i)).collect(),
            ..ThemeMain::default()
        }
    }

    #[test]
    fn test_descriptions_follow_focus() {
        let mut fixture = Fixture::new();
        let mut screen = MainScreen::new(&mut fixture.ctx(), &theme());
        assert_eq!(screen.menu.texts[0].text(), "short 0");

        let mut env = fixture.env(0);
        screen.parse_input(&mut env, Key::Right, true);
        screen.parse_input(&mut env, Key::Right, true);
        assert_eq!(screen.menu.texts[0].text(), "short 2");
        assert_eq!(screen.menu.texts[1].text(), "long 2");

        screen.parse_input(&mut env, Key::Left, true);
        assert_eq!(screen.menu.texts[0].text(), "short 1");
    }

    #[test]
    fn test_buttons_dispatch() {
        let mut fixture = Fixture::new();
        let mut screen = MainScreen::new(&mut fixture.ctx(), &theme());
        let mut env = fixture.env(0);

        assert!(matches!(
            screen.parse_input(&mut env, Key::Return, true),
            ScreenRequest::ShowError(_)
        ));

        screen.set_interaction(4);
        assert_eq!(
            screen.parse_input(&mut env, Key::Return, true),
            ScreenRequest::FadeTo(ScreenId::Options)
        );

        screen.set_interaction(5);
        assert_eq!(
            screen.parse_input(&mut env, Key::Return, true),
            ScreenRequest::CheckFadeTo(None, "Really quit?".to_string())
        );
    }

    #[test]
    fn test_escape_asks_before_quitting() {
        let mut fixture = Fixture::new();
        let mut screen = MainScreen::new(&mut fixture.ctx(), &theme());
        let mut env = fixture.env(0);

        assert_eq!(screen.parse_input(&mut env, Key::Escape, false), ScreenRequest::None);
        assert_eq!(
            screen.parse_input(&mut env, Key::Escape, true),
            ScreenRequest::CheckFadeTo(None, "Really quit?".to_string())
        );
        assert_eq!(screen.parse_input(&mut env, Key::Char('q'), true), ScreenRequest::Quit);
    }
}
