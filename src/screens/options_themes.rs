//! Theme options: theme, skin and accent color
//!
//! The skin list depends on the theme, and a new skin brings its own default
//! color, so a change on one slide may move the slides below it. Every change
//! reloads the UI with the new selection.

use super::{ScreenId, ScreenSources};
use crate::input::Key;
use crate::menu::screen::{Screen, ScreenEnv, ScreenRequest};
use crate::menu::{Menu, UiContext};
use crate::skin::Skins;
use crate::theme::{SystemColor, ThemeOptionsThemes, Themes};

pub struct OptionsThemesScreen {
    menu: Menu,
    skin_names: Vec<String>,
    slide_theme: usize,
    slide_skin: usize,
    slide_color: usize,
}

fn skin_value(skins: &Skins, theme: &str, skin: &str) -> usize {
    skins
        .names_for_theme(theme)
        .iter()
        .position(|s| s.eq_ignore_ascii_case(skin))
        .unwrap_or(0)
}

fn color_names() -> Vec<String> {
    SystemColor::ALL.iter().map(|c| c.as_str().to_string()).collect()
}

impl OptionsThemesScreen {
    pub fn new(ctx: &mut UiContext, theme: &ThemeOptionsThemes, sources: &ScreenSources) -> Self {
        let config = sources.config;
        let themes = sources.themes;
        let skins = sources.skins;

        let theme_value = themes.find(&config.theme).unwrap_or(0);
        let skin_names = skins.names_for_theme(&config.theme);
        let skin_value = skin_value(skins, &config.theme, &config.skin);

        let mut menu = Menu::new();
        menu.load_from_theme(ctx, &theme.basic);
        let slide_theme = menu.add_select_slide(ctx, &theme.select_theme, themes.names(), theme_value);
        let slide_skin = menu.add_select_slide(ctx, &theme.select_skin, skin_names.clone(), skin_value);
        let slide_color = menu.add_select_slide(
            ctx,
            &theme.select_color,
            color_names(),
            config.system_color().index(),
        );
        menu.add_button(ctx, &theme.button_exit);
        menu.set_interaction(0);

        OptionsThemesScreen {
            menu,
            skin_names,
            slide_theme,
            slide_skin,
            slide_color,
        }
    }

    /// Switches the config to the skin of the current list at `value`
    fn select_skin(&mut self, env: &mut ScreenEnv, theme: &str, value: usize) {
        let Some(name) = self.skin_names.get(value).cloned() else {
            return;
        };
        if let Some(skin) = env.skins.find(theme, &name).and_then(|i| env.skins.get(i)) {
            let color = skin.default_color;
            env.config.color = color.as_str().to_string();
            self.menu.select_slides[self.slide_color].set_select_opt(color.index());
        }
        env.config.skin = name;
    }

    fn change_theme(&mut self, env: &mut ScreenEnv, themes: &Themes, value: usize) {
        let Some(entry) = themes.entries().get(value) else {
            return;
        };
        let name = entry.name.clone();
        log::info!("Theme changed to {}", name);

        self.skin_names = env.skins.names_for_theme(&name);
        let skin = skin_value(env.skins, &name, &entry.default_skin);
        self.menu
            .update_select_slide_options(self.slide_skin, self.skin_names.clone(), skin);
        env.config.theme = name.clone();
        self.select_skin(env, &name, skin);
    }

    fn apply(&mut self, env: &mut ScreenEnv, slide: usize) -> ScreenRequest {
        let value = self.menu.slide_value(slide);
        if slide == self.slide_theme {
            let themes = env.themes;
            self.change_theme(env, themes, value);
        } else if slide == self.slide_skin {
            let theme = env.config.theme.clone();
            self.select_skin(env, &theme, value);
        } else if slide == self.slide_color {
            env.config.color = SystemColor::from_index(value).as_str().to_string();
        } else {
            return ScreenRequest::None;
        }
        env.config_dirty = true;
        ScreenRequest::ReloadUi
    }
}

impl Screen for OptionsThemesScreen {
    fn id(&self) -> ScreenId {
        ScreenId::OptionsThemes
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
