//! Graphics options: fullscreen, resolution, screen count and mouse mode
//!
//! Changes are applied immediately through [`ScreenRequest::ApplyVideoMode`].

use super::{translate_all, ScreenId, OFF_ON};
use crate::config::{parse_resolution, AppConfig, MouseMode, DEFAULT_RESOLUTION, RESOLUTIONS};
use crate::input::Key;
use crate::menu::screen::{Screen, ScreenEnv, ScreenRequest};
use crate::menu::{Menu, UiContext};
use crate::theme::ThemeOptionsGraphics;

const SCREENS: [&str; 2] = ["1", "2"];

pub struct OptionsGraphicsScreen {
    menu: Menu,
    resolutions: Vec<String>,
    slide_fullscreen: usize,
    slide_resolution: usize,
    slide_screens: usize,
    slide_mouse: usize,
}

/// Offered resolutions, with a configured custom one appended
fn resolution_list(config: &AppConfig) -> (Vec<String>, usize) {
    let mut list: Vec<String> = RESOLUTIONS.iter().map(|r| r.to_string()).collect();
    if let Some(index) = list.iter().position(|r| *r == config.resolution) {
        return (list, index);
    }
    if parse_resolution(&config.resolution).is_some() {
        list.push(config.resolution.clone());
        return (list, RESOLUTIONS.len());
    }
    let fallback = RESOLUTIONS.iter().position(|r| *r == DEFAULT_RESOLUTION).unwrap_or(0);
    (list, fallback)
}

impl OptionsGraphicsScreen {
    pub fn new(ctx: &mut UiContext, theme: &ThemeOptionsGraphics, config: &AppConfig) -> Self {
        let (resolutions, resolution) = resolution_list(config);
        let off_on = translate_all(ctx.language, &OFF_ON);
        let mouse_names = MouseMode::ALL.iter().map(|m| m.as_str().to_string()).collect();

        let mut menu = Menu::new();
        menu.load_from_theme(ctx, &theme.basic);
        let slide_fullscreen = menu.add_select_slide(ctx, &theme.select_fullscreen, off_on, config.fullscreen as usize);
        let slide_resolution = menu.add_select_slide(ctx, &theme.select_resolution, resolutions.clone(), resolution);
        let slide_screens = menu.add_select_slide(
            ctx,
            &theme.select_screens,
            SCREENS.iter().map(|s| s.to_string()).collect(),
            config.screens.clamp(1, 2) as usize - 1,
        );
        let slide_mouse = menu.add_select_slide(ctx, &theme.select_mouse, mouse_names, config.mouse.index());
        menu.add_button(ctx, &theme.button_exit);
        menu.set_interaction(0);

        OptionsGraphicsScreen {
            menu,
            resolutions,
            slide_fullscreen,
            slide_resolution,
            slide_screens,
            slide_mouse,
        }
    }

    fn apply(&self, env: &mut ScreenEnv, slide: usize) -> ScreenRequest {
        let value = self.menu.slide_value(slide);
        let config = &mut *env.config;
        if slide == self.slide_fullscreen {
            config.fullscreen = value == 1;
        } else if slide == self.slide_resolution {
            if let Some(resolution) = self.resolutions.get(value) {
                config.resolution = resolution.clone();
            }
        } else if slide == self.slide_screens {
            config.screens = value as u32 + 1;
        } else if slide == self.slide_mouse {
            config.mouse = MouseMode::from_index(value);
        } else {
            return ScreenRequest::None;
        }
        env.config_dirty = true;
        ScreenRequest::ApplyVideoMode
    }
}

impl Screen for OptionsGraphicsScreen {
    fn id(&self) -> ScreenId {
        ScreenId::OptionsGraphics
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
