//! Application context
//!
//! `App` owns every long-lived piece of state: config, language, skins,
//! themes, the texture cache, the display and the rendering backend. The
//! frame loop in `main` feeds it events and asks it to draw; screens talk
//! back through [`ScreenRequest`]s which are carried out here.
//!
//! # Startup
//!
//! 1. Config (defaults when missing or unreadable)
//! 2. Language (English must exist)
//! 3. Skins and themes (at least one usable theme with a skin)
//! 4. Screens, cursor, display

use crate::config::{AppConfig, ConfigManager, MouseMode, VideoMode};
use crate::display::{Cursor, Display};
use crate::error::CriticalError;
use crate::input::{Key, MenuEvent, MouseButton};
use crate::language::Language;
use crate::menu::screen::{ScreenEnv, ScreenRequest};
use crate::menu::UiContext;
use crate::render::Backend;
use crate::screens::{ScreenId, ScreenSet, ScreenSources};
use crate::skin::Skins;
use crate::texture::{TextureLoader, TextureManager};
use crate::theme::{ThemeError, Themes};

/// What the frame loop has to do after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Continue,
    Quit,
    /// Resize the window or change fullscreen state
    ApplyVideoMode(VideoMode),
}

/// Theme, skin and color of the last theme that loaded
#[derive(Debug, Clone, PartialEq)]
struct LoadedTheme {
    theme: String,
    skin: String,
    color: String,
}

impl LoadedTheme {
    fn of(config: &AppConfig) -> Self {
        LoadedTheme {
            theme: config.theme.clone(),
            skin: config.skin.clone(),
            color: config.color.clone(),
        }
    }

    fn restore(&self, config: &mut AppConfig) {
        config.theme = self.theme.clone();
        config.skin = self.skin.clone();
        config.color = self.color.clone();
    }
}

pub struct App<B: Backend> {
    pub config: AppConfig,
    config_manager: ConfigManager,
    loaded: LoadedTheme,
    language: Language,
    skins: Skins,
    themes: Themes,
    textures: TextureManager,
    pub display: Display,
    backend: B,
}

/// Activates the configured theme, falling back to the first one
///
/// Writes the theme and skin actually used back into `config`.
fn load_configured_theme(
    config: &mut AppConfig,
    themes: &mut Themes,
    skins: &mut Skins,
    language: &Language,
) -> Result<(), ThemeError> {
    if themes.entries().is_empty() {
        return Err(ThemeError::NoThemes {
            dir: config.themes_dir.clone(),
        });
    }
    let index = themes.find(&config.theme).unwrap_or_else(|| {
        log::warn!("Theme {} not found, using {}", config.theme, themes.entries()[0].name);
        0
    });
    themes.load_theme(index, &config.skin, config.system_color(), skins, language)?;
    store_active(config, themes, skins);
    Ok(())
}

/// Like [`load_configured_theme`], trying every other theme when the configured one is unusable
fn load_usable_theme(
    config: &mut AppConfig,
    themes: &mut Themes,
    skins: &mut Skins,
    language: &Language,
) -> Result<(), ThemeError> {
    let error = match load_configured_theme(config, themes, skins, language) {
        Ok(()) => return Ok(()),
        Err(e @ ThemeError::NoThemes { .. }) => return Err(e),
        Err(e) => e,
    };
    log::warn!("{}", error);

    for index in 0..themes.entries().len() {
        let name = themes.entries()[index].name.clone();
        if name.eq_ignore_ascii_case(&config.theme) {
            continue;
        }
        match themes.load_theme(index, &config.skin, config.system_color(), skins, language) {
            Ok(()) => {
                log::warn!("Theme {} is unusable, using {}", config.theme, name);
                store_active(config, themes, skins);
                return Ok(());
            }
            Err(e) => log::warn!("{}", e),
        }
    }
    Err(error)
}

fn store_active(config: &mut AppConfig, themes: &Themes, skins: &Skins) {
    if let Some(theme) = themes.active() {
        config.theme = theme.name.clone();
    }
    if let Some(skin) = skins.active() {
        config.skin = skin.name.clone();
    }
}

/// Builds every screen of the active theme
fn build_screens(
    config: &AppConfig,
    themes: &Themes,
    skins: &Skins,
    language: &Language,
    textures: &mut TextureManager,
    loader: &mut dyn TextureLoader,
    cursor: &mut Cursor,
) -> ScreenSet {
    let mut ctx = UiContext {
        skins,
        language,
        textures,
        loader,
        videos: None,
    };
    cursor.load_textures(&mut ctx);
    let sources = ScreenSources {
        themes,
        skins,
        language,
        config,
    };
    ScreenSet::build(&mut ctx, &sources)
}

impl<B: Backend> App<B> {
    /// Loads the config from `config_manager` and starts up
    pub fn new(backend: B, config_manager: ConfigManager, now: u64) -> Result<Self, CriticalError> {
        let config = config_manager.load_or_default();
        App::with_config(backend, config_manager, config, now)
    }

    pub fn with_config(
        mut backend: B,
        config_manager: ConfigManager,
        mut config: AppConfig,
        now: u64,
    ) -> Result<Self, CriticalError> {
        let language = Language::load(&config.languages_dir, &config.language)?;
        config.language = language.current_name().to_string();

        let mut skins = Skins::scan(&config.themes_dir);
        let mut themes = Themes::scan(&config.themes_dir);
        load_usable_theme(&mut config, &mut themes, &mut skins, &language)?;

        let mut textures = TextureManager::new();
        let mut cursor = Cursor::new(config.mouse == MouseMode::Software);
        let screens = build_screens(
            &config,
            &themes,
            &skins,
            &language,
            &mut textures,
            &mut backend,
            &mut cursor,
        );
        let viewport = backend.viewport();
        let display = Display::new(screens, ScreenId::Main, config.fade, cursor, viewport);

        let mut app = App {
            loaded: LoadedTheme::of(&config),
            config,
            config_manager,
            language,
            skins,
            themes,
            textures,
            display,
            backend,
        };
        app.with_env(now, |display, env| display.show_first(env));
        log::info!("Started with theme {} / skin {}", app.config.theme, app.config.skin);
        Ok(app)
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Runs `f` with the display and a screen environment, saving the config if it changed
    fn with_env<R>(&mut self, now: u64, f: impl FnOnce(&mut Display, &mut ScreenEnv) -> R) -> R {
        let mut env = ScreenEnv {
            config: &mut self.config,
            themes: &self.themes,
            skins: &self.skins,
            language: &self.language,
            now,
            config_dirty: false,
        };
        let result = f(&mut self.display, &mut env);
        if env.config_dirty {
            self.save_config();
        }
        result
    }

    fn save_config(&self) {
        if let Err(e) = self.config_manager.save(&self.config) {
            log::error!("Could not save config: {}", e);
        }
    }

    pub fn handle_event(&mut self, event: MenuEvent, now: u64) -> AppAction {
        match event {
            MenuEvent::Quit => AppAction::Quit,
            MenuEvent::Key { key, pressed } => self.handle_key(key, pressed, now),
            MenuEvent::TextInput(text) => {
                self.display.parse_text_input(&text);
                AppAction::Continue
            }
            MenuEvent::MouseMotion { x, y } => self.handle_mouse(None, false, x, y, now),
            MenuEvent::MouseButton { button, down, x, y } => self.handle_mouse(Some(button), down, x, y, now),
        }
    }

    fn handle_key(&mut self, key: Key, pressed: bool, now: u64) -> AppAction {
        let request = self.with_env(now, |display, env| display.parse_input(env, key, pressed));
        self.apply_request(request, now)
    }

    fn handle_mouse(
        &mut self,
        button: Option<MouseButton>,
        down: bool,
        x: i32,
        y: i32,
        now: u64,
    ) -> AppAction {
        self.display.viewport = self.backend.viewport();
        let result = self.display.parse_mouse(button, down, x, y, now);
        for key in result.keys {
            let action = self.handle_key(key, true, now);
            if action != AppAction::Continue {
                return action;
            }
        }
        AppAction::Continue
    }

    /// Carries out what a screen asked for
    pub fn apply_request(&mut self, request: ScreenRequest, now: u64) -> AppAction {
        match request {
            ScreenRequest::None => {}
            ScreenRequest::FadeTo(id) => self.with_env(now, |display, env| display.fade_to(id, env)),
            ScreenRequest::CheckFadeTo(target, message) => {
                self.with_env(now, |display, env| display.check_fade_to(target, &message, env))
            }
            ScreenRequest::ShowError(message) => self.show_error(&message, now),
            ScreenRequest::ClosePopup { confirmed } => {
                self.with_env(now, |display, env| display.close_popup(confirmed, env))
            }
            ScreenRequest::ReloadUi => {
                if let Err(e) = self.reload_ui(now) {
                    log::error!("{}", e);
                    self.restore_loaded_theme(now);
                    self.show_error(&e.to_string(), now);
                }
                self.save_config();
            }
            ScreenRequest::ApplyVideoMode => {
                self.save_config();
                self.display.cursor.software = self.config.mouse == MouseMode::Software;
                return AppAction::ApplyVideoMode(self.config.video_mode());
            }
            ScreenRequest::Quit => return AppAction::Quit,
        }
        AppAction::Continue
    }

    /// Puts the last working theme back after a failed reload
    fn restore_loaded_theme(&mut self, now: u64) {
        log::info!("Restoring theme {} / skin {}", self.loaded.theme, self.loaded.skin);
        self.loaded.restore(&mut self.config);
        if let Err(e) = self.reload_ui(now) {
            log::error!("Could not restore theme {}: {}", self.loaded.theme, e);
        }
    }

    fn show_error(&mut self, message: &str, now: u64) {
        self.with_env(now, |display, env| display.show_popup(ScreenId::ErrorPopup, message, env));
    }

    /// Reloads language and theme from the config and rebuilds every screen
    ///
    /// The screen showing before the reload is shown again afterwards.
    pub fn reload_ui(&mut self, now: u64) -> Result<(), CriticalError> {
        if self.display.is_transitioning() {
            log::warn!("UI reload during a screen transition");
        }
        if let Err(e) = self.language.change_language(&self.config.language) {
            log::warn!("{}", e);
        }
        load_configured_theme(&mut self.config, &mut self.themes, &mut self.skins, &self.language)?;
        self.loaded = LoadedTheme::of(&self.config);

        self.textures.clear(&mut self.backend);
        let screens = build_screens(
            &self.config,
            &self.themes,
            &self.skins,
            &self.language,
            &mut self.textures,
            &mut self.backend,
            &mut self.display.cursor,
        );
        let current = self.display.current_id();
        let selection = self.display.current_selection();
        self.with_env(now, |display, env| display.replace_screens(screens, current, selection, env));
        log::info!("Reloaded UI with theme {} / skin {}", self.config.theme, self.config.skin);
        Ok(())
    }

    /// Draws one frame; false once the application should end
    pub fn draw(&mut self, now: u64) -> Result<bool, String> {
        self.display.viewport = self.backend.viewport();
        self.display.draw(&mut self.backend, now)
    }
}
