//! Shared unit test fixtures
//!
//! A temporary data directory with one skin (`Modern/Blue`) and an English
//! language file, plus the contexts menus and screens are built and driven with.

use crate::config::AppConfig;
use crate::language::Language;
use crate::menu::screen::ScreenEnv;
use crate::menu::UiContext;
use crate::render::testing::FakeLoader;
use crate::skin::Skins;
use crate::texture::TextureManager;
use crate::theme::loader::THEME_VERSION;
use crate::theme::Themes;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const SKIN_INI: &str = "\
[Skin]
Name=Blue
Theme=Modern
Creator=Tests
Color=Blue

[Textures]
Button = button.png
ButtonFade = button_fade.png
Background = bg.png
Intro = intro.mp4
SelectSlide = slide.png
SelectSlideBG = slide_bg.png
SelectSlideArrowLeft = arrow_left.png
SelectSlideArrowRight = arrow_right.png
Cursor = cursor.png
Cursor_Pressed = cursor_pressed.png
";

const ENGLISH_INI: &str = "\
[Text]
SING_SING=Sing
SING_OPTIONS=Options
SING_OPTIONS_GAME=Game
MSG_QUIT_USDX=Really quit?
";

fn theme_ini(name: &str, default_skin: &str) -> String {
    format!("[Theme]\nName={}\nUS_Version={}\nDefaultSkin={}\n", name, THEME_VERSION, default_skin)
}

fn skin_ini(name: &str, theme: &str, color: &str) -> String {
    format!("[Skin]\nName={}\nTheme={}\nColor={}\n", name, theme, color)
}

pub struct Fixture {
    pub dir: TempDir,
    pub skins: Skins,
    pub language: Language,
    pub textures: TextureManager,
    pub loader: FakeLoader,
    pub config: AppConfig,
    pub themes: Themes,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let skin_dir = dir.path().join("themes").join("Modern");
        fs::create_dir_all(&skin_dir).unwrap();
        fs::write(skin_dir.join("Blue.ini"), SKIN_INI).unwrap();

        let language_dir = dir.path().join("languages");
        fs::create_dir_all(&language_dir).unwrap();
        fs::write(language_dir.join("English.ini"), ENGLISH_INI).unwrap();

        let mut skins = Skins::scan(&dir.path().join("themes"));
        skins.activate(0).unwrap();
        let language = Language::load(&language_dir, "English").unwrap();

        Fixture {
            dir,
            skins,
            language,
            textures: TextureManager::new(),
            loader: FakeLoader::default(),
            config: AppConfig::default(),
            themes: Themes::default(),
        }
    }

    /// Registers `Modern` and a second theme `Deluxe` with skins `Day` and `Night`
    ///
    /// `Modern/Blue` stays the active skin.
    pub fn scan_themes(&mut self) {
        let themes_dir = self.dir.path().join("themes");
        fs::write(themes_dir.join("Modern.ini"), theme_ini("Modern", "Blue")).unwrap();
        fs::write(themes_dir.join("Deluxe.ini"), theme_ini("Deluxe", "Night")).unwrap();
        let deluxe = themes_dir.join("Deluxe");
        fs::create_dir_all(&deluxe).unwrap();
        fs::write(deluxe.join("Day.ini"), skin_ini("Day", "Deluxe", "Orange")).unwrap();
        fs::write(deluxe.join("Night.ini"), skin_ini("Night", "Deluxe", "Violet")).unwrap();

        self.themes = Themes::scan(&themes_dir);
        self.skins = Skins::scan(&themes_dir);
        let active = self.skins.find("Modern", "Blue").unwrap();
        self.skins.activate(active).unwrap();
    }

    /// Writes a valid theme file that no skin belongs to
    pub fn write_skinless_theme(&self, name: &str) {
        let file = self.dir.path().join("themes").join(format!("{}.ini", name));
        fs::write(file, theme_ini(name, "")).unwrap();
    }

    /// Path of a file inside the skin directory
    pub fn skin_path(&self, file: &str) -> PathBuf {
        self.dir.path().join("themes").join("Modern").join(file)
    }

    pub fn ctx(&mut self) -> UiContext<'_> {
        UiContext {
            skins: &self.skins,
            language: &self.language,
            textures: &mut self.textures,
            loader: &mut self.loader,
            videos: None,
        }
    }

    pub fn env(&mut self, now: u64) -> ScreenEnv<'_> {
        ScreenEnv {
            config: &mut self.config,
            themes: &self.themes,
            skins: &self.skins,
            language: &self.language,
            now,
            config_dirty: false,
        }
    }
}
