//! Theme loader
//!
//! Themes are `*.ini` files in the themes directory. The `[Theme]` header is
//! read once at startup; the per-screen sections are parsed again every time
//! a theme/skin pair is activated.
//!
//! Section names follow `<Screen><Kind><Name>`, e.g. `MainButtonSolo` or
//! `OptionsGameSelectLanguage`. Arrays of unknown length are discovered by
//! probing `<prefix>1`, `<prefix>2`, ... until a section is missing. Button
//! texts are counted by an explicit `Texts=N` key instead.

use super::color::{ColorTable, Rgb, SystemColor};
use super::ini::{IniError, IniFile};
use super::screens::*;
use super::types::*;
use crate::language::Language;
use crate::skin::{ini_files, SkinError, Skins};
use crate::texture::TextureType;
use std::fmt;
use std::path::{Path, PathBuf};

/// Version string every theme header must carry
pub const THEME_VERSION: &str = "USD 110";

/// Errors that can occur while activating a theme
#[derive(Debug)]
pub enum ThemeError {
    /// No usable theme in the directory
    NoThemes { dir: PathBuf },
    InvalidIndex(usize),
    /// The theme has no skin at all
    NoSkin { theme: String },
    Skin(SkinError),
    Ini(IniError),
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ThemeError::NoThemes { dir } => write!(f, "No themes found in {}", dir.display()),
            ThemeError::InvalidIndex(index) => write!(f, "Invalid theme index: {}", index),
            ThemeError::NoSkin { theme } => write!(f, "Theme {} has no skin", theme),
            ThemeError::Skin(e) => write!(f, "{}", e),
            ThemeError::Ini(e) => write!(f, "Theme file error: {}", e),
        }
    }
}

impl std::error::Error for ThemeError {}

impl From<IniError> for ThemeError {
    fn from(error: IniError) -> Self {
        ThemeError::Ini(error)
    }
}

impl From<SkinError> for ThemeError {
    fn from(error: SkinError) -> Self {
        ThemeError::Skin(error)
    }
}

/// Header of one registered theme
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeEntry {
    pub name: String,
    pub file_name: PathBuf,
    pub creator: String,
    pub default_skin: String,
}

#[derive(Debug, Default)]
pub struct Themes {
    entries: Vec<ThemeEntry>,
    colors: ColorTable,
    screens: ThemeScreens,
    active: Option<usize>,
}

impl Themes {
    /// Registers the header of every theme file in `dir`
    pub fn scan(dir: &Path) -> Self {
        let mut themes = Themes::default();
        for file in ini_files(dir) {
            themes.load_header(&file);
        }
        log::info!("Found {} theme(s) in {}", themes.entries.len(), dir.display());
        themes
    }

    /// Reads a theme header and registers it when the version matches
    ///
    /// Returns whether an entry was added.
    pub fn load_header(&mut self, file: &Path) -> bool {
        let ini = match IniFile::load(file) {
            Ok(ini) => ini,
            Err(e) => {
                log::warn!("Skipping theme: {}", e);
                return false;
            }
        };

        let version = ini.get_value("Theme", "US_Version", "");
        if version.trim() != THEME_VERSION {
            log::warn!(
                "Theme {} has version \"{}\", expected \"{}\"",
                file.display(),
                version,
                THEME_VERSION
            );
            return false;
        }

        let stem = file
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.entries.push(ThemeEntry {
            name: ini.get_value("Theme", "Name", &stem),
            file_name: file.to_path_buf(),
            creator: ini.get_value("Theme", "US_Author", ""),
            default_skin: ini.get_value("Theme", "DefaultSkin", ""),
        });
        true
    }

    pub fn entries(&self) -> &[ThemeEntry] {
        &self.entries
    }

    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.name.clone()).collect()
    }

    pub fn find(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.name.eq_ignore_ascii_case(name))
    }

    pub fn active(&self) -> Option<&ThemeEntry> {
        self.active.and_then(|i| self.entries.get(i))
    }

    pub fn screens(&self) -> &ThemeScreens {
        &self.screens
    }

    #[cfg(test)]
    pub fn colors(&self) -> &ColorTable {
        &self.colors
    }

    /// Picks the skin for a theme
    ///
    /// Order: `skin_name` of that theme, the theme's `DefaultSkin`, the first
    /// skin of the theme.
    pub fn resolve_skin(&self, index: usize, skin_name: &str, skins: &Skins) -> Result<usize, ThemeError> {
        let entry = self.entries.get(index).ok_or(ThemeError::InvalidIndex(index))?;

        if let Some(skin) = skins.find(&entry.name, skin_name) {
            return Ok(skin);
        }
        if let Some(skin) = skins.find(&entry.name, &entry.default_skin) {
            log::warn!(
                "Skin {} not found for theme {}, using default skin {}",
                skin_name,
                entry.name,
                entry.default_skin
            );
            return Ok(skin);
        }
        match skins.indices_for_theme(&entry.name).first() {
            Some(&skin) => {
                log::warn!("Default skin of theme {} missing, using first skin", entry.name);
                Ok(skin)
            }
            None => Err(ThemeError::NoSkin {
                theme: entry.name.clone(),
            }),
        }
    }

    /// Activates a theme/skin pair and parses every screen record
    pub fn load_theme(
        &mut self,
        index: usize,
        skin_name: &str,
        color: SystemColor,
        skins: &mut Skins,
        language: &Language,
    ) -> Result<(), ThemeError> {
        let skin = self.resolve_skin(index, skin_name, skins)?;
        skins.activate(skin)?;

        let entry = &self.entries[index];
        let ini = IniFile::load(&entry.file_name)?;
        log::info!("Loading theme {} with color {}", entry.name, color.as_str());

        self.colors = ColorTable::build(&ini.section_entries("Colors"), color);
        let reader = ThemeReader {
            ini: &ini,
            colors: &self.colors,
            language,
        };
        self.screens = reader.screens();
        self.active = Some(index);
        Ok(())
    }
}

/// Section parser bound to one theme file and its color table
pub struct ThemeReader<'a> {
    pub ini: &'a IniFile,
    pub colors: &'a ColorTable,
    pub language: &'a Language,
}

impl ThemeReader<'_> {
    fn float(&self, section: &str, key: &str, default: f32) -> f32 {
        self.ini.get_double_value(section, key, default as f64) as f32
    }

    fn flag(&self, section: &str, key: &str, default: bool) -> bool {
        self.ini.get_bool_value(section, key, default)
    }

    fn string(&self, section: &str, key: &str) -> String {
        self.ini.get_value(section, key, "")
    }

    fn texture_type(&self, section: &str, key: &str) -> TextureType {
        let value = self.string(section, key);
        if value.is_empty() {
            return TextureType::Plain;
        }
        value.parse().unwrap_or_else(|e| {
            log::warn!("[{}] {}, using {}", section, e, TextureType::Plain.as_str());
            TextureType::Plain
        })
    }

    /// `Align` as an index (0..2) or a name
    fn align(&self, section: &str) -> Align {
        let value = self.string(section, "Align");
        if let Ok(index) = value.trim().parse::<i64>() {
            return Align::from_index(index);
        }
        if value.is_empty() {
            return Align::Left;
        }
        value.parse().unwrap_or_else(|e| {
            log::warn!("[{}] {}, using {}", section, e, Align::Left.as_str());
            Align::Left
        })
    }

    /// `FadeTexPos` as an index (0..3, others mean top) or a name
    fn fade_tex_pos(&self, section: &str) -> FadeTexPos {
        let value = self.string(section, "FadeTexPos");
        if let Ok(index) = value.trim().parse::<i64>() {
            return FadeTexPos::from_index(index);
        }
        if value.is_empty() {
            return FadeTexPos::Top;
        }
        value.parse().unwrap_or_else(|e| {
            log::warn!("[{}] {}, using {}", section, e, FadeTexPos::Top.as_str());
            FadeTexPos::Top
        })
    }

    /// Reads `<prefix>Color` as a color name, else `<prefix>ColR/G/B`
    fn color(&self, section: &str, prefix: &str, default: Rgb) -> (String, Rgb) {
        let name = self.string(section, &format!("{}Color", prefix));
        if let Some(rgb) = self.colors.get(&name) {
            return (name, rgb);
        }
        if !name.is_empty() {
            log::warn!("[{}] unknown color {}", section, name);
        }
        let rgb = Rgb::new(
            self.float(section, &format!("{}ColR", prefix), default.r),
            self.float(section, &format!("{}ColG", prefix), default.g),
            self.float(section, &format!("{}ColB", prefix), default.b),
        );
        (String::new(), rgb)
    }

    /// Section names `<prefix>1`, `<prefix>2`, ... until one is missing
    fn probe(&self, prefix: &str) -> Vec<String> {
        (1..)
            .map(|n| format!("{}{}", prefix, n))
            .take_while(|section| self.ini.section_exists(section))
            .collect()
    }

    pub fn background(&self, name: &str) -> ThemeBackground {
        let section = format!("{}Background", name);
        let defaults = ThemeBackground::default();

        let type_name = self.ini.get_value(&section, "Type", defaults.bg_type.as_str());
        let bg_type = type_name.parse().unwrap_or_else(|e| {
            log::warn!("[{}] {}, using auto", section, e);
            BackgroundType::Auto
        });

        ThemeBackground {
            bg_type,
            color: self.color(&section, "", defaults.color).1,
            tex: self.string(&section, "Tex"),
            alpha: self.float(&section, "Alpha", defaults.alpha),
        }
    }

    pub fn text(&self, section: &str) -> ThemeText {
        let defaults = ThemeText::default();
        let (color, col) = self.color(section, "", defaults.col);
        ThemeText {
            x: self.float(section, "X", 0.0),
            y: self.float(section, "Y", 0.0),
            w: self.float(section, "W", 0.0),
            color,
            col,
            font: self.ini.get_long_value(section, "Font", 0).max(0) as usize,
            size: self.float(section, "Size", defaults.size),
            italic: self.flag(section, "Italic", false),
            align: self.align(section),
            text: self.language.translate(&self.string(section, "Text")),
            writable: self.flag(section, "Writable", false),
            reflection: self.flag(section, "Reflection", false),
            reflection_spacing: self.float(section, "ReflectionSpacing", 0.0),
        }
    }

    pub fn texts(&self, prefix: &str) -> Vec<ThemeText> {
        self.probe(prefix).iter().map(|s| self.text(s)).collect()
    }

    pub fn static_(&self, section: &str) -> ThemeStatic {
        let defaults = ThemeStatic::default();
        let (color, col) = self.color(section, "", defaults.col);
        ThemeStatic {
            x: self.float(section, "X", 0.0),
            y: self.float(section, "Y", 0.0),
            z: self.float(section, "Z", 0.0),
            w: self.float(section, "W", 0.0),
            h: self.float(section, "H", 0.0),
            color,
            col,
            tex: self.string(section, "Tex"),
            typ: self.texture_type(section, "Type"),
            tex_x1: self.float(section, "TexX1", defaults.tex_x1),
            tex_y1: self.float(section, "TexY1", defaults.tex_y1),
            tex_x2: self.float(section, "TexX2", defaults.tex_x2),
            tex_y2: self.float(section, "TexY2", defaults.tex_y2),
            reflection: self.flag(section, "Reflection", false),
            reflection_spacing: self.float(section, "ReflectionSpacing", 0.0),
        }
    }

    pub fn statics(&self, prefix: &str) -> Vec<ThemeStatic> {
        self.probe(prefix).iter().map(|s| self.static_(s)).collect()
    }

    /// Parses a button and links it to its collection
    ///
    /// A `Parent` outside `1..=collections.len()` is reset to 0; a valid one
    /// increments that collection's child count.
    pub fn button(&self, section: &str, collections: &mut [ThemeButtonCollection]) -> ThemeButton {
        let defaults = ThemeButton::default();
        let (color, col) = self.color(section, "", defaults.col);
        let (dcolor, dcol) = self.color(section, "D", defaults.dcol);
        let w = self.float(section, "W", 0.0);
        let h = self.float(section, "H", 0.0);
        let reflection_spacing = self.float(section, "ReflectionSpacing", defaults.reflection_spacing);

        let mut parent = self.ini.get_long_value(section, "Parent", 0);
        if parent > 0 && (parent as usize) <= collections.len() {
            collections[parent as usize - 1].child_count += 1;
        } else {
            if parent != 0 {
                log::warn!("[{}] parent {} does not exist", section, parent);
            }
            parent = 0;
        }

        let text_count = self.ini.get_long_value(section, "Texts", 0).max(0);
        let text = (1..=text_count)
            .map(|n| self.text(&format!("{}Text{}", section, n)))
            .collect();

        ThemeButton {
            text,
            x: self.float(section, "X", 0.0),
            y: self.float(section, "Y", 0.0),
            z: self.float(section, "Z", 0.0),
            w,
            h,
            color,
            col,
            int: self.float(section, "Int", defaults.int),
            dcolor,
            dcol,
            dint: self.float(section, "DInt", defaults.dint),
            tex: self.string(section, "Tex"),
            typ: self.texture_type(section, "Type"),
            visible: self.flag(section, "Visible", true),
            reflection: self.flag(section, "Reflection", false),
            reflection_spacing,
            deselect_reflection_spacing: self.float(section, "DeSelectReflectionSpacing", reflection_spacing),
            select_w: self.float(section, "SelectW", w),
            select_h: self.float(section, "SelectH", h),
            fade: self.flag(section, "Fade", false),
            fade_text: self.flag(section, "FadeText", false),
            fade_tex: self.string(section, "FadeTex"),
            fade_tex_pos: self.fade_tex_pos(section),
            parent: parent as usize,
        }
    }

    pub fn button_collections(&self, prefix: &str) -> Vec<ThemeButtonCollection> {
        self.probe(prefix)
            .iter()
            .map(|section| ThemeButtonCollection {
                style: self.button(section, &mut []),
                child_count: 0,
                first_child: self.ini.get_long_value(section, "FirstChild", 0).max(0) as usize,
            })
            .collect()
    }

    pub fn select_slide(&self, section: &str) -> ThemeSelectSlide {
        let defaults = ThemeSelectSlide::default();
        ThemeSelectSlide {
            text: self.language.translate(&self.string(section, "Text")),
            tex: self.string(section, "Tex"),
            typ: self.texture_type(section, "Type"),
            tex_sbg: self.string(section, "TexSBG"),
            typ_sbg: self.texture_type(section, "TypeSBG"),
            x: self.float(section, "X", 0.0),
            y: self.float(section, "Y", 0.0),
            w: self.float(section, "W", 0.0),
            h: self.float(section, "H", 0.0),
            z: self.float(section, "Z", 0.0),
            sbg_w: self.float(section, "SBGW", defaults.sbg_w),
            text_size: self.float(section, "TextSize", defaults.text_size),
            skip_x: self.float(section, "SkipX", 0.0),
            show_arrows: self.flag(section, "ShowArrows", false),
            one_item_only: self.flag(section, "OneItemOnly", false),
            col: self.color(section, "", defaults.col).1,
            int: self.float(section, "Int", defaults.int),
            dcol: self.color(section, "D", defaults.dcol).1,
            dint: self.float(section, "DInt", defaults.dint),
            tcol: self.color(section, "T", defaults.tcol).1,
            tint: self.float(section, "TInt", defaults.tint),
            tdcol: self.color(section, "TD", defaults.tdcol).1,
            tdint: self.float(section, "TDInt", defaults.tdint),
            sbg_col: self.color(section, "SBG", defaults.sbg_col).1,
            sbg_int: self.float(section, "SBGInt", defaults.sbg_int),
            sbg_dcol: self.color(section, "SBGD", defaults.sbg_dcol).1,
            sbg_dint: self.float(section, "SBGDInt", defaults.sbg_dint),
            st_col: self.color(section, "ST", defaults.st_col).1,
            st_int: self.float(section, "STInt", defaults.st_int),
            st_dcol: self.color(section, "STD", defaults.st_dcol).1,
            st_dint: self.float(section, "STDInt", defaults.st_dint),
        }
    }

    /// Background, texts, statics and button collections of screen `name`
    pub fn basic(&self, name: &str) -> ThemeBasic {
        ThemeBasic {
            background: self.background(name),
            text: self.texts(&format!("{}Text", name)),
            statics: self.statics(&format!("{}Static", name)),
            button_collections: self.button_collections(&format!("{}ButtonCollection", name)),
        }
    }

    fn descriptions(&self, ids: &[&str], suffix: &str) -> Vec<String> {
        ids.iter()
            .map(|id| self.language.translate(&format!("{}{}", id, suffix)))
            .collect()
    }

    pub fn main(&self) -> ThemeMain {
        let mut basic = self.basic("Main");
        let collections = &mut basic.button_collections;
        let button_solo = self.button("MainButtonSolo", collections);
        let button_multi = self.button("MainButtonMulti", collections);
        let button_stat = self.button("MainButtonStats", collections);
        let button_editor = self.button("MainButtonEditor", collections);
        let button_options = self.button("MainButtonOptions", collections);
        let button_exit = self.button("MainButtonExit", collections);

        ThemeMain {
            button_solo,
            button_multi,
            button_stat,
            button_editor,
            button_options,
            button_exit,
            text_description: self.text("MainTextDescription"),
            text_description_long: self.text("MainTextDescriptionLong"),
            description: self.descriptions(&MAIN_DESCRIPTIONS, ""),
            description_long: self.descriptions(&MAIN_DESCRIPTIONS, "_DESC"),
            basic,
        }
    }

    pub fn options(&self) -> ThemeOptions {
        let mut basic = self.basic("Options");
        let collections = &mut basic.button_collections;
        let button_game = self.button("OptionsButtonGame", collections);
        let button_graphics = self.button("OptionsButtonGraphics", collections);
        let button_themes = self.button("OptionsButtonThemes", collections);
        let button_exit = self.button("OptionsButtonExit", collections);

        ThemeOptions {
            button_game,
            button_graphics,
            button_themes,
            button_exit,
            text_description: self.text("OptionsTextDescription"),
            description: self.descriptions(&OPTIONS_DESCRIPTIONS, "_DESC"),
            basic,
        }
    }

    pub fn options_game(&self) -> ThemeOptionsGame {
        let mut basic = self.basic("OptionsGame");
        let button_exit = self.button("OptionsGameButtonExit", &mut basic.button_collections);
        ThemeOptionsGame {
            select_language: self.select_slide("OptionsGameSelectLanguage"),
            select_tabs: self.select_slide("OptionsGameSelectTabs"),
            select_sorting: self.select_slide("OptionsGameSelectSorting"),
            select_show_scores: self.select_slide("OptionsGameSelectShowScores"),
            select_debug: self.select_slide("OptionsGameSelectDebug"),
            button_exit,
            basic,
        }
    }

    pub fn options_graphics(&self) -> ThemeOptionsGraphics {
        let mut basic = self.basic("OptionsGraphics");
        let button_exit = self.button("OptionsGraphicsButtonExit", &mut basic.button_collections);
        ThemeOptionsGraphics {
            select_fullscreen: self.select_slide("OptionsGraphicsSelectFullscreen"),
            select_resolution: self.select_slide("OptionsGraphicsSelectResolution"),
            select_screens: self.select_slide("OptionsGraphicsSelectScreens"),
            select_mouse: self.select_slide("OptionsGraphicsSelectMouse"),
            button_exit,
            basic,
        }
    }

    pub fn options_themes(&self) -> ThemeOptionsThemes {
        let mut basic = self.basic("OptionsThemes");
        let button_exit = self.button("OptionsThemesButtonExit", &mut basic.button_collections);
        ThemeOptionsThemes {
            select_theme: self.select_slide("OptionsThemesSelectTheme"),
            select_skin: self.select_slide("OptionsThemesSelectSkin"),
            select_color: self.select_slide("OptionsThemesSelectColor"),
            button_exit,
            basic,
        }
    }

    pub fn popup(&self, name: &str) -> ThemePopup {
        let mut basic = self.basic(name);
        let collections = &mut basic.button_collections;
        let button1 = self.button(&format!("{}Button1", name), collections);
        let button2 = self.button(&format!("{}Button2", name), collections);
        ThemePopup {
            text: self.text(&format!("{}Text", name)),
            button1,
            button2,
            basic,
        }
    }

    pub fn screens(&self) -> ThemeScreens {
        ThemeScreens {
            main: self.main(),
            options: self.options(),
            options_game: self.options_game(),
            options_graphics: self.options_graphics(),
            options_themes: self.options_themes(),
            check_popup: self.popup("CheckPopup"),
            error_popup: self.popup("ErrorPopup"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const THEME: &str = "[Theme]\n\
        Name=Modern\n\
        US_Version=USD 110\n\
        US_Author=Tester\n\
        DefaultSkin=Blue\n\
        [Colors]\n\
        White=255 255 255\n\
        [MainBackground]\n\
        Type=Color\n\
        ColR=0,5\n\
        [MainText1]\n\
        X=10\n\
        Text=SING_SING\n\
        Color=ColorLight\n\
        Align=2\n\
        [MainText2]\n\
        Y=20\n\
        Align=center\n\
        [MainText4]\n\
        Y=40\n\
        [MainStatic1]\n\
        Tex=Bar\n\
        Type=Transparent\n\
        [MainButtonCollection1]\n\
        X=100\n\
        FirstChild=2\n\
        [MainButtonSolo]\n\
        Tex=Button\n\
        W=200\n\
        H=40\n\
        Texts=2\n\
        Color=White\n\
        DColR=0,25\n\
        [MainButtonSoloText1]\n\
        Text=SING_SING\n\
        [MainButtonSoloText2]\n\
        Text=UNTRANSLATED\n\
        [MainButtonSoloText3]\n\
        Text=IGNORED\n\
        [MainButtonMulti]\n\
        Parent=1\n\
        FadeTexPos=bottom\n\
        [MainButtonStats]\n\
        Parent=1\n\
        [MainButtonEditor]\n\
        Parent=5\n\
        [MainButtonExit]\n\
        Fade=1\n\
        FadeTexPos=9\n\
        [OptionsGameSelectLanguage]\n\
        Text=SING_OPTIONS_GAME_LANGUAGE\n\
        SBGW=300\n\
        TColor=White\n";

    struct Fixture {
        _dir: TempDir,
        themes_dir: PathBuf,
        language: Language,
    }

    fn fixture() -> Fixture {
        let dir = TempDir::new().unwrap();
        let themes_dir = dir.path().join("themes");
        let lang_dir = dir.path().join("languages");
        fs::create_dir_all(themes_dir.join("Modern")).unwrap();
        fs::create_dir_all(&lang_dir).unwrap();

        fs::write(themes_dir.join("Modern.ini"), THEME).unwrap();
        fs::write(
            themes_dir.join("Old.ini"),
            "[Theme]\nName=Old\nUS_Version=USD 090\n",
        )
        .unwrap();
        fs::write(
            themes_dir.join("Modern").join("Blue.ini"),
            "[Skin]\nName=Blue\nTheme=Modern\nColor=Blue\n",
        )
        .unwrap();
        fs::write(
            themes_dir.join("Modern").join("Red.ini"),
            "[Skin]\nName=Red\nTheme=Modern\nColor=Red\n",
        )
        .unwrap();
        fs::write(lang_dir.join("English.ini"), "[Text]\nSING_SING=Sing\n").unwrap();

        let language = Language::load(&lang_dir, "English").unwrap();
        Fixture {
            _dir: dir,
            themes_dir,
            language,
        }
    }

    #[test]
    fn test_header_version_filter() {
        let fx = fixture();
        let mut themes = Themes::default();

        assert!(themes.load_header(&fx.themes_dir.join("Modern.ini")));
        assert!(!themes.load_header(&fx.themes_dir.join("Old.ini")));
        assert_eq!(themes.entries().len(), 1);

        let entry = &themes.entries()[0];
        assert_eq!(entry.name, "Modern");
        assert_eq!(entry.creator, "Tester");
        assert_eq!(entry.default_skin, "Blue");
    }

    #[test]
    fn test_scan_skips_mismatched_versions() {
        let fx = fixture();
        let themes = Themes::scan(&fx.themes_dir);
        assert_eq!(themes.names(), vec!["Modern"]);
    }

    #[test]
    fn test_skin_resolution_falls_back_to_default() {
        let fx = fixture();
        let themes = Themes::scan(&fx.themes_dir);
        let skins = Skins::scan(&fx.themes_dir);

        let red = skins.find("Modern", "Red").unwrap();
        let blue = skins.find("Modern", "Blue").unwrap();
        assert_eq!(themes.resolve_skin(0, "Red", &skins).unwrap(), red);
        assert_eq!(themes.resolve_skin(0, "Purple", &skins).unwrap(), blue);
        assert!(matches!(
            themes.resolve_skin(3, "Red", &skins),
            Err(ThemeError::InvalidIndex(3))
        ));
    }

    #[test]
    fn test_theme_without_skins_is_error() {
        let fx = fixture();
        let themes = Themes::scan(&fx.themes_dir);
        let skins = Skins::default();
        assert!(matches!(themes.resolve_skin(0, "Blue", &skins), Err(ThemeError::NoSkin { .. })));
    }

    #[test]
    fn test_load_theme_parses_main_screen() {
        let fx = fixture();
        let mut themes = Themes::scan(&fx.themes_dir);
        let mut skins = Skins::scan(&fx.themes_dir);
        themes
            .load_theme(0, "Blue", SystemColor::Blue, &mut skins, &fx.language)
            .unwrap();

        assert_eq!(skins.active().unwrap().name, "Blue");
        let main = &themes.screens().main;

        assert_eq!(main.basic.background.bg_type, BackgroundType::Color);
        assert!((main.basic.background.color.r - 0.5).abs() < 1e-6);

        // probing stops at the first gap
        assert_eq!(main.basic.text.len(), 2);
        assert_eq!(main.basic.text[0].text, "Sing");
        assert_eq!(main.basic.text[0].col, themes.colors().get("ColorLight").unwrap());
        assert_eq!(main.basic.statics[0].typ, TextureType::Transparent);
        assert_eq!(main.basic.text[0].align, Align::Right);
        assert_eq!(main.basic.text[1].align, Align::Center);

        // explicit text count, ids echo when untranslated
        let solo = &main.button_solo;
        assert_eq!(solo.text.len(), 2);
        assert_eq!(solo.text[1].text, "UNTRANSLATED");
        assert_eq!(solo.col, Rgb::WHITE);
        assert_eq!(solo.dcol, Rgb::new(0.25, 1.0, 1.0));
        assert_eq!(solo.select_w, 200.0);

        assert_eq!(main.basic.button_collections.len(), 1);
        assert_eq!(main.basic.button_collections[0].child_count, 2);
        assert_eq!(main.basic.button_collections[0].first_child, 2);
        assert_eq!(main.button_multi.parent, 1);
        assert_eq!(main.button_editor.parent, 0);
        assert_eq!(main.button_exit.fade_tex_pos, FadeTexPos::Top);
        assert_eq!(main.button_multi.fade_tex_pos, FadeTexPos::Bottom);
        assert!(main.button_exit.fade);
    }

    #[test]
    fn test_select_slide_section() {
        let fx = fixture();
        let mut themes = Themes::scan(&fx.themes_dir);
        let mut skins = Skins::scan(&fx.themes_dir);
        themes
            .load_theme(0, "Red", SystemColor::Red, &mut skins, &fx.language)
            .unwrap();

        let slide = &themes.screens().options_game.select_language;
        assert_eq!(slide.text, "SING_OPTIONS_GAME_LANGUAGE");
        assert_eq!(slide.sbg_w, 300.0);
        assert_eq!(slide.tcol, Rgb::WHITE);
        assert_eq!(slide.text_size, 30.0);
    }
}
