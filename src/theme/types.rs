//! Theme value types
//!
//! Plain declarative records parsed from theme files. They carry no behavior;
//! `Menu` turns them into live widgets.

use super::color::Rgb;
use crate::texture::TextureType;
use std::str::FromStr;

/// How a screen paints its backdrop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackgroundType {
    None,
    Color,
    Texture,
    Video,
    Fade,
    #[default]
    Auto,
}

impl BackgroundType {
    pub fn as_str(self) -> &'static str {
        match self {
            BackgroundType::None => "none",
            BackgroundType::Color => "color",
            BackgroundType::Texture => "texture",
            BackgroundType::Video => "video",
            BackgroundType::Fade => "fade",
            BackgroundType::Auto => "auto",
        }
    }
}

impl FromStr for BackgroundType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(BackgroundType::None),
            "color" => Ok(BackgroundType::Color),
            "texture" => Ok(BackgroundType::Texture),
            "video" => Ok(BackgroundType::Video),
            "fade" => Ok(BackgroundType::Fade),
            "auto" => Ok(BackgroundType::Auto),
            _ => Err(format!("Unknown background type: {}", s)),
        }
    }
}

/// Horizontal text alignment, stored as 0/1/2 in theme files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl Align {
    pub fn from_index(value: i64) -> Self {
        match value {
            1 => Align::Center,
            2 => Align::Right,
            _ => Align::Left,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Center => "center",
            Align::Right => "right",
        }
    }
}

impl FromStr for Align {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" | "0" => Ok(Align::Left),
            "center" | "1" => Ok(Align::Center),
            "right" | "2" => Ok(Align::Right),
            _ => Err(format!("Unknown alignment: {}", s)),
        }
    }
}

/// Edge a button's fade texture grows from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FadeTexPos {
    #[default]
    Top,
    Left,
    Bottom,
    Right,
}

impl FadeTexPos {
    /// Out-of-range values fall back to `Top`
    pub fn from_index(value: i64) -> Self {
        match value {
            1 => FadeTexPos::Left,
            2 => FadeTexPos::Bottom,
            3 => FadeTexPos::Right,
            _ => FadeTexPos::Top,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FadeTexPos::Top => "top",
            FadeTexPos::Left => "left",
            FadeTexPos::Bottom => "bottom",
            FadeTexPos::Right => "right",
        }
    }
}

impl FromStr for FadeTexPos {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" => Ok(FadeTexPos::Top),
            "left" => Ok(FadeTexPos::Left),
            "bottom" => Ok(FadeTexPos::Bottom),
            "right" => Ok(FadeTexPos::Right),
            _ => Err(format!("Unknown fade texture position: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThemeBackground {
    pub bg_type: BackgroundType,
    pub color: Rgb,
    pub tex: String,
    pub alpha: f32,
}

impl Default for ThemeBackground {
    fn default() -> Self {
        ThemeBackground {
            bg_type: BackgroundType::Auto,
            color: Rgb::WHITE,
            tex: String::new(),
            alpha: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThemeStatic {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
    pub h: f32,
    pub color: String,
    pub col: Rgb,
    pub tex: String,
    pub typ: TextureType,
    pub tex_x1: f32,
    pub tex_y1: f32,
    pub tex_x2: f32,
    pub tex_y2: f32,
    pub reflection: bool,
    pub reflection_spacing: f32,
}

impl Default for ThemeStatic {
    fn default() -> Self {
        ThemeStatic {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            w: 0.0,
            h: 0.0,
            color: String::new(),
            col: Rgb::WHITE,
            tex: String::new(),
            typ: TextureType::Plain,
            tex_x1: 0.0,
            tex_y1: 0.0,
            tex_x2: 1.0,
            tex_y2: 1.0,
            reflection: false,
            reflection_spacing: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThemeText {
    pub x: f32,
    pub y: f32,
    /// Wrap width, 0 disables wrapping
    pub w: f32,
    pub color: String,
    pub col: Rgb,
    pub font: usize,
    pub size: f32,
    pub italic: bool,
    pub align: Align,
    /// Already translated
    pub text: String,
    pub writable: bool,
    pub reflection: bool,
    pub reflection_spacing: f32,
}

impl Default for ThemeText {
    fn default() -> Self {
        ThemeText {
            x: 0.0,
            y: 0.0,
            w: 0.0,
            color: String::new(),
            col: Rgb::BLACK,
            font: 0,
            size: 30.0,
            italic: false,
            align: Align::Left,
            text: String::new(),
            writable: false,
            reflection: false,
            reflection_spacing: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThemeButton {
    pub text: Vec<ThemeText>,
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
    pub h: f32,
    pub color: String,
    pub col: Rgb,
    pub int: f32,
    pub dcolor: String,
    pub dcol: Rgb,
    pub dint: f32,
    pub tex: String,
    pub typ: TextureType,
    pub visible: bool,
    pub reflection: bool,
    pub reflection_spacing: f32,
    pub deselect_reflection_spacing: f32,
    pub select_w: f32,
    pub select_h: f32,
    pub fade: bool,
    pub fade_text: bool,
    pub fade_tex: String,
    pub fade_tex_pos: FadeTexPos,
    /// 1-based index of the owning button collection, 0 for none
    pub parent: usize,
}

impl Default for ThemeButton {
    fn default() -> Self {
        ThemeButton {
            text: Vec::new(),
            x: 0.0,
            y: 0.0,
            z: 0.0,
            w: 0.0,
            h: 0.0,
            color: String::new(),
            col: Rgb::WHITE,
            int: 1.0,
            dcolor: String::new(),
            dcol: Rgb::WHITE,
            dint: 1.0,
            tex: String::new(),
            typ: TextureType::Plain,
            visible: true,
            reflection: false,
            reflection_spacing: 15.0,
            deselect_reflection_spacing: 15.0,
            select_w: 0.0,
            select_h: 0.0,
            fade: false,
            fade_text: false,
            fade_tex: String::new(),
            fade_tex_pos: FadeTexPos::Top,
            parent: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ThemeButtonCollection {
    pub style: ThemeButton,
    pub child_count: usize,
    /// 1-based interaction index focused when the collapsed collection is hovered
    pub first_child: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThemeSelectSlide {
    /// Caption, already translated
    pub text: String,
    pub tex: String,
    pub typ: TextureType,
    pub tex_sbg: String,
    pub typ_sbg: TextureType,
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub z: f32,
    pub sbg_w: f32,
    pub text_size: f32,
    pub skip_x: f32,
    pub show_arrows: bool,
    pub one_item_only: bool,
    pub col: Rgb,
    pub int: f32,
    pub dcol: Rgb,
    pub dint: f32,
    pub tcol: Rgb,
    pub tint: f32,
    pub tdcol: Rgb,
    pub tdint: f32,
    pub sbg_col: Rgb,
    pub sbg_int: f32,
    pub sbg_dcol: Rgb,
    pub sbg_dint: f32,
    pub st_col: Rgb,
    pub st_int: f32,
    pub st_dcol: Rgb,
    pub st_dint: f32,
}

impl Default for ThemeSelectSlide {
    fn default() -> Self {
        ThemeSelectSlide {
            text: String::new(),
            tex: String::new(),
            typ: TextureType::Plain,
            tex_sbg: String::new(),
            typ_sbg: TextureType::Plain,
            x: 0.0,
            y: 0.0,
            w: 0.0,
            h: 0.0,
            z: 0.0,
            sbg_w: 450.0,
            text_size: 30.0,
            skip_x: 0.0,
            show_arrows: false,
            one_item_only: false,
            col: Rgb::WHITE,
            int: 1.0,
            dcol: Rgb::WHITE,
            dint: 1.0,
            tcol: Rgb::BLACK,
            tint: 1.0,
            tdcol: Rgb::BLACK,
            tdint: 1.0,
            sbg_col: Rgb::WHITE,
            sbg_int: 1.0,
            sbg_dcol: Rgb::WHITE,
            sbg_dint: 1.0,
            st_col: Rgb::BLACK,
            st_int: 1.0,
            st_dcol: Rgb::BLACK,
            st_dint: 1.0,
        }
    }
}

/// Elements every screen shares
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ThemeBasic {
    pub background: ThemeBackground,
    pub text: Vec<ThemeText>,
    pub statics: Vec<ThemeStatic>,
    pub button_collections: Vec<ThemeButtonCollection>,
}
