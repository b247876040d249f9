//! Texture handles
//!
//! The menu layer treats textures as plain values: a GPU id plus placement,
//! color and UV data. A `tex_num` of 0 means "not loaded" and draws nothing.
//!
//! # Architecture
//!
//! - `manager`: `TextureManager` cache and the `TextureLoader` seam
//! - `colorize`: hue replacement applied to colorized skin images

pub mod colorize;
pub mod manager;

pub use manager::{LoadedImage, TextureLoader, TextureManager};

use crate::theme::color::Rgb;
use std::path::PathBuf;
use std::str::FromStr;

/// How an image is prepared on upload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextureType {
    /// Opaque, alpha channel ignored
    #[default]
    Plain,
    /// Alpha channel kept
    Transparent,
    /// Alpha kept, hue replaced by the requested color
    Colorized,
}

impl TextureType {
    pub fn as_str(self) -> &'static str {
        match self {
            TextureType::Plain => "Plain",
            TextureType::Transparent => "Transparent",
            TextureType::Colorized => "Colorized",
        }
    }
}

impl FromStr for TextureType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" => Ok(TextureType::Plain),
            "transparent" => Ok(TextureType::Transparent),
            "colorized" => Ok(TextureType::Colorized),
            _ => Err(format!("Unknown texture type: {}", s)),
        }
    }
}

/// A drawable texture reference with its placement
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    /// Backend id, 0 when nothing is loaded
    pub tex_num: u32,
    pub name: Option<PathBuf>,
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
    pub h: f32,
    pub scale_w: f32,
    pub scale_h: f32,
    pub rot: f32,
    /// Intensity multiplier applied to `col`
    pub int: f32,
    pub col: Rgb,
    pub alpha: f32,
    /// Source image size in pixels
    pub tex_w: f32,
    pub tex_h: f32,
    pub tex_x1: f32,
    pub tex_y1: f32,
    pub tex_x2: f32,
    pub tex_y2: f32,
}

impl Default for Texture {
    fn default() -> Self {
        Texture {
            tex_num: 0,
            name: None,
            x: 0.0,
            y: 0.0,
            z: 0.0,
            w: 0.0,
            h: 0.0,
            scale_w: 1.0,
            scale_h: 1.0,
            rot: 0.0,
            int: 1.0,
            col: Rgb::WHITE,
            alpha: 1.0,
            tex_w: 0.0,
            tex_h: 0.0,
            tex_x1: 0.0,
            tex_y1: 0.0,
            tex_x2: 1.0,
            tex_y2: 1.0,
        }
    }
}

impl Texture {
    pub fn is_loaded(&self) -> bool {
        self.tex_num != 0
    }

    /// Drawn width after scaling
    pub fn draw_w(&self) -> f32 {
        self.w * self.scale_w
    }

    pub fn draw_h(&self) -> f32 {
        self.h * self.scale_h
    }

    /// Color actually used for drawing, `col` scaled by `int`
    pub fn tint(&self) -> Rgb {
        Rgb::new(self.col.r * self.int, self.col.g * self.int, self.col.b * self.int)
    }

    pub fn set_pos(&mut self, x: f32, y: f32, z: f32) {
        self.x = x;
        self.y = y;
        self.z = z;
    }

    pub fn set_size(&mut self, w: f32, h: f32) {
        self.w = w;
        self.h = h;
    }
}
