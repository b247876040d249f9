//! Menu Backgrounds
//!
//! Every screen owns exactly one background drawn before its widgets. The
//! theme names a [`BackgroundType`]; construction may fail (missing image,
//! no video support), in which case the next type of a fixed fallback chain
//! is tried. Every chain ends with [`NoneBackground`], which cannot fail.
//!
//! # Available Backgrounds
//!
//! - [`NoneBackground`] - draws nothing
//! - [`ColorBackground`] - solid theme color
//! - [`TextureBackground`] - skin image stretched over the render area
//! - [`VideoBackground`] - looping video through a [`VideoOpener`]
//! - [`FadeBackground`] - image or color fading in after the screen is shown

mod color;
mod fade;
mod texture;
mod video;

pub use color::ColorBackground;
pub use fade::FadeBackground;
pub use texture::TextureBackground;
pub use video::{VideoBackground, VideoOpener};

use super::UiContext;
use crate::render::Renderer;
use crate::theme::{BackgroundType, ThemeBackground};
use std::fmt;
use std::path::{Path, PathBuf};

/// File extensions treated as videos by `Auto` backgrounds
pub const VIDEO_EXTENSIONS: &[&str] = &[
    "avi", "mov", "divx", "mkv", "mpeg", "mpg", "mp4", "mpeg4", "m4v", "ogv", "webm", "flv", "wmv",
];

/// Reasons a background could not be constructed
#[derive(Debug, Clone, PartialEq)]
pub enum BackgroundError {
    /// The theme names no file, or the skin has none under that name
    NoTexture,
    /// The file exists in the skin but could not be loaded
    TextureLoad(PathBuf),
    /// No video playback is available
    VideoUnavailable,
    Video(String),
}

impl fmt::Display for BackgroundError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BackgroundError::NoTexture => write!(f, "No background file set"),
            BackgroundError::TextureLoad(path) => write!(f, "Could not load background {}", path.display()),
            BackgroundError::VideoUnavailable => write!(f, "Video playback is not available"),
            BackgroundError::Video(e) => write!(f, "Video background failed: {}", e),
        }
    }
}

impl std::error::Error for BackgroundError {}

/// Behaviour shared by all backgrounds
pub trait MenuBackground {
    fn kind(&self) -> BackgroundType;

    /// Called when the owning screen starts to show
    fn on_show(&mut self, _now: u64) {}

    /// Called when the owning screen is hidden
    fn on_finish(&mut self) {}

    fn draw(&mut self, renderer: &mut dyn Renderer, now: u64) -> Result<(), String>;
}

/// Background that leaves the cleared frame untouched
#[derive(Debug, Default)]
pub struct NoneBackground;

impl MenuBackground for NoneBackground {
    fn kind(&self) -> BackgroundType {
        BackgroundType::None
    }

    fn draw(&mut self, _renderer: &mut dyn Renderer, _now: u64) -> Result<(), String> {
        Ok(())
    }
}

/// Whether `path` names a video file
pub fn is_video_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .is_some_and(|ext| VIDEO_EXTENSIONS.contains(&ext.as_str()))
}

/// Types tried, in order, for a theme background
pub fn fallback_chain(theme: &ThemeBackground, ctx: &UiContext) -> Vec<BackgroundType> {
    use BackgroundType::*;
    match theme.bg_type {
        None => vec![None],
        Color => vec![Color, None],
        Texture => vec![Texture, Video, Color, None],
        Video => vec![Video, Texture, Color, None],
        Fade => vec![Fade, Texture, Color, None],
        Auto => {
            let video = ctx
                .skins
                .texture_file_name(&theme.tex)
                .is_some_and(|path| is_video_file(&path));
            if video {
                vec![Video, Texture, Color, None]
            } else {
                vec![Texture, Video, Color, None]
            }
        }
    }
}

fn build(
    kind: BackgroundType,
    theme: &ThemeBackground,
    ctx: &mut UiContext,
) -> Result<Box<dyn MenuBackground>, BackgroundError> {
    Ok(match kind {
        BackgroundType::None | BackgroundType::Auto => Box::new(NoneBackground),
        BackgroundType::Color => Box::new(ColorBackground::new(theme)),
        BackgroundType::Texture => Box::new(TextureBackground::new(theme, ctx)?),
        BackgroundType::Video => Box::new(VideoBackground::new(theme, ctx)?),
        BackgroundType::Fade => Box::new(FadeBackground::new(theme, ctx)),
    })
}

/// Constructs the first background of the theme's fallback chain that succeeds
pub fn create(theme: &ThemeBackground, ctx: &mut UiContext) -> Box<dyn MenuBackground> {
    for kind in fallback_chain(theme, ctx) {
        match build(kind, theme, ctx) {
            Ok(background) => {
                if kind != theme.bg_type {
                    log::debug!("Background {} replaced by {}", theme.bg_type.as_str(), kind.as_str());
                }
                return background;
            }
            Err(e) => log::warn!("{} background unusable: {}", kind.as_str(), e),
        }
    }
    Box::new(NoneBackground)
}
