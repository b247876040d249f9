//! Rendering seam
//!
//! Widgets never touch SDL directly. They draw through the [`Renderer`]
//! trait in a fixed 800x600 render space; the backend maps that space onto
//! every physical screen of the window.
//!
//! - `sdl`: the SDL2 canvas backend
//! - `testing`: recording doubles used by unit tests

pub mod sdl;
#[cfg(test)]
pub mod testing;

use crate::font::FontStyle;
use crate::texture::{Texture, TextureLoader};
use crate::theme::color::Rgb;

/// Logical render width every theme is laid out for
pub const RENDER_W: f32 = 800.0;
/// Logical render height every theme is laid out for
pub const RENDER_H: f32 = 600.0;

/// Axis aligned rectangle in render space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RectF {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl RectF {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        RectF { x, y, w, h }
    }

    /// Inclusive on every edge
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.x + self.w && y >= self.y && y <= self.y + self.h
    }
}

/// Color plus alpha, components in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba { r: 0.0, g: 0.0, b: 0.0, a: 1.0 };

    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Rgba { r, g, b, a }
    }

    pub fn from_rgb(rgb: Rgb, a: f32) -> Self {
        Rgba::new(rgb.r, rgb.g, rgb.b, a)
    }

    /// Converts to 8-bit channels
    pub fn to_u8(self) -> (u8, u8, u8, u8) {
        let c = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        (c(self.r), c(self.g), c(self.b), c(self.a))
    }
}

/// Window geometry needed to map mouse coordinates into render space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Window size in physical pixels
    pub screen_w: u32,
    pub screen_h: u32,
    /// Number of side-by-side screens sharing the window (1 or 2)
    pub screens: u32,
    pub render_w: f32,
    pub render_h: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport {
            screen_w: 800,
            screen_h: 600,
            screens: 1,
            render_w: RENDER_W,
            render_h: RENDER_H,
        }
    }
}

impl Viewport {
    pub fn new(screen_w: u32, screen_h: u32, screens: u32) -> Self {
        Viewport {
            screen_w,
            screen_h,
            screens: screens.max(1),
            ..Viewport::default()
        }
    }

    /// Converts window pixels to render space
    ///
    /// With two screens the right half of the window maps onto the same
    /// render space as the left half.
    pub fn to_render(&self, x: i32, y: i32) -> (f32, f32) {
        let per_screen_w = self.screen_w as f32 / self.screens.max(1) as f32;
        let mut rx = x as f32 / per_screen_w * self.render_w;
        let ry = y as f32 / self.screen_h.max(1) as f32 * self.render_h;
        while rx > self.render_w {
            rx -= self.render_w;
        }
        (rx, ry)
    }
}

/// Drawing operations available to widgets
///
/// Every coordinate is in render space. `begin_screen` selects the physical
/// screen subsequent calls land on.
pub trait Renderer {
    fn viewport(&self) -> Viewport;

    fn begin_screen(&mut self, screen: u32);

    fn clear(&mut self, color: Rgba) -> Result<(), String>;

    /// Draws `tex` at its own position, size, tint and alpha
    fn draw_texture(&mut self, tex: &Texture) -> Result<(), String>;

    /// Draws a vertically mirrored, fading copy of `tex` below it
    fn draw_texture_reflection(&mut self, tex: &Texture, spacing: f32) -> Result<(), String>;

    fn fill_rect(&mut self, rect: RectF, color: Rgba) -> Result<(), String>;

    fn draw_text(&mut self, text: &str, x: f32, y: f32, style: &FontStyle, color: Rgba) -> Result<(), String>;

    /// Copies the current frame of `screen` into a new texture
    ///
    /// Used once per transition for the cross fade overlay.
    fn capture_screen(&mut self, screen: u32) -> Result<Texture, String>;

    /// Releases a texture returned by `capture_screen`
    fn release_capture(&mut self, tex: &Texture);
}

/// A backend that both draws and uploads images
pub trait Backend: Renderer + TextureLoader {}

impl<T: Renderer + TextureLoader> Backend for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains_is_inclusive() {
        let rect = RectF::new(10.0, 10.0, 20.0, 5.0);
        assert!(rect.contains(10.0, 10.0));
        assert!(rect.contains(30.0, 15.0));
        assert!(!rect.contains(30.1, 15.0));
        assert!(!rect.contains(9.9, 12.0));
    }

    #[test]
    fn test_mouse_maps_to_render_space() {
        let viewport = Viewport::new(1600, 1200, 1);
        assert_eq!(viewport.to_render(800, 600), (400.0, 300.0));
    }

    #[test]
    fn test_second_screen_wraps() {
        let viewport = Viewport::new(1600, 600, 2);
        assert_eq!(viewport.to_render(400, 300), (400.0, 300.0));
        assert_eq!(viewport.to_render(1200, 300), (400.0, 300.0));
    }

    #[test]
    fn test_rgba_to_u8_clamps() {
        assert_eq!(Rgba::new(2.0, 0.5, -1.0, 1.0).to_u8(), (255, 128, 0, 255));
    }
}
