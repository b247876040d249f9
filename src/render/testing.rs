//! Test doubles for the rendering seam

use super::{RectF, Renderer, Rgba, Viewport};
use crate::font::FontStyle;
use crate::texture::{LoadedImage, Texture, TextureLoader, TextureType};
use crate::theme::color::Rgb;
use std::path::{Path, PathBuf};

/// One recorded draw operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear(Rgba),
    Texture { tex_num: u32, rect: RectF, alpha: f32 },
    Reflection { tex_num: u32 },
    Rect { rect: RectF, color: Rgba },
    Text { text: String, x: f32, y: f32, alpha: f32 },
}

/// Renderer that records every call instead of drawing
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub calls: Vec<DrawCall>,
    pub viewport: Viewport,
    pub fail_capture: bool,
    pub captures: usize,
    pub released: Vec<u32>,
    pub screens_begun: Vec<u32>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        RecordingRenderer::default()
    }

    pub fn texts(&self) -> Vec<String> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn textures_drawn(&self) -> Vec<(u32, f32)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Texture { tex_num, alpha, .. } => Some((*tex_num, *alpha)),
                _ => None,
            })
            .collect()
    }

    pub fn reset(&mut self) {
        self.calls.clear();
    }
}

impl Renderer for RecordingRenderer {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn begin_screen(&mut self, screen: u32) {
        self.screens_begun.push(screen);
    }

    fn clear(&mut self, color: Rgba) -> Result<(), String> {
        self.calls.push(DrawCall::Clear(color));
        Ok(())
    }

    fn draw_texture(&mut self, tex: &Texture) -> Result<(), String> {
        if tex.is_loaded() {
            self.calls.push(DrawCall::Texture {
                tex_num: tex.tex_num,
                rect: RectF::new(tex.x, tex.y, tex.draw_w(), tex.draw_h()),
                alpha: tex.alpha,
            });
        }
        Ok(())
    }

    fn draw_texture_reflection(&mut self, tex: &Texture, _spacing: f32) -> Result<(), String> {
        self.calls.push(DrawCall::Reflection { tex_num: tex.tex_num });
        Ok(())
    }

    fn fill_rect(&mut self, rect: RectF, color: Rgba) -> Result<(), String> {
        self.calls.push(DrawCall::Rect { rect, color });
        Ok(())
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, _style: &FontStyle, color: Rgba) -> Result<(), String> {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            x,
            y,
            alpha: color.a,
        });
        Ok(())
    }

    fn capture_screen(&mut self, _screen: u32) -> Result<Texture, String> {
        self.captures += 1;
        if self.fail_capture {
            return Err("framebuffer readback failed".to_string());
        }
        Ok(Texture {
            tex_num: 9000 + self.captures as u32,
            w: self.viewport.render_w,
            h: self.viewport.render_h,
            ..Texture::default()
        })
    }

    fn release_capture(&mut self, tex: &Texture) {
        self.released.push(tex.tex_num);
    }
}

impl TextureLoader for RecordingRenderer {
    fn load_texture(&mut self, _path: &Path, _typ: TextureType, _color: Rgb) -> Result<LoadedImage, String> {
        Err("recording renderer loads nothing".to_string())
    }

    fn unload(&mut self, _tex_num: u32) {}
}

/// Loader that hands out increasing ids without touching a GPU
#[derive(Debug, Default)]
pub struct FakeLoader {
    pub loads: usize,
    pub unloaded: Vec<u32>,
    pub fail_paths: Vec<PathBuf>,
    pub loaded_paths: Vec<PathBuf>,
}

impl TextureLoader for FakeLoader {
    fn load_texture(&mut self, path: &Path, _typ: TextureType, _color: Rgb) -> Result<LoadedImage, String> {
        if self.fail_paths.iter().any(|p| p == path) {
            return Err(format!("{} not found", path.display()));
        }
        self.loads += 1;
        self.loaded_paths.push(path.to_path_buf());
        Ok(LoadedImage {
            tex_num: self.loads as u32,
            width: 64,
            height: 32,
        })
    }

    fn unload(&mut self, tex_num: u32) {
        self.unloaded.push(tex_num);
    }
}

/// Recording renderer plus fake loader, for code that owns one backend
#[derive(Debug, Default)]
pub struct TestBackend {
    pub renderer: RecordingRenderer,
    pub loader: FakeLoader,
}

impl Renderer for TestBackend {
    fn viewport(&self) -> Viewport {
        self.renderer.viewport()
    }

    fn begin_screen(&mut self, screen: u32) {
        self.renderer.begin_screen(screen);
    }

    fn clear(&mut self, color: Rgba) -> Result<(), String> {
        self.renderer.clear(color)
    }

    fn draw_texture(&mut self, tex: &Texture) -> Result<(), String> {
        self.renderer.draw_texture(tex)
    }

    fn draw_texture_reflection(&mut self, tex: &Texture, spacing: f32) -> Result<(), String> {
        self.renderer.draw_texture_reflection(tex, spacing)
    }

    fn fill_rect(&mut self, rect: RectF, color: Rgba) -> Result<(), String> {
        self.renderer.fill_rect(rect, color)
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, style: &FontStyle, color: Rgba) -> Result<(), String> {
        self.renderer.draw_text(text, x, y, style, color)
    }

    fn capture_screen(&mut self, screen: u32) -> Result<Texture, String> {
        self.renderer.capture_screen(screen)
    }

    fn release_capture(&mut self, tex: &Texture) {
        self.renderer.release_capture(tex);
    }
}

impl TextureLoader for TestBackend {
    fn load_texture(&mut self, path: &Path, typ: TextureType, color: Rgb) -> Result<LoadedImage, String> {
        self.loader.load_texture(path, typ, color)
    }

    fn unload(&mut self, tex_num: u32) {
        self.loader.unload(tex_num);
    }
}
