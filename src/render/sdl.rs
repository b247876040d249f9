//! SDL2 canvas backend
//!
//! Maps the 800x600 render space onto each physical screen of the window and
//! keeps every uploaded texture alive in an id-keyed map. Texture ids start
//! at 1 so that 0 can mean "not loaded".

use super::{RectF, Renderer, Rgba, Viewport, RENDER_H, RENDER_W};
use crate::font::{self, FontStyle, GLYPH_H, GLYPH_W};
use crate::texture::colorize::colorize_rgba;
use crate::texture::{LoadedImage, Texture, TextureLoader, TextureType};
use crate::theme::color::Rgb;
use sdl2::image::LoadSurface;
use sdl2::pixels::{Color, PixelFormatEnum};
use sdl2::rect::{Point, Rect};
use sdl2::render::{BlendMode, Canvas, TextureCreator};
use sdl2::surface::Surface;
use sdl2::video::{FullscreenType, Window, WindowContext};
use std::collections::HashMap;
use std::path::Path;

const PIXEL_FORMAT: PixelFormatEnum = PixelFormatEnum::ABGR8888;

pub struct SdlBackend<'a> {
    canvas: Canvas<Window>,
    creator: &'a TextureCreator<WindowContext>,
    textures: HashMap<u32, sdl2::render::Texture<'a>>,
    next_id: u32,
    screens: u32,
    current_screen: u32,
}

impl<'a> SdlBackend<'a> {
    pub fn new(canvas: Canvas<Window>, creator: &'a TextureCreator<WindowContext>, screens: u32) -> Self {
        SdlBackend {
            canvas,
            creator,
            textures: HashMap::new(),
            next_id: 1,
            screens: screens.max(1),
            current_screen: 0,
        }
    }

    pub fn present(&mut self) {
        self.canvas.present();
    }

    /// Resizes the window and switches fullscreen state
    pub fn apply_video_mode(&mut self, width: u32, height: u32, fullscreen: bool, screens: u32) -> Result<(), String> {
        self.screens = screens.max(1);
        let window = self.canvas.window_mut();
        let mode = if fullscreen { FullscreenType::Desktop } else { FullscreenType::Off };
        window.set_fullscreen(mode)?;
        if !fullscreen {
            window
                .set_size(width * self.screens, height)
                .map_err(|e| e.to_string())?;
        }
        log::info!(
            "Video mode {}x{} on {} screen(s), fullscreen={}",
            width,
            height,
            self.screens,
            fullscreen
        );
        Ok(())
    }

    fn output_size(&self) -> (u32, u32) {
        self.canvas.output_size().unwrap_or((RENDER_W as u32, RENDER_H as u32))
    }

    /// Window-space rectangle of a render-space rectangle on the current screen
    fn map_rect(&self, x: f32, y: f32, w: f32, h: f32) -> Option<Rect> {
        if w <= 0.0 || h <= 0.0 {
            return None;
        }
        let (out_w, out_h) = self.output_size();
        let per_screen_w = out_w as f32 / self.screens as f32;
        let sx = per_screen_w / RENDER_W;
        let sy = out_h as f32 / RENDER_H;
        let offset = self.current_screen as f32 * per_screen_w;

        Some(Rect::new(
            (offset + x * sx).round() as i32,
            (y * sy).round() as i32,
            (w * sx).round().max(1.0) as u32,
            (h * sy).round().max(1.0) as u32,
        ))
    }

    fn register(&mut self, texture: sdl2::render::Texture<'a>) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.textures.insert(id, texture);
        id
    }

    fn copy(&mut self, tex: &Texture, dst: Rect, alpha: f32, flip_v: bool) -> Result<(), String> {
        let Some(sdl_tex) = self.textures.get_mut(&tex.tex_num) else {
            return Ok(());
        };
        let (r, g, b, _) = Rgba::from_rgb(tex.tint(), 1.0).to_u8();
        sdl_tex.set_color_mod(r, g, b);
        sdl_tex.set_alpha_mod((alpha.clamp(0.0, 1.0) * 255.0).round() as u8);
        sdl_tex.set_blend_mode(BlendMode::Blend);

        let src = Rect::new(
            (tex.tex_x1 * tex.tex_w).round() as i32,
            (tex.tex_y1 * tex.tex_h).round() as i32,
            ((tex.tex_x2 - tex.tex_x1) * tex.tex_w).round().max(1.0) as u32,
            ((tex.tex_y2 - tex.tex_y1) * tex.tex_h).round().max(1.0) as u32,
        );
        self.canvas
            .copy_ex(sdl_tex, Some(src), Some(dst), tex.rot as f64, None::<Point>, false, flip_v)
    }
}

impl Renderer for SdlBackend<'_> {
    fn viewport(&self) -> Viewport {
        let (w, h) = self.output_size();
        Viewport::new(w, h, self.screens)
    }

    fn begin_screen(&mut self, screen: u32) {
        self.current_screen = screen.min(self.screens - 1);
    }

    fn clear(&mut self, color: Rgba) -> Result<(), String> {
        let (r, g, b, a) = color.to_u8();
        self.canvas.set_draw_color(Color::RGBA(r, g, b, a));
        if self.screens == 1 {
            self.canvas.clear();
            return Ok(());
        }
        match self.map_rect(0.0, 0.0, RENDER_W, RENDER_H) {
            Some(rect) => self.canvas.fill_rect(rect),
            None => Ok(()),
        }
    }

    fn draw_texture(&mut self, tex: &Texture) -> Result<(), String> {
        if !tex.is_loaded() || tex.alpha <= 0.0 {
            return Ok(());
        }
        let Some(dst) = self.map_rect(tex.x, tex.y, tex.draw_w(), tex.draw_h()) else {
            return Ok(());
        };
        self.copy(tex, dst, tex.alpha, false)
    }

    fn draw_texture_reflection(&mut self, tex: &Texture, spacing: f32) -> Result<(), String> {
        if !tex.is_loaded() || tex.alpha <= 0.0 {
            return Ok(());
        }
        let Some(dst) = self.map_rect(tex.x, tex.y + tex.draw_h() + spacing, tex.draw_w(), tex.draw_h() * 0.5)
        else {
            return Ok(());
        };
        self.copy(tex, dst, tex.alpha * 0.3, true)
    }

    fn fill_rect(&mut self, rect: RectF, color: Rgba) -> Result<(), String> {
        let Some(dst) = self.map_rect(rect.x, rect.y, rect.w, rect.h) else {
            return Ok(());
        };
        let (r, g, b, a) = color.to_u8();
        self.canvas.set_blend_mode(BlendMode::Blend);
        self.canvas.set_draw_color(Color::RGBA(r, g, b, a));
        self.canvas.fill_rect(dst)
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, style: &FontStyle, color: Rgba) -> Result<(), String> {
        if color.a <= 0.0 {
            return Ok(());
        }
        let (r, g, b, a) = color.to_u8();
        self.canvas.set_blend_mode(BlendMode::Blend);
        self.canvas.set_draw_color(Color::RGBA(r, g, b, a));

        let pixel = style.pixel();
        let shear = style.italic_shear();
        for (i, c) in text.chars().enumerate() {
            let char_x = x + i as f32 * style.advance();
            for (row, pattern_row) in font::glyph(c).iter().enumerate() {
                let slant = shear * (GLYPH_H as usize - row) as f32 / GLYPH_H as f32;
                for col in 0..GLYPH_W {
                    if (pattern_row >> (GLYPH_W - 1 - col)) & 1 == 1 {
                        let px = char_x + slant + col as f32 * pixel;
                        let py = y + row as f32 * pixel;
                        if let Some(rect) = self.map_rect(px, py, pixel, pixel) {
                            self.canvas.fill_rect(rect)?;
                        }
                    }
                }
            }
        }
        Ok(())
    }

    fn capture_screen(&mut self, screen: u32) -> Result<Texture, String> {
        self.begin_screen(screen);
        let rect = self
            .map_rect(0.0, 0.0, RENDER_W, RENDER_H)
            .ok_or_else(|| "empty screen area".to_string())?;

        let pixels = self.canvas.read_pixels(Some(rect), PIXEL_FORMAT)?;
        let mut texture = self
            .creator
            .create_texture_static(PIXEL_FORMAT, rect.width(), rect.height())
            .map_err(|e| e.to_string())?;
        texture
            .update(None, &pixels, rect.width() as usize * 4)
            .map_err(|e| e.to_string())?;

        let tex_num = self.register(texture);
        Ok(Texture {
            tex_num,
            w: RENDER_W,
            h: RENDER_H,
            tex_w: rect.width() as f32,
            tex_h: rect.height() as f32,
            ..Texture::default()
        })
    }

    fn release_capture(&mut self, tex: &Texture) {
        self.textures.remove(&tex.tex_num);
    }
}

impl TextureLoader for SdlBackend<'_> {
    fn load_texture(&mut self, path: &Path, typ: TextureType, color: Rgb) -> Result<LoadedImage, String> {
        let surface = Surface::from_file(path)?;
        let mut surface = surface.convert_format(PIXEL_FORMAT)?;
        let (width, height, pitch) = (surface.width(), surface.height(), surface.pitch() as usize);

        if typ != TextureType::Transparent {
            surface.with_lock_mut(|pixels: &mut [u8]| {
                for row in 0..height as usize {
                    let line = &mut pixels[row * pitch..row * pitch + width as usize * 4];
                    match typ {
                        TextureType::Plain => line.chunks_exact_mut(4).for_each(|px| px[3] = 255),
                        TextureType::Colorized => colorize_rgba(line, color),
                        TextureType::Transparent => {}
                    }
                }
            });
        }

        let texture = self
            .creator
            .create_texture_from_surface(&surface)
            .map_err(|e| e.to_string())?;
        let tex_num = self.register(texture);
        Ok(LoadedImage { tex_num, width, height })
    }

    fn unload(&mut self, tex_num: u32) {
        self.textures.remove(&tex_num);
    }
}
