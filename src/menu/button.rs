//! Menu button
//!
//! A button switches between deselected and selected colors. Fading buttons
//! additionally animate `fade_progress` between 0 and 1 in fixed steps, either
//! growing the button itself or sliding out a separate fade texture from one
//! of its edges.

use super::text::MenuText;
use crate::render::{RectF, Renderer};
use crate::texture::Texture;
use crate::theme::{FadeTexPos, Rgb, ThemeButton};

/// Progress change per animation tick
pub const FADE_STEP: f32 = 0.1;
/// Length of one animation tick in milliseconds
pub const FADE_TICK_MS: u64 = 16;

#[derive(Debug, Clone)]
pub struct MenuButton {
    pub texture: Texture,
    /// Overlay grown from `fade_tex_pos`, unloaded when unused
    pub fade_texture: Texture,
    pub text: Vec<MenuText>,
    /// Text positions at zero fade progress
    text_base: Vec<(f32, f32)>,
    pub visible: bool,
    pub selectable: bool,
    pub selected: bool,
    /// 1-based id of the owning collection, 0 for none
    pub parent: usize,
    pub pos_x: f32,
    pub pos_y: f32,
    pub select_col: Rgb,
    pub select_int: f32,
    pub deselect_col: Rgb,
    pub deselect_int: f32,
    pub select_w: f32,
    pub select_h: f32,
    pub deselect_w: f32,
    pub deselect_h: f32,
    pub reflection: bool,
    pub reflection_spacing: f32,
    pub deselect_reflection_spacing: f32,
    pub fade: bool,
    pub fade_text: bool,
    pub fade_tex_pos: FadeTexPos,
    pub fade_progress: f32,
    fade_last_tick: u64,
}

impl MenuButton {
    pub fn new(mut texture: Texture, fade_texture: Texture, theme: &ThemeButton) -> Self {
        texture.set_pos(theme.x, theme.y, theme.z);
        texture.set_size(theme.w, theme.h);

        let mut fade_texture = fade_texture;
        fade_texture.set_pos(theme.x, theme.y, theme.z);
        fade_texture.set_size(0.0, 0.0);

        let text: Vec<MenuText> = theme
            .text
            .iter()
            .map(|t| MenuText::from_theme(t, theme.x, theme.y))
            .collect();
        let text_base = text.iter().map(|t| (t.x, t.y)).collect();

        let mut button = MenuButton {
            texture,
            fade_texture,
            text,
            text_base,
            visible: theme.visible,
            selectable: true,
            selected: false,
            parent: 0,
            pos_x: theme.x,
            pos_y: theme.y,
            select_col: theme.col,
            select_int: theme.int,
            deselect_col: theme.dcol,
            deselect_int: theme.dint,
            select_w: theme.select_w,
            select_h: theme.select_h,
            deselect_w: theme.w,
            deselect_h: theme.h,
            reflection: theme.reflection,
            reflection_spacing: theme.reflection_spacing,
            deselect_reflection_spacing: theme.deselect_reflection_spacing,
            fade: theme.fade,
            fade_text: theme.fade_text,
            fade_tex_pos: theme.fade_tex_pos,
            fade_progress: 0.0,
            fade_last_tick: 0,
        };
        button.set_select(false);
        button
    }

    pub fn set_select(&mut self, value: bool) {
        self.selected = value;
        let (col, int) = if value {
            (self.select_col, self.select_int)
        } else {
            (self.deselect_col, self.deselect_int)
        };
        self.texture.col = col;
        self.texture.int = int;
        self.fade_texture.col = col;
        self.fade_texture.int = int;

        if self.fade {
            if value && self.fade_progress <= 0.0 {
                self.fade_progress = FADE_STEP;
            } else if !value && self.fade_progress >= 1.0 {
                self.fade_progress = 1.0 - FADE_STEP;
            }
        } else if value {
            self.texture.set_size(self.select_w, self.select_h);
        } else {
            self.texture.set_size(self.deselect_w, self.deselect_h);
        }
    }

    /// Advances the fade animation by at most one step per tick
    pub fn update_fade(&mut self, now: u64) {
        if !self.fade || self.fade_progress <= 0.0 || self.fade_progress >= 1.0 {
            return;
        }
        let tick = now / FADE_TICK_MS;
        if tick == self.fade_last_tick {
            return;
        }
        self.fade_last_tick = tick;
        let step = if self.selected { FADE_STEP } else { -FADE_STEP };
        self.fade_progress = (self.fade_progress + step).clamp(0.0, 1.0);
    }

    /// Places the texture, fade texture and texts for the current progress
    fn layout(&mut self) {
        if !self.fade {
            self.texture.x = self.pos_x;
            self.texture.y = self.pos_y;
            return;
        }
        let p = self.fade_progress;
        let grow_w = (self.select_w - self.deselect_w) * p;
        let grow_h = (self.select_h - self.deselect_h) * p;

        if !self.fade_texture.is_loaded() {
            self.texture.set_pos(self.pos_x, self.pos_y, self.texture.z);
            self.texture.set_size(self.deselect_w + grow_w, self.deselect_h + grow_h);
        } else {
            self.texture.set_size(self.deselect_w, self.deselect_h);
            let (tx, ty, fx, fy, fw, fh) = match self.fade_tex_pos {
                FadeTexPos::Top => (
                    self.pos_x,
                    self.pos_y + grow_h,
                    self.pos_x,
                    self.pos_y,
                    self.deselect_w,
                    grow_h,
                ),
                FadeTexPos::Left => (
                    self.pos_x + grow_w,
                    self.pos_y,
                    self.pos_x,
                    self.pos_y,
                    grow_w,
                    self.deselect_h,
                ),
                FadeTexPos::Bottom => (
                    self.pos_x,
                    self.pos_y,
                    self.pos_x,
                    self.pos_y + self.deselect_h,
                    self.deselect_w,
                    grow_h,
                ),
                FadeTexPos::Right => (
                    self.pos_x,
                    self.pos_y,
                    self.pos_x + self.deselect_w,
                    self.pos_y,
                    grow_w,
                    self.deselect_h,
                ),
            };
            self.texture.x = tx;
            self.texture.y = ty;
            self.fade_texture.x = fx;
            self.fade_texture.y = fy;
            self.fade_texture.set_size(fw, fh);
        }

        if self.fade_text {
            let dx = self.texture.x - self.pos_x;
            let dy = self.texture.y - self.pos_y;
            for (text, (bx, by)) in self.text.iter_mut().zip(&self.text_base) {
                text.x = bx + dx;
                text.y = by + dy;
            }
        }
    }

    /// Area that reacts to the mouse
    pub fn mouse_area(&self) -> RectF {
        if self.fade {
            RectF::new(self.pos_x, self.pos_y, self.deselect_w, self.deselect_h)
        } else {
            RectF::new(self.texture.x, self.texture.y, self.texture.draw_w(), self.texture.draw_h())
        }
    }

    /// Sets the alpha of the button and every text
    pub fn set_alpha(&mut self, alpha: f32) {
        self.texture.alpha = alpha;
        self.fade_texture.alpha = alpha;
        for text in &mut self.text {
            text.alpha = alpha;
        }
    }

    pub fn draw(&mut self, renderer: &mut dyn Renderer, now: u64) -> Result<(), String> {
        if !self.visible {
            return Ok(());
        }
        self.update_fade(now);
        self.layout();

        renderer.draw_texture(&self.texture)?;
        if self.fade && self.fade_texture.is_loaded() {
            renderer.draw_texture(&self.fade_texture)?;
        }
        if self.reflection {
            let spacing = if self.selected {
                self.reflection_spacing
            } else {
                self.deselect_reflection_spacing
            };
            renderer.draw_texture_reflection(&self.texture, spacing)?;
        }
        for text in &self.text {
            text.draw(renderer, now)?;
        }
        Ok(())
    }
}
