//! Software cursor
//!
//! The cursor fades in when the mouse is used and fades out again after a
//! period without mouse activity. It is only drawn in software mouse mode and
//! never over screens that hide it.

use crate::menu::UiContext;
use crate::render::Renderer;
use crate::texture::{Texture, TextureType};
use std::f32::consts::FRAC_PI_2;

pub const CURSOR_FADE_IN_MS: u64 = 500;
pub const CURSOR_FADE_OUT_MS: u64 = 2000;
/// Inactivity before the fade out starts
pub const CURSOR_IDLE_MS: u64 = 5000;
pub const CURSOR_MAX_ALPHA: f32 = 0.7;
const CURSOR_SIZE: f32 = 32.0;

#[derive(Debug, Clone, Copy, PartialEq)]
enum CursorState {
    Hidden,
    FadingIn { start: u64 },
    Shown,
    FadingOut { start: u64 },
}

#[derive(Debug, Clone)]
pub struct Cursor {
    pub x: f32,
    pub y: f32,
    pub pressed: bool,
    /// Drawn by us rather than the system
    pub software: bool,
    state: CursorState,
    last_activity: u64,
    texture: Texture,
    texture_pressed: Texture,
}

impl Cursor {
    pub fn new(software: bool) -> Self {
        Cursor {
            x: 0.0,
            y: 0.0,
            pressed: false,
            software,
            state: CursorState::Hidden,
            last_activity: 0,
            texture: Texture::default(),
            texture_pressed: Texture::default(),
        }
    }

    pub fn load_textures(&mut self, ctx: &mut UiContext) {
        self.texture = ctx.private_texture("Cursor", TextureType::Transparent);
        self.texture_pressed = ctx.private_texture("Cursor_Pressed", TextureType::Transparent);
    }

    /// Records mouse movement in render space
    pub fn on_move(&mut self, x: f32, y: f32, now: u64) {
        self.x = x;
        self.y = y;
        self.activity(now);
    }

    pub fn on_button(&mut self, down: bool, now: u64) {
        self.pressed = down;
        self.activity(now);
    }

    fn activity(&mut self, now: u64) {
        self.last_activity = now;
        if matches!(self.state, CursorState::Hidden | CursorState::FadingOut { .. }) {
            self.state = CursorState::FadingIn { start: now };
        }
    }

    /// Advances the fade timers to `now`
    pub fn update(&mut self, now: u64) {
        loop {
            let next = match self.state {
                CursorState::FadingIn { start } if now >= start + CURSOR_FADE_IN_MS => CursorState::Shown,
                CursorState::Shown if now >= self.last_activity + CURSOR_IDLE_MS => CursorState::FadingOut {
                    start: self.last_activity + CURSOR_IDLE_MS,
                },
                CursorState::FadingOut { start } if now >= start + CURSOR_FADE_OUT_MS => CursorState::Hidden,
                _ => return,
            };
            self.state = next;
        }
    }

    /// Alpha after `update`
    pub fn alpha(&self, now: u64) -> f32 {
        match self.state {
            CursorState::Hidden => 0.0,
            CursorState::Shown => CURSOR_MAX_ALPHA,
            CursorState::FadingIn { start } => {
                let progress = now.saturating_sub(start) as f32 / CURSOR_FADE_IN_MS as f32;
                (progress.min(1.0) * FRAC_PI_2).sin() * CURSOR_MAX_ALPHA
            }
            CursorState::FadingOut { start } => {
                let progress = now.saturating_sub(start) as f32 / CURSOR_FADE_OUT_MS as f32;
                (progress.min(1.0) * FRAC_PI_2).cos() * CURSOR_MAX_ALPHA
            }
        }
    }

    pub fn draw(&mut self, renderer: &mut dyn Renderer, now: u64, hidden_by_screen: bool) -> Result<(), String> {
        self.update(now);
        if !self.software || hidden_by_screen {
            return Ok(());
        }
        let alpha = self.alpha(now);
        if alpha <= 0.0 {
            return Ok(());
        }
        let mut texture = if self.pressed && self.texture_pressed.is_loaded() {
            self.texture_pressed.clone()
        } else {
            self.texture.clone()
        };
        texture.set_pos(self.x, self.y, 0.0);
        texture.set_size(CURSOR_SIZE, CURSOR_SIZE);
        texture.alpha = alpha;
        renderer.draw_texture(&texture)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::testing::RecordingRenderer;
    use crate::testing::Fixture;

    fn alpha_at(cursor: &mut Cursor, now: u64) -> f32 {
        cursor.update(now);
        cursor.alpha(now)
    }

    #[test]
    fn test_fade_in_then_out_after_idle() {
        let mut cursor = Cursor::new(true);
        assert_eq!(alpha_at(&mut cursor, 0), 0.0);

        cursor.on_move(10.0, 10.0, 1000);
        assert_eq!(alpha_at(&mut cursor, 1000), 0.0);
        let half = alpha_at(&mut cursor, 1250);
        assert!((half - (FRAC_PI_2 / 2.0).sin() * CURSOR_MAX_ALPHA).abs() < 1e-5);
        assert_eq!(alpha_at(&mut cursor, 1500), CURSOR_MAX_ALPHA);
        assert_eq!(alpha_at(&mut cursor, 5999), CURSOR_MAX_ALPHA);

        let fading = alpha_at(&mut cursor, 7000);
        assert!((fading - (FRAC_PI_2 / 2.0).cos() * CURSOR_MAX_ALPHA).abs() < 1e-5);
        assert_eq!(alpha_at(&mut cursor, 8000), 0.0);
    }

    #[test]
    fn test_activity_keeps_cursor_shown() {
        let mut cursor = Cursor::new(true);
        cursor.on_move(0.0, 0.0, 0);
        cursor.on_button(true, 4000);
        assert_eq!(alpha_at(&mut cursor, 8000), CURSOR_MAX_ALPHA);
        assert!(alpha_at(&mut cursor, 9500) < CURSOR_MAX_ALPHA);
    }

    #[test]
    fn test_long_pause_skips_straight_to_hidden() {
        let mut cursor = Cursor::new(true);
        cursor.on_move(0.0, 0.0, 0);
        assert_eq!(alpha_at(&mut cursor, 60_000), 0.0);

        cursor.on_move(5.0, 5.0, 60_100);
        assert_eq!(alpha_at(&mut cursor, 60_600), CURSOR_MAX_ALPHA);
    }

    #[test]
    fn test_cursor_textures_bypass_the_cache() {
        let mut fixture = Fixture::new();
        let mut cursor = Cursor::new(true);
        cursor.load_textures(&mut fixture.ctx());
        assert!(cursor.texture.is_loaded());
        assert!(cursor.texture_pressed.is_loaded());
        assert_eq!(fixture.textures.cached_count(), 0);

        fixture.textures.clear(&mut fixture.loader);
        assert_eq!(fixture.loader.unloaded.len(), 2);
    }

    #[test]
    fn test_hidden_by_screen_or_hardware_mode() {
        let mut fixture = Fixture::new();
        let mut ctx = fixture.ctx();
        let mut cursor = Cursor::new(true);
        cursor.load_textures(&mut ctx);
        cursor.on_move(100.0, 100.0, 0);

        let mut renderer = RecordingRenderer::new();
        cursor.draw(&mut renderer, 600, true).unwrap();
        assert!(renderer.calls.is_empty());

        cursor.draw(&mut renderer, 600, false).unwrap();
        assert_eq!(renderer.textures_drawn(), vec![(1, CURSOR_MAX_ALPHA)]);

        renderer.reset();
        cursor.software = false;
        cursor.draw(&mut renderer, 700, false).unwrap();
        assert!(renderer.calls.is_empty());
    }
}
