use super::texture::load_stretched;
use super::MenuBackground;
use crate::menu::UiContext;
use crate::render::{RectF, Renderer, Rgba};
use crate::texture::Texture;
use crate::theme::{BackgroundType, Rgb, ThemeBackground};

/// Fade in duration after the screen is shown
pub const FADE_IN_MS: u64 = 1500;

/// Image (or color, without an image) fading in from transparent
#[derive(Debug, Clone)]
pub struct FadeBackground {
    texture: Option<Texture>,
    color: Rgb,
    alpha: f32,
    shown_at: u64,
}

impl FadeBackground {
    pub fn new(theme: &ThemeBackground, ctx: &mut UiContext) -> Self {
        let texture = match load_stretched(theme, ctx) {
            Ok(texture) => Some(texture),
            Err(e) => {
                log::debug!("Fade background without image: {}", e);
                None
            }
        };
        FadeBackground {
            texture,
            color: theme.color,
            alpha: theme.alpha,
            shown_at: 0,
        }
    }

    /// Alpha at `now`, rising linearly to the theme alpha
    pub fn current_alpha(&self, now: u64) -> f32 {
        let elapsed = now.saturating_sub(self.shown_at);
        let progress = (elapsed as f32 / FADE_IN_MS as f32).min(1.0);
        self.alpha * progress
    }
}

impl MenuBackground for FadeBackground {
    fn kind(&self) -> BackgroundType {
        BackgroundType::Fade
    }

    fn on_show(&mut self, now: u64) {
        self.shown_at = now;
    }

    fn draw(&mut self, renderer: &mut dyn Renderer, now: u64) -> Result<(), String> {
        let alpha = self.current_alpha(now);
        match &self.texture {
            Some(texture) => {
                let mut texture = texture.clone();
                texture.alpha = alpha;
                renderer.draw_texture(&texture)
            }
            None => {
                let viewport = renderer.viewport();
                renderer.fill_rect(
                    RectF::new(0.0, 0.0, viewport.render_w, viewport.render_h),
                    Rgba::from_rgb(self.color, alpha),
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::testing::RecordingRenderer;
    use crate::testing::Fixture;

    #[test]
    fn test_fades_in_after_show() {
        let mut fixture = Fixture::new();
        let mut ctx = fixture.ctx();
        let theme = ThemeBackground {
            bg_type: BackgroundType::Fade,
            tex: "Background".to_string(),
            ..ThemeBackground::default()
        };
        let mut background = FadeBackground::new(&theme, &mut ctx);
        background.on_show(1000);
        assert_eq!(background.current_alpha(1000), 0.0);
        assert_eq!(background.current_alpha(1750), 0.5);
        assert_eq!(background.current_alpha(5000), 1.0);

        let mut renderer = RecordingRenderer::new();
        background.draw(&mut renderer, 1750).unwrap();
        assert_eq!(renderer.textures_drawn(), vec![(1, 0.5)]);
    }

    #[test]
    fn test_without_image_fades_color() {
        let mut fixture = Fixture::new();
        let mut ctx = fixture.ctx();
        let mut background = FadeBackground::new(&ThemeBackground::default(), &mut ctx);
        background.on_show(0);
        let mut renderer = RecordingRenderer::new();
        background.draw(&mut renderer, FADE_IN_MS).unwrap();
        assert_eq!(renderer.calls.len(), 1);
    }
}
