use super::MenuBackground;
use crate::render::{RectF, Renderer, Rgba};
use crate::theme::{BackgroundType, Rgb, ThemeBackground};

/// Solid color fill
#[derive(Debug, Clone)]
pub struct ColorBackground {
    color: Rgb,
    alpha: f32,
}

impl ColorBackground {
    pub fn new(theme: &ThemeBackground) -> Self {
        ColorBackground {
            color: theme.color,
            alpha: theme.alpha,
        }
    }
}

impl MenuBackground for ColorBackground {
    fn kind(&self) -> BackgroundType {
        BackgroundType::Color
    }

    fn draw(&mut self, renderer: &mut dyn Renderer, _now: u64) -> Result<(), String> {
        let viewport = renderer.viewport();
        renderer.fill_rect(
            RectF::new(0.0, 0.0, viewport.render_w, viewport.render_h),
            Rgba::from_rgb(self.color, self.alpha),
        )
    }
}
