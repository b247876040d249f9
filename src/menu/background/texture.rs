use super::{BackgroundError, MenuBackground};
use crate::menu::UiContext;
use crate::render::Renderer;
use crate::texture::{Texture, TextureType};
use crate::theme::{BackgroundType, Rgb, ThemeBackground};

/// Skin image stretched over the whole render area
#[derive(Debug, Clone)]
pub struct TextureBackground {
    texture: Texture,
}

impl TextureBackground {
    pub fn new(theme: &ThemeBackground, ctx: &mut UiContext) -> Result<Self, BackgroundError> {
        let texture = load_stretched(theme, ctx)?;
        Ok(TextureBackground { texture })
    }
}

/// Loads the theme's background image sized to the render area
pub(super) fn load_stretched(theme: &ThemeBackground, ctx: &mut UiContext) -> Result<Texture, BackgroundError> {
    let path = ctx
        .skins
        .texture_file_name(&theme.tex)
        .ok_or(BackgroundError::NoTexture)?;
    let mut texture = ctx
        .textures
        .get_texture(&mut *ctx.loader, &path, TextureType::Plain, Rgb::WHITE);
    if !texture.is_loaded() {
        return Err(BackgroundError::TextureLoad(path));
    }
    texture.set_pos(0.0, 0.0, 0.0);
    texture.set_size(crate::render::RENDER_W, crate::render::RENDER_H);
    texture.col = theme.color;
    texture.alpha = theme.alpha;
    Ok(texture)
}

impl MenuBackground for TextureBackground {
    fn kind(&self) -> BackgroundType {
        BackgroundType::Texture
    }

    fn draw(&mut self, renderer: &mut dyn Renderer, _now: u64) -> Result<(), String> {
        renderer.draw_texture(&self.texture)
    }
}
