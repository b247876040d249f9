use crate::render::Renderer;
use crate::texture::Texture;
use crate::theme::ThemeStatic;

/// A non-interactive image
#[derive(Debug, Clone)]
pub struct MenuStatic {
    pub texture: Texture,
    pub visible: bool,
    pub reflection: bool,
    pub reflection_spacing: f32,
}

impl MenuStatic {
    pub fn new(mut texture: Texture, theme: &ThemeStatic) -> Self {
        texture.set_pos(theme.x, theme.y, theme.z);
        texture.set_size(theme.w, theme.h);
        texture.col = theme.col;
        texture.tex_x1 = theme.tex_x1;
        texture.tex_y1 = theme.tex_y1;
        texture.tex_x2 = theme.tex_x2;
        texture.tex_y2 = theme.tex_y2;

        MenuStatic {
            texture,
            visible: true,
            reflection: theme.reflection,
            reflection_spacing: theme.reflection_spacing,
        }
    }

    pub fn draw(&self, renderer: &mut dyn Renderer) -> Result<(), String> {
        if !self.visible {
            return Ok(());
        }
        renderer.draw_texture(&self.texture)?;
        if self.reflection {
            renderer.draw_texture_reflection(&self.texture, self.reflection_spacing)?;
        }
        Ok(())
    }
}
