//! Menu text
//!
//! A text is split into tiles (lines) on literal `\n` markers and, when a
//! width is set, on word boundaries so no tile is wider than `w`.

use crate::font::{text_width, FontStyle};
use crate::render::{RectF, Renderer, Rgba};
use crate::theme::{Align, Rgb, ThemeText};

/// Caret blink half period in milliseconds
const CARET_BLINK_MS: u64 = 500;

#[derive(Debug, Clone)]
pub struct MenuText {
    pub x: f32,
    pub y: f32,
    /// Wrap width, 0 disables wrapping
    pub w: f32,
    pub col: Rgb,
    pub alpha: f32,
    pub style: FontStyle,
    pub align: Align,
    pub visible: bool,
    pub writable: bool,
    pub selected: bool,
    pub reflection: bool,
    pub reflection_spacing: f32,
    text: String,
    tiles: Vec<String>,
}

impl MenuText {
    pub fn new(x: f32, y: f32, text: &str) -> Self {
        let mut menu_text = MenuText {
            x,
            y,
            w: 0.0,
            col: Rgb::BLACK,
            alpha: 1.0,
            style: FontStyle::default(),
            align: Align::Left,
            visible: true,
            writable: false,
            selected: false,
            reflection: false,
            reflection_spacing: 0.0,
            text: String::new(),
            tiles: Vec::new(),
        };
        menu_text.set_text(text);
        menu_text
    }

    /// Builds a text from its theme record, offset by `(dx, dy)`
    pub fn from_theme(theme: &ThemeText, dx: f32, dy: f32) -> Self {
        let mut menu_text = MenuText {
            x: theme.x + dx,
            y: theme.y + dy,
            w: theme.w,
            col: theme.col,
            alpha: 1.0,
            style: FontStyle::new(theme.font, theme.size, theme.italic),
            align: theme.align,
            visible: true,
            writable: theme.writable,
            selected: false,
            reflection: theme.reflection,
            reflection_spacing: theme.reflection_spacing,
            text: String::new(),
            tiles: Vec::new(),
        };
        menu_text.set_text(&theme.text);
        menu_text
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tiles(&self) -> &[String] {
        &self.tiles
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.wrap();
    }

    /// Appends typed characters to a writable text
    pub fn append(&mut self, input: &str) {
        let mut text = std::mem::take(&mut self.text);
        text.push_str(input);
        self.set_text(&text);
    }

    /// Removes the last character
    pub fn delete_last(&mut self) {
        let mut text = std::mem::take(&mut self.text);
        text.pop();
        self.set_text(&text);
    }

    fn wrap(&mut self) {
        self.tiles.clear();
        for paragraph in self.text.split("\\n").flat_map(|p| p.split('\n')) {
            if self.w <= 0.0 {
                self.tiles.push(paragraph.to_string());
                continue;
            }

            let mut line = String::new();
            for word in paragraph.split(' ') {
                let candidate = if line.is_empty() {
                    word.to_string()
                } else {
                    format!("{} {}", line, word)
                };
                if !line.is_empty() && text_width(&candidate, &self.style) > self.w {
                    self.tiles.push(std::mem::replace(&mut line, word.to_string()));
                } else {
                    line = candidate;
                }
            }
            self.tiles.push(line);
        }
    }

    fn tile_x(&self, tile: &str) -> f32 {
        let width = text_width(tile, &self.style);
        match self.align {
            Align::Left => self.x,
            Align::Center => self.x - width / 2.0,
            Align::Right => self.x - width,
        }
    }

    /// Bounding box of all tiles
    pub fn mouse_area(&self) -> RectF {
        let width = self
            .tiles
            .iter()
            .map(|t| text_width(t, &self.style))
            .fold(0.0, f32::max);
        let x = match self.align {
            Align::Left => self.x,
            Align::Center => self.x - width / 2.0,
            Align::Right => self.x - width,
        };
        RectF::new(x, self.y, width, self.tiles.len().max(1) as f32 * self.style.size)
    }

    pub fn draw(&self, renderer: &mut dyn Renderer, now: u64) -> Result<(), String> {
        if !self.visible || self.alpha <= 0.0 {
            return Ok(());
        }
        let color = Rgba::from_rgb(self.col, self.alpha);
        let caret = self.writable && self.selected && (now / CARET_BLINK_MS) % 2 == 0;
        let last = self.tiles.len().saturating_sub(1);

        for (i, tile) in self.tiles.iter().enumerate() {
            let y = self.y + i as f32 * self.style.size;
            let x = self.tile_x(tile);
            if caret && i == last {
                renderer.draw_text(&format!("{}|", tile), x, y, &self.style, color)?;
            } else {
                renderer.draw_text(tile, x, y, &self.style, color)?;
            }
            if self.reflection {
                let mirror_y = self.y + self.tiles.len() as f32 * self.style.size + self.reflection_spacing;
                let faded = Rgba::from_rgb(self.col, self.alpha * 0.3);
                renderer.draw_text(tile, x, mirror_y + i as f32 * self.style.size, &self.style, faded)?;
            }
        }
        Ok(())
    }
}
