//! Select slide
//!
//! A left/right cycling control over a list of option labels. Only a window
//! of `lines` labels fits on the slide background; the window follows the
//! selected option and the slot holding it is highlighted.

use super::text::MenuText;
use crate::font::{text_width, FontStyle};
use crate::render::{RectF, Renderer};
use crate::texture::Texture;
use crate::theme::{Align, Rgb, ThemeSelectSlide};

/// Skin texture names of the arrows
pub const ARROW_LEFT_TEX: &str = "SelectSlideArrowLeft";
pub const ARROW_RIGHT_TEX: &str = "SelectSlideArrowRight";

/// Gap between two option labels
const ITEM_SPACING: f32 = 20.0;
/// Padding between the background edge and an arrow
const ARROW_PAD: f32 = 4.0;
/// Side spacing when no arrows are shown
const MIN_SIDE_SPACING: f32 = 10.0;
const CAPTION_INDENT: f32 = 20.0;
const ELLIPSIS: &str = "..";

/// What a click on the slide means
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseClickAction {
    Return,
    Left,
    Right,
}

/// Truncates `text` to the longest prefix that fits `max_w` with `..` appended
///
/// Text that already fits is returned unchanged. Truncation happens on whole
/// characters.
pub fn fit_text(text: &str, max_w: f32, style: &FontStyle) -> String {
    if text_width(text, style) <= max_w {
        return text.to_string();
    }
    let chars: Vec<char> = text.chars().collect();
    for len in (0..chars.len()).rev() {
        let mut candidate: String = chars[..len].iter().collect();
        candidate.push_str(ELLIPSIS);
        if text_width(&candidate, style) <= max_w {
            return candidate;
        }
    }
    String::new()
}

fn scaled(col: Rgb, int: f32) -> Rgb {
    Rgb::new(col.r * int, col.g * int, col.b * int)
}

#[derive(Debug, Clone)]
pub struct MenuSelectSlide {
    pub texture: Texture,
    pub texture_sbg: Texture,
    pub arrow_left: Texture,
    pub arrow_right: Texture,
    pub caption: MenuText,
    pub visible: bool,
    pub selected: bool,
    pub show_arrows: bool,
    pub one_item_only: bool,
    theme: ThemeSelectSlide,
    option_style: FontStyle,
    options: Vec<String>,
    option_texts: Vec<MenuText>,
    /// First option shown in the window
    window_start: usize,
    value: usize,
}

impl MenuSelectSlide {
    pub fn new(
        mut texture: Texture,
        mut texture_sbg: Texture,
        mut arrow_left: Texture,
        mut arrow_right: Texture,
        theme: &ThemeSelectSlide,
        options: Vec<String>,
        value: usize,
    ) -> Self {
        texture.set_pos(theme.x, theme.y, theme.z);
        texture.set_size(theme.w, theme.h);
        let sbg_x = theme.x + theme.w + theme.skip_x;
        texture_sbg.set_pos(sbg_x, theme.y, theme.z);
        texture_sbg.set_size(theme.sbg_w, theme.h);

        let arrow_size = theme.h * 0.5;
        let arrow_y = theme.y + theme.h / 4.0;
        arrow_left.set_pos(sbg_x + ARROW_PAD, arrow_y, theme.z);
        arrow_left.set_size(arrow_size, arrow_size);
        arrow_right.set_pos(sbg_x + theme.sbg_w - ARROW_PAD - arrow_size, arrow_y, theme.z);
        arrow_right.set_size(arrow_size, arrow_size);

        let option_style = FontStyle::new(0, theme.text_size, false);
        let mut caption = MenuText::new(theme.x + CAPTION_INDENT, theme.y + (theme.h - theme.text_size) / 2.0, &theme.text);
        caption.style = option_style;

        let mut slide = MenuSelectSlide {
            texture,
            texture_sbg,
            arrow_left,
            arrow_right,
            caption,
            visible: true,
            selected: false,
            show_arrows: theme.show_arrows,
            one_item_only: theme.one_item_only,
            theme: theme.clone(),
            option_style,
            options,
            option_texts: Vec::new(),
            window_start: 0,
            value: 0,
        };
        slide.generate_lines();
        slide.set_select_opt(value);
        slide.set_select(false);
        slide
    }

    fn side_spacing(&self) -> f32 {
        if self.show_arrows {
            self.arrow_left.w + 2.0 * ARROW_PAD
        } else {
            MIN_SIDE_SPACING
        }
    }

    /// Widest label a slot may show
    pub fn max_option_width(&self) -> f32 {
        (self.texture_sbg.w - 2.0 * self.side_spacing()).max(0.0)
    }

    /// Number of label slots in the window
    pub fn lines(&self) -> usize {
        self.option_texts.len()
    }

    /// Recomputes the label slots from the available width
    ///
    /// As many slots as fit the widest label plus spacing, at least one and
    /// never more than there are options.
    pub fn generate_lines(&mut self) {
        let count = self.options.len();
        let available = self.max_option_width();

        let lines = if count == 0 {
            0
        } else if self.one_item_only {
            1
        } else {
            let widest = self
                .options
                .iter()
                .map(|o| text_width(o, &self.option_style))
                .fold(0.0, f32::max);
            ((available / (widest + ITEM_SPACING)).floor() as usize).clamp(1, count)
        };

        let slot_w = if lines > 0 { available / lines as f32 } else { 0.0 };
        let left = self.texture_sbg.x + self.side_spacing();
        self.option_texts = (0..lines)
            .map(|i| {
                let mut text = MenuText::new(left + slot_w * (i as f32 + 0.5), self.caption.y, "");
                text.style = self.option_style;
                text.align = Align::Center;
                text
            })
            .collect();
    }

    /// Index of the selected option
    pub fn value(&self) -> usize {
        self.value
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Labels currently shown, left to right
    pub fn visible_options(&self) -> Vec<&str> {
        self.option_texts.iter().map(|t| t.text()).collect()
    }

    /// Slot showing the selected option
    pub fn highlighted_slot(&self) -> Option<usize> {
        let slot = self.value.checked_sub(self.window_start)?;
        (slot < self.option_texts.len()).then_some(slot)
    }

    pub fn adjust_option_text_to_fit(&self, text: &str) -> String {
        fit_text(text, self.max_option_width(), &self.option_style)
    }

    /// Selects option `value`, clamped to the option range, and refreshes the window
    pub fn set_select_opt(&mut self, value: usize) {
        let count = self.options.len();
        self.value = value.min(count.saturating_sub(1));

        let (left, right) = if count <= 1 {
            (0.0, 0.0)
        } else if self.value == 0 {
            (0.0, 1.0)
        } else if self.value == count - 1 {
            (1.0, 0.0)
        } else {
            (1.0, 1.0)
        };
        self.arrow_left.alpha = left;
        self.arrow_right.alpha = right;

        let lines = self.option_texts.len();
        if lines == 0 {
            return;
        }
        let half_left = lines / 2;
        let half_right = (lines - 1) / 2;
        self.window_start = if self.value <= half_left {
            0
        } else if self.value + half_right >= count - 1 {
            count - lines
        } else {
            self.value - half_left
        };

        for slot in 0..lines {
            let label = self.adjust_option_text_to_fit(&self.options[self.window_start + slot]);
            self.option_texts[slot].set_text(&label);
        }
        self.update_colors();
    }

    /// Replaces the option list, e.g. after the skin list changed
    pub fn set_options(&mut self, options: Vec<String>, value: usize) {
        self.options = options;
        self.generate_lines();
        self.set_select_opt(value);
    }

    pub fn set_select(&mut self, value: bool) {
        self.selected = value;
        self.update_colors();
    }

    fn update_colors(&mut self) {
        let t = &self.theme;
        let (col, sbg, caption, active, other) = if self.selected {
            (
                scaled(t.col, t.int),
                scaled(t.sbg_col, t.sbg_int),
                scaled(t.tcol, t.tint),
                scaled(t.st_col, t.st_int),
                scaled(t.st_dcol, t.st_dint),
            )
        } else {
            (
                scaled(t.dcol, t.dint),
                scaled(t.sbg_dcol, t.sbg_dint),
                scaled(t.tdcol, t.tdint),
                scaled(t.st_col, t.st_int),
                scaled(t.st_dcol, t.st_dint),
            )
        };
        self.texture.col = col;
        self.texture.int = 1.0;
        self.texture_sbg.col = sbg;
        self.texture_sbg.int = 1.0;
        self.caption.col = caption;

        let highlighted = self.highlighted_slot();
        for (slot, text) in self.option_texts.iter_mut().enumerate() {
            text.col = if Some(slot) == highlighted { active } else { other };
        }
    }

    /// Maps a click to an action
    ///
    /// The outer twentieth of the background on each side steps the value.
    pub fn on_click(&self, x: f32, y: f32) -> MouseClickAction {
        let sbg = &self.texture_sbg;
        let area_w = sbg.w / 20.0;
        if y >= sbg.y && y <= sbg.y + sbg.h {
            if x >= sbg.x && x <= sbg.x + area_w {
                return MouseClickAction::Left;
            }
            if x >= sbg.x + sbg.w - area_w && x <= sbg.x + sbg.w {
                return MouseClickAction::Right;
            }
        }
        MouseClickAction::Return
    }

    pub fn mouse_area(&self) -> RectF {
        RectF::new(
            self.texture.x,
            self.texture.y,
            self.texture_sbg.x + self.texture_sbg.w - self.texture.x,
            self.texture.h,
        )
    }

    pub fn draw(&self, renderer: &mut dyn Renderer, now: u64) -> Result<(), String> {
        if !self.visible {
            return Ok(());
        }
        renderer.draw_texture(&self.texture)?;
        renderer.draw_texture(&self.texture_sbg)?;
        self.caption.draw(renderer, now)?;
        if self.show_arrows {
            renderer.draw_texture(&self.arrow_left)?;
            renderer.draw_texture(&self.arrow_right)?;
        }
        for text in &self.option_texts {
            text.draw(renderer, now)?;
        }
        Ok(())
    }
}
