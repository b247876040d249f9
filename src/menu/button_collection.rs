use super::button::MenuButton;
use crate::render::Renderer;

/// A parent button that folds out the child buttons naming it as parent
///
/// Children are referenced by their 1-based `parent` id only, never by
/// pointer, so the button list can be rebuilt freely.
#[derive(Debug, Clone)]
pub struct MenuButtonCollection {
    pub button: MenuButton,
    /// Own 1-based id, matched against `MenuButton::parent`
    pub parent_id: usize,
    /// Number of buttons linked to this collection
    pub child_count: usize,
    /// 1-based interaction index focused when the collapsed collection is entered
    pub first_child: usize,
}

impl MenuButtonCollection {
    pub fn new(button: MenuButton, parent_id: usize, first_child: usize) -> Self {
        MenuButtonCollection {
            button,
            parent_id,
            child_count: 0,
            first_child,
        }
    }

    pub fn selected(&self) -> bool {
        self.button.selected
    }

    /// Selects the collection and, unless fading, shows or hides its children at once
    pub fn set_select(&mut self, value: bool, buttons: &mut [MenuButton]) {
        self.button.set_select(value);
        if self.button.fade {
            return;
        }
        for child in buttons.iter_mut().filter(|b| b.parent == self.parent_id) {
            child.visible = value;
            for text in &mut child.text {
                text.alpha = if value { 1.0 } else { 0.0 };
            }
        }
    }

    /// Draws the collection button and blends fading children
    ///
    /// Below half progress children follow the selection state; above it they
    /// become visible and fade in over the last third.
    pub fn draw(&mut self, renderer: &mut dyn Renderer, now: u64, buttons: &mut [MenuButton]) -> Result<(), String> {
        self.button.draw(renderer, now)?;
        if !self.button.fade {
            return Ok(());
        }

        let progress = self.button.fade_progress;
        let selected = self.button.selected;
        for child in buttons.iter_mut().filter(|b| b.parent == self.parent_id) {
            if progress < 0.5 {
                child.visible = selected;
                for text in &mut child.text {
                    text.visible = selected;
                }
            } else {
                child.visible = true;
                for text in &mut child.text {
                    text.visible = true;
                }
                child.set_alpha(((progress - 2.0 / 3.0) * 3.0).clamp(0.0, 1.0));
            }
        }
        Ok(())
    }
}
