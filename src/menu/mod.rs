//! Menu Framework
//!
//! A [`Menu`] holds every widget of one screen and the interaction list that
//! defines its tab order. Widgets live in typed vectors; interactions refer to
//! them by index and child buttons refer to their collection by 1-based id,
//! so rebuilding a menu never leaves dangling references.
//!
//! # Architecture
//!
//! - `background`: background strategies and their fallback chain
//! - `statics`, `text`, `button`, `button_collection`, `select_slide`: widgets
//! - `screen`: the [`Screen`](screen::Screen) trait implemented by every screen
//!
//! # Example Usage
//!
//! ```rust
//! let mut menu = Menu::new();
//! menu.load_from_theme(&mut ctx, &theme.basic);
//! menu.add_button(&mut ctx, &theme.button_solo);
//! menu.set_interaction(0);
//!
//! // Keyboard
//! menu.interact_next();
//!
//! // Render
//! menu.draw(&mut renderer, now)?;
//! ```

pub mod background;
pub mod button;
pub mod button_collection;
pub mod screen;
pub mod select_slide;
pub mod statics;
pub mod text;

use crate::input::{Key, MouseButton};
use crate::language::Language;
use crate::render::{Renderer, Viewport};
use crate::skin::Skins;
use crate::texture::{Texture, TextureLoader, TextureManager, TextureType};
use crate::theme::{
    Rgb, ThemeBackground, ThemeBasic, ThemeButton, ThemeButtonCollection, ThemeSelectSlide, ThemeStatic, ThemeText,
};
use background::{MenuBackground, NoneBackground, VideoOpener};
use button::MenuButton;
use button_collection::MenuButtonCollection;
use select_slide::{MenuSelectSlide, MouseClickAction, ARROW_LEFT_TEX, ARROW_RIGHT_TEX};
use statics::MenuStatic;
use text::MenuText;

/// Everything widget construction needs to resolve theme names
pub struct UiContext<'a> {
    pub skins: &'a Skins,
    pub language: &'a Language,
    pub textures: &'a mut TextureManager,
    pub loader: &'a mut dyn TextureLoader,
    pub videos: Option<&'a dyn VideoOpener>,
}

impl UiContext<'_> {
    /// Loads the skin texture registered under `name`
    ///
    /// Only colorized textures are keyed by color; unknown names give an
    /// unloaded texture.
    pub fn texture(&mut self, name: &str, typ: TextureType, col: Rgb) -> Texture {
        let Some(path) = self.skins.texture_file_name(name) else {
            return Texture::default();
        };
        let color = if typ == TextureType::Colorized { col } else { Rgb::WHITE };
        self.textures.get_texture(&mut *self.loader, &path, typ, color)
    }

    /// Loads a skin texture owned by the caller alone, bypassing the cache
    pub fn private_texture(&mut self, name: &str, typ: TextureType) -> Texture {
        let Some(path) = self.skins.texture_file_name(name) else {
            return Texture::default();
        };
        self.textures.load_texture(&mut *self.loader, &path, typ, Rgb::WHITE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionKind {
    Button,
    Text,
    SelectSlide,
    /// Button that only shows inside its collection
    ButtonCollectionChild,
}

/// One tab stop: a widget kind plus its index in the matching vector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuInteract {
    pub kind: InteractionKind,
    pub num: usize,
}

/// Outcome of a mouse event
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MouseResult {
    pub focus_changed: bool,
    /// Keys the event stands for, handled like keyboard input
    pub keys: Vec<Key>,
}

pub struct Menu {
    pub background: Box<dyn MenuBackground>,
    pub statics: Vec<MenuStatic>,
    pub texts: Vec<MenuText>,
    pub buttons: Vec<MenuButton>,
    pub button_collections: Vec<MenuButtonCollection>,
    pub select_slides: Vec<MenuSelectSlide>,
    interactions: Vec<MenuInteract>,
    sel_interaction: usize,
    /// Interaction whose selection state is currently applied to the widgets
    applied: Option<usize>,
    /// Right click acts as Escape
    pub right_mb_esc: bool,
}

impl Default for Menu {
    fn default() -> Self {
        Menu::new()
    }
}

impl Menu {
    pub fn new() -> Self {
        Menu {
            background: Box::new(NoneBackground),
            statics: Vec::new(),
            texts: Vec::new(),
            buttons: Vec::new(),
            button_collections: Vec::new(),
            select_slides: Vec::new(),
            interactions: Vec::new(),
            sel_interaction: 0,
            applied: None,
            right_mb_esc: true,
        }
    }

    /// Builds the shared screen elements
    ///
    /// Collections come first so buttons added afterwards can link to them.
    pub fn load_from_theme(&mut self, ctx: &mut UiContext, theme: &ThemeBasic) {
        for collection in &theme.button_collections {
            self.add_button_collection(ctx, collection);
        }
        self.add_background(ctx, &theme.background);
        for st in &theme.statics {
            self.add_static(ctx, st);
        }
        for text in &theme.text {
            self.add_text(text);
        }
    }

    pub fn add_background(&mut self, ctx: &mut UiContext, theme: &ThemeBackground) {
        self.background = background::create(theme, ctx);
    }

    pub fn add_static(&mut self, ctx: &mut UiContext, theme: &ThemeStatic) -> usize {
        let texture = ctx.texture(&theme.tex, theme.typ, theme.col);
        self.statics.push(MenuStatic::new(texture, theme));
        self.statics.len() - 1
    }

    /// Adds a text; writable texts become tab stops
    pub fn add_text(&mut self, theme: &ThemeText) -> usize {
        let text = MenuText::from_theme(theme, 0.0, 0.0);
        let writable = text.writable;
        self.texts.push(text);
        let num = self.texts.len() - 1;
        if writable {
            self.interactions.push(MenuInteract {
                kind: InteractionKind::Text,
                num,
            });
        }
        num
    }

    fn make_button(ctx: &mut UiContext, theme: &ThemeButton) -> MenuButton {
        let texture = ctx.texture(&theme.tex, theme.typ, theme.col);
        let fade_texture = if theme.fade && !theme.fade_tex.is_empty() {
            ctx.texture(&theme.fade_tex, theme.typ, theme.col)
        } else {
            Texture::default()
        };
        MenuButton::new(texture, fade_texture, theme)
    }

    pub fn add_button_collection(&mut self, ctx: &mut UiContext, theme: &ThemeButtonCollection) -> usize {
        let button = Self::make_button(ctx, &theme.style);
        let parent_id = self.button_collections.len() + 1;
        self.button_collections
            .push(MenuButtonCollection::new(button, parent_id, theme.first_child));
        parent_id - 1
    }

    /// Adds a button and its tab stop
    ///
    /// A button naming an existing collection as parent is hidden and only
    /// shown while that collection is open.
    pub fn add_button(&mut self, ctx: &mut UiContext, theme: &ThemeButton) -> usize {
        let mut button = Self::make_button(ctx, theme);
        let num = self.buttons.len();
        let mut kind = InteractionKind::Button;

        let parent = theme.parent;
        if parent > 0 && parent <= self.button_collections.len() {
            let collection = &mut self.button_collections[parent - 1];
            button.parent = parent;
            button.visible = false;
            for text in &mut button.text {
                text.alpha = 0.0;
            }
            if collection.button.fade {
                button.texture.alpha = 0.0;
                button.fade_texture.alpha = 0.0;
            }
            collection.child_count += 1;
            kind = InteractionKind::ButtonCollectionChild;
        } else if parent > 0 {
            log::warn!("Button {} names unknown collection {}", num, parent);
        }

        self.buttons.push(button);
        self.interactions.push(MenuInteract { kind, num });
        num
    }

    pub fn add_select_slide(
        &mut self,
        ctx: &mut UiContext,
        theme: &ThemeSelectSlide,
        options: Vec<String>,
        value: usize,
    ) -> usize {
        let texture = ctx.texture(&theme.tex, theme.typ, theme.col);
        let texture_sbg = ctx.texture(&theme.tex_sbg, theme.typ_sbg, theme.sbg_col);
        let arrow_left = ctx.texture(ARROW_LEFT_TEX, TextureType::Transparent, Rgb::WHITE);
        let arrow_right = ctx.texture(ARROW_RIGHT_TEX, TextureType::Transparent, Rgb::WHITE);

        self.select_slides.push(MenuSelectSlide::new(
            texture,
            texture_sbg,
            arrow_left,
            arrow_right,
            theme,
            options,
            value,
        ));
        let num = self.select_slides.len() - 1;
        self.interactions.push(MenuInteract {
            kind: InteractionKind::SelectSlide,
            num,
        });
        num
    }

    /// Replaces the options of a slide in place
    pub fn update_select_slide_options(&mut self, index: usize, names: Vec<String>, value: usize) {
        self.select_slides[index].set_options(names, value);
    }

    pub fn interactions(&self) -> &[MenuInteract] {
        &self.interactions
    }

    /// Index of the focused interaction
    pub fn selected(&self) -> usize {
        self.sel_interaction
    }

    pub fn current(&self) -> Option<MenuInteract> {
        self.interactions.get(self.sel_interaction).copied()
    }

    /// Button under the focus, collection children included
    pub fn selected_button(&self) -> Option<usize> {
        match self.current()? {
            MenuInteract {
                kind: InteractionKind::Button | InteractionKind::ButtonCollectionChild,
                num,
            } => Some(num),
            _ => None,
        }
    }

    pub fn selected_slide(&self) -> Option<usize> {
        match self.current()? {
            MenuInteract {
                kind: InteractionKind::SelectSlide,
                num,
            } => Some(num),
            _ => None,
        }
    }

    /// Focuses the interaction of button `button`
    pub fn select_button(&mut self, button: usize) -> bool {
        let found = self.interactions.iter().position(|it| {
            matches!(it.kind, InteractionKind::Button | InteractionKind::ButtonCollectionChild) && it.num == button
        });
        match found {
            Some(index) => self.set_interaction(index),
            None => false,
        }
    }

    /// Moves the focus to interaction `num`
    ///
    /// Returns false when `num` is already focused; widget state is left
    /// untouched then. Panics if `num` is not a valid interaction.
    pub fn set_interaction(&mut self, num: usize) -> bool {
        if self.applied == Some(num) {
            return false;
        }
        let target = self.interactions[num];

        if let Some(old) = self.applied.and_then(|i| self.interactions.get(i).copied()) {
            self.deselect(old, target);
        }
        self.select(target);

        self.sel_interaction = num;
        self.applied = Some(num);
        true
    }

    fn deselect(&mut self, old: MenuInteract, target: MenuInteract) {
        match old.kind {
            InteractionKind::Button => self.buttons[old.num].set_select(false),
            InteractionKind::Text => self.texts[old.num].selected = false,
            InteractionKind::SelectSlide => self.select_slides[old.num].set_select(false),
            InteractionKind::ButtonCollectionChild => {
                self.buttons[old.num].set_select(false);
                let parent = self.buttons[old.num].parent;
                let sibling = target.kind == InteractionKind::ButtonCollectionChild
                    && self.buttons[target.num].parent == parent;
                if !sibling {
                    if let Some(collection) = self.button_collections.get_mut(parent.wrapping_sub(1)) {
                        collection.set_select(false, &mut self.buttons);
                    }
                }
            }
        }
    }

    fn select(&mut self, target: MenuInteract) {
        match target.kind {
            InteractionKind::Button => self.buttons[target.num].set_select(true),
            InteractionKind::Text => self.texts[target.num].selected = true,
            InteractionKind::SelectSlide => self.select_slides[target.num].set_select(true),
            InteractionKind::ButtonCollectionChild => {
                self.buttons[target.num].set_select(true);
                let parent = self.buttons[target.num].parent;
                if let Some(collection) = self.button_collections.get_mut(parent.wrapping_sub(1)) {
                    if !collection.selected() {
                        collection.set_select(true, &mut self.buttons);
                    }
                }
            }
        }
    }

    fn is_child_of(&self, index: usize, parent: usize) -> bool {
        self.interactions.get(index).is_some_and(|it| {
            it.kind == InteractionKind::ButtonCollectionChild && self.buttons[it.num].parent == parent
        })
    }

    /// Interaction focused when the collapsed collection `parent` is entered
    fn entry_point(&self, parent: usize) -> Option<usize> {
        let collection = self.button_collections.get(parent.wrapping_sub(1))?;
        let declared = collection.first_child.wrapping_sub(1);
        if collection.first_child > 0 && self.is_child_of(declared, parent) {
            return Some(declared);
        }
        (0..self.interactions.len()).find(|&i| self.is_child_of(i, parent))
    }

    fn focus_in_collection(&self, parent: usize) -> bool {
        self.applied.is_some_and(|i| self.is_child_of(i, parent))
    }

    /// Whether keyboard navigation may stop at interaction `index`
    ///
    /// Children of a collection are reached through the collection's entry
    /// point only, and not at all while the focus is already inside it.
    pub fn is_selectable(&self, index: usize) -> bool {
        let it = self.interactions[index];
        match it.kind {
            InteractionKind::Button => {
                let button = &self.buttons[it.num];
                button.visible && button.selectable
            }
            InteractionKind::Text => self.texts[it.num].visible,
            InteractionKind::SelectSlide => self.select_slides[it.num].visible,
            InteractionKind::ButtonCollectionChild => {
                let parent = self.buttons[it.num].parent;
                self.entry_point(parent) == Some(index) && !self.focus_in_collection(parent)
            }
        }
    }

    fn interact_step(&mut self, forward: bool) -> bool {
        let count = self.interactions.len();
        if count == 0 {
            return false;
        }
        let start = self.sel_interaction.min(count - 1);
        let mut index = start;
        loop {
            index = if forward {
                (index + 1) % count
            } else {
                (index + count - 1) % count
            };
            if index == start {
                return false;
            }
            if self.is_selectable(index) {
                return self.set_interaction(index);
            }
        }
    }

    /// Focuses the next selectable interaction, wrapping around
    pub fn interact_next(&mut self) -> bool {
        self.interact_step(true)
    }

    pub fn interact_prev(&mut self) -> bool {
        self.interact_step(false)
    }

    fn sibling(&self, forward: bool) -> Option<usize> {
        let current = self.current()?;
        let parent = self.buttons[current.num].parent;
        let mut candidates: Box<dyn Iterator<Item = usize>> = if forward {
            Box::new(self.sel_interaction + 1..self.interactions.len())
        } else {
            Box::new((0..self.sel_interaction).rev())
        };
        candidates.find(|&i| self.is_child_of(i, parent))
    }

    fn interact_adjust(&mut self, forward: bool) -> bool {
        let Some(current) = self.current() else {
            return false;
        };
        match current.kind {
            InteractionKind::SelectSlide => {
                let slide = &mut self.select_slides[current.num];
                let value = slide.value();
                let count = slide.options().len();
                let new_value = if forward {
                    (value + 1).min(count.saturating_sub(1))
                } else {
                    value.saturating_sub(1)
                };
                if new_value == value {
                    return false;
                }
                slide.set_select_opt(new_value);
                true
            }
            InteractionKind::ButtonCollectionChild => match self.sibling(forward) {
                Some(index) => self.set_interaction(index),
                None => self.interact_step(forward),
            },
            _ => self.interact_step(forward),
        }
    }

    /// "Right": next slide option, next sibling in a collection, or next interaction
    pub fn interact_inc(&mut self) -> bool {
        self.interact_adjust(true)
    }

    pub fn interact_dec(&mut self) -> bool {
        self.interact_adjust(false)
    }

    /// Selected option of slide `slide`
    pub fn slide_value(&self, slide: usize) -> usize {
        self.select_slides[slide].value()
    }

    /// Interaction under the render space point, first match wins
    pub fn interact_at(&self, x: f32, y: f32) -> Option<usize> {
        self.interactions.iter().position(|it| match it.kind {
            InteractionKind::Button | InteractionKind::ButtonCollectionChild => {
                let button = &self.buttons[it.num];
                button.visible && button.mouse_area().contains(x, y)
            }
            InteractionKind::Text => {
                let text = &self.texts[it.num];
                text.visible && text.mouse_area().contains(x, y)
            }
            InteractionKind::SelectSlide => {
                let slide = &self.select_slides[it.num];
                slide.visible && slide.mouse_area().contains(x, y)
            }
        })
    }

    /// Collection under the point
    pub fn collection_at(&self, x: f32, y: f32) -> Option<usize> {
        self.button_collections
            .iter()
            .position(|c| c.button.visible && c.button.mouse_area().contains(x, y))
    }

    /// Hit-tests a mouse event given in window pixels
    ///
    /// Hovering focuses the widget under the cursor. Clicks and wheel turns
    /// are reported as the keys they stand for.
    pub fn parse_mouse(
        &mut self,
        button: Option<MouseButton>,
        down: bool,
        x: i32,
        y: i32,
        viewport: &Viewport,
    ) -> MouseResult {
        let mut result = MouseResult::default();
        if self.right_mb_esc && down && button == Some(MouseButton::Right) {
            result.keys.push(Key::Escape);
            return result;
        }

        let (rx, ry) = viewport.to_render(x, y);
        if let Some(index) = self.interact_at(rx, ry) {
            result.focus_changed = self.set_interaction(index);
            if !down {
                return result;
            }
            let it = self.interactions[index];
            let on_slide = it.kind == InteractionKind::SelectSlide;
            let key = match button {
                Some(MouseButton::Left) if on_slide => match self.select_slides[it.num].on_click(rx, ry) {
                    MouseClickAction::Left => Some(Key::Left),
                    MouseClickAction::Right => Some(Key::Right),
                    MouseClickAction::Return => Some(Key::Return),
                },
                Some(MouseButton::Left) => Some(Key::Return),
                Some(MouseButton::WheelDown) if on_slide => Some(Key::Right),
                Some(MouseButton::WheelUp) if on_slide => Some(Key::Left),
                _ => None,
            };
            result.keys.extend(key);
        } else if let Some(collection) = self.collection_at(rx, ry) {
            if !self.button_collections[collection].selected() {
                if let Some(entry) = self.entry_point(collection + 1) {
                    result.focus_changed = self.set_interaction(entry);
                }
            }
        }
        result
    }

    /// Appends typed text to a focused writable text
    pub fn parse_text_input(&mut self, input: &str) -> bool {
        match self.current() {
            Some(MenuInteract { kind: InteractionKind::Text, num }) if self.texts[num].writable => {
                self.texts[num].append(input);
                true
            }
            _ => false,
        }
    }

    /// Removes the last character of a focused writable text
    pub fn delete_text_char(&mut self) -> bool {
        match self.current() {
            Some(MenuInteract { kind: InteractionKind::Text, num }) if self.texts[num].writable => {
                self.texts[num].delete_last();
                true
            }
            _ => false,
        }
    }

    pub fn on_show(&mut self, now: u64) {
        self.background.on_show(now);
    }

    pub fn on_hide(&mut self) {
        self.background.on_finish();
    }

    /// Background, then statics, texts, collections, buttons and slides
    pub fn draw(&mut self, renderer: &mut dyn Renderer, now: u64) -> Result<(), String> {
        self.background.draw(renderer, now)?;
        for st in &self.statics {
            st.draw(renderer)?;
        }
        for text in &self.texts {
            text.draw(renderer, now)?;
        }
        for collection in &mut self.button_collections {
            collection.draw(renderer, now, &mut self.buttons)?;
        }
        for button in &mut self.buttons {
            button.draw(renderer, now)?;
        }
        for slide in &self.select_slides {
            slide.draw(renderer, now)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::testing::RecordingRenderer;
    use crate::testing::Fixture;

    fn button_at(y: f32, parent: usize) -> ThemeButton {
        ThemeButton {
            tex: "Button".to_string(),
            x: 100.0,
            y,
            w: 200.0,
            h: 40.0,
            select_w: 200.0,
            select_h: 40.0,
            parent,
            ..ThemeButton::default()
        }
    }

    fn collection_theme(y: f32) -> ThemeButtonCollection {
        ThemeButtonCollection {
            style: button_at(y, 0),
            child_count: 0,
            first_child: 0,
        }
    }

    fn plain_menu(fixture: &mut Fixture, count: usize) -> Menu {
        let mut ctx = fixture.ctx();
        let mut menu = Menu::new();
        for i in 0..count {
            menu.add_button(&mut ctx, &button_at(50.0 * i as f32, 0));
        }
        menu
    }

    /// buttons: 0 plain, 1..=3 children of collection 1, 4 plain
    fn collection_menu(fixture: &mut Fixture) -> Menu {
        let mut ctx = fixture.ctx();
        let mut menu = Menu::new();
        menu.add_button_collection(&mut ctx, &collection_theme(400.0));
        menu.add_button(&mut ctx, &button_at(0.0, 0));
        for i in 0..3 {
            menu.add_button(&mut ctx, &button_at(100.0 + 50.0 * i as f32, 1));
        }
        menu.add_button(&mut ctx, &button_at(300.0, 0));
        menu.set_interaction(0);
        menu
    }

    #[test]
    fn test_add_button_links_children() {
        let mut fixture = Fixture::new();
        let menu = collection_menu(&mut fixture);

        let kinds: Vec<InteractionKind> = menu.interactions().iter().map(|i| i.kind).collect();
        assert_eq!(
            kinds,
            vec![
                InteractionKind::Button,
                InteractionKind::ButtonCollectionChild,
                InteractionKind::ButtonCollectionChild,
                InteractionKind::ButtonCollectionChild,
                InteractionKind::Button,
            ]
        );
        assert_eq!(menu.button_collections[0].child_count, 3);
        assert!(!menu.buttons[1].visible);
        assert_eq!(menu.buttons[1].parent, 1);
        assert!(menu.buttons[0].visible);
    }

    #[test]
    fn test_parent_out_of_range_stays_plain_button() {
        let mut fixture = Fixture::new();
        let mut ctx = fixture.ctx();
        let mut menu = Menu::new();
        menu.add_button(&mut ctx, &button_at(0.0, 3));
        assert_eq!(menu.interactions()[0].kind, InteractionKind::Button);
        assert!(menu.buttons[0].visible);
    }

    #[test]
    fn test_set_interaction_twice_is_noop() {
        let mut fixture = Fixture::new();
        let mut ctx = fixture.ctx();
        let mut menu = Menu::new();
        let mut theme = button_at(0.0, 0);
        theme.fade = true;
        menu.add_button(&mut ctx, &theme);

        assert!(menu.set_interaction(0));
        assert_eq!(menu.buttons[0].fade_progress, button::FADE_STEP);
        menu.buttons[0].fade_progress = 0.5;

        assert!(!menu.set_interaction(0));
        assert_eq!(menu.buttons[0].fade_progress, 0.5);
        assert!(menu.buttons[0].selected);
    }

    #[test]
    #[should_panic]
    fn test_set_interaction_out_of_range_panics() {
        let mut fixture = Fixture::new();
        let mut menu = plain_menu(&mut fixture, 2);
        menu.set_interaction(2);
    }

    #[test]
    fn test_interact_next_cycles_back() {
        let mut fixture = Fixture::new();
        let mut menu = plain_menu(&mut fixture, 4);
        menu.set_interaction(2);
        for _ in 0..4 {
            assert!(menu.interact_next());
        }
        assert_eq!(menu.selected(), 2);
        assert!(menu.buttons[2].selected);
        assert_eq!(menu.buttons.iter().filter(|b| b.selected).count(), 1);

        menu.interact_prev();
        assert_eq!(menu.selected(), 1);
    }

    #[test]
    fn test_navigation_skips_hidden_and_stops() {
        let mut fixture = Fixture::new();
        let mut menu = plain_menu(&mut fixture, 3);
        menu.set_interaction(0);
        menu.buttons[1].visible = false;
        menu.interact_next();
        assert_eq!(menu.selected(), 2);

        menu.buttons[0].selectable = false;
        menu.buttons[1].selectable = false;
        assert!(!menu.interact_next());
        assert_eq!(menu.selected(), 2);
    }

    #[test]
    fn test_collection_traversal() {
        let mut fixture = Fixture::new();
        let mut menu = collection_menu(&mut fixture);

        // entering the collection opens it
        menu.interact_next();
        assert_eq!(menu.selected(), 1);
        assert!(menu.button_collections[0].selected());
        assert!(menu.buttons[2].visible);

        // inc walks the siblings without closing the collection
        menu.interact_inc();
        assert_eq!(menu.selected(), 2);
        assert!(menu.button_collections[0].selected());
        menu.interact_inc();
        assert_eq!(menu.selected(), 3);

        // past the last sibling focus leaves and the collection closes
        menu.interact_inc();
        assert_eq!(menu.selected(), 4);
        assert!(!menu.button_collections[0].selected());
        assert!(!menu.buttons[2].visible);

        // siblings are skipped by plain navigation
        menu.interact_prev();
        assert_eq!(menu.selected(), 1);
        menu.interact_next();
        assert_eq!(menu.selected(), 4);
    }

    #[test]
    fn test_declared_first_child_is_entry_point() {
        let mut fixture = Fixture::new();
        let mut ctx = fixture.ctx();
        let mut menu = Menu::new();
        let mut theme = collection_theme(400.0);
        theme.first_child = 3;
        menu.add_button_collection(&mut ctx, &theme);
        menu.add_button(&mut ctx, &button_at(0.0, 0));
        menu.add_button(&mut ctx, &button_at(100.0, 1));
        menu.add_button(&mut ctx, &button_at(150.0, 1));
        menu.set_interaction(0);

        assert!(!menu.is_selectable(1));
        assert!(menu.is_selectable(2));
        menu.interact_next();
        assert_eq!(menu.selected(), 2);
    }

    #[test]
    fn test_slide_inc_dec_clamps() {
        let mut fixture = Fixture::new();
        let mut ctx = fixture.ctx();
        let mut menu = Menu::new();
        let options = vec!["Off".to_string(), "On".to_string()];
        menu.add_select_slide(&mut ctx, &ThemeSelectSlide::default(), options, 0);
        menu.set_interaction(0);

        assert!(menu.interact_inc());
        assert_eq!(menu.slide_value(0), 1);
        assert!(!menu.interact_inc());
        assert_eq!(menu.slide_value(0), 1);
        assert!(menu.interact_dec());
        assert!(!menu.interact_dec());
        assert_eq!(menu.slide_value(0), 0);
    }

    #[test]
    fn test_mouse_hover_click_and_escape() {
        let mut fixture = Fixture::new();
        let mut menu = plain_menu(&mut fixture, 2);
        menu.set_interaction(0);
        let viewport = Viewport::default();

        let hover = menu.parse_mouse(None, false, 150, 60, &viewport);
        assert!(hover.focus_changed);
        assert!(hover.keys.is_empty());
        assert_eq!(menu.selected(), 1);

        let click = menu.parse_mouse(Some(MouseButton::Left), true, 150, 60, &viewport);
        assert!(!click.focus_changed);
        assert_eq!(click.keys, vec![Key::Return]);

        let right = menu.parse_mouse(Some(MouseButton::Right), true, 150, 60, &viewport);
        assert_eq!(right.keys, vec![Key::Escape]);

        let nothing = menu.parse_mouse(Some(MouseButton::Left), true, 700, 500, &viewport);
        assert_eq!(nothing, MouseResult::default());
    }

    #[test]
    fn test_mouse_on_slide() {
        let mut fixture = Fixture::new();
        let mut ctx = fixture.ctx();
        let mut menu = Menu::new();
        let theme = ThemeSelectSlide {
            x: 0.0,
            y: 100.0,
            w: 200.0,
            h: 40.0,
            sbg_w: 400.0,
            ..ThemeSelectSlide::default()
        };
        let options = vec!["A".to_string(), "B".to_string()];
        menu.add_select_slide(&mut ctx, &theme, options, 0);
        let viewport = Viewport::default();

        let left = menu.parse_mouse(Some(MouseButton::Left), true, 205, 110, &viewport);
        assert_eq!(left.keys, vec![Key::Left]);
        let right = menu.parse_mouse(Some(MouseButton::Left), true, 595, 110, &viewport);
        assert_eq!(right.keys, vec![Key::Right]);
        let wheel = menu.parse_mouse(Some(MouseButton::WheelDown), true, 400, 110, &viewport);
        assert_eq!(wheel.keys, vec![Key::Right]);
        let caption = menu.parse_mouse(Some(MouseButton::Left), true, 50, 110, &viewport);
        assert_eq!(caption.keys, vec![Key::Return]);
    }

    #[test]
    fn test_mouse_over_collapsed_collection_enters_it() {
        let mut fixture = Fixture::new();
        let mut menu = collection_menu(&mut fixture);
        let viewport = Viewport::default();

        let result = menu.parse_mouse(None, false, 150, 410, &viewport);
        assert!(result.focus_changed);
        assert_eq!(menu.selected(), 1);
        assert!(menu.button_collections[0].selected());
    }

    #[test]
    fn test_writable_text_receives_input() {
        let mut fixture = Fixture::new();
        let mut menu = plain_menu(&mut fixture, 1);
        let theme = ThemeText {
            text: "Name".to_string(),
            writable: true,
            ..ThemeText::default()
        };
        menu.add_text(&theme);
        menu.add_text(&ThemeText::default());
        assert_eq!(menu.interactions().len(), 2);

        menu.set_interaction(0);
        assert!(!menu.parse_text_input("x"));
        menu.set_interaction(1);
        assert!(menu.texts[0].selected);
        assert!(menu.parse_text_input("!"));
        assert!(menu.delete_text_char());
        assert!(menu.delete_text_char());
        assert_eq!(menu.texts[0].text(), "Nam");
    }

    #[test]
    fn test_load_from_theme_order() {
        let mut fixture = Fixture::new();
        let mut ctx = fixture.ctx();
        let theme = ThemeBasic {
            statics: vec![ThemeStatic {
                tex: "Background".to_string(),
                w: 10.0,
                h: 10.0,
                ..ThemeStatic::default()
            }],
            text: vec![ThemeText {
                text: "Hello".to_string(),
                ..ThemeText::default()
            }],
            button_collections: vec![collection_theme(0.0)],
            ..ThemeBasic::default()
        };
        let mut menu = Menu::new();
        menu.load_from_theme(&mut ctx, &theme);
        menu.add_button(&mut ctx, &button_at(100.0, 0));

        assert_eq!(menu.button_collections.len(), 1);
        assert_eq!(menu.statics.len(), 1);
        assert_eq!(menu.texts.len(), 1);

        let mut renderer = RecordingRenderer::new();
        menu.draw(&mut renderer, 0).unwrap();
        let drawn: Vec<u32> = renderer.textures_drawn().iter().map(|(id, _)| *id).collect();
        let static_tex = menu.statics[0].texture.tex_num;
        let button_tex = menu.buttons[0].texture.tex_num;
        assert_eq!(drawn.first(), Some(&static_tex));
        assert_eq!(drawn.last(), Some(&button_tex));
        assert_eq!(renderer.texts(), vec!["Hello"]);
    }
}
