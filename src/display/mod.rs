//! Display
//!
//! Owns the screen set and decides what is drawn each frame: the current
//! screen, or during a transition the next screen with a captured image of
//! the old one fading out on top. Popups draw above either and take input
//! first.
//!
//! # Transition
//!
//! 1. `fade_to` marks the next screen and calls its `on_show`.
//! 2. On the next frame the current screen is drawn once more and captured.
//!    A failed capture disables fading for the rest of the session.
//! 3. The capture is drawn over the next screen with alpha
//!    `1 - (elapsed / FADE_DURATION)²`.
//! 4. Once the fade is complete: old `on_hide`, swap, new `on_show_finish`.

pub mod cursor;

pub use cursor::Cursor;

use crate::input::{Key, MouseButton};
use crate::menu::screen::{ScreenEnv, ScreenRequest};
use crate::menu::MouseResult;
use crate::render::{Renderer, Rgba, Viewport};
use crate::screens::{ScreenId, ScreenSet};
use crate::texture::Texture;

/// Length of the screen cross-fade in milliseconds
pub const FADE_DURATION: u64 = 400;

pub struct Display {
    screens: ScreenSet,
    current: ScreenId,
    next: Option<ScreenId>,
    /// Target of a confirmed check popup, `None` means quit
    next_with_check: Option<ScreenId>,
    check_ok: bool,
    black_screen: bool,
    pub fade_enabled: bool,
    fade_failed: bool,
    /// Capture time of the running fade, 0 while nothing is captured
    fade_start_time: u64,
    fade_textures: Vec<Texture>,
    popup: Option<ScreenId>,
    pub cursor: Cursor,
    pub viewport: Viewport,
}

impl Display {
    pub fn new(screens: ScreenSet, start: ScreenId, fade_enabled: bool, cursor: Cursor, viewport: Viewport) -> Self {
        Display {
            screens,
            current: start,
            next: None,
            next_with_check: None,
            check_ok: false,
            black_screen: false,
            fade_enabled,
            fade_failed: false,
            fade_start_time: 0,
            fade_textures: Vec::new(),
            popup: None,
            cursor,
            viewport,
        }
    }

    /// Shows the start screen without a transition
    pub fn show_first(&mut self, env: &mut ScreenEnv) {
        let screen = self.screens.get_mut(self.current);
        screen.on_show(env);
        screen.on_show_finish();
    }

    pub fn current_id(&self) -> ScreenId {
        self.current
    }

    #[cfg(test)]
    pub fn next_id(&self) -> Option<ScreenId> {
        self.next
    }

    #[cfg(test)]
    pub fn popup(&self) -> Option<ScreenId> {
        self.popup
    }

    pub fn is_transitioning(&self) -> bool {
        self.next.is_some()
    }

    #[cfg(test)]
    pub fn fade_failed(&self) -> bool {
        self.fade_failed
    }

    #[cfg(test)]
    pub fn black_screen(&self) -> bool {
        self.black_screen
    }

    #[cfg(test)]
    pub fn check_ok(&self) -> bool {
        self.check_ok
    }

    /// Starts a transition to `id`
    ///
    /// Ignored while another transition is running or when `id` is already shown.
    pub fn fade_to(&mut self, id: ScreenId, env: &mut ScreenEnv) {
        if let Some(next) = self.next {
            log::debug!("Fade to {:?} ignored, already fading to {:?}", id, next);
            return;
        }
        if id == self.current {
            return;
        }
        log::debug!("Fading from {:?} to {:?}", self.current, id);
        self.next = Some(id);
        self.fade_start_time = 0;
        self.screens.get_mut(id).on_show(env);
    }

    /// Asks for confirmation before fading to `target` (or quitting with `None`)
    pub fn check_fade_to(&mut self, target: Option<ScreenId>, message: &str, env: &mut ScreenEnv) {
        self.next_with_check = target;
        self.check_ok = false;
        self.show_popup(ScreenId::CheckPopup, message, env);
    }

    pub fn show_popup(&mut self, id: ScreenId, message: &str, env: &mut ScreenEnv) {
        if let Some(old) = self.popup.take() {
            self.screens.get_mut(old).on_hide();
        }
        let popup = self.screens.get_mut(id);
        popup.set_message(message);
        popup.on_show(env);
        popup.on_show_finish();
        self.popup = Some(id);
    }

    /// Closes the open popup; a confirmed check popup carries out the pending change
    pub fn close_popup(&mut self, confirmed: bool, env: &mut ScreenEnv) {
        let Some(popup) = self.popup.take() else {
            return;
        };
        self.screens.get_mut(popup).on_hide();
        if popup != ScreenId::CheckPopup {
            return;
        }
        self.check_ok = confirmed;
        if self.check_ok {
            self.confirm_check(env);
        } else {
            self.abort_screen_change();
        }
    }

    fn confirm_check(&mut self, env: &mut ScreenEnv) {
        match self.next_with_check.take() {
            Some(target) => self.fade_to(target, env),
            None => {
                log::info!("Switching to black screen");
                self.black_screen = true;
            }
        }
    }

    /// Cancels a pending screen change
    ///
    /// Fails once the fade has captured the old screen; from then on the
    /// transition always completes.
    pub fn abort_screen_change(&mut self) -> bool {
        if self.next.is_some() && self.fade_start_time != 0 {
            return false;
        }
        if let Some(next) = self.next.take() {
            self.screens.get_mut(next).on_hide();
        }
        self.next_with_check = None;
        self.check_ok = false;
        true
    }

    /// Focused interaction of the current screen
    pub fn current_selection(&self) -> usize {
        self.screens.get(self.current).menu().selected()
    }

    /// Swaps in a freshly built screen set and shows `start` on it
    ///
    /// The focus moves to `selection`, clamped to the interactions of the new
    /// screen, so a rebuild keeps the user on the widget they were using.
    pub fn replace_screens(&mut self, screens: ScreenSet, start: ScreenId, selection: usize, env: &mut ScreenEnv) {
        debug_assert!(self.fade_textures.is_empty(), "screens replaced during a fade");
        self.screens = screens;
        self.current = start;
        self.next = None;
        self.next_with_check = None;
        self.popup = None;
        self.fade_start_time = 0;
        self.show_first(env);

        let screen = self.screens.get_mut(start);
        let count = screen.menu().interactions().len();
        if count > 0 {
            screen.set_interaction(selection.min(count - 1));
        }
    }

    /// Squared fade progress, 1.0 once the transition may complete
    pub fn fade_state_square(&self, now: u64) -> f32 {
        if !self.fade_enabled || self.fade_failed || self.fade_start_time == 0 {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.fade_start_time);
        let state = (elapsed as f32 / FADE_DURATION as f32).min(1.0);
        state * state
    }

    /// Draws one frame on every screen
    ///
    /// Returns false once the black screen is up and the application should quit.
    pub fn draw(&mut self, renderer: &mut dyn Renderer, now: u64) -> Result<bool, String> {
        let screen_count = self.viewport.screens.max(1);

        if self.black_screen {
            for s in 0..screen_count {
                renderer.begin_screen(s);
                renderer.clear(Rgba::BLACK)?;
            }
            return Ok(false);
        }

        let Some(next) = self.next else {
            for s in 0..screen_count {
                renderer.begin_screen(s);
                renderer.clear(Rgba::BLACK)?;
                self.screens.get_mut(self.current).draw(renderer, now)?;
                self.draw_overlays(renderer, now)?;
            }
            return Ok(true);
        };

        if self.fade_enabled && !self.fade_failed && self.fade_start_time == 0 {
            self.capture(renderer, now)?;
        }

        let fade_square = self.fade_state_square(now);
        for s in 0..screen_count {
            renderer.begin_screen(s);
            renderer.clear(Rgba::BLACK)?;
            self.screens.get_mut(next).draw(renderer, now)?;
            if fade_square < 1.0 {
                if let Some(capture) = self.fade_textures.get(s as usize) {
                    let mut overlay = capture.clone();
                    overlay.set_pos(0.0, 0.0, 0.0);
                    overlay.set_size(self.viewport.render_w, self.viewport.render_h);
                    overlay.alpha = 1.0 - fade_square;
                    renderer.draw_texture(&overlay)?;
                }
            }
            self.draw_overlays(renderer, now)?;
        }

        if fade_square >= 1.0 {
            self.finish_transition(renderer);
        }
        Ok(true)
    }

    /// Draws the old screen one last time on every screen and keeps a copy
    fn capture(&mut self, renderer: &mut dyn Renderer, now: u64) -> Result<(), String> {
        for s in 0..self.viewport.screens.max(1) {
            renderer.begin_screen(s);
            renderer.clear(Rgba::BLACK)?;
            self.screens.get_mut(self.current).draw(renderer, now)?;
            match renderer.capture_screen(s) {
                Ok(texture) => self.fade_textures.push(texture),
                Err(e) => {
                    log::warn!("Screen capture failed, disabling fading: {}", e);
                    self.fade_failed = true;
                    self.release_fade_textures(renderer);
                    return Ok(());
                }
            }
        }
        self.fade_start_time = now.max(1);
        Ok(())
    }

    fn finish_transition(&mut self, renderer: &mut dyn Renderer) {
        if let Some(next) = self.next.take() {
            self.screens.get_mut(self.current).on_hide();
            self.current = next;
            self.screens.get_mut(self.current).on_show_finish();
            log::debug!("Now showing {:?}", self.current);
        }
        self.fade_start_time = 0;
        self.release_fade_textures(renderer);
    }

    fn release_fade_textures(&mut self, renderer: &mut dyn Renderer) {
        for texture in self.fade_textures.drain(..) {
            renderer.release_capture(&texture);
        }
    }

    fn draw_overlays(&mut self, renderer: &mut dyn Renderer, now: u64) -> Result<(), String> {
        if let Some(popup) = self.popup {
            self.screens.get_mut(popup).draw(renderer, now)?;
        }
        let shown = self.next.unwrap_or(self.current);
        let hidden = self.screens.get(shown).cursor_hidden();
        self.cursor.draw(renderer, now, hidden)
    }

    /// Routes a key to the popup or the current screen; ignored mid-transition
    pub fn parse_input(&mut self, env: &mut ScreenEnv, key: Key, pressed: bool) -> ScreenRequest {
        if self.next.is_some() || self.black_screen {
            return ScreenRequest::None;
        }
        let target = self.popup.unwrap_or(self.current);
        let screen = self.screens.get_mut(target);
        if key == Key::Backspace && pressed && screen.menu_mut().delete_text_char() {
            return ScreenRequest::None;
        }
        screen.parse_input(env, key, pressed)
    }

    pub fn parse_text_input(&mut self, text: &str) -> bool {
        if self.next.is_some() || self.black_screen {
            return false;
        }
        let target = self.popup.unwrap_or(self.current);
        self.screens.get_mut(target).parse_text_input(text)
    }

    /// Updates the cursor and hit-tests the popup or current screen
    pub fn parse_mouse(&mut self, button: Option<MouseButton>, down: bool, x: i32, y: i32, now: u64) -> MouseResult {
        let (rx, ry) = self.viewport.to_render(x, y);
        match button {
            None => self.cursor.on_move(rx, ry, now),
            Some(MouseButton::Left | MouseButton::Right | MouseButton::Middle) => self.cursor.on_button(down, now),
            Some(MouseButton::WheelUp | MouseButton::WheelDown) => {}
        }

        if self.next.is_some() || self.black_screen {
            return MouseResult::default();
        }
        let target = self.popup.unwrap_or(self.current);
        let viewport = self.viewport;
        self.screens.get_mut(target).parse_mouse(button, down, x, y, &viewport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::screen::Screen;
    use crate::menu::Menu;
    use crate::render::testing::{DrawCall, RecordingRenderer};
    use crate::testing::Fixture;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Log = Rc<RefCell<Vec<String>>>;

    struct TestScreen {
        id: ScreenId,
        menu: Menu,
        log: Log,
    }

    impl Screen for TestScreen {
        fn id(&self) -> ScreenId {
            self.id
        }

        fn menu(&self) -> &Menu {
            &self.menu
        }

        fn menu_mut(&mut self) -> &mut Menu {
            &mut self.menu
        }

        fn on_show(&mut self, _env: &mut ScreenEnv) {
            self.log.borrow_mut().push(format!("show {:?}", self.id));
        }

        fn on_show_finish(&mut self) {
            self.log.borrow_mut().push(format!("finish {:?}", self.id));
        }

        fn on_hide(&mut self) {
            self.log.borrow_mut().push(format!("hide {:?}", self.id));
        }

        fn set_message(&mut self, message: &str) {
            self.log.borrow_mut().push(format!("message {}", message));
        }

        fn parse_input(&mut self, _env: &mut ScreenEnv, key: Key, _pressed: bool) -> ScreenRequest {
            self.log.borrow_mut().push(format!("key {:?} {:?}", self.id, key));
            ScreenRequest::None
        }

        fn draw(&mut self, _renderer: &mut dyn Renderer, _now: u64) -> Result<(), String> {
            self.log.borrow_mut().push(format!("draw {:?}", self.id));
            Ok(())
        }
    }

    fn display(log: &Log, fade: bool) -> Display {
        let screens: Vec<Box<dyn Screen>> = [ScreenId::Main, ScreenId::Options, ScreenId::CheckPopup]
            .into_iter()
            .map(|id| {
                Box::new(TestScreen {
                    id,
                    menu: Menu::new(),
                    log: log.clone(),
                }) as Box<dyn Screen>
            })
            .collect();
        Display::new(
            ScreenSet::new(screens),
            ScreenId::Main,
            fade,
            Cursor::new(false),
            Viewport::default(),
        )
    }

    fn overlay_alpha(renderer: &RecordingRenderer) -> Option<f32> {
        renderer.calls.iter().find_map(|c| match c {
            DrawCall::Texture { tex_num, alpha, .. } if *tex_num >= 9000 => Some(*alpha),
            _ => None,
        })
    }

    #[test]
    fn test_fade_completes_exactly_at_duration() {
        let log = Log::default();
        let mut fixture = Fixture::new();
        let mut display = display(&log, true);
        let mut renderer = RecordingRenderer::new();

        display.fade_to(ScreenId::Options, &mut fixture.env(1000));
        assert!(display.draw(&mut renderer, 1000).unwrap());
        assert_eq!(renderer.captures, 1);
        assert_eq!(overlay_alpha(&renderer), Some(1.0));

        renderer.reset();
        display.draw(&mut renderer, 1200).unwrap();
        assert_eq!(display.fade_state_square(1200), 0.25);
        assert_eq!(overlay_alpha(&renderer), Some(0.75));
        assert!(display.is_transitioning());

        renderer.reset();
        assert_eq!(display.fade_state_square(1400), 1.0);
        display.draw(&mut renderer, 1400).unwrap();
        assert_eq!(overlay_alpha(&renderer), None);
        assert!(!display.is_transitioning());
        assert_eq!(display.current_id(), ScreenId::Options);
        assert_eq!(renderer.released, vec![9001]);
    }

    #[test]
    fn test_transition_hides_then_swaps_then_finishes() {
        let log = Log::default();
        let mut fixture = Fixture::new();
        let mut display = display(&log, false);
        let mut renderer = RecordingRenderer::new();

        display.fade_to(ScreenId::Options, &mut fixture.env(0));
        display.draw(&mut renderer, 16).unwrap();

        let events: Vec<String> = log
            .borrow()
            .iter()
            .filter(|e| !e.starts_with("draw"))
            .cloned()
            .collect();
        assert_eq!(events, vec!["show Options", "hide Main", "finish Options"]);
        assert_eq!(renderer.captures, 0);
    }

    #[test]
    fn test_capture_failure_disables_fading_for_good() {
        let log = Log::default();
        let mut fixture = Fixture::new();
        let mut display = display(&log, true);
        let mut renderer = RecordingRenderer::new();
        renderer.fail_capture = true;

        display.fade_to(ScreenId::Options, &mut fixture.env(0));
        display.draw(&mut renderer, 100).unwrap();
        assert!(display.fade_failed());
        assert_eq!(display.current_id(), ScreenId::Options);

        renderer.fail_capture = false;
        display.fade_to(ScreenId::Main, &mut fixture.env(200));
        display.draw(&mut renderer, 200).unwrap();
        assert_eq!(renderer.captures, 1);
        assert_eq!(display.current_id(), ScreenId::Main);
    }

    #[test]
    fn test_input_ignored_during_transition() {
        let log = Log::default();
        let mut fixture = Fixture::new();
        let mut display = display(&log, true);
        let mut renderer = RecordingRenderer::new();

        display.fade_to(ScreenId::Options, &mut fixture.env(0));
        display.parse_input(&mut fixture.env(0), Key::Return, true);
        display.draw(&mut renderer, 10).unwrap();
        display.draw(&mut renderer, 500).unwrap();
        display.parse_input(&mut fixture.env(500), Key::Return, true);

        let keys: Vec<String> = log.borrow().iter().filter(|e| e.starts_with("key")).cloned().collect();
        assert_eq!(keys, vec!["key Options Return"]);
    }

    #[test]
    fn test_check_popup_confirm_quits_through_black_screen() {
        let log = Log::default();
        let mut fixture = Fixture::new();
        let mut display = display(&log, true);
        let mut renderer = RecordingRenderer::new();

        display.check_fade_to(None, "Really quit?", &mut fixture.env(0));
        assert_eq!(display.popup(), Some(ScreenId::CheckPopup));
        display.parse_input(&mut fixture.env(0), Key::Return, true);
        assert!(log.borrow().contains(&"key CheckPopup Return".to_string()));
        assert!(log.borrow().contains(&"message Really quit?".to_string()));

        display.close_popup(true, &mut fixture.env(10));
        assert!(display.check_ok());
        assert!(display.black_screen());
        assert!(!display.draw(&mut renderer, 20).unwrap());
        assert_eq!(renderer.calls, vec![DrawCall::Clear(Rgba::BLACK)]);
    }

    #[test]
    fn test_check_popup_confirm_fades_to_target() {
        let log = Log::default();
        let mut fixture = Fixture::new();
        let mut display = display(&log, true);

        display.check_fade_to(Some(ScreenId::Options), "Sure?", &mut fixture.env(0));
        display.close_popup(true, &mut fixture.env(10));
        assert_eq!(display.next_id(), Some(ScreenId::Options));
        assert!(!display.black_screen());
    }

    #[test]
    fn test_check_popup_cancel_aborts() {
        let log = Log::default();
        let mut fixture = Fixture::new();
        let mut display = display(&log, true);

        display.check_fade_to(Some(ScreenId::Options), "Sure?", &mut fixture.env(0));
        display.close_popup(false, &mut fixture.env(10));
        assert_eq!(display.popup(), None);
        assert_eq!(display.next_id(), None);
        assert!(!display.check_ok());
    }

    #[test]
    fn test_abort_only_before_fade_starts() {
        let log = Log::default();
        let mut fixture = Fixture::new();
        let mut display = display(&log, true);
        let mut renderer = RecordingRenderer::new();

        display.fade_to(ScreenId::Options, &mut fixture.env(0));
        assert!(display.abort_screen_change());
        assert_eq!(display.next_id(), None);

        display.fade_to(ScreenId::Options, &mut fixture.env(0));
        display.draw(&mut renderer, 50).unwrap();
        assert!(!display.abort_screen_change());
        assert_eq!(display.next_id(), Some(ScreenId::Options));
    }

    #[test]
    fn test_popup_draws_over_screen_and_takes_input() {
        let log = Log::default();
        let mut fixture = Fixture::new();
        let mut display = display(&log, true);
        let mut renderer = RecordingRenderer::new();

        display.show_popup(ScreenId::CheckPopup, "Hello", &mut fixture.env(0));
        log.borrow_mut().clear();
        display.draw(&mut renderer, 0).unwrap();
        display.parse_input(&mut fixture.env(0), Key::Escape, true);
        assert_eq!(
            *log.borrow(),
            vec!["draw Main", "draw CheckPopup", "key CheckPopup Escape"]
        );
    }
}
