use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton as SdlMouseButton;
use sdl2::mouse::MouseWheelDirection;
use sdl2::EventPump;

/// Keys the menu layer understands
///
/// Letters and digits arrive as lower case `Char` so screens can bind
/// shortcuts without caring about SDL key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Return,
    Escape,
    Backspace,
    Tab,
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
    Home,
    End,
    Char(char),
}

/// Mouse buttons, with the wheel reported as two extra buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    WheelUp,
    WheelDown,
}

/// High-level input event handed to `Display`
///
/// Mouse coordinates are window pixels; `Menu` converts them to render space.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuEvent {
    Key { key: Key, pressed: bool },
    MouseButton { button: MouseButton, down: bool, x: i32, y: i32 },
    MouseMotion { x: i32, y: i32 },
    TextInput(String),
    Quit,
}

/// InputSystem turns SDL2 events into MenuEvents
///
/// The last known mouse position is tracked so wheel events, which SDL
/// reports without a position, can be hit-tested like clicks.
#[derive(Debug, Default)]
pub struct InputSystem {
    mouse_x: i32,
    mouse_y: i32,
}

impl InputSystem {
    pub fn new() -> Self {
        InputSystem::default()
    }

    /// Drains every pending SDL2 event
    pub fn poll_events(&mut self, event_pump: &mut EventPump) -> Vec<MenuEvent> {
        let events: Vec<Event> = event_pump.poll_iter().collect();
        events
            .iter()
            .filter_map(|event| self.translate(event))
            .collect()
    }

    /// Maps one SDL2 event, `None` for events the menus ignore
    pub fn translate(&mut self, event: &Event) -> Option<MenuEvent> {
        match event {
            Event::Quit { .. } => Some(MenuEvent::Quit),
            Event::KeyDown {
                keycode: Some(keycode),
                ..
            } => map_keycode(*keycode).map(|key| MenuEvent::Key { key, pressed: true }),
            Event::KeyUp {
                keycode: Some(keycode),
                ..
            } => map_keycode(*keycode).map(|key| MenuEvent::Key { key, pressed: false }),
            Event::TextInput { text, .. } => Some(MenuEvent::TextInput(text.clone())),
            Event::MouseMotion { x, y, .. } => {
                self.mouse_x = *x;
                self.mouse_y = *y;
                Some(MenuEvent::MouseMotion { x: *x, y: *y })
            }
            Event::MouseButtonDown { mouse_btn, x, y, .. } => {
                self.mouse_x = *x;
                self.mouse_y = *y;
                map_mouse_button(*mouse_btn).map(|button| MenuEvent::MouseButton {
                    button,
                    down: true,
                    x: *x,
                    y: *y,
                })
            }
            Event::MouseButtonUp { mouse_btn, x, y, .. } => {
                map_mouse_button(*mouse_btn).map(|button| MenuEvent::MouseButton {
                    button,
                    down: false,
                    x: *x,
                    y: *y,
                })
            }
            Event::MouseWheel { y, direction, .. } => {
                let mut delta = *y;
                if *direction == MouseWheelDirection::Flipped {
                    delta = -delta;
                }
                self.wheel(delta)
            }
            _ => None,
        }
    }

    /// Wheel movement as a press of the virtual wheel buttons
    pub fn wheel(&self, delta: i32) -> Option<MenuEvent> {
        let button = match delta {
            d if d > 0 => MouseButton::WheelUp,
            d if d < 0 => MouseButton::WheelDown,
            _ => return None,
        };
        Some(MenuEvent::MouseButton {
            button,
            down: true,
            x: self.mouse_x,
            y: self.mouse_y,
        })
    }
}

/// Maps an SDL key code to a menu key
pub fn map_keycode(keycode: Keycode) -> Option<Key> {
    let key = match keycode {
        Keycode::Return | Keycode::KpEnter => Key::Return,
        Keycode::Escape => Key::Escape,
        Keycode::Backspace => Key::Backspace,
        Keycode::Tab => Key::Tab,
        Keycode::Up => Key::Up,
        Keycode::Down => Key::Down,
        Keycode::Left => Key::Left,
        Keycode::Right => Key::Right,
        Keycode::PageUp => Key::PageUp,
        Keycode::PageDown => Key::PageDown,
        Keycode::Home => Key::Home,
        Keycode::End => Key::End,
        Keycode::Space => Key::Char(' '),
        other => {
            let name = other.name();
            let mut chars = name.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii_alphanumeric() => Key::Char(c.to_ascii_lowercase()),
                _ => return None,
            }
        }
    };
    Some(key)
}

fn map_mouse_button(button: SdlMouseButton) -> Option<MouseButton> {
    match button {
        SdlMouseButton::Left => Some(MouseButton::Left),
        SdlMouseButton::Right => Some(MouseButton::Right),
        SdlMouseButton::Middle => Some(MouseButton::Middle),
        _ => None,
    }
}
