//! Theme Colors
//!
//! Colors are resolved by name through a [`ColorTable`] rebuilt every time a
//! theme/skin pair is loaded. The table holds:
//! - the theme's own `[Colors]` section
//! - the skin accent ladder (`ColorDark` plus five lighter shades)
//! - six player accents `P1`..`P6`, each as `Dark`/`Light`/`Lightest`
//!
//! Every lighter shade is the element-wise square root of the previous one.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

/// Linear RGB color with components in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Rgb { r, g, b }
    }

    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Rgb::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Element-wise square root, lightens every channel
    pub fn sqrt(self) -> Self {
        Rgb::new(self.r.sqrt(), self.g.sqrt(), self.b.sqrt())
    }

    /// Packs the color as `0xRRGGBB`, used as part of texture cache keys
    pub fn to_packed(self) -> u32 {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u32;
        (channel(self.r) << 16) | (channel(self.g) << 8) | channel(self.b)
    }
}

/// The fixed accent palette offered to skins and players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SystemColor {
    #[default]
    Blue,
    Green,
    Pink,
    Red,
    Violet,
    Orange,
    Yellow,
    Brown,
    Black,
}

impl SystemColor {
    pub const ALL: [SystemColor; 9] = [
        SystemColor::Blue,
        SystemColor::Green,
        SystemColor::Pink,
        SystemColor::Red,
        SystemColor::Violet,
        SystemColor::Orange,
        SystemColor::Yellow,
        SystemColor::Brown,
        SystemColor::Black,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SystemColor::Blue => "Blue",
            SystemColor::Green => "Green",
            SystemColor::Pink => "Pink",
            SystemColor::Red => "Red",
            SystemColor::Violet => "Violet",
            SystemColor::Orange => "Orange",
            SystemColor::Yellow => "Yellow",
            SystemColor::Brown => "Brown",
            SystemColor::Black => "Black",
        }
    }

    pub fn rgb(self) -> Rgb {
        match self {
            SystemColor::Blue => Rgb::from_u8(71, 175, 247),
            SystemColor::Green => Rgb::from_u8(63, 191, 63),
            SystemColor::Pink => Rgb::from_u8(255, 63, 192),
            SystemColor::Red => Rgb::from_u8(247, 71, 71),
            SystemColor::Violet => Rgb::from_u8(230, 63, 230),
            SystemColor::Orange => Rgb::from_u8(255, 144, 0),
            SystemColor::Yellow => Rgb::from_u8(230, 230, 95),
            SystemColor::Brown => Rgb::from_u8(192, 127, 31),
            SystemColor::Black => Rgb::from_u8(0, 0, 0),
        }
    }

    /// Position inside [`SystemColor::ALL`]
    pub fn index(self) -> usize {
        SystemColor::ALL
            .iter()
            .position(|c| *c == self)
            .unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Self {
        SystemColor::ALL.get(index).copied().unwrap_or_default()
    }
}

impl FromStr for SystemColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SystemColor::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown color: {}", s))
    }
}

/// Names of the skin accent ladder, darkest first
pub const SKIN_SHADES: [&str; 6] = [
    "ColorDark",
    "ColorLight",
    "ColorLightest",
    "ColorPale",
    "ColorPaler",
    "ColorPalest",
];

/// Accent of each player slot
pub const PLAYER_COLORS: [SystemColor; 6] = [
    SystemColor::Blue,
    SystemColor::Red,
    SystemColor::Green,
    SystemColor::Orange,
    SystemColor::Yellow,
    SystemColor::Violet,
];

const PLAYER_SHADES: [&str; 3] = ["Dark", "Light", "Lightest"];

/// Name → color lookup for the active theme/skin pair
///
/// Keys are lower case. Skin and player shades are inserted after the
/// theme's `[Colors]`, so a theme color of the same name never hides them.
#[derive(Debug, Clone, Default)]
pub struct ColorTable {
    colors: HashMap<String, Rgb>,
}

impl ColorTable {
    /// Builds the full table from the theme's `[Colors]` entries and the skin accent
    pub fn build(theme_colors: &[(&str, &str)], skin_color: SystemColor) -> Self {
        let mut table = ColorTable::default();

        for (name, value) in theme_colors {
            match parse_color_triplet(value) {
                Some(rgb) => table.insert(name, rgb),
                None => log::warn!("Ignoring malformed theme color {}={}", name, value),
            }
        }

        let mut shade = skin_color.rgb();
        for name in SKIN_SHADES {
            table.insert(name, shade);
            shade = shade.sqrt();
        }

        for (slot, color) in PLAYER_COLORS.iter().enumerate() {
            let mut shade = color.rgb();
            for suffix in PLAYER_SHADES {
                table.insert(&format!("P{}{}", slot + 1, suffix), shade);
                shade = shade.sqrt();
            }
        }

        table
    }

    fn insert(&mut self, name: &str, rgb: Rgb) {
        if let Some(old) = self.colors.insert(name.to_lowercase(), rgb) {
            if old != rgb {
                log::debug!("Color {} redefined", name);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<Rgb> {
        self.colors.get(&name.to_lowercase()).copied()
    }
}

/// Parses `"RRR GGG BBB"` (0-255 per channel)
fn parse_color_triplet(value: &str) -> Option<Rgb> {
    let mut parts = value.split_whitespace().map(|p| p.parse::<u8>());
    let r = parts.next()?.ok()?;
    let g = parts.next()?.ok()?;
    let b = parts.next()?.ok()?;
    Some(Rgb::from_u8(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Rgb, b: Rgb) -> bool {
        (a.r - b.r).abs() < 1e-5 && (a.g - b.g).abs() < 1e-5 && (a.b - b.b).abs() < 1e-5
    }

    #[test]
    fn test_blue_shades_are_square_roots() {
        let table = ColorTable::build(&[], SystemColor::Blue);
        let dark = table.get("ColorDark").unwrap();
        let light = table.get("ColorLight").unwrap();
        let lightest = table.get("ColorLightest").unwrap();

        assert!(close(dark, Rgb::new(71.0 / 255.0, 175.0 / 255.0, 247.0 / 255.0)));
        assert!((dark.r - 0.28).abs() < 0.01);
        assert!(close(light, Rgb::new(dark.r.sqrt(), dark.g.sqrt(), dark.b.sqrt())));
        assert!(close(lightest, light.sqrt()));
        assert!(close(table.get("ColorPalest").unwrap(), table.get("ColorPaler").unwrap().sqrt()));
    }

    #[test]
    fn test_player_colors_are_tri_shaded() {
        let table = ColorTable::build(&[], SystemColor::Green);
        assert!(close(table.get("P1Dark").unwrap(), SystemColor::Blue.rgb()));
        assert!(close(table.get("P2Dark").unwrap(), SystemColor::Red.rgb()));
        assert!(close(table.get("P1Light").unwrap(), SystemColor::Blue.rgb().sqrt()));
        assert!(table.get("P6Lightest").is_some());
        assert!(table.get("P7Dark").is_none());
    }

    #[test]
    fn test_theme_color_does_not_shadow_skin_shades() {
        let table = ColorTable::build(&[("colordark", "1 2 3"), ("P1Dark", "4 5 6")], SystemColor::Red);
        assert!(close(table.get("ColorDark").unwrap(), SystemColor::Red.rgb()));
        assert!(close(table.get("P1Dark").unwrap(), SystemColor::Blue.rgb()));
    }

    #[test]
    fn test_theme_colors_and_malformed_entries() {
        let table = ColorTable::build(&[("White", "255 255 255"), ("Broken", "12 x")], SystemColor::Red);
        assert_eq!(table.get("white"), Some(Rgb::WHITE));
        assert!(table.get("Broken").is_none());
        assert!(table.get("").is_none());
    }

    #[test]
    fn test_system_color_names_round_trip() {
        for color in SystemColor::ALL {
            assert_eq!(color.as_str().parse::<SystemColor>(), Ok(color));
            assert_eq!(SystemColor::from_index(color.index()), color);
        }
        assert!("Teal".parse::<SystemColor>().is_err());
    }

    #[test]
    fn test_packed_color() {
        assert_eq!(Rgb::WHITE.to_packed(), 0xFFFFFF);
        assert_eq!(Rgb::from_u8(255, 144, 0).to_packed(), 0xFF9000);
    }
}
