//! Hue replacement for colorized skin images
//!
//! Every pixel keeps its saturation, value and alpha but takes the hue of the
//! requested color. Greyscale pixels stay grey.

use crate::theme::color::Rgb;

/// Returns the hue of `color` in degrees `0.0..360.0`
pub fn hue_of(color: Rgb) -> f32 {
    let max = color.r.max(color.g).max(color.b);
    let min = color.r.min(color.g).min(color.b);
    let delta = max - min;
    if delta <= f32::EPSILON {
        return 0.0;
    }

    let hue = if max == color.r {
        60.0 * (((color.g - color.b) / delta) % 6.0)
    } else if max == color.g {
        60.0 * ((color.b - color.r) / delta + 2.0)
    } else {
        60.0 * ((color.r - color.g) / delta + 4.0)
    };
    if hue < 0.0 { hue + 360.0 } else { hue }
}

/// Replaces the hue of every pixel in an RGBA8 buffer
pub fn colorize_rgba(pixels: &mut [u8], color: Rgb) {
    let hue = hue_of(color);
    for px in pixels.chunks_exact_mut(4) {
        let r = px[0] as f32 / 255.0;
        let g = px[1] as f32 / 255.0;
        let b = px[2] as f32 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        if delta <= f32::EPSILON {
            continue;
        }
        let saturation = delta / max;

        let (nr, ng, nb) = hsv_to_rgb(hue, saturation, max);
        px[0] = (nr * 255.0).round() as u8;
        px[1] = (ng * 255.0).round() as u8;
        px[2] = (nb * 255.0).round() as u8;
    }
}

fn hsv_to_rgb(h: f32, s: f32, v: f32) -> (f32, f32, f32) {
    let c = v * s;
    let hp = (h / 60.0) % 6.0;
    let x = c * (1.0 - ((hp % 2.0) - 1.0).abs());
    let (r, g, b) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = v - c;
    (r + m, g + m, b + m)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hue_of_primaries() {
        assert_eq!(hue_of(Rgb::new(1.0, 0.0, 0.0)), 0.0);
        assert!((hue_of(Rgb::new(0.0, 1.0, 0.0)) - 120.0).abs() < 1e-3);
        assert!((hue_of(Rgb::new(0.0, 0.0, 1.0)) - 240.0).abs() < 1e-3);
    }

    #[test]
    fn test_colorize_moves_red_to_blue() {
        let mut pixels = vec![255, 0, 0, 200, 128, 128, 128, 255];
        colorize_rgba(&mut pixels, Rgb::new(0.0, 0.0, 1.0));

        assert_eq!(&pixels[0..4], &[0, 0, 255, 200]);
        // grey stays grey
        assert_eq!(&pixels[4..8], &[128, 128, 128, 255]);
    }
}
