//! Portal display colors.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An sRGB color, one byte per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Construct from raw channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert from HSV: hue in degrees (wraps), saturation and value in
    /// percent. Portal color candidates are picked in this model: a
    /// random hue at fixed saturation and value reads well on the map.
    pub fn from_hsv(hue: f64, saturation: f64, value: f64) -> Self {
        let h = hue.rem_euclid(360.0);
        let s = (saturation / 100.0).clamp(0.0, 1.0);
        let v = (value / 100.0).clamp(0.0, 1.0);

        let c = v * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = v - c;

        let (r1, g1, b1) = match (h / 60.0) as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        let to_byte = |ch: f64| ((ch + m) * 255.0).round() as u8;
        Self::new(to_byte(r1), to_byte(g1), to_byte(b1))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hsv_primaries() {
        assert_eq!(Rgb::from_hsv(0.0, 100.0, 100.0), Rgb::new(255, 0, 0));
        assert_eq!(Rgb::from_hsv(120.0, 100.0, 100.0), Rgb::new(0, 255, 0));
        assert_eq!(Rgb::from_hsv(240.0, 100.0, 100.0), Rgb::new(0, 0, 255));
    }

    #[test]
    fn hsv_value_scales_brightness() {
        assert_eq!(Rgb::from_hsv(0.0, 100.0, 40.0), Rgb::new(102, 0, 0));
        assert_eq!(Rgb::from_hsv(0.0, 0.0, 0.0), Rgb::new(0, 0, 0));
        assert_eq!(Rgb::from_hsv(0.0, 0.0, 100.0), Rgb::new(255, 255, 255));
    }

    #[test]
    fn hue_wraps() {
        assert_eq!(
            Rgb::from_hsv(360.0, 100.0, 100.0),
            Rgb::from_hsv(0.0, 100.0, 100.0)
        );
        assert_eq!(
            Rgb::from_hsv(-120.0, 100.0, 100.0),
            Rgb::from_hsv(240.0, 100.0, 100.0)
        );
    }

    #[test]
    fn displays_as_hex() {
        assert_eq!(Rgb::new(255, 128, 0).to_string(), "#ff8000");
    }
}
