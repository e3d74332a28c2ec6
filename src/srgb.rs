//! CIE XYZ to gamma-encoded sRGB conversion.

use serde::{Deserialize, Serialize};

/// XYZ to linear sRGB transform for the D65 white point
/// (Bruce Lindbloom's 7-digit matrix).
const XYZ_TO_SRGB: [[f64; 3]; 3] = [
    [3.2406255, -1.537208, -0.4986286],
    [-0.9689307, 1.8757561, 0.0415175],
    [0.0557101, -0.2040211, 1.0569959],
];

/// An sRGB color with gamma-encoded channels in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    /// Render as a lowercase `#rrggbb` string. Channels are scaled to 0-255
    /// and rounded half-away-from-zero.
    pub fn to_hex(&self) -> String {
        let quantize = |c: f64| (c * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            quantize(self.r),
            quantize(self.g),
            quantize(self.b)
        )
    }
}

/// Apply the sRGB transfer function to one linear channel and clamp to the
/// displayable range. Out-of-gamut values saturate silently.
pub fn gamma_encode(linear: f64) -> f64 {
    let encoded = if linear <= 0.0031308 {
        linear * 12.92
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    };
    encoded.clamp(0.0, 1.0)
}

/// Map CIE XYZ tristimulus values into a displayable sRGB color.
pub fn xyz_to_srgb(x: f64, y: f64, z: f64) -> Rgb {
    let [rr, gr, br] = XYZ_TO_SRGB;
    Rgb {
        r: gamma_encode(rr[0] * x + rr[1] * y + rr[2] * z),
        g: gamma_encode(gr[0] * x + gr[1] * y + gr[2] * z),
        b: gamma_encode(br[0] * x + br[1] * y + br[2] * z),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_of_primaries() {
        let red = Rgb {
            r: 1.0,
            g: 0.0,
            b: 0.0,
        };
        assert_eq!(red.to_hex(), "#ff0000");
        let black = Rgb {
            r: 0.0,
            g: 0.0,
            b: 0.0,
        };
        assert_eq!(black.to_hex(), "#000000");
    }

    #[test]
    fn hex_rounds_half_away_from_zero() {
        // 0.5 * 255 = 127.5 rounds up to 0x80
        let mid = Rgb {
            r: 0.5,
            g: 0.5,
            b: 0.5,
        };
        assert_eq!(mid.to_hex(), "#808080");
    }

    #[test]
    fn gamma_segments_join_continuously() {
        let below = gamma_encode(0.0031308);
        let above = gamma_encode(0.0031309);
        assert!((below - above).abs() < 1e-4, "{below} vs {above}");
    }

    #[test]
    fn gamma_clamps_out_of_range() {
        assert_eq!(gamma_encode(-0.5), 0.0);
        assert_eq!(gamma_encode(2.0), 1.0);
    }

    #[test]
    fn white_point_maps_to_white() {
        // D65 white under the 2-degree observer
        let white = xyz_to_srgb(0.95047, 1.0, 1.08883);
        assert!(white.r > 0.999 && white.g > 0.999 && white.b > 0.999);
        assert_eq!(white.to_hex(), "#ffffff");
    }

    #[test]
    fn channels_stay_in_range() {
        for &(x, y, z) in &[(0.0, 0.0, 0.0), (0.4, 0.2, 0.01), (2.0, 2.0, 2.0)] {
            let rgb = xyz_to_srgb(x, y, z);
            assert!((0.0..=1.0).contains(&rgb.r));
            assert!((0.0..=1.0).contains(&rgb.g));
            assert!((0.0..=1.0).contains(&rgb.b));
        }
    }
}
