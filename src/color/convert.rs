// Pure conversions between 8-bit RGB, HSL and hex.
// Nothing here validates input; callers in `model` do that first.

use crate::color::model::Hsl;

/// Round to `places` decimal places, ties away from zero.
#[inline]
fn round_to(x: f64, places: i32) -> f64 {
    let k = 10f64.powi(places);
    (x * k).round() / k
}

/// Convert an RGB triple to HSL.
///
/// Lightness and saturation are rounded to 2 decimals, hue to whole degrees.
/// Achromatic colors report hue 0 and saturation 0.
#[must_use]
pub fn rgb_to_hsl(rgb: [u8; 3]) -> Hsl {
    let r = f64::from(rgb[0]) / 255.0;
    let g = f64::from(rgb[1]) / 255.0;
    let b = f64::from(rgb[2]) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);

    let l = round_to((min + max) / 2.0, 2);

    if min == max {
        return Hsl { h: 0, s: 0.0, l };
    }

    let delta = max - min;
    let s = if l < 0.5 {
        delta / (max + min)
    } else {
        delta / (2.0 - max - min)
    };

    // ties resolve red, then green, then blue
    let h = if r == max {
        (g - b) / delta
    } else if g == max {
        2.0 + (b - r) / delta
    } else {
        4.0 + (r - g) / delta
    };

    let mut h = h * 60.0;
    if h < 0.0 {
        h += 360.0;
    }

    Hsl {
        h: h.round() as u16,
        s: round_to(s, 2),
        l,
    }
}

/// One channel of the HSL -> RGB transform, `t` being the hue-shifted position.
#[inline]
fn hue_channel(mut t: f64, temp1: f64, temp2: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    } else if t > 1.0 {
        t -= 1.0;
    }

    if 6.0 * t < 1.0 {
        temp2 + (temp1 - temp2) * 6.0 * t
    } else if 2.0 * t < 1.0 {
        temp1
    } else if 3.0 * t < 2.0 {
        temp2 + (temp1 - temp2) * (2.0 / 3.0 - t) * 6.0
    } else {
        temp2
    }
}

/// Convert HSL to RGB channels, each rounded to a whole number in `0.0..=255.0`.
///
/// `h` must already be normalized into `0.0..360.0` and `s`, `l` lie in `0.0..=1.0`.
#[must_use]
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> [f64; 3] {
    if s == 0.0 {
        let v = (l * 255.0).round();
        return [v, v, v];
    }

    let temp1 = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let temp2 = 2.0 * l - temp1;

    let h = h / 360.0;

    [h + 1.0 / 3.0, h, h - 1.0 / 3.0].map(|t| (hue_channel(t, temp1, temp2) * 255.0).round())
}

/// Format an RGB triple as `#rrggbb`.
#[must_use]
#[inline]
pub fn rgb_to_hex(rgb: [u8; 3]) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn rgb_to_hsl_known_vectors() {
        let cases = [
            ([255, 0, 127], 330, 1.0, 0.5),
            ([0, 255, 127], 150, 1.0, 0.5),
            ([4, 34, 36], 184, 0.8, 0.08),
            ([48, 48, 48], 0, 0.0, 0.19),
        ];

        for (rgb, h, s, l) in cases {
            let hsl = rgb_to_hsl(rgb);
            assert_eq!(hsl.h, h, "{rgb:?} -> H");
            assert_relative_eq!(hsl.s, s);
            assert_relative_eq!(hsl.l, l);
        }
    }

    #[test]
    fn achromatic_has_zero_hue_and_saturation() {
        for v in [0u8, 1, 128, 254, 255] {
            let hsl = rgb_to_hsl([v, v, v]);
            assert_eq!(hsl.h, 0);
            assert_eq!(hsl.s, 0.0);
        }
    }

    #[test]
    fn hue_ties_prefer_red_then_green() {
        // red == green == max
        assert_eq!(rgb_to_hsl([255, 255, 0]).h, 60);
        // green == blue == max
        assert_eq!(rgb_to_hsl([0, 255, 255]).h, 180);
        // red == blue == max
        assert_eq!(rgb_to_hsl([255, 0, 255]).h, 300);
    }

    #[test]
    fn hsl_to_rgb_known_vectors() {
        assert_eq!(hsl_to_rgb(330.0, 1.0, 0.5), [255.0, 0.0, 128.0]);
        assert_eq!(hsl_to_rgb(150.0, 1.0, 0.5), [0.0, 255.0, 128.0]);
        assert_eq!(hsl_to_rgb(184.0, 0.8, 0.08), [4.0, 35.0, 37.0]);
        assert_eq!(hsl_to_rgb(0.0, 0.0, 0.19), [48.0, 48.0, 48.0]);
    }

    #[test]
    fn hsl_to_rgb_primaries() {
        assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), [255.0, 0.0, 0.0]);
        assert_eq!(hsl_to_rgb(120.0, 1.0, 0.5), [0.0, 255.0, 0.0]);
        assert_eq!(hsl_to_rgb(240.0, 1.0, 0.5), [0.0, 0.0, 255.0]);
        assert_eq!(hsl_to_rgb(0.0, 1.0, 1.0), [255.0, 255.0, 255.0]);
        assert_eq!(hsl_to_rgb(0.0, 1.0, 0.0), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn hex_is_lowercase_and_padded() {
        assert_eq!(rgb_to_hex([123, 169, 71]), "#7ba947");
        assert_eq!(rgb_to_hex([4, 35, 37]), "#042325");
        assert_eq!(rgb_to_hex([0, 0, 0]), "#000000");
        assert_eq!(rgb_to_hex([255, 255, 255]), "#ffffff");
    }
}
