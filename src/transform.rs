//! Color transforms
//!
//! Pure functions deriving new colors from an existing one: lighten,
//! darken, background-safe variants, contrast outlines, desaturation, and
//! hue-wheel complements. Every transform accepts either representation
//! and returns its result the way the input was given: detect via the
//! codec, compute on integer channels, convert back at the end.
//!
//! Light/dark decisions use the mean-based brightness from the codec
//! (threshold 128, where 128 itself counts as light); HSV "Value" (the max
//! channel) only appears inside the hue math of [`complementary`].

use crate::tuple::ColorTuple;

/// Brightness threshold separating "dark" from "light"; the dark test is
/// strictly below this value.
const DARK_THRESHOLD: u8 = 128;

/// Applies an RGB-channel function while preserving the input's
/// representation and alpha channel.
fn map_rgb(color: ColorTuple, f: impl Fn([u8; 3]) -> [u8; 3]) -> ColorTuple {
    let was_float = color.is_float();
    let result = match color.to_int(None) {
        ColorTuple::Rgb(rgb) => ColorTuple::Rgb(f(rgb)),
        ColorTuple::Rgba([r, g, b, a]) => {
            let [r, g, b] = f([r, g, b]);
            ColorTuple::Rgba([r, g, b, a])
        }
        // to_int(None) never yields a float variant
        float @ (ColorTuple::FloatRgb(_) | ColorTuple::FloatRgba(_)) => float,
    };
    if was_float { result.to_float(None) } else { result }
}

/// Moves each RGB channel halfway to 255. Alpha passes through unchanged.
pub fn lighter(color: ColorTuple) -> ColorTuple {
    map_rgb(color, |rgb| rgb.map(|ch| ch + (255 - ch) / 2))
}

/// Halves each RGB channel. Alpha passes through unchanged.
pub fn darker(color: ColorTuple) -> ColorTuple {
    map_rgb(color, |rgb| rgb.map(|ch| ch / 2))
}

/// A background-safe variant: dark colors lighten, light colors darken,
/// so the result always contrasts with the original.
pub fn subdued(color: ColorTuple) -> ColorTuple {
    if color.brightness() < DARK_THRESHOLD {
        lighter(color)
    } else {
        darker(color)
    }
}

/// Pure white for a dark color, pure black for a light one: the binary
/// contrast choice for text or borders against `color`.
///
/// Always a 3-channel result (alpha dropped), in the input's
/// representation.
pub fn outline(color: ColorTuple) -> ColorTuple {
    let was_float = color.is_float();
    let result = if color.brightness() < DARK_THRESHOLD {
        ColorTuple::Rgb([255, 255, 255])
    } else {
        ColorTuple::Rgb([0, 0, 0])
    };
    if was_float { result.to_float(None) } else { result }
}

/// Desaturates to `(b, b, b)` where `b` is the mean-based brightness,
/// not HSV Value (the max channel). Alpha passes through unchanged.
pub fn monochrome(color: ColorTuple) -> ColorTuple {
    map_rgb(color, |rgb| {
        let b = ColorTuple::Rgb(rgb).brightness();
        [b, b, b]
    })
}

/// Complementary color(s) by hue rotation.
///
/// With `degrees == 0.0`, one color directly opposite on the hue wheel.
/// With `degrees > 0.0`, two colors straddling the exact complement by
/// half the given angle each (120.0 yields the classic triadic split from
/// a primary hue). Saturation and value carry over; alpha is dropped.
pub fn complementary(color: ColorTuple, degrees: f64) -> Vec<ColorTuple> {
    let was_float = color.is_float();
    let (h, s, v) = rgb_to_hsv(color.int_rgb());
    let hues = if degrees == 0.0 {
        vec![(h + 0.5).rem_euclid(1.0)]
    } else {
        vec![
            (h + 0.5 - degrees / 720.0).rem_euclid(1.0),
            (h + 0.5 + degrees / 720.0).rem_euclid(1.0),
        ]
    };
    hues.into_iter()
        .map(|hue| {
            let result = ColorTuple::Rgb(hsv_to_rgb(hue, s, v));
            if was_float { result.to_float(None) } else { result }
        })
        .collect()
}

/// RGB → HSV, all components normalized to 0.0-1.0.
///
/// Value here is the max channel, the conventional HSV definition, not
/// the mean-based brightness the light/dark transforms use.
pub fn rgb_to_hsv([r, g, b]: [u8; 3]) -> (f64, f64, f64) {
    let rf = f64::from(r) / 255.0;
    let gf = f64::from(g) / 255.0;
    let bf = f64::from(b) / 255.0;

    let max = rf.max(gf).max(bf);
    let min = rf.min(gf).min(bf);
    let delta = max - min;

    let hue_degrees = if delta == 0.0 {
        0.0
    } else if max == rf {
        60.0 * (((gf - bf) / delta).rem_euclid(6.0))
    } else if max == gf {
        60.0 * (((bf - rf) / delta) + 2.0)
    } else {
        60.0 * (((rf - gf) / delta) + 4.0)
    };

    let saturation = if max == 0.0 { 0.0 } else { delta / max };
    (hue_degrees / 360.0, saturation, max)
}

/// HSV → RGB, all components normalized to 0.0-1.0; hue wraps.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> [u8; 3] {
    let to_byte = |value: f64| (value * 255.0).round().clamp(0.0, 255.0) as u8;
    if s <= 0.0 {
        let gray = to_byte(v);
        return [gray, gray, gray];
    }

    let hue = h.rem_euclid(1.0) * 360.0;
    let c = v * s;
    let x = c * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r1, g1, b1) = match hue {
        h if h < 60.0 => (c, x, 0.0),
        h if h < 120.0 => (x, c, 0.0),
        h if h < 180.0 => (0.0, c, x),
        h if h < 240.0 => (0.0, x, c),
        h if h < 300.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    [to_byte(r1 + m), to_byte(g1 + m), to_byte(b1 + m)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_lighter() {
        assert_eq!(lighter(ColorTuple::Rgb([0, 0, 0])), ColorTuple::Rgb([127, 127, 127]));
        assert_eq!(
            lighter(ColorTuple::Rgb([255, 255, 255])),
            ColorTuple::Rgb([255, 255, 255])
        );
        assert_eq!(
            lighter(ColorTuple::Rgb([100, 200, 0])),
            ColorTuple::Rgb([177, 227, 127])
        );
        // alpha rides along untouched
        assert_eq!(
            lighter(ColorTuple::Rgba([0, 0, 0, 42])),
            ColorTuple::Rgba([127, 127, 127, 42])
        );
    }

    #[test]
    fn test_darker() {
        assert_eq!(
            darker(ColorTuple::Rgb([255, 255, 255])),
            ColorTuple::Rgb([127, 127, 127])
        );
        assert_eq!(darker(ColorTuple::Rgb([0, 0, 0])), ColorTuple::Rgb([0, 0, 0]));
        assert_eq!(darker(ColorTuple::Rgb([101, 51, 7])), ColorTuple::Rgb([50, 25, 3]));
    }

    #[test]
    fn test_subdued_contrasts_with_original() {
        // dark input lightens
        assert_eq!(
            subdued(ColorTuple::Rgb([10, 10, 10])),
            ColorTuple::Rgb([132, 132, 132])
        );
        // light input darkens
        assert_eq!(
            subdued(ColorTuple::Rgb([200, 200, 200])),
            ColorTuple::Rgb([100, 100, 100])
        );
        // brightness 128 counts as light
        assert_eq!(
            subdued(ColorTuple::Rgb([128, 128, 128])),
            ColorTuple::Rgb([64, 64, 64])
        );
        assert_eq!(
            subdued(ColorTuple::Rgb([127, 127, 127])),
            ColorTuple::Rgb([191, 191, 191])
        );
    }

    #[test]
    fn test_outline() {
        assert_eq!(outline(ColorTuple::Rgb([0, 0, 0])), ColorTuple::Rgb([255, 255, 255]));
        assert_eq!(
            outline(ColorTuple::Rgb([255, 255, 255])),
            ColorTuple::Rgb([0, 0, 0])
        );
        assert_eq!(outline(ColorTuple::Rgb([4, 0, 0])), ColorTuple::Rgb([255, 255, 255]));
        assert_eq!(outline(ColorTuple::Rgb([230, 230, 0])), ColorTuple::Rgb([0, 0, 0]));
        // float input comes back as floats, alpha dropped
        assert_eq!(
            outline(ColorTuple::FloatRgb([0.1, 0.0, 0.0])),
            ColorTuple::FloatRgb([1.0, 1.0, 1.0])
        );
        assert_eq!(
            outline(ColorTuple::FloatRgba([0.7, 0.8, 0.2, 1.0])),
            ColorTuple::FloatRgb([0.0, 0.0, 0.0])
        );
    }

    #[test]
    fn test_outline_is_involutive() {
        let white = ColorTuple::Rgb([255, 255, 255]);
        let black = ColorTuple::Rgb([0, 0, 0]);
        assert_eq!(outline(white), black);
        assert_eq!(outline(black), white);
        assert_eq!(outline(outline(white)), white);

        // the result always sits on the opposite side of the threshold
        for rgb in [[0, 0, 0], [127, 127, 127], [128, 128, 128], [255, 0, 0], [200, 220, 90]] {
            let color = ColorTuple::Rgb(rgb);
            let flipped = outline(color);
            assert_ne!(
                color.brightness() < 128,
                flipped.brightness() < 128,
                "outline of {rgb:?} landed on the same side"
            );
        }
    }

    #[test]
    fn test_monochrome() {
        assert_eq!(
            monochrome(ColorTuple::Rgb([255, 0, 0])),
            ColorTuple::Rgb([85, 85, 85])
        );
        assert_eq!(
            monochrome(ColorTuple::Rgba([0, 255, 255, 9])),
            ColorTuple::Rgba([170, 170, 170, 9])
        );
        // mean-based, so pure blue lands far below HSV Value's 255
        assert_eq!(monochrome(ColorTuple::Rgb([0, 0, 255])), ColorTuple::Rgb([85, 85, 85]));
    }

    #[test]
    fn test_hsv_round_trip_primaries() {
        for rgb in [
            [255, 0, 0],
            [0, 255, 0],
            [0, 0, 255],
            [255, 255, 0],
            [0, 255, 255],
            [255, 0, 255],
            [255, 255, 255],
            [0, 0, 0],
        ] {
            let (h, s, v) = rgb_to_hsv(rgb);
            assert_eq!(hsv_to_rgb(h, s, v), rgb);
        }
    }

    #[test]
    fn test_rgb_to_hsv_known_values() {
        assert_eq!(rgb_to_hsv([255, 0, 0]), (0.0, 1.0, 1.0));
        let (h, s, v) = rgb_to_hsv([0, 255, 0]);
        assert!((h - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!((s, v), (1.0, 1.0));
        let (h, _, _) = rgb_to_hsv([0, 0, 255]);
        assert!((h - 2.0 / 3.0).abs() < 1e-12);
        // grays have zero saturation and an arbitrary (zero) hue
        assert_eq!(rgb_to_hsv([128, 128, 128]), (0.0, 0.0, 128.0 / 255.0));
    }

    #[test]
    fn test_complementary_opposite() {
        let results = complementary(ColorTuple::Rgb([255, 0, 0]), 0.0);
        assert_eq!(results, vec![ColorTuple::Rgb([0, 255, 255])]);

        let results = complementary(ColorTuple::Rgb([0, 255, 255]), 0.0);
        assert_eq!(results, vec![ColorTuple::Rgb([255, 0, 0])]);
    }

    #[test]
    fn test_complementary_split() {
        // 120 degrees from red gives the triadic pair: green and blue
        let results = complementary(ColorTuple::Rgb([255, 0, 0]), 120.0);
        assert_eq!(
            results,
            vec![ColorTuple::Rgb([0, 255, 0]), ColorTuple::Rgb([0, 0, 255])]
        );
    }

    #[test]
    fn test_complementary_preserves_representation() {
        let results = complementary(ColorTuple::FloatRgb([1.0, 0.0, 0.0]), 0.0);
        assert_eq!(results, vec![ColorTuple::FloatRgb([0.0, 1.0, 1.0])]);
    }

    #[test]
    fn test_transforms_preserve_float_representation() {
        let input = ColorTuple::FloatRgb([0.0, 0.0, 0.0]);
        let lightened = lighter(input);
        assert!(lightened.is_float());
        assert_eq!(lightened.to_int(None), ColorTuple::Rgb([127, 127, 127]));
    }
}
