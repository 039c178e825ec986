use image::Rgb;

/// Largest threshold accepted by the filter.
///
/// The farthest two colors can be is √(3·255²) ≈ 441.67, so 442 puts every
/// pixel in the background.
pub const MAX_DISTANCE: u32 = 442;

/// Euclidean RGB distance, truncated to an integer.
///
/// Truncation matters at the threshold boundary: a true distance of 9.99
/// compares as 9.
#[inline]
pub fn color_distance(c1: Rgb<u8>, c2: Rgb<u8>) -> u32 {
    let dr = c1[0].abs_diff(c2[0]) as u32;
    let dg = c1[1].abs_diff(c2[1]) as u32;
    let db = c1[2].abs_diff(c2[2]) as u32;
    (dr * dr + dg * dg + db * db).isqrt()
}

/// Blend a single channel 25% toward white.
///
/// `c + 0.25 * (255 - c)` floored. `c` is an integer and a quarter is exact,
/// so integer division gives the same result.
#[inline]
pub(super) fn lighten_channel(c: u8) -> u8 {
    c + (255 - c) / 4
}

/// Parse hex color (`#rrggbb` or `rrggbb`).
pub fn parse_hex_color(hex: &str) -> Option<Rgb<u8>> {
    let hex = hex.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Rgb([r, g, b]))
}

/// Format color as lowercase `#rrggbb`.
pub fn to_hex_color(color: Rgb<u8>) -> String {
    format!("#{:02x}{:02x}{:02x}", color[0], color[1], color[2])
}

#[cfg(test)]
mod tests {
    use image::Rgb;
    use proptest::prelude::*;

    use super::*;

    fn rgb() -> impl Strategy<Value = Rgb<u8>> {
        any::<[u8; 3]>().prop_map(Rgb)
    }

    proptest! {
        #[test]
        fn distance_is_symmetric(c1 in rgb(), c2 in rgb()) {
            prop_assert_eq!(color_distance(c1, c2), color_distance(c2, c1));
        }

        #[test]
        fn distance_to_self_is_zero(c in rgb()) {
            prop_assert_eq!(color_distance(c, c), 0);
        }

        #[test]
        fn distance_never_exceeds_max(c1 in rgb(), c2 in rgb()) {
            prop_assert!(color_distance(c1, c2) < MAX_DISTANCE);
        }

        #[test]
        fn lighten_matches_float_formula(c in any::<u8>()) {
            let expected = (c as f64 + 0.25 * (255.0 - c as f64)) as u8;
            prop_assert_eq!(lighten_channel(c), expected);
        }
    }

    #[test]
    fn distance_truncates_instead_of_rounding() {
        // sqrt(99) = 9.949..., truncated to 9
        let a = Rgb([0, 0, 0]);
        let b = Rgb([9, 3, 3]);
        assert_eq!(color_distance(a, b), 9);

        // sqrt(255^2 + 255^2) = 360.62...
        assert_eq!(color_distance(Rgb([255, 0, 0]), Rgb([0, 255, 0])), 360);
        // sqrt(3 * 255^2) = 441.67...
        assert_eq!(color_distance(Rgb([0, 0, 0]), Rgb([255, 255, 255])), 441);
    }

    #[test]
    fn lighten_channel_endpoints() {
        assert_eq!(lighten_channel(0), 63);
        assert_eq!(lighten_channel(255), 255);
        assert_eq!(lighten_channel(63), 111);
        assert_eq!(lighten_channel(254), 254);
    }

    #[test]
    fn test_parse_hex_color_valid() {
        assert_eq!(parse_hex_color("#88c0d0"), Some(Rgb([0x88, 0xc0, 0xd0])));
        assert_eq!(parse_hex_color("FF0000"), Some(Rgb([255, 0, 0])));
        assert_eq!(parse_hex_color("  #00ff00 "), Some(Rgb([0, 255, 0])));
    }

    #[test]
    fn test_parse_hex_color_invalid() {
        assert!(parse_hex_color("#fff").is_none());
        assert!(parse_hex_color("zzzzzz").is_none());
        assert!(parse_hex_color("#ff00ff00").is_none());
        assert!(parse_hex_color("#ééé").is_none());
    }

    #[test]
    fn test_hex_color_roundtrip() {
        let color = Rgb([0x12, 0xab, 0x00]);
        assert_eq!(to_hex_color(color), "#12ab00");
        assert_eq!(parse_hex_color(&to_hex_color(color)), Some(color));
    }
}
