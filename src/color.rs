//! Hex color decoding for the background and foreground roles. A malformed
//! color is never an error: the caller always gets the role's default back.

use image::Rgba;

/// Resolve an optional hex string, falling back to `default` when it is
/// absent, empty or malformed
pub fn resolve(hex: Option<&str>, default: Rgba<u8>) -> Rgba<u8> {
    match hex {
        Some(hex) if !hex.is_empty() => parse_hex(hex).unwrap_or(default),
        _ => default,
    }
}

/// Decode `RGB`, `RGBA`, `RRGGBB` or `RRGGBBAA`, with an optional leading `#`.
/// Short forms are expanded by doubling every digit.
pub fn parse_hex(hex: &str) -> Option<Rgba<u8>> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let expanded: String = match hex.len() {
        3 | 4 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 | 8 => hex.to_owned(),
        _ => return None,
    };

    let channel = |at: usize| u8::from_str_radix(&expanded[at..at + 2], 16).ok();
    let alpha = match expanded.len() {
        8 => channel(6)?,
        _ => u8::MAX,
    };

    Some(Rgba([channel(0)?, channel(2)?, channel(4)?, alpha]))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT: Rgba<u8> = Rgba([1, 2, 3, 4]);

    #[test]
    fn test_six_digits() {
        assert_eq!(parse_hex("ff8000"), Some(Rgba([0xFF, 0x80, 0x00, 0xFF])));
        assert_eq!(parse_hex("#0a0B0c"), Some(Rgba([0x0A, 0x0B, 0x0C, 0xFF])));
    }

    #[test]
    fn test_eight_digits_alpha() {
        assert_eq!(parse_hex("11223380"), Some(Rgba([0x11, 0x22, 0x33, 0x80])));
        assert_eq!(parse_hex("#00000000"), Some(Rgba([0, 0, 0, 0])));
    }

    #[test]
    fn test_short_forms() {
        assert_eq!(parse_hex("abc"), Some(Rgba([0xAA, 0xBB, 0xCC, 0xFF])));
        assert_eq!(parse_hex("#f00"), Some(Rgba([0xFF, 0x00, 0x00, 0xFF])));
        assert_eq!(parse_hex("abcd"), Some(Rgba([0xAA, 0xBB, 0xCC, 0xDD])));
    }

    #[test]
    fn test_invalid() {
        for hex in [
            "", "#", "##abc", "ab", "abcde", "abcdefa", "abcdef012", "ggg", "zzzzzz", "+f+f+f",
            "12 456", "éé",
        ] {
            assert_eq!(parse_hex(hex), None, "{hex:?} should not parse");
        }
    }

    #[test]
    fn test_resolve_defaults() {
        assert_eq!(resolve(None, DEFAULT), DEFAULT);
        assert_eq!(resolve(Some(""), DEFAULT), DEFAULT);
        assert_eq!(resolve(Some("nothex"), DEFAULT), DEFAULT);
        assert_eq!(resolve(Some("#12345"), DEFAULT), DEFAULT);
        assert_eq!(resolve(Some("ff0000"), DEFAULT), Rgba([0xFF, 0, 0, 0xFF]));
    }
}
