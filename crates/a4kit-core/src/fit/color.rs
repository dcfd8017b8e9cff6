//! Background color parsing for the A4 canvas.

use super::RenderError;

/// Opaque white, the default page background.
pub const WHITE: [u8; 4] = [255, 255, 255, 255];

/// Parse a CSS hex color (`#rgb` or `#rrggbb`, `#` optional) into opaque RGBA.
///
/// This is the format an `<input type="color">` produces.
pub fn parse_hex_color(input: &str) -> Result<[u8; 4], RenderError> {
    let invalid = || RenderError::InvalidColor(input.to_string());

    let hex = input.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());

    match hex.len() {
        3 => {
            // #abc expands to #aabbcc
            let r = channel(&hex[0..1])?;
            let g = channel(&hex[1..2])?;
            let b = channel(&hex[2..3])?;
            Ok([r * 17, g * 17, b * 17, 255])
        }
        6 => Ok([
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
            255,
        ]),
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_form() {
        assert_eq!(parse_hex_color("#ffffff").unwrap(), WHITE);
        assert_eq!(parse_hex_color("#1a2B3c").unwrap(), [0x1a, 0x2b, 0x3c, 255]);
        assert_eq!(parse_hex_color("000000").unwrap(), [0, 0, 0, 255]);
    }

    #[test]
    fn test_parse_short_form() {
        assert_eq!(parse_hex_color("#fff").unwrap(), WHITE);
        assert_eq!(parse_hex_color("#f80").unwrap(), [255, 136, 0, 255]);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(parse_hex_color("  #000  ").unwrap(), [0, 0, 0, 255]);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "#", "#ff", "#fffff", "#ggg", "white", "#ffffffff", "#ééé", "+f+f+f"] {
            assert!(
                matches!(parse_hex_color(bad), Err(RenderError::InvalidColor(_))),
                "{bad:?} should be rejected"
            );
        }
    }
}
