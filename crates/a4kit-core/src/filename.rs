//! Download file names and human-readable sizes.
//!
//! Export names are derived from the user's original file name, e.g.
//! `"My Photo!!.JPG"` becomes `"My_Photo"` and the PDF is saved as
//! `My_Photo_A4.pdf`. Arabic letters are kept so localized names survive.

use once_cell::sync::Lazy;
use regex::Regex;

/// Used when nothing usable is left of the original name.
pub const FALLBACK_BASE_NAME: &str = "image";

/// Trailing `.ext` (no slash or dot inside the extension).
static EXTENSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.[^/.]+$").expect("extension pattern is valid"));

/// Anything that is not an ASCII word char, Arabic letter, dash or space.
static DISALLOWED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^A-Za-z0-9_\x{0600}-\x{06FF}\- ]+").expect("disallowed pattern is valid")
});

static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Reduce an original file name to a safe base for export names.
///
/// Strips the extension, drops disallowed characters, trims, and joins
/// words with `_`. Falls back to [`FALLBACK_BASE_NAME`] when the result
/// would be empty.
pub fn base_name(original: &str) -> String {
    let without_ext = EXTENSION.replace(original, "");
    let cleaned = DISALLOWED.replace_all(&without_ext, "");
    let joined = WHITESPACE.replace_all(cleaned.trim(), "_");

    if joined.is_empty() {
        FALLBACK_BASE_NAME.to_string()
    } else {
        joined.into_owned()
    }
}

/// Export name `<base><suffix>`, e.g. `export_name("a.jpg", "_A4.pdf")`.
pub fn export_name(original: &str, suffix: &str) -> String {
    format!("{}{}", base_name(original), suffix)
}

const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Format a byte count with 1024 steps: `"512 B"`, `"1.50 KB"`.
pub fn format_bytes(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.2} {}", value, UNITS[unit])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_name_basic() {
        assert_eq!(base_name("My Photo!!.JPG"), "My_Photo");
        assert_eq!(base_name("holiday.png"), "holiday");
        assert_eq!(base_name("scan-01_final.jpeg"), "scan-01_final");
    }

    #[test]
    fn test_base_name_fallback() {
        assert_eq!(base_name(""), "image");
        assert_eq!(base_name("!!!.png"), "image");
        assert_eq!(base_name("   "), "image");
    }

    #[test]
    fn test_base_name_only_last_extension() {
        assert_eq!(base_name("archive.tar.gz"), "archivetar");
        assert_eq!(base_name("noext"), "noext");
    }

    #[test]
    fn test_base_name_dot_in_directory_is_kept() {
        // the extension pattern does not cross a slash
        assert_eq!(base_name("dir.v2/photo"), "dirv2photo");
    }

    #[test]
    fn test_base_name_collapses_whitespace() {
        assert_eq!(base_name("  a   b \u{00a0} c .jpg"), "a_b_c");
    }

    #[test]
    fn test_base_name_keeps_arabic() {
        assert_eq!(base_name("صورة جديدة.jpg"), "صورة_جديدة");
    }

    #[test]
    fn test_base_name_drops_other_scripts() {
        assert_eq!(base_name("café.jpg"), "caf");
        assert_eq!(base_name("写真.png"), "image");
    }

    #[test]
    fn test_export_name() {
        assert_eq!(export_name("My Photo!!.JPG", "_A4.pdf"), "My_Photo_A4.pdf");
        assert_eq!(export_name("", "_blue.png"), "image_blue.png");
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(1023), "1023 B");
        assert_eq!(format_bytes(1024), "1.00 KB");
        assert_eq!(format_bytes(1536), "1.50 KB");
        assert_eq!(format_bytes(5 * 1024 * 1024), "5.00 MB");
        assert_eq!(format_bytes(3 * 1024 * 1024 * 1024), "3.00 GB");
        assert_eq!(format_bytes(2048 * 1024 * 1024 * 1024), "2048.00 GB");
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn is_allowed(c: char) -> bool {
        c.is_ascii_alphanumeric() || c == '_' || c == '-' || ('\u{0600}'..='\u{06FF}').contains(&c)
    }

    proptest! {
        /// Property: the base name is never empty and only holds allowed chars.
        #[test]
        fn prop_base_name_is_safe(name in ".{0,64}") {
            let base = base_name(&name);
            prop_assert!(!base.is_empty());
            prop_assert!(base.chars().all(is_allowed), "unexpected char in {:?}", base);
        }

        /// Property: sanitizing twice changes nothing.
        #[test]
        fn prop_base_name_idempotent(name in "[A-Za-z0-9 _.!-]{0,32}") {
            let once = base_name(&name);
            let stripped_again = base_name(&format!("{once}.x"));
            prop_assert_eq!(stripped_again, once);
        }
    }
}
