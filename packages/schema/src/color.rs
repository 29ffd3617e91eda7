//! Color normalization for the YAML codec.
//!
//! Two independent conversion strategies coexist:
//!
//! - [`normalize_hex`] — the standard path, canonical lowercase `0xrrggbb`.
//! - [`normalize_hex_lambda`] — the device-native path, which routes the RGB
//!   bytes through a single byte-order hook before formatting so that
//!   display-specific byte ordering stays swappable in one place.
//!
//! Inputs may be `#RRGGBB` text, `0xRRGGBB` text, or a plain decimal integer.

/// Parsed 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn from_value(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xff) as u8,
            g: ((value >> 8) & 0xff) as u8,
            b: (value & 0xff) as u8,
        }
    }

    pub fn to_value(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

/// Parse a color in any accepted input form. Returns `None` for text that is
/// not a color at all, so callers can pass unknown tokens through untouched.
pub fn parse_color(input: &str) -> Option<Rgb> {
    let trimmed = input.trim();
    let hex = if let Some(rest) = trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X")) {
        rest
    } else if let Some(rest) = trimmed.strip_prefix('#') {
        rest
    } else {
        // Decimal integer form, as produced by some YAML emitters.
        return trimmed.parse::<u32>().ok().map(Rgb::from_value);
    };

    if hex.len() != 6 {
        return None;
    }
    u32::from_str_radix(hex, 16).ok().map(Rgb::from_value)
}

/// Normalize any accepted color form to canonical lowercase `0xrrggbb`.
/// Non-color text is returned unchanged.
pub fn normalize_hex(input: &str) -> String {
    match parse_color(input) {
        Some(rgb) => format!("0x{:06x}", rgb.to_value()),
        None => input.to_string(),
    }
}

/// Byte-order hook for the device-native path. Identity today; displays with
/// swapped channel ordering only need this one function changed.
fn device_byte_order(rgb: Rgb) -> Rgb {
    Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Device-native normalization: same canonical text form, but the bytes are
/// recomposed through [`device_byte_order`] first.
pub fn normalize_hex_lambda(input: &str) -> String {
    match parse_color(input) {
        Some(rgb) => format!("0x{:06x}", device_byte_order(rgb).to_value()),
        None => input.to_string(),
    }
}
