use std::str::FromStr;

use crate::errors::CorError;

/// Packs an 8-bit RGB triple into RGB565, usable in const position.
#[macro_export]
macro_rules! color565 {
    ($r:expr, $g:expr, $b:expr) => {
        ((($r as u16) & 0xF8) << 8) | ((($g as u16) & 0xFC) << 3) | (($b as u16) >> 3)
    };
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Color(u8, u8, u8);

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(r, g, b)
    }

    /// Splits a 0xRRGGBB value into channels.
    pub const fn from_rgb888(hex: u32) -> Self {
        Self((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    pub const fn r(&self) -> u8 {
        self.0
    }

    pub const fn g(&self) -> u8 {
        self.1
    }

    pub const fn b(&self) -> u8 {
        self.2
    }

    // Pixel format is 16bpp, RGB565: RRRRRGGGGGGBBBBB. Drops the low
    // 3 bits of red, 2 of green and 3 of blue.
    pub const fn as_rgb565(&self) -> u16 {
        color565!(self.0, self.1, self.2)
    }

    /// Packed value in device byte order (high byte first).
    pub const fn to_be_bytes(&self) -> [u8; 2] {
        self.as_rgb565().to_be_bytes()
    }

    pub const fn to_le_bytes(&self) -> [u8; 2] {
        self.as_rgb565().to_le_bytes()
    }
}

impl From<u32> for Color {
    fn from(hex: u32) -> Self {
        Self::from_rgb888(hex)
    }
}

impl FromStr for Color {
    type Err = CorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s);

        // from_str_radix would also accept a sign, so validate the digits here
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(CorError::InvalidHex {
                input: s.to_owned(),
            });
        }

        let hex = u32::from_str_radix(digits, 16).map_err(|_| CorError::InvalidHex {
            input: s.to_owned(),
        })?;
        Ok(Self::from_rgb888(hex))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_channel_high_bits() {
        // Top 5 bits of the packed value come from r, middle 6 from g,
        // bottom 5 from b.
        for r in (0..=255u16).step_by(3) {
            for g in (0..=255u16).step_by(5) {
                for b in (0..=255u16).step_by(7) {
                    let packed = color565!(r, g, b);
                    assert_eq!(packed >> 11, r >> 3);
                    assert_eq!((packed >> 5) & 0x3F, g >> 2);
                    assert_eq!(packed & 0x1F, b >> 3);
                }
            }
        }
    }

    #[test]
    fn packs_extremes() {
        assert_eq!(Color::new(0, 0, 0).as_rgb565(), 0x0000);
        assert_eq!(Color::new(255, 255, 255).as_rgb565(), 0xFFFF);
    }

    #[test]
    fn packing_is_lossy() {
        // Values differing only in the discarded low bits pack identically
        assert_eq!(
            Color::new(0xF8, 0xFC, 0xF8).as_rgb565(),
            Color::new(0xFF, 0xFF, 0xFF).as_rgb565()
        );
        assert_ne!(
            Color::new(0xF0, 0xFC, 0xF8).as_rgb565(),
            Color::new(0xF8, 0xFC, 0xF8).as_rgb565()
        );
    }

    #[test]
    fn byte_orders_match_packed_value() {
        let color = Color::new(241, 95, 73);
        let packed = color.as_rgb565();
        assert_eq!(color.to_be_bytes(), [(packed >> 8) as u8, (packed & 255) as u8]);
        assert_eq!(color.to_le_bytes(), [(packed & 255) as u8, (packed >> 8) as u8]);
    }

    #[test]
    fn from_rgb888_splits_channels() {
        let color = Color::from_rgb888(0xF9E4BC);
        assert_eq!(color, Color::new(0xF9, 0xE4, 0xBC));
        assert_eq!(Color::from(0x0080FF), Color::new(0, 128, 255));
    }

    #[test]
    fn parses_hex_strings() {
        assert_eq!("#F9E4BC".parse::<Color>().unwrap(), Color::new(0xF9, 0xE4, 0xBC));
        assert_eq!("f9e4bc".parse::<Color>().unwrap(), Color::new(0xF9, 0xE4, 0xBC));
        assert_eq!("#000000".parse::<Color>().unwrap(), Color::new(0, 0, 0));
    }

    #[test]
    fn rejects_malformed_hex_strings() {
        assert!("".parse::<Color>().is_err());
        assert!("#12345".parse::<Color>().is_err());
        assert!("#1234567".parse::<Color>().is_err());
        assert!("zzzzzz".parse::<Color>().is_err());
        assert!("+F9E4B".parse::<Color>().is_err());
    }
}
