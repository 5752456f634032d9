//! Appointment background colors

use std::fmt::{Display, Formatter};

use csscolorparser::Color;

/// The color used whenever a stored color cannot be understood
pub const DEFAULT_BACKGROUND_HEX: &str = "#FFFFA500";


/// The fixed set of colors the app offers for new appointments
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Palette {
    Blue,
    Green,
    Orange,
    Purple,
    Pink,
    Teal,
}

impl Palette {
    pub const ALL: [Palette; 6] = [
        Palette::Blue, Palette::Green, Palette::Orange,
        Palette::Purple, Palette::Pink, Palette::Teal,
    ];

    /// The CSS name of this color
    pub fn css_name(&self) -> &'static str {
        match self {
            Palette::Blue => "blue",
            Palette::Green => "green",
            Palette::Orange => "orange",
            Palette::Purple => "purple",
            Palette::Pink => "pink",
            Palette::Teal => "teal",
        }
    }
}


/// A solid background color
#[derive(Clone, Debug)]
pub struct Background {
    color: Color,
}

impl Background {
    pub fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { color: Color::from_rgba_u8(r, g, b, a) }
    }

    /// Returns the `(alpha, red, green, blue)` components
    pub fn argb(&self) -> (u8, u8, u8, u8) {
        let (r, g, b, a) = self.color.rgba_u8();
        (a, r, g, b)
    }

    /// Encode as an 8-hex-digit `#AARRGGBB` string
    pub fn to_argb_hex(&self) -> String {
        let (a, r, g, b) = self.argb();
        format!("#{:02X}{:02X}{:02X}{:02X}", a, r, g, b)
    }

    /// Decode an `#AARRGGBB` string.
    ///
    /// Other CSS notations (`#RRGGBB`, color names...) are accepted as well.
    /// Returns `None` if the string is not a color at all
    pub fn from_argb_hex(hex: &str) -> Option<Self> {
        let trimmed = hex.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if digits.len() == 8 && digits.chars().all(|c| c.is_ascii_hexdigit()) {
            // csscolorparser expects the alpha channel last
            let rgba = format!("#{}{}", &digits[2..], &digits[..2]);
            return csscolorparser::parse(&rgba).ok().map(|color| Self { color });
        }

        csscolorparser::parse(trimmed).ok().map(|color| Self { color })
    }

    /// Decode an `#AARRGGBB` string, falling back to [`DEFAULT_BACKGROUND_HEX`]
    pub fn from_argb_hex_or_default(hex: &str) -> Self {
        match Self::from_argb_hex(hex) {
            Some(bg) => bg,
            None => {
                log::warn!("Invalid background color {:?}, using the default one", hex);
                Self::default()
            },
        }
    }

    /// Returns the inner color
    pub fn as_color(&self) -> &Color {
        &self.color
    }
}

impl Default for Background {
    fn default() -> Self {
        Palette::Orange.into()
    }
}

impl From<Palette> for Background {
    fn from(palette: Palette) -> Self {
        let color = csscolorparser::parse(palette.css_name())
            .unwrap_or_else(|_| Color::from_rgba_u8(0xFF, 0xA5, 0x00, 0xFF));
        Self { color }
    }
}

impl From<Color> for Background {
    fn from(color: Color) -> Self {
        Self { color }
    }
}

/// Two backgrounds are equal when they have the same `#AARRGGBB` encoding
impl PartialEq for Background {
    fn eq(&self, other: &Self) -> bool {
        self.argb() == other.argb()
    }
}
impl Eq for Background {}

impl Display for Background {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.to_argb_hex())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_colors_encode_as_argb() {
        assert_eq!(Background::from(Palette::Blue).to_argb_hex(),   "#FF0000FF");
        assert_eq!(Background::from(Palette::Green).to_argb_hex(),  "#FF008000");
        assert_eq!(Background::from(Palette::Orange).to_argb_hex(), "#FFFFA500");
        assert_eq!(Background::from(Palette::Purple).to_argb_hex(), "#FF800080");
        assert_eq!(Background::from(Palette::Pink).to_argb_hex(),   "#FFFFC0CB");
        assert_eq!(Background::from(Palette::Teal).to_argb_hex(),   "#FF008080");
    }

    #[test]
    fn palette_colors_are_opaque_and_distinct() {
        let encoded: Vec<String> = Palette::ALL.iter().map(|p| Background::from(*p).to_argb_hex()).collect();
        for (i, hex) in encoded.iter().enumerate() {
            assert!(hex.starts_with("#FF"));
            assert!(encoded[i + 1..].contains(hex) == false);
        }

        let bg = Background::from(csscolorparser::parse("teal").unwrap());
        assert_eq!(bg, Background::from(Palette::Teal));
        assert_eq!(bg.as_color().to_hex_string(), "#008080");
    }

    #[test]
    fn argb_hex_keeps_the_alpha_channel_first() {
        let bg = Background::from_argb_hex("#80112233").unwrap();
        assert_eq!(bg.argb(), (0x80, 0x11, 0x22, 0x33));
        assert_eq!(bg.to_argb_hex(), "#80112233");
    }

    #[test]
    fn other_css_notations_are_accepted() {
        assert_eq!(Background::from_argb_hex("#0000ff"), Some(Background::from(Palette::Blue)));
        assert_eq!(Background::from_argb_hex("teal"), Some(Background::from(Palette::Teal)));
    }

    #[test]
    fn garbage_falls_back_to_orange() {
        assert_eq!(Background::from_argb_hex("not a color"), None);
        let bg = Background::from_argb_hex_or_default("#XYZ");
        assert_eq!(bg.to_argb_hex(), DEFAULT_BACKGROUND_HEX);
        assert_eq!(Background::default().to_argb_hex(), DEFAULT_BACKGROUND_HEX);
    }
}
