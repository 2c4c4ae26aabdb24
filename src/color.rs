use palette::{encoding, FromColor, Hsl as PaletteHsl, Srgb};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while parsing color strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("malformed color {input:?}: {reason}")]
    Malformed { input: String, reason: &'static str },
}

/// Core color type used throughout the crate.
/// Wraps sRGB u8 components; the canonical text form is uppercase `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Hue in degrees [0, 360), saturation and lightness in percent [0, 100].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color string like `#FF8800` or `#ff8800`.
    ///
    /// The leading `#` is required and exactly six hex digits must follow.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let malformed = |reason| ColorError::Malformed {
            input: hex.to_string(),
            reason,
        };
        let digits = hex.strip_prefix('#').ok_or_else(|| malformed("missing '#'"))?;
        if digits.len() != 6 {
            return Err(malformed("expected 6 hex digits"));
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(malformed("non-hex character"));
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16);
        match (channel(0), channel(2), channel(4)) {
            (Ok(r), Ok(g), Ok(b)) => Ok(Self { r, g, b }),
            _ => Err(malformed("non-hex character")),
        }
    }

    /// Serialize to uppercase hex `#RRGGBB`.
    pub fn to_hex(self) -> String {
        self.to_string()
    }

    /// Convert to `palette::Srgb<u8>`.
    pub fn to_srgb_u8(self) -> Srgb<u8> {
        Srgb::new(self.r, self.g, self.b)
    }

    /// Convert to HSL (degrees / percent).
    ///
    /// Components are snapped to 1e-9, so a color whose exact hue,
    /// saturation or lightness is a whole number gets that number back
    /// and compares equal to thresholds like `s < 10.0` or `h <= 165.0`.
    pub fn to_hsl(self) -> Hsl {
        let srgb: Srgb<f64> = self.to_srgb_u8().into_format();
        let hsl = PaletteHsl::<encoding::Srgb, f64>::from_color(srgb);
        let h = snap(hsl.hue.into_positive_degrees());
        Hsl {
            h: if h >= 360.0 { h - 360.0 } else { h },
            s: snap(hsl.saturation * 100.0),
            l: snap(hsl.lightness * 100.0),
        }
    }

    /// Create from HSL. Hue is wrapped into [0, 360); saturation and
    /// lightness are clamped to [0, 100].
    pub fn from_hsl(hsl: Hsl) -> Self {
        let h = hsl.h.rem_euclid(360.0);
        let s = hsl.s.clamp(0.0, 100.0) / 100.0;
        let l = hsl.l.clamp(0.0, 100.0) / 100.0;
        let srgb = Srgb::<f64>::from_color(PaletteHsl::<encoding::Srgb, f64>::new(h, s, l));
        Self::from_srgb_f64_clamped(srgb)
    }

    /// Clamp an Srgb<f64> to [0, 1] and convert to Color.
    fn from_srgb_f64_clamped(srgb: Srgb<f64>) -> Self {
        let r = (srgb.red.clamp(0.0, 1.0) * 255.0).round() as u8;
        let g = (srgb.green.clamp(0.0, 1.0) * 255.0).round() as u8;
        let b = (srgb.blue.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self { r, g, b }
    }

    /// WCAG 2.0 relative luminance.
    pub fn relative_luminance(self) -> f32 {
        fn linearize(c: u8) -> f32 {
            let c = c as f32 / 255.0;
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        0.2126 * linearize(self.r) + 0.7152 * linearize(self.g) + 0.0722 * linearize(self.b)
    }

    /// Black or white, whichever reads better on top of this color.
    pub fn readable_text(self) -> Color {
        if self.relative_luminance() > 0.4 {
            Color::new(0, 0, 0)
        } else {
            Color::new(255, 255, 255)
        }
    }
}

// 8-bit channels put every non-integer component at least 1/510 away from
// the nearest integer, far above this grid.
fn snap(v: f64) -> f64 {
    (v * 1e9).round() / 1e9
}

/// Parse a hex string straight to HSL.
pub fn hex_to_hsl(hex: &str) -> Result<Hsl, ColorError> {
    Color::from_hex(hex).map(Color::to_hsl)
}

/// Convert HSL components to an uppercase `#RRGGBB` string.
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    Color::from_hsl(Hsl::new(h, s, l)).to_hex()
}

/// Parse a list of hex strings, failing on the first malformed entry.
pub fn parse_palette<S: AsRef<str>>(hexes: &[S]) -> Result<Vec<Color>, ColorError> {
    hexes.iter().map(|h| Color::from_hex(h.as_ref())).collect()
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl std::str::FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}
