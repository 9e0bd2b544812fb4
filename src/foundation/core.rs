use crate::foundation::error::{RevealError, RevealResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Position within the pinned scroll region, always inside `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Progress(f64);

impl Progress {
    pub const ZERO: Self = Self(0.0);
    pub const ONE: Self = Self(1.0);

    /// Clamp `v` into `[0, 1]`. NaN maps to 0.
    pub fn new(v: f64) -> Self {
        if v.is_nan() {
            return Self::ZERO;
        }
        Self(v.clamp(0.0, 1.0))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl From<f64> for Progress {
    fn from(v: f64) -> Self {
        Self::new(v)
    }
}

impl From<Progress> for f64 {
    fn from(p: Progress) -> Self {
        p.0
    }
}

/// Opaque sRGB color, serialized as `#rrggbb`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn parse_hex(s: &str) -> RevealResult<Self> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| RevealError::validation(format!("color '{s}' must start with '#'")))?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(RevealError::validation(format!(
                "color '{s}' must be in #rrggbb form"
            )));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|e| RevealError::validation(format!("color '{s}': {e}")))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Rgb8 {
    type Error = RevealError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse_hex(&s)
    }
}

impl From<Rgb8> for String {
    fn from(c: Rgb8) -> Self {
        c.to_hex()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
