use crate::foundation::core::{Affine, Rgb8};
use smallvec::SmallVec;
use std::fmt;

/// Stable key of an addressable element on the page (for example `hero-img` or `count/2`).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct TargetKey(String);

impl TargetKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TargetKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl fmt::Display for TargetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Scalar style channels that tweens and effects can drive.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Scalar {
    /// Opacity in `[0, 1]`.
    Opacity,
    /// Uniform scale factor.
    Scale,
    /// Vertical-only scale factor.
    ScaleY,
    /// Vertical translation as a percentage of the element's own height.
    TranslateY,
}

impl Scalar {
    /// Value the channel has when nothing ever wrote it.
    pub fn idle(self) -> f64 {
        match self {
            Self::Opacity | Self::Scale | Self::ScaleY => 1.0,
            Self::TranslateY => 0.0,
        }
    }

    /// Clamp a computed value into the channel's legal range.
    pub fn sanitize(self, v: f64) -> f64 {
        if !v.is_finite() {
            return self.idle();
        }
        match self {
            Self::Opacity => v.clamp(0.0, 1.0),
            Self::Scale | Self::ScaleY => v.max(0.0),
            Self::TranslateY => v,
        }
    }
}

/// Storage slot of a style write; one value per target and channel is visible at a time.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Channel {
    Scalar(Scalar),
    Transform,
    Gradient,
}

/// A single style write destined for a visual target.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum StyleProp {
    Scalar(Scalar, f64),
    /// 2-D affine transform (SVG `transform` attribute).
    Transform(Affine),
    /// Gradient used as a text fill mask.
    Gradient(TextGradient),
}

impl StyleProp {
    pub fn opacity(v: f64) -> Self {
        Self::Scalar(Scalar::Opacity, Scalar::Opacity.sanitize(v))
    }

    pub fn scale(v: f64) -> Self {
        Self::Scalar(Scalar::Scale, Scalar::Scale.sanitize(v))
    }

    pub fn channel(&self) -> Channel {
        match self {
            Self::Scalar(s, _) => Channel::Scalar(*s),
            Self::Transform(_) => Channel::Transform,
            Self::Gradient(_) => Channel::Gradient,
        }
    }

    pub fn scalar(&self) -> Option<f64> {
        match self {
            Self::Scalar(_, v) => Some(*v),
            _ => None,
        }
    }
}

/// One color stop; `offset` is a percentage and may lie outside `0..=100`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ColorStop {
    pub offset: f64,
    pub color: Rgb8,
}

/// Top-to-bottom two-color wipe: solid `background` above the upper stop, solid `foreground`
/// below the lower stop, blended in between.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextGradient {
    pub stops: SmallVec<[ColorStop; 4]>,
}

impl TextGradient {
    pub fn wipe(lower: f64, spread: f64, background: Rgb8, foreground: Rgb8) -> Self {
        let upper = lower - spread;
        let mut stops = SmallVec::new();
        stops.push(ColorStop {
            offset: 0.0,
            color: background,
        });
        stops.push(ColorStop {
            offset: upper,
            color: background,
        });
        stops.push(ColorStop {
            offset: lower,
            color: foreground,
        });
        stops.push(ColorStop {
            offset: 100.0,
            color: foreground,
        });
        Self { stops }
    }

    /// Offset where the transition band begins (towards the top).
    pub fn upper(&self) -> f64 {
        self.stops.get(1).map_or(0.0, |s| s.offset)
    }

    /// Offset where the transition band ends (towards the bottom).
    pub fn lower(&self) -> f64 {
        self.stops.get(2).map_or(100.0, |s| s.offset)
    }

    pub fn to_css(&self) -> String {
        let mut out = String::from("linear-gradient(to bottom");
        for s in &self.stops {
            out.push_str(&format!(", {} {}%", s.color.to_hex(), s.offset));
        }
        out.push(')');
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/props.rs"]
mod tests;
