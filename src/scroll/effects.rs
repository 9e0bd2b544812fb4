//! Pure scroll-progress to style mappings.
//!
//! Every effect owns a [`PhaseWindow`] and re-maps progress into that window's local `0..1`
//! before computing its values. Outside the window the effect follows the window's
//! [`Boundary`] policy for that side, so a reset and a freeze can sit side by side.

use crate::animation::window::{Boundary, Phase, PhaseWindow};
use crate::foundation::core::{Progress, Rgb8};
use crate::foundation::error::{RevealError, RevealResult};
use crate::style::props::{StyleProp, TargetKey, TextGradient};

pub const HERO_LOGO: &str = "hero-logo";
pub const HERO_COPY: &str = "hero-copy";
pub const HERO_CONTAINER: &str = "hero-container";
pub const SVG_OVERLAY: &str = "svg-overlay";
pub const FADE_OVERLAY: &str = "fade-overlay";
pub const OVERLAY_COPY: &str = "overlay-copy";

/// Logo badge and scroll hint fade out at the very start of the scroll.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct HeroFade {
    pub window: PhaseWindow,
}

impl Default for HeroFade {
    fn default() -> Self {
        Self {
            window: PhaseWindow::new(0.0, 0.15, Boundary::FreezeLastValue, Boundary::ResetToIdle),
        }
    }
}

impl HeroFade {
    pub fn sample(&self, p: Progress) -> f64 {
        match self.window.phase(p) {
            Phase::Active(t) => 1.0 - t,
            Phase::Idle => 0.0,
        }
    }
}

/// Hero image shrink, logo-mask overlay zoom and fade to white.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct HeroZoom {
    pub window: PhaseWindow,
    pub hero_scale_from: f64,
    pub hero_scale_to: f64,
    /// Overlay scale at the window start; shrinks exponentially to 1.
    pub overlay_initial_scale: f64,
    /// Nested window (in global progress) of the fade-to-white overlay.
    pub fade_to_white: PhaseWindow,
}

impl Default for HeroZoom {
    fn default() -> Self {
        Self {
            window: PhaseWindow::new(
                0.0,
                0.85,
                Boundary::FreezeLastValue,
                Boundary::FreezeLastValue,
            ),
            hero_scale_from: 1.5,
            hero_scale_to: 1.0,
            overlay_initial_scale: 350.0,
            fade_to_white: PhaseWindow::new(
                0.25,
                0.65,
                Boundary::ResetToIdle,
                Boundary::FreezeLastValue,
            ),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ZoomStyle {
    pub hero_scale: f64,
    pub overlay_scale: f64,
    pub fade_overlay_opacity: f64,
}

impl HeroZoom {
    pub fn sample(&self, p: Progress) -> ZoomStyle {
        let q = match self.window.phase(p) {
            Phase::Active(q) => q,
            Phase::Idle => 0.0,
        };
        self.at_local(q)
    }

    fn at_local(&self, q: f64) -> ZoomStyle {
        let k = self.overlay_initial_scale;
        // The nested fade sees the progress this effect is showing, so a frozen zoom also
        // freezes the fade.
        let shown = self.window.at_local(q);
        let fade = match self.fade_to_white.phase(shown) {
            Phase::Active(t) => t,
            Phase::Idle => 0.0,
        };
        ZoomStyle {
            hero_scale: self.hero_scale_from + (self.hero_scale_to - self.hero_scale_from) * q,
            overlay_scale: k * (1.0 / k).powf(q),
            fade_overlay_opacity: fade.clamp(0.0, 1.0),
        }
    }
}

/// Outro heading: gradient wipe, settle scale and fade in.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct OutroReveal {
    pub window: PhaseWindow,
    /// Lower gradient stop (percent) at the window start.
    pub gradient_start: f64,
    /// Distance (percent) the lower stop travels upward across the window.
    pub gradient_travel: f64,
    /// Fixed gap between the lower and the upper stop.
    pub gradient_spread: f64,
    pub scale_from: f64,
    pub scale_to: f64,
    pub background: Rgb8,
    pub foreground: Rgb8,
}

impl Default for OutroReveal {
    fn default() -> Self {
        Self {
            window: PhaseWindow::new(0.6, 0.85, Boundary::ResetToIdle, Boundary::FreezeLastValue),
            gradient_start: 240.0,
            gradient_travel: 280.0,
            gradient_spread: 100.0,
            scale_from: 1.25,
            scale_to: 1.0,
            background: Rgb8::new(0x11, 0x11, 0x17),
            foreground: Rgb8::new(0xe6, 0x64, 0x61),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OutroStyle {
    pub gradient: TextGradient,
    pub scale: f64,
    pub opacity: f64,
}

impl OutroReveal {
    pub fn sample(&self, p: Progress) -> OutroStyle {
        match self.window.phase(p) {
            Phase::Active(r) => self.at_local(r),
            Phase::Idle => OutroStyle {
                opacity: 0.0,
                ..self.at_local(0.0)
            },
        }
    }

    fn at_local(&self, r: f64) -> OutroStyle {
        let lower = self.gradient_start - self.gradient_travel * r;
        OutroStyle {
            gradient: TextGradient::wipe(
                lower,
                self.gradient_spread,
                self.background,
                self.foreground,
            ),
            scale: self.scale_from + (self.scale_to - self.scale_from) * r,
            opacity: r.clamp(0.0, 1.0),
        }
    }
}

/// Constants of the four scroll effects.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    pub hero_fade: HeroFade,
    pub hero_zoom: HeroZoom,
    pub outro: OutroReveal,
}

impl ScrollConfig {
    pub fn validate(&self) -> RevealResult<()> {
        self.hero_fade.window.validate("hero_fade.window")?;
        self.hero_zoom.window.validate("hero_zoom.window")?;
        self.hero_zoom
            .fade_to_white
            .validate("hero_zoom.fade_to_white")?;
        self.outro.window.validate("outro.window")?;

        let z = &self.hero_zoom;
        if !(z.overlay_initial_scale.is_finite() && z.overlay_initial_scale > 0.0) {
            return Err(RevealError::validation(
                "hero_zoom.overlay_initial_scale must be > 0",
            ));
        }
        for (name, v) in [
            ("hero_zoom.hero_scale_from", z.hero_scale_from),
            ("hero_zoom.hero_scale_to", z.hero_scale_to),
            ("outro.scale_from", self.outro.scale_from),
            ("outro.scale_to", self.outro.scale_to),
        ] {
            if !(v.is_finite() && v > 0.0) {
                return Err(RevealError::validation(format!("{name} must be > 0")));
            }
        }
        for (name, v) in [
            ("outro.gradient_start", self.outro.gradient_start),
            ("outro.gradient_travel", self.outro.gradient_travel),
            ("outro.gradient_spread", self.outro.gradient_spread),
        ] {
            if !v.is_finite() {
                return Err(RevealError::validation(format!("{name} must be finite")));
            }
        }
        Ok(())
    }
}

/// Every style the scroll animator shows for one progress value.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollFrame {
    pub progress: Progress,
    /// Shared by the logo badge and the scroll hint.
    pub hero_badge_opacity: f64,
    pub hero_scale: f64,
    pub overlay_scale: f64,
    pub fade_overlay_opacity: f64,
    pub outro: OutroStyle,
}

impl ScrollFrame {
    pub fn evaluate(cfg: &ScrollConfig, p: Progress) -> Self {
        let zoom = cfg.hero_zoom.sample(p);
        Self {
            progress: p,
            hero_badge_opacity: cfg.hero_fade.sample(p),
            hero_scale: zoom.hero_scale,
            overlay_scale: zoom.overlay_scale,
            fade_overlay_opacity: zoom.fade_overlay_opacity,
            outro: cfg.outro.sample(p),
        }
    }

    /// The frame as target writes, in a fixed order.
    pub fn writes(&self) -> Vec<(TargetKey, StyleProp)> {
        vec![
            (HERO_LOGO.into(), StyleProp::opacity(self.hero_badge_opacity)),
            (HERO_COPY.into(), StyleProp::opacity(self.hero_badge_opacity)),
            (HERO_CONTAINER.into(), StyleProp::scale(self.hero_scale)),
            (SVG_OVERLAY.into(), StyleProp::scale(self.overlay_scale)),
            (
                FADE_OVERLAY.into(),
                StyleProp::opacity(self.fade_overlay_opacity),
            ),
            (
                OVERLAY_COPY.into(),
                StyleProp::Gradient(self.outro.gradient.clone()),
            ),
            (OVERLAY_COPY.into(), StyleProp::scale(self.outro.scale)),
            (OVERLAY_COPY.into(), StyleProp::opacity(self.outro.opacity)),
        ]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/effects.rs"]
mod tests;
