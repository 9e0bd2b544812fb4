use crate::foundation::core::Progress;
use crate::foundation::error::{RevealError, RevealResult};
use crate::scroll::effects::{
    FADE_OVERLAY, HERO_CONTAINER, HERO_COPY, HERO_LOGO, OVERLAY_COPY, SVG_OVERLAY, ScrollConfig,
    ScrollFrame,
};
use crate::scroll::logo::{LogoFit, Measure};
use crate::style::fingerprint::{StyleFingerprint, fingerprint_writes};
use crate::style::props::{StyleProp, TargetKey};
use crate::style::scene::Scene;
use crate::style::sink::StyleSink;

pub const LOGO_MASK: &str = "logo-mask";
pub const LOGO_CONTAINER: &str = "logo-container";

const REQUIRED_TARGETS: [&str; 8] = [
    HERO_CONTAINER,
    HERO_LOGO,
    HERO_COPY,
    FADE_OVERLAY,
    SVG_OVERLAY,
    LOGO_MASK,
    LOGO_CONTAINER,
    OVERLAY_COPY,
];

/// Applies [`ScrollFrame`]s to the hero page's visual targets.
///
/// Construction is all-or-nothing: either every target and measurement is present and the logo
/// mask transform has been written, or nothing was touched.
#[derive(Debug)]
pub struct ScrollAnimator {
    cfg: ScrollConfig,
    logo: LogoFit,
    last: Option<(StyleFingerprint, ScrollFrame)>,
}

impl ScrollAnimator {
    #[tracing::instrument(skip_all)]
    pub fn mount(
        cfg: ScrollConfig,
        scene: &Scene,
        measure: &dyn Measure,
        sink: &mut dyn StyleSink,
    ) -> RevealResult<Self> {
        cfg.validate()?;

        let missing: Vec<&str> = REQUIRED_TARGETS
            .iter()
            .copied()
            .filter(|k| !scene.contains(&TargetKey::from(*k)))
            .collect();
        if !missing.is_empty() {
            tracing::warn!(?missing, "scroll animator not mounted: targets missing");
            return Err(RevealError::setup(format!(
                "missing scroll targets: {}",
                missing.join(", ")
            )));
        }

        let mask = TargetKey::from(LOGO_MASK);
        let container = measure
            .bounding_rect(&TargetKey::from(LOGO_CONTAINER))
            .ok_or_else(|| RevealError::setup("logo container could not be measured"))?;
        let bbox = measure
            .bounding_rect(&mask)
            .ok_or_else(|| RevealError::setup("logo mask path could not be measured"))?;
        let logo = LogoFit::compute(container, bbox).inspect_err(|e| {
            tracing::warn!(error = %e, "scroll animator not mounted: bad logo measurements");
        })?;

        sink.apply(&mask, &StyleProp::Transform(logo.to_affine()));
        tracing::debug!(scale = logo.scale, "logo mask transform applied");

        Ok(Self {
            cfg,
            logo,
            last: None,
        })
    }

    pub fn logo(&self) -> LogoFit {
        self.logo
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.cfg
    }

    /// Frame most recently written to the targets.
    pub fn last_frame(&self) -> Option<&ScrollFrame> {
        self.last.as_ref().map(|(_, f)| f)
    }

    /// Recompute every effect for `p` and write the result.
    ///
    /// A frame identical to the previous one is not written again.
    pub fn update(&mut self, p: Progress, sink: &mut dyn StyleSink) {
        let frame = ScrollFrame::evaluate(&self.cfg, p);
        let writes = frame.writes();
        let fp = fingerprint_writes(&writes);
        if self.last.as_ref().is_some_and(|(last, _)| *last == fp) {
            return;
        }
        for (target, prop) in &writes {
            sink.apply(target, prop);
        }
        self.last = Some((fp, frame));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/animator.rs"]
mod tests;
