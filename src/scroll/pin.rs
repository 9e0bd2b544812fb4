use crate::foundation::core::Progress;
use crate::foundation::error::{RevealError, RevealResult};
use crate::runtime::ticker::{Flow, FrameCallback, FrameCtx};
use crate::scroll::animator::ScrollAnimator;

/// Pin region of the hero scroll.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PinConfig {
    /// Scroll distance consumed while pinned, in viewport heights.
    pub length_viewports: f64,
}

impl Default for PinConfig {
    fn default() -> Self {
        Self {
            length_viewports: 5.0,
        }
    }
}

impl PinConfig {
    pub fn validate(&self) -> RevealResult<()> {
        if !(self.length_viewports.is_finite() && self.length_viewports > 0.0) {
            return Err(RevealError::validation("pin.length_viewports must be > 0"));
        }
        Ok(())
    }
}

/// Scroll range, in pixels, during which the hero stays pinned.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PinRegion {
    pub start: f64,
    pub end: f64,
}

impl PinRegion {
    /// Pin starting when the trigger's top meets the viewport top (offset 0).
    pub fn from_viewport(viewport_height: f64, cfg: &PinConfig) -> Self {
        Self {
            start: 0.0,
            end: viewport_height.max(0.0) * cfg.length_viewports,
        }
    }

    pub fn progress(&self, scroll_offset: f64) -> Progress {
        let span = self.end - self.start;
        if span <= 0.0 {
            return if scroll_offset >= self.start {
                Progress::ONE
            } else {
                Progress::ZERO
            };
        }
        Progress::new((scroll_offset - self.start) / span)
    }
}

/// Frame callback that feeds the animator the pinned progress of every frame whose scroll
/// offset changed.
#[derive(Debug)]
pub struct ScrollTrigger {
    region: PinRegion,
    animator: ScrollAnimator,
    last_offset: Option<f64>,
}

impl ScrollTrigger {
    pub fn new(region: PinRegion, animator: ScrollAnimator) -> Self {
        Self {
            region,
            animator,
            last_offset: None,
        }
    }

    pub fn region(&self) -> PinRegion {
        self.region
    }

    pub fn animator(&self) -> &ScrollAnimator {
        &self.animator
    }
}

impl FrameCallback for ScrollTrigger {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> Flow {
        if self.last_offset == Some(ctx.scroll_offset) {
            return Flow::Continue;
        }
        self.last_offset = Some(ctx.scroll_offset);
        let p = self.region.progress(ctx.scroll_offset);
        self.animator.update(p, &mut *ctx.sink);
        Flow::Continue
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/pin.rs"]
mod tests;
