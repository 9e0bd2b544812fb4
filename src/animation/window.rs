use crate::foundation::core::Progress;
use crate::foundation::error::{RevealError, RevealResult};

/// What an effect shows while progress lies outside its window on one side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Boundary {
    /// The effect falls back to its idle style.
    ResetToIdle,
    /// The effect keeps the value it had at the window edge.
    FreezeLastValue,
}

/// Result of testing a progress value against a [`PhaseWindow`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Phase {
    /// Outside the window on a `ResetToIdle` side.
    Idle,
    /// Window-local progress in `[0, 1]`.
    Active(f64),
}

/// Sub-range of scroll progress within which one effect is active.
///
/// Both edges are inclusive. Inside the window the progress is re-mapped to a local `0..1` so
/// each effect can be tuned without knowing where its window sits.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PhaseWindow {
    pub start: f64,
    pub end: f64,
    pub before: Boundary,
    pub after: Boundary,
}

impl PhaseWindow {
    pub const fn new(start: f64, end: f64, before: Boundary, after: Boundary) -> Self {
        Self {
            start,
            end,
            before,
            after,
        }
    }

    pub fn validate(&self, name: &str) -> RevealResult<()> {
        if !(self.start.is_finite() && self.end.is_finite()) {
            return Err(RevealError::validation(format!(
                "{name}: window bounds must be finite"
            )));
        }
        if !(0.0..=1.0).contains(&self.start) || !(0.0..=1.0).contains(&self.end) {
            return Err(RevealError::validation(format!(
                "{name}: window [{}, {}] must lie inside [0, 1]",
                self.start, self.end
            )));
        }
        if self.start >= self.end {
            return Err(RevealError::validation(format!(
                "{name}: window start {} must be < end {}",
                self.start, self.end
            )));
        }
        Ok(())
    }

    pub fn phase(&self, p: Progress) -> Phase {
        let p = p.get();
        if p < self.start {
            return match self.before {
                Boundary::ResetToIdle => Phase::Idle,
                Boundary::FreezeLastValue => Phase::Active(0.0),
            };
        }
        if p > self.end {
            return match self.after {
                Boundary::ResetToIdle => Phase::Idle,
                Boundary::FreezeLastValue => Phase::Active(1.0),
            };
        }
        let span = self.end - self.start;
        if span <= 0.0 {
            return Phase::Active(1.0);
        }
        Phase::Active(((p - self.start) / span).clamp(0.0, 1.0))
    }

    /// Global progress for a window-local value.
    pub fn at_local(&self, local: f64) -> Progress {
        Progress::new(self.start + (self.end - self.start) * local.clamp(0.0, 1.0))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/window.rs"]
mod tests;
