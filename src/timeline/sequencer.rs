use crate::animation::ease::Ease;
use crate::foundation::error::RevealResult;
use crate::style::props::TargetKey;
use crate::style::scene::{Scene, Selector};
use crate::timeline::choreography::Choreography;
use crate::timeline::step::{Position, PropTo};

/// One target's tween with its absolute start time (seconds after the timeline delay).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ScheduledTween {
    /// Index of the step this tween came from.
    pub step: usize,
    pub target: TargetKey,
    pub to: Vec<PropTo>,
    pub start: f64,
    pub duration: f64,
    pub ease: Ease,
}

impl ScheduledTween {
    pub fn end(&self) -> f64 {
        self.start + self.duration
    }
}

/// Time slot a step occupies, whether or not any of its targets exist.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct StepSlot {
    pub label: String,
    pub start: f64,
    pub end: f64,
    pub targets: usize,
}

/// A choreography resolved against a concrete page.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Timeline {
    pub delay: f64,
    pub initial: Vec<(TargetKey, PropTo)>,
    pub tweens: Vec<ScheduledTween>,
    pub slots: Vec<StepSlot>,
    /// End of the last step, excluding `delay`.
    pub duration: f64,
}

impl Timeline {
    #[tracing::instrument(skip_all, fields(steps = choreo.steps.len()))]
    pub fn build(choreo: &Choreography, scene: &Scene) -> RevealResult<Self> {
        choreo.validate()?;

        let mut initial = Vec::new();
        for set in &choreo.initial {
            for target in resolve_targets(scene, &set.targets, "initial") {
                for v in &set.values {
                    initial.push((target.clone(), *v));
                }
            }
        }

        let mut tweens = Vec::new();
        let mut slots = Vec::with_capacity(choreo.steps.len());
        let mut end = 0.0_f64;
        let mut prev_start = 0.0_f64;

        for (idx, step) in choreo.steps.iter().enumerate() {
            let duration = non_negative(step.duration);
            let stagger = non_negative(step.stagger);
            let anchor = match step.position {
                Position::End(off) => end + finite_or_zero(off),
                Position::PrevStart(off) => prev_start + finite_or_zero(off),
                Position::At(t) => finite_or_zero(t),
            };
            let start = anchor.max(0.0) + non_negative(step.delay);
            let ease = step.ease.unwrap_or(choreo.default_ease);

            let targets = resolve_targets(scene, &step.targets, &step.label);
            for (k, target) in targets.iter().enumerate() {
                tweens.push(ScheduledTween {
                    step: idx,
                    target: target.clone(),
                    to: step.to.clone(),
                    start: start + stagger * k as f64,
                    duration,
                    ease,
                });
            }

            let span = duration + stagger * targets.len().saturating_sub(1) as f64;
            slots.push(StepSlot {
                label: step.label.clone(),
                start,
                end: start + span,
                targets: targets.len(),
            });
            end = end.max(start + span);
            prev_start = start;
        }

        tracing::debug!(tweens = tweens.len(), duration = end, "timeline built");
        Ok(Self {
            delay: non_negative(choreo.delay),
            initial,
            tweens,
            slots,
            duration: end,
        })
    }

    pub fn slot(&self, label: &str) -> Option<&StepSlot> {
        self.slots.iter().find(|s| s.label == label)
    }
}

// Selectors in order, each expanded in document order, duplicates dropped.
fn resolve_targets(scene: &Scene, selectors: &[Selector], label: &str) -> Vec<TargetKey> {
    let mut out: Vec<TargetKey> = Vec::new();
    for sel in selectors {
        let found = scene.resolve(sel);
        if found.is_empty() {
            tracing::debug!(step = label, selector = sel.as_str(), "no matching targets, skipped");
        }
        for key in found {
            if !out.contains(&key) {
                out.push(key);
            }
        }
    }
    out
}

fn non_negative(v: f64) -> f64 {
    if v.is_finite() { v.max(0.0) } else { 0.0 }
}

fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/sequencer.rs"]
mod tests;
