use crate::animation::ease::Ease;
use crate::foundation::error::{RevealError, RevealResult};
use crate::style::scene::INTRO_COUNTS;
use crate::timeline::step::{Position, PropTo, SetStep, Step};

/// Declarative entrance timeline: initial state plus an ordered list of steps.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Choreography {
    /// Wait before the first step, in seconds.
    pub delay: f64,
    pub default_ease: Ease,
    pub initial: Vec<SetStep>,
    pub steps: Vec<Step>,
}

impl Default for Choreography {
    fn default() -> Self {
        Self::intro()
    }
}

impl Choreography {
    /// Landing-page loader: counter, split title, divider, curtain panels, then hero content.
    pub fn intro() -> Self {
        let initial = vec![
            // Markup baseline.
            SetStep::new(&["hero-img"], &[PropTo::scale(1.5)]),
            SetStep::new(&["nav"], &[PropTo::y(-120.0)]),
            SetStep::new(&["line/*/*"], &[PropTo::y(120.0)]),
            SetStep::new(&["cta"], &[PropTo::scale(0.0)]),
            SetStep::new(&["cta-label/p"], &[PropTo::y(120.0)]),
            // Loader start state.
            SetStep::new(&["word-1/h1"], &[PropTo::y(-120.0), PropTo::opacity(0.0)]),
            SetStep::new(&["word-2/h1"], &[PropTo::y(120.0), PropTo::opacity(0.0)]),
            SetStep::new(&["divider"], &[PropTo::scale_y(0.0), PropTo::opacity(0.0)]),
            SetStep::new(&["count/*"], &[PropTo::opacity(0.0)]),
            SetStep::new(&["count/*/digit/*"], &[PropTo::y(120.0)]),
        ];

        let mut steps = Vec::new();
        for i in 0..INTRO_COUNTS {
            let count = format!("count/{i}");
            let digits = format!("count/{i}/digit/*");
            steps.push(Step::to(
                format!("count-{i}-show"),
                &[count.as_str()],
                &[PropTo::opacity(1.0)],
                0.3,
            ));
            steps.push(
                Step::to(format!("count-{i}-digits-in"), &[digits.as_str()], &[PropTo::y(0.0)], 0.6)
                    .stagger(0.1)
                    .at(Position::PrevStart(0.0)),
            );
            steps.push(
                Step::to(
                    format!("count-{i}-digits-out"),
                    &[digits.as_str()],
                    &[PropTo::y(-120.0)],
                    0.6,
                )
                .stagger(0.1)
                .at(Position::End(0.1)),
            );
            steps.push(
                Step::to(
                    format!("count-{i}-hide"),
                    &[count.as_str()],
                    &[PropTo::opacity(0.0)],
                    0.3,
                )
                .at(Position::PrevStart(0.3)),
            );
        }

        steps.extend([
            Step::to("spinner-out", &["spinner"], &[PropTo::opacity(0.0)], 0.3),
            Step::to(
                "word-1-in",
                &["word-1/h1"],
                &[PropTo::y(0.0), PropTo::opacity(1.0)],
                1.0,
            ),
            Step::to(
                "word-2-in",
                &["word-2/h1"],
                &[PropTo::y(0.0), PropTo::opacity(1.0)],
                1.0,
            )
            .at(Position::PrevStart(0.0)),
            Step::to(
                "divider-in",
                &["divider"],
                &[PropTo::scale_y(1.0), PropTo::opacity(1.0)],
                1.0,
            ),
            Step::to(
                "word-1-out",
                &["word-1/h1"],
                &[PropTo::y(120.0), PropTo::opacity(0.0)],
                1.0,
            ),
            Step::to(
                "word-2-out",
                &["word-2/h1"],
                &[PropTo::y(-120.0), PropTo::opacity(0.0)],
                1.0,
            )
            .at(Position::PrevStart(0.0)),
            Step::to("divider-out", &["divider"], &[PropTo::opacity(0.0)], 0.5),
            Step::to("block-left-out", &["block/left"], &[PropTo::y(-100.0)], 1.0),
            Step::to("block-right-out", &["block/right"], &[PropTo::y(-100.0)], 1.0)
                .at(Position::End(-0.5)),
            Step::to("hero-img-settle", &["hero-img"], &[PropTo::scale(1.0)], 2.0)
                .at(Position::PrevStart(0.0)),
            Step::to(
                "content-in",
                &["nav", "line/h1/*", "line/p/*"],
                &[PropTo::y(0.0)],
                1.5,
            )
            .stagger(0.2)
            .at(Position::PrevStart(0.0)),
            Step::to("cta-in", &["cta", "cta-icon"], &[PropTo::scale(1.0)], 1.5)
                .stagger(0.75)
                .delay(0.75)
                .at(Position::PrevStart(0.0)),
            Step::to("cta-label-in", &["cta-label/p"], &[PropTo::y(0.0)], 1.5)
                .delay(0.5)
                .at(Position::PrevStart(0.0)),
        ]);

        Self {
            delay: 0.3,
            default_ease: Ease::HOP,
            initial,
            steps,
        }
    }

    /// Structural checks. Negative or non-finite timings are not errors; the sequencer clamps them.
    pub fn validate(&self) -> RevealResult<()> {
        for (i, step) in self.steps.iter().enumerate() {
            if step.targets.is_empty() {
                return Err(RevealError::validation(format!(
                    "step {i} ('{}') has no targets",
                    step.label
                )));
            }
            if step.to.is_empty() {
                return Err(RevealError::validation(format!(
                    "step {i} ('{}') animates nothing",
                    step.label
                )));
            }
            if step.to.iter().any(|p| !p.value.is_finite()) {
                return Err(RevealError::validation(format!(
                    "step {i} ('{}') has a non-finite target value",
                    step.label
                )));
            }
        }
        for (i, set) in self.initial.iter().enumerate() {
            if set.values.iter().any(|p| !p.value.is_finite()) {
                return Err(RevealError::validation(format!(
                    "initial set {i} has a non-finite value"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/choreography.rs"]
mod tests;
