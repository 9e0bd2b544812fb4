use crate::animation::ease::Ease;
use crate::style::props::Scalar;
use crate::style::scene::Selector;

/// Where a step is placed relative to what was scheduled before it.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "anchor", content = "offset", rename_all = "snake_case")]
pub enum Position {
    /// End of everything scheduled so far, shifted by the offset (negative overlaps).
    End(f64),
    /// Start of the previous step, shifted by the offset.
    PrevStart(f64),
    /// Absolute time from the timeline origin.
    At(f64),
}

impl Default for Position {
    fn default() -> Self {
        Self::End(0.0)
    }
}

/// Target value of one scalar channel.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PropTo {
    pub channel: Scalar,
    pub value: f64,
}

impl PropTo {
    pub fn opacity(value: f64) -> Self {
        Self {
            channel: Scalar::Opacity,
            value,
        }
    }

    pub fn scale(value: f64) -> Self {
        Self {
            channel: Scalar::Scale,
            value,
        }
    }

    pub fn scale_y(value: f64) -> Self {
        Self {
            channel: Scalar::ScaleY,
            value,
        }
    }

    /// Vertical translation in percent of the element height.
    pub fn y(value: f64) -> Self {
        Self {
            channel: Scalar::TranslateY,
            value,
        }
    }
}

/// Instant assignment applied before the timeline starts.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SetStep {
    pub targets: Vec<Selector>,
    pub values: Vec<PropTo>,
}

impl SetStep {
    pub fn new(targets: &[&str], values: &[PropTo]) -> Self {
        Self {
            targets: targets.iter().map(|s| Selector::from(*s)).collect(),
            values: values.to_vec(),
        }
    }
}

/// One tween of the choreography: every target moves from its current value to `to`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Step {
    pub label: String,
    pub targets: Vec<Selector>,
    pub to: Vec<PropTo>,
    pub duration: f64,
    /// Start offset between consecutive targets.
    #[serde(default)]
    pub stagger: f64,
    /// Extra wait added on top of the resolved position.
    #[serde(default)]
    pub delay: f64,
    #[serde(default)]
    pub position: Position,
    /// Overrides the timeline's default ease.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ease: Option<Ease>,
}

impl Step {
    pub fn to(label: impl Into<String>, targets: &[&str], to: &[PropTo], duration: f64) -> Self {
        Self {
            label: label.into(),
            targets: targets.iter().map(|s| Selector::from(*s)).collect(),
            to: to.to_vec(),
            duration,
            stagger: 0.0,
            delay: 0.0,
            position: Position::default(),
            ease: None,
        }
    }

    pub fn stagger(mut self, stagger: f64) -> Self {
        self.stagger = stagger;
        self
    }

    pub fn delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    pub fn at(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = Some(ease);
        self
    }
}
