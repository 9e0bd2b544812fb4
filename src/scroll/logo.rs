use crate::foundation::core::{Affine, BezPath, Rect, Vec2};
use crate::foundation::error::{RevealError, RevealResult};
use crate::style::props::TargetKey;
use kurbo::Shape;
use std::collections::BTreeMap;

/// Measurement collaborator: axis-aligned bounding boxes of page elements.
pub trait Measure {
    fn bounding_rect(&self, target: &TargetKey) -> Option<Rect>;
}

/// Fixed measurements, for tests and offline evaluation.
#[derive(Clone, Debug, Default)]
pub struct StaticMeasure {
    rects: BTreeMap<TargetKey, Rect>,
}

impl StaticMeasure {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, target: impl Into<TargetKey>, rect: Rect) -> Self {
        self.rects.insert(target.into(), rect);
        self
    }
}

impl Measure for StaticMeasure {
    fn bounding_rect(&self, target: &TargetKey) -> Option<Rect> {
        self.rects.get(target).copied()
    }
}

/// Uniform fit-inside transform that centers the mask path in its container.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LogoFit {
    pub scale: f64,
    pub translate: Vec2,
}

impl LogoFit {
    pub fn compute(container: Rect, path_bbox: Rect) -> RevealResult<Self> {
        let (c, p) = (container, path_bbox);
        for (name, r) in [("container", c), ("path bounding box", p)] {
            let finite = [r.x0, r.y0, r.x1, r.y1].iter().all(|v| v.is_finite());
            if !finite || r.width() <= 0.0 || r.height() <= 0.0 {
                return Err(RevealError::setup(format!(
                    "logo {name} must have a positive finite size, got {r:?}"
                )));
            }
        }

        let scale = (c.width() / p.width()).min(c.height() / p.height());
        let tx = c.x0 + (c.width() - p.width() * scale) / 2.0 - p.x0 * scale;
        let ty = c.y0 + (c.height() - p.height() * scale) / 2.0 - p.y0 * scale;
        Ok(Self {
            scale,
            translate: Vec2::new(tx, ty),
        })
    }

    pub fn to_affine(self) -> Affine {
        Affine::translate(self.translate) * Affine::scale(self.scale)
    }

    /// Value for the mask path's SVG `transform` attribute.
    pub fn to_svg_transform(self) -> String {
        format!(
            "translate({}, {}) scale({})",
            self.translate.x, self.translate.y, self.scale
        )
    }
}

/// Tight bounding box of SVG path data (what `getBBox()` reports for the mask path).
pub fn path_bbox_from_svg(d: &str) -> RevealResult<Rect> {
    let path = BezPath::from_svg(d)
        .map_err(|e| RevealError::validation(format!("parse logo path data: {e}")))?;
    if path.elements().is_empty() {
        return Err(RevealError::validation("logo path data is empty"));
    }
    Ok(path.bounding_box())
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/logo.rs"]
mod tests;
