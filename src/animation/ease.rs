/// Easing functions used to map normalized animation progress.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Linear interpolation.
    Linear,
    /// Quadratic ease-in.
    InQuad,
    /// Quadratic ease-out.
    OutQuad,
    /// Quadratic ease-in/out.
    InOutQuad,
    /// Cubic ease-in.
    InCubic,
    /// Cubic ease-out.
    OutCubic,
    /// Cubic ease-in/out.
    InOutCubic,
    /// CSS-style `cubic-bezier(x1, y1, x2, y2)` with endpoints fixed at (0,0) and (1,1).
    CubicBezier { x1: f64, y1: f64, x2: f64, y2: f64 },
}

impl Ease {
    /// Sharp in-out curve used by the entrance choreography.
    pub const HOP: Self = Self::CubicBezier {
        x1: 0.9,
        y1: 0.0,
        x2: 0.1,
        y2: 1.0,
    };

    /// Apply this easing function to normalized progress `t` in `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::CubicBezier { x1, y1, x2, y2 } => {
                if t == 0.0 || t == 1.0 {
                    return t;
                }
                let s = solve_bezier_param(t, x1.clamp(0.0, 1.0), x2.clamp(0.0, 1.0));
                bezier_axis(s, y1, y2)
            }
        }
    }
}

// One axis of a cubic bezier with P0 = 0 and P3 = 1.
fn bezier_axis(s: f64, c1: f64, c2: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * c1 + 3.0 * inv * s * s * c2 + s * s * s
}

fn bezier_axis_slope(s: f64, c1: f64, c2: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * c1 + 6.0 * inv * s * (c2 - c1) + 3.0 * s * s * (1.0 - c2)
}

// Find the curve parameter whose x equals `x`. Newton first, bisection when the slope flattens.
fn solve_bezier_param(x: f64, x1: f64, x2: f64) -> f64 {
    const EPS: f64 = 1e-9;

    let mut s = x;
    for _ in 0..8 {
        let err = bezier_axis(s, x1, x2) - x;
        if err.abs() < EPS {
            return s;
        }
        let slope = bezier_axis_slope(s, x1, x2);
        if slope.abs() < 1e-6 {
            break;
        }
        s -= err / slope;
        if !(0.0..=1.0).contains(&s) {
            break;
        }
    }

    let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
    s = x;
    for _ in 0..64 {
        let v = bezier_axis(s, x1, x2);
        if (v - x).abs() < EPS {
            break;
        }
        if v < x {
            lo = s;
        } else {
            hi = s;
        }
        s = 0.5 * (lo + hi);
    }
    s
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
