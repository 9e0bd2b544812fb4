use super::*;

const EPS: f64 = 1e-9;

fn frame(p: f64) -> ScrollFrame {
    ScrollFrame::evaluate(&ScrollConfig::default(), Progress::new(p))
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < EPS
}

fn samples(n: u32) -> impl Iterator<Item = f64> {
    (0..=n).map(move |i| f64::from(i) / f64::from(n))
}

#[test]
fn values_stay_in_legal_ranges() {
    for p in samples(400) {
        let f = frame(p);
        for o in [
            f.hero_badge_opacity,
            f.fade_overlay_opacity,
            f.outro.opacity,
        ] {
            assert!((0.0..=1.0).contains(&o), "opacity {o} at p={p}");
        }
        assert!(f.hero_scale > 0.0);
        assert!(f.overlay_scale > 0.0);
        assert!(f.outro.scale > 0.0);
        assert!(approx(f.outro.gradient.upper(), f.outro.gradient.lower() - 100.0));
    }
}

#[test]
fn hero_fade_is_continuous_at_its_edges() {
    assert_eq!(frame(0.0).hero_badge_opacity, 1.0);
    assert!(frame(0.15).hero_badge_opacity.abs() < EPS);
    assert_eq!(frame(0.150_000_1).hero_badge_opacity, 0.0);
    assert!(frame(1e-7).hero_badge_opacity > 0.999_99);
}

#[test]
fn monotonic_inside_windows() {
    let mut prev = f64::INFINITY;
    for i in 0..=150 {
        let v = frame(f64::from(i) / 1000.0).hero_badge_opacity;
        assert!(v < prev, "fade must strictly decrease");
        prev = v;
    }

    let mut prev = f64::INFINITY;
    for i in 0..=85 {
        let v = frame(f64::from(i) / 100.0).hero_scale;
        assert!(v < prev, "hero scale must strictly decrease");
        prev = v;
    }

    let mut prev = f64::NEG_INFINITY;
    for i in 600..=850 {
        let v = frame(f64::from(i) / 1000.0).outro.opacity;
        assert!(v > prev, "outro opacity must strictly increase");
        prev = v;
    }
}

#[test]
fn outro_is_hidden_at_and_before_window_start() {
    assert_eq!(frame(0.6).outro.opacity, 0.0);
    assert_eq!(frame(0.3).outro.opacity, 0.0);
    // Reset state lines up with the window start, so entering the window does not pop.
    assert_eq!(frame(0.3).outro, frame(0.6).outro);
    let below = frame(0.3).outro;
    assert!(approx(below.gradient.lower(), 240.0));
    assert!(approx(below.scale, 1.25));
}

#[test]
fn outro_midpoint_literals() {
    let f = frame(0.725);
    assert!(approx(f.outro.gradient.lower(), 100.0));
    assert!(approx(f.outro.gradient.upper(), 0.0));
    assert!(approx(f.outro.scale, 1.125));
    assert!(approx(f.outro.opacity, 0.5));
}

#[test]
fn zoom_window_end_literals() {
    let f = frame(0.85);
    assert!(approx(f.hero_scale, 1.0));
    assert!(approx(f.overlay_scale, 1.0));
    assert!(approx(f.fade_overlay_opacity, 1.0));
    assert!(approx(frame(0.0).overlay_scale, 350.0));
    assert!(approx(frame(0.0).hero_scale, 1.5));
}

#[test]
fn fade_to_white_ramp() {
    assert_eq!(frame(0.2).fade_overlay_opacity, 0.0);
    assert!(approx(frame(0.45).fade_overlay_opacity, 0.5));
    assert!(approx(frame(0.7).fade_overlay_opacity, 1.0));
}

// The zoom and the outro keep their p=0.85 look all the way to p=1 while the hero fade resets.
// This mirrors the page as shipped; the pin region is sized for p in [0, 1], so the last 15% of
// the scroll shows a still frame.
#[test]
fn zoom_and_outro_hold_past_window_end() {
    let end = frame(0.85);
    let past = frame(1.0);
    assert_eq!(past.hero_scale, end.hero_scale);
    assert_eq!(past.overlay_scale, end.overlay_scale);
    assert_eq!(past.fade_overlay_opacity, end.fade_overlay_opacity);
    assert_eq!(past.outro, end.outro);
    assert_eq!(past.hero_badge_opacity, 0.0);
}

#[test]
fn evaluate_is_deterministic() {
    for p in samples(50) {
        assert_eq!(frame(p), frame(p));
    }
}

#[test]
fn writes_cover_every_scroll_target() {
    let w = frame(0.5).writes();
    for key in [
        HERO_LOGO,
        HERO_COPY,
        HERO_CONTAINER,
        SVG_OVERLAY,
        FADE_OVERLAY,
        OVERLAY_COPY,
    ] {
        assert!(w.iter().any(|(k, _)| k.as_str() == key), "{key}");
    }
}

#[test]
fn default_config_validates() {
    assert!(ScrollConfig::default().validate().is_ok());

    let mut bad = ScrollConfig::default();
    bad.hero_zoom.overlay_initial_scale = 0.0;
    assert!(bad.validate().is_err());
}
