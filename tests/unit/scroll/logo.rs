use super::*;
use crate::foundation::core::Point;

#[test]
fn fit_is_limited_by_the_tighter_axis() {
    // 200x150 container, 640x104 path: width is the binding axis.
    let container = Rect::new(100.0, 50.0, 300.0, 200.0);
    let bbox = Rect::new(0.0, 0.0, 640.0, 104.0);
    let fit = LogoFit::compute(container, bbox).unwrap();

    let s = 200.0 / 640.0;
    assert!((fit.scale - s).abs() < 1e-12);
    assert!((fit.translate.x - 100.0).abs() < 1e-9);
    assert!((fit.translate.y - (50.0 + (150.0 - 104.0 * s) / 2.0)).abs() < 1e-9);
}

#[test]
fn fitted_path_is_centered_in_container() {
    let container = Rect::new(10.0, 20.0, 410.0, 220.0);
    let bbox = Rect::new(-5.0, 7.0, 45.0, 57.0);
    let fit = LogoFit::compute(container, bbox).unwrap();
    let a = fit.to_affine();

    let min = a * Point::new(bbox.x0, bbox.y0);
    let max = a * Point::new(bbox.x1, bbox.y1);
    let center = Point::new((min.x + max.x) / 2.0, (min.y + max.y) / 2.0);
    assert!((center.x - container.center().x).abs() < 1e-9);
    assert!((center.y - container.center().y).abs() < 1e-9);
    // Height-bound: 200 / 50.
    assert!((fit.scale - 4.0).abs() < 1e-12);
}

#[test]
fn degenerate_rects_fail_setup() {
    let ok = Rect::new(0.0, 0.0, 10.0, 10.0);
    let flat = Rect::new(0.0, 0.0, 10.0, 0.0);
    assert!(matches!(
        LogoFit::compute(ok, flat),
        Err(RevealError::Setup(_))
    ));
    assert!(matches!(
        LogoFit::compute(flat, ok),
        Err(RevealError::Setup(_))
    ));
    let nan = Rect::new(f64::NAN, 0.0, 10.0, 10.0);
    assert!(LogoFit::compute(nan, ok).is_err());
}

#[test]
fn inverted_rects_fail_setup() {
    let ok = Rect::new(0.0, 0.0, 10.0, 10.0);
    // x1 < x0: a negative measured width.
    let inverted = Rect::new(10.0, 0.0, 0.0, 10.0);
    for (container, bbox) in [(inverted, ok), (ok, inverted)] {
        let err = LogoFit::compute(container, bbox).unwrap_err();
        assert!(matches!(err, RevealError::Setup(_)));
    }
}

#[test]
fn svg_transform_attribute() {
    let fit = LogoFit {
        scale: 0.5,
        translate: Vec2::new(12.0, -3.5),
    };
    assert_eq!(fit.to_svg_transform(), "translate(12, -3.5) scale(0.5)");
}

#[test]
fn bbox_from_path_data() {
    let r = path_bbox_from_svg("M10 20 L110 20 L110 70 Z").unwrap();
    assert_eq!(r, Rect::new(10.0, 20.0, 110.0, 70.0));
    assert!(path_bbox_from_svg("").is_err());
    assert!(path_bbox_from_svg("not a path").is_err());
}
