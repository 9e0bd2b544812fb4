use super::*;

#[test]
fn intro_has_four_steps_per_count_plus_finale() {
    let c = Choreography::intro();
    assert_eq!(c.steps.len(), INTRO_COUNTS * 4 + 13);
    assert_eq!(c.delay, 0.3);
    assert_eq!(c.default_ease, Ease::HOP);
    assert!(c.validate().is_ok());
}

#[test]
fn count_block_literals() {
    let c = Choreography::intro();
    let digits_in = &c.steps[1];
    assert_eq!(digits_in.label, "count-0-digits-in");
    assert_eq!(digits_in.duration, 0.6);
    assert_eq!(digits_in.stagger, 0.1);
    assert_eq!(digits_in.position, Position::PrevStart(0.0));

    let digits_out = &c.steps[2];
    assert_eq!(digits_out.to, vec![PropTo::y(-120.0)]);
    assert_eq!(digits_out.position, Position::End(0.1));

    let hide = &c.steps[3];
    assert_eq!(hide.position, Position::PrevStart(0.3));
    assert_eq!(hide.duration, 0.3);
}

#[test]
fn finale_literals() {
    let c = Choreography::intro();
    let by_label = |l: &str| c.steps.iter().find(|s| s.label == l).unwrap();

    assert_eq!(by_label("block-right-out").position, Position::End(-0.5));
    assert_eq!(by_label("hero-img-settle").duration, 2.0);

    let cta = by_label("cta-in");
    assert_eq!((cta.stagger, cta.delay), (0.75, 0.75));
    assert_eq!(cta.position, Position::PrevStart(0.0));

    let label = by_label("cta-label-in");
    assert_eq!((label.duration, label.delay), (1.5, 0.5));
}

#[test]
fn validate_rejects_empty_steps() {
    let mut c = Choreography::intro();
    c.steps[0].to.clear();
    assert!(c.validate().is_err());

    let mut c = Choreography::intro();
    c.steps[5].targets.clear();
    assert!(c.validate().is_err());

    let mut c = Choreography::intro();
    c.initial[0].values[0].value = f64::NAN;
    assert!(c.validate().is_err());
}

#[test]
fn json_roundtrip_preserves_choreography() {
    let c = Choreography::intro();
    let s = serde_json::to_string(&c).unwrap();
    let back: Choreography = serde_json::from_str(&s).unwrap();
    assert_eq!(back, c);
}
