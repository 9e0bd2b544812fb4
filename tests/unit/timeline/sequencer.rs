use super::*;
use crate::timeline::step::Step;

const EPS: f64 = 1e-9;

fn intro() -> Timeline {
    Timeline::build(&Choreography::intro(), &Scene::intro_page()).unwrap()
}

fn slot_start(tl: &Timeline, label: &str) -> f64 {
    tl.slot(label).unwrap().start
}

#[test]
fn counter_blocks_follow_each_other() {
    let tl = intro();
    for i in 0..5 {
        let base = 1.5 * f64::from(i);
        assert!((slot_start(&tl, &format!("count-{i}-show")) - base).abs() < EPS);
        assert!((slot_start(&tl, &format!("count-{i}-digits-in")) - base).abs() < EPS);
        assert!((slot_start(&tl, &format!("count-{i}-digits-out")) - (base + 0.8)).abs() < EPS);
        assert!((slot_start(&tl, &format!("count-{i}-hide")) - (base + 1.1)).abs() < EPS);
    }
}

#[test]
fn finale_start_times() {
    let tl = intro();
    let expect = [
        ("spinner-out", 7.5),
        ("word-1-in", 7.8),
        ("word-2-in", 7.8),
        ("divider-in", 8.8),
        ("word-1-out", 9.8),
        ("word-2-out", 9.8),
        ("divider-out", 10.8),
        ("block-left-out", 11.3),
        ("block-right-out", 11.8),
        ("hero-img-settle", 11.8),
        ("content-in", 11.8),
        ("cta-in", 12.55),
        ("cta-label-in", 13.05),
    ];
    for (label, start) in expect {
        let got = slot_start(&tl, label);
        assert!((got - start).abs() < EPS, "{label}: {got} != {start}");
    }
}

#[test]
fn stagger_spreads_targets() {
    let tl = intro();
    let content: Vec<(String, f64)> = tl
        .tweens
        .iter()
        .filter(|t| tl.slots[t.step].label == "content-in")
        .map(|t| (t.target.to_string(), t.start))
        .collect();
    let names: Vec<&str> = content.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, vec!["nav", "line/h1/0", "line/h1/1", "line/p/0"]);
    for (k, (_, start)) in content.iter().enumerate() {
        assert!((start - (11.8 + 0.2 * k as f64)).abs() < EPS);
    }
    let slot = tl.slot("content-in").unwrap();
    assert!((slot.end - slot.start - 2.1).abs() < EPS);
}

#[test]
fn missing_target_keeps_the_slot() {
    let tl = intro();
    // The page has no cta icon: one tween, no stagger tail.
    let cta = tl.slot("cta-in").unwrap();
    assert_eq!(cta.targets, 1);
    assert!((cta.end - 14.05).abs() < EPS);
    // The cta label starts 0.5s after the cta and is the last thing to finish.
    assert!((tl.duration - 14.55).abs() < EPS);

    let no_spinner = Timeline::build(
        &Choreography::intro(),
        &Scene::intro_page().without("spinner"),
    )
    .unwrap();
    assert_eq!(no_spinner.slot("spinner-out").unwrap().targets, 0);
    assert!(
        (no_spinner.slot("word-1-in").unwrap().start - 7.8).abs() < EPS,
        "later steps keep their times"
    );
}

#[test]
fn initial_state_is_resolved() {
    let tl = intro();
    let digits = tl
        .initial
        .iter()
        .filter(|(k, p)| k.as_str().contains("/digit/") && p.value == 120.0)
        .count();
    assert_eq!(digits, 10);
    assert!(
        tl.initial
            .iter()
            .any(|(k, p)| k.as_str() == "hero-img" && *p == PropTo::scale(1.5))
    );
}

#[test]
fn malformed_timings_are_clamped() {
    let choreo = Choreography {
        delay: -1.0,
        default_ease: Ease::Linear,
        initial: vec![],
        steps: vec![
            Step::to("a", &["x"], &[PropTo::opacity(0.0)], -2.0).delay(f64::NAN),
            Step::to("b", &["x"], &[PropTo::opacity(1.0)], 1.0).at(Position::End(-10.0)),
        ],
    };
    let tl = Timeline::build(&choreo, &Scene::new(["x"])).unwrap();
    assert_eq!(tl.delay, 0.0);
    assert_eq!(tl.tweens[0].duration, 0.0);
    assert_eq!(tl.tweens[0].start, 0.0);
    assert_eq!(tl.tweens[1].start, 0.0);
    assert_eq!(tl.duration, 1.0);
}

#[test]
fn explicit_ease_overrides_default() {
    let choreo = Choreography {
        delay: 0.0,
        default_ease: Ease::HOP,
        initial: vec![],
        steps: vec![Step::to("a", &["x"], &[PropTo::opacity(0.0)], 1.0).ease(Ease::Linear)],
    };
    let tl = Timeline::build(&choreo, &Scene::new(["x"])).unwrap();
    assert_eq!(tl.tweens[0].ease, Ease::Linear);
}
