use super::*;

#[test]
fn wildcard_matches_one_segment() {
    let sel = Selector::from("count/*");
    assert!(sel.matches(&"count/3".into()));
    assert!(!sel.matches(&"count/3/digit/0".into()));
    assert!(!sel.matches(&"count".into()));

    let digits = Selector::from("count/*/digit/*");
    assert!(digits.matches(&"count/3/digit/1".into()));
    assert!(!digits.matches(&"count/3".into()));
}

#[test]
fn resolve_keeps_document_order() {
    let scene = Scene::intro_page();
    let got: Vec<String> = scene
        .resolve(&Selector::from("line/*/*"))
        .into_iter()
        .map(|k| k.to_string())
        .collect();
    assert_eq!(got, vec!["line/h1/0", "line/h1/1", "line/p/0"]);

    assert_eq!(scene.resolve(&Selector::from("count/*")).len(), INTRO_COUNTS);
    assert_eq!(
        scene.resolve(&Selector::from("count/*/digit/*")).len(),
        INTRO_COUNTS * DIGITS_PER_COUNT
    );
}

#[test]
fn intro_page_has_no_cta_icon() {
    let scene = Scene::intro_page();
    assert!(!scene.contains(&"cta-icon".into()));
    assert!(scene.contains(&"cta".into()));
}

#[test]
fn without_drops_one_element() {
    let scene = Scene::hero_page().without("overlay-copy");
    assert!(!scene.contains(&"overlay-copy".into()));
    assert_eq!(scene.keys().len(), Scene::hero_page().keys().len() - 1);
}
