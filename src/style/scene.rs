use crate::style::props::TargetKey;

/// Element selector: `/`-separated segments where `*` matches exactly one segment.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Selector(String);

impl Selector {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn matches(&self, key: &TargetKey) -> bool {
        let mut pat = self.0.split('/');
        let mut key = key.as_str().split('/');
        loop {
            match (pat.next(), key.next()) {
                (None, None) => return true,
                (Some(p), Some(k)) if p == "*" || p == k => {}
                _ => return false,
            }
        }
    }
}

impl From<&str> for Selector {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// The set of elements a mounted page actually has, in document order.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    keys: Vec<TargetKey>,
}

impl Scene {
    pub fn new<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<TargetKey>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, key: &TargetKey) -> bool {
        self.keys.contains(key)
    }

    /// All elements matched by `sel`, in document order.
    pub fn resolve(&self, sel: &Selector) -> Vec<TargetKey> {
        self.keys.iter().filter(|k| sel.matches(k)).cloned().collect()
    }

    /// Copy of this scene without `key` (element missing from the markup).
    pub fn without(&self, key: &str) -> Self {
        Self {
            keys: self
                .keys
                .iter()
                .filter(|k| k.as_str() != key)
                .cloned()
                .collect(),
        }
    }

    pub fn keys(&self) -> &[TargetKey] {
        &self.keys
    }

    /// Elements of the landing page that carries the entrance timeline.
    pub fn intro_page() -> Self {
        let mut keys: Vec<TargetKey> = ["block/left", "block/right", "word-1/h1", "word-2/h1"]
            .into_iter()
            .map(TargetKey::from)
            .collect();
        keys.push("divider".into());
        keys.push("spinner".into());
        for i in 0..INTRO_COUNTS {
            keys.push(TargetKey::new(format!("count/{i}")));
            for j in 0..DIGITS_PER_COUNT {
                keys.push(TargetKey::new(format!("count/{i}/digit/{j}")));
            }
        }
        keys.extend(
            [
                "hero-img",
                "nav",
                "line/h1/0",
                "line/h1/1",
                "line/p/0",
                "cta",
                "cta-label/p",
            ]
            .into_iter()
            .map(TargetKey::from),
        );
        Self { keys }
    }

    /// Elements of the scroll-driven hero page.
    pub fn hero_page() -> Self {
        Self::new([
            "hero-container",
            "hero-logo",
            "hero-copy",
            "fade-overlay",
            "svg-overlay",
            "logo-mask",
            "logo-container",
            "overlay-copy",
        ])
    }
}

/// Number of counter steps shown by the intro loader.
pub const INTRO_COUNTS: usize = 5;
/// Digits per counter step.
pub const DIGITS_PER_COUNT: usize = 2;

#[cfg(test)]
#[path = "../../tests/unit/style/scene.rs"]
mod tests;
