use crate::style::props::{Channel, StyleProp, TargetKey};
use std::collections::BTreeMap;

/// Write contract of the rendering collaborator.
///
/// A write must be reflected in the next paint. The core never reads values back.
pub trait StyleSink {
    fn apply(&mut self, target: &TargetKey, prop: &StyleProp);
}

/// In-memory sink for tests and debugging: keeps the latest value per target and channel.
#[derive(Debug, Default)]
pub struct InMemorySink {
    styles: BTreeMap<TargetKey, BTreeMap<Channel, StyleProp>>,
    writes: usize,
}

impl InMemorySink {
    /// Create a new, empty in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, target: &TargetKey, channel: Channel) -> Option<&StyleProp> {
        self.styles.get(target)?.get(&channel)
    }

    /// Latest scalar value written to `target` on `channel`.
    pub fn scalar(&self, target: &str, channel: Channel) -> Option<f64> {
        self.get(&TargetKey::from(target), channel)?.scalar()
    }

    /// Total number of writes received.
    pub fn writes(&self) -> usize {
        self.writes
    }

    /// Borrow every recorded style.
    pub fn styles(&self) -> &BTreeMap<TargetKey, BTreeMap<Channel, StyleProp>> {
        &self.styles
    }
}

impl StyleSink for InMemorySink {
    fn apply(&mut self, target: &TargetKey, prop: &StyleProp) {
        self.writes += 1;
        self.styles
            .entry(target.clone())
            .or_default()
            .insert(prop.channel(), prop.clone());
    }
}
