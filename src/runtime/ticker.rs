use crate::style::sink::StyleSink;

/// Per-frame inputs handed to every registered callback.
pub struct FrameCtx<'a> {
    /// Frame timestamp in seconds, strictly increasing across ticks.
    pub time: f64,
    /// Current virtual scroll offset in pixels, as reported by the smooth-scroll device.
    pub scroll_offset: f64,
    pub sink: &'a mut dyn StyleSink,
}

/// Whether a callback wants to keep receiving frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Done,
}

pub trait FrameCallback {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> Flow;
}

/// Handle of a registered callback. Consumed by [`Ticker::remove`].
#[must_use = "dropping a Subscription leaves its callback registered"]
#[derive(Debug, PartialEq, Eq)]
pub struct Subscription(u64);

/// Frame scheduler: invokes callbacks once per tick, in registration order.
#[derive(Default)]
pub struct Ticker {
    next_id: u64,
    entries: Vec<(u64, Box<dyn FrameCallback>)>,
    last_time: Option<f64>,
}

impl Ticker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, cb: Box<dyn FrameCallback>) -> Subscription {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push((id, cb));
        Subscription(id)
    }

    /// Deregister a callback. Returns `false` when it had already finished on its own.
    pub fn remove(&mut self, sub: Subscription) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(id, _)| *id != sub.0);
        self.entries.len() != before
    }

    pub fn is_registered(&self, sub: &Subscription) -> bool {
        self.entries.iter().any(|(id, _)| *id == sub.0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Run one display frame. Timestamps that do not advance are ignored.
    pub fn tick(&mut self, time: f64, scroll_offset: f64, sink: &mut dyn StyleSink) {
        if !time.is_finite() || self.last_time.is_some_and(|last| time <= last) {
            tracing::trace!(time, "ignoring non-advancing frame timestamp");
            return;
        }
        self.last_time = Some(time);

        let mut ctx = FrameCtx {
            time,
            scroll_offset,
            sink,
        };
        self.entries
            .retain_mut(|(_, cb)| cb.on_frame(&mut ctx) == Flow::Continue);
    }
}

impl std::fmt::Debug for Ticker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ticker")
            .field("callbacks", &self.entries.len())
            .field("last_time", &self.last_time)
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/ticker.rs"]
mod tests;
