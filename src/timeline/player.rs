use crate::foundation::core::Progress;
use crate::runtime::ticker::{Flow, FrameCallback, FrameCtx};
use crate::style::props::{Scalar, StyleProp, TargetKey};
use crate::style::sink::StyleSink;
use crate::timeline::sequencer::Timeline;
use smallvec::SmallVec;
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerState {
    Idle,
    Playing,
    Done,
}

/// Plays a [`Timeline`] forward exactly once.
///
/// The first frame writes the initial state and fixes the time origin; every later frame renders
/// the tweens that have started, in schedule order. A tween's start values are read when it first
/// becomes active, so chained tweens on one channel pick up where the previous one ended.
#[derive(Debug)]
pub struct TimelinePlayer {
    timeline: Timeline,
    state: PlayerState,
    origin: f64,
    current: BTreeMap<(TargetKey, Scalar), f64>,
    from: Vec<Option<SmallVec<[f64; 2]>>>,
    finished: Vec<bool>,
    remaining: usize,
}

impl TimelinePlayer {
    pub fn new(timeline: Timeline) -> Self {
        let n = timeline.tweens.len();
        Self {
            timeline,
            state: PlayerState::Idle,
            origin: 0.0,
            current: BTreeMap::new(),
            from: vec![None; n],
            finished: vec![false; n],
            remaining: n,
        }
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Fraction of the whole run (delay included) elapsed at `now`.
    pub fn progress_at(&self, now: f64) -> Progress {
        let total = self.timeline.delay + self.timeline.duration;
        match self.state {
            PlayerState::Idle => Progress::ZERO,
            PlayerState::Done => Progress::ONE,
            PlayerState::Playing if total <= 0.0 => Progress::ONE,
            PlayerState::Playing => Progress::new((now - self.origin) / total),
        }
    }

    /// Render the frame at `now` (seconds, same clock as every other call).
    pub fn advance(&mut self, now: f64, sink: &mut dyn StyleSink) -> PlayerState {
        match self.state {
            PlayerState::Done => return PlayerState::Done,
            PlayerState::Idle => {
                for (target, v) in &self.timeline.initial {
                    let value = v.channel.sanitize(v.value);
                    self.current.insert((target.clone(), v.channel), value);
                    sink.apply(target, &StyleProp::Scalar(v.channel, value));
                }
                self.origin = now;
                self.state = PlayerState::Playing;
                tracing::debug!(
                    tweens = self.timeline.tweens.len(),
                    duration = self.timeline.duration,
                    "entrance timeline started"
                );
            }
            PlayerState::Playing => {}
        }

        let t = now - self.origin - self.timeline.delay;
        for (i, tw) in self.timeline.tweens.iter().enumerate() {
            if self.finished[i] || t < tw.start {
                continue;
            }

            let current = &self.current;
            let from = self.from[i].get_or_insert_with(|| {
                tw.to
                    .iter()
                    .map(|p| {
                        current
                            .get(&(tw.target.clone(), p.channel))
                            .copied()
                            .unwrap_or_else(|| p.channel.idle())
                    })
                    .collect()
            });

            let local = if tw.duration <= 0.0 {
                1.0
            } else {
                ((t - tw.start) / tw.duration).clamp(0.0, 1.0)
            };
            let e = tw.ease.apply(local);
            for (p, f) in tw.to.iter().zip(from.iter()) {
                let value = p.channel.sanitize(f + (p.value - f) * e);
                self.current.insert((tw.target.clone(), p.channel), value);
                sink.apply(&tw.target, &StyleProp::Scalar(p.channel, value));
            }

            if local >= 1.0 {
                self.finished[i] = true;
                self.remaining -= 1;
            }
        }

        if self.remaining == 0 {
            self.state = PlayerState::Done;
            tracing::debug!("entrance timeline finished");
        }
        self.state
    }
}

impl FrameCallback for TimelinePlayer {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> Flow {
        match self.advance(ctx.time, &mut *ctx.sink) {
            PlayerState::Done => Flow::Done,
            PlayerState::Idle | PlayerState::Playing => Flow::Continue,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/player.rs"]
mod tests;
