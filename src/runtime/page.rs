use crate::config::RevealConfig;
use crate::foundation::error::RevealResult;
use crate::runtime::ticker::{Subscription, Ticker};
use crate::scroll::animator::ScrollAnimator;
use crate::scroll::logo::Measure;
use crate::scroll::pin::{PinRegion, ScrollTrigger};
use crate::style::scene::Scene;
use crate::style::sink::StyleSink;
use crate::timeline::player::TimelinePlayer;
use crate::timeline::sequencer::Timeline;

/// The two routes that carry animations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Route {
    /// `/`: loader choreography into the hero content.
    Home,
    /// `/azandr`: pinned scroll hero with the logo mask reveal.
    Azandr,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Azandr => "/azandr",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        match path.trim_end_matches('/') {
            "" => Some(Self::Home),
            "/azandr" => Some(Self::Azandr),
            _ => None,
        }
    }

    pub fn parts(self) -> PageParts {
        match self {
            Self::Home => PageParts {
                intro: true,
                scroll_hero: false,
            },
            Self::Azandr => PageParts {
                intro: false,
                scroll_hero: true,
            },
        }
    }
}

/// Which subsystems a page mounts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageParts {
    pub intro: bool,
    pub scroll_hero: bool,
}

/// What the host page offers at mount time.
pub struct PageHost<'a> {
    pub scene: &'a Scene,
    pub measure: &'a dyn Measure,
    /// Viewport height in pixels, read once.
    pub viewport_height: f64,
}

/// Live registrations of a mounted page. Pass it back to [`MountedPage::teardown`].
#[must_use = "a mounted page must be torn down to stop its frame callbacks"]
#[derive(Debug)]
pub struct MountedPage {
    parts: PageParts,
    subscriptions: Vec<Subscription>,
}

impl MountedPage {
    pub fn parts(&self) -> PageParts {
        self.parts
    }

    pub fn is_live(&self, ticker: &Ticker) -> bool {
        self.subscriptions.iter().any(|s| ticker.is_registered(s))
    }

    /// Deregister every callback of this page.
    pub fn teardown(self, ticker: &mut Ticker) {
        let n = self.subscriptions.len();
        for sub in self.subscriptions {
            ticker.remove(sub);
        }
        tracing::debug!(callbacks = n, "page torn down");
    }
}

/// Mount `parts` on `ticker`.
///
/// The scroll hero is set up first; if it fails nothing is registered.
#[tracing::instrument(skip(cfg, host, ticker, sink))]
pub fn mount(
    parts: PageParts,
    cfg: &RevealConfig,
    host: &PageHost<'_>,
    ticker: &mut Ticker,
    sink: &mut dyn StyleSink,
) -> RevealResult<MountedPage> {
    let trigger = if parts.scroll_hero {
        cfg.pin.validate()?;
        let animator = ScrollAnimator::mount(cfg.scroll.clone(), host.scene, host.measure, sink)?;
        let region = PinRegion::from_viewport(host.viewport_height, &cfg.pin);
        Some(ScrollTrigger::new(region, animator))
    } else {
        None
    };
    let player = if parts.intro {
        Some(TimelinePlayer::new(Timeline::build(&cfg.intro, host.scene)?))
    } else {
        None
    };

    let mut subscriptions = Vec::new();
    if let Some(player) = player {
        subscriptions.push(ticker.add(Box::new(player)));
    }
    if let Some(trigger) = trigger {
        subscriptions.push(ticker.add(Box::new(trigger)));
    }
    Ok(MountedPage {
        parts,
        subscriptions,
    })
}

/// Mount whatever `route` carries.
pub fn mount_route(
    route: Route,
    cfg: &RevealConfig,
    host: &PageHost<'_>,
    ticker: &mut Ticker,
    sink: &mut dyn StyleSink,
) -> RevealResult<MountedPage> {
    mount(route.parts(), cfg, host, ticker, sink)
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/page.rs"]
mod tests;
