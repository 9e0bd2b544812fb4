//! Reveal drives the two hero animations of a marketing site.
//!
//! - A scroll-progress animator maps the pinned hero's scroll position to opacity, scale, mask
//!   and gradient styles through a pure [`ScrollFrame::evaluate`].
//! - An entrance [`Timeline`] plays the loader choreography once per page mount.
//!
//! Both write through a [`StyleSink`] and are driven by a host-owned [`Ticker`].
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod animation;
/// JSON configuration of both pages.
pub mod config;
pub(crate) mod runtime;
pub(crate) mod scroll;
pub(crate) mod style;
pub(crate) mod timeline;

pub use crate::foundation::core::{Affine, BezPath, Point, Progress, Rect, Rgb8, Vec2};
pub use crate::foundation::error::{RevealError, RevealResult};

pub use crate::animation::ease::Ease;
pub use crate::animation::window::{Boundary, Phase, PhaseWindow};
pub use crate::config::RevealConfig;
pub use crate::runtime::page::{MountedPage, PageHost, PageParts, Route, mount, mount_route};
pub use crate::runtime::ticker::{Flow, FrameCallback, FrameCtx, Subscription, Ticker};
pub use crate::scroll::animator::{LOGO_CONTAINER, LOGO_MASK, ScrollAnimator};
pub use crate::scroll::effects::{
    FADE_OVERLAY, HERO_CONTAINER, HERO_COPY, HERO_LOGO, HeroFade, HeroZoom, OVERLAY_COPY,
    OutroReveal, OutroStyle, SVG_OVERLAY, ScrollConfig, ScrollFrame, ZoomStyle,
};
pub use crate::scroll::logo::{LogoFit, Measure, StaticMeasure, path_bbox_from_svg};
pub use crate::scroll::pin::{PinConfig, PinRegion, ScrollTrigger};
pub use crate::style::props::{Channel, ColorStop, Scalar, StyleProp, TargetKey, TextGradient};
pub use crate::style::scene::{DIGITS_PER_COUNT, INTRO_COUNTS, Scene, Selector};
pub use crate::style::sink::{InMemorySink, StyleSink};
pub use crate::timeline::choreography::Choreography;
pub use crate::timeline::player::{PlayerState, TimelinePlayer};
pub use crate::timeline::sequencer::{ScheduledTween, StepSlot, Timeline};
pub use crate::timeline::step::{Position, PropTo, SetStep, Step};
