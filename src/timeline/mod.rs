pub(crate) mod choreography;
pub(crate) mod player;
pub(crate) mod sequencer;
pub(crate) mod step;
