use crate::foundation::error::{RevealError, RevealResult};
use crate::scroll::effects::ScrollConfig;
use crate::scroll::pin::PinConfig;
use crate::timeline::choreography::Choreography;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Tunables of both pages. Every field falls back to the shipped values when omitted.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub scroll: ScrollConfig,
    pub pin: PinConfig,
    pub intro: Choreography,
}

impl RevealConfig {
    /// Parse a config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> RevealResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| RevealError::serde(format!("parse reveal config JSON: {e}")))
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> RevealResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            RevealError::validation(format!("open reveal config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn validate(&self) -> RevealResult<()> {
        self.scroll.validate()?;
        self.pin.validate()?;
        self.intro.validate()
    }
}
