//! Raw color shapes as they appear in settings and config files.

use serde::{Deserialize, Serialize};

use crate::error::{ColorError, ColorResult};
use crate::value::ColorInput;

/// A color before validation: a packed word or a channel list of any length.
///
/// ```toml
/// accent = 0xFF0000FF
/// shadow = [0, 0, 0, 128]
/// glow = [0.2, 0.9, 1.0, 0.75]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawColor {
    /// Packed `0xRRGGBBAA` word.
    Packed(u32),
    /// Channel list, expected to hold four values.
    Channels(Vec<f64>),
}

impl TryFrom<RawColor> for ColorInput {
    type Error = ColorError;

    fn try_from(raw: RawColor) -> ColorResult<Self> {
        match raw {
            RawColor::Packed(word) => Ok(Self::Packed(word)),
            RawColor::Channels(channels) => Self::try_from(channels.as_slice()),
        }
    }
}
