//! Color operations that accept either a raw channel array or a [`ColorValue`].
//!
//! Raw arrays are trusted: each function documents the scale it expects and
//! nothing is range-checked. Passing a 0-255 array to a `1`-scale function
//! (or the reverse) produces a wrong color, not an error.

use crate::error::{ColorError, ColorResult};
use crate::sink::ColorSink;
use crate::value::{ColorValue, CHANNEL_MAX};

/// Borrowed operand of the polymorphic color operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorRef<'a> {
    /// Raw RGBA array, in whatever scale the operation expects.
    Raw([f32; 4]),
    /// Managed color value.
    Value(&'a ColorValue),
}

impl From<[f32; 4]> for ColorRef<'_> {
    fn from(channels: [f32; 4]) -> Self {
        Self::Raw(channels)
    }
}

impl From<&[f32; 4]> for ColorRef<'_> {
    fn from(channels: &[f32; 4]) -> Self {
        Self::Raw(*channels)
    }
}

impl From<[u8; 4]> for ColorRef<'_> {
    fn from(channels: [u8; 4]) -> Self {
        Self::Raw(channels.map(f32::from))
    }
}

impl<'a> From<&'a ColorValue> for ColorRef<'a> {
    fn from(color: &'a ColorValue) -> Self {
        Self::Value(color)
    }
}

impl TryFrom<&[f32]> for ColorRef<'_> {
    type Error = ColorError;

    fn try_from(channels: &[f32]) -> ColorResult<Self> {
        <[f32; 4]>::try_from(channels)
            .map(Self::Raw)
            .map_err(|_| ColorError::InvalidInput { len: channels.len() })
    }
}

/// Byte-scale channels. Raw arrays are returned unchanged.
#[must_use]
pub fn to_byte_channels<'a>(color: impl Into<ColorRef<'a>>) -> [f32; 4] {
    match color.into() {
        ColorRef::Raw(channels) => channels,
        ColorRef::Value(value) => value.byte_channels(None).map(f32::from),
    }
}

/// Normalized channels. Raw arrays are taken as 0-255 and divided by 255.
#[must_use]
pub fn to_normalized_channels<'a>(color: impl Into<ColorRef<'a>>) -> [f32; 4] {
    match color.into() {
        ColorRef::Raw(channels) => channels.map(|c| c / CHANNEL_MAX),
        ColorRef::Value(value) => value.normalized_channels(None),
    }
}

/// Applies a color to `sink`, taking raw arrays as 0-255.
pub fn apply_sink_255<'a, S: ColorSink + ?Sized>(sink: &mut S, color: impl Into<ColorRef<'a>>) {
    match color.into() {
        ColorRef::Raw([r, g, b, a]) => {
            sink.apply(r / CHANNEL_MAX, g / CHANNEL_MAX, b / CHANNEL_MAX, a / CHANNEL_MAX);
        }
        ColorRef::Value(value) => value.apply_to_sink(sink, None),
    }
}

/// Applies a color to `sink`, taking raw arrays as already normalized.
pub fn apply_sink_1<'a, S: ColorSink + ?Sized>(sink: &mut S, color: impl Into<ColorRef<'a>>) {
    match color.into() {
        ColorRef::Raw([r, g, b, a]) => sink.apply(r, g, b, a),
        ColorRef::Value(value) => value.apply_to_sink(sink, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_to_normalized() {
        assert_eq!(to_normalized_channels([255u8, 255, 0, 0]), [1.0, 1.0, 0.0, 0.0]);
        assert_eq!(
            to_normalized_channels([255.0f32, 51.0, 0.0, 255.0]),
            [1.0, 0.2, 0.0, 1.0]
        );
    }

    #[test]
    fn test_raw_bytes_unchanged() {
        let raw = [12.0f32, 300.0, -4.0, 0.5];
        assert_eq!(to_byte_channels(&raw), raw);
    }

    #[test]
    fn test_value_dispatch() {
        let color = ColorValue::new([0, 51, 255, 255]);
        assert_eq!(to_byte_channels(&color), [0.0, 51.0, 255.0, 255.0]);
        assert_eq!(to_normalized_channels(&color), color.normalized_channels(None));
    }

    #[test]
    fn test_apply_sink_scales() {
        let mut calls: Vec<[f32; 4]> = Vec::new();
        apply_sink_255(&mut calls, [255u8, 0, 0, 255]);
        apply_sink_1(&mut calls, [0.5f32, 0.5, 0.5, 1.0]);
        assert_eq!(calls, vec![[1.0, 0.0, 0.0, 1.0], [0.5, 0.5, 0.5, 1.0]]);
    }

    #[test]
    fn test_apply_sink_value_ignores_scale() {
        let color = ColorValue::new([0, 255, 0, 255]);
        let mut calls: Vec<[f32; 4]> = Vec::new();
        apply_sink_255(&mut calls, &color);
        apply_sink_1(&mut calls, &color);
        assert_eq!(calls[0], [0.0, 1.0, 0.0, 1.0]);
        assert_eq!(calls[0], calls[1]);
    }

    #[test]
    fn test_slice_operand_length_checked() {
        let short: &[f32] = &[1.0, 2.0, 3.0];
        assert_eq!(
            ColorRef::try_from(short),
            Err(ColorError::InvalidInput { len: 3 })
        );
        let full: &[f32] = &[1.0, 2.0, 3.0, 4.0];
        assert_eq!(ColorRef::try_from(full), Ok(ColorRef::Raw([1.0, 2.0, 3.0, 4.0])));
    }
}
