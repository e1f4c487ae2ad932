//! # Color Value
//!
//! A single RGBA color stored in four pre-computed encodings.
//!
//! ## Encodings
//!
//! ```text
//! byte channels        [R, G, B, A]            each 0..=255
//! normalized channels  [R, G, B, A] / 255      each 0.0..=1.0
//! packed RGBA          0xRRGGBBAA
//! packed ARGB          0xAARRGGBB
//! ```
//!
//! [`ColorValue::set`] is the only mutator. It rewrites all four encodings
//! from one input, in place, so a value held behind a shared handle changes
//! for every holder at once.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ColorError, ColorResult};
use crate::raw::RawColor;
use crate::sink::ColorSink;

/// Divisor between byte and normalized channels.
pub(crate) const CHANNEL_MAX: f32 = 255.0;

// ============================================================================
// PACKING
// ============================================================================

/// Packs four bytes into one word, first byte most significant.
///
/// `pack([r, g, b, a])` yields `0xRRGGBBAA`; `pack([a, r, g, b])` yields
/// `0xAARRGGBB`.
#[inline]
#[must_use]
pub const fn pack(bytes: [u8; 4]) -> u32 {
    ((bytes[0] as u32) << 24) | ((bytes[1] as u32) << 16) | ((bytes[2] as u32) << 8) | bytes[3] as u32
}

/// Unpacks a word into four bytes, most significant first. Inverse of [`pack`].
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn unpack(word: u32) -> [u8; 4] {
    [
        ((word >> 24) & 0xFF) as u8,
        ((word >> 16) & 0xFF) as u8,
        ((word >> 8) & 0xFF) as u8,
        (word & 0xFF) as u8,
    ]
}

// ============================================================================
// INPUT
// ============================================================================

/// Anything a [`ColorValue`] can be set from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorInput {
    /// Packed `0xRRGGBBAA` word.
    Packed(u32),
    /// Four channels, either byte-scale or normalized (see [`classify_channels`]).
    Channels([f64; 4]),
}

impl From<u32> for ColorInput {
    fn from(word: u32) -> Self {
        Self::Packed(word)
    }
}

impl From<[u8; 4]> for ColorInput {
    fn from(bytes: [u8; 4]) -> Self {
        Self::Channels(bytes.map(f64::from))
    }
}

impl From<[i32; 4]> for ColorInput {
    fn from(channels: [i32; 4]) -> Self {
        Self::Channels(channels.map(f64::from))
    }
}

impl From<[f32; 4]> for ColorInput {
    fn from(channels: [f32; 4]) -> Self {
        Self::Channels(channels.map(f64::from))
    }
}

impl From<[f64; 4]> for ColorInput {
    fn from(channels: [f64; 4]) -> Self {
        Self::Channels(channels)
    }
}

impl TryFrom<&[f64]> for ColorInput {
    type Error = ColorError;

    fn try_from(components: &[f64]) -> ColorResult<Self> {
        <[f64; 4]>::try_from(components)
            .map(Self::Channels)
            .map_err(|_| ColorError::InvalidInput { len: components.len() })
    }
}

// ============================================================================
// CLASSIFICATION
// ============================================================================

/// Scale a channel tuple is interpreted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelScale {
    /// Integers in `0..=255`.
    Byte,
    /// Floats in `0.0..=1.0`.
    Normalized,
}

/// Decides whether a channel tuple is byte-scale or normalized.
///
/// A tuple is byte-scale when every component is integral. This means a
/// normalized color written with exact `0`/`1` components, such as
/// `[1.0, 1.0, 1.0, 1.0]`, is read as the byte color `[1, 1, 1, 1]`.
#[must_use]
pub fn classify_channels(channels: &[f64; 4]) -> ChannelScale {
    if channels.iter().all(|c| *c == c.trunc()) {
        ChannelScale::Byte
    } else {
        ChannelScale::Normalized
    }
}

/// Integral component to byte, masked to the low 8 bits.
///
/// Infinities count as integral and map to 0, as their low bits are empty.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn byte_from_integral(component: f64) -> u8 {
    if !component.is_finite() {
        return 0;
    }
    // Exact for integral floats of any magnitude.
    component.rem_euclid(256.0) as u8
}

/// Normalized component to byte, rounded and clamped.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn byte_from_normalized(component: f64) -> u8 {
    (component * f64::from(CHANNEL_MAX)).round().clamp(0.0, 255.0) as u8
}

fn channels_to_bytes(channels: &[f64; 4]) -> [u8; 4] {
    match classify_channels(channels) {
        ChannelScale::Byte => channels.map(byte_from_integral),
        ChannelScale::Normalized => channels.map(byte_from_normalized),
    }
}

// ============================================================================
// COLOR VALUE
// ============================================================================

/// RGBA color with byte, normalized and both packed encodings kept in sync.
///
/// Serializes as its packed `0xRRGGBBAA` word and deserializes from any
/// [`RawColor`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawColor", into = "u32")]
pub struct ColorValue {
    /// Channels in `0..=255`, order RGBA.
    bytes: [u8; 4],
    /// `bytes[i] / 255`.
    normalized: [f32; 4],
    /// `0xRRGGBBAA`.
    packed_rgba: u32,
    /// `0xAARRGGBB`.
    packed_argb: u32,
}

impl ColorValue {
    /// Creates a color from any supported input.
    #[must_use]
    pub fn new(input: impl Into<ColorInput>) -> Self {
        let mut color = Self::from_bytes([0; 4]);
        color.set(input);
        color
    }

    /// Creates a color directly from byte channels.
    #[must_use]
    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        let [r, g, b, a] = bytes;
        Self {
            bytes,
            normalized: bytes.map(|c| f32::from(c) / CHANNEL_MAX),
            packed_rgba: pack([r, g, b, a]),
            packed_argb: pack([a, r, g, b]),
        }
    }

    /// Creates a color from a dynamically sized channel list.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidInput`] if `components` does not hold
    /// exactly four values.
    pub fn try_from_components(components: &[f64]) -> ColorResult<Self> {
        ColorInput::try_from(components).map(Self::new)
    }

    /// Rewrites all four encodings from `input`.
    ///
    /// Packed words are unpacked `R, G, B, A` from the most significant byte.
    /// Channel tuples go through [`classify_channels`]: byte-scale components
    /// are truncated and masked with `0xFF`, normalized components are scaled
    /// by 255, rounded and clamped.
    pub fn set(&mut self, input: impl Into<ColorInput>) {
        let bytes = match input.into() {
            ColorInput::Packed(word) => unpack(word),
            ColorInput::Channels(channels) => channels_to_bytes(&channels),
        };
        *self = Self::from_bytes(bytes);
    }

    /// Length-checked [`set`](Self::set) for dynamically sized input.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidInput`] without touching the color if
    /// `components` does not hold exactly four values.
    pub fn set_components(&mut self, components: &[f64]) -> ColorResult<()> {
        let input = ColorInput::try_from(components)?;
        self.set(input);
        Ok(())
    }

    /// Returns a copy of the byte channels, optionally with alpha replaced.
    #[inline]
    #[must_use]
    pub fn byte_channels(&self, override_alpha: Option<u8>) -> [u8; 4] {
        let mut copy = self.bytes;
        if let Some(alpha) = override_alpha {
            copy[3] = alpha;
        }
        copy
    }

    /// Returns a copy of the normalized channels, optionally with alpha replaced.
    #[inline]
    #[must_use]
    pub fn normalized_channels(&self, override_alpha: Option<f32>) -> [f32; 4] {
        let mut copy = self.normalized;
        if let Some(alpha) = override_alpha {
            copy[3] = alpha;
        }
        copy
    }

    /// Packed `0xRRGGBBAA`.
    #[inline]
    #[must_use]
    pub const fn packed_rgba(&self) -> u32 {
        self.packed_rgba
    }

    /// Packed `0xAARRGGBB`, for renderers that expect alpha first.
    #[inline]
    #[must_use]
    pub const fn packed_argb(&self) -> u32 {
        self.packed_argb
    }

    /// [`packed_argb`](Self::packed_argb) reinterpreted as a signed word.
    ///
    /// Font and text back-ends commonly take their color as a signed 32-bit
    /// integer, so opaque colors come out negative.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub const fn packed_argb_i32(&self) -> i32 {
        self.packed_argb as i32
    }

    /// Sends the normalized channels to `sink`, optionally with alpha replaced.
    ///
    /// Overriding alpha lets one color serve several draws at different
    /// opacities without touching the stored channels.
    pub fn apply_to_sink<S: ColorSink + ?Sized>(&self, sink: &mut S, override_alpha: Option<f32>) {
        let [r, g, b, a] = self.normalized_channels(override_alpha);
        sink.apply(r, g, b, a);
    }
}

impl Default for ColorValue {
    /// Transparent black.
    fn default() -> Self {
        Self::from_bytes([0; 4])
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.packed_rgba)
    }
}

impl From<u32> for ColorValue {
    fn from(word: u32) -> Self {
        Self::from_bytes(unpack(word))
    }
}

impl From<ColorValue> for u32 {
    fn from(color: ColorValue) -> Self {
        color.packed_rgba
    }
}

impl TryFrom<RawColor> for ColorValue {
    type Error = ColorError;

    fn try_from(raw: RawColor) -> ColorResult<Self> {
        ColorInput::try_from(raw).map(Self::new)
    }
}
