//! Shared, identity-preserving color handle.
//!
//! A [`SharedColor`] is what a live binding hands out. Every clone points at
//! the same [`ColorValue`]; a `set` through any clone is seen by all of them.
//!
//! ## Thread Safety
//!
//! ```text
//! Settings thread:  set()  ──▶ write lock ──▶ all four encodings rewritten
//! Render thread:    read() ──▶ read lock  ──▶ never sees a half-written color
//! ```

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard};

use crate::error::ColorResult;
use crate::sink::ColorSink;
use crate::value::{ColorInput, ColorValue};

/// Cloneable handle to one shared [`ColorValue`].
#[derive(Debug, Clone, Default)]
pub struct SharedColor {
    inner: Arc<RwLock<ColorValue>>,
}

impl SharedColor {
    /// Creates a handle around a new color.
    #[must_use]
    pub fn new(input: impl Into<ColorInput>) -> Self {
        Self::from(ColorValue::new(input))
    }

    /// Sets the shared color. All four encodings change under one write lock.
    pub fn set(&self, input: impl Into<ColorInput>) {
        self.inner.write().set(input);
    }

    /// Length-checked [`set`](Self::set).
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidInput`](crate::ColorError::InvalidInput)
    /// without touching the color if `components` does not hold four values.
    pub fn set_components(&self, components: &[f64]) -> ColorResult<()> {
        self.inner.write().set_components(components)
    }

    /// Returns a copy of the current color.
    #[must_use]
    pub fn snapshot(&self) -> ColorValue {
        *self.inner.read()
    }

    /// Locks the color for reading.
    ///
    /// Hold the guard only for the duration of a draw; writers wait on it.
    pub fn read(&self) -> RwLockReadGuard<'_, ColorValue> {
        self.inner.read()
    }

    /// See [`ColorValue::byte_channels`].
    #[must_use]
    pub fn byte_channels(&self, override_alpha: Option<u8>) -> [u8; 4] {
        self.inner.read().byte_channels(override_alpha)
    }

    /// See [`ColorValue::normalized_channels`].
    #[must_use]
    pub fn normalized_channels(&self, override_alpha: Option<f32>) -> [f32; 4] {
        self.inner.read().normalized_channels(override_alpha)
    }

    /// See [`ColorValue::packed_rgba`].
    #[must_use]
    pub fn packed_rgba(&self) -> u32 {
        self.inner.read().packed_rgba()
    }

    /// See [`ColorValue::packed_argb`].
    #[must_use]
    pub fn packed_argb(&self) -> u32 {
        self.inner.read().packed_argb()
    }

    /// Applies the current color to `sink` under the read lock.
    pub fn apply_to_sink<S: ColorSink + ?Sized>(&self, sink: &mut S, override_alpha: Option<f32>) {
        self.inner.read().apply_to_sink(sink, override_alpha);
    }

    /// Returns true if both handles point at the same color.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Number of live handles to this color.
    #[must_use]
    pub fn handle_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }
}

impl From<ColorValue> for SharedColor {
    fn from(color: ColorValue) -> Self {
        Self {
            inner: Arc::new(RwLock::new(color)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_clones_share_identity() {
        let color = SharedColor::new([255, 0, 0, 255]);
        let held = color.clone();
        assert!(color.ptr_eq(&held));
        assert_eq!(color.handle_count(), 2);

        color.set(0x00FF_00FFu32);
        assert_eq!(held.byte_channels(None), [0, 255, 0, 255]);
        assert_eq!(held.packed_argb(), 0xFF00_FF00);
    }

    #[test]
    fn test_distinct_colors_not_ptr_eq() {
        let a = SharedColor::new(0u32);
        let b = SharedColor::new(0u32);
        assert!(!a.ptr_eq(&b));
        assert_eq!(a.snapshot(), b.snapshot());
    }

    #[test]
    fn test_set_components_invalid_leaves_color() {
        let color = SharedColor::new([1, 2, 3, 4]);
        assert!(color.set_components(&[0.0; 2]).is_err());
        assert_eq!(color.packed_rgba(), 0x0102_0304);
    }

    #[test]
    fn test_concurrent_writers_never_tear() {
        let color = SharedColor::new(0xFFFF_FFFFu32);
        let writer = {
            let color = color.clone();
            thread::spawn(move || {
                for i in 0..10_000u32 {
                    let word = if i % 2 == 0 { 0x0000_0000 } else { 0xFFFF_FFFF };
                    color.set(word);
                }
            })
        };

        for _ in 0..10_000 {
            let snapshot = color.snapshot();
            let [r, g, b, a] = snapshot.byte_channels(None);
            assert!(r == g && g == b && b == a);
            assert_eq!(snapshot.packed_rgba(), u32::from_be_bytes([r, g, b, a]));
        }

        writer.join().unwrap();
    }

    #[test]
    fn test_apply_to_sink_with_alpha() {
        let color = SharedColor::new([255, 255, 255, 255]);
        let mut calls: Vec<[f32; 4]> = Vec::new();
        color.apply_to_sink(&mut calls, Some(0.0));
        assert_eq!(calls, vec![[1.0, 1.0, 1.0, 0.0]]);
        assert_eq!(color.normalized_channels(None)[3], 1.0);
    }
}
