//! # Live Bindings
//!
//! Binds a [`SharedColor`] to one settings key. The returned handle is the
//! color for as long as the caller keeps it: every later change of the key
//! is written into that same handle, so whoever stored a clone sees the new
//! color without subscribing again.
//!
//! ```text
//! ┌──────────────┐  (old, new)  ┌──────────────┐   set()   ┌──────────────┐
//! │   Settings   │ ───────────▶ │   Listener   │ ────────▶ │ SharedColor  │ ◀── held by renderer
//! │    Source    │              │ (adapted to  │           │ (same Arc,   │
//! │              │              │ source shape)│           │  forever)    │
//! └──────────────┘              └──────────────┘           └──────────────┘
//! ```

use tincture_color::{ColorInput, SharedColor};
use toml::Value;

use crate::error::{SettingsError, SettingsResult};
use crate::queue::UpdateQueue;
use crate::source::{ChangeListener, SettingsSource};
use crate::value::color_input_from_value;

/// Binds a color to `key`, applying every change immediately.
///
/// The change callback runs on whatever thread the source notifies from;
/// the four encodings are rewritten under the handle's write lock.
///
/// # Errors
///
/// - [`SettingsError::UnsupportedListener`] if the source cannot notify;
///   nothing is created or registered
/// - [`SettingsError::MissingKey`] if the key has no value
/// - [`SettingsError::Color`] if the current value is not a color
pub fn register_listener<S>(source: &S, key: &str) -> SettingsResult<SharedColor>
where
    S: SettingsSource + ?Sized,
{
    bind(source, key, |color, input| color.set(input))
}

/// Binds a color to `key`, queueing every change for the render thread.
///
/// The returned color only changes when `queue` is drained.
///
/// # Errors
///
/// Same as [`register_listener`].
pub fn register_deferred_listener<S>(
    source: &S,
    key: &str,
    queue: &UpdateQueue,
) -> SettingsResult<SharedColor>
where
    S: SettingsSource + ?Sized,
{
    let sender = queue.sender();
    bind(source, key, move |color, input| {
        if !sender.send(color.clone(), input) {
            tracing::warn!("update queue dropped, color change discarded");
        }
    })
}

fn bind<S, F>(source: &S, key: &str, mut apply: F) -> SettingsResult<SharedColor>
where
    S: SettingsSource + ?Sized,
    F: FnMut(&SharedColor, ColorInput) + Send + 'static,
{
    let Some(shape) = source.listener_shape() else {
        tracing::warn!(key, "settings source cannot register change listeners");
        return Err(SettingsError::UnsupportedListener { key: key.to_string() });
    };

    let current = source
        .current_value(key)
        .ok_or_else(|| SettingsError::MissingKey(key.to_string()))?;
    let color = SharedColor::new(color_input_from_value(&current)?);

    let bound = color.clone();
    let watched = key.to_string();
    let listener = ChangeListener::adapt(shape, move |_old: Option<&Value>, new: &Value| {
        match color_input_from_value(new) {
            Ok(input) => {
                tracing::trace!(key = %watched, "color setting changed");
                apply(&bound, input);
            }
            Err(err) => {
                tracing::warn!(key = %watched, error = %err, "ignoring unusable color setting");
            }
        }
    });
    source.register_listener(key, listener)?;

    tracing::debug!(key, ?shape, "color bound to setting");
    Ok(color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::ListenerShape;
    use parking_lot::Mutex;

    /// Source with one key whose listeners are fired by hand.
    struct ManualSource {
        shape: Option<ListenerShape>,
        value: Mutex<Value>,
        listeners: Mutex<Vec<ChangeListener>>,
    }

    impl ManualSource {
        fn new(shape: Option<ListenerShape>, value: Value) -> Self {
            Self {
                shape,
                value: Mutex::new(value),
                listeners: Mutex::new(Vec::new()),
            }
        }

        fn change(&self, new: Value) {
            let old = std::mem::replace(&mut *self.value.lock(), new.clone());
            for listener in self.listeners.lock().iter_mut() {
                listener.notify(Some(&old), &new);
            }
        }
    }

    impl SettingsSource for ManualSource {
        fn current_value(&self, key: &str) -> Option<Value> {
            (key == "accent").then(|| self.value.lock().clone())
        }

        fn listener_shape(&self) -> Option<ListenerShape> {
            self.shape
        }

        fn register_listener(&self, _key: &str, listener: ChangeListener) -> SettingsResult<()> {
            self.listeners.lock().push(listener);
            Ok(())
        }
    }

    fn channels(values: &[i64]) -> Value {
        Value::Array(values.iter().copied().map(Value::Integer).collect())
    }

    #[test]
    fn test_change_mutates_returned_color_in_place() {
        for shape in [ListenerShape::NewValue, ListenerShape::OldAndNew] {
            let source = ManualSource::new(Some(shape), channels(&[255, 0, 0, 255]));
            let color = register_listener(&source, "accent").unwrap();
            let held_elsewhere = color.clone();
            assert_eq!(color.packed_rgba(), 0xFF00_00FF);

            source.change(Value::Integer(0x00FF_00FF));

            assert!(held_elsewhere.ptr_eq(&color));
            assert_eq!(held_elsewhere.byte_channels(None), [0, 255, 0, 255]);
            assert_eq!(held_elsewhere.packed_argb(), 0xFF00_FF00);
        }
    }

    #[test]
    fn test_listener_registered_with_source_shape() {
        let source = ManualSource::new(Some(ListenerShape::NewValue), Value::Integer(0));
        register_listener(&source, "accent").unwrap();
        let listeners = source.listeners.lock();
        assert_eq!(listeners.len(), 1);
        assert_eq!(listeners[0].shape(), ListenerShape::NewValue);
    }

    #[test]
    fn test_unsupported_source_registers_nothing() {
        let source = ManualSource::new(None, Value::Integer(0));
        let err = register_listener(&source, "accent").unwrap_err();
        assert!(matches!(err, SettingsError::UnsupportedListener { ref key } if key == "accent"));
        assert!(source.listeners.lock().is_empty());
    }

    #[test]
    fn test_missing_key() {
        let source = ManualSource::new(Some(ListenerShape::OldAndNew), Value::Integer(0));
        let err = register_listener(&source, "background").unwrap_err();
        assert!(matches!(err, SettingsError::MissingKey(ref key) if key == "background"));
        assert!(source.listeners.lock().is_empty());
    }

    #[test]
    fn test_unusable_current_value() {
        let source = ManualSource::new(
            Some(ListenerShape::OldAndNew),
            Value::String("red".into()),
        );
        let err = register_listener(&source, "accent").unwrap_err();
        assert!(matches!(err, SettingsError::Color(_)));
    }

    #[test]
    fn test_unusable_change_leaves_color() {
        let source = ManualSource::new(Some(ListenerShape::OldAndNew), Value::Integer(0x0102_0304));
        let color = register_listener(&source, "accent").unwrap();

        source.change(channels(&[1, 2, 3]));
        assert_eq!(color.packed_rgba(), 0x0102_0304);

        source.change(Value::Boolean(false));
        assert_eq!(color.packed_rgba(), 0x0102_0304);
    }

    #[test]
    fn test_deferred_binding_waits_for_drain() {
        let queue = UpdateQueue::new();
        let source = ManualSource::new(Some(ListenerShape::NewValue), Value::Integer(0));
        let color = register_deferred_listener(&source, "accent", &queue).unwrap();

        source.change(Value::Integer(0xFFFF_FFFF));
        assert_eq!(color.packed_rgba(), 0);
        assert_eq!(queue.pending(), 1);

        assert_eq!(queue.drain(), 1);
        assert_eq!(color.packed_rgba(), 0xFFFF_FFFF);
    }
}
