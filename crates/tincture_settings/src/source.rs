//! The settings source interface consumed by live bindings.
//!
//! Settings systems disagree on their change callback: some pass only the
//! new value, some pass the old and the new value. A source declares which
//! one it takes through [`SettingsSource::listener_shape`], and bindings
//! write a single `(old, new)` closure that [`ChangeListener::adapt`] fits
//! to that shape.

use std::fmt;

use toml::Value;

use crate::error::SettingsResult;

/// Callback taking only the new value.
pub type NewValueCallback = Box<dyn FnMut(&Value) + Send>;

/// Callback taking the previous value (if any) and the new value.
pub type OldAndNewCallback = Box<dyn FnMut(Option<&Value>, &Value) + Send>;

/// Change callback shape a settings source accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerShape {
    /// `(new)`.
    NewValue,
    /// `(old, new)`.
    OldAndNew,
}

/// A change callback in one of the two shapes.
pub enum ChangeListener {
    /// `(new)` callback.
    NewValue(NewValueCallback),
    /// `(old, new)` callback.
    OldAndNew(OldAndNewCallback),
}

impl ChangeListener {
    /// Wraps a canonical `(old, new)` closure in the requested shape.
    ///
    /// For [`ListenerShape::NewValue`] the closure always sees `None` as the
    /// old value.
    #[must_use]
    pub fn adapt<F>(shape: ListenerShape, mut canonical: F) -> Self
    where
        F: FnMut(Option<&Value>, &Value) + Send + 'static,
    {
        match shape {
            ListenerShape::NewValue => Self::NewValue(Box::new(move |new: &Value| canonical(None, new))),
            ListenerShape::OldAndNew => Self::OldAndNew(Box::new(canonical)),
        }
    }

    /// Shape of this listener.
    #[must_use]
    pub const fn shape(&self) -> ListenerShape {
        match self {
            Self::NewValue(_) => ListenerShape::NewValue,
            Self::OldAndNew(_) => ListenerShape::OldAndNew,
        }
    }

    /// Invokes the callback. `old` is dropped for new-value listeners.
    pub fn notify(&mut self, old: Option<&Value>, new: &Value) {
        match self {
            Self::NewValue(callback) => callback(new),
            Self::OldAndNew(callback) => callback(old, new),
        }
    }
}

impl fmt::Debug for ChangeListener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ChangeListener").field(&self.shape()).finish()
    }
}

/// A settings system that can supply colors and report their changes.
pub trait SettingsSource {
    /// Current raw value for `key`, if set.
    fn current_value(&self, key: &str) -> Option<Value>;

    /// Listener shape this source accepts, or `None` if it cannot notify.
    fn listener_shape(&self) -> Option<ListenerShape>;

    /// Subscribes `listener` to changes of `key`.
    ///
    /// Listeners may be invoked on any thread.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::UnsupportedListener`](crate::SettingsError::UnsupportedListener)
    /// if the listener's shape is not the one this source accepts.
    fn register_listener(&self, key: &str, listener: ChangeListener) -> SettingsResult<()>;
}
