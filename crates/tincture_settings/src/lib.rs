//! # TINCTURE Settings
//!
//! Live bindings between a settings system and shared colors.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────┐      ┌──────────────────┐      ┌──────────────────┐
//! │  SettingsSource  │ ───▶ │ register_listener│ ───▶ │   SharedColor    │
//! │ (store / vendor) │      │   (one binding   │      │ (kept by caller, │
//! │                  │      │    per key)      │      │  mutated in place│
//! └──────────────────┘      └──────────────────┘      └────────┬─────────┘
//!                                    │ deferred                │
//!                                    ▼                         ▼
//!                           ┌──────────────────┐      ┌──────────────────┐
//!                           │   UpdateQueue    │ ───▶ │    ColorSink     │
//!                           │ (render thread)  │      │  (render time)   │
//!                           └──────────────────┘      └──────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use tincture_settings::{register_listener, ListenerShape, SettingsStore};
//!
//! let store = SettingsStore::from_toml_str(
//!     "accent = 0xFF0000FF",
//!     Some(ListenerShape::OldAndNew),
//! )?;
//! let accent = register_listener(&store, "accent")?;
//! assert_eq!(accent.packed_argb(), 0xFFFF_0000);
//!
//! store.set_value("accent", 0x00FF_00FF_i64);
//! assert_eq!(accent.byte_channels(None), [0, 255, 0, 255]);
//! # Ok::<(), tincture_settings::SettingsError>(())
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod binding;
pub mod error;
pub mod queue;
pub mod source;
pub mod store;
pub mod value;

pub use binding::{register_deferred_listener, register_listener};
pub use error::{SettingsError, SettingsResult};
pub use queue::{ColorUpdate, UpdateQueue, UpdateSender};
pub use source::{ChangeListener, ListenerShape, NewValueCallback, OldAndNewCallback, SettingsSource};
pub use store::SettingsStore;
pub use value::color_input_from_value;
