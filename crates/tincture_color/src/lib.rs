//! # TINCTURE Color
//!
//! One RGBA color kept in four encodings at once:
//! - byte channels `[u8; 4]`
//! - normalized channels `[f32; 4]`
//! - packed `0xRRGGBBAA`
//! - packed `0xAARRGGBB` (for back-ends that want alpha first)
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐    set()    ┌──────────────┐   apply()   ┌──────────────┐
//! │  ColorInput  │ ──────────▶ │  ColorValue  │ ──────────▶ │  ColorSink   │
//! │ packed/array │             │ 4 encodings  │             │ (render API) │
//! └──────────────┘             └──────┬───────┘             └──────────────┘
//!                                     │
//!                              ┌──────┴───────┐
//!                              │ SharedColor  │  ◀── live settings bindings
//!                              └──────────────┘
//! ```
//!
//! All four encodings are recomputed together by [`ColorValue::set`]; no
//! getter ever packs or divides at draw time.
//!
//! ## Example
//!
//! ```rust
//! use tincture_color::{ColorValue, ops};
//!
//! let red = ColorValue::new([255, 0, 0, 255]);
//! assert_eq!(red.packed_rgba(), 0xFF00_00FF);
//! assert_eq!(red.packed_argb(), 0xFFFF_0000);
//!
//! let mut calls: Vec<[f32; 4]> = Vec::new();
//! ops::apply_sink_255(&mut calls, [255u8, 255, 0, 0]);
//! assert_eq!(calls, vec![[1.0, 1.0, 0.0, 0.0]]);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod error;
pub mod ops;
pub mod raw;
pub mod shared;
pub mod sink;
pub mod value;

pub use error::{ColorError, ColorResult};
pub use ops::ColorRef;
pub use raw::RawColor;
pub use shared::SharedColor;
pub use sink::ColorSink;
pub use value::{classify_channels, pack, unpack, ChannelScale, ColorInput, ColorValue};
