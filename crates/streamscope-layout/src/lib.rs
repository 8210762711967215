//! Layout engine for streamscope.
//!
//! Everything here is deterministic geometry over
//! [`ChannelEntity`](streamscope_core::ChannelEntity) slices and the
//! viewport state: per-stream placement ([`layout`]), camera framing
//! ([`camera`]), and environment dressing ([`stage`]). No function in this
//! crate fails or touches anything beyond the derived fields it owns.

// Index/size conversions to f32 are part of the layout math
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::must_use_candidate)]

pub mod camera;
pub mod layout;
pub mod stage;

pub use camera::Camera;
pub use layout::recompute;
pub use stage::{Stage, KEY_LIGHT_INTENSITY};
