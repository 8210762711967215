//! streamscope: a layout and state engine for a 3D multi-stream viewer.
//!
//! streamscope positions live video streams as 3D panels: a grid, or a
//! horizontally aligned "carousel" scrolled by a focus index. It owns the
//! ordered channel collection, the per-stream layout math, and the
//! state-dependent visuals; the actual renderer and the video-embed widget
//! are external collaborators reached through the
//! [`SceneRenderer`](streamscope_core::SceneRenderer) and
//! [`MetadataLookup`] seams.
//!
//! # Quick Start
//!
//! ```no_run
//! use streamscope::{FocusShift, HelixClient, HelixConfig, Options, SceneController};
//!
//! fn main() -> streamscope::Result<()> {
//!     streamscope::init_logging();
//!
//!     let metadata = HelixClient::new(HelixConfig::from_env()?)?;
//!     let mut controller =
//!         SceneController::new(metadata, Options::default(), 1920.0, 1080.0, 1080.0);
//!
//!     controller.add_channel("somechannel")?;
//!     controller.add_channel("otherchannel")?;
//!     controller.shift_focus(FocusShift::Next);
//!
//!     // The renderer reads the entities' object fields on its frame tick.
//!     for entity in controller.channels() {
//!         println!("{} at {}", entity.name(), entity.objects.panel.position);
//!     }
//!     Ok(())
//! }
//! ```

mod controller;
mod helix;

pub use controller::{FocusShift, SceneController};
pub use helix::{HelixClient, HelixConfig, DEFAULT_BASE_URL};

// Re-export core types
pub use streamscope_core::{
    channel::{
        reduce, ChannelEntity, LiveState, PlayerEffect, PlayerEvent, StreamObjects,
    },
    error::{Result, StreamscopeError},
    graph::{SceneGraph, SceneRenderer},
    metadata::{ChannelMetadata, MetadataLookup},
    object::{LightState, MaterialState, SceneObject, SceneObjectKind},
    options::Options,
    viewport::{DisplayMode, ViewportState},
    Mat4, Vec2, Vec3,
};

// Re-export layout types
pub use streamscope_layout::{Camera, Stage, KEY_LIGHT_INTENSITY};

/// Initializes env_logger for binaries and demos. Safe to call twice.
pub fn init_logging() {
    let _ = env_logger::try_init();
}
