//! Core abstractions for streamscope.
//!
//! This crate provides the fundamental types used throughout streamscope:
//! - [`ChannelEntity`] and the player-event reducer
//! - [`SceneObject`] model written by the layout engine
//! - [`SceneGraph`] name-keyed registry and the [`SceneRenderer`] seam
//! - Viewport/focus state and configuration options
//! - The [`MetadataLookup`] seam for the channel-metadata service

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod channel;
pub mod error;
pub mod graph;
pub mod metadata;
pub mod object;
pub mod options;
pub mod viewport;

pub use channel::{reduce, ChannelEntity, LiveState, PlayerEffect, PlayerEvent, StreamObjects};
pub use error::{Result, StreamscopeError};
pub use graph::{SceneGraph, SceneRenderer};
pub use metadata::{ChannelMetadata, MetadataLookup};
pub use object::{LightState, MaterialState, SceneObject, SceneObjectKind};
pub use options::Options;
pub use viewport::{DisplayMode, ViewportState, PANEL_ASPECT};

// Re-export glam types for convenience
pub use glam::{Mat4, Vec2, Vec3};
