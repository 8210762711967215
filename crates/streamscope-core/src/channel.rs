//! Channel entities and their player-event reducer.

use glam::Vec2;
use log::debug;

use crate::metadata::ChannelMetadata;
use crate::object::{LightState, SceneObject, SceneObjectKind};

/// Indicator-light intensity while the channel is live.
pub const ONLINE_LIGHT_INTENSITY: f32 = 35.0;
/// Indicator-light intensity while the channel is offline.
pub const OFFLINE_LIGHT_INTENSITY: f32 = 10.0;
/// Indicator-shell emissive brightness while live.
pub const ONLINE_SHELL_EMISSIVE: f32 = 0.8;
/// Indicator-shell emissive brightness while offline.
pub const OFFLINE_SHELL_EMISSIVE: f32 = 0.1;
/// Label emissive brightness while live.
pub const ONLINE_LABEL_EMISSIVE: f32 = 0.9;
/// Label emissive brightness while offline.
pub const OFFLINE_LABEL_EMISSIVE: f32 = 0.3;

/// Vertical fraction of the avatar texture kept when cropping it to a
/// 16:9 band for the reflection plane.
pub const AVATAR_BAND: f32 = 9.0 / 16.0;

const SHADOW_OPACITY: f32 = 0.1;
const SHELL_OPACITY: f32 = 0.7;

/// Live/offline state of a channel, driven by embed-player events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LiveState {
    /// The channel is broadcasting.
    #[default]
    Online,
    /// The channel is not broadcasting.
    Offline,
}

/// Lifecycle message emitted by the video-embed widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerEvent {
    /// The stream came online.
    Online,
    /// The stream went offline.
    Offline,
    /// The broadcast ended; treated as going offline.
    Ended,
    /// Playback started.
    Playing,
    /// Playback paused.
    Paused,
}

/// Side effect requested by the reducer, consumed outside the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerEffect {
    /// Drop the blur overlay from the embedded player element.
    ClearBlur,
}

/// Pure reducer mapping a player event onto the next live state.
pub fn reduce(state: LiveState, event: PlayerEvent) -> (LiveState, Option<PlayerEffect>) {
    match event {
        PlayerEvent::Online => (LiveState::Online, None),
        PlayerEvent::Offline | PlayerEvent::Ended => (LiveState::Offline, None),
        PlayerEvent::Playing => (state, Some(PlayerEffect::ClearBlur)),
        PlayerEvent::Paused => (state, None),
    }
}

/// The six renderables making up one stream's visual group.
#[derive(Debug, Clone)]
pub struct StreamObjects {
    /// The embedded video panel.
    pub panel: SceneObject,
    /// Shadow-casting plane behind the panel.
    pub shadow: SceneObject,
    /// Mirrored image band below the panel.
    pub reflection: SceneObject,
    /// Channel display-name text.
    pub label: SceneObject,
    /// Backlit shell around the label.
    pub indicator: SceneObject,
    /// Point light tied to the indicator.
    pub indicator_light: SceneObject,
}

impl StreamObjects {
    fn new(channel: &str, metadata: &ChannelMetadata) -> Self {
        let mut shadow = SceneObject::new(channel, SceneObjectKind::ShadowPlane);
        shadow.material.opacity = SHADOW_OPACITY;

        let mut reflection = SceneObject::new(channel, SceneObjectKind::ReflectionPlane);
        reflection.material.texture_url = Some(metadata.avatar_image_url.clone());
        reflection.material.texture_repeat = Vec2::new(1.0, AVATAR_BAND);
        reflection.material.texture_offset = Vec2::new(0.0, AVATAR_BAND / 2.0);

        let mut label = SceneObject::new(channel, SceneObjectKind::Label);
        label.material.emissive_intensity = OFFLINE_LABEL_EMISSIVE;

        let mut indicator = SceneObject::new(channel, SceneObjectKind::IndicatorShell);
        indicator.material.emissive_intensity = OFFLINE_SHELL_EMISSIVE;
        indicator.material.opacity = SHELL_OPACITY;

        let mut indicator_light = SceneObject::new(channel, SceneObjectKind::IndicatorLight);
        indicator_light.light = Some(LightState {
            intensity: OFFLINE_LIGHT_INTENSITY,
            distance: 0.0,
        });

        Self {
            panel: SceneObject::new(channel, SceneObjectKind::VideoPanel),
            shadow,
            reflection,
            label,
            indicator,
            indicator_light,
        }
    }

    /// Returns an iterator over the six objects, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &SceneObject> {
        [
            &self.panel,
            &self.shadow,
            &self.reflection,
            &self.label,
            &self.indicator,
            &self.indicator_light,
        ]
        .into_iter()
    }

    /// Returns an iterator over the objects' names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|o| o.name.as_str())
    }
}

/// One tracked live-stream channel and its renderable objects.
///
/// The channel name is the entity's stable identity; its position in the
/// controller's ordered sequence is transient and recomputed every layout
/// pass.
#[derive(Debug, Clone)]
pub struct ChannelEntity {
    name: String,
    metadata: ChannelMetadata,
    live_state: LiveState,
    /// Renderables written by the layout engine and read by the renderer.
    pub objects: StreamObjects,
    width_fraction: f32,
    height_fraction: f32,
}

impl ChannelEntity {
    /// Creates an entity from fetched metadata.
    pub fn new(name: impl Into<String>, metadata: ChannelMetadata) -> Self {
        let name = name.into();
        let objects = StreamObjects::new(&name, &metadata);
        Self {
            name,
            metadata,
            live_state: LiveState::default(),
            objects,
            width_fraction: 0.0,
            height_fraction: 0.0,
        }
    }

    /// Returns the channel identifier.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the immutable channel metadata.
    #[must_use]
    pub fn metadata(&self) -> &ChannelMetadata {
        &self.metadata
    }

    /// Returns the current live state.
    #[must_use]
    pub fn live_state(&self) -> LiveState {
        self.live_state
    }

    /// Fraction of the viewport width the panel occupies.
    #[must_use]
    pub fn width_fraction(&self) -> f32 {
        self.width_fraction
    }

    /// Fraction of the viewport height the panel occupies.
    #[must_use]
    pub fn height_fraction(&self) -> f32 {
        self.height_fraction
    }

    /// Stores the viewport fractions computed by the layout pass.
    pub fn set_viewport_fractions(&mut self, width: f32, height: f32) {
        self.width_fraction = width;
        self.height_fraction = height;
    }

    /// Applies an embed-player event through the reducer.
    ///
    /// Returns the side effect requested by the event, if any.
    pub fn handle_event(&mut self, event: PlayerEvent) -> Option<PlayerEffect> {
        let (next, effect) = reduce(self.live_state, event);
        self.set_live_state(next);
        effect
    }

    /// Sets the live state, updating the state-dependent visuals.
    ///
    /// The reflection texture switches only on an actual transition; the
    /// indicator intensities are rewritten from the current state either
    /// way, which keeps repeated same-state events idempotent.
    pub fn set_live_state(&mut self, next: LiveState) {
        let previous = self.live_state;
        self.live_state = next;
        if previous != next {
            debug!("channel '{}' {previous:?} -> {next:?}", self.name);
            self.update_reflection(previous);
        }
        self.update_indicator();
    }

    /// Switches the reflection band after a live-state transition.
    fn update_reflection(&mut self, previous: LiveState) {
        let material = &mut self.objects.reflection.material;
        match (previous, self.live_state) {
            (LiveState::Online, LiveState::Offline) => {
                // No offline snapshot: keep whatever is showing.
                let Some(url) = &self.metadata.offline_image_url else {
                    return;
                };
                material.texture_url = Some(url.clone());
                material.texture_repeat = Vec2::ONE;
                material.texture_offset = Vec2::ZERO;
                self.objects.reflection.flipped = true;
            }
            (LiveState::Offline, LiveState::Online) => {
                material.texture_url = Some(self.metadata.avatar_image_url.clone());
                material.texture_repeat = Vec2::new(1.0, AVATAR_BAND);
                material.texture_offset = Vec2::new(0.0, AVATAR_BAND / 2.0);
                self.objects.reflection.flipped = false;
            }
            _ => {}
        }
    }

    fn update_indicator(&mut self) {
        let (light, shell, label) = match self.live_state {
            LiveState::Online => (
                ONLINE_LIGHT_INTENSITY,
                ONLINE_SHELL_EMISSIVE,
                ONLINE_LABEL_EMISSIVE,
            ),
            LiveState::Offline => (
                OFFLINE_LIGHT_INTENSITY,
                OFFLINE_SHELL_EMISSIVE,
                OFFLINE_LABEL_EMISSIVE,
            ),
        };
        if let Some(state) = &mut self.objects.indicator_light.light {
            state.intensity = light;
        }
        self.objects.indicator.material.emissive_intensity = shell;
        self.objects.label.material.emissive_intensity = label;
    }
}
