//! The renderable-object model written by the engine.
//!
//! The external renderer consumes opaque objects keyed by a unique name.
//! streamscope only writes the fields below; everything else about how an
//! object is drawn (geometry, shading, the embedded player element) belongs
//! to the renderer.

use glam::{Vec2, Vec3};

/// Role of a renderable object within one stream's visual group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneObjectKind {
    /// The embedded video panel.
    VideoPanel,
    /// Shadow-casting plane sitting just behind the panel.
    ShadowPlane,
    /// Mirrored image band below the panel.
    ReflectionPlane,
    /// Channel display-name text above the panel.
    Label,
    /// Backlit shell wrapped around the label.
    IndicatorShell,
    /// Point light tied to the live-state indicator.
    IndicatorLight,
}

impl SceneObjectKind {
    /// All kinds, in registration order.
    pub const ALL: [SceneObjectKind; 6] = [
        SceneObjectKind::VideoPanel,
        SceneObjectKind::ShadowPlane,
        SceneObjectKind::ReflectionPlane,
        SceneObjectKind::Label,
        SceneObjectKind::IndicatorShell,
        SceneObjectKind::IndicatorLight,
    ];

    /// Object-name suffix, stable for the lifetime of the session.
    #[must_use]
    pub fn suffix(self) -> &'static str {
        match self {
            SceneObjectKind::VideoPanel => "panel",
            SceneObjectKind::ShadowPlane => "shadow",
            SceneObjectKind::ReflectionPlane => "reflection",
            SceneObjectKind::Label => "label",
            SceneObjectKind::IndicatorShell => "indicator",
            SceneObjectKind::IndicatorLight => "indicator-light",
        }
    }
}

/// Texture and emissive state of one object's material.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialState {
    /// Texture to sample, if any.
    pub texture_url: Option<String>,
    /// Texture repeat in UV space.
    pub texture_repeat: Vec2,
    /// Texture offset in UV space.
    pub texture_offset: Vec2,
    /// Emissive brightness.
    pub emissive_intensity: f32,
    /// Opacity in `[0, 1]`.
    pub opacity: f32,
}

impl Default for MaterialState {
    fn default() -> Self {
        Self {
            texture_url: None,
            texture_repeat: Vec2::ONE,
            texture_offset: Vec2::ZERO,
            emissive_intensity: 0.0,
            opacity: 1.0,
        }
    }
}

/// Point-light parameters for light-bearing objects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightState {
    /// Light intensity.
    pub intensity: f32,
    /// Maximum range of the light.
    pub distance: f32,
}

/// One renderable object, keyed by a unique name.
///
/// Names follow the `"{channel}-{suffix}"` convention so the renderer can
/// remove a stream's objects by name lookup after the entity is gone.
#[derive(Debug, Clone)]
pub struct SceneObject {
    /// Unique name within the scene.
    pub name: String,
    /// Role within the stream's visual group.
    pub kind: SceneObjectKind,
    /// World position.
    pub position: Vec3,
    /// World scale.
    pub scale: Vec3,
    /// Rotated half a turn around X (used to mirror the reflection band).
    pub flipped: bool,
    /// Material parameters.
    pub material: MaterialState,
    /// Light parameters, for light-bearing kinds.
    pub light: Option<LightState>,
}

impl SceneObject {
    /// Creates an object for `channel` with the kind's canonical name.
    pub fn new(channel: &str, kind: SceneObjectKind) -> Self {
        Self {
            name: format!("{channel}-{}", kind.suffix()),
            kind,
            position: Vec3::ZERO,
            scale: Vec3::ONE,
            flipped: false,
            material: MaterialState::default(),
            light: None,
        }
    }
}
