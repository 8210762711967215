//! Environment dressing around the stream wall.
//!
//! The floor plane, background dome, and key light are sized from the
//! viewport; the key light is lit only while at least one channel is
//! displayed.

use glam::{Vec2, Vec3};

use streamscope_core::viewport::ViewportState;

use crate::camera::Camera;

/// Key-light intensity while at least one channel is displayed.
pub const KEY_LIGHT_INTENSITY: f32 = 4.0;

const FLOOR_SCALE: Vec2 = Vec2::new(5.0, 6.0);
const FLOOR_REPEAT_DIVISOR: f32 = 50.0;
const DOME_REPEAT_DIVISOR: f32 = 60.0;

/// Floor plane under the stream wall.
#[derive(Debug, Clone, PartialEq)]
pub struct FloorPlane {
    /// World scale.
    pub scale: Vec2,
    /// Texture repeat on both axes.
    pub texture_repeat: Vec2,
    /// World position.
    pub position: Vec3,
}

/// Background dome enclosing the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundDome {
    /// Uniform world scale.
    pub scale: f32,
    /// Texture repeat on both axes.
    pub texture_repeat: Vec2,
}

/// Key light aimed at the stream wall.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyLight {
    /// Intensity; zero while no channel is displayed.
    pub intensity: f32,
    /// World position.
    pub position: Vec3,
    /// Maximum range.
    pub distance: f32,
}

/// Environment state recomputed on resize and on channel-count change.
#[derive(Debug, Clone, PartialEq)]
pub struct Stage {
    /// Floor plane.
    pub floor: FloorPlane,
    /// Background dome.
    pub background: BackgroundDome,
    /// Key light.
    pub key_light: KeyLight,
}

impl Default for Stage {
    fn default() -> Self {
        Self {
            floor: FloorPlane {
                scale: Vec2::ZERO,
                texture_repeat: Vec2::ONE,
                position: Vec3::ZERO,
            },
            background: BackgroundDome {
                scale: 0.0,
                texture_repeat: Vec2::ONE,
            },
            key_light: KeyLight {
                intensity: 0.0,
                position: Vec3::ZERO,
                distance: 0.0,
            },
        }
    }
}

impl Stage {
    /// Resizes the dressing for the viewport and channel count.
    pub fn update(&mut self, viewport: &ViewportState, camera: &Camera, channel_count: usize) {
        let max_res = viewport.width.max(viewport.height);

        self.floor.scale = FLOOR_SCALE * max_res;
        self.floor.texture_repeat = Vec2::splat(max_res / FLOOR_REPEAT_DIVISOR);
        self.floor.position = Vec3::ZERO;

        self.background.scale = viewport.width * 2.0;
        self.background.texture_repeat = Vec2::splat(max_res / DOME_REPEAT_DIVISOR);

        let dist = camera.framing_distance(viewport.outer_height);
        self.key_light.intensity = if channel_count == 0 {
            0.0
        } else {
            KEY_LIGHT_INTENSITY
        };
        self.key_light.position = Vec3::new(0.0, viewport.fixed_height() * 1.5, dist / 2.0);
        self.key_light.distance = viewport.fixed_height() * 6.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (ViewportState, Camera) {
        let viewport = ViewportState::new(1920.0, 1080.0, 1080.0);
        let camera = Camera::new(viewport.aspect_ratio());
        (viewport, camera)
    }

    #[test]
    fn test_key_light_follows_channel_count() {
        let (viewport, camera) = setup();
        let mut stage = Stage::default();

        stage.update(&viewport, &camera, 0);
        assert_eq!(stage.key_light.intensity, 0.0);

        stage.update(&viewport, &camera, 3);
        assert_eq!(stage.key_light.intensity, KEY_LIGHT_INTENSITY);

        stage.update(&viewport, &camera, 0);
        assert_eq!(stage.key_light.intensity, 0.0);
    }

    #[test]
    fn test_floor_and_dome_track_resolution() {
        let (viewport, camera) = setup();
        let mut stage = Stage::default();
        stage.update(&viewport, &camera, 1);

        assert_eq!(stage.floor.scale, Vec2::new(1920.0 * 5.0, 1920.0 * 6.0));
        assert_eq!(stage.floor.texture_repeat, Vec2::splat(1920.0 / 50.0));
        assert_eq!(stage.background.scale, 1920.0 * 2.0);
        assert_eq!(stage.background.texture_repeat, Vec2::splat(1920.0 / 60.0));
    }

    #[test]
    fn test_key_light_placement() {
        let (viewport, camera) = setup();
        let mut stage = Stage::default();
        stage.update(&viewport, &camera, 1);

        assert_eq!(stage.key_light.position.y, viewport.fixed_height() * 1.5);
        assert!(stage.key_light.position.z > 0.0);
        assert_eq!(stage.key_light.distance, viewport.fixed_height() * 6.0);
    }
}
