//! Configuration options for a stream scene.

use serde::{Deserialize, Serialize};

use crate::viewport::DisplayMode;

/// Global configuration options, fixed at controller construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Options {
    /// Initial layout arrangement.
    pub display_mode: DisplayMode,

    /// Streams per row in grid mode.
    pub streams_per_line: u32,

    /// Camera field of view in degrees.
    pub fov_degrees: f32,

    /// Multiplier applied to the framing distance when placing the camera.
    pub camera_distance_factor: f32,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            display_mode: DisplayMode::Aligned,
            streams_per_line: 2,
            fov_degrees: 45.0,
            camera_distance_factor: 1.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_default() {
        let options = Options::default();
        assert_eq!(options.display_mode, DisplayMode::Aligned);
        assert_eq!(options.streams_per_line, 2);
        assert_eq!(options.fov_degrees, 45.0);
    }

    #[test]
    fn test_options_roundtrip() {
        let options = Options {
            display_mode: DisplayMode::Grid,
            streams_per_line: 3,
            ..Options::default()
        };
        let json = serde_json::to_string(&options).unwrap();
        let back: Options = serde_json::from_str(&json).unwrap();
        assert_eq!(back.display_mode, DisplayMode::Grid);
        assert_eq!(back.streams_per_line, 3);
    }
}
