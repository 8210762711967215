//! Scene controller: the ordered channel collection and command dispatch.

use log::{debug, info, warn};

use streamscope_core::channel::{ChannelEntity, PlayerEffect, PlayerEvent};
use streamscope_core::error::Result;
use streamscope_core::graph::{SceneGraph, SceneRenderer};
use streamscope_core::metadata::MetadataLookup;
use streamscope_core::options::Options;
use streamscope_core::viewport::{DisplayMode, ViewportState};
use streamscope_layout::{recompute, Camera, Stage};

/// A focus-shift command.
///
/// Whole steps move the focus by one entity. Half steps move it halfway and
/// toggle the transitional half-shift state; the visual easing between the
/// two neighbors is the renderer's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusShift {
    /// Focus the next entity.
    Next,
    /// Focus the previous entity.
    Prev,
    /// Move halfway toward the next entity.
    HalfNext,
    /// Move halfway toward the previous entity.
    HalfPrev,
}

impl FocusShift {
    fn delta(self) -> f32 {
        match self {
            FocusShift::Next => 1.0,
            FocusShift::Prev => -1.0,
            FocusShift::HalfNext => 0.5,
            FocusShift::HalfPrev => -0.5,
        }
    }

    fn is_half(self) -> bool {
        matches!(self, FocusShift::HalfNext | FocusShift::HalfPrev)
    }
}

/// Owns the displayed channels, the viewport state, and the scene-facing
/// registrations. All user commands go through here.
///
/// Single-threaded and cooperative: the renderer's frame tick is the only
/// clock, and commands run to completion between ticks. The one blocking
/// point is the metadata lookup inside [`SceneController::add_channel`].
pub struct SceneController<M> {
    channels: Vec<ChannelEntity>,
    viewport: ViewportState,
    options: Options,
    scene: SceneGraph,
    camera: Camera,
    stage: Stage,
    metadata: M,
}

impl<M: MetadataLookup> SceneController<M> {
    /// Creates a controller for the given viewport pixel size.
    pub fn new(metadata: M, options: Options, width: f32, height: f32, outer_height: f32) -> Self {
        let mut viewport = ViewportState::new(width, height, outer_height);
        viewport.display_mode = options.display_mode;
        viewport.streams_per_line = options.streams_per_line.max(1);

        let mut camera = Camera::new(viewport.aspect_ratio());
        camera.set_fov_degrees(options.fov_degrees);

        let mut controller = Self {
            channels: Vec::new(),
            viewport,
            options,
            scene: SceneGraph::new(),
            camera,
            stage: Stage::default(),
            metadata,
        };
        controller.reframe();
        controller.relayout();
        controller
    }

    /// Adds a channel by name.
    ///
    /// Blocks on the metadata lookup. Empty and duplicate names, and names
    /// the lookup does not know, are silent no-ops returning `Ok(false)`.
    /// Duplicate detection happens at call time, so two overlapping calls
    /// for the same name are not guarded against each other.
    pub fn add_channel(&mut self, name: &str) -> Result<bool> {
        if name.is_empty() {
            return Ok(false);
        }
        if self.channels.iter().any(|c| c.name() == name) {
            debug!("channel '{name}' already displayed, ignoring");
            return Ok(false);
        }

        let Some(metadata) = self.metadata.lookup(name)? else {
            warn!("channel '{name}' not found, nothing added");
            return Ok(false);
        };

        let entity = ChannelEntity::new(name, metadata);
        self.scene.add_objects(entity.objects.iter())?;
        self.channels.push(entity);
        info!("channel '{name}' added ({} displayed)", self.channels.len());
        self.relayout();
        Ok(true)
    }

    /// Removes the entity at the focus index.
    ///
    /// No-op while the sequence is empty or a half shift is showing. The
    /// focus index is clamped to `max(focus - 1, 0)` afterward.
    pub fn remove_channel(&mut self) -> bool {
        if self.channels.is_empty() {
            debug!("remove ignored: no channels displayed");
            return false;
        }
        if self.viewport.half_shift_active {
            warn!("remove ignored during half shift");
            return false;
        }

        // The half-shift guard keeps the focus integer-valued here.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let index = self.viewport.focus_index as usize;
        let entity = self.channels.remove(index);
        for name in entity.objects.names() {
            self.scene.remove_object(name);
        }
        self.viewport.focus_index = (self.viewport.focus_index - 1.0).max(0.0);
        info!(
            "channel '{}' removed ({} displayed)",
            entity.name(),
            self.channels.len()
        );
        self.relayout();
        true
    }

    /// Shifts the focus; no-op past either boundary.
    pub fn shift_focus(&mut self, shift: FocusShift) -> bool {
        #[allow(clippy::cast_precision_loss)]
        let last = self.channels.len().saturating_sub(1) as f32;
        let next = self.viewport.focus_index + shift.delta();
        if self.channels.is_empty() || next < 0.0 || next > last {
            debug!("focus shift {shift:?} out of bounds, ignoring");
            return false;
        }

        self.viewport.focus_index = next;
        if shift.is_half() {
            self.viewport.half_shift_active = !self.viewport.half_shift_active;
        }
        recompute(&mut self.channels, &self.viewport);
        true
    }

    /// Applies a new viewport pixel size.
    ///
    /// Everything size-dependent is recomputed: stream layout, camera
    /// framing, and stage dressing.
    pub fn on_viewport_resize(&mut self, width: f32, height: f32, outer_height: f32) {
        self.viewport.set_pixel_size(width, height, outer_height);
        self.reframe();
        self.relayout();
        debug!("viewport resized to {width}x{height}");
    }

    /// Routes an embed-player event to the named entity.
    ///
    /// Unknown names are a no-op. Returns the side effect the event asked
    /// for, if any.
    pub fn handle_player_event(&mut self, name: &str, event: PlayerEvent) -> Option<PlayerEffect> {
        let entity = self.channels.iter_mut().find(|c| c.name() == name)?;
        entity.handle_event(event)
    }

    /// Switches the layout arrangement and relayouts.
    pub fn set_display_mode(&mut self, mode: DisplayMode) {
        self.viewport.display_mode = mode;
        self.relayout();
    }

    /// Sets the grid-mode row width. Zero is ignored.
    pub fn set_streams_per_line(&mut self, streams_per_line: u32) {
        if streams_per_line == 0 {
            warn!("streams_per_line of zero ignored");
            return;
        }
        self.viewport.streams_per_line = streams_per_line;
        self.relayout();
    }

    /// Number of displayed channels.
    #[must_use]
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Displayed channel names, in layout order.
    pub fn channel_names(&self) -> impl Iterator<Item = &str> {
        self.channels.iter().map(ChannelEntity::name)
    }

    /// The displayed entities, in layout order.
    #[must_use]
    pub fn channels(&self) -> &[ChannelEntity] {
        &self.channels
    }

    /// The entity for `name`, if displayed.
    #[must_use]
    pub fn entity(&self, name: &str) -> Option<&ChannelEntity> {
        self.channels.iter().find(|c| c.name() == name)
    }

    /// Current focus index.
    #[must_use]
    pub fn focus_index(&self) -> f32 {
        self.viewport.focus_index
    }

    /// Whether a half shift is showing.
    #[must_use]
    pub fn is_half_shift_active(&self) -> bool {
        self.viewport.half_shift_active
    }

    /// Current viewport state.
    #[must_use]
    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    /// Configuration fixed at construction.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Scene-facing registrations.
    #[must_use]
    pub fn scene(&self) -> &SceneGraph {
        &self.scene
    }

    /// Current camera framing.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Current environment dressing.
    #[must_use]
    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    fn relayout(&mut self) {
        recompute(&mut self.channels, &self.viewport);
        self.stage
            .update(&self.viewport, &self.camera, self.channels.len());
    }

    fn reframe(&mut self) {
        self.camera
            .frame_viewport(&self.viewport, self.options.camera_distance_factor);
    }
}
