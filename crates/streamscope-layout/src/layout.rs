//! Per-stream placement and sizing.
//!
//! [`recompute`] is the layout engine's single operation: a pure pass over
//! the ordered entity slice that rewrites each entity's derived fields from
//! the current viewport state. The renderer picks the results up on its
//! next frame tick.

use glam::Vec3;
use log::trace;
use streamscope_core::channel::ChannelEntity;
use streamscope_core::viewport::{DisplayMode, ViewportState, PANEL_ASPECT};

/// Divisor turning the panel height into the label height.
const LABEL_HEIGHT_DIVISOR: f32 = 20.0;
/// Indicator-shell height relative to the label height.
const SHELL_HEIGHT_FACTOR: f32 = 1.8;
/// Divisor turning the viewport width into the aligned-mode gutter.
const GUTTER_DIVISOR: f32 = 6.0;
/// Shadow plane sits just behind the panel in aligned mode.
const SHADOW_DEPTH: f32 = -1.0;

/// Recomputes every entity's size and position from the viewport state.
///
/// Idempotent and infallible; out-of-range focus indices and a zero
/// `streams_per_line` are excluded by the controller's invariants.
pub fn recompute(entities: &mut [ChannelEntity], viewport: &ViewportState) {
    trace!(
        "layout pass: {} entities, mode {:?}, focus {}",
        entities.len(),
        viewport.display_mode,
        viewport.focus_index
    );
    for (index, entity) in entities.iter_mut().enumerate() {
        update_resolution(entity, viewport);
        update_position(entity, index, viewport);
    }
}

/// Viewport fractions of one layout cell, aspect-corrected to 16:9.
///
/// In grid mode each cell takes `1/streams_per_line` of the corrected
/// extent; aligned mode uses the full extent.
fn cell_fractions(viewport: &ViewportState) -> (f32, f32) {
    let divider = match viewport.display_mode {
        DisplayMode::Grid => viewport.streams_per_line as f32,
        DisplayMode::Aligned => 1.0,
    };
    if viewport.aspect_ratio() > PANEL_ASPECT {
        let desired_width = viewport.height * PANEL_ASPECT;
        ((desired_width / viewport.width) / divider, 1.0 / divider)
    } else {
        let desired_height = viewport.width / PANEL_ASPECT;
        (1.0 / divider, (desired_height / viewport.height) / divider)
    }
}

fn update_resolution(entity: &mut ChannelEntity, viewport: &ViewportState) {
    let (width_fraction, height_fraction) = cell_fractions(viewport);
    entity.set_viewport_fractions(width_fraction, height_fraction);

    let w = viewport.width * width_fraction;
    let h = viewport.height * height_fraction;
    let name_len = entity.name().chars().count() as f32;

    let objects = &mut entity.objects;
    objects.panel.scale = Vec3::new(w, h, 1.0);
    objects.shadow.scale = Vec3::new(w - 1.0, h - 1.0, 1.0);
    objects.reflection.scale = Vec3::new(w, h, 1.0);

    let label = h / LABEL_HEIGHT_DIVISOR;
    objects.label.scale = Vec3::new(label, label, 1.0);

    let shell_width = label * name_len;
    let shell_height = label * SHELL_HEIGHT_FACTOR;
    objects.indicator.scale = Vec3::new(shell_width, shell_height, shell_height);
    if let Some(light) = &mut objects.indicator_light.light {
        light.distance = shell_width / 2.0;
    }
}

fn update_position(entity: &mut ChannelEntity, index: usize, viewport: &ViewportState) {
    let w = viewport.width * entity.width_fraction();
    let h = viewport.height * entity.height_fraction();
    let objects = &mut entity.objects;

    match viewport.display_mode {
        DisplayMode::Grid => {
            // Supplementary objects are aligned-mode dressing; grid mode
            // places the panel and its shadow only.
            let per_line = viewport.streams_per_line as usize;
            let column = index % per_line;
            let row = index / per_line;
            let most_left = -w * (per_line as f32 - 1.0) / 2.0;
            let x = most_left + w * column as f32;
            let y = -(row as f32) * h;
            objects.panel.position = Vec3::new(x, y, 0.0);
            objects.shadow.position = Vec3::new(x, y, 0.0);
        }
        DisplayMode::Aligned => {
            let stride = w + viewport.width / GUTTER_DIVISOR;
            let x = stride * (index as f32 - viewport.focus_index);

            let panel_y = h / 2.0;
            objects.panel.position = Vec3::new(x, panel_y, 0.0);
            objects.shadow.position = Vec3::new(x, panel_y, SHADOW_DEPTH);

            let reflection_h = objects.reflection.scale.y;
            objects.reflection.position = Vec3::new(x, panel_y - (reflection_h + h) / 2.0, 0.0);

            let label_h = objects.label.scale.y;
            let label_y = panel_y + (label_h + h) / 2.0;
            objects.label.position = Vec3::new(x, label_y, 0.0);

            let shell = objects.indicator.scale;
            let shell_y = label_y + shell.y / 4.0;
            objects.indicator.position = Vec3::new(x, shell_y, 0.0);
            objects.indicator_light.position = Vec3::new(x, shell_y, -shell.z / 2.0);
        }
    }
}
