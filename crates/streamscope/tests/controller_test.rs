//! Integration tests for the scene controller, run against a canned
//! metadata source so no network is involved.

use streamscope::{
    ChannelMetadata, DisplayMode, FocusShift, LiveState, MetadataLookup, Options, PlayerEffect,
    PlayerEvent, SceneController, Vec2, KEY_LIGHT_INTENSITY,
};

/// Canned lookup: knows every name except `"ghost"`; `"nobanner"` has no
/// offline snapshot.
struct StubLookup;

impl MetadataLookup for StubLookup {
    fn lookup(&self, name: &str) -> streamscope::Result<Option<ChannelMetadata>> {
        if name == "ghost" {
            return Ok(None);
        }
        Ok(Some(ChannelMetadata {
            display_name: name.to_uppercase(),
            avatar_image_url: format!("https://img.example/{name}.png"),
            offline_image_url: (name != "nobanner")
                .then(|| format!("https://img.example/{name}-offline.png")),
        }))
    }
}

fn controller() -> SceneController<StubLookup> {
    SceneController::new(StubLookup, Options::default(), 1920.0, 1080.0, 1080.0)
}

fn with_channels(names: &[&str]) -> SceneController<StubLookup> {
    let mut c = controller();
    for name in names {
        assert!(c.add_channel(name).unwrap());
    }
    c
}

#[test]
fn test_add_channel_registers_objects() {
    let c = with_channels(&["alpha"]);

    assert_eq!(c.channel_count(), 1);
    assert_eq!(c.scene().len(), 6);
    assert!(c.scene().contains("alpha-panel"));
    assert!(c.scene().contains("alpha-indicator-light"));
    assert_eq!(c.entity("alpha").unwrap().metadata().display_name, "ALPHA");
}

#[test]
fn test_add_duplicate_is_noop() {
    let mut c = with_channels(&["alpha"]);

    assert!(!c.add_channel("alpha").unwrap());
    assert_eq!(c.channel_count(), 1);
    assert_eq!(c.scene().len(), 6);
}

#[test]
fn test_add_unknown_channel_fails_cleanly() {
    let mut c = controller();

    assert!(!c.add_channel("ghost").unwrap());
    assert_eq!(c.channel_count(), 0);
    assert!(c.scene().is_empty());
}

#[test]
fn test_add_empty_name_is_noop() {
    let mut c = controller();
    assert!(!c.add_channel("").unwrap());
    assert_eq!(c.channel_count(), 0);
}

#[test]
fn test_key_light_tracks_channel_count() {
    let mut c = controller();
    assert_eq!(c.stage().key_light.intensity, 0.0);

    c.add_channel("alpha").unwrap();
    assert_eq!(c.stage().key_light.intensity, KEY_LIGHT_INTENSITY);

    c.remove_channel();
    assert_eq!(c.stage().key_light.intensity, 0.0);
}

#[test]
fn test_remove_on_empty_is_noop() {
    let mut c = controller();
    assert!(!c.remove_channel());
    assert_eq!(c.focus_index(), 0.0);
}

#[test]
fn test_remove_unregisters_and_clamps_focus() {
    let mut c = with_channels(&["alpha", "beta", "gamma"]);
    c.shift_focus(FocusShift::Next);
    assert_eq!(c.focus_index(), 1.0);

    assert!(c.remove_channel());
    assert_eq!(c.channel_count(), 2);
    assert_eq!(c.focus_index(), 0.0);
    assert!(!c.scene().contains("beta-panel"));
    let names: Vec<_> = c.channel_names().collect();
    assert_eq!(names, vec!["alpha", "gamma"]);

    // Focus at 0 stays at 0 after another removal.
    assert!(c.remove_channel());
    assert_eq!(c.focus_index(), 0.0);
}

#[test]
fn test_remove_blocked_during_half_shift() {
    let mut c = with_channels(&["alpha", "beta"]);
    c.shift_focus(FocusShift::HalfNext);
    assert!(c.is_half_shift_active());
    assert_eq!(c.focus_index(), 0.5);

    assert!(!c.remove_channel());
    assert_eq!(c.channel_count(), 2);
    assert_eq!(c.focus_index(), 0.5);
    assert!(c.is_half_shift_active());
}

#[test]
fn test_half_shift_completes_and_allows_remove() {
    let mut c = with_channels(&["alpha", "beta"]);
    c.shift_focus(FocusShift::HalfNext);
    c.shift_focus(FocusShift::HalfNext);

    assert!(!c.is_half_shift_active());
    assert_eq!(c.focus_index(), 1.0);
    assert!(c.remove_channel());
    assert_eq!(c.channel_count(), 1);
}

#[test]
fn test_shift_clamps_at_boundaries() {
    let mut c = with_channels(&["alpha", "beta"]);

    assert!(!c.shift_focus(FocusShift::Prev));
    assert_eq!(c.focus_index(), 0.0);

    assert!(c.shift_focus(FocusShift::Next));
    assert!(!c.shift_focus(FocusShift::Next));
    assert_eq!(c.focus_index(), 1.0);

    assert!(!c.shift_focus(FocusShift::HalfNext));
    assert!(!c.is_half_shift_active());
}

#[test]
fn test_shift_on_empty_is_noop() {
    let mut c = controller();
    assert!(!c.shift_focus(FocusShift::Next));
    assert!(!c.shift_focus(FocusShift::HalfPrev));
}

#[test]
fn test_focused_entity_sits_at_origin() {
    let mut c = with_channels(&["alpha", "beta", "gamma"]);
    c.shift_focus(FocusShift::Next);

    let focused = c.entity("beta").unwrap();
    assert!(focused.objects.panel.position.x.abs() < 1e-3);

    let left = c.entity("alpha").unwrap().objects.panel.position.x;
    let right = c.entity("gamma").unwrap().objects.panel.position.x;
    assert!(left < 0.0 && right > 0.0);
}

#[test]
fn test_grid_mode_layout() {
    let mut c = with_channels(&["alpha", "beta", "gamma"]);
    c.set_display_mode(DisplayMode::Grid);

    let y0 = c.channels()[0].objects.panel.position.y;
    let y2 = c.channels()[2].objects.panel.position.y;
    assert_eq!(y0, 0.0);
    assert!(y2 < 0.0, "third entity wraps to the second row");

    // Panels shrink to the grid cell.
    assert!((c.channels()[0].width_fraction() - 0.5).abs() < 1e-4);
}

#[test]
fn test_player_events_drive_visuals() {
    let mut c = with_channels(&["alpha", "nobanner"]);

    assert!(c.handle_player_event("alpha", PlayerEvent::Offline).is_none());
    let alpha = c.entity("alpha").unwrap();
    assert_eq!(alpha.live_state(), LiveState::Offline);
    assert_eq!(
        alpha.objects.reflection.material.texture_url.as_deref(),
        Some("https://img.example/alpha-offline.png")
    );
    assert_eq!(alpha.objects.reflection.material.texture_repeat, Vec2::ONE);

    // Without a snapshot the avatar keeps showing.
    c.handle_player_event("nobanner", PlayerEvent::Ended);
    let nobanner = c.entity("nobanner").unwrap();
    assert_eq!(nobanner.live_state(), LiveState::Offline);
    assert_eq!(
        nobanner.objects.reflection.material.texture_url.as_deref(),
        Some("https://img.example/nobanner.png")
    );
}

#[test]
fn test_playing_event_requests_clear_blur() {
    let mut c = with_channels(&["alpha"]);
    assert_eq!(
        c.handle_player_event("alpha", PlayerEvent::Playing),
        Some(PlayerEffect::ClearBlur)
    );
}

#[test]
fn test_event_for_unknown_channel_is_noop() {
    let mut c = with_channels(&["alpha"]);
    assert!(c.handle_player_event("ghost", PlayerEvent::Offline).is_none());
    assert_eq!(c.entity("alpha").unwrap().live_state(), LiveState::Online);
}

#[test]
fn test_resize_reframes_everything() {
    let mut c = with_channels(&["alpha"]);
    let panel_before = c.entity("alpha").unwrap().objects.panel.scale;

    c.on_viewport_resize(1280.0, 720.0, 720.0);

    assert!((c.viewport().fixed_height() - 720.0).abs() < 1e-2);
    assert!((c.camera().target.y - 360.0).abs() < 1e-2);
    assert_eq!(c.camera().far, 1280.0 * 4.0);
    let panel_after = c.entity("alpha").unwrap().objects.panel.scale;
    assert!(panel_after.x < panel_before.x);
    assert_eq!(c.stage().background.scale, 1280.0 * 2.0);
}

#[test]
fn test_streams_per_line_guarded() {
    let mut c = with_channels(&["alpha", "beta"]);
    c.set_display_mode(DisplayMode::Grid);
    c.set_streams_per_line(0);
    assert_eq!(c.viewport().streams_per_line, 2);

    c.set_streams_per_line(3);
    assert_eq!(c.viewport().streams_per_line, 3);
}
