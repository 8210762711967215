//! Builds a three-channel carousel against a canned metadata source and
//! prints what the renderer would read each frame.
//!
//! Run with: cargo run --example stream_wall

use streamscope::{
    ChannelMetadata, FocusShift, MetadataLookup, Options, SceneController,
};

struct CannedLookup;

impl MetadataLookup for CannedLookup {
    fn lookup(&self, name: &str) -> streamscope::Result<Option<ChannelMetadata>> {
        Ok(Some(ChannelMetadata {
            display_name: name.to_uppercase(),
            avatar_image_url: format!("https://img.example/{name}.png"),
            offline_image_url: Some(format!("https://img.example/{name}-offline.png")),
        }))
    }
}

fn main() -> streamscope::Result<()> {
    streamscope::init_logging();

    let mut controller =
        SceneController::new(CannedLookup, Options::default(), 1920.0, 1080.0, 1080.0);

    for name in ["alpha", "beta", "gamma"] {
        controller.add_channel(name)?;
    }
    controller.shift_focus(FocusShift::Next);

    println!(
        "focus {} | key light {}",
        controller.focus_index(),
        controller.stage().key_light.intensity
    );
    for entity in controller.channels() {
        let panel = &entity.objects.panel;
        println!(
            "{:>6}: panel at ({:8.1}, {:6.1}), {:.0}x{:.0}",
            entity.name(),
            panel.position.x,
            panel.position.y,
            panel.scale.x,
            panel.scale.y
        );
    }
    Ok(())
}
