//! Channel metadata and the lookup seam.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Display metadata fetched once when a channel is added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelMetadata {
    /// Human-readable channel name.
    pub display_name: String,
    /// Profile picture, mirrored below the panel while the channel is live.
    pub avatar_image_url: String,
    /// Offline snapshot; `None` when the channel has not set one.
    pub offline_image_url: Option<String>,
}

/// Metadata-lookup service consumed by the controller.
///
/// `Ok(None)` means the channel does not exist. `Err` is reserved for
/// transport failures.
pub trait MetadataLookup {
    /// Looks up display metadata for a channel identifier.
    fn lookup(&self, name: &str) -> Result<Option<ChannelMetadata>>;
}
