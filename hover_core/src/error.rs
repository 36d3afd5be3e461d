use thiserror::Error;

use crate::shared_types::PlaybackAction;

/// Failures while turning a hover into a play or pause call.
///
/// None of these are recovered by the controller; they are handed back to
/// whoever dispatched the event.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    #[error("no media element with id `{audio_id}`")]
    Unresolved { audio_id: String },

    #[error("song thumbnail has no `data-song-id` attribute")]
    MissingSongId,

    #[error("media element `{audio_id}` failed to {action}: {message}")]
    Media {
        audio_id: String,
        action: PlaybackAction,
        message: String,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogueError {
    #[error("song id `{0}` appears more than once")]
    DuplicateSongId(String),

    #[error("song `{0}` has an empty id")]
    EmptySongId(String),
}
