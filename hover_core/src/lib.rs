//! Shared pieces of the hover-to-preview gallery: the playback controller,
//! the song catalogue types and the markup that ties thumbnails to their
//! audio elements.

pub mod controller;
pub mod error;
pub mod gallery;
pub mod shared_types;

/// Class a thumbnail must carry. Compared with exact equality against the
/// element's full class name, not as a token inside a class list.
pub const SONG_THUMBNAIL_CLASS: &str = "song-thumbnail";
/// Prefix joined to a song id to form the id of its audio element
pub const AUDIO_ID_PREFIX: &str = "audio-";
/// Attribute holding a thumbnail's song id (`dataset.songId` in scripts)
pub const SONG_ID_ATTRIBUTE: &str = "data-song-id";

/// Id of the audio element belonging to a song.
///
/// The song id is used verbatim, without trimming or encoding.
pub fn audio_id(song_id: &str) -> String {
    format!("{}{}", AUDIO_ID_PREFIX, song_id)
}
