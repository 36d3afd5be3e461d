use tracing::{debug, trace};

use crate::{
    audio_id,
    error::PlaybackError,
    shared_types::{HoverKind, PlaybackAction, PlaybackCommand},
    SONG_THUMBNAIL_CLASS,
};

/// The element a hover event landed on
pub trait HoverTarget {
    /// Full class attribute of the element
    fn class_name(&self) -> String;
    /// Value of the element's `data-song-id` attribute, if present
    fn song_id(&self) -> Option<String>;
}

/// Something that can be started and paused, e.g. an `<audio>` element.
///
/// Both calls must be safe to repeat: playing a playing element or pausing
/// a paused one is a no-op for the element.
pub trait MediaElement {
    fn play(&self) -> Result<(), String>;
    fn pause(&self) -> Result<(), String>;
}

/// Resolves media elements by id
pub trait MediaRegistry {
    type Media: MediaElement;

    fn lookup(&self, id: &str) -> Option<Self::Media>;
}

/// Whether a hover target is a song thumbnail.
///
/// This is a strict comparison of the whole class attribute, so an element
/// with `class="song-thumbnail selected"` is not a thumbnail.
pub fn is_song_thumbnail<T: HoverTarget + ?Sized>(target: &T) -> bool {
    target.class_name() == SONG_THUMBNAIL_CLASS
}

/// Starts playback of the media element with the given id
pub fn play_audio<R: MediaRegistry + ?Sized>(
    registry: &R,
    element_id: &str,
) -> Result<(), PlaybackError> {
    issue(registry, PlaybackAction::Play, element_id)
}

/// Pauses the media element with the given id
pub fn pause_audio<R: MediaRegistry + ?Sized>(
    registry: &R,
    element_id: &str,
) -> Result<(), PlaybackError> {
    issue(registry, PlaybackAction::Pause, element_id)
}

fn issue<R: MediaRegistry + ?Sized>(
    registry: &R,
    action: PlaybackAction,
    element_id: &str,
) -> Result<(), PlaybackError> {
    let media = registry
        .lookup(element_id)
        .ok_or_else(|| PlaybackError::Unresolved {
            audio_id: element_id.to_string(),
        })?;

    let result = match action {
        PlaybackAction::Play => media.play(),
        PlaybackAction::Pause => media.pause(),
    };

    result.map_err(|message| PlaybackError::Media {
        audio_id: element_id.to_string(),
        action,
        message,
    })
}

/// Turns hovers over song thumbnails into play and pause calls on the
/// matching audio element.
///
/// Every event is handled on its own. Nothing tracks which song is playing,
/// so overlapping hovers can leave several previews playing at once.
pub struct HoverPlaybackController<R> {
    registry: R,
}

impl<R: MediaRegistry> HoverPlaybackController<R> {
    pub fn new(registry: R) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Pointer entered `target`; plays its preview if it is a thumbnail
    pub fn on_hover_enter<T: HoverTarget + ?Sized>(
        &self,
        target: Option<&T>,
    ) -> Result<Option<PlaybackCommand>, PlaybackError> {
        self.handle(HoverKind::Enter, target)
    }

    /// Pointer left `target`; pauses its preview if it is a thumbnail
    pub fn on_hover_leave<T: HoverTarget + ?Sized>(
        &self,
        target: Option<&T>,
    ) -> Result<Option<PlaybackCommand>, PlaybackError> {
        self.handle(HoverKind::Leave, target)
    }

    /// Returns the command that was issued, or `None` when the target is
    /// missing or is not a song thumbnail
    pub fn handle<T: HoverTarget + ?Sized>(
        &self,
        kind: HoverKind,
        target: Option<&T>,
    ) -> Result<Option<PlaybackCommand>, PlaybackError> {
        let target = match target {
            Some(target) if is_song_thumbnail(target) => target,
            Some(target) => {
                trace!(class = %target.class_name(), "ignoring {:?} on non-thumbnail", kind);
                return Ok(None);
            }
            None => return Ok(None),
        };

        let song_id = target.song_id().ok_or(PlaybackError::MissingSongId)?;
        let command = PlaybackCommand::new(kind.action(), audio_id(&song_id));

        issue(&self.registry, command.action, &command.audio_id)?;
        debug!(audio_id = %command.audio_id, "{} issued", command.action);

        Ok(Some(command))
    }
}
