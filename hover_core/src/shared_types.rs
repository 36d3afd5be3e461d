//! This file contains type definitions which are shared between the browser and server crates

use std::{collections::HashSet, fmt};

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::CatalogueError;

/// The two pointer transitions the gallery reacts to
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HoverKind {
    /// Pointer moved onto an element
    Enter,
    /// Pointer moved off an element
    Leave,
}

impl HoverKind {
    pub const ALL: [HoverKind; 2] = [HoverKind::Enter, HoverKind::Leave];

    /// DOM event type delegated on the body for this transition
    pub fn event_name(&self) -> &'static str {
        match self {
            HoverKind::Enter => "mouseover",
            HoverKind::Leave => "mouseout",
        }
    }

    pub fn from_event_name(name: &str) -> Option<Self> {
        HoverKind::ALL
            .into_iter()
            .find(|kind| kind.event_name() == name)
    }

    /// What the matching audio element is told to do
    pub fn action(&self) -> PlaybackAction {
        match self {
            HoverKind::Enter => PlaybackAction::Play,
            HoverKind::Leave => PlaybackAction::Pause,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaybackAction {
    Play,
    Pause,
}

impl fmt::Display for PlaybackAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaybackAction::Play => write!(f, "play"),
            PlaybackAction::Pause => write!(f, "pause"),
        }
    }
}

/// A play or pause issued to one audio element
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PlaybackCommand {
    pub action: PlaybackAction,
    pub audio_id: String,
}

impl PlaybackCommand {
    pub fn new(action: PlaybackAction, audio_id: impl Into<String>) -> Self {
        Self {
            action,
            audio_id: audio_id.into(),
        }
    }
}

/// One gallery entry
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Song {
    /// Accepts either a string or a number in JSON; kept as text since it
    /// is only ever joined into element ids
    #[serde(deserialize_with = "deserialize_song_id")]
    pub id: String,
    pub name: String,
    /// Cover image shown as the thumbnail
    pub thumbnail: String,
    /// Short audio clip played while hovering
    pub preview: String,
    /// External page the gallery item links to
    pub url: String,
}

fn deserialize_song_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawSongId {
        Text(String),
        Number(u64),
    }

    Ok(match RawSongId::deserialize(deserializer)? {
        RawSongId::Text(id) => id,
        RawSongId::Number(id) => id.to_string(),
    })
}

/// Ordered list of songs with unique, non-empty ids.
///
/// Uniqueness is what guarantees every rendered thumbnail maps onto exactly
/// one audio element.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(try_from = "Vec<Song>", into = "Vec<Song>")]
pub struct Catalogue {
    songs: Vec<Song>,
}

impl Catalogue {
    pub fn new(songs: Vec<Song>) -> Result<Self, CatalogueError> {
        let mut seen = HashSet::new();
        for song in &songs {
            if song.id.is_empty() {
                return Err(CatalogueError::EmptySongId(song.name.clone()));
            }
            if !seen.insert(song.id.as_str()) {
                return Err(CatalogueError::DuplicateSongId(song.id.clone()));
            }
        }

        Ok(Self { songs })
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn get(&self, id: &str) -> Option<&Song> {
        self.songs.iter().find(|song| song.id == id)
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}

impl TryFrom<Vec<Song>> for Catalogue {
    type Error = CatalogueError;

    fn try_from(songs: Vec<Song>) -> Result<Self, Self::Error> {
        Catalogue::new(songs)
    }
}

impl From<Catalogue> for Vec<Song> {
    fn from(catalogue: Catalogue) -> Self {
        catalogue.songs
    }
}
