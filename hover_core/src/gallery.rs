//! HTML for the song gallery.
//!
//! Each item pairs a thumbnail carrying the song id with a hidden audio
//! element whose id is derived from it, which is the layout the hover
//! controller expects to find in the page.

use std::fmt::Write;

use crate::{
    audio_id,
    shared_types::{Catalogue, Song},
    SONG_ID_ATTRIBUTE, SONG_THUMBNAIL_CLASS,
};

pub const GALLERY_CLASS: &str = "gallery";
pub const GALLERY_ITEM_CLASS: &str = "gallery-item";

/// Renders every song of the catalogue inside a single gallery container
pub fn render_gallery(catalogue: &Catalogue) -> String {
    let mut html = format!(r#"<div class="{}">"#, GALLERY_CLASS);
    for song in catalogue.songs() {
        html.push_str(&render_gallery_item(song));
    }
    html.push_str("</div>");

    html
}

/// Renders one linked gallery item: thumbnail, title and preview audio
pub fn render_gallery_item(song: &Song) -> String {
    let mut html = String::new();

    // writing into a String cannot fail
    let _ = write!(
        html,
        concat!(
            r#"<a class="{item_class}" href="{url}" target="_blank">"#,
            r#"<div class="{item_class}-div">"#,
            r#"<img class="{thumbnail_class}" {id_attribute}="{song_id}" src="{thumbnail}">"#,
            r#"<div class="song-title">{name}</div>"#,
            r#"<audio id="{audio_id}" src="{preview}"></audio>"#,
            "</div></a>",
        ),
        item_class = GALLERY_ITEM_CLASS,
        url = escape(&song.url),
        thumbnail_class = SONG_THUMBNAIL_CLASS,
        id_attribute = SONG_ID_ATTRIBUTE,
        song_id = escape(&song.id),
        thumbnail = escape(&song.thumbnail),
        name = escape(&song.name),
        audio_id = escape(&audio_id(&song.id)),
        preview = escape(&song.preview),
    );

    html
}

/// Escapes text for use in element content and quoted attribute values
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }

    escaped
}
