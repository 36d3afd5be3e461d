use std::{io, path::Path, sync::Arc};

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, get_service},
    Extension, Json, Router,
};
use hover_core::{
    gallery::render_gallery,
    shared_types::{Catalogue, Song},
};
use tower_http::services::ServeDir;
use tracing::{debug, error, info};

/// Routes of the preview server.
///
/// Anything outside `/api` is looked up in `dist_dir`, which holds the
/// packaged page and wasm bundle.
pub fn app(catalogue: Arc<Catalogue>, dist_dir: &Path) -> Router {
    let static_files = get_service(ServeDir::new(dist_dir)).handle_error(handle_io_error);

    Router::new()
        .route("/api/health", get(health_handler))
        .route("/api/songs", get(songs_handler))
        .route("/api/gallery", get(gallery_handler))
        .fallback(static_files)
        .layer(Extension(catalogue))
}

/// Health Check Endpoint used to verify the service is live
async fn health_handler() -> impl IntoResponse {
    info!("HEALTH_CHECK ✓");
    "health check ✓".into_response()
}

async fn songs_handler(Extension(catalogue): Extension<Arc<Catalogue>>) -> Json<Vec<Song>> {
    debug!("serving {} songs", catalogue.len());
    Json(catalogue.songs().to_vec())
}

async fn gallery_handler(Extension(catalogue): Extension<Arc<Catalogue>>) -> Html<String> {
    debug!("rendering gallery of {} songs", catalogue.len());
    Html(render_gallery(&catalogue))
}

async fn handle_io_error(err: io::Error) -> impl IntoResponse {
    error!("static file error :: {}", err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("unhandled internal error: {}", err),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request};
    use std::fs;
    use tower::ServiceExt;

    fn song(id: &str) -> Song {
        Song {
            id: id.to_string(),
            name: format!("Track {}", id),
            thumbnail: format!("/covers/{}.jpg", id),
            preview: format!("/previews/{}.mp3", id),
            url: format!("https://open.example/track/{}", id),
        }
    }

    fn test_app(dist_dir: &Path) -> Router {
        let catalogue = Catalogue::new(vec![song("1"), song("2")]).unwrap();
        app(Arc::new(catalogue), dist_dir)
    }

    async fn get_body(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = hyper::body::to_bytes(response.into_body()).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let dist = tempfile::tempdir().unwrap();
        let (status, body) = get_body(test_app(dist.path()), "/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "health check ✓");
    }

    #[tokio::test]
    async fn test_songs_are_served_as_json() {
        let dist = tempfile::tempdir().unwrap();
        let (status, body) = get_body(test_app(dist.path()), "/api/songs").await;
        assert_eq!(status, StatusCode::OK);

        let songs: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(songs.as_array().map(Vec::len), Some(2));
        assert_eq!(songs[1]["id"], "2");
        assert_eq!(songs[1]["preview"], "/previews/2.mp3");
    }

    #[tokio::test]
    async fn test_gallery_pairs_thumbnails_with_audio() {
        let dist = tempfile::tempdir().unwrap();
        let (status, body) = get_body(test_app(dist.path()), "/api/gallery").await;
        assert_eq!(status, StatusCode::OK);
        for id in ["1", "2"] {
            assert!(body.contains(&format!(r#"class="song-thumbnail" data-song-id="{}""#, id)));
            assert!(body.contains(&format!(r#"<audio id="audio-{}""#, id)));
        }
    }

    #[tokio::test]
    async fn test_static_files_fall_back_to_dist() {
        let dist = tempfile::tempdir().unwrap();
        fs::write(dist.path().join("index.html"), "<main>previews</main>").unwrap();

        let (status, body) = get_body(test_app(dist.path()), "/index.html").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "<main>previews</main>");

        let (status, _) = get_body(test_app(dist.path()), "/hover_wasm_bg.wasm").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
