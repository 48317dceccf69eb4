//! Delivery of the single-page UI.
//!
//! Registered as the app's default service, so it only sees requests no API
//! scope matched. In production mode files are served from the configured
//! static directory and any unknown path falls back to `index.html`, letting
//! the client-side tabs handle it. In development mode the UI is served by
//! its own dev server and everything unmatched is a 404.

use std::path::{Component, Path, PathBuf};

use actix_files::NamedFile;
use actix_web::{web, HttpRequest, HttpResponse};
use common::responses::ErrorBody;

use crate::config::{AssetMode, AssetsConfig};

const INDEX_FILE: &str = "index.html";

pub async fn serve(req: HttpRequest, assets: web::Data<AssetsConfig>) -> HttpResponse {
    if assets.mode == AssetMode::Development || req.path().starts_with("/api/") {
        return not_found(&req);
    }

    if let Some(path) = resolve(&assets.static_dir, req.path()) {
        if path.is_file() {
            if let Ok(file) = NamedFile::open_async(&path).await {
                return file.into_response(&req);
            }
        }
    }

    match NamedFile::open_async(assets.static_dir.join(INDEX_FILE)).await {
        Ok(index) => index.into_response(&req),
        Err(_) => not_found(&req),
    }
}

/// Maps a request path onto the static directory. Paths that try to leave it
/// (`..`, absolute components) resolve to nothing.
fn resolve(root: &Path, request_path: &str) -> Option<PathBuf> {
    let relative = request_path.trim_start_matches('/');
    if relative.is_empty() {
        return Some(root.join(INDEX_FILE));
    }

    let relative = Path::new(relative);
    if relative
        .components()
        .all(|c| matches!(c, Component::Normal(_)))
    {
        Some(root.join(relative))
    } else {
        None
    }
}

fn not_found(req: &HttpRequest) -> HttpResponse {
    HttpResponse::NotFound().json(ErrorBody::new(format!("no route for {}", req.path())))
}
