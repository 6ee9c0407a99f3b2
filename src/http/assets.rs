//! Static UI assets, served for every path no proxy route claims.

use std::convert::Infallible;
use std::path::Path;

use axum::{
    body::Body,
    extract::Request,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use tower::ServiceExt;
use tower_http::services::ServeDir;

struct Asset {
    path: &'static str,
    content_type: &'static str,
    bytes: &'static [u8],
}

const BUNDLE: &[Asset] = &[
    Asset {
        path: "/index.html",
        content_type: "text/html; charset=utf-8",
        bytes: include_bytes!("../../assets/index.html"),
    },
    Asset {
        path: "/script.js",
        content_type: "text/javascript; charset=utf-8",
        bytes: include_bytes!("../../assets/script.js"),
    },
    Asset {
        path: "/styles.css",
        content_type: "text/css; charset=utf-8",
        bytes: include_bytes!("../../assets/styles.css"),
    },
    Asset {
        path: "/favicon.ico",
        content_type: "image/x-icon",
        bytes: include_bytes!("../../assets/favicon.ico"),
    },
];

/// Where UI files come from.
#[derive(Clone)]
pub enum StaticAssets {
    /// Bundle compiled into the binary.
    Embedded,
    /// Files on disk, for UI development without rebuilding.
    Directory(ServeDir),
}

impl StaticAssets {
    pub fn new(static_dir: Option<&Path>) -> Self {
        match static_dir {
            Some(dir) => StaticAssets::Directory(ServeDir::new(dir)),
            None => StaticAssets::Embedded,
        }
    }

    pub async fn serve(&self, request: Request) -> Response {
        match self {
            StaticAssets::Embedded => serve_embedded(request.uri().path()),
            StaticAssets::Directory(dir) => {
                let result: Result<_, Infallible> = dir.clone().oneshot(request).await;
                match result {
                    Ok(response) => response.map(Body::new),
                    Err(never) => match never {},
                }
            }
        }
    }
}

fn serve_embedded(path: &str) -> Response {
    let path = if path == "/" { "/index.html" } else { path };

    match BUNDLE.iter().find(|asset| asset.path == path) {
        Some(asset) => (
            [(header::CONTENT_TYPE, HeaderValue::from_static(asset.content_type))],
            asset.bytes,
        )
            .into_response(),
        None => (StatusCode::NOT_FOUND, "404 page not found\n").into_response(),
    }
}
