//! Stylesheet and favicon handlers.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderName, header},
};

use crate::ui::{
    state::AppState,
    view::{self, Favicons, Theme},
};

type AssetResponse<B> = ([(HeaderName, &'static str); 1], B);

fn stylesheet(theme: Theme) -> AssetResponse<String> {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        view::render_stylesheet(theme),
    )
}

fn favicon(favicons: &Favicons, theme: Theme) -> AssetResponse<Bytes> {
    ([(header::CONTENT_TYPE, "image/x-icon")], favicons.get(theme))
}

/// `GET /style_brutal.css`
pub async fn stylesheet_brutal() -> AssetResponse<String> {
    stylesheet(Theme::Brutal)
}

/// `GET /style_milky.css`
pub async fn stylesheet_milky() -> AssetResponse<String> {
    stylesheet(Theme::Milky)
}

/// `GET /favicon_brutal.ico`
pub async fn favicon_brutal(State(state): State<Arc<AppState>>) -> AssetResponse<Bytes> {
    favicon(&state.favicons, Theme::Brutal)
}

/// `GET /favicon_milky.ico`
pub async fn favicon_milky(State(state): State<Arc<AppState>>) -> AssetResponse<Bytes> {
    favicon(&state.favicons, Theme::Milky)
}
