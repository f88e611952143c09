// HTTP request handlers
use crate::domain::report::RangeSelector;
use crate::domain::scene::ButtonState;
use crate::infrastructure::svg::render_svg;
use crate::presentation::app_state::AppState;
use crate::presentation::page::render_page;
use axum::{
    extract::{Query, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse},
};
use serde::Deserialize;
use std::sync::Arc;

const UNAVAILABLE_NOTICE: &str = "Sentiment data is currently unavailable.";

#[derive(Deserialize)]
pub struct DeltaQuery {
    pub delta: Option<u32>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Unsupported or missing deltas fall back to the session's active selector,
/// which starts out as the configured default.
fn resolve_selector(state: &AppState, query: &DeltaQuery) -> RangeSelector {
    query
        .delta
        .and_then(RangeSelector::from_days)
        .unwrap_or_else(|| state.chart_session.active())
}

/// The chart page: blurb, range buttons, and the embedded SVG.
pub async fn chart_page(
    Query(query): Query<DeltaQuery>,
    State(state): State<Arc<AppState>>,
) -> Html<String> {
    let selector = resolve_selector(&state, &query);

    match state.chart_session.select_range(selector).await {
        Ok(scene) => Html(render_page(Some(&scene), &scene.buttons, None)),
        Err(e) => {
            tracing::error!("failed to load sentiment report: {e:#}");
            // Keep whatever was rendered last; the page just gains a notice
            // and the active marker moves to the selection that failed.
            let prior = state.chart_session.current_scene();
            Html(render_page(
                prior.as_deref(),
                &ButtonState::for_active(selector),
                Some(UNAVAILABLE_NOTICE),
            ))
        }
    }
}

/// The standalone SVG document for the selected range.
pub async fn chart_svg(
    Query(query): Query<DeltaQuery>,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let selector = resolve_selector(&state, &query);

    match state.chart_session.select_range(selector).await {
        Ok(scene) => (
            [(header::CONTENT_TYPE, "image/svg+xml")],
            render_svg(&scene),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("failed to load sentiment report: {e:#}");
            StatusCode::BAD_GATEWAY.into_response()
        }
    }
}
