//! HTTP route handlers for the paper feed.
//!
//! Each handler reads the immutable startup payload, hands it to the
//! rendering layer, and returns the finished page. No handler mutates
//! state or reorders the payload.

use crate::templates::{base_html, paper_detail, paper_list, tag_bar};
use crate::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use std::sync::Arc;

// ============================================================================
// List Page
// ============================================================================

pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    let ctx = &state.context;

    let mut content = tag_bar(&ctx.tags);
    content.push_str(&paper_list(&ctx.papers));

    Html(base_html("Papers", &content, &ctx.user))
}

// ============================================================================
// Inspect Page
// ============================================================================

#[derive(Deserialize)]
pub struct InspectQuery {
    pub pid: Option<String>,
}

pub async fn inspect(
    Query(query): Query<InspectQuery>,
    State(state): State<Arc<AppState>>,
) -> Response {
    let ctx = &state.context;

    let pid = match query.pid {
        Some(pid) => pid,
        None => return (StatusCode::NOT_FOUND, "Paper not found").into_response(),
    };

    match ctx.papers.iter().find(|p| p.id == pid) {
        Some(paper) => {
            let content = paper_detail(paper);
            Html(base_html(&paper.title, &content, &ctx.user)).into_response()
        }
        None => (StatusCode::NOT_FOUND, "Paper not found").into_response(),
    }
}
