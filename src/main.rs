//! Paper feed server - a ranked academic-paper list as a webpage.
//!
//! Entry point. The application is organized into the following modules:
//!
//! - `models`: paper records and the injected page context
//! - `links`: canonical link resolution and action URL builders
//! - `templates`: HTML rendering (cards, list, page skeleton)
//! - `handlers`: HTTP route handlers

use axum::{routing::get, Router};
use std::sync::Arc;

use paperlist::{handlers, papers_file, AppState};

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() {
    let state = Arc::new(AppState::new());

    let app = Router::new()
        .route("/", get(handlers::index))
        .route("/inspect", get(handlers::inspect))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:3000")
        .await
        .expect("Failed to bind to port 3000");

    println!("paperlist server running at http://127.0.0.1:3000");
    println!(
        "Payload: {} ({} papers)",
        papers_file(),
        state.context.papers.len()
    );

    axum::serve(listener, app).await.expect("Server error");
}
