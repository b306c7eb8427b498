//! Paper feed library - renders academic-paper records into web pages.
//!
//! The rendering core (`links`, `templates`) is pure: given a materialized
//! payload it produces markup, with no network access, no persistence, and
//! no ranking of its own. The host side (`AppState`, `handlers`) decodes
//! the payload once at startup and mounts the rendered tree per request.

use std::env;
use std::fs;

pub mod handlers;
pub mod links;
pub mod models;
pub mod templates;

// ============================================================================
// Configuration
// ============================================================================

/// Environment variable naming the payload file.
pub const PAPERS_FILE_ENV: &str = "PAPERS_FILE";
pub const DEFAULT_PAPERS_FILE: &str = "papers.json";

/// Path of the payload file, from the environment or the default.
pub fn papers_file() -> String {
    env::var(PAPERS_FILE_ENV).unwrap_or_else(|_| DEFAULT_PAPERS_FILE.to_string())
}

/// Read and decode the page context from a JSON payload file.
pub fn load_page_context(path: &str) -> Result<models::PageContext, String> {
    let raw = fs::read_to_string(path).map_err(|e| format!("Cannot read {}: {}", path, e))?;
    serde_json::from_str(&raw).map_err(|e| format!("Cannot parse {}: {}", path, e))
}

// ============================================================================
// Application State
// ============================================================================

/// Immutable per-process state: the payload decoded once at startup.
#[derive(Clone)]
pub struct AppState {
    pub context: models::PageContext,
}

impl AppState {
    pub fn new() -> Self {
        let path = papers_file();
        let context = load_page_context(&path).expect("Failed to load papers payload");
        Self { context }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// Re-export commonly used items
pub use links::{inspect_url, paper_url, resolve, similar_url, tag_url};
pub use models::{PageContext, PaperRecord};
pub use templates::{
    base_html, html_escape, paper_card, paper_detail, paper_list, tag_bar, user_tag, CardOptions,
    STYLE,
};
