//! Data models for the paper feed.
//!
//! Records arrive fully materialized from the host payload: every field is
//! already a display string except `weight`, the relevance score. Nothing
//! here is parsed, reformatted, or mutated after decoding.

use serde::{Deserialize, Serialize};

// ============================================================================
// Paper Records
// ============================================================================

/// One academic-paper record as injected by the host.
///
/// `id` doubles as the link key: a bare arXiv id, a DOI, or a full URL
/// (see `links::resolve`). Every field defaults to empty when absent so a
/// partial record still renders as a partial card instead of failing the
/// whole payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaperRecord {
    pub id: String,
    pub title: String,
    pub authors: String,
    pub time: String,
    pub summary: String,
    pub weight: f64,
}

// ============================================================================
// Page Context
// ============================================================================

/// The payload the host injects for one page render: the ordered paper list
/// plus the logged-in-user context. `user` is empty when nobody is logged
/// in, and `tags` holds that user's tag names for the filter bar.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PageContext {
    pub user: String,
    pub tags: Vec<String>,
    pub papers: Vec<PaperRecord>,
}
