//! Paper card rendering.
//!
//! One parameterized card covers both view modes: the ranked list shows the
//! relevance score and the similar/inspect action links, the single-paper
//! detail view shows neither. Field order inside a card is fixed.

use crate::links::{inspect_url, paper_url, similar_url};
use crate::models::PaperRecord;

use super::components::html_escape;

#[cfg(test)]
#[path = "cards_test.rs"]
mod cards_test;

// ============================================================================
// Card Options
// ============================================================================

/// Which optional card fragments to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardOptions {
    pub show_score: bool,
    pub show_similar_link: bool,
    pub show_inspect_link: bool,
}

impl CardOptions {
    /// Full card for the ranked list view.
    pub fn list() -> Self {
        Self {
            show_score: true,
            show_similar_link: true,
            show_inspect_link: true,
        }
    }

    /// Reduced card for the single-paper page: a paper has no "similar to
    /// itself" or "inspect itself" actions, and no rank score.
    pub fn detail() -> Self {
        Self {
            show_score: false,
            show_similar_link: false,
            show_inspect_link: false,
        }
    }
}

// ============================================================================
// Card
// ============================================================================

/// Render one paper as a card fragment.
///
/// Empty fields render as empty elements; an empty id yields degenerate
/// links. The card itself never fails.
pub fn paper_card(paper: &PaperRecord, options: CardOptions) -> String {
    let mut html = String::from(r#"<div class="rel_paper">"#);

    if options.show_score {
        html.push_str(&format!(r#"<div class="rel_score">{:.2}</div>"#, paper.weight));
    }

    html.push_str(&format!(
        r#"<div class="rel_title"><a href="{href}">{title}</a></div>
<div class="rel_authors">{authors}</div>
<div class="rel_time">{time}</div>
<div class="rel_abs">{summary}</div>"#,
        href = html_escape(&paper_url(&paper.id)),
        title = html_escape(&paper.title),
        authors = html_escape(&paper.authors),
        time = html_escape(&paper.time),
        summary = html_escape(&paper.summary),
    ));

    if options.show_similar_link {
        html.push_str(&format!(
            r#"<div class="rel_more"><a href="{}">similar</a></div>"#,
            html_escape(&similar_url(&paper.id))
        ));
    }

    if options.show_inspect_link {
        html.push_str(&format!(
            r#"<div class="rel_inspect"><a href="{}">inspect</a></div>"#,
            html_escape(&inspect_url(&paper.id))
        ));
    }

    html.push_str("</div>");
    html
}

// ============================================================================
// List and Detail Views
// ============================================================================

/// Render the list view: exactly one card per record, in input order.
/// Ordering is the upstream ranker's job; nothing is reordered, filtered,
/// or deduplicated here. An empty list renders an empty container.
pub fn paper_list(papers: &[PaperRecord]) -> String {
    let mut html = String::from(r#"<div><div id="paperList" class="rel_papers">"#);
    for paper in papers {
        html.push_str(&paper_card(paper, CardOptions::list()));
    }
    html.push_str("</div></div>");
    html
}

/// Render the single-paper detail view.
pub fn paper_detail(paper: &PaperRecord) -> String {
    paper_card(paper, CardOptions::detail())
}
