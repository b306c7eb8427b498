//! Canonical link resolution for paper identifiers.
//!
//! A paper id can be a bare arXiv id, a DOI, or a full URL already. The
//! resolver decides which URL prefix the id gets joined with; the builders
//! below derive the in-site action links a card exposes. Everything is pure
//! string work: ids are never validated, a malformed id just yields a
//! malformed link.

/// Pick the URL prefix for a paper id. First match wins:
/// an id embedding a full `http(s)://` URL needs no prefix, an id
/// containing a slash is a DOI, anything else is a bare arXiv id.
///
/// The full-URL check deliberately runs before the slash check, so an id
/// that embeds both is treated as a URL.
pub fn resolve(id: &str) -> &'static str {
    if id.contains("http://") || id.contains("https://") {
        ""
    } else if id.contains('/') {
        "https://doi.org/"
    } else {
        "http://arxiv.org/abs/"
    }
}

/// Canonical external URL for a paper id.
pub fn paper_url(id: &str) -> String {
    format!("{}{}", resolve(id), id)
}

/// Link to the list page re-ranked by similarity to the given paper.
pub fn similar_url(id: &str) -> String {
    format!("/?rank=pid&pid={}", id)
}

/// Link to the single-paper inspect page.
pub fn inspect_url(id: &str) -> String {
    format!("/inspect?pid={}", id)
}

/// Link to the list page filtered down to one user tag.
pub fn tag_url(tag_name: &str) -> String {
    format!("/?rank=tags&tags={}", tag_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_url_gets_no_prefix() {
        assert_eq!(resolve("http://example.com/paperX"), "");
    }

    #[test]
    fn https_url_gets_no_prefix() {
        assert_eq!(resolve("https://example.com/paperX"), "");
    }

    #[test]
    fn embedded_url_substring_gets_no_prefix() {
        // The URL rule wins even when the scheme is not at the front.
        assert_eq!(resolve("mirror/https://example.com/p"), "");
        assert_eq!(resolve("see http://example.com"), "");
    }

    #[test]
    fn slash_means_doi() {
        assert_eq!(resolve("10.1038/s41586-020-2649-2"), "https://doi.org/");
        assert_eq!(resolve("a/b"), "https://doi.org/");
    }

    #[test]
    fn bare_id_means_arxiv() {
        assert_eq!(resolve("1234.5678"), "http://arxiv.org/abs/");
        assert_eq!(resolve("2206.00364v2"), "http://arxiv.org/abs/");
    }

    #[test]
    fn empty_id_falls_through_to_arxiv() {
        // Degenerate but non-failing: the link is unusable, the render
        // still proceeds.
        assert_eq!(resolve(""), "http://arxiv.org/abs/");
        assert_eq!(paper_url(""), "http://arxiv.org/abs/");
    }

    #[test]
    fn paper_url_round_trips_arxiv_id() {
        assert_eq!(paper_url("1234.5678"), "http://arxiv.org/abs/1234.5678");
    }

    #[test]
    fn paper_url_round_trips_doi() {
        assert_eq!(
            paper_url("10.1038/s41586-020-2649-2"),
            "https://doi.org/10.1038/s41586-020-2649-2"
        );
    }

    #[test]
    fn paper_url_passes_full_url_through_unchanged() {
        assert_eq!(paper_url("https://example.com/paperX"), "https://example.com/paperX");
    }

    #[test]
    fn action_urls_concatenate_the_raw_id() {
        assert_eq!(similar_url("9912.1"), "/?rank=pid&pid=9912.1");
        assert_eq!(inspect_url("9912.1"), "/inspect?pid=9912.1");
        assert_eq!(similar_url("10.1145/3434311"), "/?rank=pid&pid=10.1145/3434311");
    }

    #[test]
    fn tag_url_targets_the_tag_filter() {
        assert_eq!(tag_url("diffusion"), "/?rank=tags&tags=diffusion");
    }
}
