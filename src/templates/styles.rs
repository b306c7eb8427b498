//! Stylesheet for the paper feed.
//!
//! One inline stylesheet, no external assets.

pub const STYLE: &str = r#"
:root {
    --bg: #fdfdfb;
    --fg: #333333;
    --muted: #999999;
    --border: #e4e4dc;
    --link: #268bd2;
    --link-hover: #2aa198;
    --accent: #f0f0e8;
    --score: #b58900;
}

* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
    line-height: 1.55;
    color: var(--fg);
    background: var(--bg);
}

a { color: var(--link); text-decoration: none; }
a:hover { color: var(--link-hover); text-decoration: underline; }

.header_bar {
    position: sticky;
    top: 0;
    background: var(--bg);
    border-bottom: 1px solid var(--border);
    padding: 0.5rem 1rem;
    display: flex;
    gap: 1rem;
    align-items: baseline;
    z-index: 100;
}

.header_bar .site_name { font-weight: 600; }
.header_bar .spacer { flex: 1; }
.header_user { font-size: 0.85rem; color: var(--muted); }

#wrap {
    max-width: 820px;
    margin: 0 auto;
    padding: 1rem;
}

.tag_bar {
    display: flex;
    flex-wrap: wrap;
    gap: 0.5rem;
    padding: 0.5rem 0;
    border-bottom: 1px solid var(--border);
    margin-bottom: 0.75rem;
}

.tag_link {
    font-size: 0.8rem;
    padding: 0.1rem 0.5rem;
    background: var(--accent);
    border-radius: 3px;
    white-space: nowrap;
}

.rel_papers { list-style: none; }

.rel_paper {
    padding: 0.75rem 0;
    border-bottom: 1px solid var(--border);
}

.rel_paper:last-child { border-bottom: none; }

.rel_score {
    float: right;
    font-family: monospace;
    font-size: 0.85rem;
    color: var(--score);
    margin-left: 1rem;
}

.rel_title { font-size: 1.05rem; }
.rel_authors { font-size: 0.85rem; color: var(--muted); }
.rel_time { font-size: 0.8rem; color: var(--muted); }

.rel_abs {
    font-size: 0.9rem;
    margin-top: 0.4rem;
}

.rel_more, .rel_inspect {
    display: inline-block;
    font-size: 0.8rem;
    margin-top: 0.3rem;
    margin-right: 0.75rem;
}
"#;
