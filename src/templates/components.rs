//! Shared HTML components: escaping, the tag bar, and the page skeleton.

use crate::links::tag_url;

use super::styles::STYLE;

// ============================================================================
// Escaping
// ============================================================================

/// Escape a display string for interpolation into HTML text or an attribute
/// value. Record fields are opaque strings and are never interpreted as
/// markup.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

// ============================================================================
// User Tags
// ============================================================================

/// A single tag-filter link.
pub fn user_tag(tag_name: &str) -> String {
    format!(
        r#"<a class="tag_link" href="{}">{}</a>"#,
        html_escape(&tag_url(tag_name)),
        html_escape(tag_name)
    )
}

/// The row of tag-filter links for the logged-in user, in payload order.
/// Empty when the user has no tags.
pub fn tag_bar(tags: &[String]) -> String {
    if tags.is_empty() {
        return String::new();
    }

    let mut html = String::from(r#"<div class="tag_bar">"#);
    for tag in tags {
        html.push_str(&user_tag(tag));
    }
    html.push_str("</div>");
    html
}

// ============================================================================
// Page Skeleton
// ============================================================================

fn header_bar(user: &str) -> String {
    let user_html = if user.is_empty() {
        String::new()
    } else {
        format!(r#"<span class="header_user">{}</span>"#, html_escape(user))
    };

    format!(
        r#"<div class="header_bar">
            <a href="/" class="site_name">papers</a>
            <span class="spacer"></span>
            {}
        </div>"#,
        user_html
    )
}

/// Full page skeleton. The rendered tree lands inside `#wrap`, replacing
/// whatever the element held before.
pub fn base_html(title: &str, content: &str, user: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{style}</style>
</head>
<body>
    {header}
    <div id="wrap">
        {content}
    </div>
</body>
</html>"#,
        title = html_escape(title),
        style = STYLE,
        header = header_bar(user),
        content = content,
    )
}
