//! HTML rendering for the paper feed.
//!
//! Every function here is a pure mapping from input data to markup,
//! re-evaluated fully on each render.
//!
//! ## Module Structure
//!
//! - `styles` - the inline stylesheet
//! - `components` - escaping, tag bar, and page skeleton
//! - `cards` - paper card, list view, and detail view

mod cards;
mod components;
mod styles;

pub use cards::{paper_card, paper_detail, paper_list, CardOptions};
pub use components::{base_html, html_escape, tag_bar, user_tag};
pub use styles::STYLE;
