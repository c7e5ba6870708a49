//! Trailer modal body

use super::escape_html;
use crate::url::build_embed_url;

/// 16:9 iframe pointing at the embedded player for `key`
pub fn render_trailer_embed(key: &str) -> String {
    format!(
        r#"<div class="ratio ratio-16x9"><iframe src="{}" frameborder="0" allowfullscreen></iframe></div>"#,
        escape_html(&build_embed_url(key))
    )
}
