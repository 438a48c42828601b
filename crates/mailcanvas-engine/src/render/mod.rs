//! HTML rendering of blocks and whole templates.

use crate::models::{Block, BlockKind};
use html_escape::{encode_double_quoted_attribute, encode_text};

/// Width of the email body column in exported HTML
pub const EMAIL_WIDTH_PX: u32 = 600;

/// Render a single block to an HTML fragment.
///
/// Text content is an HTML fragment already and is emitted verbatim; image
/// references are attribute-escaped.
pub fn render_block(block: &Block) -> String {
    let content = block.content().unwrap_or_default();
    match block.kind() {
        BlockKind::Text => format!(r#"<div class="block block-text">{content}</div>"#),
        BlockKind::Image => format!(
            r#"<img class="block block-image" src="{}" alt="">"#,
            encode_double_quoted_attribute(content)
        ),
        BlockKind::Divider => r#"<hr class="block block-divider">"#.to_string(),
    }
}

/// Render the full sequence as a standalone, table-based email document
pub fn render_email(title: &str, blocks: &[Block]) -> String {
    let mut rows = String::new();
    for block in blocks {
        rows.push_str(&format!(
            "<tr><td style=\"padding:12px 24px;\">{}</td></tr>\n",
            render_block(block)
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>.block-image {{ max-width: 100%; display: block; }} .block-divider {{ border: 0; border-top: 1px solid #dddddd; }}</style>
</head>
<body style="margin:0;padding:0;background:#f4f4f4;">
<table role="presentation" width="100%" cellpadding="0" cellspacing="0">
<tr><td align="center">
<table role="presentation" width="{width}" cellpadding="0" cellspacing="0" style="background:#ffffff;">
{rows}</table>
</td></tr>
</table>
</body>
</html>
"#,
        title = encode_text(title),
        width = EMAIL_WIDTH_PX,
    )
}
