//! Inline formatting for the text editor: wraps the selected range of the
//! draft in an HTML tag pair.
//!
//! Selections arrive from the webview in UTF-16 code units and are converted
//! to byte offsets before splicing.

use html_escape::encode_double_quoted_attribute;
use std::ops::Range;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextFormat {
    Bold,
    Italic,
    Underline,
    Link(String),
}

impl TextFormat {
    pub fn label(&self) -> &'static str {
        match self {
            TextFormat::Bold => "B",
            TextFormat::Italic => "I",
            TextFormat::Underline => "U",
            TextFormat::Link(_) => "Link",
        }
    }

    fn tags(&self) -> (String, &'static str) {
        match self {
            TextFormat::Bold => ("<b>".to_string(), "</b>"),
            TextFormat::Italic => ("<i>".to_string(), "</i>"),
            TextFormat::Underline => ("<u>".to_string(), "</u>"),
            TextFormat::Link(href) => (
                format!(r#"<a href="{}">"#, encode_double_quoted_attribute(href)),
                "</a>",
            ),
        }
    }
}

/// Wrap `selection` of `text` in the tags for `format`.
///
/// Returns the new text and the range of the originally selected text inside
/// the tags. An empty selection yields an empty tag pair with the cursor
/// between the tags. Out-of-range bounds are clamped and bounds inside a
/// multi-byte character move back to its start.
pub fn apply_format(
    text: &str,
    selection: Range<usize>,
    format: &TextFormat,
) -> (String, Range<usize>) {
    let mut start = floor_char_boundary(text, selection.start.min(text.len()));
    let mut end = floor_char_boundary(text, selection.end.min(text.len()));
    if start > end {
        std::mem::swap(&mut start, &mut end);
    }

    let (open, close) = format.tags();
    let mut result = String::with_capacity(text.len() + open.len() + close.len());
    result.push_str(&text[..start]);
    result.push_str(&open);
    result.push_str(&text[start..end]);
    result.push_str(close);
    result.push_str(&text[end..]);

    let inner_start = start + open.len();
    (result, inner_start..inner_start + (end - start))
}

/// Byte offset of the given UTF-16 position, clamped to the end of `text`
pub fn utf16_to_byte_offset(text: &str, utf16_pos: usize) -> usize {
    let mut units = 0;
    for (byte_index, ch) in text.char_indices() {
        if units >= utf16_pos {
            return byte_index;
        }
        units += ch.len_utf16();
    }
    text.len()
}

/// UTF-16 position of the given byte offset, for handing selections back to
/// the webview
pub fn byte_to_utf16_offset(text: &str, byte_offset: usize) -> usize {
    let byte_offset = floor_char_boundary(text, byte_offset.min(text.len()));
    text[..byte_offset].encode_utf16().count()
}

fn floor_char_boundary(text: &str, mut index: usize) -> usize {
    while !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}
