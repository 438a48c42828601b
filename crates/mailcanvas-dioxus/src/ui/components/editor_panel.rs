use crate::ui::formatting::{
    TextFormat, apply_format, byte_to_utf16_offset, utf16_to_byte_offset,
};
use dioxus::prelude::*;
use mailcanvas_engine::{Block, BlockKind};

const EDITOR_ID: &str = "block-editor";

/// Content editor for the active block.
///
/// Keeps no copy of the text: every keystroke goes out through `on_draft`
/// and comes back as the `draft` prop.
#[component]
pub fn EditorPanel(
    block: Option<Block>,
    draft: String,
    on_draft: Callback<String>,
    on_submit: Callback<()>,
    on_close: Callback<()>,
) -> Element {
    let mut link_url = use_signal(|| "https://".to_string());

    let body = match block.as_ref().map(Block::kind) {
        None => rsx! {
            p { class: "editor-hint", "No block selected. Click a block on the canvas to edit it." }
        },
        Some(BlockKind::Divider) => rsx! {
            p { class: "editor-hint", "Dividers have no content to edit." }
        },
        Some(BlockKind::Image) => rsx! {
            label { r#for: EDITOR_ID, "Image URL" }
            input {
                id: EDITOR_ID,
                class: "editor-input",
                r#type: "url",
                value: "{draft}",
                oninput: move |evt| on_draft.call(evt.value()),
            }
            img { class: "editor-image-preview", src: "{draft}", alt: "" }
        },
        Some(BlockKind::Text) => rsx! {
            div {
                class: "editor-toolbar",
                FormatButton { format: TextFormat::Bold, draft: draft.clone(), on_draft }
                FormatButton { format: TextFormat::Italic, draft: draft.clone(), on_draft }
                FormatButton { format: TextFormat::Underline, draft: draft.clone(), on_draft }
                input {
                    class: "editor-link-url",
                    r#type: "url",
                    value: "{link_url}",
                    oninput: move |evt| link_url.set(evt.value()),
                }
                FormatButton {
                    format: TextFormat::Link(link_url.read().clone()),
                    draft: draft.clone(),
                    on_draft,
                }
            }
            textarea {
                id: EDITOR_ID,
                class: "editor-textarea",
                spellcheck: false,
                rows: calculate_textarea_rows(&draft),
                value: "{draft}",
                oninput: move |evt| on_draft.call(evt.value()),
            }
        },
    };

    let editable = block.as_ref().is_some_and(|b| b.kind().has_content());

    rsx! {
        div {
            class: "editor-panel",
            h2 { "Edit block" }
            {body}
            div {
                class: "editor-actions",
                if editable {
                    button {
                        class: "editor-save",
                        onclick: move |_| on_submit.call(()),
                        "Save"
                    }
                }
                button {
                    class: "editor-close",
                    onclick: move |_| on_close.call(()),
                    "Close"
                }
            }
        }
    }
}

/// Toolbar button wrapping the textarea's current selection
#[component]
fn FormatButton(format: TextFormat, draft: String, on_draft: Callback<String>) -> Element {
    let label = format.label();

    rsx! {
        button {
            class: "format-button",
            onclick: move |_| {
                let format = format.clone();
                let draft = draft.clone();
                spawn(async move {
                    let end_of_text = byte_to_utf16_offset(&draft, draft.len());
                    let (start, end) = read_selection().await.unwrap_or((end_of_text, end_of_text));
                    let selection =
                        utf16_to_byte_offset(&draft, start)..utf16_to_byte_offset(&draft, end);

                    let (text, inner) = apply_format(&draft, selection, &format);
                    let restore = (
                        byte_to_utf16_offset(&text, inner.start),
                        byte_to_utf16_offset(&text, inner.end),
                    );
                    on_draft.call(text);
                    restore_selection(restore.0, restore.1);
                });
            },
            "{label}"
        }
    }
}

/// Current textarea selection in UTF-16 units, if the editor is mounted
async fn read_selection() -> Option<(usize, usize)> {
    let script = format!(
        "const el = document.getElementById('{EDITOR_ID}'); \
         return el ? [el.selectionStart, el.selectionEnd] : null;"
    );
    match document::eval(&script).join::<Option<(usize, usize)>>().await {
        Ok(selection) => selection,
        Err(e) => {
            log::warn!("Could not read editor selection: {e:?}");
            None
        }
    }
}

/// Fire-and-forget: the textarea may already be gone after a re-render
fn restore_selection(start: usize, end: usize) {
    document::eval(&format!(
        "const el = document.getElementById('{EDITOR_ID}'); \
         if (el) {{ el.focus(); el.setSelectionRange({start}, {end}); }}"
    ));
}

fn calculate_textarea_rows(content: &str) -> usize {
    content.lines().count().clamp(4, 20)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;

    #[derive(Props, Clone, PartialEq)]
    struct HarnessProps {
        block: Option<Block>,
        draft: String,
    }

    #[allow(non_snake_case)]
    fn Harness(props: HarnessProps) -> Element {
        rsx! {
            EditorPanel {
                block: props.block,
                draft: props.draft,
                on_draft: move |_| {},
                on_submit: move |_| {},
                on_close: move |_| {},
            }
        }
    }

    fn render_panel(block: Option<Block>, draft: &str) -> String {
        let mut dom = VirtualDom::new_with_props(
            Harness,
            HarnessProps {
                block,
                draft: draft.to_string(),
            },
        );
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn test_text_block_gets_toolbar_and_textarea() {
        let html = render_panel(Some(Block::text("<p>Hi</p>")), "<p>Hi</p>");

        assert!(html.contains("<textarea"));
        assert!(html.contains("editor-toolbar"));
        assert_eq!(html.matches("format-button").count(), 4);
        assert!(html.contains("editor-save"));
    }

    #[test]
    fn test_image_block_gets_url_input() {
        let html = render_panel(Some(Block::image("a.png")), "a.png");

        assert!(html.contains("editor-input"));
        assert!(html.contains("editor-image-preview"));
        assert!(!html.contains("<textarea"));
        assert!(html.contains("editor-save"));
    }

    #[test]
    fn test_divider_has_nothing_to_save() {
        let html = render_panel(Some(Block::divider()), "");

        assert!(html.contains("Dividers have no content"));
        assert!(!html.contains("editor-save"));
        assert!(html.contains("editor-close"));
    }

    #[test]
    fn test_no_active_block() {
        let html = render_panel(None, "");

        assert!(html.contains("No block selected"));
        assert!(!html.contains("editor-save"));
    }

    #[test]
    fn test_textarea_rows_are_bounded() {
        assert_eq!(calculate_textarea_rows(""), 4);
        assert_eq!(calculate_textarea_rows(&"line\n".repeat(8)), 8);
        assert_eq!(calculate_textarea_rows(&"line\n".repeat(50)), 20);
    }
}
