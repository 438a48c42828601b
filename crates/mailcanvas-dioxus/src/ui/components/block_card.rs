use dioxus::prelude::*;
use mailcanvas_engine::Block;
use mailcanvas_engine::render::render_block;

/// One block on the canvas: its rendered fragment plus edit/copy/delete
/// controls. Dropping a palette item on the card inserts after it.
#[component]
pub fn BlockCard(
    index: usize,
    block: Block,
    on_select: Callback<usize>,
    on_edit: Callback<usize>,
    on_copy: Callback<usize>,
    on_delete: Callback<usize>,
    on_drop_after: Callback<usize>,
) -> Element {
    let fragment = render_block(&block);
    let state_class = if block.is_active() { "active" } else { "" };
    let kind_tag = block.kind().tag();

    rsx! {
        div {
            class: "block-card block-card-{kind_tag} {state_class}",
            onclick: move |_| on_select.call(index),
            ondragover: move |evt| evt.prevent_default(),
            ondrop: move |evt| {
                evt.prevent_default();
                evt.stop_propagation();
                on_drop_after.call(index);
            },
            div {
                class: "block-preview",
                dangerous_inner_html: "{fragment}",
            }
            div {
                class: "block-controls",
                button {
                    class: "block-edit",
                    onclick: move |evt| {
                        evt.stop_propagation();
                        on_edit.call(index);
                    },
                    "Edit"
                }
                button {
                    class: "block-copy",
                    onclick: move |evt| {
                        evt.stop_propagation();
                        on_copy.call(index);
                    },
                    "Copy"
                }
                button {
                    class: "block-delete",
                    onclick: move |evt| {
                        evt.stop_propagation();
                        on_delete.call(index);
                    },
                    "Delete"
                }
            }
        }
    }
}
