use dioxus::prelude::*;
use mailcanvas_engine::BlockKind;

/// Draggable block types. Dragging carries the kind's tag; clicking appends.
#[component]
pub fn BlockPalette(
    on_drag_start: Callback<String>,
    on_drag_end: Callback<()>,
    on_add: Callback<String>,
) -> Element {
    rsx! {
        div {
            class: "palette",
            h2 { "Blocks" }
            for (tag, label) in BlockKind::ALL.map(|kind| (kind.tag(), kind.label())) {
                div {
                    key: "{tag}",
                    class: "palette-item palette-{tag}",
                    draggable: "true",
                    title: "Drag onto the canvas or click to append",
                    ondragstart: move |_| on_drag_start.call(tag.to_string()),
                    ondragend: move |_| on_drag_end.call(()),
                    onclick: move |_| on_add.call(tag.to_string()),
                    "{label}"
                }
            }
        }
    }
}
