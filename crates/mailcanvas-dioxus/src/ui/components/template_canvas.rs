use crate::ui::components::BlockCard;
use dioxus::prelude::*;
use mailcanvas_engine::Block;

/// The email canvas. Re-rendered from the full block sequence every time.
///
/// `on_drop` receives the position to insert after, or `None` when the drop
/// landed on the canvas itself (append).
#[component]
pub fn TemplateCanvas(
    blocks: Vec<Block>,
    on_drop: Callback<Option<usize>>,
    on_select: Callback<usize>,
    on_edit: Callback<usize>,
    on_copy: Callback<usize>,
    on_delete: Callback<usize>,
) -> Element {
    rsx! {
        div {
            class: "canvas",
            ondragover: move |evt| evt.prevent_default(),
            ondrop: move |evt| {
                evt.prevent_default();
                on_drop.call(None);
            },
            if blocks.is_empty() {
                div {
                    class: "canvas-empty",
                    "Drag blocks here to build your email"
                }
            }
            for (index, id, block) in blocks
                .iter()
                .enumerate()
                .map(|(i, b)| (i, b.id(), b.clone()))
            {
                BlockCard {
                    key: "{id}",
                    index,
                    block,
                    on_select,
                    on_edit,
                    on_copy,
                    on_delete,
                    on_drop_after: move |index: usize| on_drop.call(Some(index)),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;
    use mailcanvas_engine::Template;

    #[derive(Props, Clone, PartialEq)]
    struct HarnessProps {
        blocks: Vec<Block>,
    }

    #[allow(non_snake_case)]
    fn Harness(props: HarnessProps) -> Element {
        rsx! {
            TemplateCanvas {
                blocks: props.blocks,
                on_drop: move |_| {},
                on_select: move |_| {},
                on_edit: move |_| {},
                on_copy: move |_| {},
                on_delete: move |_| {},
            }
        }
    }

    fn render_canvas(blocks: Vec<Block>) -> String {
        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { blocks });
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn test_canvas_renders_blocks_in_order() {
        let html = render_canvas(Template::default_seed().blocks().to_vec());

        assert_eq!(html.matches("class=\"block-card ").count(), 5);
        let header = html.find("Your Newsletter").unwrap();
        let body = html.find("Write the body").unwrap();
        let footer = html.find("You are receiving").unwrap();
        assert!(header < body && body < footer);
        assert!(!html.contains("canvas-empty"));
    }

    #[test]
    fn test_empty_canvas_shows_hint() {
        let html = render_canvas(Vec::new());

        assert!(html.contains("canvas-empty"));
        assert!(!html.contains("block-card"));
    }
}
