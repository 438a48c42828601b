use mailcanvas_engine::{Block, Presenter, RenderMode};

/// The presenter's copy of what to show, replaced wholesale on every render
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub blocks: Vec<Block>,
    pub mode: RenderMode,
    /// Text in the editor; seeded from the active block on each render
    pub draft: String,
}

impl ViewState {
    pub fn active(&self) -> Option<(usize, &Block)> {
        self.blocks.iter().enumerate().find(|(_, b)| b.is_active())
    }
}

impl Presenter for ViewState {
    fn display_template(&mut self, blocks: &[Block], mode: RenderMode) {
        self.blocks = blocks.to_vec();
        self.mode = mode;
        self.draft = self
            .active()
            .and_then(|(_, block)| block.content())
            .unwrap_or_default()
            .to_string();
    }

    fn edited_text(&self) -> String {
        self.draft.clone()
    }
}
