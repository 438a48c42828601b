use crate::editing::composer::Presenter;
use crate::editing::controller::RenderMode;
use crate::models::Block;
use tempfile::TempDir;

/// Create a temporary directory for file-backed storage
pub fn create_test_storage_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Presenter double that records every render
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    pub renders: Vec<(Vec<Block>, RenderMode)>,
    pub edited_text: String,
}

impl RecordingPresenter {
    pub fn last_mode(&self) -> Option<RenderMode> {
        self.renders.last().map(|(_, mode)| *mode)
    }
}

impl Presenter for RecordingPresenter {
    fn display_template(&mut self, blocks: &[Block], mode: RenderMode) {
        self.renders.push((blocks.to_vec(), mode));
    }

    fn edited_text(&self) -> String {
        self.edited_text.clone()
    }
}
