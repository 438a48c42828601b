use crate::editing::store::Store;
use crate::error::ComposerError;
use crate::models::{Block, BlockKind};
use crate::storage::KeyValueStore;

/// Which surface the presenter shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Block palette and canvas
    #[default]
    Browse,
    /// Content editor for the active block
    Edit,
}

/// Translates user intents into store operations and decides the render mode.
///
/// A failed operation never changes the mode.
#[derive(Debug)]
pub struct Controller<S> {
    store: Store<S>,
    mode: RenderMode,
}

impl<S: KeyValueStore> Controller<S> {
    pub fn new(store: Store<S>) -> Self {
        Self {
            store,
            mode: RenderMode::Browse,
        }
    }

    pub fn store(&self) -> &Store<S> {
        &self.store
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    pub fn active_block(&self) -> Option<&Block> {
        self.store.get_active()
    }

    /// Insert without activating; see [`Store::insert`] for the return value
    pub fn add_block(
        &mut self,
        block: Block,
        after_index: Option<usize>,
    ) -> Result<usize, ComposerError> {
        self.store.insert(block, after_index)
    }

    /// Handle a palette drop: insert a fresh block of the tagged kind,
    /// activate it and open the editor. Returns the new block's position.
    ///
    /// Insertion and activation are one store mutation, so a failure leaves
    /// neither behind.
    pub fn drop_block(
        &mut self,
        tag: &str,
        after_index: Option<usize>,
    ) -> Result<usize, ComposerError> {
        let kind = tag.parse::<BlockKind>().inspect_err(|_| {
            log::debug!("Ignoring drop with unrecognized payload {tag:?}");
        })?;

        let position = self.store.insert_active(Block::fresh(kind), after_index)?;
        self.mode = RenderMode::Edit;
        Ok(position)
    }

    /// Insert an inactive duplicate right after `index` and switch to the
    /// editor. The current active block, if any, stays active.
    pub fn copy_block(&mut self, index: usize) -> Result<usize, ComposerError> {
        let copy = self
            .store
            .get_at(index)
            .ok_or(ComposerError::InvalidIndex {
                index,
                len: self.store.len(),
            })?
            .duplicate();

        let position = self.store.insert(copy, Some(index))?;
        self.mode = RenderMode::Edit;
        Ok(position)
    }

    pub fn delete_block(&mut self, index: usize) -> Result<Block, ComposerError> {
        let removed = self.store.remove_at(index)?;
        self.mode = RenderMode::Browse;
        Ok(removed)
    }

    pub fn edit_block(&mut self, index: usize) -> Result<(), ComposerError> {
        self.store.set_active(index)?;
        self.mode = RenderMode::Edit;
        Ok(())
    }

    pub fn update_content(&mut self, content: impl Into<String>) -> Result<(), ComposerError> {
        self.store.update_active_content(content)?;
        self.mode = RenderMode::Edit;
        Ok(())
    }

    /// Leave the editor. The active flag is kept.
    pub fn close_editor(&mut self) {
        self.mode = RenderMode::Browse;
    }

    pub fn reset_template(&mut self) -> Result<(), ComposerError> {
        self.store.reset()?;
        self.mode = RenderMode::Browse;
        Ok(())
    }
}
