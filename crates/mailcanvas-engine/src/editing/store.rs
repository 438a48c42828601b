use crate::error::ComposerError;
use crate::models::{Block, Template};
use crate::storage::KeyValueStore;

/// Key the template is persisted under unless configured otherwise
pub const DEFAULT_STORAGE_KEY: &str = "mailcanvas-template";

/// Owns the template sequence and all primitive mutations.
///
/// Every successful mutation persists the serialized sequence before
/// returning. A failed operation, including a failed save, leaves the
/// sequence exactly as it was.
#[derive(Debug)]
pub struct Store<S> {
    template: Template,
    storage: S,
    key: String,
}

impl<S: KeyValueStore> Store<S> {
    /// Restore the template persisted under `key`, or start from the default
    /// seed when nothing usable is stored
    pub fn load(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let template = match storage.load(&key) {
            Ok(Some(json)) => match Template::from_json(&json) {
                Ok(template) => {
                    log::info!("Restored {} blocks from '{key}'", template.len());
                    template
                }
                Err(e) => {
                    log::warn!("Discarding persisted template under '{key}': {e}");
                    Template::default_seed()
                }
            },
            Ok(None) => {
                log::info!("No persisted template under '{key}', using default seed");
                Template::default_seed()
            }
            Err(e) => {
                log::warn!("Failed to read persisted template under '{key}': {e}");
                Template::default_seed()
            }
        };

        Self {
            template,
            storage,
            key,
        }
    }

    /// Insert `block` right after `after_index`, or append when no index is
    /// given or it is out of range.
    ///
    /// Returns `after_index + 1` for a positional insert and the new length
    /// when appending. The stored block is always inactive.
    pub fn insert(
        &mut self,
        block: Block,
        after_index: Option<usize>,
    ) -> Result<usize, ComposerError> {
        self.mutate(|template| Ok(insert_after(template, block, after_index)))
    }

    /// Insert `block` like [`Store::insert`] and make it the only active
    /// block, persisting once. Returns the new block's position.
    pub fn insert_active(
        &mut self,
        block: Block,
        after_index: Option<usize>,
    ) -> Result<usize, ComposerError> {
        self.mutate(|template| {
            let len_before = template.len();
            let result = insert_after(template, block, after_index);
            let position = match after_index {
                Some(index) if index < len_before => result,
                _ => result - 1,
            };
            activate(template, position)?;
            Ok(position)
        })
    }

    /// Remove and return the block at `index`
    pub fn remove_at(&mut self, index: usize) -> Result<Block, ComposerError> {
        self.mutate(|template| {
            check_index(template, index)?;
            Ok(template.blocks_mut().remove(index))
        })
    }

    pub fn get_at(&self, index: usize) -> Option<&Block> {
        self.template.get(index)
    }

    /// The live ordered sequence
    pub fn get_all(&self) -> &[Block] {
        self.template.blocks()
    }

    pub fn get_active(&self) -> Option<&Block> {
        self.template.active()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.template.active_index()
    }

    /// Make the block at `index` the only active block
    pub fn set_active(&mut self, index: usize) -> Result<(), ComposerError> {
        self.mutate(|template| activate(template, index))
    }

    /// Replace the content of the active block. An active divider stays
    /// without content, but the update still persists.
    pub fn update_active_content(
        &mut self,
        content: impl Into<String>,
    ) -> Result<(), ComposerError> {
        let content = content.into();
        self.mutate(|template| {
            let index = template
                .active_index()
                .ok_or(ComposerError::NoActiveBlock)?;
            template.blocks_mut()[index].set_content(content);
            Ok(())
        })
    }

    /// Replace the whole sequence with the default seed
    pub fn reset(&mut self) -> Result<(), ComposerError> {
        self.mutate(|template| {
            *template = Template::default_seed();
            Ok(())
        })
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn len(&self) -> usize {
        self.template.len()
    }

    pub fn is_empty(&self) -> bool {
        self.template.is_empty()
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Apply `change` and persist the result. If either step fails the
    /// template is restored to its state before the call.
    fn mutate<T>(
        &mut self,
        change: impl FnOnce(&mut Template) -> Result<T, ComposerError>,
    ) -> Result<T, ComposerError> {
        let previous = self.template.clone();
        let outcome = match change(&mut self.template) {
            Ok(value) => self.persist().map(|()| value),
            Err(e) => Err(e),
        };
        if outcome.is_err() {
            self.template = previous;
        }
        outcome
    }

    fn persist(&mut self) -> Result<(), ComposerError> {
        let json = self.template.to_json()?;
        self.storage.save(&self.key, &json).map_err(|e| {
            log::error!("Failed to persist template under '{}': {e}", self.key);
            ComposerError::Storage(e)
        })?;
        log::debug!("Persisted {} blocks under '{}'", self.template.len(), self.key);
        Ok(())
    }
}

fn insert_after(template: &mut Template, mut block: Block, after_index: Option<usize>) -> usize {
    block.set_active(false);
    let blocks = template.blocks_mut();
    match after_index {
        Some(index) if index < blocks.len() => {
            blocks.insert(index + 1, block);
            index + 1
        }
        _ => {
            blocks.push(block);
            blocks.len()
        }
    }
}

fn activate(template: &mut Template, index: usize) -> Result<(), ComposerError> {
    check_index(template, index)?;
    for (i, block) in template.blocks_mut().iter_mut().enumerate() {
        block.set_active(i == index);
    }
    Ok(())
}

fn check_index(template: &Template, index: usize) -> Result<(), ComposerError> {
    let len = template.len();
    if index < len {
        Ok(())
    } else {
        Err(ComposerError::InvalidIndex { index, len })
    }
}
