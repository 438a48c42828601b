use crate::editing::controller::{Controller, RenderMode};
use crate::error::ComposerError;
use crate::models::Block;
use crate::storage::KeyValueStore;

/// Presentation capability driven by the [`Composer`]
pub trait Presenter {
    /// Regenerate the whole visual surface from the full ordered sequence
    fn display_template(&mut self, blocks: &[Block], mode: RenderMode);

    /// Text currently in the editor, read when an edit is submitted
    fn edited_text(&self) -> String;
}

/// A user intent forwarded from the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// A palette item carrying `tag` was dropped after `after` (or onto the
    /// canvas when `None`)
    Drop { tag: String, after: Option<usize> },
    /// A block on the canvas was clicked
    Select(usize),
    Edit(usize),
    Copy(usize),
    Delete(usize),
    /// Apply the presenter's edited text to the active block
    Submit,
    CloseEditor,
    Reset,
}

/// Wires intents to the controller and re-renders after every successful one.
pub struct Composer<S, P> {
    controller: Controller<S>,
    presenter: P,
}

impl<S: KeyValueStore, P: Presenter> Composer<S, P> {
    /// Take ownership of both sides and render the initial browse view
    pub fn start(mut controller: Controller<S>, presenter: P) -> Self {
        controller.close_editor();
        let mut composer = Self {
            controller,
            presenter,
        };
        composer.render();
        composer
    }

    /// Run `intent`. On success the presenter receives exactly one render;
    /// on failure nothing is rendered and the error is returned.
    pub fn handle(&mut self, intent: Intent) -> Result<(), ComposerError> {
        log::debug!("Handling {intent:?}");
        let controller = &mut self.controller;
        let outcome = match intent {
            Intent::Drop { tag, after } => controller.drop_block(&tag, after).map(drop),
            Intent::Select(index) | Intent::Edit(index) => controller.edit_block(index),
            Intent::Copy(index) => controller.copy_block(index).map(drop),
            Intent::Delete(index) => controller.delete_block(index).map(drop),
            Intent::Submit => {
                let text = self.presenter.edited_text();
                controller.update_content(text)
            }
            Intent::CloseEditor => {
                controller.close_editor();
                Ok(())
            }
            Intent::Reset => controller.reset_template(),
        };

        outcome?;
        self.render();
        Ok(())
    }

    pub fn controller(&self) -> &Controller<S> {
        &self.controller
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    fn render(&mut self) {
        self.presenter
            .display_template(self.controller.store().get_all(), self.controller.mode());
    }
}
