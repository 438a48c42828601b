/*!
 * # Editing Core
 *
 * Three layers with a strict call direction:
 *
 * ### 1. Store: single owner of the template
 * - Owns the ordered [`Template`](crate::Template) and every primitive mutation
 * - Persists the serialized sequence under a fixed key after **every** mutation
 * - Keeps the invariant that at most one block is active
 *
 * ### 2. Controller: user intents to store operations
 * - Add, drop, copy, delete, edit and update-content operations
 * - Owns the two-state [`RenderMode`] machine (Browse / Edit)
 * - Never touches presentation
 *
 * ### 3. Composer: the presentation seam
 * - Dispatches [`Intent`]s from the UI to the controller
 * - After each successful intent, hands the **full** block sequence and mode
 *   to the [`Presenter`] (pull-based, no diffing)
 * - Failed intents render nothing and leave state unchanged
 *
 * Blocks are addressed by position. Any insertion or removal before a
 * position invalidates indices captured earlier, so the UI re-reads the
 * sequence on every render.
 *
 * ## Usage Pattern
 *
 * ```rust
 * use mailcanvas_engine::*;
 *
 * let store = Store::load(MemoryStore::new(), DEFAULT_STORAGE_KEY);
 * let controller = Controller::new(store);
 * # struct Silent;
 * # impl Presenter for Silent {
 * #     fn display_template(&mut self, _: &[Block], _: RenderMode) {}
 * #     fn edited_text(&self) -> String { "<p>Hello</p>".to_string() }
 * # }
 * let mut composer = Composer::start(controller, Silent);
 *
 * composer.handle(Intent::Edit(0)).unwrap();
 * composer.handle(Intent::Submit).unwrap();
 * assert_eq!(composer.controller().active_block().unwrap().content(), Some("<p>Hello</p>"));
 * ```
 */

pub mod composer;
pub mod controller;
pub mod store;

pub use composer::{Composer, Intent, Presenter};
pub use controller::{Controller, RenderMode};
pub use store::{DEFAULT_STORAGE_KEY, Store};
