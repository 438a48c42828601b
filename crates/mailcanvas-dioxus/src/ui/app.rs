use crate::ui::components::{BlockPalette, EditorPanel, ErrorScreen, TemplateCanvas};
use crate::ui::view::ViewState;
use dioxus::prelude::*;
use mailcanvas_engine::render::render_email;
use mailcanvas_engine::{
    Composer, Controller, FileStore, Intent, KeyValueStore, RenderMode, StorageError, Store,
};
use std::path::{Path, PathBuf};

const MAILCANVAS_CSS: &str = include_str!("../../assets/mailcanvas.css");

type Session = Composer<FileStore, ViewState>;

fn open_session(storage_dir: &Path, storage_key: &str) -> Result<Session, StorageError> {
    let storage = FileStore::open(storage_dir)?;
    storage.check_key(storage_key)?;
    let store = Store::load(storage, storage_key);
    Ok(Composer::start(Controller::new(store), ViewState::default()))
}

/// Write the current template as a standalone email next to the stored state
fn export_html<S: KeyValueStore>(
    session: &Composer<S, ViewState>,
    storage: &FileStore,
) -> Result<PathBuf, StorageError> {
    let store = session.controller().store();
    let html = render_email(store.key(), store.get_all());
    storage.write_html(store.key(), &html)
}

#[component]
pub fn App(storage_dir: PathBuf, storage_key: String) -> Element {
    let mut session =
        use_signal(|| open_session(&storage_dir, &storage_key).map_err(|e| e.to_string()));
    let mut dragged_tag = use_signal(|| None::<String>);
    let mut notice = use_signal(|| None::<String>);

    let mut dispatch = move |intent: Intent| {
        let mut guard = session.write();
        let Ok(composer) = guard.as_mut() else {
            return;
        };
        match composer.handle(intent) {
            Ok(()) => notice.set(None),
            Err(e) => {
                log::warn!("Rejected action: {e}");
                notice.set(Some(e.to_string()));
            }
        }
    };

    let view = match &*session.read() {
        Ok(composer) => composer.presenter().clone(),
        Err(message) => {
            return rsx! {
                style { {MAILCANVAS_CSS} }
                ErrorScreen {
                    title: "Storage unavailable",
                    message: format!("Could not open {}", storage_dir.display()),
                    details: Some(message.clone()),
                }
            };
        }
    };

    let on_drop = move |after: Option<usize>| {
        // Nothing dragged from the palette, e.g. a file dropped from outside
        let Some(tag) = dragged_tag.write().take() else {
            return;
        };
        dispatch(Intent::Drop { tag, after });
    };

    let on_export = move |_: MouseEvent| {
        let guard = session.read();
        let Ok(composer) = guard.as_ref() else {
            return;
        };
        let result = export_html(composer, composer.controller().store().storage());
        match result {
            Ok(path) => {
                log::info!("Exported email to {}", path.display());
                notice.set(Some(format!("Exported to {}", path.display())));
            }
            Err(e) => {
                log::error!("Export failed: {e}");
                notice.set(Some(format!("Export failed: {e}")));
            }
        }
    };

    let active_block = view.active().map(|(_, block)| block.clone());

    rsx! {
        style { {MAILCANVAS_CSS} }
        div {
            class: "app-container",
            div {
                class: "sidebar",
                BlockPalette {
                    on_drag_start: move |tag: String| dragged_tag.set(Some(tag)),
                    on_drag_end: move |_| dragged_tag.set(None),
                    on_add: move |tag: String| dispatch(Intent::Drop { tag, after: None }),
                }
                div {
                    class: "sidebar-actions",
                    button { class: "export-button", onclick: on_export, "Export HTML" }
                    button {
                        class: "reset-button",
                        onclick: move |_| dispatch(Intent::Reset),
                        "Reset template"
                    }
                }
                if let Some(message) = notice.read().as_ref() {
                    p { class: "notice", "{message}" }
                }
            }
            div {
                class: "main-content",
                {match view.mode {
                    RenderMode::Browse => rsx! {
                        TemplateCanvas {
                            blocks: view.blocks.clone(),
                            on_drop,
                            on_select: move |index: usize| dispatch(Intent::Select(index)),
                            on_edit: move |index: usize| dispatch(Intent::Edit(index)),
                            on_copy: move |index: usize| dispatch(Intent::Copy(index)),
                            on_delete: move |index: usize| dispatch(Intent::Delete(index)),
                        }
                    },
                    RenderMode::Edit => rsx! {
                        EditorPanel {
                            block: active_block,
                            draft: view.draft.clone(),
                            on_draft: move |text: String| {
                                if let Ok(composer) = session.write().as_mut() {
                                    composer.presenter_mut().draft = text;
                                }
                            },
                            on_submit: move |_| dispatch(Intent::Submit),
                            on_close: move |_| dispatch(Intent::CloseEditor),
                        }
                    },
                }}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mailcanvas_engine::{DEFAULT_STORAGE_KEY, MemoryStore};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_open_session_starts_from_seed() {
        let dir = tempfile::tempdir().unwrap();

        let session = open_session(dir.path(), DEFAULT_STORAGE_KEY).unwrap();

        assert_eq!(session.presenter().blocks.len(), 5);
        assert_eq!(session.presenter().mode, RenderMode::Browse);
    }

    #[test]
    fn test_open_session_rejects_file_path() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("not-a-dir");
        std::fs::write(&file, "").unwrap();

        assert!(open_session(&file, DEFAULT_STORAGE_KEY).is_err());
    }

    #[test]
    fn test_open_session_rejects_unusable_key() {
        let dir = tempfile::tempdir().unwrap();

        for key in ["", "a/b", "../outside"] {
            let result = open_session(dir.path(), key);
            assert!(
                matches!(result, Err(StorageError::InvalidKey(_))),
                "key {key:?} was accepted"
            );
        }
    }

    #[test]
    fn test_session_persists_between_opens() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut session = open_session(dir.path(), "weekly").unwrap();
            session.handle(Intent::Delete(0)).unwrap();
        }

        let session = open_session(dir.path(), "weekly").unwrap();

        assert_eq!(session.presenter().blocks.len(), 4);
    }

    #[test]
    fn test_export_writes_email_document() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStore::open(dir.path()).unwrap();
        let store = Store::load(MemoryStore::new(), "newsletter");
        let session = Composer::start(Controller::new(store), ViewState::default());

        let path = export_html(&session, &storage).unwrap();

        assert_eq!(path, dir.path().join("newsletter.html"));
        let html = std::fs::read_to_string(path).unwrap();
        assert!(html.contains("<title>newsletter</title>"));
        assert!(html.contains("Your Newsletter"));
    }
}
