//! The canvas keys cards by block id while every callback addresses blocks
//! by position. These tests pin down that ids survive the edits the canvas
//! performs, so a card keeps its DOM node when its neighbours shift.

use mailcanvas_engine::{BlockId, Controller, MemoryStore, Store};

fn controller() -> Controller<MemoryStore> {
    Controller::new(Store::load(MemoryStore::new(), "identity"))
}

fn ids(controller: &Controller<MemoryStore>) -> Vec<BlockId> {
    controller.store().get_all().iter().map(|b| b.id()).collect()
}

#[test]
fn test_ids_survive_drop_before_them() {
    let mut controller = controller();
    let before = ids(&controller);

    let position = controller.drop_block("text", Some(0)).unwrap();

    let after = ids(&controller);
    assert_eq!(position, 1);
    assert_eq!(after[0], before[0]);
    assert_eq!(&after[2..], &before[1..]);
    assert!(!before.contains(&after[1]));
}

#[test]
fn test_copy_gets_its_own_id() {
    let mut controller = controller();
    let original = controller.store().get_at(2).unwrap().id();

    let position = controller.copy_block(2).unwrap();

    let copy = controller.store().get_at(position).unwrap();
    assert_ne!(copy.id(), original);
    assert_eq!(copy, controller.store().get_at(2).unwrap());
}

#[test]
fn test_delete_keeps_remaining_ids_in_order() {
    let mut controller = controller();
    let before = ids(&controller);

    let removed = controller.delete_block(1).unwrap();

    let mut expected = before.clone();
    expected.remove(1);
    assert_eq!(removed.id(), before[1]);
    assert_eq!(ids(&controller), expected);
}

#[test]
fn test_single_active_card_after_repeated_selection() {
    let mut controller = controller();

    for index in [0, 3, 1, 3] {
        controller.edit_block(index).unwrap();
    }

    let active: Vec<usize> = controller
        .store()
        .get_all()
        .iter()
        .enumerate()
        .filter(|(_, b)| b.is_active())
        .map(|(i, _)| i)
        .collect();
    assert_eq!(active, vec![3]);
}
