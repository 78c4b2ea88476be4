//! Board collection properties against the in-memory store.

use std::collections::HashSet;
use std::rc::Rc;

use corkboard_core::{
    create_many_cards, Board, CardEditor, CardOverrides, EditKey, FailureKind, KeyOutcome,
    MemoryCardStore, PLACEHOLDER_TEXT,
};
use proptest::prelude::*;
use proptest::test_runner::Config;

#[derive(Debug, Clone)]
enum Op {
    Add,
    AddFailing,
    Update(usize, String),
    UpdateFailing(usize),
    Delete(usize),
    DeleteFailing(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => Just(Op::Add),
        1 => Just(Op::AddFailing),
        2 => (any::<usize>(), "[a-z ]{0,12}").prop_map(|(i, s)| Op::Update(i, s)),
        1 => any::<usize>().prop_map(Op::UpdateFailing),
        1 => any::<usize>().prop_map(Op::Delete),
        1 => any::<usize>().prop_map(Op::DeleteFailing),
    ]
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("runtime")
}

proptest! {
    #![proptest_config(Config::with_cases(64))]

    #[test]
    fn collection_mirrors_store_and_ids_stay_unique(ops in prop::collection::vec(op(), 0..30)) {
        runtime().block_on(async {
            let store = Rc::new(MemoryCardStore::new());
            let mut board = Board::new(store.clone());

            for op in ops {
                let before = board.cards().len();
                match op {
                    Op::Add => {
                        board.add_card().await.expect("add");
                        prop_assert_eq!(board.cards().len(), before + 1);
                    }
                    Op::AddFailing => {
                        store.fail_next(FailureKind::Network);
                        prop_assert!(board.add_card().await.is_err());
                        prop_assert_eq!(board.cards().len(), before);
                    }
                    Op::Update(i, text) if before > 0 => {
                        let card = board.cards().as_slice()[i % before].with_content(text);
                        board.update_card(card).await.expect("update");
                    }
                    Op::UpdateFailing(i) if before > 0 => {
                        store.fail_next(FailureKind::Rejected);
                        let card = board.cards().as_slice()[i % before].with_content("lost");
                        prop_assert!(board.update_card(card).await.is_err());
                    }
                    Op::Delete(i) if before > 0 => {
                        let id = board.cards().as_slice()[i % before].id;
                        board.delete_card(id).await.expect("delete");
                        prop_assert_eq!(board.cards().len(), before - 1);
                    }
                    Op::DeleteFailing(i) if before > 0 => {
                        store.fail_next(FailureKind::Network);
                        let id = board.cards().as_slice()[i % before].id;
                        prop_assert!(board.delete_card(id).await.is_err());
                        prop_assert_eq!(board.cards().len(), before);
                    }
                    _ => {}
                }

                let ids: HashSet<u64> = board.cards().as_slice().iter().map(|c| c.id).collect();
                prop_assert_eq!(ids.len(), board.cards().len());
                prop_assert_eq!(board.cards().to_vec(), store.cards());
            }
            Ok(())
        })?;
    }
}

#[tokio::test]
async fn empty_card_backspace_deletes_it() {
    let store = Rc::new(MemoryCardStore::new());
    let mut board = Board::new(store.clone());
    board.load_all().await.unwrap();

    let card = board.add_card().await.unwrap();
    let mut editor = CardEditor::new(&card);
    assert_eq!(editor.display_text(), PLACEHOLDER_TEXT);

    editor.activate();
    let KeyOutcome::Delete(id) = editor.key_down(EditKey::Backspace) else {
        panic!("expected delete request");
    };
    board.delete_card(id).await.unwrap();

    assert!(board.cards().is_empty());
    assert!(store.cards().is_empty());
}

#[tokio::test]
async fn non_empty_card_backspace_never_deletes() {
    let store = Rc::new(MemoryCardStore::with_cards(create_many_cards(
        1,
        CardOverrides::content("abc"),
    )));
    let mut board = Board::new(store.clone());
    board.load_all().await.unwrap();

    let mut editor = CardEditor::new(&board.cards().as_slice()[0]);
    editor.activate();
    editor.input("abc", 3);
    assert_eq!(editor.key_down(EditKey::Backspace), KeyOutcome::Edited);

    let commit = editor.blur().unwrap();
    board.update_card(commit.card).await.unwrap();

    assert_eq!(board.cards().len(), 1);
    assert_eq!(store.cards()[0].content, "ab");
}

#[tokio::test]
async fn typed_text_reaches_board_and_store() {
    let store = Rc::new(MemoryCardStore::with_cards(create_many_cards(
        2,
        CardOverrides::content("test-content"),
    )));
    let mut board = Board::new(store.clone());
    board.load_all().await.unwrap();

    let mut editor = CardEditor::new(&board.cards().as_slice()[0]);
    editor.activate();
    editor.type_text("changed content");
    let commit = editor.blur().unwrap();
    let updated = board.update_card(commit.card).await.unwrap();
    editor.sync(&updated);

    assert!(editor.display_text().contains("changed content"));
    assert!(store.cards()[0].content.contains("changed content"));
}

#[tokio::test]
async fn unchanged_blur_still_sends_one_update() {
    let store = Rc::new(MemoryCardStore::with_cards(create_many_cards(
        1,
        CardOverrides::content("X"),
    )));
    let mut board = Board::new(store.clone());
    board.load_all().await.unwrap();

    let mut editor = CardEditor::new(&board.cards().as_slice()[0]);
    editor.activate();
    let commit = editor.blur().unwrap();
    board.update_card(commit.card).await.unwrap();

    let updates: Vec<_> = store
        .calls()
        .into_iter()
        .filter(|c| matches!(c, corkboard_core::StoreCall::Update(_, card) if card.content == "X"))
        .collect();
    assert_eq!(updates.len(), 1);
}
