//! Card Editor
//!
//! View/edit state machine for a single card, independent of any UI
//! toolkit's focus model:
//!
//! ```text
//! Viewing --activate--> Editing --blur--> Viewing   (commit, always)
//!                       Editing --Backspace on empty draft--> delete
//! ```
//!
//! The editor holds a render-scoped copy of one card's id and content; the
//! board collection stays the owner of the durable record.

use crate::domain::{Card, PLACEHOLDER_TEXT};

/// Presentation state of a card
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardMode {
    Viewing,
    Editing {
        /// Content at the moment editing started
        original: String,
        /// Current text of the edit surface
        draft: String,
        /// Caret position, in characters
        caret: usize,
    },
}

/// Keys the editor reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKey {
    Backspace,
    Other,
}

impl EditKey {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_key(key: &str) -> Self {
        match key {
            "Backspace" => EditKey::Backspace,
            _ => EditKey::Other,
        }
    }
}

/// What a keystroke did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Not handled here; the text surface keeps its default behavior
    Ignored,
    /// The draft changed
    Edited,
    /// The card was empty: delete it instead of editing
    Delete(u64),
}

/// Result of leaving edit mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    /// The card carrying the committed text
    pub card: Card,
    /// Whether the text differs from what it was when editing started
    pub changed: bool,
}

/// Single card's view/edit state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardEditor {
    card: Card,
    mode: CardMode,
}

impl CardEditor {
    pub fn new(card: &Card) -> Self {
        Self {
            card: card.clone(),
            mode: CardMode::Viewing,
        }
    }

    pub fn id(&self) -> u64 {
        self.card.id
    }

    pub fn mode(&self) -> &CardMode {
        &self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, CardMode::Editing { .. })
    }

    /// Text of the edit surface while editing, else the card content
    pub fn content(&self) -> &str {
        match &self.mode {
            CardMode::Editing { draft, .. } => draft,
            CardMode::Viewing => &self.card.content,
        }
    }

    /// What the card shows: content, or the placeholder when empty
    pub fn display_text(&self) -> &str {
        let content = self.content();
        if content.is_empty() {
            PLACEHOLDER_TEXT
        } else {
            content
        }
    }

    /// Viewing -> Editing; the draft starts as the current content with the
    /// caret at the start
    pub fn activate(&mut self) {
        if self.is_editing() {
            return;
        }
        self.mode = CardMode::Editing {
            original: self.card.content.clone(),
            draft: self.card.content.clone(),
            caret: 0,
        };
    }

    /// Mirror the edit surface's value and caret. Ignored while viewing.
    pub fn input(&mut self, text: impl Into<String>, caret: usize) {
        if let CardMode::Editing { draft, caret: at, .. } = &mut self.mode {
            *draft = text.into();
            *at = caret.min(draft.chars().count());
        }
    }

    /// Insert at the caret and move the caret past the inserted text
    pub fn type_text(&mut self, text: &str) {
        if let CardMode::Editing { draft, caret, .. } = &mut self.mode {
            let at = byte_offset(draft, *caret);
            draft.insert_str(at, text);
            *caret += text.chars().count();
        }
    }

    /// Handle a keystroke in edit mode. Backspace on an empty draft asks for
    /// deletion; on a non-empty draft it removes the character before the
    /// caret.
    pub fn key_down(&mut self, key: EditKey) -> KeyOutcome {
        let id = self.card.id;
        let CardMode::Editing { draft, caret, .. } = &mut self.mode else {
            return KeyOutcome::Ignored;
        };
        match key {
            EditKey::Backspace if draft.is_empty() => KeyOutcome::Delete(id),
            EditKey::Backspace => {
                if *caret > 0 {
                    let at = byte_offset(draft, *caret - 1);
                    draft.remove(at);
                    *caret -= 1;
                }
                KeyOutcome::Edited
            }
            EditKey::Other => KeyOutcome::Ignored,
        }
    }

    /// Editing -> Viewing. Always commits, changed or not.
    pub fn blur(&mut self) -> Option<Commit> {
        let CardMode::Editing { original, draft, .. } =
            std::mem::replace(&mut self.mode, CardMode::Viewing)
        else {
            return None;
        };
        let changed = draft != original;
        self.card.content = draft;
        Some(Commit {
            card: self.card.clone(),
            changed,
        })
    }

    /// Take the reconciled record from the collection. Ignored while
    /// editing so a round-trip never clobbers the draft.
    pub fn sync(&mut self, card: &Card) {
        if !self.is_editing() && card.id == self.card.id {
            self.card = card.clone();
        }
    }
}

fn byte_offset(text: &str, chars: usize) -> usize {
    text.char_indices()
        .nth(chars)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{create_card, CardOverrides};

    fn editor(content: &str) -> CardEditor {
        CardEditor::new(&create_card(CardOverrides::content(content)))
    }

    #[test]
    fn test_starts_viewing() {
        let ed = editor("Test content");
        assert_eq!(ed.mode(), &CardMode::Viewing);
        assert_eq!(ed.display_text(), "Test content");
    }

    #[test]
    fn test_activate_enters_editing_with_content() {
        let mut ed = editor("Test content");
        ed.activate();
        assert!(ed.is_editing());
        assert_eq!(ed.content(), "Test content");
    }

    #[test]
    fn test_blur_exits_editing() {
        let mut ed = editor("X");
        ed.activate();
        ed.blur();
        assert!(!ed.is_editing());
    }

    #[test]
    fn test_blur_unchanged_still_commits_once() {
        let mut ed = editor("X");
        ed.activate();

        let commit = ed.blur().expect("commit");
        assert_eq!(commit.card.content, "X");
        assert!(!commit.changed);
        assert_eq!(ed.blur(), None);
    }

    #[test]
    fn test_input_replaces_draft() {
        let mut ed = editor("Test content");
        ed.activate();
        ed.input("changedVal", 10);
        assert_eq!(ed.content(), "changedVal");

        let commit = ed.blur().unwrap();
        assert!(commit.changed);
        assert_eq!(commit.card.content, "changedVal");
    }

    #[test]
    fn test_input_ignored_while_viewing() {
        let mut ed = editor("keep");
        ed.input("lost", 0);
        assert_eq!(ed.content(), "keep");
    }

    #[test]
    fn test_typing_inserts_before_existing_content() {
        let mut ed = editor("test-content");
        ed.activate();
        ed.type_text("changed content");
        let commit = ed.blur().unwrap();
        assert_eq!(commit.card.content, "changed contenttest-content");
        assert!(commit.card.content.contains("changed content"));
    }

    #[test]
    fn test_backspace_on_empty_requests_delete() {
        let mut ed = editor("");
        ed.activate();
        let id = ed.id();
        assert_eq!(ed.key_down(EditKey::Backspace), KeyOutcome::Delete(id));
    }

    #[test]
    fn test_backspace_on_content_edits() {
        let mut ed = editor("abc");
        ed.activate();
        ed.input("abc", 3);
        assert_eq!(ed.key_down(EditKey::Backspace), KeyOutcome::Edited);
        assert_eq!(ed.content(), "ab");
    }

    #[test]
    fn test_backspace_at_start_removes_nothing() {
        let mut ed = editor("abc");
        ed.activate();
        assert_eq!(ed.key_down(EditKey::Backspace), KeyOutcome::Edited);
        assert_eq!(ed.content(), "abc");
    }

    #[test]
    fn test_backspace_until_empty_then_delete() {
        let mut ed = editor("hi");
        ed.activate();
        ed.input("hi", 2);
        assert_eq!(ed.key_down(EditKey::Backspace), KeyOutcome::Edited);
        assert_eq!(ed.key_down(EditKey::Backspace), KeyOutcome::Edited);
        assert_eq!(ed.content(), "");
        assert_eq!(ed.key_down(EditKey::Backspace), KeyOutcome::Delete(ed.id()));
    }

    #[test]
    fn test_backspace_handles_multibyte_chars() {
        let mut ed = editor("héé");
        ed.activate();
        ed.input("héé", 2);
        ed.key_down(EditKey::Backspace);
        assert_eq!(ed.content(), "hé");
    }

    #[test]
    fn test_keys_ignored_while_viewing() {
        let mut ed = editor("");
        assert_eq!(ed.key_down(EditKey::Backspace), KeyOutcome::Ignored);
    }

    #[test]
    fn test_placeholder_for_empty_card() {
        let ed = editor("");
        assert_eq!(ed.display_text(), PLACEHOLDER_TEXT);
    }

    #[test]
    fn test_sync_skipped_while_editing() {
        let card = create_card(CardOverrides::content("old"));
        let mut ed = CardEditor::new(&card);
        ed.activate();
        ed.sync(&card.with_content("server"));
        assert_eq!(ed.content(), "old");

        ed.blur();
        ed.sync(&card.with_content("server"));
        assert_eq!(ed.content(), "server");
    }

    #[test]
    fn test_sync_shows_reverted_record() {
        let card = create_card(CardOverrides::content("kept"));
        let mut cards = crate::board::Cards::from(vec![card.clone()]);
        let mut ed = CardEditor::new(&card);
        ed.activate();
        ed.type_text("lost ");
        let commit = ed.blur().unwrap();
        let change = cards.update(commit.card).unwrap();
        assert_eq!(ed.display_text(), "lost kept");

        let _ = cards.settle(&change, Err(crate::store::StoreError::Network("down".into())));
        ed.sync(cards.get(card.id).unwrap());

        assert_eq!(ed.display_text(), "kept");
    }

    #[test]
    fn test_edit_key_from_dom_key() {
        assert_eq!(EditKey::from_key("Backspace"), EditKey::Backspace);
        assert_eq!(EditKey::from_key("a"), EditKey::Other);
    }
}
