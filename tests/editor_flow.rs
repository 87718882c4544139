use chipline::chip::{keys, Outcome, TokenListEditor};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::cell::RefCell;
use std::rc::Rc;

fn press(editor: &mut TokenListEditor, code: KeyCode) -> Outcome {
    editor.handle_key_press(&KeyEvent::new(code, KeyModifiers::NONE))
}

fn release(editor: &mut TokenListEditor, code: KeyCode) -> Outcome {
    editor.handle_key_release(&KeyEvent::new_with_kind(
        code,
        KeyModifiers::NONE,
        KeyEventKind::Release,
    ))
}

fn type_str(editor: &mut TokenListEditor, text: &str) {
    for c in text.chars() {
        press(editor, KeyCode::Char(c));
        release(editor, KeyCode::Char(c));
    }
}

#[test]
fn end_to_end_tag_entry() {
    let calls: Rc<RefCell<Vec<Vec<String>>>> = Rc::new(RefCell::new(vec![]));
    let sink = Rc::clone(&calls);
    let mut editor = TokenListEditor::with_tokens(vec!["a".to_string(), "b".to_string()])
        .on_change(move |tokens| sink.borrow_mut().push(tokens.to_vec()));

    // type "c" then Enter
    type_str(&mut editor, "c");
    press(&mut editor, KeyCode::Enter);
    release(&mut editor, KeyCode::Enter);
    assert_eq!(editor.tokens(), ["a", "b", "c"]);

    // a multi-word entry committed by Space, one word at a time
    type_str(&mut editor, "one");
    press(&mut editor, KeyCode::Char(' '));
    release(&mut editor, KeyCode::Char(' '));
    type_str(&mut editor, "two");
    press(&mut editor, KeyCode::Char(','));
    release(&mut editor, KeyCode::Char(','));
    assert_eq!(editor.tokens(), ["a", "b", "c", "one", "two"]);

    // backspace with an empty field peels tokens off the end
    press(&mut editor, KeyCode::Backspace);
    release(&mut editor, KeyCode::Backspace);
    assert_eq!(editor.tokens(), ["a", "b", "c", "one"]);

    // the observer saw every mutation, in order, with the full list
    let calls = calls.borrow();
    assert_eq!(calls.len(), 4);
    assert_eq!(calls[0], ["a", "b", "c"]);
    assert_eq!(calls[3], ["a", "b", "c", "one"]);
}

#[test]
fn delimiter_keys_all_commit_the_same_way() {
    for code in keys::DELIMITERS {
        let mut editor = TokenListEditor::new();
        type_str(&mut editor, "s");
        assert_eq!(press(&mut editor, code), Outcome::Suppressed);
        assert_eq!(release(&mut editor, code), Outcome::Suppressed);
        assert_eq!(editor.tokens(), ["s"], "delimiter {code:?}");
        assert_eq!(editor.pending(), "");
    }
}

#[test]
fn uncommitted_text_survives_focus_loss() {
    let mut editor = TokenListEditor::new();
    type_str(&mut editor, "draft");
    editor.handle_blur();
    assert_eq!(editor.tokens(), ["draft"]);
}

#[test]
fn empty_list_backspace_fires_no_observer() {
    let calls: Rc<RefCell<Vec<Vec<String>>>> = Rc::new(RefCell::new(vec![]));
    let sink = Rc::clone(&calls);
    let mut editor =
        TokenListEditor::new().on_change(move |tokens| sink.borrow_mut().push(tokens.to_vec()));
    press(&mut editor, KeyCode::Backspace);
    release(&mut editor, KeyCode::Backspace);
    assert!(editor.tokens().is_empty());
    assert!(calls.borrow().is_empty());
}

#[test]
fn delimiter_never_leaks_into_the_field() {
    let mut editor = TokenListEditor::new();
    type_str(&mut editor, "ab");
    // press fires before release; the space must not be inserted in between
    assert_eq!(press(&mut editor, KeyCode::Char(' ')), Outcome::Suppressed);
    assert_eq!(editor.pending(), "ab");
    release(&mut editor, KeyCode::Char(' '));
    assert_eq!(editor.tokens(), ["ab"]);
    assert_eq!(editor.pending(), "");
}

#[test]
fn disabled_editor_still_accepts_keyboard_entry() {
    let mut editor = TokenListEditor::with_tokens(vec!["locked".to_string()]).disabled(true);
    type_str(&mut editor, "new");
    press(&mut editor, KeyCode::Enter);
    release(&mut editor, KeyCode::Enter);
    assert_eq!(editor.tokens(), ["locked", "new"]);
    // interactive removal is what disabled suppresses
    editor.click_chip(0);
    assert_eq!(editor.tokens(), ["locked", "new"]);
}
