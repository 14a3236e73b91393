//! Scrolling tests - viewport follows the cursor, paging, redraw marking

mod common;

use common::{cursor, small_model, test_model};
use tedit::editable::Position;
use tedit::messages::{AppMsg, Direction, DocumentMsg, EditorMsg, Msg};
use tedit::model::AppModel;
use tedit::update::update;

fn numbered(count: usize, height: usize) -> AppModel {
    let text = (0..count)
        .map(|i| format!("line {}", i))
        .collect::<Vec<_>>()
        .join("\n");
    small_model(&text, 100, 40, height)
}

fn offset(model: &AppModel) -> usize {
    model.document.viewport.offset
}

fn clear_all_dirty(model: &mut AppModel) {
    for row in 0..model.document.row_count() {
        model.document.clear_dirty(row);
    }
}

#[test]
fn test_move_down_scrolls_one_row_past_bottom() {
    let mut model = numbered(20, 5);
    for _ in 0..4 {
        update(&mut model, Msg::move_cursor(Direction::Down));
    }
    assert_eq!(cursor(&model), (4, 0));
    assert_eq!(offset(&model), 0);

    update(&mut model, Msg::move_cursor(Direction::Down));
    assert_eq!(cursor(&model), (5, 0));
    assert_eq!(offset(&model), 1);
}

#[test]
fn test_move_up_scrolls_back() {
    let mut model = numbered(20, 5);
    model.document.set_cursor(Position::new(5, 0));
    assert_eq!(offset(&model), 1);

    for _ in 0..4 {
        update(&mut model, Msg::move_cursor(Direction::Up));
    }
    assert_eq!(offset(&model), 1);

    update(&mut model, Msg::move_cursor(Direction::Up));
    assert_eq!(cursor(&model), (0, 0));
    assert_eq!(offset(&model), 0);
}

#[test]
fn test_page_down_inside_view_keeps_offset() {
    let mut model = numbered(20, 5);
    clear_all_dirty(&mut model);
    update(&mut model, Msg::Editor(EditorMsg::PageDown));

    assert_eq!(cursor(&model), (4, 0));
    assert_eq!(offset(&model), 0);
    assert!(model.document.screen_lines().iter().all(|l| !l.dirty));
}

#[test]
fn test_page_down_past_view_shifts_a_page() {
    let mut model = numbered(20, 5);
    update(&mut model, Msg::Editor(EditorMsg::PageDown));
    update(&mut model, Msg::Editor(EditorMsg::PageDown));
    assert_eq!(cursor(&model), (8, 0));
    assert_eq!(offset(&model), 4);

    update(&mut model, Msg::Editor(EditorMsg::PageDown));
    assert_eq!(cursor(&model), (12, 0));
    assert_eq!(offset(&model), 8);
}

#[test]
fn test_page_up_moves_cursor_and_view() {
    let mut model = numbered(20, 5);
    update(&mut model, Msg::Editor(EditorMsg::PageDown));
    update(&mut model, Msg::Editor(EditorMsg::PageDown));
    update(&mut model, Msg::Editor(EditorMsg::PageDown));
    update(&mut model, Msg::Editor(EditorMsg::PageUp));
    assert_eq!(cursor(&model), (8, 0));
    assert_eq!(offset(&model), 8);

    update(&mut model, Msg::Editor(EditorMsg::PageUp));
    assert_eq!(cursor(&model), (4, 0));
    assert_eq!(offset(&model), 4);

    update(&mut model, Msg::Editor(EditorMsg::PageUp));
    update(&mut model, Msg::Editor(EditorMsg::PageUp));
    assert_eq!(cursor(&model), (0, 0));
    assert_eq!(offset(&model), 0);
}

#[test]
fn test_page_down_stops_at_last_row() {
    let mut model = numbered(7, 5);
    for _ in 0..5 {
        update(&mut model, Msg::Editor(EditorMsg::PageDown));
    }
    assert_eq!(cursor(&model).0, 6);
    assert!(model.document.is_row_visible(6));
}

#[test]
fn test_short_document_never_scrolls() {
    let mut model = numbered(3, 5);
    update(&mut model, Msg::Editor(EditorMsg::PageDown));
    assert_eq!(cursor(&model), (2, 0));
    assert_eq!(offset(&model), 0);
}

#[test]
fn test_horizontal_moves_never_scroll() {
    let mut model = numbered(20, 5);
    model.document.set_cursor(Position::new(10, 3));
    let before = offset(&model);

    update(&mut model, Msg::move_cursor(Direction::Left));
    update(&mut model, Msg::Editor(EditorMsg::LineEnd));
    update(&mut model, Msg::Editor(EditorMsg::LineStart));

    assert_eq!(offset(&model), before);
}

#[test]
fn test_scrolling_marks_visible_rows_dirty() {
    let mut model = numbered(20, 5);
    model.document.set_cursor(Position::new(4, 0));
    clear_all_dirty(&mut model);

    update(&mut model, Msg::move_cursor(Direction::Down));

    assert_eq!(offset(&model), 1);
    assert!(model.document.screen_lines().iter().all(|l| l.dirty));
}

#[test]
fn test_move_without_scroll_leaves_rows_clean() {
    let mut model = numbered(20, 5);
    clear_all_dirty(&mut model);

    update(&mut model, Msg::move_cursor(Direction::Down));

    assert!(model.document.screen_lines().iter().all(|l| !l.dirty));
}

#[test]
fn test_split_at_bottom_scrolls() {
    let mut model = numbered(5, 5);
    model.document.set_cursor(Position::new(4, 6));
    update(&mut model, Msg::Document(DocumentMsg::InsertNewline));

    assert_eq!(cursor(&model), (5, 0));
    assert_eq!(offset(&model), 1);
}

#[test]
fn test_split_marks_rows_below_dirty() {
    let mut model = numbered(5, 5);
    model.document.set_cursor(Position::new(1, 2));
    clear_all_dirty(&mut model);

    update(&mut model, Msg::Document(DocumentMsg::InsertNewline));

    let lines = model.document.screen_lines();
    assert!(!lines[0].dirty);
    assert!(lines[1..].iter().all(|l| l.dirty));
}

#[test]
fn test_resize_changes_viewport_height() {
    let mut model = test_model("a\nb\nc", 0, 0);
    update(&mut model, Msg::App(AppMsg::Resize(80, 12)));
    assert_eq!(model.document.viewport.height, 10);
    assert_eq!(model.window_size, (80, 12));
}

#[test]
fn test_shrinking_keeps_cursor_visible() {
    let mut model = numbered(30, 20);
    model.document.set_cursor(Position::new(15, 0));
    assert_eq!(offset(&model), 0);

    update(&mut model, Msg::App(AppMsg::Resize(80, 7)));

    assert!(model.document.is_row_visible(15));
}
