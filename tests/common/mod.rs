//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use tedit::config::EditorConfig;
use tedit::editable::Position;
use tedit::messages::Msg;
use tedit::model::{AppModel, CHROME_ROWS};
use tedit::update::update;

/// Terminal size used by `test_model`: 25 text rows
pub const TEST_COLS: u16 = 80;
pub const TEST_ROWS: u16 = 27;

/// Create a test model with given text and cursor position
pub fn test_model(text: &str, row: usize, col: usize) -> AppModel {
    let mut model = AppModel::new(EditorConfig::default(), TEST_COLS, TEST_ROWS);
    model.document.load_text(text);
    model.document.set_cursor(Position::new(row, col));
    model
}

/// Create a model with a small document geometry and text area height
///
/// `cols` counts the terminator, so rows hold `cols - 1` bytes; the last of
/// the `rows` slots never holds content.
pub fn small_model(text: &str, rows: usize, cols: usize, height: usize) -> AppModel {
    let config = EditorConfig {
        rows,
        cols,
        ..EditorConfig::default()
    };
    let term_rows = (height + CHROME_ROWS) as u16;
    let mut model = AppModel::new(config, TEST_COLS, term_rows);
    model.document.load_text(text);
    model
}

/// Document content, rows joined with `\n`
pub fn doc_text(model: &AppModel) -> String {
    model.document.text()
}

/// Cursor as (row, col)
pub fn cursor(model: &AppModel) -> (usize, usize) {
    (model.document.cursor.row, model.document.cursor.col)
}

/// Send several messages in order
pub fn send_all(model: &mut AppModel, msgs: impl IntoIterator<Item = Msg>) {
    for msg in msgs {
        update(model, msg);
    }
}

/// Type a string one character at a time
pub fn type_text(model: &mut AppModel, text: &str) {
    send_all(model, text.chars().map(Msg::insert_char));
}

/// Panic with the violated invariant, if any
pub fn assert_invariants(model: &AppModel) {
    if let Err(e) = model.document.check_invariants() {
        panic!("invariant violated: {}", e);
    }
}
