//! Keyboard and mouse input mapping
//!
//! Terminal events become messages here; nothing in this module touches the
//! model. While a prompt is open every key is routed to it.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use tedit::messages::{
    AppMsg, Direction, DocumentMsg, EditorMsg, ModalMsg, Msg, SelectionMsg, UiMsg,
};

/// Screen row of the first text line (the title line sits above it)
pub const TEXT_TOP: u16 = 1;

fn arrow(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up => Some(Direction::Up),
        KeyCode::Down => Some(Direction::Down),
        KeyCode::Left => Some(Direction::Left),
        KeyCode::Right => Some(Direction::Right),
        _ => None,
    }
}

/// Map a key press to a message
///
/// Releases and repeats reported by some terminals are ignored.
pub fn map_key(key: KeyEvent, modal_open: bool) -> Option<Msg> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if modal_open {
        return map_modal_key(key).map(Msg::modal);
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    if ctrl {
        return match key.code {
            KeyCode::Char('c' | 'C') => Some(Msg::Selection(SelectionMsg::Copy)),
            KeyCode::Char('x' | 'X') => Some(Msg::Selection(SelectionMsg::Cut)),
            KeyCode::Char('v' | 'V') => Some(Msg::Selection(SelectionMsg::Paste)),
            KeyCode::Char('o' | 'O') => Some(Msg::App(AppMsg::OpenFile)),
            KeyCode::Char('s' | 'S') if shift => Some(Msg::App(AppMsg::SaveFileAs)),
            KeyCode::Char('S') => Some(Msg::App(AppMsg::SaveFileAs)),
            KeyCode::Char('s') => Some(Msg::App(AppMsg::SaveFile)),
            KeyCode::Char('a' | 'A') => Some(Msg::App(AppMsg::SaveFileAs)),
            KeyCode::Char('n' | 'N') => Some(Msg::App(AppMsg::NewFile)),
            KeyCode::Char('w' | 'W') => Some(Msg::App(AppMsg::CloseFile)),
            KeyCode::Char('q' | 'Q') => Some(Msg::App(AppMsg::Quit)),
            _ => None,
        };
    }

    if let Some(direction) = arrow(key.code) {
        let msg = if shift {
            EditorMsg::MoveCursorWithSelection(direction)
        } else {
            EditorMsg::MoveCursor(direction)
        };
        return Some(Msg::Editor(msg));
    }

    match key.code {
        KeyCode::PageUp => Some(Msg::Editor(EditorMsg::PageUp)),
        KeyCode::PageDown => Some(Msg::Editor(EditorMsg::PageDown)),
        KeyCode::Home => Some(Msg::Editor(EditorMsg::LineStart)),
        KeyCode::End => Some(Msg::Editor(EditorMsg::LineEnd)),
        KeyCode::Insert => Some(Msg::Editor(EditorMsg::ToggleOverwrite)),
        KeyCode::Enter => Some(Msg::Document(DocumentMsg::InsertNewline)),
        KeyCode::Backspace => Some(Msg::Document(DocumentMsg::DeleteBackward)),
        KeyCode::Delete => Some(Msg::Document(DocumentMsg::DeleteForward)),
        KeyCode::Tab => Some(Msg::Document(DocumentMsg::InsertTab)),
        KeyCode::Esc => Some(Msg::Selection(SelectionMsg::ClearMark)),
        KeyCode::Char(ch) if !alt => Some(Msg::insert_char(ch)),
        _ => None,
    }
}

fn map_modal_key(key: KeyEvent) -> Option<ModalMsg> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => Some(ModalMsg::Close),
        KeyCode::Char('c' | 'q') if ctrl => Some(ModalMsg::Close),
        KeyCode::Enter => Some(ModalMsg::Confirm),
        KeyCode::Backspace => Some(ModalMsg::DeleteBackward),
        KeyCode::Delete => Some(ModalMsg::DeleteForward),
        KeyCode::Home => Some(ModalMsg::LineStart),
        KeyCode::End => Some(ModalMsg::LineEnd),
        KeyCode::Char(ch) if !ctrl => Some(ModalMsg::InsertChar(ch)),
        code => arrow(code).map(ModalMsg::MoveCursor),
    }
}

/// Map a mouse event to the messages it produces
///
/// Pressing the left button drops any mark, places the cursor and starts a
/// new mark; dragging extends it and releasing fixes it. Events outside the
/// text area, or anything while a prompt is open, are ignored.
pub fn map_mouse(event: MouseEvent, text_rows: usize, modal_open: bool) -> Vec<Msg> {
    if modal_open {
        return Vec::new();
    }
    // A drag may end over the title or status line
    if event.kind == MouseEventKind::Up(MouseButton::Left) {
        return vec![Msg::Selection(SelectionMsg::StopMark)];
    }
    if event.row < TEXT_TOP {
        return Vec::new();
    }
    let screen_row = (event.row - TEXT_TOP) as usize;
    if screen_row >= text_rows {
        return Vec::new();
    }
    let click = Msg::Editor(EditorMsg::Click {
        screen_row,
        screen_col: event.column as usize,
    });

    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => vec![
            Msg::Selection(SelectionMsg::ClearMark),
            click,
            Msg::Selection(SelectionMsg::StartMark),
        ],
        MouseEventKind::Drag(MouseButton::Left) => {
            vec![click, Msg::Selection(SelectionMsg::ExtendMark)]
        }
        _ => Vec::new(),
    }
}

/// Message sent on every poll timeout
pub fn tick() -> Msg {
    Msg::Ui(UiMsg::Tick)
}
