//! Text helpers for the terminal renderer

use tedit::model::StatusBarLayout;

/// Printable form of a stored byte
pub fn display_char(byte: u8) -> char {
    match byte {
        b' '..=b'~' => byte as char,
        // Latin-1 upper half maps directly onto Unicode
        0xa0..=0xff => char::from(byte),
        _ => '?',
    }
}

/// Cut `text` to at most `width` characters
pub fn fit_to_width(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}

/// Compose a status line `width` cells wide from a segment layout
pub fn compose_status_line(layout: &StatusBarLayout, width: usize) -> String {
    let mut line = vec![' '; width];
    for segment in layout.left.iter().chain(layout.right.iter()) {
        for (i, ch) in segment.text.chars().enumerate() {
            if let Some(cell) = line.get_mut(segment.x + i) {
                *cell = ch;
            }
        }
    }
    line.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tedit::model::{RenderedSegment, SegmentId};

    #[test]
    fn test_display_char() {
        assert_eq!(display_char(b'a'), 'a');
        assert_eq!(display_char(b' '), ' ');
        assert_eq!(display_char(0x07), '?');
        assert_eq!(display_char(0xe9), 'é');
    }

    #[test]
    fn test_fit_to_width() {
        assert_eq!(fit_to_width("hello", 3), "hel");
        assert_eq!(fit_to_width("hi", 10), "hi");
    }

    #[test]
    fn test_compose_status_line() {
        let layout = StatusBarLayout {
            left: vec![RenderedSegment {
                id: SegmentId::FileName,
                x: 1,
                width: 3,
                text: "a.t".to_string(),
            }],
            right: vec![RenderedSegment {
                id: SegmentId::Mode,
                x: 7,
                width: 3,
                text: "INS".to_string(),
            }],
        };
        assert_eq!(compose_status_line(&layout, 10), " a.t   INS");
        // Segments past the edge are clipped
        assert_eq!(compose_status_line(&layout, 8), " a.t   I");
    }
}
