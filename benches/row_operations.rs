//! Benchmarks for row store operations
//!
//! Run with: cargo bench row_operations

use tedit::editable::{Clipboard, Document, Mark, Position};
use tedit::file_io;

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

/// Editor-sized document with `rows` rows of sample text
fn filled(rows: usize) -> Document {
    Document::with_text(&"foo bar baz qux\n".repeat(rows))
}

// ============================================================================
// Character editing
// ============================================================================

#[divan::bench]
fn insert_char_middle_of_row(bencher: divan::Bencher) {
    bencher
        .with_inputs(|| {
            let mut doc = filled(500);
            doc.set_cursor(Position::new(250, 8));
            doc
        })
        .bench_local_values(|mut doc| {
            doc.insert_char(divan::black_box(b'x'), true).ok();
            doc
        });
}

#[divan::bench]
fn delete_char_joining_rows(bencher: divan::Bencher) {
    bencher
        .with_inputs(|| {
            let mut doc = filled(500);
            doc.set_cursor(Position::new(250, 0));
            doc
        })
        .bench_local_values(|mut doc| {
            doc.delete_char(true).ok();
            doc
        });
}

// ============================================================================
// Row shifting
// ============================================================================

#[divan::bench(args = [0, 250, 499])]
fn split_line_at_row(bencher: divan::Bencher, row: usize) {
    bencher
        .with_inputs(|| {
            let mut doc = filled(500);
            doc.set_cursor(Position::new(row, 4));
            doc
        })
        .bench_local_values(|mut doc| {
            doc.split_line().ok();
            doc
        });
}

#[divan::bench]
fn delete_range_spanning_rows(bencher: divan::Bencher) {
    bencher
        .with_inputs(|| filled(500))
        .bench_local_values(|mut doc| {
            doc.delete_range(Position::new(100, 4), Position::new(200, 3))
                .ok();
            doc
        });
}

// ============================================================================
// Clipboard
// ============================================================================

#[divan::bench]
fn copy_hundred_rows(bencher: divan::Bencher) {
    let doc = filled(500);
    let mut mark = Mark::new();
    mark.start(Position::new(100, 0));
    mark.extend(Position::new(200, 0));
    mark.stop();
    bencher.bench_local(|| {
        let mut clipboard = Clipboard::new(4096);
        clipboard.copy(&doc, &mark).ok()
    });
}

// ============================================================================
// Loading and saving
// ============================================================================

#[divan::bench]
fn load_500_rows() {
    let text = "foo bar baz qux\n".repeat(500);
    let mut doc = Document::with_text("");
    file_io::load(&mut doc, divan::black_box(text.as_bytes())).ok();
}

#[divan::bench]
fn serialize_500_rows(bencher: divan::Bencher) {
    let doc = filled(500);
    bencher.bench_local(|| file_io::to_bytes(&doc));
}

#[divan::bench]
fn screen_lines_full_view(bencher: divan::Bencher) {
    let mut doc = filled(500);
    doc.set_cursor(Position::new(300, 0));
    bencher.bench_local(|| doc.screen_lines().len());
}
