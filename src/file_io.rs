//! Loading and saving documents as `\n`-terminated line streams.

use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::editable::{Document, TERMINATOR};
use crate::error::EditError;

/// What happened while loading a stream into a document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Input lines consumed
    pub lines: usize,
    /// 1-based numbers of input lines that were wrapped over several rows
    pub wrapped_lines: Vec<usize>,
    /// Rows ran out before the end of the input
    pub truncated: bool,
}

impl LoadReport {
    pub fn has_warnings(&self) -> bool {
        self.truncated || !self.wrapped_lines.is_empty()
    }

    /// Status bar text for the first problem found
    pub fn warning(&self) -> Option<String> {
        if self.truncated {
            Some(format!(
                "File too long, only {} lines loaded!",
                self.lines
            ))
        } else {
            self.wrapped_lines
                .first()
                .map(|line| format!("File line {} too long, so wrapped it!", line))
        }
    }
}

/// Replace the document content with the lines of `reader`.
///
/// `\r\n` line ends are accepted. The filename is kept. The document is
/// left unmodified unless a line had to be wrapped.
pub fn load<R: BufRead>(doc: &mut Document, mut reader: R) -> io::Result<LoadReport> {
    doc.reset(true);
    let mut report = LoadReport::default();
    let mut line = Vec::new();

    loop {
        line.clear();
        if reader.read_until(TERMINATOR, &mut line)? == 0 {
            break;
        }
        if line.last() == Some(&TERMINATOR) {
            line.pop();
        }
        if line.last() == Some(&b'\r') {
            line.pop();
        }

        match doc.load_line(&line) {
            Ok(loaded) => {
                report.lines += 1;
                if loaded.wrapped {
                    tracing::warn!(line = report.lines, rows = loaded.rows, "wrapped long line");
                    report.wrapped_lines.push(report.lines);
                }
            }
            Err(EditError::DocumentFull) => {
                tracing::warn!(lines = report.lines, "document full, input truncated");
                report.truncated = true;
                break;
            }
            Err(err) => return Err(io::Error::new(io::ErrorKind::InvalidData, err)),
        }
    }

    tracing::info!(
        lines = report.lines,
        rows = doc.row_count(),
        wrapped = report.wrapped_lines.len(),
        "loaded document"
    );
    Ok(report)
}

/// Write rows `0..=last_row`, each followed by `\n`. Returns bytes written.
///
/// Rows are copied out through [`Document::read_row`]; a row whose stored
/// terminator is missing gets one patched in.
pub fn write_rows<W: Write>(doc: &Document, writer: &mut W) -> io::Result<usize> {
    let mut buf = vec![0; doc.constraints.cols];
    let mut written = 0;
    for row in 0..doc.row_count() {
        let len = doc
            .read_row(row, &mut buf)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        buf[len - 1] = TERMINATOR;
        writer.write_all(&buf[..len])?;
        written += len;
    }
    Ok(written)
}

/// Serialize the document into a byte vector
pub fn to_bytes(doc: &Document) -> Vec<u8> {
    let mut out = Vec::new();
    // writing to a Vec cannot fail
    let _ = write_rows(doc, &mut out);
    out
}

/// Write `bytes` to `path`. Without `overwrite` an existing file is an error.
pub fn write_file(path: &Path, bytes: &[u8], overwrite: bool) -> io::Result<usize> {
    let file = if overwrite {
        File::create(path)?
    } else {
        OpenOptions::new().write(true).create_new(true).open(path)?
    };
    let mut writer = BufWriter::new(file);
    writer.write_all(bytes)?;
    writer.flush()?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "saved document");
    Ok(bytes.len())
}

/// Load a file into the document and remember its name
pub fn load_file(doc: &mut Document, path: &Path) -> io::Result<LoadReport> {
    let file = File::open(path)?;
    let report = load(doc, BufReader::new(file))?;
    doc.filename = Some(path.display().to_string());
    Ok(report)
}
