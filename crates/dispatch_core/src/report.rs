//! Report rendering: one line per vehicle with at least one ride.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tracing::debug;

use crate::error::DispatchError;
use crate::manifest::ResultStore;

pub fn render_report(store: &ResultStore) -> String {
    let mut out = String::new();
    for line in store.report_lines() {
        out.push_str(&line.to_string());
        out.push('\n');
    }
    out
}

pub fn write_report<W: Write>(store: &ResultStore, mut writer: W) -> io::Result<()> {
    for line in store.report_lines() {
        writeln!(writer, "{line}")?;
    }
    writer.flush()
}

/// Writes the report to `path` in a single write, after the whole store is known.
pub fn write_report_file(store: &ResultStore, path: impl AsRef<Path>) -> Result<(), DispatchError> {
    let path = path.as_ref();
    let report = render_report(store);
    fs::write(path, report).map_err(|source| DispatchError::io(path, source))?;
    debug!(path = %path.display(), vehicles = store.vehicles_used(), "report written");
    Ok(())
}
