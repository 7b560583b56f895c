// src/csv.rs
//
// Roster CSV is a dumb comma format: no quoting, no escaping. A field
// containing a comma corrupts its row; that is a known property of the
// source files and kept as-is.

/* ---------------- Parsing ---------------- */

/// Split CSV text into trimmed fields per line.
/// Tolerates both `\n` and `\r\n` line endings; blank lines are dropped.
pub fn parse_rows(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() { continue; }
        let row: Vec<String> = line.split(',')
            .map(|f| s!(f.trim()))
            .collect();
        rows.push(row);
    }
    rows
}
