//! Line-oriented list files (domain lists, address lists).

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::Result;

/// Read one entry per line. Surrounding whitespace is trimmed; blank lines
/// and lines starting with `#` are skipped.
pub fn read_entries<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut entries = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let entry = line.trim();
        if entry.is_empty() || entry.starts_with('#') {
            continue;
        }
        entries.push(entry.to_string());
    }
    Ok(entries)
}

/// Read entries from a file (see [`read_entries`]).
pub fn read_entries_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let file = File::open(path.as_ref())?;
    read_entries(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_read_entries() {
        let input = "# header\n a@b.com \n\n\t#skipped\nc@d.org\n";
        let entries = read_entries(Cursor::new(input)).unwrap();
        assert_eq!(entries, vec!["a@b.com", "c@d.org"]);
    }

    #[test]
    fn test_missing_file() {
        assert!(read_entries_from_file("/nonexistent/list.txt").is_err());
    }
}
