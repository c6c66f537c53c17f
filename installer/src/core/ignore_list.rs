//! Merge logic for `.gitignore` registration.

/// Entries from `entries` that do not already appear as a line in `existing`.
///
/// Lines are compared after trimming surrounding whitespace. Duplicates within
/// `entries` are reported once, first occurrence wins.
pub fn missing_entries<'a, S: AsRef<str>>(existing: &str, entries: &'a [S]) -> Vec<&'a str> {
    let present: Vec<&str> = existing.lines().map(str::trim).collect();
    let mut missing: Vec<&'a str> = Vec::new();
    for entry in entries {
        let entry = entry.as_ref().trim();
        if entry.is_empty() || present.contains(&entry) || missing.contains(&entry) {
            continue;
        }
        missing.push(entry);
    }
    missing
}

/// Text to append to a file currently holding `existing` so that each entry
/// lands on its own line.
///
/// Returns an empty string when there is nothing to add.
pub fn append_block<S: AsRef<str>>(existing: &str, entries: &[S]) -> String {
    if entries.is_empty() {
        return String::new();
    }
    let mut out = String::new();
    if !existing.is_empty() && !existing.ends_with('\n') {
        out.push('\n');
    }
    for entry in entries {
        out.push_str(entry.as_ref());
        out.push('\n');
    }
    out
}
