//! Structured plain-text templates for editor round-trips.
//!
//! Create and update flows hand the user a labeled document to edit:
//!
//! ```text
//! Challenge:
//!
//! ---
//!
//! Solution:
//!
//! ---
//!
//! Type:
//! ```
//!
//! [`render`] produces that document (optionally pre-filled for update flows)
//! and [`parse`] converts the edited text back into a field map. Parsing is
//! total: any input, including an empty document, yields a (possibly empty)
//! map. Which labels are meaningful is decided per call site — the record
//! builders pass in their own recognized field names.

use std::collections::HashMap;

/// A line containing exactly this string separates template sections.
pub const DIVIDER: &str = "---";

/// Render a template from `(label, value)` sections, separated by divider
/// lines. An empty value renders as a bare label ready to be filled in.
///
/// Labels are display-cased (`"Project id"`); [`parse`] normalizes them back
/// to the snake_case field names the builders use.
pub fn render(sections: &[(&str, &str)]) -> String {
    let rendered: Vec<String> = sections
        .iter()
        .map(|(label, value)| {
            if value.is_empty() {
                format!("{label}:\n")
            } else {
                format!("{label}:\n{value}\n")
            }
        })
        .collect();
    rendered.join(&format!("\n{DIVIDER}\n\n"))
}

/// Extract recognized fields from an edited template document.
///
/// Single line-oriented pass. A divider line clears the active field; a line
/// whose label normalizes to a name in `recognized` starts (or re-opens) that
/// field; any other line belongs verbatim to the active field, or is dropped
/// when no field is active. Label lines that are *not* recognized are ordinary
/// content — free text legitimately contains colon-terminated lines, and those
/// must survive inside the surrounding field.
///
/// Accumulated lines are joined with `\n` and trimmed of surrounding
/// whitespace. A label seen with no content yields an empty string under its
/// key; a label never seen yields no key at all, so callers can tell a field
/// the user deleted apart from one they left blank.
pub fn parse(content: &str, recognized: &[&str]) -> HashMap<String, String> {
    let mut current: Option<String> = None;
    let mut data: HashMap<String, Vec<&str>> = HashMap::new();

    for line in content.lines() {
        if line == DIVIDER {
            current = None;
            continue;
        }

        if let Some(name) = field_name(line) {
            if recognized.contains(&name.as_str()) {
                data.entry(name.clone()).or_default();
                current = Some(name);
                continue;
            }
        }

        if let Some(ref field) = current {
            data.get_mut(field)
                .expect("active field always has an accumulator")
                .push(line);
        }
    }

    data.into_iter()
        .map(|(field, lines)| (field, lines.join("\n").trim().to_string()))
        .collect()
}

/// Candidate field name for a label line, or `None` if the line is not a
/// label. The trimmed line must end with `:`; the prefix is lower-cased with
/// internal whitespace runs collapsed to single underscores, so
/// `"Project id:"` names the field `project_id`.
fn field_name(line: &str) -> Option<String> {
    let label = line.trim().strip_suffix(':')?;
    let name = label
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase();
    Some(name)
}
