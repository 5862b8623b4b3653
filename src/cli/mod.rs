pub mod doctor;
pub mod export;
pub mod import;
pub mod learning;
pub mod project;
pub mod reset;
pub mod stats;

/// First line of `text`, truncated to `max` characters for list views.
pub(crate) fn preview(text: &str, max: usize) -> String {
    let first_line = text.lines().next().unwrap_or_default();
    if first_line.chars().count() <= max {
        return first_line.to_string();
    }
    let truncated: String = first_line.chars().take(max).collect();
    format!("{truncated}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_keeps_short_first_line() {
        assert_eq!(preview("short line\nsecond", 40), "short line");
    }

    #[test]
    fn preview_truncates_long_first_line() {
        let long = "x".repeat(50);
        let p = preview(&long, 40);
        assert_eq!(p.chars().count(), 43);
        assert!(p.ends_with("..."));
    }
}
