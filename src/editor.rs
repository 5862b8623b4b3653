//! External editor round-trip — the interactive step of create and update
//! flows.
//!
//! The template is written to a temp file, the user's editor is spawned on it,
//! and the file is read back after the editor exits. An unchanged buffer means
//! the user bailed out, and is reported as `None` so callers can abort without
//! touching the database.

use anyhow::{bail, Context, Result};
use std::io::Write;
use std::process::Command;

/// Resolve the editor command line: config override first, then $VISUAL,
/// then $EDITOR, then `vi`.
fn editor_command(configured: &str) -> String {
    if !configured.is_empty() {
        return configured.to_string();
    }
    std::env::var("VISUAL")
        .or_else(|_| std::env::var("EDITOR"))
        .unwrap_or_else(|_| "vi".to_string())
}

/// Open `initial` in the user's editor and return the edited text, or `None`
/// when the buffer comes back unchanged.
pub fn edit(initial: &str, configured: &str) -> Result<Option<String>> {
    let mut file = tempfile::Builder::new()
        .prefix("devlog-")
        .suffix(".md")
        .tempfile()
        .context("failed to create temp file for editing")?;
    file.write_all(initial.as_bytes())
        .context("failed to write template to temp file")?;
    file.flush()?;

    let command_line = editor_command(configured);
    let mut parts = command_line.split_whitespace();
    let program = parts.next().unwrap_or("vi");

    let status = Command::new(program)
        .args(parts)
        .arg(file.path())
        .status()
        .with_context(|| format!("failed to launch editor: {command_line}"))?;
    if !status.success() {
        bail!("editor exited with {status}");
    }

    let edited = std::fs::read_to_string(file.path())
        .context("failed to read edited temp file")?;

    if edited == initial {
        return Ok(None);
    }
    Ok(Some(edited))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_command_wins() {
        assert_eq!(editor_command("code --wait"), "code --wait");
    }

    #[test]
    fn falls_back_to_vi_without_env() {
        std::env::remove_var("VISUAL");
        std::env::remove_var("EDITOR");
        assert_eq!(editor_command(""), "vi");
    }

    #[test]
    fn unchanged_buffer_is_reported_as_none() {
        // `true` exits 0 without touching the file
        let result = edit("Name:\n", "true").unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn failing_editor_is_an_error() {
        assert!(edit("Name:\n", "false").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn edited_buffer_is_returned() {
        use std::os::unix::fs::PermissionsExt;

        // Fake editor: append a line to the file it is given
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("fake-editor.sh");
        std::fs::write(&script, "#!/bin/sh\necho edited >> \"$1\"\n").unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let result = edit("Name:\n", script.to_str().unwrap()).unwrap();
        assert_eq!(result.as_deref(), Some("Name:\nedited\n"));
    }
}
