use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::path::Path;
use std::process::Command;

fn platform_default_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

/// Opens `path` in the requested editor, falling back to $EDITOR / $VISUAL /
/// the platform default when the requested one fails.
pub fn edit_file(path: &Path, requested: Option<&str>) -> AppResult<()> {
    let default_editor = platform_default_editor();
    let editor = requested.map(str::to_string).unwrap_or_else(|| default_editor.clone());

    if matches!(Command::new(&editor).arg(path).status(), Ok(s) if s.success()) {
        success(format!("Configuration file edited using '{editor}'"));
        return Ok(());
    }

    if editor == default_editor {
        return Err(AppError::Config(format!("editor '{editor}' failed")));
    }

    warning(format!(
        "Editor '{editor}' not available, falling back to '{default_editor}'"
    ));

    match Command::new(&default_editor).arg(path).status() {
        Ok(s) if s.success() => {
            success(format!("Configuration file edited using fallback '{default_editor}'"));
            Ok(())
        }
        _ => Err(AppError::Config(format!(
            "failed to edit configuration file using fallback '{default_editor}'"
        ))),
    }
}
