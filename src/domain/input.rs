//! Resolution of the positional input into a format and optional file name

use std::path::{Component, Path, PathBuf};

use super::error::UsageError;

/// A save request as described on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    /// File name to use instead of the generated one
    pub filename_override: Option<String>,
    /// Lowercase, non-empty extension without the dot
    pub format_token: String,
    /// Directory the file is written into, possibly relative
    pub output_directory: PathBuf,
}

impl ParsedInput {
    /// Build a request from the raw CLI values.
    ///
    /// `input` is either a bare format token (`png`) or a file name with an
    /// extension (`shot.png`). An explicit `name` wins over a file name given
    /// as input. A missing directory means the current one.
    pub fn resolve(
        input: Option<&str>,
        output_directory: Option<&Path>,
        name: Option<&str>,
    ) -> Result<Self, UsageError> {
        let input = input
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                UsageError::new(
                    "Missing required input (a format like 'png' or a file name like 'shot.png')",
                )
            })?;

        let (embedded_name, format_token) = match extension_of(input) {
            Some(ext) => (Some(input.to_string()), ext.to_lowercase()),
            None => (None, input.to_lowercase()),
        };

        let filename_override = match name {
            Some(n) if n.trim().is_empty() => {
                return Err(UsageError::new("--name must not be empty"));
            }
            Some(n) => Some(n.trim().to_string()),
            None => embedded_name,
        };
        if let Some(ref n) = filename_override {
            check_file_name(n)?;
        }

        Ok(Self {
            filename_override,
            format_token,
            output_directory: output_directory
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from(".")),
        })
    }
}

/// An override must be a plain file name inside the output directory
fn check_file_name(name: &str) -> Result<(), UsageError> {
    let mut components = Path::new(name).components();
    let single_normal = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );
    if !single_normal || name.contains(['/', '\\']) {
        return Err(UsageError::new(format!(
            "File name '{}' must not contain directory parts; pass the directory as outputPath",
            name
        )));
    }
    if name.trim_end_matches('.').is_empty() {
        return Err(UsageError::new(format!("File name '{}' is not valid", name)));
    }
    Ok(())
}

/// Non-empty extension of a file name, if it has one
pub(crate) fn extension_of(name: &str) -> Option<&str> {
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .filter(|e| !e.is_empty())
}
