//! Destination file naming

use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};

use super::input::extension_of;

/// Prefix of generated file names
pub const AUTO_NAME_PREFIX: &str = "clipboard-";

/// The file a payload is written to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    path: PathBuf,
}

impl OutputTarget {
    /// Compute the target inside `directory`.
    ///
    /// An override name that already has an extension is used verbatim;
    /// otherwise `extension` is appended. Without an override the name is
    /// generated from `now`.
    pub fn new(
        directory: &Path,
        override_name: Option<&str>,
        extension: &str,
        now: DateTime<Utc>,
    ) -> Self {
        let file_name = match override_name {
            Some(name) if extension_of(name).is_some() => name.to_string(),
            Some(name) => format!("{}.{}", name.trim_end_matches('.'), extension),
            None => auto_file_name(extension, now),
        };

        Self {
            path: directory.join(file_name),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn into_path(self) -> PathBuf {
        self.path
    }
}

/// `clipboard-<timestamp>.<ext>`
pub fn auto_file_name(extension: &str, now: DateTime<Utc>) -> String {
    format!("{}{}.{}", AUTO_NAME_PREFIX, timestamp_slug(now), extension)
}

/// ISO 8601 UTC timestamp with millisecond precision, `:` and `.` replaced by `-`
pub fn timestamp_slug(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace([':', '.'], "-")
}
