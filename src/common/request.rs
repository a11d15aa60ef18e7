use crate::error::Result;
use std::{
    fmt::{Display, Formatter},
    path::{Component, Path, PathBuf},
};

/// A finished download to announce
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    /// Title of the download, as given on the command line
    pub title: String,
    /// Where the download was saved
    pub location: PathBuf,
}

impl NotificationRequest {
    pub fn new(title: impl Into<String>, location: impl Into<PathBuf>) -> Self {
        Self {
            title: title.into(),
            location: location.into(),
        }
    }

    /// Absolute path of the directory containing the download
    pub fn directory(&self) -> Result<PathBuf> {
        let location = absolute(&self.location)?;
        Ok(match location.parent() {
            Some(parent) => parent.to_path_buf(),
            // The root directory is its own parent
            None => location,
        })
    }
}

impl Display for NotificationRequest {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> std::fmt::Result {
        write!(fmt, "{} ({})", self.title, self.location.display())
    }
}

/// Make a path absolute against the current directory, resolving `.` and `..`
/// lexically without touching the filesystem
fn absolute(path: &Path) -> Result<PathBuf> {
    let path = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };

    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            c => normalized.push(c),
        }
    }

    Ok(normalized)
}
