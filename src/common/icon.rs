use crate::error::Result;
use itertools::iproduct;
use std::path::PathBuf;

/// Something that can locate themed icons by name
pub trait IconTheme {
    /// Path to an icon file with the given name, if one is installed
    fn lookup(&self, name: &str) -> Option<PathBuf>;
}

const THEMES: &[&str] = &["hicolor"];
const SIZES: &[&str] = &[
    "scalable", "256x256", "128x128", "64x64", "48x48", "32x32", "24x24",
    "16x16",
];
const CONTEXTS: &[&str] = &["apps", "places", "status", "actions", "mimetypes"];
const EXTENSIONS: &[&str] = &["svg", "png", "xpm"];

/// Icon lookup in the xdg data directories
///
/// Only covers the fallback `hicolor` theme and `pixmaps`, which is where
/// applications install their own icons.
pub struct XdgIconTheme {
    dirs: xdg::BaseDirectories,
}

impl XdgIconTheme {
    pub fn new() -> Result<Self, xdg::BaseDirectoriesError> {
        Ok(Self {
            dirs: xdg::BaseDirectories::new()?,
        })
    }
}

impl IconTheme for XdgIconTheme {
    fn lookup(&self, name: &str) -> Option<PathBuf> {
        candidate_paths(name).find_map(|path| self.dirs.find_data_file(path))
    }
}

/// Relative paths under a data directory where an icon may live, most preferred first
fn candidate_paths(name: &str) -> impl Iterator<Item = PathBuf> + '_ {
    let themed = iproduct!(THEMES, SIZES, CONTEXTS, EXTENSIONS).map(
        move |(theme, size, context, ext)| {
            PathBuf::from(format!("icons/{theme}/{size}/{context}/{name}.{ext}"))
        },
    );
    let unthemed = iproduct!(["icons", "pixmaps"], EXTENSIONS)
        .map(move |(dir, ext)| PathBuf::from(format!("{dir}/{name}.{ext}")));

    themed.chain(unthemed)
}

/// Pick the icon to show: the first candidate the theme knows about, otherwise
/// the first candidate regardless
pub fn resolve_icon(
    theme: Option<&dyn IconTheme>,
    candidates: &[String],
) -> Option<String> {
    let fallback = candidates.first()?;

    let found = theme.and_then(|theme| {
        candidates.iter().find(|name| match theme.lookup(name) {
            Some(path) => {
                log::debug!("Found icon '{name}' at {}", path.display());
                true
            }
            None => false,
        })
    });

    Some(found.unwrap_or(fallback).clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    /// Theme that only knows about the given icons
    struct FakeTheme(&'static [&'static str]);

    impl IconTheme for FakeTheme {
        fn lookup(&self, name: &str) -> Option<PathBuf> {
            self.0
                .contains(&name)
                .then(|| PathBuf::from(format!("/usr/share/pixmaps/{name}.png")))
        }
    }

    fn candidates() -> Vec<String> {
        ["folder-download", "emblem-downloads", "web-browser"]
            .map(String::from)
            .to_vec()
    }

    #[test]
    fn first_installed_candidate_wins() {
        let theme = FakeTheme(&["web-browser", "emblem-downloads"]);
        assert_eq!(
            resolve_icon(Some(&theme), &candidates()).as_deref(),
            Some("emblem-downloads")
        );
    }

    #[test]
    fn fall_back_to_first_candidate() {
        let theme = FakeTheme(&["firefox"]);
        assert_eq!(
            resolve_icon(Some(&theme), &candidates()).as_deref(),
            Some("folder-download")
        );
        assert_eq!(
            resolve_icon(None, &candidates()).as_deref(),
            Some("folder-download")
        );
    }

    #[test]
    fn no_candidates_no_icon() {
        let theme = FakeTheme(&["firefox"]);
        assert_eq!(resolve_icon(Some(&theme), &[]), None);
    }

    #[test]
    fn search_order() {
        let paths = candidate_paths("icecat").collect_vec();
        assert_eq!(
            paths.first(),
            Some(&PathBuf::from("icons/hicolor/scalable/apps/icecat.svg"))
        );
        assert_eq!(paths.last(), Some(&PathBuf::from("pixmaps/icecat.xpm")));
        assert_eq!(
            paths.len(),
            THEMES.len() * SIZES.len() * CONTEXTS.len() * EXTENSIONS.len()
                + 2 * EXTENSIONS.len()
        );
    }
}
