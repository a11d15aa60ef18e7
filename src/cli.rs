use clap::Parser;
use clap_complete::engine::{ArgValueCompleter, PathCompleter};
use std::path::PathBuf;

/// Announce a finished download
///
/// Shows a single "Download Complete" desktop notification for the given file.
/// When the notification server supports actions and the file opener is installed,
/// the notification offers to open the file or the directory containing it.
///
/// The process exits once the notification is dismissed or an action is taken.
/// Exactly two arguments are accepted, both taken literally even when they
/// start with a dash, so there are no options.
#[deny(missing_docs)]
#[derive(Parser, Debug)]
#[clap(version, about)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Cmd {
    /// Title of the download, shown in the notification body
    pub title: String,
    /// Location of the downloaded file
    #[clap(add = ArgValueCompleter::new(PathCompleter::any()))]
    pub location: PathBuf,
}
