use crate::error::{Error, Result};
use std::{
    ffi::OsString,
    path::Path,
    process::{Command, Stdio},
    str::FromStr,
};

/// A utility that opens files and directories with their default application
pub trait Opener {
    /// Check that the utility is installed
    fn probe(&self) -> Result<()>;
    /// Open the given path without waiting for the utility to finish
    fn open(&self, path: &Path) -> Result<()>;
}

/// Opener backed by an external command such as `xdg-open`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOpener {
    program: String,
    args: Vec<String>,
}

impl FromStr for CommandOpener {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = shlex::split(s)
            .filter(|words| !words.is_empty())
            .ok_or_else(|| Error::BadCmd(s.to_owned()))?
            .into_iter();

        Ok(Self {
            // Checked above
            program: words.next().unwrap_or_default(),
            args: words.collect(),
        })
    }
}

impl Default for CommandOpener {
    fn default() -> Self {
        Self {
            program: "xdg-open".into(),
            args: Vec::new(),
        }
    }
}

impl CommandOpener {
    /// Name of the program that gets run
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Full command line used to open `path`
    pub fn command_for(&self, path: &Path) -> Vec<OsString> {
        std::iter::once(OsString::from(&self.program))
            .chain(self.args.iter().map(OsString::from))
            .chain(std::iter::once(path.as_os_str().to_owned()))
            .collect()
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        cmd
    }
}

impl Opener for CommandOpener {
    #[mutants::skip] // Cannot test directly, runs command
    fn probe(&self) -> Result<()> {
        // Only whether the program could be started matters, not its exit status
        self.command()
            .arg("--version")
            .status()
            .map(|_| ())
            .map_err(|e| {
                log::debug!("Probing '{}' failed: {e}", self.program());
                Error::OpenerNotFound(self.program().to_owned())
            })
    }

    #[mutants::skip] // Cannot test directly, runs command
    fn open(&self, path: &Path) -> Result<()> {
        log::debug!("Spawning {:?}", self.command_for(path));
        // Detached, the opener outlives this process
        self.command().arg(path).spawn()?;
        Ok(())
    }
}
