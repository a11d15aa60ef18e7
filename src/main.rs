mod cli;
mod common;
mod config;
mod error;
mod presenter;
mod service;

use cli::Cmd;
use common::NotificationRequest;
use config::ConfigFile;
use error::{Error, Result};
use presenter::NotificationPresenter;

use clap::{CommandFactory, Parser};
use clap_complete::CompleteEnv;
use std::{ffi::OsString, process::ExitCode};

#[mutants::skip] // Cannot test directly at the moment
fn main() -> ExitCode {
    CompleteEnv::with_factory(|| Cmd::command().name("download-notify"))
        .completer("download-notify")
        .complete();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    ExitCode::from(exit_status(run(std::env::args_os())))
}

/// Process exit status for the result of a run
fn exit_status(res: Result<()>) -> u8 {
    match res {
        Ok(()) => 0,
        Err(e) => {
            log::error!("{e}");
            1
        }
    }
}

/// Parse the command line, then show the notification
#[mutants::skip] // Cannot test directly, needs a running notification server
fn run<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let request = parse_args(args)?;

    log::debug!("Announcing {request}");

    // A broken config should not cost the user their notification
    let config = ConfigFile::load().unwrap_or_else(|e| {
        log::warn!("Could not load config, using defaults: {e}");
        ConfigFile::default()
    });

    let presenter = NotificationPresenter::initialize(config)?;
    let outcome = presenter.show(&request)?;
    log::debug!("Finished with {outcome:?}");

    Ok(())
}

/// Turn the command line into a request
///
/// Anything but exactly a title and a location is rejected. Both are passed
/// after `--` so that neither can be mistaken for an option.
fn parse_args<I, T>(args: I) -> Result<NotificationRequest>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = args.into_iter().map(Into::into).collect::<Vec<OsString>>();
    let [program, title, location] = <[OsString; 3]>::try_from(args)
        .map_err(|args| {
            log::debug!("Got {} arguments", args.len().saturating_sub(1));
            Error::InvalidArguments
        })?;

    match Cmd::try_parse_from([program, "--".into(), title, location]) {
        Ok(Cmd { title, location }) => {
            Ok(NotificationRequest::new(title, location))
        }
        Err(e) => {
            log::debug!("{e}");
            Err(Error::InvalidArguments)
        }
    }
}
