use crate::{
    common::{
        resolve_icon, CommandOpener, IconTheme, NotificationRequest, Opener,
    },
    config::{ConfigFile, Messages},
    error::Result,
    service::{
        Action, ActionKind, DbusNotifications, Event, NotificationContent,
        NotificationService, ShownNotification, CANONICAL_APPEND_HINT,
        CATEGORY_HINT, TRANSFER_COMPLETE,
    },
};
use std::path::{Path, PathBuf};

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Shown without actions, nothing to wait for
    Displayed,
    /// The file was handed to the opener
    Opened(PathBuf),
    /// The containing directory was handed to the opener
    OpenedDirectory(PathBuf),
    /// Closed without any action
    Dismissed,
}

/// Shows the "download complete" notification and reacts to the user
pub struct NotificationPresenter<S, O> {
    service: S,
    opener: O,
    icon_theme: Option<Box<dyn IconTheme>>,
    icons: Vec<String>,
    messages: Messages,
    canonical_append: bool,
}

impl NotificationPresenter<DbusNotifications, CommandOpener> {
    /// Connect to the session's notification server
    ///
    /// Fails if the server cannot be reached, nothing is shown in that case.
    #[mutants::skip] // Cannot test directly, needs a running notification server
    pub fn initialize(config: ConfigFile) -> Result<Self> {
        let service = DbusNotifications::connect(&config.app_name)?;
        let opener = config.opener()?;
        let icon_theme = config
            .icon_theme()
            .map(|theme| Box::new(theme) as Box<dyn IconTheme>);

        Ok(Self::new(service, opener, icon_theme, config))
    }
}

impl<S, O> NotificationPresenter<S, O>
where
    S: NotificationService,
    O: Opener,
{
    pub fn new(
        service: S,
        opener: O,
        icon_theme: Option<Box<dyn IconTheme>>,
        config: ConfigFile,
    ) -> Self {
        Self {
            service,
            opener,
            icon_theme,
            icons: config.icons,
            messages: config.messages,
            canonical_append: config.canonical_append,
        }
    }

    /// Show the notification for `request`
    ///
    /// When actions are offered this blocks until one is taken or the
    /// notification is dismissed, otherwise it returns right after display.
    pub fn show(&self, request: &NotificationRequest) -> Result<Outcome> {
        let caps = self.service.capabilities()?;

        let mut content = NotificationContent {
            summary: self.messages.summary.clone(),
            body: self.messages.body(request),
            icon: resolve_icon(self.icon_theme.as_deref(), &self.icons),
            hints: vec![(CATEGORY_HINT.into(), TRANSFER_COMPLETE.into())],
            actions: Vec::new(),
        };

        if self.canonical_append {
            content
                .hints
                .push((CANONICAL_APPEND_HINT.into(), "allowed".into()));
        }

        if caps.supports_actions() {
            match self.opener.probe() {
                Ok(()) => content.actions = self.actions(),
                Err(e) => log::warn!("{e}"),
            }
        }

        log::info!("Displaying notification");
        let shown = self.service.show(&content)?;

        if content.actions.is_empty() {
            return Ok(Outcome::Displayed);
        }

        let event = shown.wait().unwrap_or_else(|| {
            log::warn!("Lost track of the notification");
            Event::Closed
        });

        let outcome = match event {
            Event::Action(ActionKind::Open) => self.open_file(request),
            Event::Action(ActionKind::OpenDirectory) => {
                self.open_directory(request)
            }
            Event::Closed => self.on_closed(),
        };

        Ok(outcome)
    }

    fn actions(&self) -> Vec<Action> {
        vec![
            Action {
                kind: ActionKind::Open,
                label: self.messages.open.clone(),
            },
            Action {
                kind: ActionKind::OpenDirectory,
                label: self.messages.open_directory.clone(),
            },
        ]
    }

    /// Hand the downloaded file to the opener
    fn open_file(&self, request: &NotificationRequest) -> Outcome {
        log::info!("Opening file {}", request.location.display());
        if request.location.as_os_str().is_empty() {
            log::warn!("No location to open");
        } else {
            self.spawn_opener(&request.location);
        }
        log::info!("Closing");
        Outcome::Opened(request.location.clone())
    }

    /// Hand the directory containing the download to the opener
    fn open_directory(&self, request: &NotificationRequest) -> Outcome {
        let dir = match request.directory() {
            Ok(dir) => dir,
            Err(e) => {
                log::warn!("Could not find the download directory: {e}");
                log::info!("Closing");
                return Outcome::Dismissed;
            }
        };
        log::info!("Opening dir {}", dir.display());
        self.spawn_opener(&dir);
        log::info!("Closing");
        Outcome::OpenedDirectory(dir)
    }

    fn on_closed(&self) -> Outcome {
        log::info!("Closing");
        Outcome::Dismissed
    }

    fn spawn_opener(&self, path: &Path) {
        // What the opener does with the path is out of our hands
        if let Err(e) = self.opener.open(path) {
            log::warn!("Could not open {}: {e}", path.display());
        }
    }
}
