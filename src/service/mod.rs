mod dbus;

pub use dbus::DbusNotifications;

use crate::error::Result;
use std::collections::BTreeSet;

/// Capability advertised by servers that can show action buttons
pub const ACTIONS_CAPABILITY: &str = "actions";

/// Hint key grouping notifications by type
pub const CATEGORY_HINT: &str = "category";

/// Category for finished file transfers
pub const TRANSFER_COMPLETE: &str = "transfer.complete";

/// Hint key asking notify-osd style servers to merge with an existing bubble
pub const CANONICAL_APPEND_HINT: &str = "x-canonical-append";

/// A desktop notification server
pub trait NotificationService {
    /// Handle to a notification currently on screen
    type Shown: ShownNotification;

    /// Query the features supported by the server
    fn capabilities(&self) -> Result<Capabilities>;
    /// Put a notification on screen
    fn show(&self, content: &NotificationContent) -> Result<Self::Shown>;
}

/// A notification that is being displayed
pub trait ShownNotification {
    /// Block until an action is invoked or the notification is closed
    ///
    /// Consumes the handle, the notification is gone once this returns.
    /// `None` means the server stopped reporting on the notification.
    fn wait(self) -> Option<Event>;
}

/// Features supported by the notification server
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Capabilities(BTreeSet<String>);

impl Capabilities {
    pub fn supports_actions(&self) -> bool {
        self.0.contains(ACTIONS_CAPABILITY)
    }
}

impl<S: Into<String>> FromIterator<S> for Capabilities {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// What can be done from the notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// Open the downloaded file
    Open,
    /// Open the directory containing the download
    OpenDirectory,
}

impl ActionKind {
    /// Identifier sent to the server and reported back on invocation
    pub fn key(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::OpenDirectory => "opendir",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        [Self::Open, Self::OpenDirectory]
            .into_iter()
            .find(|kind| kind.key() == key)
    }
}

/// An action button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub kind: ActionKind,
    pub label: String,
}

/// Everything shown in a notification bubble
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationContent {
    pub summary: String,
    pub body: String,
    pub icon: Option<String>,
    pub hints: Vec<(String, String)>,
    pub actions: Vec<Action>,
}

#[cfg(test)]
impl NotificationContent {
    pub fn hint(&self, key: &str) -> Option<&str> {
        self.hints
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Why waiting on a notification ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The user picked an action
    Action(ActionKind),
    /// The notification went away without an action
    Closed,
}

impl Event {
    /// Interpret an action key reported by the server
    ///
    /// Anything that is not one of our actions counts as the notification
    /// closing. No "default" action is registered, so servers have no body
    /// click to report and close the bubble themselves when it is clicked.
    pub fn from_key(key: &str) -> Self {
        ActionKind::from_key(key).map_or(Self::Closed, Self::Action)
    }
}
