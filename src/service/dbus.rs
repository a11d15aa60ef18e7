use crate::{
    error::{Error, Result},
    service::{
        Capabilities, Event, NotificationContent, NotificationService,
        ShownNotification, CATEGORY_HINT,
    },
};
use notify_rust::{Hint, Notification, NotificationHandle};

/// The freedesktop notification server, reached over the session bus
#[derive(Debug)]
pub struct DbusNotifications {
    app_name: String,
}

impl DbusNotifications {
    /// Connect to the notification server under the given application name
    ///
    /// Fails if no server answers on the session bus.
    #[mutants::skip] // Cannot test directly, needs a running notification server
    pub fn connect(app_name: &str) -> Result<Self> {
        let info = notify_rust::get_server_information()
            .map_err(|e| Error::ServiceUnavailable(e.to_string()))?;

        log::debug!(
            "Connected to {} {} by {} (spec {})",
            info.name,
            info.version,
            info.vendor,
            info.spec_version
        );

        Ok(Self {
            app_name: app_name.to_owned(),
        })
    }

    fn build(&self, content: &NotificationContent) -> Notification {
        let mut notification = Notification::new();
        notification
            .appname(&self.app_name)
            .summary(&content.summary)
            .body(&content.body);

        if let Some(ref icon) = content.icon {
            notification.icon(icon);
        }

        for (key, value) in &content.hints {
            notification.hint(match key.as_str() {
                CATEGORY_HINT => Hint::Category(value.clone()),
                _ => Hint::Custom(key.clone(), value.clone()),
            });
        }

        for action in &content.actions {
            notification.action(action.kind.key(), &action.label);
        }

        notification
    }
}

impl NotificationService for DbusNotifications {
    type Shown = DbusHandle;

    #[mutants::skip] // Cannot test directly, needs a running notification server
    fn capabilities(&self) -> Result<Capabilities> {
        let caps = notify_rust::get_capabilities()
            .map_err(|e| Error::ServiceUnavailable(e.to_string()))?;
        log::debug!("Server capabilities: {}", caps.join(", "));
        Ok(caps.into_iter().collect())
    }

    #[mutants::skip] // Cannot test directly, needs a running notification server
    fn show(&self, content: &NotificationContent) -> Result<DbusHandle> {
        self.build(content)
            .show()
            .map(DbusHandle)
            .map_err(|e| Error::DisplayFailure(e.to_string()))
    }
}

/// A notification shown through D-Bus
pub struct DbusHandle(NotificationHandle);

impl ShownNotification for DbusHandle {
    #[mutants::skip] // Cannot test directly, needs a running notification server
    fn wait(self) -> Option<Event> {
        log::debug!("Waiting on notification {}", self.0.id());
        let mut event = None;
        // Closing arrives as the "__closed" action. Servers dismiss a
        // notification by themselves once one of its actions is invoked.
        self.0
            .wait_for_action(|key| event = Some(Event::from_key(key)));
        event
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::{Action, ActionKind, TRANSFER_COMPLETE};

    #[test]
    fn build_notification() {
        let service = DbusNotifications {
            app_name: "DownloadNotify".into(),
        };
        let notification = service.build(&NotificationContent {
            summary: "Download Complete".into(),
            body: "Backup.zip".into(),
            icon: Some("folder-download".into()),
            hints: vec![(CATEGORY_HINT.into(), TRANSFER_COMPLETE.into())],
            actions: vec![
                Action {
                    kind: ActionKind::Open,
                    label: "Open".into(),
                },
                Action {
                    kind: ActionKind::OpenDirectory,
                    label: "Open Directory".into(),
                },
            ],
        });

        assert_eq!(notification.appname, "DownloadNotify");
        assert_eq!(notification.summary, "Download Complete");
        assert_eq!(notification.body, "Backup.zip");
        assert_eq!(notification.icon, "folder-download");
        // Identifiers and labels alternate
        assert_eq!(
            notification.actions,
            vec!["open", "Open", "opendir", "Open Directory"]
        );
    }
}
