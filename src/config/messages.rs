use crate::common::NotificationRequest;
use aho_corasick::AhoCorasick;
use serde::{Deserialize, Serialize};

/// User-facing strings of the notification
///
/// Every key may be overridden from the `[messages]` table of the config file,
/// missing keys keep their English text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    /// Notification summary
    pub summary: String,
    /// Notification body, `{title}` and `{location}` are substituted
    pub body: String,
    /// Label of the action opening the file
    pub open: String,
    /// Label of the action opening the containing directory
    pub open_directory: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            summary: "Download Complete".into(),
            body: "{title}".into(),
            open: "Open".into(),
            open_directory: "Open Directory".into(),
        }
    }
}

impl Messages {
    /// Render the body template for the given request
    ///
    /// Placeholders are replaced in a single pass, text coming from the
    /// request is inserted as is.
    pub fn body(&self, request: &NotificationRequest) -> String {
        let placeholders =
            AhoCorasick::new_auto_configured(&["{title}", "{location}"]);
        placeholders.replace_all(
            &self.body,
            &[
                request.title.as_str(),
                &*request.location.to_string_lossy(),
            ],
        )
    }
}
