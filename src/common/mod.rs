mod icon;
mod opener;
mod request;

pub use icon::{resolve_icon, IconTheme, XdgIconTheme};
pub use opener::{CommandOpener, Opener};
pub use request::NotificationRequest;
