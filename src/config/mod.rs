mod config_file;
mod messages;

pub use config_file::ConfigFile;
pub use messages::Messages;
