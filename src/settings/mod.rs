mod consts;
mod logging;
mod store;

pub use logging::{init_logger, LogOutput};
pub use store::{FileSettingsStore, JsonFileSettingsStore, Settings, SettingsStore};
