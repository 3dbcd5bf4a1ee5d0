pub const APP_QUALIFIER: &str = "com";
pub const APP_ORGANIZATION: &str = "comptes";
pub const APP_NAME: &str = "comptes-cli";

pub const SETTINGS_FILE: &str = "settings.json";
pub const LOG_FILE: &str = "comptes.log";
pub const DEFAULT_LOG_LEVEL: &str = "info";
