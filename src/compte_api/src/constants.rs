pub const DEFAULT_BASE_URL: &str = "http://localhost:8082";
pub const COMPTES_PATH: &str = "/comptes";
