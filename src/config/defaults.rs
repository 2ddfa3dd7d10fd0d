pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: i64 = 5000;
pub const DEFAULT_RUST_LOG: &str = "info,notes_server=info,tower_http=info,sqlx=warn";
pub const DEFAULT_DATABASE_URL: &str = "sqlite://testdb.db?mode=rwc";
pub const DEFAULT_DB_MAX_CONNECTIONS: i64 = 1;
pub const DEFAULT_DB_MIN_IDLE: i64 = 1;
