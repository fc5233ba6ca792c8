use std::time::Duration;

// Configuration file and environment selection
pub const CONFIG_FILENAME: &str = "dbconfig.yml";
pub const DEFAULT_ENVIRONMENT: &str = "development";

// Migration directory used when an environment leaves `dir` empty
pub const DEFAULT_MIGRATIONS_DIR: &str = "migrations";

// Synthesized environment used when the selected name has no entry
pub const FALLBACK_DIALECT: &str = "mysql";
pub const FALLBACK_MIGRATIONS_DIR: &str = "migrations";
pub const FALLBACK_DATA_SOURCE_VAR: &str = "API_DB_DSN";

// Substituted for any resolved environment with an empty data source
pub const DEFAULT_DATA_SOURCE: &str = "mysql://root@localhost:3306/development";

// Tracking table used by the migration engine unless overridden
pub const DEFAULT_TRACKING_TABLE: &str = "schema_migrations";

pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
