use crate::config::types::*;
use crate::constants::{FALLBACK_DIALECT, FALLBACK_MIGRATIONS_DIR};

impl EnvironmentInput {
    /// Environment synthesized when the selected name has no entry.
    ///
    /// `data_source` is whatever the fallback environment variable held; an
    /// absent value is left empty so the regular data-source default applies.
    pub fn fallback(data_source: Option<String>) -> Self {
        Self {
            dialect: Some(FALLBACK_DIALECT.to_string()),
            data_source: Some(data_source.unwrap_or_default()),
            dir: Some(FALLBACK_MIGRATIONS_DIR.to_string()),
            table_name: None,
            schema_name: None,
        }
    }
}
