use crate::constants::DEFAULT_TRACKING_TABLE;
use crate::dialect::Dialect;
use anyhow::{Result, anyhow};
use serde::Serialize;

/// Tracking table settings handed to the migration engine.
///
/// Starts at the engine defaults and is updated by environment resolution
/// when the selected environment overrides the table or schema. The value is
/// owned by the caller and passed explicitly, so independent resolutions
/// never observe each other's overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MigrationSettings {
    table_name: String,
    schema_name: Option<String>,
}

impl Default for MigrationSettings {
    fn default() -> Self {
        Self {
            table_name: DEFAULT_TRACKING_TABLE.to_string(),
            schema_name: None,
        }
    }
}

impl MigrationSettings {
    pub fn set_tracking_table_name(&mut self, name: impl Into<String>) {
        self.table_name = name.into();
    }

    pub fn set_tracking_schema_name(&mut self, name: impl Into<String>) {
        self.schema_name = Some(name.into());
    }

    pub fn tracking_table_name(&self) -> &str {
        &self.table_name
    }

    /// `None` means the connection's default schema
    pub fn tracking_schema_name(&self) -> Option<&str> {
        self.schema_name.as_deref()
    }
}

fn is_valid_sql_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }

    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

/// Safely format the (optionally schema-qualified) tracking table name for SQL
pub fn format_tracking_table_name(settings: &MigrationSettings, dialect: Dialect) -> Result<String> {
    let table = settings.tracking_table_name();
    if !is_valid_sql_identifier(table) {
        return Err(anyhow!(
            "Invalid table name '{}': must contain only letters, numbers, underscores, and dollar signs, starting with letter or underscore",
            table
        ));
    }

    match settings.tracking_schema_name() {
        Some(schema) => {
            if !is_valid_sql_identifier(schema) {
                return Err(anyhow!(
                    "Invalid schema name '{}': must contain only letters, numbers, underscores, and dollar signs, starting with letter or underscore",
                    schema
                ));
            }
            Ok(format!(
                "{}.{}",
                dialect.quote_identifier(schema),
                dialect.quote_identifier(table)
            ))
        }
        None => Ok(dialect.quote_identifier(table)),
    }
}
