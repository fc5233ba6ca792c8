use clap::Args;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw environment entry - all fields Optional, exactly as read from the document
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct EnvironmentInput {
    pub dialect: Option<String>,
    #[serde(rename = "datasource")]
    pub data_source: Option<String>,
    pub dir: Option<String>,
    #[serde(rename = "table")]
    pub table_name: Option<String>,
    #[serde(rename = "schema")]
    pub schema_name: Option<String>,
}

/// Named environments loaded from one configuration document.
///
/// An entry written with no body (`staging:`) is kept as `None` and looks up
/// the same as a name that is not in the document at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct EnvironmentStore {
    environments: BTreeMap<String, Option<EnvironmentInput>>,
}

impl EnvironmentStore {
    pub fn get(&self, name: &str) -> Option<&EnvironmentInput> {
        self.environments.get(name).and_then(|e| e.as_ref())
    }

    /// Environment names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.environments.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.environments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.environments.is_empty()
    }
}

impl FromIterator<(String, EnvironmentInput)> for EnvironmentStore {
    fn from_iter<I: IntoIterator<Item = (String, EnvironmentInput)>>(iter: I) -> Self {
        Self {
            environments: iter
                .into_iter()
                .map(|(name, input)| (name, Some(input)))
                .collect(),
        }
    }
}

/// Resolved environment with all defaults applied
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Environment {
    /// Dialect identifier, not yet checked against the compiled-in dialects
    pub dialect: String,
    pub data_source: String,
    pub dir: String,
    pub table_name: Option<String>,
    pub schema_name: Option<String>,
}

/// Where a resolved environment came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvironmentOrigin {
    /// Entry found in the configuration document
    File,
    /// Synthesized because the document had no entry for the selected name
    Fallback,
}

/// Whether a missing environment may be replaced by the synthesized fallback
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FallbackPolicy {
    #[default]
    Allow,
    Deny,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResolvedEnvironment {
    pub name: String,
    pub origin: EnvironmentOrigin,
    pub environment: Environment,
}

// CLI argument group overriding fields of the selected environment
#[derive(Debug, Clone, Default, Args)]
pub struct EnvironmentArgs {
    #[arg(long, help = "Dialect to use (sqlite3, postgres, mysql)")]
    pub dialect: Option<String>,

    #[arg(long, help = "Data source / connection URL")]
    pub datasource: Option<String>,

    #[arg(long, help = "Migrations directory path")]
    pub dir: Option<String>,

    #[arg(long, help = "Migration tracking table name")]
    pub table: Option<String>,

    #[arg(long, help = "Migration tracking schema name")]
    pub schema: Option<String>,
}

impl From<EnvironmentArgs> for EnvironmentInput {
    fn from(args: EnvironmentArgs) -> Self {
        fn present(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.is_empty())
        }

        Self {
            dialect: present(args.dialect),
            data_source: present(args.datasource),
            dir: present(args.dir),
            table_name: present(args.table),
            schema_name: present(args.schema),
        }
    }
}
