use crate::config::{merge::Merge, types::*};
use crate::constants::{
    CONFIG_FILENAME, DEFAULT_DATA_SOURCE, DEFAULT_MIGRATIONS_DIR, FALLBACK_DATA_SOURCE_VAR,
};
use crate::error::ResolveError;
use crate::migration_tracking::MigrationSettings;
use std::path::PathBuf;
use tracing::{debug, warn};

type EnvLookup = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Resolves a selected environment name into a fully defaulted [`Environment`].
///
/// Layers, later wins: document entry (or the synthesized fallback), then
/// CLI overrides. Empty fields are then defaulted and tracking overrides are
/// written into the caller's [`MigrationSettings`].
pub struct EnvironmentResolver {
    name: String,
    store: Option<EnvironmentStore>,
    config_path: PathBuf,
    overrides: EnvironmentInput,
    policy: FallbackPolicy,
    env: EnvLookup,
}

impl EnvironmentResolver {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            store: None,
            config_path: PathBuf::from(CONFIG_FILENAME),
            overrides: EnvironmentInput::default(),
            policy: FallbackPolicy::default(),
            env: Box::new(|key: &str| std::env::var(key).ok()),
        }
    }

    /// Store loaded from `path`; `None` when loading failed
    pub fn with_store(mut self, store: Option<EnvironmentStore>, path: impl Into<PathBuf>) -> Self {
        self.store = store;
        self.config_path = path.into();
        self
    }

    pub fn with_cli_args(mut self, overrides: EnvironmentInput) -> Self {
        self.overrides = self.overrides.merge(overrides);
        self
    }

    pub fn with_fallback_policy(mut self, policy: FallbackPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replace the process environment lookup used for the fallback data source
    pub fn with_env_lookup<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        self.env = Box::new(lookup);
        self
    }

    pub fn resolve(self, settings: &mut MigrationSettings) -> Result<ResolvedEnvironment, ResolveError> {
        let (input, origin) = self.lookup()?;
        let input = input.merge(self.overrides.clone());
        let environment = Self::apply_defaults(input);

        if let Some(table) = &environment.table_name {
            debug!("Using tracking table override '{}'", table);
            settings.set_tracking_table_name(table.clone());
        }
        if let Some(schema) = &environment.schema_name {
            debug!("Using tracking schema override '{}'", schema);
            settings.set_tracking_schema_name(schema.clone());
        }

        Ok(ResolvedEnvironment {
            name: self.name,
            origin,
            environment,
        })
    }

    fn lookup(&self) -> Result<(EnvironmentInput, EnvironmentOrigin), ResolveError> {
        if let Some(input) = self.store.as_ref().and_then(|s| s.get(&self.name)) {
            debug!(
                "Found environment '{}' in {}",
                self.name,
                self.config_path.display()
            );
            return Ok((input.clone(), EnvironmentOrigin::File));
        }

        if self.policy == FallbackPolicy::Deny {
            return Err(ResolveError::EnvironmentNotFound {
                name: self.name.clone(),
                path: self.config_path.clone(),
            });
        }

        warn!(
            "Environment '{}' not found in {}; using fallback environment",
            self.name,
            self.config_path.display()
        );
        let data_source = (self.env)(FALLBACK_DATA_SOURCE_VAR);
        Ok((EnvironmentInput::fallback(data_source), EnvironmentOrigin::Fallback))
    }

    fn apply_defaults(input: EnvironmentInput) -> Environment {
        // The data source is passed through verbatim; only an empty one is replaced
        let data_source = non_empty(input.data_source).unwrap_or_else(|| {
            debug!("Empty data source; using default");
            DEFAULT_DATA_SOURCE.to_string()
        });

        Environment {
            dialect: input.dialect.unwrap_or_default(),
            data_source,
            dir: non_empty(input.dir).unwrap_or_else(|| DEFAULT_MIGRATIONS_DIR.to_string()),
            table_name: non_empty(input.table_name),
            schema_name: non_empty(input.schema_name),
        }
    }
}

impl Default for EnvironmentResolver {
    fn default() -> Self {
        Self::new(crate::constants::DEFAULT_ENVIRONMENT)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
