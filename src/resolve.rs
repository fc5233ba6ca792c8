//! End-to-end environment resolution: lookup, defaulting, settings
//! propagation, dialect validation, connection open.

use crate::config::{EnvironmentResolver, ResolvedEnvironment};
use crate::db::{Driver, open_connection};
use crate::dialect::Dialect;
use crate::error::ResolveError;
use crate::migration_tracking::MigrationSettings;

/// A validated environment with its open connection
#[derive(Debug)]
pub struct Resolved<C> {
    pub connection: C,
    pub dialect: Dialect,
    pub environment: ResolvedEnvironment,
}

/// Resolve the selected environment and open a connection for it.
///
/// Nothing is retried; the first failing step ends resolution. The caller
/// owns the returned connection and must close it once migration work ends.
pub async fn resolve<D: Driver>(
    resolver: EnvironmentResolver,
    settings: &mut MigrationSettings,
    driver: &D,
) -> Result<Resolved<D::Connection>, ResolveError> {
    let environment = resolver.resolve(settings)?;
    let (connection, dialect) = open_connection(driver, &environment.environment).await?;

    Ok(Resolved {
        connection,
        dialect,
        environment,
    })
}
