use crate::config::EnvironmentResolver;
use crate::db::{SqlxDriver, mask_url_password};
use crate::migration_tracking::{MigrationSettings, format_tracking_table_name};
use crate::resolve::resolve;
use anyhow::{Context, Result};
use tracing::info;

/// Resolve the environment, open a connection and run a trivial probe query.
///
/// The pool is closed whether or not the probe succeeds.
pub async fn cmd_check(resolver: EnvironmentResolver) -> Result<()> {
    let mut settings = MigrationSettings::default();
    let resolved = resolve(resolver, &mut settings, &SqlxDriver::default()).await?;

    let probe = sqlx::query("SELECT 1")
        .execute(&resolved.connection)
        .await
        .context("Connection probe failed");
    resolved.connection.close().await;
    probe?;

    let tracking_table = format_tracking_table_name(&settings, resolved.dialect)?;
    info!("Tracking table for migrations: {}", tracking_table);

    println!(
        "✅ Environment '{}' is ready: {} at {} (migrations in {})",
        resolved.environment.name,
        resolved.dialect,
        mask_url_password(&resolved.environment.environment.data_source),
        resolved.environment.environment.dir
    );
    Ok(())
}
