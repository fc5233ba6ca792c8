use crate::config::{
    EnvironmentArgs, EnvironmentOrigin, EnvironmentResolver, EnvironmentStore, ResolvedEnvironment,
    load_environments,
};
use crate::db::mask_url_password;
use crate::dialect::Dialect;
use crate::migration_tracking::{MigrationSettings, format_tracking_table_name};
use anyhow::{Context, Result, anyhow};
use console::style;
use std::path::Path;

/// Env subcommands
#[derive(Debug, Clone, clap::Subcommand)]
pub enum EnvCommands {
    /// Show the resolved environment without connecting
    Show {
        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,

        #[command(flatten)]
        overrides: EnvironmentArgs,
    },

    /// Get a single resolved value (dialect, datasource, dir, table, schema)
    Get {
        key: String,

        #[command(flatten)]
        overrides: EnvironmentArgs,
    },

    /// List environments defined in the configuration file
    List,

    /// Check every environment in the configuration file for a supported dialect
    Validate,
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

/// Execute env command
pub fn cmd_env_show(resolver: EnvironmentResolver, format: &OutputFormat) -> Result<()> {
    let mut settings = MigrationSettings::default();
    let resolved = resolver.resolve(&mut settings)?;

    let tracking_table = match resolved.environment.dialect.parse::<Dialect>() {
        Ok(dialect) => Some(format_tracking_table_name(&settings, dialect)?),
        Err(_) => None,
    };

    let view = serde_json::json!({
        "name": resolved.name,
        "origin": resolved.origin,
        "dialect": resolved.environment.dialect,
        "datasource": mask_url_password(&resolved.environment.data_source),
        "dir": resolved.environment.dir,
        "tracking_table": settings.tracking_table_name(),
        "tracking_schema": settings.tracking_schema_name(),
    });

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&view)?),
        OutputFormat::Text => print_environment_text(&resolved, tracking_table.as_deref()),
    }

    Ok(())
}

fn print_environment_text(resolved: &ResolvedEnvironment, tracking_table: Option<&str>) {
    let env = &resolved.environment;
    let origin = match resolved.origin {
        EnvironmentOrigin::File => style("configuration file").green(),
        EnvironmentOrigin::Fallback => style("fallback defaults").yellow(),
    };

    println!("Environment: {} ({})", style(&resolved.name).bold(), origin);
    println!("  dialect:        {}", env.dialect);
    println!("  datasource:     {}", mask_url_password(&env.data_source));
    println!("  dir:            {}", env.dir);
    match tracking_table {
        Some(table) => println!("  tracking table: {}", table),
        None => println!(
            "  tracking table: {}",
            style("(unsupported dialect)").red()
        ),
    }
}

/// Print one resolved value; data sources are masked
pub fn cmd_env_get(resolver: EnvironmentResolver, key: &str) -> Result<()> {
    let mut settings = MigrationSettings::default();
    let resolved = resolver.resolve(&mut settings)?;
    println!("{}", get_environment_value(&resolved, &settings, key)?);
    Ok(())
}

fn get_environment_value(
    resolved: &ResolvedEnvironment,
    settings: &MigrationSettings,
    key: &str,
) -> Result<String> {
    let env = &resolved.environment;

    match key {
        "dialect" => Ok(env.dialect.clone()),
        "datasource" => Ok(mask_url_password(&env.data_source)),
        "dir" => Ok(env.dir.clone()),
        "table" => Ok(settings.tracking_table_name().to_string()),
        "schema" => Ok(settings
            .tracking_schema_name()
            .unwrap_or("(default)")
            .to_string()),
        _ => Err(anyhow!("Unknown environment key: {}", key)),
    }
}

/// List environment names in the configuration file
pub fn cmd_env_list(config_file: &Path) -> Result<()> {
    let store = load_environments(config_file)?;

    if store.is_empty() {
        println!("No environments defined in {}", config_file.display());
        return Ok(());
    }

    for name in store.names() {
        println!("{}", name);
    }
    Ok(())
}

/// Validate every environment in the configuration file
pub fn cmd_env_validate(config_file: &Path) -> Result<()> {
    let store = load_environments(config_file)?;
    let problems = validate_store(&store);

    if problems.is_empty() {
        println!(
            "✅ Configuration file '{}' is valid ({} environment{})",
            config_file.display(),
            store.len(),
            if store.len() == 1 { "" } else { "s" }
        );
        return Ok(());
    }

    for problem in &problems {
        eprintln!("{} {}", style("✗").red(), problem);
    }
    Err(anyhow!(
        "{} invalid environment{} in {}",
        problems.len(),
        if problems.len() == 1 { "" } else { "s" },
        config_file.display()
    ))
    .context("Configuration validation failed")
}

fn validate_store(store: &EnvironmentStore) -> Vec<String> {
    store
        .names()
        .filter_map(|name| {
            let input = store.get(name)?;
            match input.dialect.as_deref() {
                None | Some("") => Some(format!("{}: missing dialect", name)),
                Some(dialect) => dialect
                    .parse::<Dialect>()
                    .err()
                    .map(|e| format!("{}: {}", name, e)),
            }
        })
        .collect()
}
