use crate::config::Environment;
use crate::constants::CONNECT_TIMEOUT;
use crate::dialect::Dialect;
use crate::error::ResolveError;
use sqlx::AnyPool;
use sqlx::any::AnyPoolOptions;
use std::time::Duration;
use tracing::{debug, info};

/// Mask password in database URL for display
pub fn mask_url_password(url: &str) -> String {
    let Some((protocol, rest)) = url.split_once("://") else {
        return url.to_string();
    };

    // User info ends at the last '@' before the first '/' following an '@'
    let search_end = rest
        .find('@')
        .and_then(|first_at| rest[first_at..].find('/').map(|i| first_at + i))
        .unwrap_or(rest.len());
    if let Some(at_pos) = rest[..search_end].rfind('@') {
        let user_info = &rest[..at_pos];
        let host_and_path = &rest[at_pos + 1..];

        if let Some((username, _)) = user_info.split_once(':') {
            return format!("{}://{}:***@{}", protocol, username, host_and_path);
        }
    }

    url.to_string()
}

/// Driver layer used to open connections for a validated dialect.
///
/// Implementations only ever see dialects that passed the allowlist.
pub trait Driver {
    type Connection;

    fn open(
        &self,
        dialect: Dialect,
        data_source: &str,
    ) -> impl Future<Output = Result<Self::Connection, sqlx::Error>> + Send;
}

/// sqlx `Any` driver with the postgres, mysql and sqlite backends installed
#[derive(Debug, Clone)]
pub struct SqlxDriver {
    acquire_timeout: Duration,
}

impl SqlxDriver {
    pub fn new(acquire_timeout: Duration) -> Self {
        Self { acquire_timeout }
    }
}

impl Default for SqlxDriver {
    fn default() -> Self {
        Self::new(CONNECT_TIMEOUT)
    }
}

impl Driver for SqlxDriver {
    type Connection = AnyPool;

    async fn open(&self, dialect: Dialect, data_source: &str) -> Result<AnyPool, sqlx::Error> {
        // The Any driver picks a backend from the URL scheme, so the scheme
        // must agree with the dialect the environment asked for.
        if !dialect.accepts_url(data_source) {
            return Err(sqlx::Error::Configuration(
                format!(
                    "data source is not a {} URL (expected one of: {})",
                    dialect,
                    dialect.url_schemes().join(", ")
                )
                .into(),
            ));
        }

        sqlx::any::install_default_drivers();

        AnyPoolOptions::new()
            .max_connections(1)
            .acquire_timeout(self.acquire_timeout)
            .connect(data_source)
            .await
    }
}

/// Validate the environment's dialect and open a connection for it.
///
/// The dialect identifier must name a compiled-in [`Dialect`]; an unknown
/// identifier fails with [`ResolveError::UnsupportedDialect`] and the driver is
/// never consulted.
pub async fn open_connection<D: Driver>(
    driver: &D,
    environment: &Environment,
) -> Result<(D::Connection, Dialect), ResolveError> {
    let dialect: Dialect = environment.dialect.parse()?;
    let masked = mask_url_password(&environment.data_source);
    debug!("Opening {} connection to {}", dialect, masked);

    let connection = driver
        .open(dialect, &environment.data_source)
        .await
        .map_err(|source| ResolveError::Connection {
            dialect: dialect.to_string(),
            data_source: masked.clone(),
            source,
        })?;

    info!("Connected to {} database at {}", dialect, masked);
    Ok((connection, dialect))
}
