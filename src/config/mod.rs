pub mod builder;
pub mod defaults;
pub mod merge;
pub mod types;


pub use builder::EnvironmentResolver;
pub use types::*;

use crate::error::ResolveError;
use std::path::Path;
use tracing::{debug, warn};

/// Load every named environment from a configuration document.
///
/// No validation happens here; a read or parse failure returns no data at all.
pub fn load_environments(path: impl AsRef<Path>) -> Result<EnvironmentStore, ResolveError> {
    let path = path.as_ref();
    let contents =
        std::fs::read_to_string(path).map_err(|e| ResolveError::config_load(path, e))?;

    if contents.trim().is_empty() {
        return Ok(EnvironmentStore::default());
    }

    let store: Option<EnvironmentStore> =
        serde_yaml::from_str(&contents).map_err(|e| ResolveError::config_load(path, e))?;

    Ok(store.unwrap_or_default())
}

/// Load environments for resolution, treating any failure as "no document".
///
/// Resolution falls back to the synthesized environment when this returns
/// `None`, so the failure is logged rather than propagated.
pub fn try_load_environments(path: impl AsRef<Path>) -> Option<EnvironmentStore> {
    match load_environments(&path) {
        Ok(store) => Some(store),
        Err(e) if e.is_missing_file() => {
            debug!("No configuration file at {}", path.as_ref().display());
            None
        }
        Err(e) => {
            warn!("{}", e);
            None
        }
    }
}
