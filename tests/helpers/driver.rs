use dbconfig::Dialect;
use dbconfig::db::Driver;
use std::sync::Mutex;

/// Connection handed out by [`RecordingDriver`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeConnection {
    pub dialect: Dialect,
    pub data_source: String,
}

/// Driver that records every open request instead of touching a database
#[derive(Debug, Default)]
pub struct RecordingDriver {
    opened: Mutex<Vec<(Dialect, String)>>,
    fail: bool,
}

impl RecordingDriver {
    /// A driver whose every open fails as an unreachable database would
    pub fn failing() -> Self {
        Self {
            opened: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn opened(&self) -> Vec<(Dialect, String)> {
        self.opened.lock().unwrap().clone()
    }
}

impl Driver for RecordingDriver {
    type Connection = FakeConnection;

    async fn open(&self, dialect: Dialect, data_source: &str) -> Result<FakeConnection, sqlx::Error> {
        self.opened
            .lock()
            .unwrap()
            .push((dialect, data_source.to_string()));

        if self.fail {
            return Err(sqlx::Error::PoolTimedOut);
        }

        Ok(FakeConnection {
            dialect,
            data_source: data_source.to_string(),
        })
    }
}
