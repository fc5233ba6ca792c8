//! Compiled-in SQL dialects.
//!
//! The [`Dialect`] enum is the allowlist: an identifier that does not parse
//! into one of its variants is rejected before any driver is asked to open a
//! connection. Each variant also carries the SQL-generation facts the
//! migration engine needs and the URL schemes its driver accepts.

use crate::error::ResolveError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    Sqlite3,
    Postgres,
    Mysql,
}

impl Dialect {
    pub const ALL: [Dialect; 3] = [Dialect::Sqlite3, Dialect::Postgres, Dialect::Mysql];

    /// Identifier as written in the configuration document
    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::Sqlite3 => "sqlite3",
            Dialect::Postgres => "postgres",
            Dialect::Mysql => "mysql",
        }
    }

    /// Quote an identifier, doubling any embedded quote character
    pub fn quote_identifier(&self, ident: &str) -> String {
        let quote = match self {
            Dialect::Sqlite3 | Dialect::Postgres => '"',
            Dialect::Mysql => '`',
        };

        let mut quoted = String::with_capacity(ident.len() + 2);
        quoted.push(quote);
        for c in ident.chars() {
            if c == quote {
                quoted.push(quote);
            }
            quoted.push(c);
        }
        quoted.push(quote);
        quoted
    }

    /// Column definition for an auto-incrementing integer primary key
    pub fn auto_increment_primary_key(&self) -> &'static str {
        match self {
            Dialect::Sqlite3 => "INTEGER PRIMARY KEY AUTOINCREMENT",
            Dialect::Postgres => "BIGSERIAL PRIMARY KEY",
            Dialect::Mysql => "BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY",
        }
    }

    /// Bind parameter placeholder for the 1-based parameter `index`
    pub fn bind_placeholder(&self, index: usize) -> String {
        match self {
            Dialect::Postgres => format!("${}", index),
            Dialect::Sqlite3 | Dialect::Mysql => "?".to_string(),
        }
    }

    /// Trailer appended to CREATE TABLE statements
    pub fn create_table_suffix(&self) -> &'static str {
        match self {
            Dialect::Mysql => " ENGINE=InnoDB DEFAULT CHARSET=UTF8;",
            Dialect::Sqlite3 | Dialect::Postgres => ";",
        }
    }

    /// URL schemes the sqlx driver for this dialect understands
    pub fn url_schemes(&self) -> &'static [&'static str] {
        match self {
            Dialect::Sqlite3 => &["sqlite"],
            Dialect::Postgres => &["postgres", "postgresql"],
            Dialect::Mysql => &["mysql", "mariadb"],
        }
    }

    /// Whether `url` names a scheme handled by this dialect's driver
    pub fn accepts_url(&self, url: &str) -> bool {
        match url.split_once(':') {
            Some((scheme, _)) => {
                let scheme = scheme.to_ascii_lowercase();
                self.url_schemes().contains(&scheme.as_str())
            }
            None => false,
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dialect::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| ResolveError::unsupported_dialect(s))
    }
}
