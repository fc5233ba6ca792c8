pub mod connection;

pub use connection::{Driver, SqlxDriver, mask_url_password, open_connection};
