pub mod check;
pub mod env;

pub use check::cmd_check;
pub use env::{EnvCommands, cmd_env_get, cmd_env_list, cmd_env_show, cmd_env_validate};
