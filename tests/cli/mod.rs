/// CLI integration tests exercising the actual binary with assert_cmd.
///
/// ```rust
/// helper.command()
///     .args(["env", "show"])
///     .assert()
///     .success()
///     .stdout(predicate::str::contains("fallback"));
/// ```
pub mod check;
pub mod env_commands;
