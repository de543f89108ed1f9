//! Logger setup for hosts
//!
//! The library logs through the `log` facade; only binaries install a logger.

/// Initialize the logging system with a default level
///
/// `RUST_LOG` still takes precedence when set. Calling this twice is harmless;
/// the second initialization is ignored.
pub fn init_with_level(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    let _ = env_logger::Builder::from_env(env).try_init();
}
