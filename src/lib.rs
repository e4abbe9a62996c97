pub mod cli;
pub mod config;
pub mod digest;
pub mod report;
pub mod selftest;

pub use config::{load_config, resolve_config, Config};
pub use digest::{check_path, hash_path, hash_reader, Hashed};
pub use report::{render, Format};
pub use selftest::run_selftest;

/// Install the stderr logger. `RUST_LOG` overrides the default filter.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .try_init();
}
