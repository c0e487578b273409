use env_logger::Env;

/// Initialize `env_logger`, defaulting to `info` when `RUST_LOG` is unset.
pub fn logging() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .try_init();
}
