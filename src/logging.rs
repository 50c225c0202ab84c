/// Initializes the `env_logger` backend for the `log` facade. Honors `RUST_LOG`; defaults
/// to `info` when unset. Safe to call more than once; later calls are no-ops.
pub fn init() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}
