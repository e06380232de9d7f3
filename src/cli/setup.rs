//! Runtime setup: thread pool, logging and color decisions.

/// Configure rayon global thread pool once at startup. `0` leaves the
/// choice to rayon.
pub fn configure_thread_pool(jobs: usize) {
    let mut builder = rayon::ThreadPoolBuilder::new();

    if jobs > 0 {
        builder = builder.num_threads(jobs);
    }

    if let Err(e) = builder.build_global() {
        log::debug!("Thread pool already configured: {}", e);
    }
}

/// Log level for a `-v` count. `RUST_LOG` still wins when set.
pub fn log_level(verbosity: u8, quiet: bool) -> log::LevelFilter {
    if quiet {
        return log::LevelFilter::Error;
    }
    match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

pub fn init_logging(verbosity: u8, quiet: bool) {
    let level = log_level(verbosity, quiet);
    let env = env_logger::Env::default().default_filter_or(level.as_str());
    // A second init (tests, embedding) is harmless.
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}

/// Whether to emit ANSI colors. `--plain` and `NO_COLOR` both disable them.
pub fn use_color(plain: bool) -> bool {
    !plain && std::env::var_os("NO_COLOR").is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_from_verbosity() {
        assert_eq!(log_level(0, false), log::LevelFilter::Warn);
        assert_eq!(log_level(1, false), log::LevelFilter::Info);
        assert_eq!(log_level(2, false), log::LevelFilter::Debug);
        assert_eq!(log_level(5, false), log::LevelFilter::Trace);
        assert_eq!(log_level(3, true), log::LevelFilter::Error);
    }

    #[test]
    fn test_plain_disables_color() {
        assert!(!use_color(true));
    }
}
