use tracing_subscriber::EnvFilter;

/// Map the `-v` count onto a log level. Warnings are always shown.
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the stderr subscriber. Stdout is reserved for the report.
pub fn init_tracing(verbosity: u8) {
    let filter = EnvFilter::new(level_for(verbosity));

    // A global subscriber may already be installed (test harnesses do this);
    // keep that one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .without_time()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_saturates_at_trace() {
        assert_eq!(level_for(0), "warn");
        assert_eq!(level_for(2), "debug");
        assert_eq!(level_for(9), "trace");
    }
}
