use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

const DEFAULT_DIRECTIVE: &str = "info";

/// Installs the global subscriber once. `directive` is an `EnvFilter` string
/// such as `info` or `nf_providers=debug,info`; an invalid one falls back to
/// `info`. Output goes to stderr so `nf fetch` can pipe JSON on stdout.
pub fn init_logging(directive: &str) {
    if tracing::dispatcher::has_been_set() {
        return;
    }
    INIT.call_once(|| {
        let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init_logging("not a [valid directive");
        init_logging("debug");
        assert!(tracing::dispatcher::has_been_set());
    }
}
