use tracing_subscriber::{fmt, EnvFilter};

use crate::constants;

/// Initialize tracing for an embedding binary or test harness.
///
/// `RUST_LOG` wins when set; otherwise the given level filters
/// everything. The orchestration engine usually installs its own
/// subscriber, in which case this must not be called.
pub fn init(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(true).init();
}

/// `init` at the default level.
pub fn init_default() {
    init(constants::defaults::LOG_LEVEL);
}
