/// Control-plane API conventions.
pub mod api {
    /// Contract version pinned on every control-plane call.
    pub const VERSION: &str = "2024-06-01";

    /// Query parameter carrying the pinned version.
    pub const VERSION_PARAM: &str = "api-version";

    /// Header carrying the API key, when one is configured.
    pub const KEY_HEADER: &str = "X-API-Key";
}

/// Environment variables read by `ControlPlaneConfig::from_env`.
pub mod env {
    pub const ENDPOINT: &str = "GATEOPS_ENDPOINT";
    pub const API_KEY: &str = "GATEOPS_API_KEY";
}

/// Default client settings.
pub mod defaults {
    /// HTTP request timeout in seconds. Per-operation deadlines come
    /// from the caller's cancellation token, not from here.
    pub const TIMEOUT_SECS: u64 = 30;

    pub const LOG_LEVEL: &str = "info";
}
