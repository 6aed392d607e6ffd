//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain-specific constants are defined in `insights_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "insights.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "insights";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "INSIGHTS";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable holding a tracing filter directive
pub const LOG_FILTER_ENV: &str = "INSIGHTS_LOG";

// ============================================================================
// BACKEND SELECTION CONSTANTS
// ============================================================================

/// Fallback reason when remote storage is requested without credentials
pub const FALLBACK_NO_CREDENTIALS: &str = "remote credentials are not configured";

/// Prefix of the fallback reason when the remote service cannot be reached
pub const FALLBACK_UNREACHABLE: &str = "remote index unreachable";

/// Prefix of the fallback reason when the remote service rejects the credentials
pub const FALLBACK_AUTH_FAILED: &str = "remote credentials were rejected";
