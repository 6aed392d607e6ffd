//! Domain Services
//!
//! Pure business rules used by the use cases.
//!
//! | Service | Description |
//! |---------|-------------|
//! | [`explanation`] | Human-readable reasons for a match |

/// Match explanation rules
pub mod explanation;
