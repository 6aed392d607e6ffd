//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns for Semantic Insights.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-based layered configuration |
//! | [`logging`] | tracing subscriber setup |
//! | [`error_ext`] | Context helpers for foreign errors |
//! | [`di`] | Provider factory, backend fallback and application bootstrap |
//! | [`insights_file`] | Reading prepared insight files |

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod insights_file;
pub mod logging;

pub use config::{AppConfig, ConfigLoader};
pub use di::{AppContext, init_app};
pub use error_ext::ErrorContext;
