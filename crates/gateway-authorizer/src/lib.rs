//! gateway-authorizer: In-process host for the gateway authorizer
//!
//! Wires configuration, logging and the key store client around
//! `authorizer-core`, and exposes a handler that speaks the platform's raw
//! JSON events. The invocation adapter (how the platform calls the handler
//! per request) stays outside this crate.
//!
//! # Example
//!
//! ```rust,ignore
//! use gateway_authorizer::{Config, Handler};
//!
//! let config = Config::load(std::path::Path::new("authorizer.yaml"))?;
//! gateway_authorizer::telemetry::init_logging(&config.log_level);
//!
//! let handler = Handler::from_config(&config)?;
//! let response = handler.handle(event).await; // event: serde_json::Value
//! ```

pub mod config;
pub mod handler;
pub mod telemetry;

// Re-export public types
pub use config::{Config, KeyStoreConfig};
pub use handler::Handler;
