//! Configuration loading and management for the Benefits Engine.
//!
//! This module provides the benefit cost rules ([`BenefitsConfiguration`]),
//! loading them from YAML files, and the server's environment settings.
//!
//! # Example
//!
//! ```no_run
//! use benefits_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/benefits.yaml").unwrap();
//! println!("Base cost per month: {}", config.config().base_cost_per_month);
//! ```

mod loader;
mod server;
mod types;

pub use loader::ConfigLoader;
pub use server::{DEFAULT_LISTEN_ADDR, ServerConfig};
pub use types::{BenefitsConfigFile, BenefitsConfiguration};
