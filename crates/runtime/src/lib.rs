//! Runtime wiring for spawner menu rendering.
//!
//! This crate turns loaded content into concrete collaborators, provides a
//! bounded thread-safe render cache, and exposes [`MenuService`] as the single
//! entry point hosts call to render and open spawner menus.
//!
//! Modules are organized by responsibility:
//! - [`api`] exposes the error types downstream clients interact with
//! - [`config`] resolves runtime configuration from content and environment
//! - [`oracle`] and [`repository`] provide data adapters reused by other crates
//! - [`service`] hosts the orchestrator
pub mod api;
pub mod config;
pub mod oracle;
pub mod repository;
pub mod service;

pub use api::{Result, RuntimeError};
pub use config::RuntimeConfig;
pub use oracle::{IconOracleImpl, LanguageOracleImpl, LootOracleImpl, OracleManager, ShopOracleImpl};
pub use repository::{BoundedRenderCache, CacheError};
pub use service::MenuService;
