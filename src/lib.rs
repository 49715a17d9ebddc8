//! securedb - a secure query-execution layer for web-application backends
//!
//! One shared database connection, request-input sanitization applied once
//! per request, and a small family of query operations that bind every
//! parameter as text and reshape results per an explicit options contract.
//!
//! # Example
//! ```ignore
//! use securedb::{DbConfig, Fetched, RequestGuard, SecureDbClient};
//!
//! // Connect once at startup; the client is the process's only handle.
//! let config = DbConfig::from_env()?;
//! let client = SecureDbClient::connect(&config).await?;
//! let executor = client.executor();
//!
//! // Sanitize the request carriers before any handler reads them.
//! let mut guard = RequestGuard::new(query_params, form_params);
//! guard.sanitize();
//!
//! match executor
//!     .query_get("SELECT * FROM users WHERE id = $1", &[1.into()])
//!     .await?
//! {
//!     Fetched::One(row) => println!("{}", row.get("name")?),
//!     Fetched::Empty => println!("no such user"),
//!     other => println!("unexpected shape: {other:?}"),
//! }
//! ```

pub mod config;
pub mod drivers;
pub mod error;
pub mod executor;
pub mod guard;
pub mod helpers;
pub mod sanitizer;
pub mod traits;
pub mod types;
pub mod validators;

mod client;

// Re-export main types for convenient access
pub use client::SecureDbClient;
pub use config::DbConfig;
pub use error::{Result, SecureDbError};
pub use executor::{QueryExecutor, QueryOptions};
pub use guard::RequestGuard;
pub use sanitizer::{sanitize_str, sanitize_value};
pub use traits::DatabaseDriver;
pub use types::{Fetched, RawQueryResult, Record, Row, SqlValue};
pub use validators::ValidationError;
