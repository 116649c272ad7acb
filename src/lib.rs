//! MaveDB API client library.
//!
//! A thin Rust client for the MaveDB REST API: fetch model instances
//! (experiments, score sets) by ID, and submit new instances with
//! token-based authorization. Model instances are exchanged as untyped
//! JSON; the remote service is authoritative for validation.
//!
//! # Quick Start
//!
//! ```no_run
//! use mavetools::{Licence, MaveClient};
//!
//! #[tokio::main]
//! async fn main() -> mavetools::Result<()> {
//!     // Create client from environment variables
//!     let client = MaveClient::from_env()?;
//!
//!     // Fetch a score set by URN
//!     let scoreset = client
//!         .get_model_instance("scoresets", "urn:mavedb:00000001-a-1")
//!         .await?;
//!     println!("{}", serde_json::to_string_pretty(&scoreset)?);
//!
//!     // Submit a new experiment; the API assigns and returns its URN
//!     let experiment = serde_json::json!({
//!         "title": "My experiment",
//!         "licence": Licence::cc0(),
//!     });
//!     let urn = client.post_model_instance(&experiment, "experiments").await?;
//!     println!("Created {urn}");
//!
//!     Ok(())
//! }
//! ```
//!
//! # Errors
//!
//! All failures are returned as [`MaveError`] values the caller can match
//! on; the library never terminates the process. The `mavetools` binary is
//! the one place errors become exit codes.
//!
//! # Configuration
//!
//! [`MaveClient::from_env`] reads:
//!
//! - `MAVEDB_API_URL` (optional) - Base URL (defaults to the local
//!   development server `http://127.0.0.1:8000/api/`)
//! - `MAVEDB_API_TOKEN` (optional) - Auth token, required only for POSTs

mod client;
mod error;
mod models;

pub mod cli;

// Re-export core types
pub use client::{MaveClient, MaveClientBuilder, ENV_API_TOKEN, ENV_API_URL};
pub use error::{MaveError, Result};

// Re-export models
pub use models::Licence;
