//! Client for the commit endpoints of a repository-hosting backend
//!
//! This crate provides a trait-based client for the two read-only endpoints
//! the commit viewer needs. The trait keeps the viewer testable without a
//! running backend; the HTTP implementation is the only one shipped.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                CommitApi trait                   │
//! │  - fetch_commit()  GET .../commits/{oid}         │
//! │  - fetch_diff()    GET .../commits/{oid}/diff    │
//! └─────────────────────────────────────────────────┘
//!                        │
//!                        ▼
//!              ┌─────────────────────┐
//!              │  HttpCommitClient   │
//!              │  (reqwest)          │
//!              └─────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use commit_client::{ClientConfig, CommitApi, CommitRoute, HttpCommitClient};
//!
//! # async fn example() -> Result<(), commit_client::ClientError> {
//! let config = ClientConfig::new("http://localhost:3000")?;
//! let client = HttpCommitClient::new(config)?;
//!
//! let route = CommitRoute::new("octo", "hello-world", "abc123");
//! let info = client.fetch_commit(&route).await?;
//! let files = client.fetch_diff(&route).await?;
//! println!("{}: {} files", info.summary(), files.len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod http_client;
pub mod route;
pub mod types;

pub use client::CommitApi;
pub use error::ClientError;
pub use http_client::{ClientConfig, HttpCommitClient};
pub use route::CommitRoute;
pub use types::{CommitInfo, DiffFile, DiffLine, FileRef, Hunk, ParentRef, Signature};
