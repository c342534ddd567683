//! Commit API client trait
//!
//! This module defines the `CommitApi` trait that all client
//! implementations must satisfy.

use crate::error::ClientError;
use crate::route::CommitRoute;
use crate::types::{CommitInfo, DiffFile};
use async_trait::async_trait;

/// Read-only access to commit metadata and diffs
///
/// Both calls are independent: callers may issue them concurrently and
/// a failure of one says nothing about the other.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing across
/// async tasks and threads.
///
/// # Example
///
/// ```rust,ignore
/// use commit_client::{CommitApi, CommitRoute};
///
/// async fn summary(client: &dyn CommitApi, route: &CommitRoute) -> Option<String> {
///     client.fetch_commit(route).await.ok().map(|c| c.summary().to_string())
/// }
/// ```
#[async_trait]
pub trait CommitApi: Send + Sync {
    /// Fetch commit metadata
    ///
    /// `GET {base}/repositories/{owner}/{repo}/commits/{commitOid}`
    async fn fetch_commit(&self, route: &CommitRoute) -> Result<CommitInfo, ClientError>;

    /// Fetch the changed files of a commit, in backend order
    ///
    /// `GET {base}/repositories/{owner}/{repo}/commits/{commitOid}/diff`
    async fn fetch_diff(&self, route: &CommitRoute) -> Result<Vec<DiffFile>, ClientError>;
}
