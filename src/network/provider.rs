//! Contract for the remote post source.

use async_trait::async_trait;

use crate::model::Post;
use crate::network::error::FetchError;

/// Async boundary that produces the post collection.
///
/// One instance is shared by every intent a store handles, so
/// `fetch_posts` must tolerate concurrent calls; each call is
/// independent with no shared request state. Failure is binary — a
/// call either yields the fully-decoded, order-preserving sequence or
/// a [`FetchError`]. No retry or partial-result semantics.
#[async_trait]
pub trait PostProvider: Send + Sync {
    /// Fetch the full post collection.
    async fn fetch_posts(&self) -> Result<Vec<Post>, FetchError>;

    /// Release any held connection resources.
    ///
    /// Called exactly once by the owning store during teardown; must
    /// be safe against repeated invocation.
    fn shutdown(&self);
}
