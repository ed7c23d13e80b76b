//! Value types decoded from the remote API.

use serde::{Deserialize, Serialize};

/// A single post as returned by the remote listing endpoint.
///
/// Identity is `id`; instances are immutable and owned by the state
/// snapshot that references them. Unknown JSON keys are ignored on
/// decode, missing required keys fail the whole fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "userId")]
    pub user_id: u64,
    pub id: u64,
    pub title: String,
    pub body: String,
}
