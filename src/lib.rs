//! Unidirectional-data-flow (MVI) state container for a post listing.
//!
//! The UI layer is an external collaborator: it subscribes to the state
//! and navigation streams exposed by [`posts::PostStore`] and feeds user
//! actions back in as [`posts::PostIntent`]s. Everything else here is
//! the orchestration core: intent routing, async loading through the
//! [`network::PostProvider`] boundary, and atomic state publication.

pub mod model;
pub mod mvi;
pub mod network;
pub mod posts;

pub use model::Post;
pub use posts::PostStore;
