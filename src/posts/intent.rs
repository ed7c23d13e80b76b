use crate::mvi::Intent;

/// User actions on the post listing screen.
///
/// The set is closed and payload-free; the store routes each variant
/// with an exhaustive match, so a new action here forces every
/// consumer to handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostIntent {
    /// Load the listing into the primary tagged-union state.
    LoadPosts,
    /// Load the listing into the flat alternate state.
    LoadPostsAlternate,
    /// Request a transition to the next screen.
    NavigateNext,
}

impl Intent for PostIntent {}
