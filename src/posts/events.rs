//! One-shot navigation signals for the listing screen.

/// The two destinations the UI boundary knows about. `PostList` is the
/// start destination; `PostDetail` is reached through exactly one
/// transition, triggered by [`NavigationEvent::NavigateNext`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    PostList,
    PostDetail,
}

/// Transient navigation request.
///
/// Delivered through a conflated channel: consumed at most once, never
/// replayed, and superseded by a newer event if one arrives before the
/// first is consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationEvent {
    NavigateNext,
}

impl NavigationEvent {
    /// Target of the transition this event requests.
    pub fn destination(&self) -> Destination {
        match self {
            Self::NavigateNext => Destination::PostDetail,
        }
    }
}
