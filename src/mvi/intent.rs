//! Base trait for intents (user actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// An intent is a closed-set description of something the user did.
/// It carries no behavior of its own; a store matches on it
/// exhaustively, so adding a variant breaks every consumer at
/// compile time rather than being silently ignored.
pub trait Intent: Send + 'static {}
