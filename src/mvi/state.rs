//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq for detecting changes)
///
/// Subscribers only ever observe whole values; a store replaces the
/// current state atomically and never exposes a partial update.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
