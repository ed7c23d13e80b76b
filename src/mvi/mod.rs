//! Model-View-Intent (MVI) architecture primitives.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Store ──→ State ──→ View
//!    ↑                           │
//!    └───────────────────────────┘
//! ```
//!
//! - **State**: immutable snapshot of what the view should render
//! - **Intent**: discrete user action, the only way to trigger a change
//! - **Store**: routes intents, runs async work, publishes new states
//!
//! One-shot signals (navigation) travel outside the state cycle through
//! the conflated channel in [`events`]: unlike a state cell, a consumed
//! event is never replayed.

pub mod events;
mod intent;
mod state;

pub use intent::Intent;
pub use state::UiState;
