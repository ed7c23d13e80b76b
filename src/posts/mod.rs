//! Post listing feature: intents, state models, navigation, and the store.

mod events;
mod intent;
mod state;
mod store;

pub use events::{Destination, NavigationEvent};
pub use intent::PostIntent;
pub use state::{PostListState, PostState};
pub use store::PostStore;
