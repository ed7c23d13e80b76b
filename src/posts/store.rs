//! The orchestration core: intent routing, async loading, state publication.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::watch;

use crate::mvi::events::{self, EventReceiver, EventSender};
use crate::network::PostProvider;
use crate::posts::events::NavigationEvent;
use crate::posts::intent::PostIntent;
use crate::posts::state::{PostListState, PostState};

/// State container for the post listing screen.
///
/// Holds two independent projections of the same screen — the primary
/// tagged-union [`PostState`] and the flat [`PostListState`] — plus a
/// conflated navigation channel. Each dispatched load runs as its own
/// tokio task; two loads racing resolve to whichever finishes last.
/// Nothing cancels or serializes them.
///
/// All state mutation happens through whole-value replacement on watch
/// channels, so a subscriber never observes a partial update.
pub struct PostStore {
    provider: Arc<dyn PostProvider>,
    state_tx: watch::Sender<PostState>,
    list_tx: watch::Sender<PostListState>,
    navigation_tx: EventSender<NavigationEvent>,
    closed: AtomicBool,
}

impl PostStore {
    /// Create a store around a shared provider. The primary state
    /// starts as [`PostState::Loading`], the alternate state as its
    /// default, and the navigation slot empty.
    pub fn new(provider: Arc<dyn PostProvider>) -> Self {
        let (state_tx, _) = watch::channel(PostState::Loading);
        let (list_tx, _) = watch::channel(PostListState::default());
        let (navigation_tx, _) = events::channel();
        Self {
            provider,
            state_tx,
            list_tx,
            navigation_tx,
            closed: AtomicBool::new(false),
        }
    }

    /// Route an intent to its handler.
    ///
    /// Never blocks: intents that perform I/O are scheduled as
    /// independent tokio tasks, so this must be called from within a
    /// runtime. Intents arriving after [`close`](Self::close) are
    /// dropped.
    pub fn dispatch(&self, intent: PostIntent) {
        if self.closed.load(Ordering::SeqCst) {
            tracing::debug!(?intent, "intent dropped after close");
            return;
        }
        match intent {
            PostIntent::LoadPosts => self.load_posts(),
            PostIntent::LoadPostsAlternate => self.load_posts_alternate(),
            PostIntent::NavigateNext => self.navigation_tx.send(NavigationEvent::NavigateNext),
        }
    }

    /// Subscribe to the primary state. The receiver replays the latest
    /// value to each new subscriber.
    pub fn subscribe_state(&self) -> watch::Receiver<PostState> {
        self.state_tx.subscribe()
    }

    /// Subscribe to the alternate state. Independent of the primary
    /// projection; the two are never synchronized with each other.
    pub fn subscribe_list_state(&self) -> watch::Receiver<PostListState> {
        self.list_tx.subscribe()
    }

    /// Obtain the navigation event receiver.
    ///
    /// Events are conflated and consumed at most once overall; attach a
    /// single active receiver at a time. A receiver created after an
    /// event was consumed observes nothing.
    pub fn navigation_events(&self) -> EventReceiver<NavigationEvent> {
        self.navigation_tx.subscribe()
    }

    /// Tear the store down, releasing the provider's resources exactly
    /// once. Safe to call repeatedly; later calls are no-ops. Also runs
    /// on drop.
    pub fn close(&self) {
        if !self.closed.swap(true, Ordering::SeqCst) {
            self.provider.shutdown();
        }
    }

    fn load_posts(&self) {
        let provider = Arc::clone(&self.provider);
        let state_tx = self.state_tx.clone();
        tokio::spawn(async move {
            state_tx.send_replace(PostState::Loading);
            let next = match provider.fetch_posts().await {
                Ok(posts) => PostState::Loaded(posts),
                Err(err) => {
                    tracing::warn!(error = %err, "post load failed");
                    PostState::Failed(err.to_string())
                }
            };
            state_tx.send_replace(next);
        });
    }

    fn load_posts_alternate(&self) {
        let provider = Arc::clone(&self.provider);
        let list_tx = self.list_tx.clone();
        tokio::spawn(async move {
            list_tx.send_modify(|state| {
                state.is_loading = true;
                state.error = None;
            });
            match provider.fetch_posts().await {
                Ok(posts) => list_tx.send_modify(|state| {
                    state.is_loading = false;
                    state.posts = posts;
                }),
                Err(err) => {
                    tracing::warn!(error = %err, "alternate post load failed");
                    // Prior posts stay in place; only the flags change.
                    list_tx.send_modify(|state| {
                        state.is_loading = false;
                        state.error = Some(err.to_string());
                    })
                }
            }
        });
    }
}

impl Drop for PostStore {
    fn drop(&mut self) {
        self.close();
    }
}
