//! Shared test utilities: a controllable fake provider and settle helpers.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Once};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use postflow::model::Post;
use postflow::network::{FetchError, PostProvider};
use postflow::posts::{PostListState, PostState};
use tokio::sync::{watch, Notify};
use tokio::time::timeout;

static INIT: Once = Once::new();

/// Route store logs through the test writer once per binary.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub fn post(id: u64, title: &str, body: &str) -> Post {
    Post {
        user_id: 1,
        id,
        title: title.to_string(),
        body: body.to_string(),
    }
}

/// In-memory provider with a scriptable response, call counters, and an
/// optional gate that parks `fetch_posts` until released.
pub struct FakeProvider {
    response: Mutex<Result<Vec<Post>, String>>,
    gate: Mutex<Option<Arc<Notify>>>,
    pub fetch_calls: AtomicUsize,
    pub shutdown_calls: AtomicUsize,
}

impl FakeProvider {
    pub fn with_posts(posts: Vec<Post>) -> Arc<Self> {
        Arc::new(Self {
            response: Mutex::new(Ok(posts)),
            gate: Mutex::new(None),
            fetch_calls: AtomicUsize::new(0),
            shutdown_calls: AtomicUsize::new(0),
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            response: Mutex::new(Err(message.to_string())),
            gate: Mutex::new(None),
            fetch_calls: AtomicUsize::new(0),
            shutdown_calls: AtomicUsize::new(0),
        })
    }

    pub fn set_posts(&self, posts: Vec<Post>) {
        *self.response.lock() = Ok(posts);
    }

    pub fn set_failure(&self, message: &str) {
        *self.response.lock() = Err(message.to_string());
    }

    /// Park subsequent fetches until the returned handle is notified.
    pub fn install_gate(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.gate.lock() = Some(Arc::clone(&gate));
        gate
    }
}

#[async_trait]
impl PostProvider for FakeProvider {
    async fn fetch_posts(&self) -> Result<Vec<Post>, FetchError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        let gate = self.gate.lock().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        self.response.lock().clone().map_err(FetchError::Unavailable)
    }

    fn shutdown(&self) {
        self.shutdown_calls.fetch_add(1, Ordering::SeqCst);
    }
}

/// Wait for the next non-loading primary state after a dispatch.
pub async fn next_settled_state(rx: &mut watch::Receiver<PostState>) -> PostState {
    timeout(Duration::from_secs(1), async {
        loop {
            rx.changed().await.expect("state channel closed");
            let state = rx.borrow_and_update().clone();
            if !state.is_loading() {
                return state;
            }
        }
    })
    .await
    .expect("store did not settle")
}

/// Wait for the next non-loading alternate state after a dispatch.
pub async fn next_settled_list_state(rx: &mut watch::Receiver<PostListState>) -> PostListState {
    timeout(Duration::from_secs(1), async {
        loop {
            rx.changed().await.expect("state channel closed");
            let state = rx.borrow_and_update().clone();
            if !state.is_loading {
                return state;
            }
        }
    })
    .await
    .expect("store did not settle")
}
