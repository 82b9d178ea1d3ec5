use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use spdlog::{debug, error, info};

use crate::api::BlogApi;
use crate::errors::ApiError;
use crate::post::PostRecord;

/// What the feed view shows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedState {
    pub posts: Vec<PostRecord>,
    pub loading: bool,
    pub error: Option<String>,
    /// Generation of the load that last settled this state.
    pub generation: u64,
}

/// Loads the feed and keeps the last good collection around.
///
/// Every load gets a generation number. Only the newest load may settle the state,
/// so a slow response can not overwrite the result of a refresh issued after it.
pub struct FeedLoader {
    api: BlogApi,
    state: Arc<Mutex<FeedState>>,
    latest: AtomicU64,
}

impl FeedLoader {
    pub fn new(api: BlogApi) -> Self {
        FeedLoader {
            api,
            state: Arc::new(Mutex::new(FeedState::default())),
            latest: AtomicU64::new(0),
        }
    }

    pub fn snapshot(&self) -> FeedState {
        self.lock().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.lock().loading
    }

    pub async fn load(&self) -> Result<Vec<PostRecord>, ApiError> {
        let generation = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let mut state = self.lock();
            state.loading = true;
            state.error = None;
        }

        let res = self.api.list_posts().await;

        if generation != self.latest.load(Ordering::SeqCst) {
            debug!("Discarding feed response of generation {}, newer load in flight", generation);
            return res;
        }

        let mut state = self.lock();
        state.loading = false;
        state.generation = generation;
        match res {
            Ok(ref posts) => {
                info!("Loaded {} posts", posts.len());
                state.posts = posts.clone();
            }
            Err(ref e) => {
                error!("Error loading posts: {}", e);
                state.error = Some(e.user_message());
            }
        }

        res
    }

    /// Manual retry. Triggers are not coalesced, the latest one wins.
    pub async fn refresh(&self) -> Result<Vec<PostRecord>, ApiError> {
        self.load().await
    }

    fn lock(&self) -> MutexGuard<'_, FeedState> {
        // State is plain data, a panic elsewhere can not leave it half written
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
