use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::Instrument;
use uuid::Uuid;

use crate::api::PostsClient;
use crate::scope::ViewModelScope;
use crate::ui::mvi::Store;
use crate::ui::posts::intent::PostListIntent;
use crate::ui::posts::reducer::PostListReducer;
use crate::ui::posts::state::PostListState;

/// State holder for the post-list screen.
///
/// Dropping the view-model cancels a fetch that is still in flight.
pub struct PostListViewModel {
    store: Store<PostListReducer>,
    client: PostsClient,
    scope: ViewModelScope,
}

impl PostListViewModel {
    pub fn new(client: PostsClient) -> Self {
        Self {
            store: Store::default(),
            client,
            scope: ViewModelScope::new(),
        }
    }

    pub fn state(&self) -> PostListState {
        self.store.state()
    }

    pub fn subscribe(&self) -> watch::Receiver<PostListState> {
        self.store.subscribe()
    }

    /// Load the post list.
    ///
    /// Returns `None` without touching state if a fetch is already in
    /// flight. Otherwise returns the handle of the spawned request.
    pub fn fetch(&self) -> Option<JoinHandle<()>> {
        if self
            .store
            .dispatch_if(|state| !state.is_loading, PostListIntent::FetchStarted)
            .is_none()
        {
            tracing::debug!("Fetch ignored: request already in flight");
            return None;
        }

        let store = self.store.clone();
        let scope = self.scope.handle();
        let client = self.client.clone();
        let span = tracing::debug_span!("fetch_posts", request_id = %Uuid::new_v4());

        Some(self.scope.launch(
            async move {
                let intent = match client.get_posts().await {
                    Ok(posts) => PostListIntent::FetchSucceeded { posts },
                    Err(err) => {
                        tracing::warn!(error = %err, "Post fetch failed");
                        PostListIntent::FetchFailed {
                            message: err.user_message(),
                        }
                    }
                };
                scope.unless_cancelled(|| store.dispatch(intent));
            }
            .instrument(span),
        ))
    }
}
