use crate::ui::mvi::Reducer;
use crate::ui::posts::intent::PostListIntent;
use crate::ui::posts::state::PostListState;

pub struct PostListReducer;

impl Reducer for PostListReducer {
    type State = PostListState;
    type Intent = PostListIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PostListIntent::FetchStarted => PostListState {
                is_loading: true,
                error: None,
                ..state
            },
            PostListIntent::FetchSucceeded { posts } => PostListState {
                posts,
                is_loading: false,
                error: None,
            },
            // Keep whatever was loaded before; only the error changes.
            PostListIntent::FetchFailed { message } => PostListState {
                is_loading: false,
                error: Some(message),
                ..state
            },
        }
    }
}
