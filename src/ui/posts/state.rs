//! State for the post-list screen.

use crate::model::Post;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PostListState {
    pub posts: Vec<Post>,
    pub is_loading: bool,
    /// User-facing message from the last failed fetch.
    pub error: Option<String>,
}

impl UiState for PostListState {}

impl PostListState {
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}
