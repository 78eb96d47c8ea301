use crate::model::Post;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum PostListIntent {
    FetchStarted,
    FetchSucceeded { posts: Vec<Post> },
    FetchFailed { message: String },
}

impl Intent for PostListIntent {}
