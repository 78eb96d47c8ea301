use reqwest::Client;

use crate::config::PostsConfig;
use crate::model::Post;

use super::error::ApiError;
use super::http::{endpoint_url, ensure_success, read_json};

const POSTS_PATH: &str = "/posts";

/// Typed accessor for `GET /posts`. No authentication.
#[derive(Clone)]
pub struct PostsClient {
    client: Client,
    config: PostsConfig,
}

impl PostsClient {
    pub fn new(client: Client, config: PostsConfig) -> Self {
        Self { client, config }
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub async fn get_posts(&self) -> Result<Vec<Post>, ApiError> {
        let url = endpoint_url(&self.config.base_url, POSTS_PATH);
        tracing::debug!(url = %url, "Fetching posts");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::transport(format!("GET {}", POSTS_PATH), e))?;

        let response = ensure_success(response).await?;
        let posts: Vec<Post> = read_json(response, POSTS_PATH).await?;

        tracing::debug!(count = posts.len(), "Posts received");
        Ok(posts)
    }
}
