//! Content service: CRUD over posts, comments, and likes.
//!
//! Every call goes through the shared request layer, which attaches the
//! current bearer credential before dispatch. There is no client-side
//! caching, dedup, or request coalescing; callers apply responses to their
//! local feed with the [`feed`](crate::feed) helpers.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use std::sync::Arc;

use reqwest::multipart::{Form, Part};

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::http::Api;
use crate::session::SessionStore;
use crate::types::{
    CommentResponse, CreateCommentInput, CreatePostInput, LikeResponse, MessageResponse, Post,
};

const LIST_FALLBACK: &str = "Failed to load posts.";
const CREATE_FALLBACK: &str = "Failed to create post. Please try again.";
const DELETE_POST_FALLBACK: &str = "Failed to delete post.";
const LIKE_FALLBACK: &str = "Failed to update like.";
const ADD_COMMENT_FALLBACK: &str = "Failed to add comment.";
const DELETE_COMMENT_FALLBACK: &str = "Failed to delete comment.";

fn user_posts_endpoint(user_id: i64) -> String {
    format!("/posts/user/{user_id}/")
}

fn delete_post_endpoint(post_id: i64) -> String {
    format!("/posts/{post_id}/delete/")
}

fn like_post_endpoint(post_id: i64) -> String {
    format!("/posts/{post_id}/like/")
}

fn add_comment_endpoint(post_id: i64) -> String {
    format!("/posts/{post_id}/comment/")
}

fn delete_comment_endpoint(comment_id: i64) -> String {
    format!("/comments/{comment_id}/delete/")
}

/// CRUD operations over posts, comments, and likes.
pub struct ContentService {
    api: Api,
}

impl ContentService {
    #[must_use]
    pub fn new(config: ApiConfig, store: Arc<SessionStore>) -> Self {
        Self {
            api: Api::new(config, store),
        }
    }

    /// Fetch the global feed, newest first.
    ///
    /// # Errors
    ///
    /// Propagates backend rejections and transport failures.
    pub async fn list_posts(&self) -> Result<Vec<Post>, ApiError> {
        self.api.get("/posts/", LIST_FALLBACK).await
    }

    /// Fetch all posts by one user.
    ///
    /// # Errors
    ///
    /// Propagates backend rejections and transport failures.
    pub async fn list_user_posts(&self, user_id: i64) -> Result<Vec<Post>, ApiError> {
        self.api
            .get(&user_posts_endpoint(user_id), LIST_FALLBACK)
            .await
    }

    /// Create a post, multipart-encoded when an image is attached.
    ///
    /// # Errors
    ///
    /// Propagates backend rejections and transport failures.
    pub async fn create_post(&self, input: CreatePostInput) -> Result<Post, ApiError> {
        let mut form = Form::new().text("content", input.content);
        if let Some(image) = input.image {
            form = form.part("image", Part::bytes(image.bytes).file_name(image.file_name));
        }
        self.api
            .post_multipart("/posts/create/", form, CREATE_FALLBACK)
            .await
    }

    /// Delete a post. The backend enforces author-only deletion.
    ///
    /// # Errors
    ///
    /// Propagates backend rejections and transport failures.
    pub async fn delete_post(&self, post_id: i64) -> Result<MessageResponse, ApiError> {
        self.api
            .delete(&delete_post_endpoint(post_id), DELETE_POST_FALLBACK)
            .await
    }

    /// Toggle the requesting user's like on a post. Like vs unlike is
    /// decided server-side; the response's `post` carries the new state.
    ///
    /// # Errors
    ///
    /// Propagates backend rejections and transport failures.
    pub async fn like_post(&self, post_id: i64) -> Result<LikeResponse, ApiError> {
        self.api
            .post_json(&like_post_endpoint(post_id), &serde_json::json!({}), LIKE_FALLBACK)
            .await
    }

    /// Add a comment to a post.
    ///
    /// # Errors
    ///
    /// Propagates backend rejections and transport failures.
    pub async fn add_comment(
        &self,
        post_id: i64,
        input: CreateCommentInput,
    ) -> Result<CommentResponse, ApiError> {
        self.api
            .post_json(&add_comment_endpoint(post_id), &input, ADD_COMMENT_FALLBACK)
            .await
    }

    /// Delete a comment. The backend enforces author-only deletion.
    ///
    /// # Errors
    ///
    /// Propagates backend rejections and transport failures.
    pub async fn delete_comment(&self, comment_id: i64) -> Result<MessageResponse, ApiError> {
        self.api
            .delete(
                &delete_comment_endpoint(comment_id),
                DELETE_COMMENT_FALLBACK,
            )
            .await
    }
}
