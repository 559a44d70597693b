//! Client-side feed reconciliation applied after successful responses.
//!
//! DESIGN
//! ======
//! The backend response is the source of truth: each helper splices the
//! returned entity into the local list wholesale, last-response-applied-wins.
//! There is no optimistic update and no merge — a like toggle replaces the
//! whole post with whatever the backend returned.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use crate::types::{Comment, Post};

/// Replace the post with the same id by `updated`. A post the list does not
/// hold is ignored (it may have been removed by a concurrent delete).
pub fn replace_post(posts: &mut [Post], updated: Post) {
    if let Some(slot) = posts.iter_mut().find(|post| post.id == updated.id) {
        *slot = updated;
    }
}

/// Remove the post with the given id, if present.
pub fn remove_post(posts: &mut Vec<Post>, post_id: i64) {
    posts.retain(|post| post.id != post_id);
}

/// Insert a freshly created post at the top of the feed.
pub fn prepend_post(posts: &mut Vec<Post>, post: Post) {
    posts.insert(0, post);
}

/// Append a newly created comment and set `comments_count` to the new list
/// length.
pub fn apply_comment_added(post: &mut Post, comment: Comment) {
    post.comments.push(comment);
    post.comments_count = i64::try_from(post.comments.len()).unwrap_or(i64::MAX);
}

/// Remove the comment with the given id and recompute `comments_count`.
pub fn apply_comment_removed(post: &mut Post, comment_id: i64) {
    post.comments.retain(|comment| comment.id != comment_id);
    post.comments_count = i64::try_from(post.comments.len()).unwrap_or(i64::MAX);
}
