//! Wire DTOs exchanged with the REST backend.
//!
//! DESIGN
//! ======
//! These types mirror the backend serializers field-for-field so serde
//! round-trips stay lossless. Everything is a value-like record; the only
//! ownership relation is "a post contains its comments". Fields the backend
//! may omit carry `#[serde(default)]` so older payloads still decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The authenticated user's profile, as returned inside auth responses and
/// by profile updates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Backend-assigned user identifier.
    pub id: i64,
    /// Unique handle derived from the email at registration.
    pub username: String,
    /// Login email address.
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Absolute URL of the profile photo, if one was uploaded.
    #[serde(default)]
    pub profile_photo: Option<String>,
    /// Free-text biography, if set.
    #[serde(default)]
    pub bio: Option<String>,
}

/// A feed post with its embedded comments.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Backend-assigned post identifier.
    pub id: i64,
    /// Author user id.
    pub author: i64,
    /// Author display name (full name, or username when blank).
    pub author_name: String,
    /// Absolute URL of the author's profile photo, if any.
    #[serde(default)]
    pub author_photo: Option<String>,
    /// Post body text.
    pub content: String,
    /// Storage path of the attached image, if any.
    #[serde(default)]
    pub image: Option<String>,
    /// Absolute URL of the attached image, if any.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Creation timestamp as an ISO 8601 string.
    pub created_at: String,
    /// Human-readable creation timestamp rendered by the backend.
    #[serde(default)]
    pub created_at_formatted: Option<String>,
    /// Current number of likes.
    pub likes_count: i64,
    /// Whether the requesting user has liked this post. Always `false` for
    /// unauthenticated reads.
    pub is_liked: bool,
    /// Comments on this post, oldest first.
    #[serde(default)]
    pub comments: Vec<Comment>,
    /// Comment count as reported by the backend.
    pub comments_count: i64,
}

/// A comment owned by its parent post.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// Backend-assigned comment identifier.
    pub id: i64,
    /// Author user id.
    pub author: i64,
    /// Author display name.
    pub author_name: String,
    /// Absolute URL of the author's profile photo, if any.
    #[serde(default)]
    pub author_photo: Option<String>,
    /// Comment body text.
    pub content: String,
    /// Creation timestamp as an ISO 8601 string.
    pub created_at: String,
    /// Human-readable creation timestamp rendered by the backend.
    #[serde(default)]
    pub created_at_formatted: Option<String>,
}

/// Token pair plus profile returned by `/auth/register/` and `/auth/login/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Short-lived credential attached to authenticated requests.
    pub access_token: String,
    /// Longer-lived credential exchanged for new access tokens.
    pub refresh_token: String,
    /// Profile of the authenticated user.
    pub user: UserProfile,
}

/// New token pair returned by `/auth/refresh/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Plain acknowledgement envelope (`{"message": ...}`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Like-toggle response: acknowledgement plus the post's new state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LikeResponse {
    pub message: String,
    /// The full post after the toggle; replaces the local copy wholesale.
    pub post: Post,
}

/// Add-comment response: acknowledgement plus the created comment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CommentResponse {
    pub message: String,
    pub comment: Comment,
}

/// A file to attach to a multipart request (profile photo or post image).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileAttachment {
    /// File name reported to the backend (drives its content-type sniffing).
    pub file_name: String,
    /// Raw file bytes.
    pub bytes: Vec<u8>,
}

/// Input for `register`.
#[derive(Clone, Debug)]
pub struct RegisterInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub profile_photo: Option<FileAttachment>,
}

/// Input for `login`.
#[derive(Clone, Debug, Serialize)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Input for `create_post`.
#[derive(Clone, Debug)]
pub struct CreatePostInput {
    pub content: String,
    pub image: Option<FileAttachment>,
}

/// Input for `add_comment`.
#[derive(Clone, Debug, Serialize)]
pub struct CreateCommentInput {
    pub content: String,
}

/// Input for `update_profile`. `None` fields are left unchanged.
#[derive(Clone, Debug, Default)]
pub struct ProfileUpdateInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub profile_photo: Option<FileAttachment>,
}
