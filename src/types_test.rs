use super::*;

fn sample_post_json() -> serde_json::Value {
    serde_json::json!({
        "id": 7,
        "author": 3,
        "author_name": "Ada Lovelace",
        "author_photo": "http://127.0.0.1:8000/media/profile_photos/ada.png",
        "content": "First post!",
        "image": null,
        "image_url": null,
        "created_at": "2025-06-01T09:30:00Z",
        "created_at_formatted": "June 01, 2025 at 03:00 PM IST",
        "likes_count": 5,
        "is_liked": false,
        "comments": [
            {
                "id": 11,
                "author": 4,
                "author_name": "Grace Hopper",
                "author_photo": null,
                "content": "Welcome!",
                "created_at": "2025-06-01T10:00:00Z",
                "created_at_formatted": "June 01, 2025 at 03:30 PM IST"
            }
        ],
        "comments_count": 1
    })
}

// =============================================================================
// Post
// =============================================================================

#[test]
fn post_deserializes_backend_payload() {
    let post: Post = serde_json::from_value(sample_post_json()).unwrap();
    assert_eq!(post.id, 7);
    assert_eq!(post.author, 3);
    assert_eq!(post.author_name, "Ada Lovelace");
    assert_eq!(post.likes_count, 5);
    assert!(!post.is_liked);
    assert_eq!(post.comments.len(), 1);
    assert_eq!(post.comments_count, 1);
    assert_eq!(post.comments[0].content, "Welcome!");
}

#[test]
fn post_tolerates_missing_optional_fields() {
    let payload = serde_json::json!({
        "id": 1,
        "author": 2,
        "author_name": "Ada Lovelace",
        "content": "bare minimum",
        "created_at": "2025-06-01T09:30:00Z",
        "likes_count": 0,
        "is_liked": false,
        "comments_count": 0
    });
    let post: Post = serde_json::from_value(payload).unwrap();
    assert!(post.author_photo.is_none());
    assert!(post.image.is_none());
    assert!(post.image_url.is_none());
    assert!(post.created_at_formatted.is_none());
    assert!(post.comments.is_empty());
}

// =============================================================================
// AuthResponse
// =============================================================================

#[test]
fn auth_response_deserializes() {
    let payload = serde_json::json!({
        "access_token": "acc",
        "refresh_token": "ref",
        "user": {
            "id": 3,
            "username": "ada",
            "email": "ada@example.com",
            "first_name": "Ada",
            "last_name": "Lovelace"
        }
    });
    let resp: AuthResponse = serde_json::from_value(payload).unwrap();
    assert_eq!(resp.access_token, "acc");
    assert_eq!(resp.refresh_token, "ref");
    assert_eq!(resp.user.username, "ada");
    assert!(resp.user.profile_photo.is_none());
    assert!(resp.user.bio.is_none());
}

// =============================================================================
// UserProfile
// =============================================================================

#[test]
fn user_profile_round_trips() {
    let user = UserProfile {
        id: 9,
        username: "grace".to_owned(),
        email: "grace@example.com".to_owned(),
        first_name: "Grace".to_owned(),
        last_name: "Hopper".to_owned(),
        profile_photo: Some("http://example.com/p.png".to_owned()),
        bio: Some("Rear admiral.".to_owned()),
    };
    let json = serde_json::to_string(&user).unwrap();
    let restored: UserProfile = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, user);
}

// =============================================================================
// Response envelopes
// =============================================================================

#[test]
fn like_response_carries_full_post() {
    let payload = serde_json::json!({
        "message": "Post liked successfully",
        "post": sample_post_json()
    });
    let resp: LikeResponse = serde_json::from_value(payload).unwrap();
    assert_eq!(resp.message, "Post liked successfully");
    assert_eq!(resp.post.id, 7);
}

#[test]
fn comment_response_carries_comment() {
    let payload = serde_json::json!({
        "message": "Comment added successfully",
        "comment": {
            "id": 12,
            "author": 3,
            "author_name": "Ada Lovelace",
            "content": "Thanks!",
            "created_at": "2025-06-01T11:00:00Z"
        }
    });
    let resp: CommentResponse = serde_json::from_value(payload).unwrap();
    assert_eq!(resp.comment.id, 12);
    assert!(resp.comment.author_photo.is_none());
}

#[test]
fn message_response_deserializes() {
    let resp: MessageResponse =
        serde_json::from_value(serde_json::json!({"message": "Post deleted successfully"})).unwrap();
    assert_eq!(resp.message, "Post deleted successfully");
}

// =============================================================================
// Inputs
// =============================================================================

#[test]
fn login_input_serializes_to_expected_body() {
    let input = LoginInput {
        email: "ada@example.com".to_owned(),
        password: "hunter2".to_owned(),
    };
    let json = serde_json::to_value(&input).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"email": "ada@example.com", "password": "hunter2"})
    );
}

#[test]
fn comment_input_serializes_to_expected_body() {
    let input = CreateCommentInput {
        content: "nice".to_owned(),
    };
    let json = serde_json::to_value(&input).unwrap();
    assert_eq!(json, serde_json::json!({"content": "nice"}));
}
