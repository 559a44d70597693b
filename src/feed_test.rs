use super::*;

fn post(id: i64) -> Post {
    Post {
        id,
        author: 3,
        author_name: "Ada Lovelace".to_owned(),
        author_photo: None,
        content: format!("post {id}"),
        image: None,
        image_url: None,
        created_at: "2025-06-01T09:30:00Z".to_owned(),
        created_at_formatted: None,
        likes_count: 0,
        is_liked: false,
        comments: Vec::new(),
        comments_count: 0,
    }
}

fn comment(id: i64) -> Comment {
    Comment {
        id,
        author: 4,
        author_name: "Grace Hopper".to_owned(),
        author_photo: None,
        content: format!("comment {id}"),
        created_at: "2025-06-01T10:00:00Z".to_owned(),
        created_at_formatted: None,
    }
}

// =============================================================================
// replace_post
// =============================================================================

#[test]
fn replace_post_applies_backend_like_state_exactly() {
    let mut feed = vec![post(1), post(2)];
    feed[1].likes_count = 5;
    feed[1].is_liked = false;

    let mut returned = post(2);
    returned.likes_count = 6;
    returned.is_liked = true;
    replace_post(&mut feed, returned);

    assert_eq!(feed[1].likes_count, 6);
    assert!(feed[1].is_liked);
    assert_eq!(feed[0].likes_count, 0);
}

#[test]
fn replace_post_ignores_unknown_id() {
    let mut feed = vec![post(1)];
    replace_post(&mut feed, post(99));
    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0].id, 1);
}

#[test]
fn replace_post_swaps_wholesale() {
    let mut feed = vec![post(1)];
    feed[0].comments.push(comment(10));
    feed[0].comments_count = 1;

    // Backend response with no comments embedded replaces everything.
    replace_post(&mut feed, post(1));
    assert!(feed[0].comments.is_empty());
    assert_eq!(feed[0].comments_count, 0);
}

// =============================================================================
// remove_post / prepend_post
// =============================================================================

#[test]
fn remove_post_deletes_matching_id() {
    let mut feed = vec![post(1), post(2), post(3)];
    remove_post(&mut feed, 2);
    let ids: Vec<i64> = feed.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn remove_post_with_unknown_id_is_noop() {
    let mut feed = vec![post(1)];
    remove_post(&mut feed, 99);
    assert_eq!(feed.len(), 1);
}

#[test]
fn prepend_post_puts_new_post_first() {
    let mut feed = vec![post(1)];
    prepend_post(&mut feed, post(2));
    let ids: Vec<i64> = feed.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![2, 1]);
}

// =============================================================================
// apply_comment_added / apply_comment_removed
// =============================================================================

#[test]
fn comment_added_appends_and_counts() {
    let mut target = post(1);
    apply_comment_added(&mut target, comment(10));
    apply_comment_added(&mut target, comment(11));
    assert_eq!(target.comments.len(), 2);
    assert_eq!(target.comments_count, 2);
    assert_eq!(target.comments[1].id, 11);
}

#[test]
fn comment_removed_deletes_by_id_and_recounts() {
    let mut target = post(1);
    apply_comment_added(&mut target, comment(10));
    apply_comment_added(&mut target, comment(11));

    apply_comment_removed(&mut target, 10);
    assert_eq!(target.comments.len(), 1);
    assert_eq!(target.comments_count, 1);
    assert_eq!(target.comments[0].id, 11);
}

#[test]
fn comment_removed_with_unknown_id_still_recounts() {
    let mut target = post(1);
    target.comments_count = 99; // stale backend count
    apply_comment_removed(&mut target, 12345);
    assert_eq!(target.comments_count, 0);
}
