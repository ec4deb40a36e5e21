// Pure steps of the post pipeline: merge, dedupe, pin, order, truncate.

use std::collections::HashSet;

use crate::domain::{normalize_title, PinnedArticle, Post};

/// Newest first. Stable, so equal dates keep their concatenation order.
pub fn sort_by_date_desc(posts: &mut [Post]) {
    posts.sort_by(|a, b| b.date.cmp(&a.date));
}

/// Keep the first post for each normalized title, in the current order.
pub fn dedupe_by_title(posts: Vec<Post>) -> Vec<Post> {
    let mut seen = HashSet::new();
    posts
        .into_iter()
        .filter(|post| seen.insert(normalize_title(&post.title)))
        .collect()
}

pub fn mark_pinned(posts: &mut [Post], pinned: &[PinnedArticle]) {
    for post in posts.iter_mut() {
        post.pinned = pinned.iter().any(|p| p.matches(post));
    }
}

/// Pinned posts first, each partition newest first.
pub fn order_pinned_first(posts: &mut [Post]) {
    posts.sort_by(|a, b| {
        b.pinned
            .cmp(&a.pinned)
            .then_with(|| b.date.cmp(&a.date))
    });
}

/// Run the whole pipeline over one batch per source, in source order.
pub fn aggregate(batches: Vec<Vec<Post>>, pinned: &[PinnedArticle], max_posts: usize) -> Vec<Post> {
    let mut posts: Vec<Post> = batches.into_iter().flatten().collect();
    sort_by_date_desc(&mut posts);

    let mut posts = dedupe_by_title(posts);
    mark_pinned(&mut posts, pinned);
    order_pinned_first(&mut posts);

    posts.truncate(max_posts);
    posts
}
