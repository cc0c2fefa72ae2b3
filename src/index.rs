//! Defines [`PostIndex`], the authoritative recency-ordered view of the post
//! collection. Every other component queries this view instead of sorting
//! for itself; building the index is the only place ordering is decided.

use crate::post::Post;

/// An immutable, recency-ordered view over the full post collection. Built
/// once per render pass and discarded at its end. There are no update or
/// delete operations; when the source records change, a new index is built
/// wholesale.
pub struct PostIndex {
    posts: Vec<Post>,
}

impl PostIndex {
    /// Builds an index from an unordered collection. Posts are ordered by
    /// publish date, newest first; posts sharing a date are ordered by slug,
    /// ascending, so equal-date orderings are deterministic across call
    /// sites. An empty collection is valid and yields an empty index.
    pub fn build(mut posts: Vec<Post>) -> PostIndex {
        posts.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.slug.cmp(&b.slug)));
        PostIndex { posts }
    }

    /// Returns the full ordered sequence, newest first.
    pub fn all(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Looks up a post by slug.
    pub fn get(&self, slug: &str) -> Option<&Post> {
        self.posts.iter().find(|post| post.slug == slug)
    }

    /// Returns the posts adjacent to `slug` in index order as
    /// `(newer, older)`. Either side is `None` at the ends of the
    /// collection; both are `None` for an unknown slug.
    pub fn neighbors(&self, slug: &str) -> (Option<&Post>, Option<&Post>) {
        match self.posts.iter().position(|post| post.slug == slug) {
            None => (None, None),
            Some(i) => (
                match i < 1 {
                    true => None,
                    false => Some(&self.posts[i - 1]),
                },
                self.posts.get(i + 1),
            ),
        }
    }
}
