//! Selects the posts belonging to a named category. A category is nothing
//! more than a caller-supplied label matched against post tags; the label
//! set lives in configuration ([`crate::config::SiteConfig::categories`]),
//! never in types. This module owns the single normalization rule for tag
//! matching, so call sites cannot drift apart in their case handling.

use crate::index::PostIndex;
use crate::post::Post;

// Matching is equality-after-folding: `insight`, `Insight`, and `INSIGHT`
// name the same category, while `Insights` does not.
fn fold(label: &str) -> String {
    label.to_lowercase()
}

/// A named, bounded selection of posts: one curated block of a page.
/// `posts` may be empty; the presentation layer renders an explicit "no
/// content yet" affordance rather than dropping the section.
pub struct Section<'a> {
    pub label: String,
    pub posts: Vec<&'a Post>,
}

/// Answers category queries against a [`PostIndex`].
pub struct Curator<'a> {
    index: &'a PostIndex,
}

impl<'a> Curator<'a> {
    pub fn new(index: &'a PostIndex) -> Curator<'a> {
        Curator { index }
    }

    /// Returns the most recent posts carrying a tag equal to `label` after
    /// case folding, at most `limit` of them, skipping the post whose slug
    /// is `exclude` when one is given (so a post's own sidebar never
    /// recommends itself). Whole-label equality only; substring and prefix
    /// matches do not count.
    ///
    /// The result order is inherited from the index: this function filters
    /// and truncates but never re-sorts, so tie-break behavior cannot vary
    /// between call sites. A `limit` of zero and a label matching nothing
    /// both produce an empty result; neither is an error.
    pub fn select(&self, label: &str, exclude: Option<&str>, limit: usize) -> Vec<&'a Post> {
        let label = fold(label);
        self.index
            .all()
            .iter()
            .filter(|post| post.tags.iter().any(|tag| fold(tag) == label))
            .filter(|post| exclude.map_or(true, |slug| post.slug != slug))
            .take(limit)
            .collect()
    }

    /// Like [`Curator::select`], but keeps the label with the result.
    pub fn section(&self, label: &str, exclude: Option<&str>, limit: usize) -> Section<'a> {
        Section {
            label: label.to_owned(),
            posts: self.select(label, exclude, limit),
        }
    }

    /// Builds one [`Section`] per label, preserving the caller's label
    /// order. Labels with no matching posts still yield their (empty)
    /// section.
    pub fn sections(
        &self,
        labels: &[String],
        exclude: Option<&str>,
        limit: usize,
    ) -> Vec<Section<'a>> {
        labels
            .iter()
            .map(|label| self.section(label, exclude, limit))
            .collect()
    }
}
