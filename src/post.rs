//! Defines the [`Post`] record and the loader for the post records file.
//! Posts arrive fully compiled: the upstream content pipeline has already
//! extracted frontmatter, rendered bodies, and derived routable paths, so
//! this module only deserializes the handoff records for
//! [`crate::index::PostIndex::build`].

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use std::fs::File;
use std::path::Path;

/// A single authored post, as supplied by the content pipeline. Records are
/// immutable once loaded; when the source content changes, the pipeline
/// emits a fresh records file and the whole index is rebuilt from it.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Post {
    /// The post's identifier. Unique within a collection; that invariant is
    /// owned by the pipeline that writes the records file.
    pub slug: String,

    /// The display title. Non-empty; validated upstream.
    pub title: String,

    /// The publish date. Posts are ordered newest-first by this field.
    /// Dates need not be unique.
    pub date: NaiveDate,

    /// Free-text labels. May be empty. Compared case-insensitively by
    /// [`crate::curate`].
    #[serde(default)]
    pub tags: Vec<String>,

    /// The routable location of the rendered post. Derived by the router;
    /// opaque here.
    pub path: String,
}

/// Reads the post records file: a YAML list of records, one per post.
///
/// ```yaml
/// - slug: hello-world
///   title: Hello, world!
///   date: 2021-04-16
///   tags: [greet]
///   path: /blog/hello-world
/// ```
///
/// Records come back in file order; ordering is the index's job.
pub fn read_posts(path: &Path) -> Result<Vec<Post>> {
    let file = File::open(path)
        .with_context(|| format!("Opening posts file `{}`", path.display()))?;
    let posts = serde_yaml::from_reader(file)
        .with_context(|| format!("Reading posts file `{}`", path.display()))?;
    Ok(posts)
}
