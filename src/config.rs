//! Loads the site's curation configuration from a `hordere.yaml` project
//! file. Everything here is caller-supplied policy: which category labels
//! to curate, how many posts each view shows, and the base paths navigation
//! links are built from. The engine hard-codes none of it, including the
//! category label set.

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::fs::File;
use std::path::{Path, PathBuf};

/// The project file name searched for by [`SiteConfig::from_directory`].
const PROJECT_FILE: &str = "hordere.yaml";

#[derive(Deserialize)]
struct PageSize(usize);
impl Default for PageSize {
    fn default() -> Self {
        PageSize(10)
    }
}

/// The raw shape of the project file, before path resolution.
#[derive(Deserialize)]
struct Project {
    #[serde(default)]
    categories: Vec<String>,

    #[serde(default = "Project::default_latest_limit")]
    latest_limit: usize,

    #[serde(default = "Project::default_section_limit")]
    section_limit: usize,

    #[serde(default = "Project::default_sidebar_limit")]
    sidebar_limit: usize,

    #[serde(default)]
    page_size: PageSize,

    #[serde(default = "Project::default_listing_path")]
    listing_path: String,

    #[serde(default = "Project::default_tags_path")]
    tags_path: String,

    #[serde(default = "Project::default_posts")]
    posts: PathBuf,
}

impl Project {
    fn default_latest_limit() -> usize {
        3
    }

    fn default_section_limit() -> usize {
        5
    }

    fn default_sidebar_limit() -> usize {
        3
    }

    fn default_listing_path() -> String {
        "/blog".to_owned()
    }

    fn default_tags_path() -> String {
        "/tags".to_owned()
    }

    fn default_posts() -> PathBuf {
        PathBuf::from("posts.yaml")
    }
}

/// The caller-supplied curation configuration.
pub struct SiteConfig {
    /// The curated category labels, in display order. May be empty, in
    /// which case the home page and sidebars carry no sections.
    pub categories: Vec<String>,

    /// How many of the newest posts the home page features.
    pub latest_limit: usize,

    /// How many posts each home-page category section holds.
    pub section_limit: usize,

    /// How many posts each sidebar section holds on a post's own page.
    pub sidebar_limit: usize,

    /// How many posts fit on one listing page.
    pub page_size: usize,

    /// The base path of the chronological listing (e.g. `/blog`).
    pub listing_path: String,

    /// The base path under which per-tag listings live (e.g. `/tags`).
    pub tags_path: String,

    /// The post records file, resolved relative to the project file.
    pub posts_file: PathBuf,
}

impl SiteConfig {
    /// Searches `dir` and its parent directories for a `hordere.yaml`
    /// project file and loads the first one found.
    pub fn from_directory(dir: &Path) -> Result<SiteConfig> {
        let path = dir.join(PROJECT_FILE);
        if path.exists() {
            SiteConfig::from_file(&path)
        } else {
            match dir.parent() {
                Some(parent) => SiteConfig::from_directory(parent),
                None => Err(anyhow!(
                    "Could not find `{}` in any parent directory",
                    PROJECT_FILE
                )),
            }
        }
    }

    /// Loads a project file. The post records path is resolved relative to
    /// the project file's own directory.
    pub fn from_file(path: &Path) -> Result<SiteConfig> {
        let file = File::open(path)
            .with_context(|| format!("Opening project file `{}`", path.display()))?;
        let project: Project = serde_yaml::from_reader(file)
            .with_context(|| format!("Reading project file `{}`", path.display()))?;
        match path.parent() {
            None => Err(anyhow!(
                "Can't get parent directory for provided project file path `{}`",
                path.display()
            )),
            Some(project_root) => Ok(SiteConfig {
                categories: project.categories,
                latest_limit: project.latest_limit,
                section_limit: project.section_limit,
                sidebar_limit: project.sidebar_limit,
                page_size: project.page_size.0,
                listing_path: project.listing_path,
                tags_path: project.tags_path,
                posts_file: project_root.join(project.posts),
            }),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_defaults() {
        let project: Project = serde_yaml::from_str("{}").unwrap();
        assert!(project.categories.is_empty());
        assert_eq!(project.latest_limit, 3);
        assert_eq!(project.section_limit, 5);
        assert_eq!(project.sidebar_limit, 3);
        assert_eq!(project.page_size.0, 10);
        assert_eq!(project.listing_path, "/blog");
        assert_eq!(project.tags_path, "/tags");
        assert_eq!(project.posts, PathBuf::from("posts.yaml"));
    }

    #[test]
    fn test_from_file() -> Result<()> {
        let config = SiteConfig::from_file(Path::new("./testdata/hordere.yaml"))?;
        assert_eq!(config.categories, vec!["Briefing", "Insight", "Study"]);
        assert_eq!(config.page_size, 5);
        assert_eq!(config.listing_path, "/blog");
        assert_eq!(config.posts_file, Path::new("./testdata/posts.yaml"));
        Ok(())
    }

    #[test]
    fn test_from_directory_missing_project_file() {
        // `/` has no parent to continue the search from.
        assert!(SiteConfig::from_directory(Path::new("/")).is_err());
    }
}
