//! Composes the curation and pagination components into the concrete views
//! the site renders: the home page, the single-post page, and the
//! chronological and per-tag listings. Each view is a pure function of the
//! index and the configuration; the presentation layer only formats what it
//! is handed, including the empty states.

use crate::config::SiteConfig;
use crate::curate::{Curator, Section};
use crate::index::PostIndex;
use crate::page::{paginate, PaginationState, Result};
use crate::post::Post;

/// The display title of the unfiltered chronological listing.
const LISTING_TITLE: &str = "All Posts";

/// The home page: the newest posts plus one curated section per configured
/// category, in configured order.
pub struct HomePage<'a> {
    pub latest: Vec<&'a Post>,
    pub sections: Vec<Section<'a>>,
}

/// A single post's page: the post itself, its neighbors in recency order,
/// and the sidebar sections, which never recommend the post itself.
pub struct PostView<'a> {
    pub post: &'a Post,

    /// The next-newer post, if any.
    pub prev: Option<&'a Post>,

    /// The next-older post, if any.
    pub next: Option<&'a Post>,

    pub sidebar: Vec<Section<'a>>,
}

/// One page of a (possibly tag-filtered) chronological listing.
#[derive(Debug)]
pub struct Listing<'a> {
    /// The listing's display title: the tag label for tag listings,
    /// [`LISTING_TITLE`] otherwise.
    pub title: String,

    pub items: Vec<&'a Post>,

    pub nav: PaginationState,
}

pub fn home<'a>(index: &'a PostIndex, config: &SiteConfig) -> HomePage<'a> {
    HomePage {
        latest: index.all().iter().take(config.latest_limit).collect(),
        sections: Curator::new(index).sections(&config.categories, None, config.section_limit),
    }
}

/// Returns `None` for an unknown slug; the caller renders its not-found
/// page.
pub fn post_view<'a>(
    index: &'a PostIndex,
    config: &SiteConfig,
    slug: &str,
) -> Option<PostView<'a>> {
    let post = index.get(slug)?;
    let (prev, next) = index.neighbors(slug);
    Some(PostView {
        post,
        prev,
        next,
        sidebar: Curator::new(index).sections(&config.categories, Some(slug), config.sidebar_limit),
    })
}

pub fn listing<'a>(
    index: &'a PostIndex,
    config: &SiteConfig,
    current_page: usize,
) -> Result<Listing<'a>> {
    let page = paginate(
        index.all(),
        config.page_size,
        current_page,
        &config.listing_path,
    )?;
    Ok(Listing {
        title: LISTING_TITLE.to_owned(),
        items: page.items.iter().collect(),
        nav: page.nav,
    })
}

/// The listing of every post matching `label`, paginated under
/// `{tags_path}/{segment}` where the segment is the slugified label, so
/// `macOS` and `MacOS` land on the same pages.
pub fn tag_listing<'a>(
    index: &'a PostIndex,
    config: &SiteConfig,
    label: &str,
    current_page: usize,
) -> Result<Listing<'a>> {
    let matches = Curator::new(index).select(label, None, index.len());
    let base_path = format!("{}/{}", config.tags_path, slug::slugify(label));
    let page = paginate(&matches, config.page_size, current_page, &base_path)?;
    Ok(Listing {
        title: label.to_owned(),
        items: page.items.to_vec(),
        nav: page.nav,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::page::Error;
    use chrono::NaiveDate;
    use std::path::PathBuf;

    fn config() -> SiteConfig {
        SiteConfig {
            categories: vec![
                "Briefing".to_owned(),
                "Insight".to_owned(),
                "Study".to_owned(),
            ],
            latest_limit: 3,
            section_limit: 5,
            sidebar_limit: 3,
            page_size: 3,
            listing_path: "/blog".to_owned(),
            tags_path: "/tags".to_owned(),
            posts_file: PathBuf::from("posts.yaml"),
        }
    }

    fn post(n: u32, tags: &[&str]) -> Post {
        Post {
            slug: format!("post-{}", n),
            title: format!("Post {}", n),
            date: NaiveDate::from_ymd_opt(2021, 4, n).unwrap(),
            tags: tags.iter().map(|tag| (*tag).to_owned()).collect(),
            path: format!("/blog/post-{}", n),
        }
    }

    // Seven posts, `post-7` the newest. "Insight" on 2, 4, 5, and 7;
    // "Briefing" on the rest; no "Study" posts at all.
    fn seven_posts() -> PostIndex {
        PostIndex::build(
            (1..=7)
                .map(|n| match n {
                    2 | 4 | 5 | 7 => post(n, &["Insight"]),
                    _ => post(n, &["Briefing"]),
                })
                .collect(),
        )
    }

    fn slugs(posts: &[&Post]) -> Vec<String> {
        posts.iter().map(|post| post.slug.clone()).collect()
    }

    #[test]
    fn test_home() {
        let index = seven_posts();
        let home = home(&index, &config());

        assert_eq!(slugs(&home.latest), vec!["post-7", "post-6", "post-5"]);

        let got: Vec<(&str, Vec<String>)> = home
            .sections
            .iter()
            .map(|section| (section.label.as_str(), slugs(&section.posts)))
            .collect();
        assert_eq!(
            got,
            vec![
                (
                    "Briefing",
                    vec!["post-6".to_owned(), "post-3".to_owned(), "post-1".to_owned()]
                ),
                (
                    "Insight",
                    vec![
                        "post-7".to_owned(),
                        "post-5".to_owned(),
                        "post-4".to_owned(),
                        "post-2".to_owned()
                    ]
                ),
                // No Study posts yet; the section is still handed over.
                ("Study", Vec::new()),
            ]
        );
    }

    #[test]
    fn test_home_on_an_empty_index() {
        let index = PostIndex::build(Vec::new());
        let home = home(&index, &config());
        assert!(home.latest.is_empty());
        assert_eq!(home.sections.len(), 3);
        assert!(home.sections.iter().all(|section| section.posts.is_empty()));
    }

    #[test]
    fn test_post_view_sidebar_never_recommends_self() {
        let index = seven_posts();
        let view = post_view(&index, &config(), "post-5").unwrap();

        assert_eq!(view.post.slug, "post-5");
        for section in &view.sidebar {
            assert!(section.posts.iter().all(|post| post.slug != "post-5"));
        }

        let insight = &view.sidebar[1];
        assert_eq!(insight.label, "Insight");
        assert_eq!(
            slugs(&insight.posts),
            vec!["post-7", "post-4", "post-2"]
        );
    }

    #[test]
    fn test_post_view_neighbors() {
        let index = seven_posts();

        let newest = post_view(&index, &config(), "post-7").unwrap();
        assert!(newest.prev.is_none());
        assert_eq!(newest.next.map(|post| post.slug.as_str()), Some("post-6"));

        let oldest = post_view(&index, &config(), "post-1").unwrap();
        assert_eq!(oldest.prev.map(|post| post.slug.as_str()), Some("post-2"));
        assert!(oldest.next.is_none());
    }

    #[test]
    fn test_post_view_unknown_slug() {
        let index = seven_posts();
        assert!(post_view(&index, &config(), "missing").is_none());
    }

    #[test]
    fn test_listing() -> Result<()> {
        let index = seven_posts();

        let first = listing(&index, &config(), 1)?;
        assert_eq!(first.title, "All Posts");
        assert_eq!(slugs(&first.items), vec!["post-7", "post-6", "post-5"]);
        assert_eq!(first.nav.total_pages, 3);
        assert_eq!(first.nav.next(), Some("/blog/page/2".to_owned()));

        let second = listing(&index, &config(), 2)?;
        assert_eq!(second.nav.prev(), Some("/blog".to_owned()));
        Ok(())
    }

    #[test]
    fn test_tag_listing_filters_and_slugifies() -> Result<()> {
        let index = seven_posts();

        let first = tag_listing(&index, &config(), "Insight", 1)?;
        assert_eq!(first.title, "Insight");
        assert_eq!(slugs(&first.items), vec!["post-7", "post-5", "post-4"]);
        assert_eq!(first.nav.total_pages, 2);
        assert_eq!(first.nav.base_path, "/tags/insight");
        assert_eq!(first.nav.next(), Some("/tags/insight/page/2".to_owned()));

        let second = tag_listing(&index, &config(), "insight", 2)?;
        assert_eq!(slugs(&second.items), vec!["post-2"]);
        assert_eq!(second.nav.prev(), Some("/tags/insight".to_owned()));
        Ok(())
    }

    #[test]
    fn test_tag_listing_out_of_range() {
        let index = seven_posts();
        assert_eq!(
            tag_listing(&index, &config(), "Insight", 5).unwrap_err(),
            Error::OutOfRange {
                page: 5,
                total_pages: 2
            }
        );
    }
}
