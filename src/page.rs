//! Slices an ordered list into fixed-size pages and computes the navigation
//! metadata for page-boundary links. Pagination is independent of what is
//! being paged; [`paginate`] works over any ordered slice. Nothing is
//! retained between calls: each invocation is independent and idempotent.

use std::fmt;

/// One page of results plus its navigation metadata.
#[derive(Debug)]
pub struct Page<'a, T> {
    /// The items on this page, in input order.
    pub items: &'a [T],

    /// Where this page sits in the overall listing.
    pub nav: PaginationState,
}

/// Derived navigation state for one page of a listing. Never persisted;
/// recomputed on every call.
#[derive(Clone, Debug, PartialEq)]
pub struct PaginationState {
    /// The current page number, 1-based.
    pub current_page: usize,

    /// The total number of pages, at least 1 even for an empty listing: an
    /// empty first page is a valid state, not an error.
    pub total_pages: usize,

    /// The base path links are constructed from, e.g. `/blog`.
    pub base_path: String,
}

impl PaginationState {
    /// The target of the "previous" link, if any; the first page has no
    /// previous page. A previous link *to* the first page targets the bare
    /// base path: the first page of a listing carries no page suffix, while
    /// every later page lives at `{base_path}/page/{n}`. That asymmetry is
    /// a deliberate, user-visible URL convention.
    pub fn prev(&self) -> Option<String> {
        match self.current_page {
            0 | 1 => None,
            2 => Some(self.base_path.clone()),
            n => Some(format!("{}/page/{}", self.base_path, n - 1)),
        }
    }

    /// The target of the "next" link, if any. Always page-suffixed, since
    /// page 1 is never a "next" target.
    pub fn next(&self) -> Option<String> {
        match self.current_page < self.total_pages {
            false => None,
            true => Some(format!("{}/page/{}", self.base_path, self.current_page + 1)),
        }
    }
}

/// Slices `items` into pages of `page_size` and returns page `current_page`
/// (1-based) along with its navigation state.
///
/// `current_page` must already lie within `[1, total_pages]`. A route
/// parameter outside that range is the caller's contract violation and
/// comes back as [`Error::OutOfRange`] rather than being silently clamped;
/// the presentation layer typically surfaces it as a not-found page. A zero
/// `page_size` is rejected as [`Error::InvalidLimit`]. Empty `items` are
/// valid and yield a single empty page.
pub fn paginate<'a, T>(
    items: &'a [T],
    page_size: usize,
    current_page: usize,
    base_path: &str,
) -> Result<Page<'a, T>> {
    if page_size == 0 {
        return Err(Error::InvalidLimit { limit: page_size });
    }

    let total_pages = match items.len() % page_size {
        0 => (items.len() / page_size).max(1),
        _ => items.len() / page_size + 1,
    };

    if current_page < 1 || current_page > total_pages {
        return Err(Error::OutOfRange {
            page: current_page,
            total_pages,
        });
    }

    let start = (current_page - 1) * page_size;
    let stop = (start + page_size).min(items.len());

    Ok(Page {
        items: &items[start..stop],
        nav: PaginationState {
            current_page,
            total_pages,
            base_path: base_path.to_owned(),
        },
    })
}

/// The result of a pagination operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents a caller contract violation in a pagination operation. These
/// are the only failures; every other input shape (empty lists, short final
/// pages) is a valid, representable state.
#[derive(Debug, PartialEq)]
pub enum Error {
    /// Returned when the requested page falls outside `[1, total_pages]`.
    /// Callers are expected to validate route parameters upstream.
    OutOfRange { page: usize, total_pages: usize },

    /// Returned when the page-size bound is not positive.
    InvalidLimit { limit: usize },
}

impl fmt::Display for Error {
    /// Implements [`fmt::Display`] for [`Error`].
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::OutOfRange { page, total_pages } => {
                write!(f, "Page {} is out of range (1..={})", page, total_pages)
            }
            Error::InvalidLimit { limit } => {
                write!(f, "Page size must be positive (got {})", limit)
            }
        }
    }
}

impl std::error::Error for Error {
    /// Implements [`std::error::Error`] for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}
