//! The library code for the `hordere` curation engine. The site it serves is
//! a collection of dated, tagged posts rendered through several alternative
//! page layouts, and this crate is the one piece with real invariants behind
//! all of them. The architecture can be broken down into two layers:
//!
//! 1. Leaf components: classifying posts into named categories by tag
//!    membership ([`crate::curate`]) and slicing ordered lists into
//!    fixed-size pages with boundary navigation ([`crate::page`]), both
//!    querying the recency-ordered [`crate::index::PostIndex`].
//! 2. A composition layer ([`crate::site`]) that assembles the leaf
//!    components into the views the presentation layer renders: the home
//!    page, the single-post page, and the chronological and per-tag
//!    listings.
//!
//! Previously every layout re-derived the filter-and-slice logic inline,
//! each with its own case handling and truncation. The point of this crate
//! is that the tag-matching rule, the equal-date tie-break, and the
//! page-boundary URL convention are each decided exactly once.
//!
//! Everything here is a pure function over an immutable index built once per
//! render pass, so concurrent render passes need no coordination.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]

pub mod config;
pub mod curate;
pub mod index;
pub mod page;
pub mod post;
pub mod site;
