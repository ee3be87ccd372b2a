//! The library code for the `sitemill` content generator. A run is broken
//! down into two steps:
//!
//! 1. Generating articles ([`crate::generate`]): the keyword pool is loaded
//!    from its CSV store ([`crate::store`]), grown from a fixed catalog when
//!    it is too small ([`crate::pool`]), and the day's records are picked
//!    with a date-seeded generator ([`crate::select`]). Each record is
//!    rendered into an HTML article ([`crate::article`]) and written to the
//!    posts directory.
//! 2. Building the site ([`crate::site`]): the articles are copied into the
//!    output directory next to the stylesheet ([`crate::assets`]), and the
//!    index page and the Atom feed ([`crate::feed`]) are generated from them.
//!
//! Both steps are driven by a [`crate::config::Config`], normally loaded from
//! a `sitemill.yaml` project file.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]

pub mod article;
pub mod assets;
pub mod catalog;
pub mod config;
pub mod feed;
pub mod generate;
pub mod keyword;
pub mod pool;
pub mod select;
pub mod site;
pub mod slug;
pub mod store;
pub mod templates;
