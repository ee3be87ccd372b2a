//! Support for creating Atom feeds from the site's article listings.

use std::io::Write;

use atom_syndication::{Entry, Error as AtomError, Feed, Link, Person};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, Offset, TimeZone, Utc};
use url::Url;

use crate::site::Listing;

/// Bundled configuration for creating a feed.
pub struct FeedConfig<'a> {
    pub title: &'a str,

    /// The public URL of the site directory. Entry URLs are joined onto it.
    pub site_url: &'a Url,

    /// The feed's `updated` date.
    pub updated: NaiveDate,
}

/// Creates a feed from a [`FeedConfig`] and a list of [`Listing`]s and
/// writes the result to a [`std::io::Write`]. Listings without a date are
/// left out since Atom entries require one.
pub fn write_feed<W: Write>(config: &FeedConfig, listings: &[Listing], w: W) -> Result<()> {
    feed(config, listings)?.write_to(w)?;
    Ok(())
}

fn feed(config: &FeedConfig, listings: &[Listing]) -> Result<Feed> {
    let mut feed = Feed::default();
    feed.set_title(config.title.to_owned());
    feed.set_id(config.site_url.to_string());
    feed.set_updated(midnight(config.updated));
    feed.set_authors(vec![author(config.title)]);
    feed.set_links(vec![link(config.site_url.to_string())]);
    feed.set_entries(entries(config, listings)?);
    Ok(feed)
}

fn entries(config: &FeedConfig, listings: &[Listing]) -> Result<Vec<Entry>> {
    let mut entries = Vec::with_capacity(listings.len());
    for listing in listings {
        let date = match NaiveDate::parse_from_str(&listing.date, "%Y-%m-%d") {
            Ok(date) => midnight(date),
            Err(_) => continue,
        };
        let url = config.site_url.join(&listing.file_name)?;

        let mut entry = Entry::default();
        entry.set_id(url.to_string());
        entry.set_title(listing.plain_title());
        entry.set_updated(date);
        entry.set_published(Some(date));
        entry.set_links(vec![link(url.to_string())]);
        entries.push(entry);
    }
    Ok(entries)
}

fn link(href: String) -> Link {
    let mut link = Link::default();
    link.set_href(href);
    link.set_rel("alternate".to_owned());
    link
}

fn author(name: &str) -> Person {
    let mut person = Person::default();
    person.set_name(name.to_owned());
    person
}

// Atom wants full timestamps; article dates are read as UTC midnight.
fn midnight(date: NaiveDate) -> DateTime<FixedOffset> {
    Utc.fix().from_utc_datetime(&date.and_time(NaiveTime::MIN))
}

type Result<T> = std::result::Result<T, Error>;

/// Represents a problem creating a feed.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when there is a generic I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Returned when there is an Atom-related error.
    #[error(transparent)]
    Atom(#[from] AtomError),

    /// Returned when an entry URL can't be built from the site URL.
    #[error("building entry URL: {0}")]
    Url(#[from] url::ParseError),
}
