//! Assembles the publishable site: copies the generated articles into the
//! output directory, writes the stylesheet, and builds the index page and
//! the Atom feed. See [`build_site`].

use std::collections::HashMap;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use gtmpl::Value;
use regex::Regex;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::assets::{fix_stylesheet_href, STYLE, STYLESHEET};
use crate::config::Config;
use crate::feed::{self, write_feed, FeedConfig};
use crate::slug::HTML_EXTENSION;
use crate::templates::{self, escape, INDEX_TEMPLATE};

/// The index page's file name.
pub const INDEX_FILE: &str = "index.html";

/// The feed's file name.
pub const FEED_FILE: &str = "feed.atom";

/// The card icon used when no rule in [`pick_icon`] matches.
pub const DEFAULT_ICON: &str = "✨";

static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<title>(.*?)</title>").expect("Invalid title regex")
});

static DATE_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4}-\d{2}-\d{2})-").expect("Invalid date prefix regex")
});

// First match wins.
static ICON_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"planner|timetable|schedule|time-?block", "🗂"),
        (r"habit|tracker|checklist", "✅"),
        (r"meditation|sleep|anxiety|focus", "🧘"),
        (r"math|algebra|geometry|probability|formula", "➗"),
        (r"vocab|vocabulary|flashcard|english", "🔤"),
        (r"reading|log|book", "📚"),
        (r"pomodoro", "⏱"),
        (r"minecraft|build|redstone|farm", "🧱"),
        (r"pokemon|card|deck", "🃏"),
    ]
    .into_iter()
    .map(|(pattern, icon)| (Regex::new(pattern).expect("Invalid icon regex"), icon))
    .collect()
});

/// One published article as shown on the index page and in the feed.
#[derive(Clone, Debug, PartialEq)]
pub struct Listing {
    /// The article's file name in the output directory.
    pub file_name: String,

    /// The article's title as HTML text (entities left escaped), taken from
    /// its `<title>` element.
    pub title: String,

    /// `YYYY-MM-DD` from the file-name prefix, or empty.
    pub date: String,

    pub icon: &'static str,
}

impl Listing {
    /// Builds the listing for an article's file name and contents.
    pub fn from_html(file_name: &str, html: &str) -> Listing {
        let title = extract_title(html).unwrap_or_else(|| escape(file_name));
        Listing {
            file_name: file_name.to_owned(),
            icon: pick_icon(&title),
            date: extract_date(file_name).unwrap_or_default(),
            title,
        }
    }

    /// The title with the basic HTML entities decoded, for plain-text
    /// consumers like the feed.
    pub fn plain_title(&self) -> String {
        self.title
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#39;", "'")
            .replace("&amp;", "&")
    }

    fn to_value(&self) -> Value {
        let mut m: HashMap<String, Value> = HashMap::new();
        m.insert("icon".to_owned(), Value::String(self.icon.to_owned()));
        m.insert("href".to_owned(), Value::String(escape(&self.file_name)));
        m.insert("title".to_owned(), Value::String(self.title.clone()));
        m.insert("date".to_owned(), Value::String(self.date.clone()));
        Value::Object(m)
    }
}

/// The trimmed contents of the first `<title>` element, if any.
pub fn extract_title(html: &str) -> Option<String> {
    TITLE_RE
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_owned())
}

/// The `YYYY-MM-DD` prefix of an article file name, if any.
pub fn extract_date(file_name: &str) -> Option<String> {
    DATE_PREFIX_RE
        .captures(file_name)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_owned())
}

/// Picks a card icon from keywords in the title.
pub fn pick_icon(title: &str) -> &'static str {
    let title = title.to_lowercase();
    ICON_RULES
        .iter()
        .find(|(re, _)| re.is_match(&title))
        .map(|(_, icon)| *icon)
        .unwrap_or(DEFAULT_ICON)
}

/// What [`build_site`] produced.
#[derive(Debug)]
pub struct SiteSummary {
    /// The published articles, newest file name first.
    pub listings: Vec<Listing>,

    pub output_directory: PathBuf,
}

/// Builds the site from a [`Config`]:
///
/// 1. writes the stylesheet into the output directory,
/// 2. copies every `*.html` file in the posts directory into the output
///    directory with its stylesheet link rewritten,
/// 3. renders the index page with one card per article, and
/// 4. writes the Atom feed.
///
/// `today` stamps the footer year and the feed's `updated` field.
pub fn build_site(config: &Config, today: NaiveDate) -> Result<SiteSummary> {
    let out = &config.output_directory;
    create_dir(out)?;
    write_file(&out.join(STYLESHEET), STYLE)?;

    let mut listings = Vec::new();
    for source in article_sources(&config.posts_directory)? {
        let html = std::fs::read_to_string(&source).map_err(|err| Error::Io {
            path: source.clone(),
            err,
        })?;
        let file_name = source
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        write_file(&out.join(&file_name), &fix_stylesheet_href(&html))?;
        debug!(file = %file_name, "published article");
        listings.push(Listing::from_html(&file_name, &html));
    }

    let template = templates::load(config.index_template.as_deref(), INDEX_TEMPLATE)?;
    let index = templates::execute(&template, index_value(config, &listings, today))?;
    write_file(&out.join(INDEX_FILE), &index)?;

    let feed_path = out.join(FEED_FILE);
    let feed_file = File::create(&feed_path).map_err(|err| Error::Io {
        path: feed_path.clone(),
        err,
    })?;
    write_feed(
        &FeedConfig {
            title: &config.brand_name,
            site_url: &config.site_url,
            updated: today,
        },
        &listings,
        feed_file,
    )?;

    info!(
        pages = listings.len(),
        output = %out.display(),
        "built site"
    );
    Ok(SiteSummary {
        listings,
        output_directory: out.to_owned(),
    })
}

// Newest first: article file names start with their date.
fn article_sources(posts_directory: &Path) -> Result<Vec<PathBuf>> {
    if !posts_directory.is_dir() {
        debug!(path = %posts_directory.display(), "posts directory missing");
        return Ok(Vec::new());
    }

    let mut sources = Vec::new();
    for result in WalkDir::new(posts_directory).min_depth(1).max_depth(1) {
        let entry = result?;
        if entry.file_type().is_file()
            && entry.file_name().to_string_lossy().ends_with(HTML_EXTENSION)
        {
            sources.push(entry.into_path());
        }
    }
    sources.sort_by(|a, b| b.file_name().cmp(&a.file_name()));
    Ok(sources)
}

fn index_value(config: &Config, listings: &[Listing], today: NaiveDate) -> Value {
    let mut m: HashMap<String, Value> = HashMap::new();
    m.insert("brand".to_owned(), Value::String(escape(&config.brand_name)));
    m.insert("tagline".to_owned(), Value::String(escape(&config.tagline)));
    m.insert(
        "resource_url".to_owned(),
        Value::String(escape(config.links.resource.as_str())),
    );
    m.insert(
        "video_url".to_owned(),
        Value::String(escape(config.links.video.as_str())),
    );
    m.insert("year".to_owned(), Value::String(today.year().to_string()));
    m.insert("has_cards".to_owned(), Value::Bool(!listings.is_empty()));
    m.insert(
        "cards".to_owned(),
        Value::Array(listings.iter().map(Listing::to_value).collect()),
    );
    Value::Object(m)
}

fn create_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|err| Error::Io {
        path: dir.to_owned(),
        err,
    })
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).map_err(|err| Error::Io {
        path: path.to_owned(),
        err,
    })
}

/// The result of assembling the site.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for assembling the site.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned for I/O problems reading articles or writing output files.
    #[error("'{}': {err}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        err: std::io::Error,
    },

    /// Returned when the posts directory can't be walked.
    #[error(transparent)]
    WalkDir(#[from] walkdir::Error),

    /// Returned when the index layout fails to load or execute.
    #[error(transparent)]
    Template(#[from] templates::Error),

    /// Returned for errors writing the feed.
    #[error(transparent)]
    Feed(#[from] feed::Error),
}
