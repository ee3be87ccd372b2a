//! Exports [`generate_articles`], the daily content run: load the keyword
//! pool, grow it if it is too small, pick the day's records, and write one
//! article per record.

use std::path::PathBuf;

use chrono::NaiveDate;
use tracing::info;

use crate::article::{self, ArticleWriter, Renderer};
use crate::config::Config;
use crate::pool::ensure_minimum;
use crate::select::select;
use crate::store::{self, KeywordStore};
use crate::templates::{self, ARTICLE_TEMPLATE};

/// What a [`generate_articles`] run did.
#[derive(Debug)]
pub struct Report {
    /// The pool size after any growth.
    pub pool_size: usize,

    /// The article files written, in selection order.
    pub written: Vec<PathBuf>,
}

/// Runs the daily generation for `today` from a [`Config`]. Articles are
/// written into the posts directory and named after `today`, so a second run
/// on the same day overwrites the first run's files.
pub fn generate_articles(config: &Config, today: NaiveDate) -> Result<Report> {
    let store = KeywordStore::new(&config.keywords_file);
    let pool = store.load()?;
    info!(size = pool.len(), path = %store.path().display(), "loaded keyword pool");

    let pool = ensure_minimum(&store, pool, &config.pool)?;
    let selected = select(&pool, config.daily_count, today);
    info!(selected = selected.len(), date = %today, "selected keywords");

    let template = templates::load(config.article_template.as_deref(), ARTICLE_TEMPLATE)?;
    let renderer = Renderer::new(&template, &config.links);
    let writer = ArticleWriter::new(&config.posts_directory);

    let mut written = Vec::with_capacity(selected.len());
    for record in &selected {
        let article = renderer.render(record, today)?;
        written.push(writer.write(&article)?);
    }

    info!(
        articles = written.len(),
        path = %config.posts_directory.display(),
        "generated articles"
    );
    Ok(Report {
        pool_size: pool.len(),
        written,
    })
}

/// The result of a generation run.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for a generation run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when the keyword store can't be read or written.
    #[error(transparent)]
    Store(#[from] store::Error),

    /// Returned when the article layout can't be loaded.
    #[error(transparent)]
    Template(#[from] templates::Error),

    /// Returned when an article can't be rendered or written.
    #[error(transparent)]
    Article(#[from] article::Error),
}
