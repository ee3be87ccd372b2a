//! Loads the project configuration from `sitemill.yaml`. Every field is
//! optional; relative paths are resolved against the directory holding the
//! project file.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use url::Url;

use crate::article::Links;
use crate::pool::PoolOptions;

/// The name of the project file searched for by [`Config::from_directory`].
pub const PROJECT_FILE: &str = "sitemill.yaml";

#[derive(Deserialize)]
#[serde(default)]
struct Project {
    keywords_file: PathBuf,
    posts_directory: PathBuf,
    output_directory: PathBuf,
    minimum_pool_size: usize,
    daily_count: usize,
    expansion_seed: u64,
    brand_name: String,
    tagline: String,
    site_url: Url,
    resource_url: Url,
    video_url: Url,
    article_template: Option<PathBuf>,
    index_template: Option<PathBuf>,
}

impl Default for Project {
    fn default() -> Self {
        let pool = PoolOptions::default();
        Project {
            keywords_file: PathBuf::from("content/keywords/keywords.csv"),
            posts_directory: PathBuf::from("content/posts"),
            output_directory: PathBuf::from("docs"),
            minimum_pool_size: pool.minimum_size,
            daily_count: 10,
            expansion_seed: pool.expansion_seed,
            brand_name: "Serenimoon Study Tools".to_owned(),
            tagline: "Simple printables & routines for students".to_owned(),
            site_url: default_url("https://example.com/"),
            resource_url: default_url("https://serenimoon.gumroad.com/l/dceyg"),
            video_url: default_url("https://www.youtube.com/@yourchannel"),
            article_template: None,
            index_template: None,
        }
    }
}

fn default_url(s: &str) -> Url {
    Url::parse(s).expect("Invalid default URL")
}

/// The resolved configuration every stage is run with.
#[derive(Clone, Debug)]
pub struct Config {
    /// The CSV keyword store.
    pub keywords_file: PathBuf,

    /// Where generated articles are written, and where the site assembler
    /// reads them from.
    pub posts_directory: PathBuf,

    /// The publishable site directory.
    pub output_directory: PathBuf,

    /// Pool growth settings.
    pub pool: PoolOptions,

    /// The most articles generated per day.
    pub daily_count: usize,

    /// Shown in the index page's header and footer, and used as the feed
    /// title.
    pub brand_name: String,

    pub tagline: String,

    /// The public URL of the output directory. Feed links are built from
    /// it, so it should end in a trailing slash.
    pub site_url: Url,

    /// The call-to-action links carried by every page.
    pub links: Links,

    /// Optional theme file replacing the built-in article layout.
    pub article_template: Option<PathBuf>,

    /// Optional theme file replacing the built-in index layout.
    pub index_template: Option<PathBuf>,
}

impl Config {
    /// Searches `dir` and then each of its parents for [`PROJECT_FILE`]. If
    /// none is found, the defaults are used with paths relative to `dir`.
    /// Relative paths are made absolute first so the search climbs past them.
    pub fn from_directory(dir: &Path) -> Result<Config> {
        let absolute = dir.canonicalize().unwrap_or_else(|_| dir.to_owned());
        let mut current = Some(absolute.as_path());
        while let Some(candidate) = current {
            let path = candidate.join(PROJECT_FILE);
            if path.is_file() {
                return Config::from_project_file(&path);
            }
            current = candidate.parent();
        }
        Ok(Config::with_root(dir))
    }

    /// Loads the configuration from a specific project file.
    pub fn from_project_file(path: &Path) -> Result<Config> {
        let contents = std::fs::read_to_string(path).map_err(|err| Error::Read {
            path: path.to_owned(),
            err,
        })?;
        let project: Project = if contents.trim().is_empty() {
            Project::default()
        } else {
            serde_yaml::from_str(&contents).map_err(|err| Error::Parse {
                path: path.to_owned(),
                err,
            })?
        };
        let root = path.parent().unwrap_or_else(|| Path::new("."));
        Ok(Config::from_project(project, root))
    }

    /// The default configuration with paths relative to `root`.
    pub fn with_root(root: &Path) -> Config {
        Config::from_project(Project::default(), root)
    }

    fn from_project(project: Project, root: &Path) -> Config {
        Config {
            keywords_file: root.join(project.keywords_file),
            posts_directory: root.join(project.posts_directory),
            output_directory: root.join(project.output_directory),
            pool: PoolOptions {
                minimum_size: project.minimum_pool_size,
                expansion_seed: project.expansion_seed,
                ..PoolOptions::default()
            },
            daily_count: project.daily_count,
            brand_name: project.brand_name,
            tagline: project.tagline,
            site_url: project.site_url,
            links: Links {
                resource: project.resource_url,
                video: project.video_url,
            },
            article_template: project.article_template.map(|p| root.join(p)),
            index_template: project.index_template.map(|p| root.join(p)),
        }
    }
}

/// The result of loading a configuration.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents a problem loading the project file.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when the project file exists but can't be read.
    #[error("Reading project file '{}': {err}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        err: std::io::Error,
    },

    /// Returned when the project file isn't valid YAML or has fields of the
    /// wrong type.
    #[error("Parsing project file '{}': {err}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        err: serde_yaml::Error,
    },
}
