//! Renders [`KeywordRecord`]s into article pages ([`Renderer`]) and writes
//! them to the posts directory ([`ArticleWriter`]).
//!
//! An article's body is assembled as markdown, with the copy chosen by the
//! record's [`Intent`], and converted to HTML with [`pulldown_cmark`]. The
//! HTML is then dropped into the article layout (see
//! [`crate::templates::ARTICLE_TEMPLATE`]) along with the title, the date,
//! and the call-to-action links.

use std::collections::HashMap;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use gtmpl::{Template, Value};
use pulldown_cmark::{html, Parser};
use tracing::debug;
use url::Url;

use crate::keyword::{Intent, KeywordRecord};
use crate::slug;
use crate::templates::{self, escape};

/// The two outbound links every page carries.
#[derive(Clone, Debug)]
pub struct Links {
    /// Where the printable/resource can be had (the "get the resource" link).
    pub resource: Url,

    /// The related video channel (the "watch related content" link).
    pub video: Url,
}

/// A rendered article, ready to be written.
#[derive(Clone, Debug)]
pub struct Article {
    pub title: String,
    pub date: NaiveDate,
    pub intent: Intent,

    /// `{date}-{slug}.html`; see [`slug::file_name`].
    pub file_name: String,

    /// The complete HTML document.
    pub html: String,
}

/// Renders articles with a fixed layout and fixed links.
pub struct Renderer<'a> {
    template: &'a Template,
    links: &'a Links,
}

impl<'a> Renderer<'a> {
    pub fn new(template: &'a Template, links: &'a Links) -> Renderer<'a> {
        Renderer { template, links }
    }

    /// Renders one article for `record` dated `run_date`.
    pub fn render(&self, record: &KeywordRecord, run_date: NaiveDate) -> Result<Article> {
        let title = slug::title(&record.keyword, &record.subtopic);

        let mut body = String::new();
        html::push_html(&mut body, Parser::new(&body_markdown(record)));

        let mut m: HashMap<String, Value> = HashMap::new();
        m.insert("title".to_owned(), Value::String(escape(&title)));
        m.insert(
            "date".to_owned(),
            Value::String(run_date.format("%Y-%m-%d").to_string()),
        );
        m.insert(
            "intent".to_owned(),
            Value::String(record.intent.as_str().to_owned()),
        );
        m.insert("body".to_owned(), Value::String(body));
        m.insert(
            "resource_url".to_owned(),
            Value::String(escape(self.links.resource.as_str())),
        );
        m.insert(
            "video_url".to_owned(),
            Value::String(escape(self.links.video.as_str())),
        );

        Ok(Article {
            file_name: slug::file_name(run_date, &title),
            html: templates::execute(self.template, Value::Object(m))?,
            title,
            date: run_date,
            intent: record.intent,
        })
    }
}

/// Builds the markdown body: intro, key points, routine steps, and related
/// topics.
fn body_markdown(record: &KeywordRecord) -> String {
    let keyword = escape_markdown(&record.keyword);
    let subtopic = escape_markdown(&record.subtopic);
    let lowered = keyword.to_lowercase();
    let audience = match subtopic.as_str() {
        "" => "everyday study",
        subtopic => subtopic,
    };
    let title = slug::title(&keyword, &subtopic);

    let (intro, key_points) = match record.intent {
        Intent::Transactional => (
            format!(
                "Looking for a ready-to-use **{}**? Grab the printable template below \
                 and start filling it in today.",
                title
            ),
            [
                "Download-ready layout, printable on A4 or Letter".to_owned(),
                format!("Made for {}", audience),
                "Fill it in by hand or edit it digitally".to_owned(),
                "Reusable: print a fresh copy every week".to_owned(),
            ],
        ),
        Intent::Informational | Intent::Navigational => (
            format!(
                "A short summary of **{}**. Read it once, then keep the key points \
                 next to your desk.",
                title
            ),
            [
                format!("What {} is, in one sentence", lowered),
                format!("How it fits {}", audience),
                "The most common mistake students make".to_owned(),
                "One thing to try today".to_owned(),
            ],
        ),
    };

    let related = [
        format!("{} printable", keyword),
        format!("{} tips", keyword),
        match subtopic.as_str() {
            "" => format!("{} for beginners", keyword),
            subtopic => format!("{} study routine", subtopic),
        },
    ];

    let mut md = String::new();
    // writing into a String can't fail
    let _ = writeln!(md, "{}\n", intro);
    let _ = writeln!(md, "### Key points\n");
    for point in &key_points {
        let _ = writeln!(md, "- {}", point);
    }
    let _ = writeln!(md, "\n### Daily routine\n");
    let _ = writeln!(md, "1. Spend 5 minutes reviewing your {}.", lowered);
    let _ = writeln!(md, "2. Pick one task and finish it before moving on.");
    let _ = writeln!(
        md,
        "3. Check off what you did and note one improvement for tomorrow."
    );
    let _ = writeln!(md, "\n### Related topics\n");
    for topic in &related {
        let _ = writeln!(md, "- {}", topic);
    }
    md
}

/// Backslash-escapes every ASCII punctuation character so `text` renders
/// literally: no emphasis, links, list markers, or raw HTML.
fn escape_markdown(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_ascii_punctuation() {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Writes [`Article`]s into the posts directory.
pub struct ArticleWriter<'a> {
    posts_directory: &'a Path,
}

impl<'a> ArticleWriter<'a> {
    pub fn new(posts_directory: &'a Path) -> ArticleWriter<'a> {
        ArticleWriter { posts_directory }
    }

    /// Writes `article` to `{posts_directory}/{file_name}`, creating the
    /// directory if needed. An existing file with the same name is
    /// overwritten.
    pub fn write(&self, article: &Article) -> Result<PathBuf> {
        std::fs::create_dir_all(self.posts_directory).map_err(|err| Error::Io {
            path: self.posts_directory.to_owned(),
            err,
        })?;
        let path = self.posts_directory.join(&article.file_name);
        std::fs::write(&path, &article.html).map_err(|err| Error::Io {
            path: path.clone(),
            err,
        })?;
        debug!(path = %path.display(), "wrote article");
        Ok(path)
    }
}

/// The result of rendering or writing an article.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents an error rendering or writing an article.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when the article layout fails to execute.
    #[error(transparent)]
    Template(#[from] templates::Error),

    /// Returned when the article can't be written.
    #[error("writing '{}': {err}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        err: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::{load, ARTICLE_TEMPLATE};
    use tempfile::tempdir;

    fn links() -> Links {
        Links {
            resource: Url::parse("https://shop.example.com/l/planner").unwrap(),
            video: Url::parse("https://video.example.com/@channel").unwrap(),
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 9).unwrap()
    }

    #[test]
    fn test_render_transactional() {
        let template = load(None, ARTICLE_TEMPLATE).unwrap();
        let links = links();
        let record = KeywordRecord::new("Study planner", "Weekly", Intent::Transactional);
        let article = Renderer::new(&template, &links)
            .render(&record, date())
            .unwrap();

        assert_eq!("Study planner — Weekly", article.title);
        assert_eq!("2025-03-09-study-planner-weekly.html", article.file_name);
        assert!(article.html.contains("<title>Study planner — Weekly</title>"));
        assert!(article.html.contains("2025-03-09 · transactional"));
        assert!(article.html.contains("printable template"));
        assert!(article.html.contains("<h3>Key points</h3>"));
        assert!(article.html.contains("<ol>"));
        assert!(article.html.contains("https://shop.example.com/l/planner"));
        assert!(article.html.contains("https://video.example.com/@channel"));
        assert!(article.html.contains(r#"href="../style.css""#));
    }

    #[test]
    fn test_render_informational_and_fallbacks() {
        let template = load(None, ARTICLE_TEMPLATE).unwrap();
        let links = links();
        let renderer = Renderer::new(&template, &links);

        let informational = renderer
            .render(
                &KeywordRecord::new(
                    "Math formula cheatsheet",
                    "Algebra",
                    Intent::Informational,
                ),
                date(),
            )
            .unwrap();
        assert_eq!(
            "2025-03-09-math-formula-cheatsheet-algebra.html",
            informational.file_name
        );
        assert!(informational.html.contains("A short summary of"));
        assert!(!informational.html.contains("printable template"));

        let navigational = renderer
            .render(
                &KeywordRecord::new("Reading log", "", Intent::Navigational),
                date(),
            )
            .unwrap();
        assert_eq!("Reading log", navigational.title);
        assert!(navigational.html.contains("A short summary of"));
        assert!(navigational.html.contains("Reading log for beginners"));
    }

    #[test]
    fn test_render_escapes_title() {
        let template = load(None, ARTICLE_TEMPLATE).unwrap();
        let links = links();
        let record = KeywordRecord::new("Tips & <tricks>", "", Intent::Informational);
        let article = Renderer::new(&template, &links)
            .render(&record, date())
            .unwrap();
        assert!(article.html.contains("<title>Tips &amp; &lt;tricks&gt;</title>"));
        assert_eq!("2025-03-09-tips-tricks.html", article.file_name);
    }

    #[test]
    fn test_render_keeps_markdown_literal() {
        let template = load(None, ARTICLE_TEMPLATE).unwrap();
        let links = links();
        let renderer = Renderer::new(&template, &links);

        let article = renderer
            .render(
                &KeywordRecord::new(
                    "C++ *notes* [x](javascript:alert(1))",
                    "_draft_",
                    Intent::Transactional,
                ),
                date(),
            )
            .unwrap();
        assert!(article.html.contains(
            "<strong>C++ *notes* [x](javascript:alert(1)) — _draft_</strong>"
        ));
        assert!(!article.html.contains("<em>"));
        assert!(!article.html.contains("javascript:alert(1)\""));

        let numbered = renderer
            .render(
                &KeywordRecord::new("1. Intro", "", Intent::Informational),
                date(),
            )
            .unwrap();
        assert!(numbered.html.contains("<li>1. Intro printable</li>"));
        assert_eq!(1, numbered.html.matches("<ol>").count());
    }

    #[test]
    fn test_write_overwrites() {
        let dir = tempdir().unwrap();
        let posts = dir.path().join("content").join("posts");
        let writer = ArticleWriter::new(&posts);
        let mut article = Article {
            title: "Study planner".to_owned(),
            date: date(),
            intent: Intent::Transactional,
            file_name: "2025-03-09-study-planner.html".to_owned(),
            html: "first".to_owned(),
        };

        let path = writer.write(&article).unwrap();
        article.html = "second".to_owned();
        assert_eq!(path, writer.write(&article).unwrap());

        assert_eq!("second", std::fs::read_to_string(&path).unwrap());
        assert_eq!(1, std::fs::read_dir(&posts).unwrap().count());
    }
}
