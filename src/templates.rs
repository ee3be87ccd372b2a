//! The page layouts and the helpers for loading and executing them. Layouts
//! are [`gtmpl`] (Go template) templates; the built-in ones below are used
//! unless the project names a theme file instead.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use gtmpl::{Context, Template, Value};
use pulldown_cmark::escape::escape_html;

/// The layout for a single article. Expects `title`, `date`, `intent`,
/// `body` (HTML), `resource_url`, and `video_url`.
pub const ARTICLE_TEMPLATE: &str = r#"<!doctype html>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{{ .title }}</title>
<link rel="stylesheet" href="../style.css">
<article>
<h1>{{ .title }}</h1>
<p><small>{{ .date }} · {{ .intent }}</small></p>
{{ .body }}
<hr>
<div class="cta">
  <a href="{{ .resource_url }}" target="_blank">📘 Get the printable</a>
  <a href="{{ .video_url }}" target="_blank">▶️ Watch on YouTube</a>
</div>
</article>
"#;

/// The layout for the site's index page. Expects `brand`, `tagline`,
/// `resource_url`, `video_url`, `year`, `has_cards`, and `cards` (each with
/// `icon`, `href`, `title`, and `date`).
pub const INDEX_TEMPLATE: &str = r#"<!doctype html>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{{ .brand }}</title>
<link rel="stylesheet" href="style.css?v=5">
<header class="brand">
  <h1>{{ .brand }}</h1>
  <p>{{ .tagline }}</p>
  <nav class="nav">
    <a class="btn" href="{{ .resource_url }}" target="_blank">📘 Get PDF</a>
    <a class="btn alt" href="{{ .video_url }}" target="_blank">▶️ YouTube</a>
  </nav>
</header>
<main>
<ul class="posts">
{{ if .has_cards }}{{ range .cards }}<li class="card">
  <div class="thumb">{{ .icon }}</div>
  <a class="title" href="{{ .href }}">{{ .title }}</a>
  <span class="meta">{{ .date }}</span>
</li>
{{ end }}{{ else }}<li class="card">Getting things ready…</li>
{{ end }}</ul>
</main>
<footer><small>© {{ .year }} · {{ .brand }}</small></footer>
"#;

/// Loads the template at `path`, or parses `default` when no path is given.
pub fn load(path: Option<&Path>, default: &str) -> Result<Template> {
    let contents = match path {
        None => default.to_owned(),
        Some(path) => {
            let mut contents = String::new();
            File::open(path)
                .and_then(|mut file| file.read_to_string(&mut contents))
                .map_err(|err| Error::OpenTemplateFile {
                    path: path.to_owned(),
                    err,
                })?;
            contents
        }
    };

    let mut template = Template::default();
    template
        .parse(contents)
        .map_err(|e| Error::Parse(e.to_string()))?;
    Ok(template)
}

/// Executes `template` against `value` and returns the output.
pub fn execute(template: &Template, value: Value) -> Result<String> {
    let context = Context::from(value).map_err(|e| Error::Execute(e.to_string()))?;
    let mut out: Vec<u8> = Vec::new();
    template
        .execute(&mut out, &context)
        .map_err(|e| Error::Execute(e.to_string()))?;
    String::from_utf8(out).map_err(|e| Error::Execute(e.to_string()))
}

/// HTML-escapes text before it is dropped into a layout. The layouts don't
/// escape anything themselves.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    // writing into a String can't fail
    let _ = escape_html(&mut out, text);
    out
}

/// The result of a template operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents a problem loading or executing a template.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned for I/O problems while opening template files.
    #[error("Opening template file '{}': {err}", .path.display())]
    OpenTemplateFile {
        path: PathBuf,
        #[source]
        err: std::io::Error,
    },

    /// Returned for errors parsing template files.
    #[error("Parsing template: {0}")]
    Parse(String),

    /// Returned for errors executing a template.
    #[error("Executing template: {0}")]
    Execute(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn object(pairs: &[(&str, Value)]) -> Value {
        let m: HashMap<String, Value> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        Value::Object(m)
    }

    #[test]
    fn test_escape() {
        assert_eq!("Tom &amp; Jerry &lt;3", escape("Tom & Jerry <3"));
        assert_eq!("plain", escape("plain"));
    }

    #[test]
    fn test_execute_default_template() {
        let template = load(None, "<h1>{{ .title }}</h1>").unwrap();
        let html = execute(
            &template,
            object(&[("title", Value::String("Hello".to_owned()))]),
        )
        .unwrap();
        assert_eq!("<h1>Hello</h1>", html);
    }

    #[test]
    fn test_load_template_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.html");
        std::fs::write(&path, "<p>{{ .title }}</p>").unwrap();

        let template = load(Some(&path), ARTICLE_TEMPLATE).unwrap();
        let html = execute(
            &template,
            object(&[("title", Value::String("x".to_owned()))]),
        )
        .unwrap();
        assert_eq!("<p>x</p>", html);
    }

    #[test]
    fn test_load_missing_template_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load(Some(&dir.path().join("missing.html")), ARTICLE_TEMPLATE);
        assert!(matches!(result, Err(Error::OpenTemplateFile { .. })));
    }

    #[test]
    fn test_index_template_placeholder() {
        let template = load(None, INDEX_TEMPLATE).unwrap();
        let html = execute(
            &template,
            object(&[
                ("brand", Value::String("Brand".to_owned())),
                ("tagline", Value::String("Tag".to_owned())),
                ("resource_url", Value::String("https://a.example/".to_owned())),
                ("video_url", Value::String("https://b.example/".to_owned())),
                ("year", Value::String("2025".to_owned())),
                ("has_cards", Value::Bool(false)),
                ("cards", Value::Array(Vec::new())),
            ]),
        )
        .unwrap();
        assert!(html.contains("Getting things ready…"));
        assert!(html.contains("© 2025 · Brand"));
    }
}
