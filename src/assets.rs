//! The site stylesheet and the rules for pointing pages at it.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// The stylesheet's file name in the output directory.
pub const STYLESHEET: &str = "style.css";

/// Bumped whenever [`STYLE`] changes so browsers drop cached copies.
pub const STYLE_VERSION: u32 = 5;

static STYLESHEET_HREF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"href=["'](\.\./)?style\.css(\?[^"']*)?["']"#)
        .expect("Invalid stylesheet href regex")
});

/// Rewrites every stylesheet link in `html` (`../style.css`, `style.css`,
/// with or without a query) to the versioned link used in the output
/// directory, where pages sit next to the stylesheet.
pub fn fix_stylesheet_href(html: &str) -> Cow<str> {
    STYLESHEET_HREF_RE.replace_all(html, stylesheet_href().as_str())
}

fn stylesheet_href() -> String {
    format!(r#"href="{}?v={}""#, STYLESHEET, STYLE_VERSION)
}

/// Light and dark brand theme for the index cards and article pages.
pub const STYLE: &str = r#"*{box-sizing:border-box}
:root{
  --bg:#fbfbfe; --card:#fff; --text:#0e1320; --muted:#5f6b85; --line:#e6ebf5;
  --brand:#4f46e5; --brand-2:#7c3aed; --brand-3:#22d3ee;
  --shadow:0 6px 16px rgba(28,35,71,.06);
}
@media(prefers-color-scheme:dark){
  :root{
    --bg:#0e1116; --card:#151922; --text:#e9eef7; --muted:#9db0c9; --line:#263043;
    --brand:#8ab4ff; --brand-2:#a78bfa; --brand-3:#22d3ee;
    --shadow:0 6px 18px rgba(0,0,0,.35);
  }
}
html,body{height:100%}
body{
  font-family:system-ui,-apple-system,Segoe UI,Roboto,Apple SD Gothic Neo,Noto Sans KR,sans-serif;
  background:var(--bg); color:var(--text); line-height:1.75;
  max-width:1000px; margin:28px auto; padding:0 16px;
}

/* header */
.brand{
  border-radius:20px; padding:18px 18px 16px; margin:0 0 18px;
  background:linear-gradient(135deg,var(--card),rgba(127,127,255,.08));
  border:1px solid var(--line); box-shadow:var(--shadow);
}
.brand h1{margin:0; font-size:28px; font-weight:900; letter-spacing:-.2px}
.brand p{margin:4px 0 10px; color:var(--muted); font-size:14px}
.nav{display:flex; gap:10px; flex-wrap:wrap}
.btn{
  display:inline-flex; align-items:center; gap:8px;
  padding:8px 14px; border-radius:999px; font-size:13px;
  text-decoration:none; color:#fff; background:var(--brand);
  box-shadow:0 2px 8px rgba(79,70,229,.25)
}
.btn.alt{background:var(--brand-2)}
.btn:hover{opacity:.95}

/* index cards */
ul.posts{list-style:none; padding:0; display:grid; grid-template-columns:1fr; gap:16px; margin:18px 0}
@media(min-width:760px){ul.posts{grid-template-columns:1fr 1fr}}
.card{
  position:relative; border:1px solid var(--line); border-radius:16px; padding:18px; background:var(--card);
  box-shadow:var(--shadow); transition:transform .12s ease, border-color .12s ease;
}
.card:hover{transform:translateY(-2px); border-color:rgba(79,70,229,.35)}
.card a.title{display:block; color:var(--brand); text-decoration:none; font-weight:800; font-size:18px; margin:2px 0 6px}
.card a.title:hover{text-decoration:underline}
.meta{font-size:12px; color:var(--muted); margin:0 0 8px; display:block}
.thumb{
  position:absolute; right:12px; top:12px; width:36px; height:36px; border-radius:50%;
  display:flex; align-items:center; justify-content:center; font-size:18px; color:#fff;
  background:linear-gradient(135deg,var(--brand-2),var(--brand-3));
  box-shadow:0 6px 14px rgba(0,0,0,.15)
}

/* articles */
article{
  border:1px solid var(--line); border-radius:16px; padding:28px; background:var(--card);
  box-shadow:var(--shadow); margin:24px 0; line-height:1.85; font-size:16px;
}
article h1{font-size:26px; margin:0 0 12px; font-weight:900}
article h3{font-size:18px; margin:22px 0 8px; padding-left:10px; border-left:4px solid var(--brand); font-weight:700}
article ul{padding-left:22px; margin-bottom:12px}
article ul li{margin:6px 0; list-style:none; position:relative}
article ul li::before{content:"✔"; color:var(--brand); font-weight:800; position:absolute; left:-18px}
article ol{padding-left:26px; margin-bottom:12px}
article ol li{margin:8px 0}
article hr{margin:24px 0; border:none; border-top:1px solid var(--line)}
.cta{background:#eef5ff20; border:1px solid var(--line); padding:14px; border-radius:12px; margin-top:18px}
.cta a{
  display:inline-block; margin-right:10px; padding:8px 14px; background:var(--brand); color:#fff; border-radius:10px;
  font-size:14px; text-decoration:none
}
.cta a:hover{opacity:.92}

footer{opacity:.85; margin:28px 0 12px; text-align:center; font-size:13px}
"#;
