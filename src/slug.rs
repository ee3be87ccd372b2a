//! Title composition and slugging for article file names.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

/// The longest slug [`slugify`] will produce, in characters.
pub const MAX_SLUG_LEN: usize = 60;

/// The slug used when nothing of the title survives slugging.
pub const DEFAULT_SLUG: &str = "post";

/// The extension of every article file.
pub const HTML_EXTENSION: &str = ".html";

// Lower-case ASCII letters, digits, Hangul jamo and syllables, whitespace,
// and hyphens survive; everything else is dropped.
static DISALLOWED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^a-z0-9ㄱ-힣\s-]").expect("Invalid slug character regex")
});

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

/// Composes an article title: the keyword alone, or `"{keyword} — {subtopic}"`
/// when there is a subtopic.
pub fn title(keyword: &str, subtopic: &str) -> String {
    if subtopic.is_empty() {
        keyword.to_owned()
    } else {
        format!("{} — {}", keyword, subtopic)
    }
}

/// Converts a title into a file-name- and URL-safe slug. The result is never
/// empty, holds only characters from the allowed set, has no leading or
/// trailing hyphen, and is at most [`MAX_SLUG_LEN`] characters long.
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let kept = DISALLOWED_RE.replace_all(&lowered, "");
    let hyphenated = WHITESPACE_RE.replace_all(&kept, "-");
    let truncated: String = hyphenated
        .trim_matches('-')
        .chars()
        .take(MAX_SLUG_LEN)
        .collect();
    match truncated.trim_end_matches('-') {
        "" => DEFAULT_SLUG.to_owned(),
        slug => slug.to_owned(),
    }
}

/// The output file name for an article: `{date}-{slug}.html`.
pub fn file_name(date: NaiveDate, title: &str) -> String {
    format!(
        "{}-{}{}",
        date.format("%Y-%m-%d"),
        slugify(title),
        HTML_EXTENSION
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_well_formed(slug: &str) {
        assert!(!slug.is_empty());
        assert!(slug.chars().count() <= MAX_SLUG_LEN, "too long: {}", slug);
        assert!(
            !slug.starts_with('-') && !slug.ends_with('-'),
            "edge hyphen: {}",
            slug
        );
        assert!(
            slug.chars().all(|c| c.is_ascii_lowercase()
                || c.is_ascii_digit()
                || c == '-'
                || ('ㄱ'..='힣').contains(&c)),
            "disallowed character: {}",
            slug
        );
    }

    #[test]
    fn test_title() {
        assert_eq!("Study planner", title("Study planner", ""));
        assert_eq!("Study planner — Weekly", title("Study planner", "Weekly"));
    }

    #[test]
    fn test_slugify() {
        assert_eq!("study-planner-weekly", slugify("Study planner — Weekly"));
        assert_eq!(
            "math-formula-cheatsheet-algebra",
            slugify("Math formula cheatsheet — Algebra")
        );
        assert_eq!("study-planner-pdf", slugify("Study planner (PDF)"));
        assert_eq!(
            "pomodoro-study-method-255-timer",
            slugify("Pomodoro study method — 25/5 timer")
        );
    }

    #[test]
    fn test_slugify_keeps_hangul() {
        assert_eq!(
            "시험-공부-플래너-중학생용",
            slugify("시험 공부 플래너 — 중학생용")
        );
    }

    #[test]
    fn test_slugify_falls_back_to_default() {
        assert_eq!(DEFAULT_SLUG, slugify(""));
        assert_eq!(DEFAULT_SLUG, slugify("!!! — ???"));
        assert_eq!(DEFAULT_SLUG, slugify("   "));
    }

    #[test]
    fn test_slugify_truncates_without_trailing_hyphen() {
        let title = format!("{} tail", "a".repeat(MAX_SLUG_LEN - 1));
        let slug = slugify(&title);
        assert_eq!("a".repeat(MAX_SLUG_LEN - 1), slug);
        assert_well_formed(&slug);
    }

    #[test]
    fn test_slugify_is_well_formed() {
        let long = "word ".repeat(40);
        for title in [
            "",
            "-leading and trailing-",
            "Ünïcödé ñame — Ω",
            "tabs\tand\nnewlines",
            "Study planner (free download) — Exam season",
            long.as_str(),
            "수학 공식 정리 프린트 — 중학 수학",
        ] {
            assert_well_formed(&slugify(title));
        }
    }

    #[test]
    fn test_file_name() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        assert_eq!(
            "2025-03-09-study-planner-weekly.html",
            file_name(date, &title("Study planner", "Weekly"))
        );
    }
}
