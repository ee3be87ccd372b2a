//! The fixed material the keyword pool is grown from: base themes with their
//! subtopics, phrasing templates, decorative suffixes, and filler topics.
//! Changing anything in here changes the expansion output for every seed.

use crate::keyword::Intent;

/// A base theme and the subtopics it is paired with.
pub struct Theme {
    pub name: &'static str,
    pub subtopics: &'static [&'static str],
    pub intent: Intent,
}

pub const THEMES: &[Theme] = &[
    Theme {
        name: "Study planner",
        subtopics: &["Weekly", "Exam season", "Middle school", "High school"],
        intent: Intent::Transactional,
    },
    Theme {
        name: "Math formula cheatsheet",
        subtopics: &["Algebra", "Geometry", "Probability", "Middle school math"],
        intent: Intent::Informational,
    },
    Theme {
        name: "Vocabulary flashcards",
        subtopics: &["100 words a week", "SAT prep", "Beginner English", "Idioms"],
        intent: Intent::Transactional,
    },
    Theme {
        name: "Habit tracker",
        subtopics: &["Monthly", "Morning routine", "Reading habit", "Screen time"],
        intent: Intent::Transactional,
    },
    Theme {
        name: "Reading log",
        subtopics: &["Book report", "Summer reading", "Kids", "Classics"],
        intent: Intent::Transactional,
    },
    Theme {
        name: "Pomodoro study method",
        subtopics: &["25/5 timer", "Deep focus", "Exam cramming", "Group study"],
        intent: Intent::Informational,
    },
    Theme {
        name: "Time-block schedule",
        subtopics: &["After school", "Weekend", "Finals week", "Homeschool"],
        intent: Intent::Transactional,
    },
    Theme {
        name: "Exam anxiety relief",
        subtopics: &["Breathing exercises", "Sleep routine", "Focus music", "Meditation"],
        intent: Intent::Informational,
    },
    Theme {
        name: "Note-taking system",
        subtopics: &["Cornell method", "Mind map", "Outline method", "Digital notes"],
        intent: Intent::Informational,
    },
    Theme {
        name: "Study checklist",
        subtopics: &["Daily", "Before exams", "Project deadlines", "Lab reports"],
        intent: Intent::Transactional,
    },
];

/// Rewrites of a theme name. `{}` is replaced by the theme; the theme is
/// lower-cased unless the placeholder opens the phrase.
pub const PHRASINGS: &[&str] = &[
    "Getting started with {}",
    "Best {} for students",
    "Free {} template",
    "{} for beginners",
    "Simple {} ideas",
    "{} step by step",
];

pub const SUFFIXES: &[&str] = &["(printable)", "(PDF)", "(free download)", "(updated)"];

/// Topics appended, each as a plain and a printable variant, when the
/// catalog alone can't reach the minimum pool size.
pub const FILLERS: &[&str] = &[
    "Study motivation quotes",
    "Desk organization",
    "Goal setting worksheet",
    "Weekly reflection journal",
    "Minecraft study break",
    "Pokemon card study rewards",
];

/// Applies a phrasing template to a theme name.
pub fn phrase(template: &str, theme: &str) -> String {
    if template.starts_with("{}") {
        template.replacen("{}", theme, 1)
    } else {
        template.replacen("{}", &theme.to_lowercase(), 1)
    }
}
