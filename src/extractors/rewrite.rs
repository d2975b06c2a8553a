// src/extractors/rewrite.rs
use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::utils::error::ExtractionError;

// A comment (left alone) or a start tag: name in group 1, attribute text in group 2.
// Text content and entity-escaped markup never match.
static START_TAG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)<!--.*?-->|<([A-Za-z][^\s/>]*)((?:[^>"']|"[^"]*"|'[^']*')*)>"#)
        .expect("Failed to compile START_TAG_RE")
});

// One attribute inside a start tag, value in any of the three HTML quoting styles.
static ATTR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(\s+)([^\s"'>/=]+)(?:(\s*=\s*)(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+)))?"#)
        .expect("Failed to compile ATTR_RE")
});

/// Server-side correctness classes and their mobile counterparts.
pub const CORRECTNESS_CLASSES: &[(&str, &str)] = &[
    ("correct", "core-question-answer-correct"),
    ("incorrect", "core-question-answer-incorrect"),
    ("partiallycorrect", "core-question-answer-partiallycorrect"),
];

/// Server-side feedback containers and their mobile counterparts.
pub const FEEDBACK_CLASSES: &[(&str, &str)] = &[
    ("outcome", "core-question-feedback-container core-question-feedback-padding"),
    ("specificfeedback", "core-question-feedback-container core-question-feedback-inline"),
];

/// Rewrites class names in a question fragment into the target UI's conventions.
/// Implementations must be idempotent.
pub trait ClassRewriter {
    fn rewrite_classes(&self, markup: &str) -> String;
}

/// Abort path invoked when an extraction cannot produce anything renderable.
pub trait ComponentErrorReporter {
    fn show_component_error(&self, error: &ExtractionError);
}

/// Replaces whole class tokens according to a static map.
#[derive(Debug, Clone, Copy)]
pub struct ClassMapRewriter {
    map: &'static [(&'static str, &'static str)],
}

impl ClassMapRewriter {
    pub const fn new(map: &'static [(&'static str, &'static str)]) -> Self {
        Self { map }
    }

    pub const fn correctness() -> Self {
        Self::new(CORRECTNESS_CLASSES)
    }

    pub const fn feedback() -> Self {
        Self::new(FEEDBACK_CLASSES)
    }

    /// Rewrites one class list. Lists without a mapped token come back untouched.
    pub fn rewrite_class_list<'a>(&self, classes: &'a str) -> Cow<'a, str> {
        let lookup = |token: &str| self.map.iter().find(|(from, _)| *from == token).map(|(_, to)| *to);

        if !classes.split_whitespace().any(|token| lookup(token).is_some()) {
            return Cow::Borrowed(classes);
        }

        let mut tokens: Vec<&str> = Vec::new();
        for token in classes.split_whitespace() {
            for replacement in lookup(token).unwrap_or(token).split_whitespace() {
                if !tokens.contains(&replacement) {
                    tokens.push(replacement);
                }
            }
        }
        Cow::Owned(tokens.join(" "))
    }

    /// Rewrites the `class` attribute within one start tag's attribute text.
    fn rewrite_attributes<'a>(&self, attrs: &'a str) -> Cow<'a, str> {
        ATTR_RE.replace_all(attrs, |attr: &Captures| {
            let (Some(eq), true) = (attr.get(3), attr[2].eq_ignore_ascii_case("class")) else {
                return attr[0].to_string();
            };
            let (quote, value) = match (attr.get(4), attr.get(5), attr.get(6)) {
                (_, Some(v), _) => ('\'', v.as_str()),
                (Some(v), _, _) | (_, _, Some(v)) => ('"', v.as_str()),
                _ => ('"', ""),
            };
            format!(
                "{}{}{}{}{}{}",
                &attr[1],
                &attr[2],
                eq.as_str(),
                quote,
                self.rewrite_class_list(value),
                quote
            )
        })
    }
}

impl ClassRewriter for ClassMapRewriter {
    fn rewrite_classes(&self, markup: &str) -> String {
        START_TAG_RE
            .replace_all(markup, |tag: &Captures| match (tag.get(1), tag.get(2)) {
                (Some(name), Some(attrs)) => {
                    format!("<{}{}>", name.as_str(), self.rewrite_attributes(attrs.as_str()))
                }
                _ => tag[0].to_string(),
            })
            .into_owned()
    }
}

/// Reports aborted extractions through the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl ComponentErrorReporter for TracingReporter {
    fn show_component_error(&self, error: &ExtractionError) {
        tracing::error!("Question cannot be rendered natively: {}", error);
    }
}

static MOBILE_CORRECTNESS: ClassMapRewriter = ClassMapRewriter::correctness();
static MOBILE_FEEDBACK: ClassMapRewriter = ClassMapRewriter::feedback();
static TRACING_REPORTER: TracingReporter = TracingReporter;

/// Everything the extractor calls out to. Passed explicitly on every call.
#[derive(Clone, Copy)]
pub struct Collaborators<'a> {
    pub correctness: &'a dyn ClassRewriter,
    pub feedback: &'a dyn ClassRewriter,
    pub reporter: &'a dyn ComponentErrorReporter,
}

impl Collaborators<'static> {
    /// Mobile class conventions with errors reported to the log.
    pub fn mobile() -> Self {
        Self {
            correctness: &MOBILE_CORRECTNESS,
            feedback: &MOBILE_FEEDBACK,
            reporter: &TRACING_REPORTER,
        }
    }
}

impl Default for Collaborators<'static> {
    fn default() -> Self {
        Self::mobile()
    }
}
