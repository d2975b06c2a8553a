// src/extractors/options.rs

// --- Imports ---
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::extractors::rewrite::Collaborators;
use crate::question::{AnswerOption, Correctness, QuestionContext};
use crate::utils::error::ExtractionError;

// --- CSS Selectors (Lazy Static) ---
static QTEXT_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(".qtext").expect("Failed to compile QTEXT_SELECTOR")
});

static PROMPT_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(".prompt").expect("Failed to compile PROMPT_SELECTOR")
});

static ANSWER_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(".answer").expect("Failed to compile ANSWER_SELECTOR")
});

// Row candidates are narrowed further by ROW_MARKER_RE on the raw class attribute.
static ROW_CANDIDATE_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("div[class]").expect("Failed to compile ROW_CANDIDATE_SELECTOR")
});

static CHECKBOX_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("input[type=checkbox]").expect("Failed to compile CHECKBOX_SELECTOR")
});

static INPUT_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("input").expect("Failed to compile INPUT_SELECTOR")
});

static LABEL_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("label").expect("Failed to compile LABEL_SELECTOR")
});

static FEEDBACK_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("div.core-question-feedback-container")
        .expect("Failed to compile FEEDBACK_SELECTOR")
});

// --- Regex Patterns (Lazy Static) ---
// Row index marker at the very start of the class attribute: "r0", "r1 ...".
static ROW_MARKER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z]\d+(?:\s|$)").expect("Failed to compile ROW_MARKER_RE")
});

/// Turns a rendered multiple-response question fragment into the
/// display model used by native templates.
///
/// Each call is an independent pass: the fragment is parsed, read and
/// dropped, and nothing is kept between calls.
pub struct OptionExtractor<'c> {
    collaborators: Collaborators<'c>,
}

impl<'c> OptionExtractor<'c> {
    pub fn new(collaborators: Collaborators<'c>) -> Self {
        Self { collaborators }
    }

    /// Fills `question.text`, `question.prompt` and `question.options` in `context`.
    ///
    /// Fails only when there is no question payload or no question text;
    /// the reporter is told before the error is returned. A missing prompt,
    /// a missing answer list, or rows without a checkbox or label
    /// shrink the result instead.
    pub fn extract(&self, mut context: QuestionContext) -> Result<QuestionContext, ExtractionError> {
        // 1. Precondition
        let Some(question) = context.question.as_mut() else {
            return Err(self.abort(ExtractionError::MissingQuestion));
        };

        // 2. Class normalization before any class is read
        let markup = self.normalize_markup(&question.html);

        // 3. Best-effort parse; html5ever never rejects malformed input
        let fragment = Html::parse_fragment(&markup);
        tracing::trace!("Parsed question fragment ({} bytes after rewriting)", markup.len());

        // 4. Question text is mandatory
        let text = fragment
            .select(&QTEXT_SELECTOR)
            .next()
            .map(|region| region.inner_html())
            .unwrap_or_default();
        if text.is_empty() {
            return Err(self.abort(ExtractionError::MissingQuestionText));
        }
        question.text = text;

        // 5. Optional prompt; an absent region leaves any existing value alone
        if let Some(region) = fragment.select(&PROMPT_SELECTOR).next() {
            question.prompt = Some(region.inner_html());
        }

        // 6. Options, in document order
        question.options = match fragment.select(&ANSWER_SELECTOR).next() {
            Some(answer) => self.extract_options(answer),
            None => {
                tracing::debug!("No answer container in fragment, option list left empty");
                Vec::new()
            }
        };

        tracing::debug!(
            "Extracted question with {} options (prompt: {})",
            question.options.len(),
            question.prompt.is_some()
        );
        Ok(context)
    }

    /// Applies the correctness rewriter, then the feedback rewriter.
    pub fn normalize_markup(&self, html: &str) -> String {
        let markup = self.collaborators.correctness.rewrite_classes(html);
        self.collaborators.feedback.rewrite_classes(&markup)
    }

    fn abort(&self, error: ExtractionError) -> ExtractionError {
        self.collaborators.reporter.show_component_error(&error);
        error
    }

    fn extract_options(&self, answer: ElementRef<'_>) -> Vec<AnswerOption> {
        let mut options = Vec::new();
        let mut skipped = 0usize;

        let rows = answer.select(&ROW_CANDIDATE_SELECTOR).filter(|row| {
            row.value()
                .attr("class")
                .map_or(false, |class| ROW_MARKER_RE.is_match(class))
        });

        for row in rows {
            match extract_option(row) {
                Some(option) => options.push(option),
                None => skipped += 1,
            }
        }

        if skipped > 0 {
            tracing::debug!("Skipped {} answer row candidates without a usable checkbox or label", skipped);
        }
        options
    }
}

/// Convenience wrapper: one extraction pass with the given collaborators.
pub fn extract(
    context: QuestionContext,
    collaborators: Collaborators<'_>,
) -> Result<QuestionContext, ExtractionError> {
    OptionExtractor::new(collaborators).extract(context)
}

/// Reads one answer row. `None` means the row is not a renderable option.
fn extract_option(row: ElementRef<'_>) -> Option<AnswerOption> {
    let qclass = row.value().attr("class").unwrap_or_default();

    let Some(checkbox) = row.select(&CHECKBOX_SELECTOR).next() else {
        tracing::trace!("Row '{}' has no checkbox, skipping", qclass);
        return None;
    };

    let Some(label) = find_label(row, checkbox) else {
        tracing::trace!("Row '{}' has no resolvable label, skipping", qclass);
        return None;
    };

    // Disabled state lives on the first input, which may be a hidden companion field.
    let disabled = row
        .select(&INPUT_SELECTOR)
        .next()
        .map_or(false, |input| input.value().attr("disabled").is_some());

    let feedback = row
        .select(&FEEDBACK_SELECTOR)
        .next()
        .map(|container| container.inner_html())
        .unwrap_or_default();

    Some(AnswerOption {
        text: label.inner_html(),
        name: checkbox.value().attr("name").unwrap_or_default().to_string(),
        checked: checkbox.value().attr("checked").is_some(),
        disabled,
        feedback,
        qclass: qclass.to_string(),
        iscorrect: Correctness::from_class_list(qclass),
    })
}

/// Label referenced by `aria-labelledby`, else the first `<label>` in the row.
fn find_label<'a>(row: ElementRef<'a>, checkbox: ElementRef<'a>) -> Option<ElementRef<'a>> {
    checkbox
        .value()
        .attr("aria-labelledby")
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .and_then(id_selector)
        .and_then(|selector| row.select(&selector).next())
        .or_else(|| row.select(&LABEL_SELECTOR).next())
}

/// `#id` selector with colons escaped ("q1:1_label" -> "#q1\:1_label").
fn id_selector(id: &str) -> Option<Selector> {
    let css = format!("#{}", id.replace(':', "\\:"));
    let parsed = match Selector::parse(&css) {
        Ok(selector) => Some(selector),
        Err(e) => {
            tracing::debug!("Unusable label id '{}': {:?}", id, e);
            None
        }
    };
    parsed
}
