// src/utils/html_debug.rs
use std::fs;
use std::path::Path;

use regex::Regex;

use crate::utils::error::AppError;

/// Patterns highlighted in `--debug` dumps of a question fragment.
pub const FRAGMENT_DEBUG_PATTERNS: &[(&str, &str)] = &[
    (r#"(?i)<div[^>]*\sclass\s*=\s*["']?[a-z]\d+[\s"'>][^>]*>"#, "row"),
    (r#"(?i)<[a-z]+[^>]*\sclass\s*=\s*["'][^"']*\bqtext\b[^"']*["'][^>]*>"#, "qtext"),
    (r"core-question-answer-correct", "correct"),
    (r"core-question-answer-incorrect", "incorrect"),
    (r"core-question-feedback-container", "feedback"),
    (r#"(?i)<input[^>]*type\s*=\s*["']?checkbox[^>]*>"#, "checkbox"),
];

/// Renders `html` with the given byte ranges wrapped in highlight spans.
/// Ranges overlapping an earlier one are dropped.
pub fn annotate_html(html: &str, highlights: &[(usize, usize, &str)]) -> String {
    let mut debug_html = String::from("<!DOCTYPE html>\n<html>\n<head>\n<style>\n");
    debug_html.push_str(".highlight-row { background-color: #FFFF00; }\n");
    debug_html.push_str(".highlight-qtext { background-color: #ADD8E6; }\n");
    debug_html.push_str(".highlight-correct { background-color: #90EE90; }\n");
    debug_html.push_str(".highlight-incorrect { background-color: #FF7F7F; }\n");
    debug_html.push_str(".highlight-feedback { background-color: #FFA500; }\n");
    debug_html.push_str(".highlight-custom { background-color: #FFC0CB; }\n");
    debug_html.push_str("</style>\n</head>\n<body>\n");

    let mut sorted_highlights = highlights.to_vec();
    sorted_highlights.sort_by_key(|h| h.0);

    let mut last_pos = 0;
    for (start, end, highlight_type) in sorted_highlights {
        if start < last_pos || end > html.len() {
            continue;
        }
        debug_html.push_str(&html[last_pos..start]);

        let css_class = match highlight_type {
            "row" => "highlight-row",
            "qtext" => "highlight-qtext",
            "correct" => "highlight-correct",
            "incorrect" => "highlight-incorrect",
            "feedback" => "highlight-feedback",
            _ => "highlight-custom",
        };

        // Markup is escaped so the annotated tags stay visible.
        debug_html.push_str(&format!(
            "<span class=\"{}\" title=\"Position: {}-{}, Type: {}\">",
            css_class, start, end, highlight_type
        ));
        debug_html.push_str(&escape_markup(&html[start..end]));
        debug_html.push_str("</span>");

        last_pos = end;
    }

    if last_pos < html.len() {
        debug_html.push_str(&html[last_pos..]);
    }

    debug_html.push_str("\n</body>\n</html>");
    debug_html
}

/// Writes a debug copy of a fragment with every match of `patterns` highlighted.
pub fn create_debug_html<P: AsRef<Path>>(
    html: &str,
    path: P,
    patterns: &[(&str, &str)],
) -> Result<(), AppError> {
    let mut highlights = Vec::new();

    for (pattern, highlight_type) in patterns {
        let re = Regex::new(pattern).map_err(|e| {
            AppError::Config(format!("Invalid regex pattern '{}': {}", pattern, e))
        })?;

        for mat in re.find_iter(html) {
            highlights.push((mat.start(), mat.end(), *highlight_type));
        }
    }

    let path = path.as_ref();
    fs::write(path, annotate_html(html, &highlights))?;
    tracing::info!("Saved debug HTML to {}", path.display());
    Ok(())
}

fn escape_markup(raw: &str) -> String {
    raw.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
