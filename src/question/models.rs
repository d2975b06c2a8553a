// src/question/models.rs
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Question-display context handed over by the host for one render.
/// Host fields this crate does not know about are carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestionContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<Question>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl QuestionContext {
    /// Context wrapping a freshly rendered fragment.
    pub fn from_html(html: impl Into<String>) -> Self {
        Self {
            question: Some(Question::from_html(html)),
            extra: serde_json::Map::new(),
        }
    }
}

/// One question instance. `html` is input; the rest is filled in by extraction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Question {
    #[serde(default, skip_serializing)]
    pub html: String,
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(default)]
    pub options: Vec<AnswerOption>,
}

impl Question {
    pub fn from_html(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            ..Self::default()
        }
    }
}

/// A single selectable answer row, ready for a native checkbox widget.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    /// Inner markup of the option label.
    pub text: String,
    /// Form field name used to correlate the submission.
    pub name: String,
    pub checked: bool,
    pub disabled: bool,
    /// Inner markup of per-option feedback, empty when there is none.
    #[serde(default)]
    pub feedback: String,
    /// Raw class list of the row after class rewriting.
    #[serde(default)]
    pub qclass: String,
    #[serde(default, skip_serializing_if = "Correctness::is_undisclosed")]
    pub iscorrect: Correctness,
}

/// Whether an option was graded right or wrong. `Undisclosed` until the
/// question has been graded and feedback is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Correctness {
    Correct,
    Incorrect,
    #[default]
    Undisclosed,
}

impl Correctness {
    pub const CORRECT_MARKER: &'static str = "core-question-answer-correct";
    pub const INCORRECT_MARKER: &'static str = "core-question-answer-incorrect";

    /// Reads the correctness marker out of a row's class list.
    pub fn from_class_list(qclass: &str) -> Self {
        if qclass.contains(Self::CORRECT_MARKER) {
            Correctness::Correct
        } else if qclass.contains(Self::INCORRECT_MARKER) {
            Correctness::Incorrect
        } else {
            Correctness::Undisclosed
        }
    }

    pub fn is_undisclosed(&self) -> bool {
        matches!(self, Correctness::Undisclosed)
    }

    /// Numeric flag templates switch on: 1 correct, 0 incorrect.
    pub fn as_flag(&self) -> Option<u8> {
        match self {
            Correctness::Correct => Some(1),
            Correctness::Incorrect => Some(0),
            Correctness::Undisclosed => None,
        }
    }
}

impl Serialize for Correctness {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_flag() {
            Some(flag) => serializer.serialize_u8(flag),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for Correctness {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Option::<u8>::deserialize(deserializer)? {
            Some(1) => Ok(Correctness::Correct),
            Some(0) => Ok(Correctness::Incorrect),
            None => Ok(Correctness::Undisclosed),
            Some(other) => Err(D::Error::custom(format!(
                "invalid correctness flag {}, expected 0 or 1",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_correctness_from_class_list() {
        assert_eq!(Correctness::from_class_list("r0 core-question-answer-correct"), Correctness::Correct);
        assert_eq!(Correctness::from_class_list("r1 core-question-answer-incorrect"), Correctness::Incorrect);
        assert_eq!(Correctness::from_class_list("r2"), Correctness::Undisclosed);
        assert_eq!(Correctness::from_class_list(""), Correctness::Undisclosed);
        // Correct wins when both markers are present.
        assert_eq!(
            Correctness::from_class_list("core-question-answer-incorrect core-question-answer-correct"),
            Correctness::Correct
        );
    }

    #[test]
    fn test_undisclosed_correctness_is_omitted() {
        let option = AnswerOption {
            text: "London".to_string(),
            name: "q1:2".to_string(),
            qclass: "r1".to_string(),
            ..AnswerOption::default()
        };
        let value = serde_json::to_value(&option).unwrap();
        assert!(value.get("iscorrect").is_none());

        let graded = AnswerOption { iscorrect: Correctness::Incorrect, ..option };
        assert_eq!(serde_json::to_value(&graded).unwrap()["iscorrect"], json!(0));
    }

    #[test]
    fn test_context_keeps_host_fields_and_hides_html() {
        let context: QuestionContext = serde_json::from_value(json!({
            "question": { "html": "<div class=\"qtext\">Q</div>", "slot": 3 },
            "component": "qtype_multichoiceset"
        }))
        .unwrap();

        let question = context.question.as_ref().unwrap();
        assert_eq!(question.html, "<div class=\"qtext\">Q</div>");
        assert!(question.options.is_empty());
        assert_eq!(context.extra["component"], json!("qtype_multichoiceset"));

        let out = serde_json::to_value(&context).unwrap();
        assert!(out["question"].get("html").is_none());
        assert_eq!(out["component"], json!("qtype_multichoiceset"));
    }

    #[test]
    fn test_correctness_flag_deserialization() {
        let parse = |value: serde_json::Value| serde_json::from_value::<AnswerOption>(json!({
            "text": "A", "name": "q1:1", "checked": false, "disabled": false, "iscorrect": value
        }));

        assert_eq!(parse(json!(1)).unwrap().iscorrect, Correctness::Correct);
        assert_eq!(parse(json!(0)).unwrap().iscorrect, Correctness::Incorrect);
        assert_eq!(parse(json!(null)).unwrap().iscorrect, Correctness::Undisclosed);

        let err = parse(json!(7)).unwrap_err();
        assert!(err.to_string().contains("invalid correctness flag 7"));
    }

    #[test]
    fn test_context_without_question() {
        let context: QuestionContext = serde_json::from_str(r#"{"component": "x"}"#).unwrap();
        assert!(context.question.is_none());
    }
}
