// src/question/numbering.rs
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// How answer options are labelled in front of their text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AnswerNumbering {
    /// a., b., c., ...
    #[default]
    LowerAlpha,
    /// A., B., C., ...
    UpperAlpha,
    /// 1., 2., 3., ...
    Decimal,
    /// i., ii., iii., ...
    LowerRoman,
    /// I., II., III., ...
    UpperRoman,
    None,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown answer numbering style '{0}' (expected one of abc, ABCD, 123, iii, IIII, none)")]
pub struct ParseNumberingError(String);

impl AnswerNumbering {
    /// The keyword used in settings and on the command line.
    pub fn keyword(&self) -> &'static str {
        match self {
            AnswerNumbering::LowerAlpha => "abc",
            AnswerNumbering::UpperAlpha => "ABCD",
            AnswerNumbering::Decimal => "123",
            AnswerNumbering::LowerRoman => "iii",
            AnswerNumbering::UpperRoman => "IIII",
            AnswerNumbering::None => "none",
        }
    }

    /// Display prefix for the option at zero-based `index`, e.g. `"c. "`.
    pub fn number(&self, index: usize) -> String {
        let label = match self {
            AnswerNumbering::LowerAlpha => alpha(index),
            AnswerNumbering::UpperAlpha => alpha(index).to_uppercase(),
            AnswerNumbering::Decimal => (index + 1).to_string(),
            AnswerNumbering::LowerRoman => roman(index + 1).to_lowercase(),
            AnswerNumbering::UpperRoman => roman(index + 1),
            AnswerNumbering::None => return String::new(),
        };
        format!("{}. ", label)
    }
}

impl FromStr for AnswerNumbering {
    type Err = ParseNumberingError;

    // Keywords are case-sensitive: "abc" and "ABCD" differ only by case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "abc" => Ok(AnswerNumbering::LowerAlpha),
            "ABCD" => Ok(AnswerNumbering::UpperAlpha),
            "123" => Ok(AnswerNumbering::Decimal),
            "iii" => Ok(AnswerNumbering::LowerRoman),
            "IIII" => Ok(AnswerNumbering::UpperRoman),
            "none" => Ok(AnswerNumbering::None),
            other => Err(ParseNumberingError(other.to_string())),
        }
    }
}

impl fmt::Display for AnswerNumbering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// a..z, then aa, ab, ... so long option lists keep distinct labels.
fn alpha(index: usize) -> String {
    let mut n = index + 1;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push((b'a' + rem as u8) as char);
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}

fn roman(mut n: usize) -> String {
    const NUMERALS: [(usize, &str); 13] = [
        (1000, "M"), (900, "CM"), (500, "D"), (400, "CD"),
        (100, "C"), (90, "XC"), (50, "L"), (40, "XL"),
        (10, "X"), (9, "IX"), (5, "V"), (4, "IV"), (1, "I"),
    ];
    let mut out = String::new();
    for (value, numeral) in NUMERALS {
        while n >= value {
            out.push_str(numeral);
            n -= value;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_styles() {
        assert_eq!(AnswerNumbering::LowerAlpha.number(0), "a. ");
        assert_eq!(AnswerNumbering::UpperAlpha.number(2), "C. ");
        assert_eq!(AnswerNumbering::Decimal.number(9), "10. ");
        assert_eq!(AnswerNumbering::LowerRoman.number(3), "iv. ");
        assert_eq!(AnswerNumbering::UpperRoman.number(13), "XIV. ");
        assert_eq!(AnswerNumbering::None.number(5), "");
    }

    #[test]
    fn test_alpha_past_z() {
        assert_eq!(AnswerNumbering::LowerAlpha.number(25), "z. ");
        assert_eq!(AnswerNumbering::LowerAlpha.number(26), "aa. ");
        assert_eq!(AnswerNumbering::UpperAlpha.number(27), "AB. ");
    }

    #[test]
    fn test_parse_keywords() {
        for style in [
            AnswerNumbering::LowerAlpha,
            AnswerNumbering::UpperAlpha,
            AnswerNumbering::Decimal,
            AnswerNumbering::LowerRoman,
            AnswerNumbering::UpperRoman,
            AnswerNumbering::None,
        ] {
            assert_eq!(style.keyword().parse::<AnswerNumbering>(), Ok(style));
        }
        assert!("ABC".parse::<AnswerNumbering>().is_err());
        assert_eq!(AnswerNumbering::default(), AnswerNumbering::LowerAlpha);
    }
}
