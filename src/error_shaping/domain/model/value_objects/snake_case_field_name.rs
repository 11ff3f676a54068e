use std::fmt;

use regex::Regex;

lazy_static::lazy_static! {
    static ref CAPITALIZED_WORD_REGEX: Regex = Regex::new("(.)([A-Z][a-z]+)").expect("valid regex");
    static ref LOWER_TO_UPPER_REGEX: Regex = Regex::new("([a-z0-9])([A-Z])").expect("valid regex");
}

/// Field name as exposed to clients.
///
/// Boundaries are found in two passes: first before every capitalized word
/// (`URLPath` -> `URL_Path`), then between a lowercase letter or digit and a
/// capital (`userID` -> `user_ID`). The result is lowercased, so snake_case
/// input comes back unchanged.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct SnakeCaseFieldName(String);

impl SnakeCaseFieldName {
    pub fn from_raw(value: &str) -> Self {
        let split_words = CAPITALIZED_WORD_REGEX.replace_all(value, "${1}_${2}");
        let split_boundaries = LOWER_TO_UPPER_REGEX.replace_all(&split_words, "${1}_${2}");

        Self(split_boundaries.to_lowercase())
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for SnakeCaseFieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
