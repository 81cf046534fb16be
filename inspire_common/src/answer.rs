//! Answers accepted by the save confirmation prompt.

use strum_macros::{Display, EnumString};

/// A parsed yes/no answer. Matching ignores ASCII case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Answer {
    /// `o`, `oui`, `y` or `yes`.
    #[strum(to_string = "oui", serialize = "o", serialize = "y", serialize = "yes")]
    Yes,
    /// `n`, `non` or `no`.
    #[strum(to_string = "non", serialize = "n", serialize = "no")]
    No,
}

/// Parses a typed answer, surrounding whitespace ignored.
///
/// Returns `None` for anything that is neither a yes nor a no token.
pub fn parse_answer(input: &str) -> Option<Answer> {
    input.trim().parse::<Answer>().ok()
}
