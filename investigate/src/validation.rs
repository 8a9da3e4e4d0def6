//! Input checks applied before a query is sent.

use regex::Regex;
use std::sync::OnceLock;

/// Loose email shape check: non-empty with an `@` and a `.`
pub fn is_valid_email(input: &str) -> bool {
    !input.is_empty() && input.contains('@') && input.contains('.')
}

/// Exactly six ASCII digits
pub fn is_valid_verification_code(input: &str) -> bool {
    static CODE: OnceLock<Regex> = OnceLock::new();
    CODE.get_or_init(|| Regex::new(r"^[0-9]{6}$").expect("verification code pattern is valid"))
        .is_match(input)
}
