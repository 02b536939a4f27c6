//! Field rules. Pure functions over the raw control value.
//!
//! Lengths count UTF-16 code units so they agree with the browser's
//! `value.length`, which is what users see reflected by `minlength` hints.

use regex::Regex;

/// One character that is neither `@` nor whitespace as browsers define it:
/// U+FEFF counts as whitespace, U+0085 does not.
const EMAIL_CHAR: &str = r"[^\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}@]";

/// Sign-in accepts legacy passwords, so only length is checked.
pub const MIN_SIGN_IN_PASSWORD: usize = 6;
pub const MIN_STRONG_PASSWORD: usize = 8;
pub const MIN_NAME: usize = 2;

/// Length as reported by a browser text control.
#[must_use]
pub fn text_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Structural email check: `local@domain.tld` with no whitespace and a single `@`
/// per side. Deliverability is not checked.
#[must_use]
pub fn valid_email(email: &str) -> bool {
    let pattern = format!(r"^{EMAIL_CHAR}+@{EMAIL_CHAR}+\.{EMAIL_CHAR}+$");
    Regex::new(&pattern).is_ok_and(|regex| regex.is_match(email))
}

/// Registration password rule: at least 8 ASCII letters or digits with one
/// lowercase, one uppercase and one digit. Any other character fails the rule.
#[must_use]
pub fn strong_password(password: &str) -> bool {
    text_len(password) >= MIN_STRONG_PASSWORD
        && password.chars().all(|c| c.is_ascii_alphanumeric())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
}

#[must_use]
pub fn sign_in_password(password: &str) -> bool {
    text_len(password) >= MIN_SIGN_IN_PASSWORD
}

#[must_use]
pub fn valid_name(name: &str) -> bool {
    text_len(name) >= MIN_NAME
}
