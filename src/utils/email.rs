//! Email address grammar and "@mention" extraction.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

use crate::utils::error::AppError;

lazy_static! {
    /// local@domain.tld, dot-separated atoms on both sides, TLD of two or more letters
    static ref EMAIL_FORMAT: Regex = Regex::new(
        r"(?i)^[a-z0-9_%+-]+(\.[a-z0-9_%+-]+)*@[a-z0-9]([a-z0-9-]*[a-z0-9])?(\.[a-z0-9]([a-z0-9-]*[a-z0-9])?)*\.[a-z]{2,}$"
    )
    .expect("Invalid email format pattern");

    /// A literal "@" immediately followed by an address candidate
    static ref MENTION: Regex = Regex::new(
        r"(?i)@\b[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}\b"
    )
    .expect("Invalid mention pattern");
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_FORMAT.is_match(email)
}

pub fn validate_email_format(email: &str) -> Result<(), AppError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(AppError::UserError(format!(
            "The email address {} has an invalid format",
            email
        )))
    }
}

/// Validates every email in order; the first invalid one is reported.
pub fn validate_email_formats<'a, I>(emails: I) -> Result<(), AppError>
where
    I: IntoIterator<Item = &'a String>,
{
    emails
        .into_iter()
        .try_for_each(|email| validate_email_format(email))
}

/// Removes duplicates, keeping the first occurrence of each email.
pub fn unique_emails(emails: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    emails
        .iter()
        .filter(|email| seen.insert(email.as_str()))
        .cloned()
        .collect()
}

/// Finds the students mentioned in a notification.
///
/// Returns the valid mentioned addresses without their leading "@",
/// deduplicated in order of first appearance.
pub fn extract_mentions(text: &str) -> Vec<String> {
    let mentioned: Vec<String> = MENTION
        .find_iter(text)
        .map(|m| m.as_str()[1..].to_string())
        .filter(|email| is_valid_email(email))
        .collect();

    unique_emails(&mentioned)
}
