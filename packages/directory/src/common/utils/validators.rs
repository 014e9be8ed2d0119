//! Regex format checks for organization contact fields.
//!
//! Patterns mirror the directory's persisted data: US ZIP codes, US phone
//! numbers with optional parens and `.`/`-`/space separators, a loose
//! `local@domain.tld` email shape, and a loose domain-with-optional-scheme
//! URL shape.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // 5 digits with optional -NNNN suffix
    static ref ZIP_REGEX: Regex = Regex::new(r"^\d{5}(-\d{4})?$").unwrap();

    // US phone: area code with optional parens, 3+4 digit groups
    static ref PHONE_REGEX: Regex = Regex::new(
        r"^(\(\d{3}\)|\d{3})[ .\-]?\d{3}[ .\-]?\d{4}$"
    ).unwrap();

    // Loose local@domain.tld
    static ref EMAIL_REGEX: Regex = Regex::new(r"(?i)^.+@.+\..+$").unwrap();

    // Domain with optional http/https scheme and optional path
    static ref URL_REGEX: Regex = Regex::new(
        r"(?i)^(?:(?:http|https)://)?[-a-zA-Z0-9.]{2,256}\.[a-zA-Z]{2,4}(?:/[-a-zA-Z0-9@:%_+.~#?&/=]*)?$"
    ).unwrap();
}

pub fn is_valid_zipcode(value: &str) -> bool {
    ZIP_REGEX.is_match(value)
}

pub fn is_valid_phone(value: &str) -> bool {
    PHONE_REGEX.is_match(value)
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

pub fn is_valid_url(value: &str) -> bool {
    URL_REGEX.is_match(value)
}
