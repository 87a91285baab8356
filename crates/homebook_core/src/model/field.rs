//! Validated contact fields.
//!
//! # Responsibility
//! - Provide the closed set of field types a `Record` is built from:
//!   `Name`, `Phone`, `Birthday`, `Email`, `Address`.
//! - Reject malformed input at construction time with a typed error.
//!
//! # Invariants
//! - A field value, once constructed, always satisfies its format predicate.
//! - `set_value` either commits the new value or fails and leaves the prior
//!   value untouched.
//! - Validation predicates are pure accept/reject decisions; deserialization
//!   runs the same checks as construction.

use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

// Start-anchored only: a value with trailing garbage after a valid mailbox
// prefix is accepted.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9._]+@[A-Za-z]+\.[A-Za-z]{2,}").expect("valid email regex")
});

const BIRTHDAY_FORMAT: &str = "%Y-%m-%d";

pub type FieldResult<T> = Result<T, FieldError>;

/// Validation rejection raised at field construction or assignment.
///
/// Rejection is an expected, recoverable outcome: callers report it and keep
/// going, they never retry or auto-correct on the caller's behalf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Input is not `+` followed by 12 digits, nor a bare 10/12 digit string.
    PhoneInvalidFormat(String),
    /// Input is not a parseable `YYYY-MM-DD` date strictly before today.
    BirthdayInvalidFormat(String),
    /// Input does not match the accepted mailbox pattern.
    EmailInvalidFormat(String),
    /// Note input collected by the shell is unusable (e.g. empty text).
    NoteInputInvalidFormat(String),
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PhoneInvalidFormat(value) => write!(
                f,
                "invalid phone `{value}`: expected +000000000000, 000000000000 or 0000000000"
            ),
            Self::BirthdayInvalidFormat(value) => write!(
                f,
                "invalid birthday `{value}`: expected a past date in YYYY-MM-DD format"
            ),
            Self::EmailInvalidFormat(value) => write!(f, "invalid email `{value}`"),
            Self::NoteInputInvalidFormat(details) => write!(f, "invalid note input: {details}"),
        }
    }
}

impl Error for FieldError {}

/// Contact display name. Accepts any string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Name {
    value: String,
}

impl Name {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }
}

impl Display for Name {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

/// Validated phone number.
///
/// Accepted shapes: `+` followed by exactly 12 digits, or a bare digit
/// string of length 10 or 12. Everything else is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone {
    value: String,
}

impl Phone {
    /// Validates and wraps a phone value.
    ///
    /// # Errors
    /// Returns `FieldError::PhoneInvalidFormat` when the shape check fails.
    pub fn new(value: impl Into<String>) -> FieldResult<Self> {
        let value = value.into();
        if is_valid_phone(&value) {
            Ok(Self { value })
        } else {
            Err(FieldError::PhoneInvalidFormat(value))
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replaces the stored value, keeping the prior one on rejection.
    ///
    /// # Errors
    /// Returns `FieldError::PhoneInvalidFormat` when the shape check fails.
    pub fn set_value(&mut self, value: impl Into<String>) -> FieldResult<()> {
        *self = Self::new(value)?;
        Ok(())
    }
}

impl Display for Phone {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

impl TryFrom<String> for Phone {
    type Error = FieldError;

    fn try_from(value: String) -> FieldResult<Self> {
        Self::new(value)
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> Self {
        phone.value
    }
}

/// Validated birthday, strictly in the past.
///
/// Stored as a calendar date; serialized as its `YYYY-MM-DD` text form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Birthday {
    value: NaiveDate,
}

impl Birthday {
    /// Parses and validates a `YYYY-MM-DD` value against the current date.
    ///
    /// # Errors
    /// Returns `FieldError::BirthdayInvalidFormat` when the value does not
    /// parse as a calendar date or is not strictly before today.
    pub fn new(value: &str) -> FieldResult<Self> {
        let date = validate_birthday(value, Local::now().date_naive())?;
        Ok(Self { value: date })
    }

    pub fn date(&self) -> NaiveDate {
        self.value
    }

    /// Replaces the stored date, keeping the prior one on rejection.
    ///
    /// # Errors
    /// Returns `FieldError::BirthdayInvalidFormat` on parse or range failure.
    pub fn set_value(&mut self, value: &str) -> FieldResult<()> {
        *self = Self::new(value)?;
        Ok(())
    }
}

impl Display for Birthday {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value.format(BIRTHDAY_FORMAT))
    }
}

impl TryFrom<String> for Birthday {
    type Error = FieldError;

    fn try_from(value: String) -> FieldResult<Self> {
        Self::new(&value)
    }
}

impl From<Birthday> for String {
    fn from(birthday: Birthday) -> Self {
        birthday.to_string()
    }
}

/// Validated email address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email {
    value: String,
}

impl Email {
    /// Validates and wraps an email value.
    ///
    /// # Errors
    /// Returns `FieldError::EmailInvalidFormat` when the pattern check fails.
    pub fn new(value: impl Into<String>) -> FieldResult<Self> {
        let value = value.into();
        if EMAIL_RE.is_match(&value) {
            Ok(Self { value })
        } else {
            Err(FieldError::EmailInvalidFormat(value))
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replaces the stored value, keeping the prior one on rejection.
    ///
    /// # Errors
    /// Returns `FieldError::EmailInvalidFormat` when the pattern check fails.
    pub fn set_value(&mut self, value: impl Into<String>) -> FieldResult<()> {
        *self = Self::new(value)?;
        Ok(())
    }
}

impl Display for Email {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

impl TryFrom<String> for Email {
    type Error = FieldError;

    fn try_from(value: String) -> FieldResult<Self> {
        Self::new(value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.value
    }
}

/// Free-form postal address. Accepts any string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address {
    value: String,
}

impl Address {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

fn is_valid_phone(value: &str) -> bool {
    match value.strip_prefix('+') {
        Some(rest) => rest.len() == 12 && rest.chars().all(|c| c.is_ascii_digit()),
        None => {
            (value.len() == 10 || value.len() == 12) && value.chars().all(|c| c.is_ascii_digit())
        }
    }
}

/// Checks a birthday value against an explicit `today`.
///
/// Kept separate from `Birthday::new` so the strictly-past rule can be
/// exercised deterministically in tests.
fn validate_birthday(value: &str, today: NaiveDate) -> FieldResult<NaiveDate> {
    let date = NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT)
        .map_err(|_| FieldError::BirthdayInvalidFormat(value.to_string()))?;
    if date >= today {
        return Err(FieldError::BirthdayInvalidFormat(value.to_string()));
    }
    Ok(date)
}
