//! Contact record.
//!
//! # Responsibility
//! - Aggregate one contact's validated fields: required name, ordered
//!   phone list, optional birthday/email/address.
//! - Compute the day distance to the next birthday occurrence.
//!
//! # Invariants
//! - Phones keep insertion order; duplicates by value are allowed.
//! - `remove_phone` erases every phone value-equal to the target.
//! - Optional fields follow last-write-wins replacement.

use crate::model::field::{Address, Birthday, Email, Name, Phone};
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// One contact's aggregated attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: Name,
    pub phones: Vec<Phone>,
    pub birthday: Option<Birthday>,
    pub email: Option<Email>,
    pub address: Option<Address>,
}

impl Record {
    /// Creates a record holding only a name.
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
            email: None,
            address: None,
        }
    }

    /// Appends a phone. No deduplication.
    pub fn add_phone(&mut self, phone: Phone) {
        self.phones.push(phone);
    }

    /// Removes every phone whose value equals the target's value.
    ///
    /// A miss leaves the list unchanged; it is not an error.
    pub fn remove_phone(&mut self, target: &Phone) {
        self.phones.retain(|phone| phone.value() != target.value());
    }

    /// Replaces the birthday unconditionally.
    pub fn set_birthday(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }

    /// Replaces the email unconditionally.
    pub fn set_email(&mut self, email: Email) {
        self.email = Some(email);
    }

    /// Replaces the address unconditionally.
    pub fn set_address(&mut self, address: Address) {
        self.address = Some(address);
    }

    /// Days until the next occurrence of the birthday's month/day, counted
    /// from the local calendar date at call time.
    ///
    /// Returns `None` when no birthday is set. Returns 0 exactly on the
    /// birthday; never negative.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Same computation against an explicit `today`, for deterministic use.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        let birthday = self.birthday.as_ref()?.date();
        let next = next_occurrence(birthday, today);
        Some((next - today).num_days())
    }
}

/// Next calendar date on or after `today` carrying the birthday's month/day.
///
/// Rolls over to next year when this year's occurrence has already passed.
fn next_occurrence(birthday: NaiveDate, today: NaiveDate) -> NaiveDate {
    let this_year = observed_on(birthday, today.year());
    if this_year < today {
        observed_on(birthday, today.year() + 1)
    } else {
        this_year
    }
}

/// Projects the birthday's month/day into `year`.
///
/// Feb 29 is the only month/day without a counterpart in every year; in
/// common years it is observed on Mar 1.
fn observed_on(birthday: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, 3, 1).expect("Mar 1 exists in every year"))
}
