//! Contact use-case service.
//!
//! # Responsibility
//! - Convert raw string input into validated fields and apply them to the
//!   owned address book.
//! - Provide the read surface behind the shell's search/view/congratulate
//!   verbs.
//!
//! # Invariants
//! - Mutations touch memory only; the caller decides when to save.
//! - Field rejections surface unchanged; nothing is retried or corrected.

use crate::book::{AddressBook, BookError, BookResult, Persistent};
use crate::model::field::{Address, Birthday, Email, FieldError, Name, Phone};
use crate::model::record::Record;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ContactResult<T> = Result<T, ContactServiceError>;

/// Service error for contact use-cases.
#[derive(Debug)]
pub enum ContactServiceError {
    /// Edit target does not exist in the book.
    ContactNotFound(String),
    /// Input failed field validation.
    Field(FieldError),
    /// Snapshot load/save failure.
    Book(BookError),
}

impl Display for ContactServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ContactNotFound(name) => write!(f, "contact not found: `{name}`"),
            Self::Field(err) => write!(f, "{err}"),
            Self::Book(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ContactServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ContactNotFound(_) => None,
            Self::Field(err) => Some(err),
            Self::Book(err) => Some(err),
        }
    }
}

impl From<FieldError> for ContactServiceError {
    fn from(value: FieldError) -> Self {
        Self::Field(value)
    }
}

impl From<BookError> for ContactServiceError {
    fn from(value: BookError) -> Self {
        Self::Book(value)
    }
}

/// One upcoming-birthday row for the congratulate verb.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthdayReminder {
    pub name: String,
    pub days_left: i64,
}

/// Contact service facade over an owned address book.
pub struct ContactService {
    book: AddressBook,
}

impl ContactService {
    pub fn new(book: AddressBook) -> Self {
        Self { book }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Reads persisted contacts into the book.
    ///
    /// # Errors
    /// Propagates storage failures; a corrupt file is fatal for the call.
    pub fn load(&mut self) -> BookResult<()> {
        self.book.load()?;
        info!(
            "event=contacts_load module=service status=ok count={}",
            self.book.len()
        );
        Ok(())
    }

    /// Writes the book to its backing file.
    ///
    /// # Errors
    /// Propagates storage failures.
    pub fn save(&self) -> BookResult<()> {
        self.book.save()?;
        info!(
            "event=contacts_save module=service status=ok count={}",
            self.book.len()
        );
        Ok(())
    }

    /// Adds a contact keyed by its name, validating every supplied field.
    ///
    /// An existing contact under the same name is overwritten.
    ///
    /// # Errors
    /// Returns the first field rejection; the book is untouched on failure.
    pub fn add_contact(
        &mut self,
        name: &str,
        phone: Option<&str>,
        birthday: Option<&str>,
        email: Option<&str>,
        address: Option<&str>,
    ) -> ContactResult<()> {
        let mut record = Record::new(Name::new(name));
        if let Some(value) = phone {
            record.add_phone(Phone::new(value)?);
        }
        if let Some(value) = birthday {
            record.set_birthday(Birthday::new(value)?);
        }
        if let Some(value) = email {
            record.set_email(Email::new(value)?);
        }
        if let Some(value) = address {
            record.set_address(Address::new(value));
        }

        self.book.add_record(name, record);
        info!("event=contact_add module=service status=ok name={name}");
        Ok(())
    }

    /// Removes a contact. A missing name is a silent no-op.
    pub fn remove_contact(&mut self, name: &str) {
        self.book.remove_record(name);
        info!("event=contact_remove module=service status=ok name={name}");
    }

    /// Appends a validated phone to an existing contact.
    ///
    /// # Errors
    /// Rejects invalid phone input; fails when the contact does not exist.
    pub fn add_phone(&mut self, name: &str, phone: &str) -> ContactResult<()> {
        let phone = Phone::new(phone)?;
        let record = self.edit_target(name)?;
        record.add_phone(phone);
        Ok(())
    }

    /// Removes every phone value-equal to `phone` from an existing contact.
    ///
    /// The phone must itself be well-formed; a value-miss inside the record
    /// is not an error.
    ///
    /// # Errors
    /// Rejects invalid phone input; fails when the contact does not exist.
    pub fn remove_phone(&mut self, name: &str, phone: &str) -> ContactResult<()> {
        let phone = Phone::new(phone)?;
        let record = self.edit_target(name)?;
        record.remove_phone(&phone);
        Ok(())
    }

    /// Replaces the birthday of an existing contact.
    ///
    /// # Errors
    /// Rejects invalid input; fails when the contact does not exist.
    pub fn set_birthday(&mut self, name: &str, value: &str) -> ContactResult<()> {
        let birthday = Birthday::new(value)?;
        let record = self.edit_target(name)?;
        record.set_birthday(birthday);
        Ok(())
    }

    /// Replaces the email of an existing contact.
    ///
    /// # Errors
    /// Rejects invalid input; fails when the contact does not exist.
    pub fn set_email(&mut self, name: &str, value: &str) -> ContactResult<()> {
        let email = Email::new(value)?;
        let record = self.edit_target(name)?;
        record.set_email(email);
        Ok(())
    }

    /// Replaces the address of an existing contact.
    ///
    /// # Errors
    /// Fails when the contact does not exist.
    pub fn set_address(&mut self, name: &str, value: &str) -> ContactResult<()> {
        let address = Address::new(value);
        let record = self.edit_target(name)?;
        record.set_address(address);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Record> {
        self.book.get(name)
    }

    /// Case-insensitive substring search over name, phone values and email.
    pub fn search(&self, query: &str) -> Vec<(&str, &Record)> {
        let needle = query.to_lowercase();
        self.book
            .iter()
            .filter(|(key, record)| record_matches(key, record, &needle))
            .collect()
    }

    /// All contacts, sorted by name.
    pub fn all(&self) -> Vec<(&str, &Record)> {
        self.book.iter().collect()
    }

    /// Contacts whose birthday occurs within the next `within_days` days,
    /// sorted by distance then name. Day 0 is today.
    pub fn congratulate(&self, within_days: i64) -> Vec<BirthdayReminder> {
        let mut reminders: Vec<BirthdayReminder> = self
            .book
            .iter()
            .filter_map(|(key, record)| {
                let days_left = record.days_to_birthday()?;
                (days_left <= within_days).then(|| BirthdayReminder {
                    name: key.to_string(),
                    days_left,
                })
            })
            .collect();
        reminders.sort_by(|a, b| a.days_left.cmp(&b.days_left).then(a.name.cmp(&b.name)));
        reminders
    }

    fn edit_target(&mut self, name: &str) -> ContactResult<&mut Record> {
        self.book
            .get_mut(name)
            .ok_or_else(|| ContactServiceError::ContactNotFound(name.to_string()))
    }
}

fn record_matches(key: &str, record: &Record, needle: &str) -> bool {
    if key.to_lowercase().contains(needle) {
        return true;
    }
    if record
        .phones
        .iter()
        .any(|phone| phone.value().contains(needle))
    {
        return true;
    }
    record
        .email
        .as_ref()
        .is_some_and(|email| email.value().to_lowercase().contains(needle))
}
