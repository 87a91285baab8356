use chrono::NaiveDate;
use homebook_core::{Address, Birthday, Email, Name, Phone, Record};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

fn record_with_birthday(value: &str) -> Record {
    let mut record = Record::new(Name::new("Alice"));
    record.set_birthday(Birthday::new(value).expect("valid birthday"));
    record
}

#[test]
fn days_to_birthday_is_none_without_a_birthday() {
    let record = Record::new(Name::new("Alice"));
    assert_eq!(record.days_to_birthday(), None);
    assert_eq!(record.days_to_birthday_from(date(2026, 8, 6)), None);
}

#[test]
fn days_to_birthday_is_zero_on_the_day_itself() {
    let record = record_with_birthday("1990-05-01");
    assert_eq!(record.days_to_birthday_from(date(2026, 5, 1)), Some(0));
}

#[test]
fn days_to_birthday_counts_down_approaching_the_date() {
    let record = record_with_birthday("1990-05-01");
    assert_eq!(record.days_to_birthday_from(date(2026, 4, 28)), Some(3));
    assert_eq!(record.days_to_birthday_from(date(2026, 4, 29)), Some(2));
    assert_eq!(record.days_to_birthday_from(date(2026, 4, 30)), Some(1));
}

#[test]
fn days_to_birthday_rolls_over_once_the_date_has_passed() {
    let record = record_with_birthday("1990-05-01");
    // 2026-05-02 -> 2027-05-01, with no leap day in between.
    assert_eq!(record.days_to_birthday_from(date(2026, 5, 2)), Some(364));
}

#[test]
fn leap_day_birthday_is_observed_on_march_first_in_common_years() {
    let record = record_with_birthday("2000-02-29");
    assert_eq!(record.days_to_birthday_from(date(2026, 2, 27)), Some(2));
    assert_eq!(record.days_to_birthday_from(date(2026, 3, 1)), Some(0));
    assert_eq!(record.days_to_birthday_from(date(2024, 2, 27)), Some(2));
}

#[test]
fn add_phone_keeps_order_and_allows_duplicates() {
    let mut record = Record::new(Name::new("Alice"));
    let first = Phone::new("0501234567").expect("valid phone");
    let second = Phone::new("+123456789012").expect("valid phone");
    record.add_phone(first.clone());
    record.add_phone(second);
    record.add_phone(first);

    let values: Vec<&str> = record.phones.iter().map(Phone::value).collect();
    assert_eq!(values, vec!["0501234567", "+123456789012", "0501234567"]);
}

#[test]
fn remove_phone_erases_every_value_equal_match() {
    let mut record = Record::new(Name::new("Alice"));
    let duplicated = Phone::new("0501234567").expect("valid phone");
    let kept = Phone::new("380501234567").expect("valid phone");
    record.add_phone(duplicated.clone());
    record.add_phone(kept);
    record.add_phone(duplicated.clone());

    record.remove_phone(&duplicated);
    let values: Vec<&str> = record.phones.iter().map(Phone::value).collect();
    assert_eq!(values, vec!["380501234567"]);
}

#[test]
fn remove_phone_miss_leaves_the_record_unchanged() {
    let mut record = Record::new(Name::new("Alice"));
    record.add_phone(Phone::new("0501234567").expect("valid phone"));

    record.remove_phone(&Phone::new("9999999999").expect("valid phone"));
    assert_eq!(record.phones.len(), 1);
}

#[test]
fn optional_field_setters_are_last_write_wins() {
    let mut record = Record::new(Name::new("Alice"));
    record.set_email(Email::new("first@mail.com").expect("valid email"));
    record.set_email(Email::new("second@mail.com").expect("valid email"));
    record.set_address(Address::new("Old Street 1"));
    record.set_address(Address::new("New Street 2"));

    assert_eq!(record.email.as_ref().map(Email::value), Some("second@mail.com"));
    assert_eq!(
        record.address.as_ref().map(Address::value),
        Some("New Street 2")
    );
}
