use chrono::{Duration, Local};
use homebook_core::{Birthday, Email, FieldError, Name, Phone};

#[test]
fn phone_accepts_the_three_valid_shapes() {
    assert_eq!(
        Phone::new("+123456789012").expect("plus with 12 digits").value(),
        "+123456789012"
    );
    assert_eq!(Phone::new("0501234567").expect("bare 10 digits").value(), "0501234567");
    assert_eq!(
        Phone::new("380501234567").expect("bare 12 digits").value(),
        "380501234567"
    );
}

#[test]
fn phone_rejects_everything_else() {
    for input in [
        "12345",
        "+1234567890",
        "+1234567890123",
        "05012345678",
        "050123456a",
        "050 123 4567",
        "",
    ] {
        assert_eq!(
            Phone::new(input).unwrap_err(),
            FieldError::PhoneInvalidFormat(input.to_string()),
            "input `{input}` must be rejected"
        );
    }
}

#[test]
fn phone_set_value_keeps_prior_value_on_rejection() {
    let mut phone = Phone::new("0501234567").expect("valid phone");
    let err = phone.set_value("12345").unwrap_err();
    assert!(matches!(err, FieldError::PhoneInvalidFormat(_)));
    assert_eq!(phone.value(), "0501234567");

    phone.set_value("+123456789012").expect("valid replacement");
    assert_eq!(phone.value(), "+123456789012");
}

#[test]
fn birthday_accepts_past_dates_only() {
    let today = Local::now().date_naive();
    let yesterday = today - Duration::days(1);
    let tomorrow = today + Duration::days(1);

    let birthday =
        Birthday::new(&yesterday.format("%Y-%m-%d").to_string()).expect("yesterday is past");
    assert_eq!(birthday.date(), yesterday);

    assert!(Birthday::new(&today.format("%Y-%m-%d").to_string()).is_err());
    assert!(Birthday::new(&tomorrow.format("%Y-%m-%d").to_string()).is_err());
}

#[test]
fn birthday_rejects_unparsable_values() {
    for input in ["not-a-date", "01-05-1990", "2020-13-40", "1990/05/01", ""] {
        assert_eq!(
            Birthday::new(input).unwrap_err(),
            FieldError::BirthdayInvalidFormat(input.to_string()),
            "input `{input}` must be rejected"
        );
    }
}

#[test]
fn birthday_set_value_keeps_prior_date_on_rejection() {
    let mut birthday = Birthday::new("1990-05-01").expect("valid birthday");
    assert!(birthday.set_value("3000-01-01").is_err());
    assert_eq!(birthday.to_string(), "1990-05-01");
}

#[test]
fn email_accepts_matching_values() {
    for input in ["ab@mail.com", "john.doe_1@example.org", "Xy@domain.info"] {
        assert!(Email::new(input).is_ok(), "input `{input}` must be accepted");
    }
}

#[test]
fn email_rejects_non_matching_values() {
    for input in [
        "1ab@mail.com",
        "a@mail.com",
        "ab@mail.c",
        "ab@ma1l.com",
        "plainaddress",
        "@mail.com",
        "",
    ] {
        assert_eq!(
            Email::new(input).unwrap_err(),
            FieldError::EmailInvalidFormat(input.to_string()),
            "input `{input}` must be rejected"
        );
    }
}

#[test]
fn email_pattern_is_anchored_at_start_only() {
    // Trailing garbage after a valid mailbox prefix passes the check.
    assert!(Email::new("ab@mail.com!!!").is_ok());
    assert!(Email::new("  ab@mail.com").is_err());
}

#[test]
fn email_set_value_keeps_prior_value_on_rejection() {
    let mut email = Email::new("ab@mail.com").expect("valid email");
    assert!(email.set_value("not-an-email").is_err());
    assert_eq!(email.value(), "ab@mail.com");
}

#[test]
fn name_and_address_accept_anything() {
    assert_eq!(Name::new("Alice Liddell").value(), "Alice Liddell");
    let mut name = Name::new("");
    name.set_value("Bob");
    assert_eq!(name.value(), "Bob");
}

#[test]
fn fields_serialize_as_plain_strings_and_revalidate_on_decode() {
    let phone = Phone::new("+123456789012").expect("valid phone");
    assert_eq!(
        serde_json::to_value(&phone).expect("phone encodes"),
        serde_json::json!("+123456789012")
    );

    let birthday = Birthday::new("1990-05-01").expect("valid birthday");
    assert_eq!(
        serde_json::to_value(birthday).expect("birthday encodes"),
        serde_json::json!("1990-05-01")
    );

    assert!(serde_json::from_value::<Phone>(serde_json::json!("12345")).is_err());
    assert!(serde_json::from_value::<Birthday>(serde_json::json!("3000-01-01")).is_err());
    assert!(serde_json::from_value::<Email>(serde_json::json!("nope")).is_err());
}
