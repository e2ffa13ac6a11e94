use contactbook_core::{Birthday, Contact, ContactError, Phone};

#[test]
fn contact_new_has_no_phones_or_birthday() {
    let contact = Contact::new("Alice");

    assert_eq!(contact.name(), "Alice");
    assert!(contact.phones().is_empty());
    assert!(contact.first_phone().is_none());
    assert!(contact.birthday().is_none());
}

#[test]
fn every_ten_digit_string_is_accepted() {
    for raw in ["0000000000", "0991234567", "9999999999", "1234567890"] {
        let phone = Phone::parse(raw).unwrap();
        assert_eq!(phone.as_str(), raw);
    }
}

#[test]
fn invalid_phone_is_rejected_and_record_not_created() {
    for raw in ["12345", "099-123-456", "09912345678", "abcdefghij"] {
        let err = Contact::with_phone("Alice", raw).unwrap_err();
        assert_eq!(err, ContactError::InvalidPhoneFormat(raw.to_string()));
    }
}

#[test]
fn duplicate_phone_on_same_contact_is_rejected() {
    let mut contact = Contact::with_phone("Alice", "0991234567").unwrap();

    let err = contact.add_phone("0991234567").unwrap_err();
    assert_eq!(err, ContactError::DuplicatePhone("0991234567".to_string()));
    assert_eq!(contact.phones().len(), 1);
}

#[test]
fn remove_phone_drops_matches_and_ignores_absent_values() {
    let mut contact = Contact::with_phone("Alice", "0991234567").unwrap();
    contact.add_phone("0501112233").unwrap();

    assert_eq!(contact.remove_phone("0000000000"), 0);
    assert_eq!(contact.remove_phone("0991234567"), 1);
    assert_eq!(contact.first_phone().unwrap().as_str(), "0501112233");
}

#[test]
fn edit_missing_phone_reports_not_found_without_mutation() {
    let mut contact = Contact::with_phone("Alice", "0991234567").unwrap();
    let before = contact.clone();

    assert!(!contact.edit_phone("0501112233", "0677654321").unwrap());
    assert_eq!(contact, before);
}

#[test]
fn edit_validates_new_phone() {
    let mut contact = Contact::with_phone("Alice", "0991234567").unwrap();

    let err = contact.edit_phone("0991234567", "12").unwrap_err();
    assert_eq!(err, ContactError::InvalidPhoneFormat("12".to_string()));
    assert_eq!(contact.first_phone().unwrap().as_str(), "0991234567");
}

#[test]
fn birthday_overwrites_previous_value() {
    let mut contact = Contact::new("Bob");
    contact.set_birthday("01.01.2000").unwrap();
    contact.set_birthday("15.08.1985").unwrap();

    assert_eq!(
        contact.birthday().copied(),
        Some(Birthday::parse("15.08.1985").unwrap())
    );
}

#[test]
fn contact_serialization_uses_expected_wire_fields() {
    let mut contact = Contact::with_phone("Alice", "0991234567").unwrap();
    contact.add_phone("0501112233").unwrap();
    contact.set_birthday("12.06.1990").unwrap();

    let json = serde_json::to_value(&contact).unwrap();
    assert_eq!(json["name"], "Alice");
    assert_eq!(json["phones"], serde_json::json!(["0991234567", "0501112233"]));
    assert_eq!(json["birthday"], "12.06.1990");

    let decoded: Contact = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, contact);
}

#[test]
fn deserialize_rejects_invalid_phone_and_duplicates() {
    let bad_format = serde_json::json!({
        "name": "Alice",
        "phones": ["123"],
        "birthday": null
    });
    let err = serde_json::from_value::<Contact>(bad_format).unwrap_err();
    assert!(
        err.to_string().contains("must consist of 10 digits"),
        "unexpected error: {err}"
    );

    let duplicated = serde_json::json!({
        "name": "Alice",
        "phones": ["0991234567", "0991234567"]
    });
    let err = serde_json::from_value::<Contact>(duplicated).unwrap_err();
    assert!(
        err.to_string().contains("already exists"),
        "unexpected error: {err}"
    );
}

#[test]
fn deserialize_rejects_malformed_birthday() {
    let value = serde_json::json!({
        "name": "Bob",
        "phones": [],
        "birthday": "2000-01-01"
    });
    let err = serde_json::from_value::<Contact>(value).unwrap_err();
    assert!(err.to_string().contains("DD.MM.YYYY"), "unexpected error: {err}");
}
