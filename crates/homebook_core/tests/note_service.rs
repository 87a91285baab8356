use homebook_core::{FieldError, Note, NoteBook, NoteService, NoteServiceError};

fn service() -> NoteService {
    NoteService::new(NoteBook::new("unused.json"))
}

#[test]
fn add_note_normalizes_tags_and_keeps_text_as_given() {
    let mut notes = service();
    let stored = notes
        .add_note(
            "  Buy Milk  ",
            &[
                "Shopping".to_string(),
                "URGENT".to_string(),
                "shopping".to_string(),
                " ".to_string(),
            ],
            Some("groceries".to_string()),
        )
        .expect("valid note");

    assert_eq!(stored.text, "  Buy Milk  ");
    assert_eq!(stored.tags, vec!["shopping".to_string(), "urgent".to_string()]);
    assert_eq!(stored.title.as_deref(), Some("groceries"));
    assert_eq!(notes.all().len(), 1);
}

#[test]
fn add_note_rejects_blank_text() {
    let mut notes = service();
    let err = notes.add_note("   ", &[], None).unwrap_err();
    assert!(matches!(
        err,
        NoteServiceError::Field(FieldError::NoteInputInvalidFormat(_))
    ));
    assert!(notes.all().is_empty());
}

#[test]
fn remove_note_takes_one_structural_match_per_call() {
    let mut notes = service();
    let stored = notes.add_note("buy milk", &[], None).expect("first copy");
    notes.add_note("buy milk", &[], None).expect("second copy");

    notes.remove_note(&stored).expect("first removal");
    assert_eq!(notes.all().len(), 1);
    notes.remove_note(&stored).expect("second removal");

    let err = notes.remove_note(&stored).unwrap_err();
    assert!(matches!(err, NoteServiceError::NoteNotFound));
}

#[test]
fn removing_a_never_added_note_fails() {
    let mut notes = service();
    notes.add_note("buy milk", &[], None).expect("stored note");

    let ghost = Note::new("was never added");
    let err = notes.remove_note(&ghost).unwrap_err();
    assert!(matches!(err, NoteServiceError::NoteNotFound));
    assert_eq!(notes.all().len(), 1);
}

#[test]
fn search_covers_text_and_title() {
    let mut notes = service();
    notes
        .add_note("buy milk", &[], Some("Groceries".to_string()))
        .expect("titled note");
    notes.add_note("call the plumber", &[], None).expect("plain note");

    assert_eq!(notes.search("MILK").len(), 1);
    assert_eq!(notes.search("groceries").len(), 1);
    assert_eq!(notes.search("plumber").len(), 1);
    assert!(notes.search("dentist").is_empty());
}

#[test]
fn find_by_tag_matches_case_insensitively() {
    let mut notes = service();
    notes
        .add_note("buy milk", &["Shopping".to_string()], None)
        .expect("tagged note");
    notes.add_note("call the plumber", &[], None).expect("untagged note");

    assert_eq!(notes.find_by_tag("SHOPPING").len(), 1);
    assert_eq!(notes.find_by_tag("shopping").len(), 1);
    assert!(notes.find_by_tag("work").is_empty());
}

#[test]
fn notes_round_trip_through_the_backing_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("notes.json");

    let mut notes = NoteService::new(NoteBook::new(&path));
    notes
        .add_note("buy milk", &["shopping".to_string()], None)
        .expect("first note");
    notes.add_note("call the plumber", &[], None).expect("second note");
    notes.save().expect("save");

    let mut reloaded = NoteService::new(NoteBook::new(&path));
    reloaded.load().expect("load");
    assert_eq!(reloaded.book().len(), 2);
    assert_eq!(reloaded.all(), notes.all());
}
