//! Interactive shell for homebook.
//!
//! # Responsibility
//! - Read command lines, dispatch them to core services, print results.
//! - Save the affected book after every mutating verb.
//!
//! All invariants live in `homebook_core`; this binary only parses and
//! prints.

use homebook_core::{
    default_log_level, init_logging, AddressBook, ContactService, Note, NoteBook, NoteService,
    Record,
};
use log::info;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

const CONTACTS_FILE: &str = "contacts.json";
const NOTES_FILE: &str = "notes.json";
const DEFAULT_DATA_DIR: &str = "homebook-data";
const DEFAULT_CONGRATULATE_DAYS: i64 = 7;

const HELP: &str = "\
Contacts:
  add <name> [phone]             add a contact (overwrites an existing name)
  phone <name> <phone>           add a phone to a contact
  unphone <name> <phone>         remove a phone value from a contact
  edit <name> birthday <date>    set birthday (YYYY-MM-DD, past)
  edit <name> email <email>      set email
  edit <name> address <text...>  set address
  remove <name>                  remove a contact
  search <query>                 search name/phone/email
  view                           list all contacts
  congratulate [days]            birthdays within the next days (default 7)
Notes:
  note-add <text...>             add a note; words starting with # become tags
  note-remove <index>            remove the note listed at <index>
  note-search <query>            search note text and titles
  note-tag <tag>                 list notes carrying a tag
  note-view                      list all notes
General:
  save | load | help | exit";

fn main() -> ExitCode {
    let data_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));
    if let Err(err) = std::fs::create_dir_all(&data_dir) {
        eprintln!(
            "failed to create data directory `{}`: {err}",
            data_dir.display()
        );
        return ExitCode::FAILURE;
    }
    if let Err(err) = init_logging(default_log_level(), &data_dir.join("logs")) {
        eprintln!("warning: logging disabled: {err}");
    }

    let mut contacts = ContactService::new(AddressBook::new(data_dir.join(CONTACTS_FILE)));
    let mut notes = NoteService::new(NoteBook::new(data_dir.join(NOTES_FILE)));
    if let Err(err) = contacts.load() {
        eprintln!("failed to load contacts: {err}");
        return ExitCode::FAILURE;
    }
    if let Err(err) = notes.load() {
        eprintln!("failed to load notes: {err}");
        return ExitCode::FAILURE;
    }
    info!(
        "event=shell_start module=cli status=ok data_dir={} version={}",
        data_dir.display(),
        env!("CARGO_PKG_VERSION")
    );

    println!("Hello. I am your contact assistant. Type `help` for commands.");
    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                eprintln!("failed to read input: {err}");
                break;
            }
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "exit" {
            break;
        }
        dispatch(line, &mut contacts, &mut notes);
    }
    ExitCode::SUCCESS
}

fn dispatch(line: &str, contacts: &mut ContactService, notes: &mut NoteService) {
    let mut parts = line.split_whitespace();
    let verb = parts.next().unwrap_or_default();
    let args: Vec<&str> = parts.collect();

    match verb {
        "help" => println!("{HELP}"),
        "add" | "phone" | "unphone" | "edit" | "remove" | "search" | "view" | "congratulate"
        | "save" | "load" => contact_command(verb, &args, contacts),
        "note-add" | "note-remove" | "note-search" | "note-tag" | "note-view" => {
            note_command(verb, &args, notes);
        }
        other => println!("unknown command `{other}`; type `help` for the list"),
    }
}

fn contact_command(verb: &str, args: &[&str], contacts: &mut ContactService) {
    let mutated = match (verb, args) {
        ("add", [name, rest @ ..]) => {
            report(contacts.add_contact(name, rest.first().copied(), None, None, None))
        }
        ("phone", [name, phone]) => report(contacts.add_phone(name, phone)),
        ("unphone", [name, phone]) => report(contacts.remove_phone(name, phone)),
        ("edit", [name, "birthday", value]) => report(contacts.set_birthday(name, value)),
        ("edit", [name, "email", value]) => report(contacts.set_email(name, value)),
        ("edit", [name, "address", rest @ ..]) if !rest.is_empty() => {
            report(contacts.set_address(name, &rest.join(" ")))
        }
        ("remove", [name]) => {
            contacts.remove_contact(name);
            true
        }
        ("search", [query]) => {
            for (key, record) in contacts.search(query) {
                print_record(key, record);
            }
            false
        }
        ("view", []) => {
            for (key, record) in contacts.all() {
                print_record(key, record);
            }
            false
        }
        ("congratulate", rest) => {
            let Ok(days) = rest
                .first()
                .map_or(Ok(DEFAULT_CONGRATULATE_DAYS), |value| value.parse())
            else {
                println!("congratulate takes a day count, e.g. `congratulate 7`");
                return;
            };
            for reminder in contacts.congratulate(days) {
                println!("{}: {} day(s) left", reminder.name, reminder.days_left);
            }
            false
        }
        ("save", []) => {
            report(contacts.save());
            false
        }
        ("load", []) => {
            report(contacts.load());
            false
        }
        _ => {
            println!("usage error; type `help` for the list");
            return;
        }
    };

    if mutated {
        report(contacts.save());
    }
}

fn note_command(verb: &str, args: &[&str], notes: &mut NoteService) {
    let mutated = match (verb, args) {
        ("note-add", words) if !words.is_empty() => {
            let (tags, text): (Vec<&str>, Vec<&str>) = words
                .iter()
                .copied()
                .partition(|word| word.starts_with('#'));
            let tags: Vec<String> = tags
                .iter()
                .map(|tag| tag.trim_start_matches('#').to_string())
                .collect();
            report(notes.add_note(&text.join(" "), &tags, None))
        }
        ("note-remove", [index]) => {
            let Ok(index) = index.parse::<usize>() else {
                println!("note-remove takes the index shown by note-view");
                return;
            };
            let Some(target) = notes.all().get(index).copied().cloned() else {
                println!("no note at index {index}");
                return;
            };
            report(notes.remove_note(&target))
        }
        ("note-search", [query]) => {
            for note in notes.search(query) {
                print_note(None, note);
            }
            false
        }
        ("note-tag", [tag]) => {
            for note in notes.find_by_tag(tag) {
                print_note(None, note);
            }
            false
        }
        ("note-view", []) => {
            for (index, note) in notes.all().into_iter().enumerate() {
                print_note(Some(index), note);
            }
            false
        }
        _ => {
            println!("usage error; type `help` for the list");
            return;
        }
    };

    if mutated {
        report(notes.save());
    }
}

/// Prints an error and reports whether the operation succeeded.
fn report<T, E: std::fmt::Display>(result: Result<T, E>) -> bool {
    match result {
        Ok(_) => true,
        Err(err) => {
            println!("{err}");
            false
        }
    }
}

fn print_record(key: &str, record: &Record) {
    let mut line = key.to_string();
    if !record.phones.is_empty() {
        let phones: Vec<&str> = record.phones.iter().map(|phone| phone.value()).collect();
        line.push_str(&format!("  phones: {}", phones.join(", ")));
    }
    if let Some(birthday) = &record.birthday {
        line.push_str(&format!("  birthday: {birthday}"));
        if let Some(days) = record.days_to_birthday() {
            line.push_str(&format!(" ({days} day(s) left)"));
        }
    }
    if let Some(email) = &record.email {
        line.push_str(&format!("  email: {email}"));
    }
    if let Some(address) = &record.address {
        line.push_str(&format!("  address: {}", address.value()));
    }
    println!("{line}");
}

fn print_note(index: Option<usize>, note: &Note) {
    let mut line = String::new();
    if let Some(index) = index {
        line.push_str(&format!("[{index}] "));
    }
    if let Some(title) = &note.title {
        line.push_str(&format!("{title}: "));
    }
    line.push_str(&note.text);
    if !note.tags.is_empty() {
        line.push_str(&format!("  #{}", note.tags.join(" #")));
    }
    println!("{line}");
}
