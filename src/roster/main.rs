use colored::*;
use directories::ProjectDirs;
use roster::api::RosterApi;
use roster::commands::{CmdMessage, MessageLevel};
use roster::config::RosterConfig;
use roster::error::{Result, RosterError};
use roster::model::Record;
use roster::store::fs::FileStore;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut api = init_api()?;
    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        print_menu();
        let choice = match read_line(&mut input, "Enter your choice (1-5): ")? {
            Some(line) => line,
            // EOF behaves like Exit so piped input terminates cleanly.
            None => break,
        };

        match choice.as_str() {
            "1" => handle_add(&mut api, &mut input)?,
            "2" => handle_list(&api)?,
            "3" => handle_search(&api, &mut input)?,
            "4" => handle_delete(&mut api, &mut input)?,
            "5" => {
                println!("Exiting. Goodbye!");
                break;
            }
            _ => println!("Invalid choice. Please enter a number between 1 and 5."),
        }
    }

    Ok(())
}

fn init_api() -> Result<RosterApi<FileStore>> {
    let data_dir = resolve_data_dir()?;
    let config = RosterConfig::load(&data_dir).unwrap_or_default();
    let store = FileStore::new(data_dir.join(config.get_data_file()));
    Ok(RosterApi::new(store))
}

fn resolve_data_dir() -> Result<PathBuf> {
    // ROSTER_DATA overrides the platform data dir; the e2e tests rely on it.
    if let Ok(dir) = std::env::var("ROSTER_DATA") {
        return Ok(PathBuf::from(dir));
    }

    let proj_dirs = ProjectDirs::from("com", "roster", "roster")
        .ok_or_else(|| RosterError::Store("Could not determine data directory".to_string()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

fn print_menu() {
    println!("\nStudent Management System");
    println!("1. Add student");
    println!("2. View all students");
    println!("3. Search student by name");
    println!("4. Delete student");
    println!("5. Exit");
}

/// Prompt and read one trimmed line. `None` means stdin hit EOF.
fn read_line<R: BufRead>(input: &mut R, prompt: &str) -> Result<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush().map_err(RosterError::Io)?;

    let mut line = String::new();
    let n = input.read_line(&mut line).map_err(RosterError::Io)?;
    if n == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn handle_add<R: BufRead>(api: &mut RosterApi<FileStore>, input: &mut R) -> Result<()> {
    println!("\nAdd New Student");
    let Some(name) = read_line(input, "Enter name: ")? else {
        return Ok(());
    };
    let Some(age) = read_line(input, "Enter age: ")? else {
        return Ok(());
    };
    let Some(id) = read_line(input, "Enter student ID: ")? else {
        return Ok(());
    };

    let result = api.add_record(&name, &age, &id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(api: &RosterApi<FileStore>) -> Result<()> {
    let result = api.list_records()?;
    if !result.listed_records.is_empty() {
        print_table(&result.listed_records);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_search<R: BufRead>(api: &RosterApi<FileStore>, input: &mut R) -> Result<()> {
    let Some(term) = read_line(input, "\nEnter name to search: ")? else {
        return Ok(());
    };

    let result = api.search_records(&term)?;
    print_messages(&result.messages);
    for record in &result.listed_records {
        println!("- {} (Age: {}, ID: {})", record.name, record.age, record.id);
    }
    Ok(())
}

fn handle_delete<R: BufRead>(api: &mut RosterApi<FileStore>, input: &mut R) -> Result<()> {
    let Some(id) = read_line(input, "\nEnter student ID to delete: ")? else {
        return Ok(());
    };

    let result = api.delete_record(&id)?;
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const NAME_WIDTH: usize = 25;
const AGE_WIDTH: usize = 6;
const ID_WIDTH: usize = 10;
const RULE_WIDTH: usize = 45;

fn print_table(records: &[Record]) {
    println!("\nAll Students:");
    println!(
        "{} {} {}",
        pad_to_width("Name", NAME_WIDTH),
        pad_to_width("Age", AGE_WIDTH),
        pad_to_width("ID", ID_WIDTH)
    );
    println!("{}", "-".repeat(RULE_WIDTH));
    for record in records {
        println!(
            "{} {} {}",
            pad_to_width(&record.name, NAME_WIDTH),
            pad_to_width(&record.age, AGE_WIDTH),
            pad_to_width(&record.id, ID_WIDTH)
        );
    }
}

/// Pad with spaces up to a display width; wider values are left as-is.
fn pad_to_width(s: &str, width: usize) -> String {
    let current = s.width();
    if current >= width {
        return s.to_string();
    }
    format!("{}{}", s, " ".repeat(width - current))
}
