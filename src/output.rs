use std::sync::atomic::{AtomicBool, Ordering};

use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use crate::types::UserDto;

static OUTPUT_JSON: AtomicBool = AtomicBool::new(false);
static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set_json_output(json: bool) {
    OUTPUT_JSON.store(json, Ordering::Relaxed);
}

pub fn is_json_output() -> bool {
    OUTPUT_JSON.load(Ordering::Relaxed)
}

pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

pub fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Print a single item or JSON depending on output mode
pub fn print_item<T: Serialize>(item: &T, display: impl FnOnce(&T)) {
    if is_json_output() {
        println!("{}", serde_json::to_string_pretty(item).unwrap_or_default());
    } else {
        display(item);
    }
}

/// Print a success message (suppressed by --quiet)
pub fn print_message(message: &str) {
    if is_quiet() {
        return;
    }
    print_message_always(message);
}

/// Print a message regardless of --quiet; used for failure reports
pub fn print_message_always(message: &str) {
    if is_json_output() {
        println!("{}", serde_json::json!({ "message": message }));
    } else {
        println!("{message}");
    }
}

/// Render the status line shown for a user
pub fn status_colored(message: &str, active: bool) -> String {
    if active {
        message.green().to_string()
    } else {
        message.red().to_string()
    }
}

#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "Field")]
    field: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

/// Detail view of one user record
pub fn user_table(user: &UserDto) -> String {
    let rows = vec![
        FieldRow {
            field: "ID",
            value: user.id.to_string(),
        },
        FieldRow {
            field: "Name",
            value: user.name.clone(),
        },
        FieldRow {
            field: "Email",
            value: user.email.clone(),
        },
        FieldRow {
            field: "Active",
            value: status_colored(if user.is_active { "yes" } else { "no" }, user.is_active),
        },
    ];
    Table::new(rows).with(Style::rounded()).to_string()
}
