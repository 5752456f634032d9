//! Some utility functions

use std::io::{stdin, stdout, Read, Write};

use crate::traits::AppointmentSource;
use crate::todo::TodoItem;

/// A debug utility that pretty-prints every appointment of a source
pub fn print_appointments<S: AppointmentSource + ?Sized>(source: &S) {
    for (appt, props) in source.with_properties() {
        let kind = if props.is_event { "E" } else { "T" };
        let completion = if props.is_completed { "✓" } else { " " };
        let when = if props.has_date {
            format!("{} → {}", appt.start().format("%Y-%m-%d %H:%M"), appt.end().format("%Y-%m-%d %H:%M"))
        } else {
            "(no date)".to_string()
        };
        println!("    {}{} {}\t{}\t{}\t{}", kind, completion, appt.subject(), when, appt.background(), appt.id());
    }
}

/// A debug utility that pretty-prints a todo list
pub fn print_todo_items(items: &[TodoItem]) {
    for item in items {
        let completion = if item.is_completed { "✓" } else { " " };
        println!("    [{}] {}\t{}\t{}", completion, item.subject, item.date_time_info(), item.appointment_id);
    }
}

/// Wait for the user to press enter (used by the demos)
pub fn pause() {
    let mut out = stdout();
    let _ = out.write_all(b"Press Enter to continue...");
    let _ = out.flush();
    let _ = stdin().read(&mut [0]);
}
