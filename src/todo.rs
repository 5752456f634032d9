//! The todo list: a task-only view of the appointment store, and its persisted mirror

use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::appointment::Appointment;
use crate::item::{ItemId, Properties};
use crate::record::deserialize_local_date_time;
use crate::traits::AppointmentSource;

fn default_true() -> bool {
    true
}

/// An entry of the todo list
///
/// This is derived from an appointment that is not an event, and only refers to it by its ID
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TodoItem {
    pub appointment_id: ItemId,
    #[serde(default)]
    pub subject: String,
    #[serde(deserialize_with = "deserialize_local_date_time")]
    pub start_time: NaiveDateTime,
    #[serde(deserialize_with = "deserialize_local_date_time")]
    pub end_time: NaiveDateTime,
    #[serde(default = "default_true")]
    pub has_date: bool,
    #[serde(default)]
    pub is_event: bool,
    #[serde(default)]
    pub is_completed: bool,
}

impl TodoItem {
    pub fn from_appointment(appointment: &Appointment, properties: Properties) -> Self {
        Self {
            appointment_id: *appointment.id(),
            subject: appointment.subject().to_string(),
            start_time: *appointment.start(),
            end_time: *appointment.end(),
            has_date: properties.has_date,
            is_event: properties.is_event,
            is_completed: properties.is_completed,
        }
    }

    /// Refresh the subject and times from the appointment this item was derived from.
    ///
    /// The Coordinator rebuilds the whole list after every change, so this is meant for UI code that keeps its own
    /// `TodoItem`s around, e.g. to update one of them when it receives a [`Change::Updated`](crate::Change::Updated)
    /// instead of reloading the list. Flags are left untouched
    pub fn update_from_appointment(&mut self, appointment: &Appointment) {
        self.subject = appointment.subject().to_string();
        self.start_time = *appointment.start();
        self.end_time = *appointment.end();
    }

    /// A short human-readable description of when this item is due
    pub fn date_time_info(&self) -> String {
        if self.has_date == false {
            return "No date".to_string();
        }
        format!("{} - {}", self.start_time.format("%d/%m/%Y %H:%M"), self.end_time.format("%H:%M"))
    }
}



/// Flags to tell which todo items should be listed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TodoFilter {
    /// Return all items
    All,
    /// Return only items that are not completed yet
    Active,
    /// Return only completed items
    Completed,
}

impl Default for TodoFilter {
    fn default() -> Self {
        TodoFilter::All
    }
}

impl TodoFilter {
    pub fn matches(&self, item: &TodoItem) -> bool {
        match self {
            TodoFilter::All => true,
            TodoFilter::Active => item.is_completed == false,
            TodoFilter::Completed => item.is_completed,
        }
    }

    /// Keep only the items that match this filter
    pub fn apply(&self, items: Vec<TodoItem>) -> Vec<TodoItem> {
        items.into_iter()
            .filter(|item| self.matches(item))
            .collect()
    }
}



/// Builds the todo list, and stores a copy of it in its own file
///
/// Failing to read or write this file is never an error: it is logged, and the todo list is considered empty
/// (or left unsaved).
#[derive(Debug, Clone)]
pub struct TodoProjection {
    backing_file: PathBuf,
}

impl TodoProjection {
    pub fn new(path: &Path) -> Self {
        Self { backing_file: PathBuf::from(path) }
    }

    /// The path to the backing file
    pub fn backing_file(&self) -> &Path {
        &self.backing_file
    }

    /// Returns a todo item for every appointment of `source` that is not an event, in the same order
    pub fn get_all_todo_items<S: AppointmentSource + ?Sized>(source: &S) -> Vec<TodoItem> {
        source.with_properties()
            .into_iter()
            .filter(|(_, props)| props.is_task())
            .map(|(appt, props)| TodoItem::from_appointment(appt, props))
            .collect()
    }

    /// Overwrite the backing file with `items`.
    ///
    /// Returns whether this succeeded. Failures are only logged
    pub fn save_todo_items(&self, items: &[TodoItem]) -> bool {
        let path = &self.backing_file;
        let file = match std::fs::File::create(path) {
            Err(err) => {
                log::warn!("Unable to save file {:?}: {}", path, err);
                return false;
            },
            Ok(f) => f,
        };

        let mut writer = BufWriter::new(file);
        if let Err(err) = serde_json::to_writer_pretty(&mut writer, items) {
            log::warn!("Unable to serialize todo items: {}", err);
            return false;
        };
        if let Err(err) = writer.flush() {
            log::warn!("Unable to save file {:?}: {}", path, err);
            return false;
        }

        log::debug!("Saved {} todo items to {:?}", items.len(), path);
        true
    }

    /// Read the backing file.
    ///
    /// Returns an empty list if it does not exist or cannot be read
    pub fn load_todo_items(&self) -> Vec<TodoItem> {
        let path = &self.backing_file;
        let file = match std::fs::File::open(path) {
            Err(err) => {
                log::debug!("Unable to open file {:?}: {}", path, err);
                return Vec::new();
            },
            Ok(f) => f,
        };

        match serde_json::from_reader(BufReader::new(file)) {
            Ok(items) => items,
            Err(err) => {
                log::warn!("Invalid todo file {:?}: {}. Using an empty todo list", path, err);
                Vec::new()
            },
        }
    }

    /// Set the completion flag of an item, directly in the backing file.
    ///
    /// This does not touch the appointment store. Returns whether the item was found and saved
    pub fn update_completion_status(&self, id: &ItemId, is_completed: bool) -> bool {
        let mut items = self.load_todo_items();
        match items.iter_mut().find(|item| &item.appointment_id == id) {
            None => {
                log::debug!("No todo item for {} in {:?}", id, self.backing_file);
                return false;
            },
            Some(item) => item.is_completed = is_completed,
        };
        self.save_todo_items(&items)
    }
}
