//! The entry point for UI code
//!
//! A [`Coordinator`] validates user requests, applies them to the [`AppointmentStore`], and keeps the todo
//! mirror file in line with the store after every change.

use std::collections::HashMap;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};

use crate::appointment::Appointment;
use crate::change::ChangeReceiver;
use crate::color::Background;
use crate::config;
use crate::error::{Result, ValidationError};
use crate::item::{ItemId, Properties};
use crate::store::AppointmentStore;
use crate::todo::{TodoFilter, TodoItem, TodoProjection};


/// Check that a subject and a time range can be stored
pub fn validate(subject: &str, start: &NaiveDateTime, end: &NaiveDateTime) -> std::result::Result<(), ValidationError> {
    validate_subject(subject)?;
    if end <= start {
        return Err(ValidationError::EndNotAfterStart { start: *start, end: *end });
    }
    Ok(())
}

fn validate_subject(subject: &str) -> std::result::Result<(), ValidationError> {
    if subject.trim().is_empty() {
        return Err(ValidationError::EmptySubject);
    }
    Ok(())
}


/// Validated, consistency-preserving access to events and todo items
#[derive(Debug)]
pub struct Coordinator {
    store: AppointmentStore,
    todos: TodoProjection,

    /// Appointments that have a date, built on first access and dropped after every change
    events_with_dates: Option<Vec<Appointment>>,
}

impl Coordinator {
    pub fn new(store: AppointmentStore, todos: TodoProjection) -> Self {
        Self { store, todos, events_with_dates: None }
    }

    /// Load (or start) the store and the todo mirror located in `data_dir`
    pub fn open(data_dir: &Path) -> Result<Self> {
        let store = AppointmentStore::from_file(&config::events_file(data_dir))?;
        let todos = TodoProjection::new(&config::todos_file(data_dir));
        Ok(Self::new(store, todos))
    }

    /// Same as [`Self::open`], in the directory set in [`config::DATA_DIR`]
    pub fn open_default() -> Result<Self> {
        Self::open(&config::data_dir())
    }

    pub fn store(&self) -> &AppointmentStore        { &self.store }
    pub fn todo_projection(&self) -> &TodoProjection { &self.todos }

    /// Receive a notification every time an appointment is added, removed or modified
    pub fn subscribe(&self) -> ChangeReceiver {
        self.store.subscribe()
    }

    /// Called after every mutation, whether it was fully saved or not
    fn refresh_views(&mut self) {
        self.events_with_dates = None;
        let items = TodoProjection::get_all_todo_items(&self.store);
        self.todos.save_todo_items(&items);
    }


    /// Create an event or a task.
    ///
    /// Fails without changing anything if the subject is empty or if `end` is not after `start`
    pub fn add_new_event(&mut self, start: NaiveDateTime, end: NaiveDateTime, subject: String, background: Background,
                         is_completed: bool, has_date: bool, is_event: bool) -> Result<ItemId>
    {
        validate(&subject, &start, &end)?;

        let result = self.store.add(start, end, subject, background, is_completed, is_event)
            .and_then(|id| {
                // `add` always creates dated items
                if has_date == false {
                    self.store.update_properties(&id, is_completed, has_date, is_event)?;
                }
                Ok(id)
            });
        self.refresh_views();
        result
    }

    /// Create a task that has no date
    pub fn add_task_without_date(&mut self, subject: String) -> Result<ItemId> {
        validate_subject(&subject)?;

        let result = self.store.add_task_without_date(subject);
        self.refresh_views();
        result
    }

    /// Delete an appointment, its properties and its todo item.
    ///
    /// Returns whether it existed
    pub fn remove_event(&mut self, id: &ItemId) -> Result<bool> {
        let result = self.store.remove(id);
        if let Ok(false) = result {
            return result;
        }
        self.refresh_views();
        result
    }

    /// Change the details of an appointment.
    ///
    /// Returns whether it existed. Invalid requests are rejected even for unknown appointments
    pub fn update_event(&mut self, id: &ItemId, start: NaiveDateTime, end: NaiveDateTime, subject: String, background: Background) -> Result<bool> {
        validate(&subject, &start, &end)?;

        let result = self.store.update(id, start, end, subject, background);
        if let Ok(false) = result {
            return result;
        }
        self.refresh_views();
        result
    }

    /// Overwrite every property of an appointment
    pub fn update_event_properties(&mut self, id: &ItemId, is_completed: bool, has_date: bool, is_event: bool) -> Result<()> {
        let result = self.store.update_properties(id, is_completed, has_date, is_event);
        self.refresh_views();
        result
    }

    /// Mark an appointment as completed (or not)
    pub fn update_completion_status(&mut self, id: &ItemId, is_completed: bool) -> Result<()> {
        let result = self.store.update_completion_status(id, is_completed);
        self.refresh_views();
        result
    }

    /// Flip the completion flag of an appointment, and return its new value
    pub fn toggle_completion(&mut self, id: &ItemId) -> Result<bool> {
        let completed = self.store.get_properties(id).is_completed == false;
        self.update_completion_status(id, completed)?;
        Ok(completed)
    }

    /// Write both files again
    pub fn save_changes(&mut self) -> Result<()> {
        let result = self.store.save_changes();
        self.refresh_views();
        result
    }


    /// Returns every appointment, in insertion order
    pub fn get_all_events(&self) -> &[Appointment] {
        self.store.get_all()
    }

    pub fn get_event(&self, id: &ItemId) -> Option<&Appointment> {
        self.store.get(id)
    }

    pub fn get_events_by_date(&self, date: NaiveDate) -> Vec<&Appointment> {
        self.store.get_by_date(date)
    }

    pub fn get_properties(&self, id: &ItemId) -> Properties {
        self.store.get_properties(id)
    }

    pub fn get_completion_status(&self) -> HashMap<ItemId, bool> {
        self.store.get_completion_status()
    }

    /// Returns the appointments that should be shown on the calendar, i.e. the ones that have a date
    pub fn events_with_dates(&mut self) -> &[Appointment] {
        if self.events_with_dates.is_none() {
            let store = &self.store;
            let dated = store.get_all().iter()
                .filter(|appt| store.get_properties(appt.id()).has_date)
                .cloned()
                .collect();
            self.events_with_dates = Some(dated);
        }
        self.events_with_dates.as_deref().unwrap_or(&[])
    }

    /// Returns the todo list, as computed from the store
    pub fn get_all_todo_items(&self) -> Vec<TodoItem> {
        TodoProjection::get_all_todo_items(&self.store)
    }

    /// Returns the todo items that match `filter`
    pub fn get_todo_items(&self, filter: TodoFilter) -> Vec<TodoItem> {
        filter.apply(self.get_all_todo_items())
    }

    /// Returns the todo list as it is currently saved in the mirror file
    pub fn load_mirrored_todo_items(&self) -> Vec<TodoItem> {
        self.todos.load_todo_items()
    }
}
