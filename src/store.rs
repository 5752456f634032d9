//! This module provides the canonical, file-backed list of appointments

use std::collections::{HashMap, HashSet};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime};

use crate::appointment::Appointment;
use crate::change::{Change, ChangeNotifier, ChangeReceiver};
use crate::color::Background;
use crate::error::Result;
use crate::item::{ItemId, Properties};
use crate::record::AppointmentRecord;
use crate::traits::AppointmentSource;


/// Stores every appointment (events and tasks alike) and their properties, in a local JSON file
///
/// Every mutating call rewrites the whole backing file. If that write fails, the error is returned but the
/// in-memory change is kept, so memory and disk differ until the next successful save.
#[derive(Debug)]
pub struct AppointmentStore {
    backing_file: PathBuf,
    appointments: Vec<Appointment>,
    properties: HashMap<ItemId, Properties>,
    notifier: ChangeNotifier,
}

impl AppointmentStore {
    /// Initialize a store from the content of its backing file if it exists, or as an empty store otherwise.
    ///
    /// Returns an error if the file exists but cannot be read or parsed
    pub fn from_file(path: &Path) -> Result<Self> {
        let mut store = Self::new(path);
        if path.exists() == false {
            log::debug!("No appointment file at {:?}, starting with an empty store", path);
            return Ok(store);
        }

        let file = std::fs::File::open(path)?;
        let records: Vec<AppointmentRecord> = serde_json::from_reader(BufReader::new(file))?;

        let mut seen = HashSet::new();
        for record in records {
            let (mut appointment, properties) = record.into_appointment();
            if seen.insert(*appointment.id()) == false {
                log::warn!("Duplicate appointment id {} in {:?}, assigning a new one", appointment.id(), path);
                appointment = Appointment::new(*appointment.start(), *appointment.end(), appointment.subject().to_string(), appointment.background().clone());
                seen.insert(*appointment.id());
            }
            store.properties.insert(*appointment.id(), properties);
            store.appointments.push(appointment);
        }
        log::info!("Loaded {} appointments from {:?}", store.appointments.len(), path);

        Ok(store)
    }

    /// Initialize an empty store. Nothing is written until the first change
    pub fn new(path: &Path) -> Self {
        Self {
            backing_file: PathBuf::from(path),
            appointments: Vec::new(),
            properties: HashMap::new(),
            notifier: ChangeNotifier::new(),
        }
    }

    /// The path to the backing file
    pub fn backing_file(&self) -> &Path {
        &self.backing_file
    }

    /// Store the current content to the backing file
    fn save_to_file(&self) -> Result<()> {
        let records: Vec<AppointmentRecord> = self.appointments.iter()
            .map(|appt| AppointmentRecord::from_appointment(appt, self.get_properties(appt.id())))
            .collect();

        let file = std::fs::File::create(&self.backing_file)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, &records)?;
        writer.flush()?;

        log::debug!("Saved {} appointments to {:?}", records.len(), self.backing_file);
        Ok(())
    }

    /// Receive a [`Change`] every time an appointment is added, removed or modified
    pub fn subscribe(&self) -> ChangeReceiver {
        self.notifier.subscribe()
    }

    /// Returns every appointment, in insertion order
    pub fn get_all(&self) -> &[Appointment] {
        &self.appointments
    }

    /// Returns a particular appointment
    pub fn get(&self, id: &ItemId) -> Option<&Appointment> {
        self.appointments.iter().find(|appt| appt.id() == id)
    }

    fn get_mut(&mut self, id: &ItemId) -> Option<&mut Appointment> {
        self.appointments.iter_mut().find(|appt| appt.id() == id)
    }

    /// Append a new dated appointment, and save the store.
    ///
    /// This does not validate anything, see [`Coordinator`](crate::Coordinator) for this
    pub fn add(&mut self, start: NaiveDateTime, end: NaiveDateTime, subject: String, background: Background, is_completed: bool, is_event: bool) -> Result<ItemId> {
        let appointment = Appointment::new(start, end, subject, background);
        let properties = Properties::new(is_completed, true, is_event);
        self.insert(appointment, properties)
    }

    /// Append a task that has no date, and save the store.
    ///
    /// Its times are placeholders (now and one hour later) that are never displayed
    pub fn add_task_without_date(&mut self, subject: String) -> Result<ItemId> {
        let appointment = Appointment::new_placeholder(subject);
        self.insert(appointment, Properties::dateless_task())
    }

    fn insert(&mut self, appointment: Appointment, properties: Properties) -> Result<ItemId> {
        let id = *appointment.id();
        log::debug!("Adding {} ({:?})", id, appointment.subject());
        self.properties.insert(id, properties);
        self.appointments.push(appointment);
        self.notifier.notify(Change::Added(id));
        self.save_to_file()?;
        Ok(id)
    }

    /// Remove an appointment and its properties, and save the store.
    ///
    /// Returns whether something was removed. Removing an unknown appointment is not an error
    pub fn remove(&mut self, id: &ItemId) -> Result<bool> {
        let position = match self.appointments.iter().position(|appt| appt.id() == id) {
            None => {
                log::debug!("Not removing {}: no such appointment", id);
                return Ok(false);
            },
            Some(p) => p,
        };

        self.appointments.remove(position);
        self.properties.remove(id);
        self.notifier.notify(Change::Removed(*id));
        self.save_to_file()?;
        Ok(true)
    }

    /// Change the details of an appointment, and save the store.
    ///
    /// Returns whether the appointment exists. Updating an unknown appointment is not an error
    pub fn update(&mut self, id: &ItemId, start: NaiveDateTime, end: NaiveDateTime, subject: String, background: Background) -> Result<bool> {
        match self.get_mut(id) {
            None => {
                log::debug!("Not updating {}: no such appointment", id);
                return Ok(false);
            },
            Some(appt) => appt.set_details(start, end, subject, background),
        };

        self.notifier.notify(Change::Updated(*id));
        self.save_to_file()?;
        Ok(true)
    }

    /// Set (or create) the properties record of an appointment, and save the store
    pub fn update_properties(&mut self, id: &ItemId, is_completed: bool, has_date: bool, is_event: bool) -> Result<()> {
        self.set_properties(id, Properties::new(is_completed, has_date, is_event))
    }

    /// Set the completion flag of an appointment, and save the store.
    ///
    /// If the appointment has no properties record yet, the other flags get their default values
    pub fn update_completion_status(&mut self, id: &ItemId, is_completed: bool) -> Result<()> {
        let mut properties = self.get_properties(id);
        properties.is_completed = is_completed;
        self.set_properties(id, properties)
    }

    fn set_properties(&mut self, id: &ItemId, properties: Properties) -> Result<()> {
        if self.get(id).is_none() {
            log::debug!("Setting properties of {}, which is not a known appointment", id);
        }
        self.properties.insert(*id, properties);
        if self.get(id).is_some() {
            self.notifier.notify(Change::Updated(*id));
        }
        self.save_to_file()
    }

    /// Returns the properties of an appointment.
    ///
    /// Appointments without any record are considered as dated, uncompleted events (see [`Properties::default`])
    pub fn get_properties(&self, id: &ItemId) -> Properties {
        self.properties.get(id).copied().unwrap_or_default()
    }

    /// Returns the completion flag of every appointment that has a properties record
    pub fn get_completion_status(&self) -> HashMap<ItemId, bool> {
        self.properties.iter()
            .map(|(id, props)| (*id, props.is_completed))
            .collect()
    }

    /// Returns the appointments that span the given date (both ends included, time of day is ignored)
    pub fn get_by_date(&self, date: NaiveDate) -> Vec<&Appointment> {
        self.appointments.iter()
            .filter(|appt| appt.occurs_on(date))
            .collect()
    }

    /// Write the current content to the backing file
    pub fn save_changes(&self) -> Result<()> {
        self.save_to_file()
    }
}

impl AppointmentSource for AppointmentStore {
    fn appointments(&self) -> &[Appointment] {
        self.get_all()
    }

    fn properties_of(&self, id: &ItemId) -> Properties {
        self.get_properties(id)
    }
}
