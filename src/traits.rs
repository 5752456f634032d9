//! Traits used by the projections built on top of the appointment store

use crate::appointment::Appointment;
use crate::item::{ItemId, Properties};

/// A read-only source of appointments and of their properties
pub trait AppointmentSource {
    /// Returns every appointment, in insertion order
    fn appointments(&self) -> &[Appointment];

    /// Returns the properties of an appointment, or the defaults if it has none
    fn properties_of(&self, id: &ItemId) -> Properties;

    /// Returns every appointment together with its properties
    fn with_properties(&self) -> Vec<(&Appointment, Properties)> {
        self.appointments()
            .iter()
            .map(|appt| (appt, self.properties_of(appt.id())))
            .collect()
    }
}
