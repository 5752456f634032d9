//! Calendar appointments (dated events and tasks alike)

use chrono::{Duration, Local, NaiveDate, NaiveDateTime};

use crate::color::Background;
use crate::item::ItemId;

/// A calendar entry
///
/// Whether it is an event or a task is not part of the appointment itself, but of its [`Properties`](crate::item::Properties)
#[derive(Clone, Debug, PartialEq)]
pub struct Appointment {
    id: ItemId,
    start: NaiveDateTime,
    end: NaiveDateTime,
    subject: String,
    background: Background,
}

impl Appointment {
    /// Create a brand new appointment.
    /// This will pick a new (random) ID.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime, subject: String, background: Background) -> Self {
        Self::new_with_id(ItemId::random(), start, end, subject, background)
    }

    /// Create an appointment instance that already has an identity (e.g. because it is read from a file)
    pub fn new_with_id(id: ItemId, start: NaiveDateTime, end: NaiveDateTime, subject: String, background: Background) -> Self {
        Self { id, start, end, subject, background }
    }

    /// Create a placeholder appointment for a task that has no date.
    /// It spans one hour from now, but these times are never displayed
    pub fn new_placeholder(subject: String) -> Self {
        let now = Local::now().naive_local();
        Self::new(now, now + Duration::hours(1), subject, Background::default())
    }

    pub fn id(&self) -> &ItemId                 { &self.id          }
    pub fn start(&self) -> &NaiveDateTime       { &self.start       }
    pub fn end(&self) -> &NaiveDateTime         { &self.end         }
    pub fn subject(&self) -> &str               { &self.subject     }
    pub fn background(&self) -> &Background     { &self.background  }

    /// Replace every user-editable field at once
    pub fn set_details(&mut self, start: NaiveDateTime, end: NaiveDateTime, subject: String, background: Background) {
        self.start = start;
        self.end = end;
        self.subject = subject;
        self.background = background;
    }

    /// Whether this appointment spans the given day (both ends included).
    /// Only calendar dates are compared, not the time of day
    pub fn occurs_on(&self, date: NaiveDate) -> bool {
        self.start.date() <= date && self.end.date() >= date
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Palette;

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd(2024, 5, day).and_hms(hour, 0, 0)
    }

    #[test]
    fn occurs_on_compares_dates_only() {
        let appt = Appointment::new(at(1, 23), at(3, 1), "Trip".to_string(), Palette::Teal.into());

        assert!(appt.occurs_on(NaiveDate::from_ymd(2024, 5, 1)));
        assert!(appt.occurs_on(NaiveDate::from_ymd(2024, 5, 2)));
        assert!(appt.occurs_on(NaiveDate::from_ymd(2024, 5, 3)));
        assert!(appt.occurs_on(NaiveDate::from_ymd(2024, 4, 30)) == false);
        assert!(appt.occurs_on(NaiveDate::from_ymd(2024, 5, 4)) == false);
    }

    #[test]
    fn placeholder_lasts_one_hour() {
        let appt = Appointment::new_placeholder("Buy milk".to_string());
        assert_eq!(*appt.end() - *appt.start(), Duration::hours(1));
        assert_eq!(appt.background(), &Background::default());
    }

    #[test]
    fn set_details_keeps_the_identity() {
        let mut appt = Appointment::new(at(1, 9), at(1, 10), "Standup".to_string(), Palette::Blue.into());
        let id = *appt.id();
        appt.set_details(at(2, 9), at(2, 11), "Planning".to_string(), Palette::Pink.into());

        assert_eq!(appt.id(), &id);
        assert_eq!(appt.subject(), "Planning");
        assert_eq!(appt.start(), &at(2, 9));
        assert_eq!(appt.background(), &Background::from(Palette::Pink));
    }
}
